use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Response;

use super::TestApp;

/// POST a form to `/bot`.
pub async fn post_message(app: &TestApp, fields: &[(&str, &str)]) -> Response {
    app.client
        .post(app.url("/bot"))
        .form(fields)
        .send()
        .await
        .expect("Failed to send webhook request")
}

/// POST a form with only `Body` and return the single reply text.
pub async fn post_body(app: &TestApp, body: &str) -> String {
    let response = post_message(app, &[("Body", body)]).await;
    assert_eq!(response.status(), 200);

    let xml = response.text().await.unwrap();
    let messages = parse_messages(&xml);
    assert_eq!(messages.len(), 1, "expected exactly one <Message> in {xml}");
    messages.into_iter().next().unwrap()
}

/// Unescaped text of each `<Message>` element in a TwiML document.
pub fn parse_messages(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut messages = Vec::new();
    let mut current: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) if e.name().as_ref() == b"Message" => {
                current = Some(String::new());
            }
            Ok(Event::Text(e)) => {
                if let Some(text) = current.as_mut() {
                    text.push_str(&e.unescape().unwrap());
                }
            }
            Ok(Event::End(ref e)) if e.name().as_ref() == b"Message" => {
                messages.extend(current.take());
            }
            Ok(Event::Eof) => break,
            Err(e) => panic!("XML parsing error: {}", e),
            _ => {}
        }
    }

    messages
}
