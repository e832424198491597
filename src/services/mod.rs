pub mod relay;
pub mod sessions;
