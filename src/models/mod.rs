pub mod book;
#[cfg(feature = "server")]
pub mod config;
