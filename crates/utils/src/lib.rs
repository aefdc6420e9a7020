pub mod error;
pub mod response;
pub mod settings;
pub mod utils;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
