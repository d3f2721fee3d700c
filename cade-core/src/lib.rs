pub mod command_stream;
pub mod error;
pub mod output_macros;
pub mod user_paths;

pub use error::{CadeError, Result};
