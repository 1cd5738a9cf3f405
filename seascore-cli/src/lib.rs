pub mod error;
pub mod output;

pub use error::{CliError, Result};
