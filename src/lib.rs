//! CSV converter library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod processing;

pub use config::Config;
pub use error::{ConversorError, Result};
pub use processing::{convert_line, BatchConverter};
