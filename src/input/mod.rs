//! Input processing module
//! Handles input folder validation, CSV discovery and line reading

pub mod reader;
pub mod scanner;
