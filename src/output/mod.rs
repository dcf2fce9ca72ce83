//! Output module
//! Writes converted files and renders the run summary

pub mod formatter;
pub mod report;
pub mod writer;
