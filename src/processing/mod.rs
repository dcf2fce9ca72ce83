//! Processing module
//! Field-level conversion rules and the batch conversion loop

pub mod converter;
pub mod date;
pub mod national_id;
pub mod record;

pub use converter::BatchConverter;
pub use record::convert_line;
