//! Positional record splitting and per-line conversion

use crate::error::FieldError;
use crate::processing::date::convert_date;
use crate::processing::national_id::format_national_id;

pub const FIELD_SEPARATOR: char = ',';
pub const FIELD_COUNT: usize = 4;

/// One input row split into its positional fields.
///
/// Splitting is a plain `,` split with no quoting, so a field containing a
/// comma shifts every field after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    pub name: &'a str,
    pub birth_date: &'a str,
    pub email: &'a str,
    pub national_id: &'a str,
}

impl<'a> Record<'a> {
    /// Split a line into a record. Fields past the fourth are ignored.
    pub fn parse(line: &'a str) -> Result<Self, FieldError> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() < FIELD_COUNT {
            return Err(FieldError::MissingField(fields.len()));
        }

        Ok(Self {
            name: fields[0],
            birth_date: fields[1],
            email: fields[2],
            national_id: fields[3],
        })
    }

    /// Apply the field rules and join the result with commas.
    pub fn convert(&self) -> Result<String, FieldError> {
        let name = self.name.to_uppercase();
        let birth_date = convert_date(self.birth_date)?;
        let national_id = format_national_id(self.national_id)?;

        Ok(format!(
            "{name}{sep}{birth_date}{sep}{email}{sep}{national_id}",
            sep = FIELD_SEPARATOR,
            email = self.email,
        ))
    }
}

/// Convert one data line into the output layout, without a trailing newline.
pub fn convert_line(line: &str) -> Result<String, FieldError> {
    Record::parse(line)?.convert()
}
