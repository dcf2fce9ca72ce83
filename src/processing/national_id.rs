//! CPF punctuation

use crate::error::FieldError;

pub const NATIONAL_ID_LENGTH: usize = 11;

/// Punctuate an 11-character CPF as `DDD.DDD.DDD-DD`.
///
/// Only the length is checked; the characters are copied as they are.
pub fn format_national_id(value: &str) -> Result<String, FieldError> {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() != NATIONAL_ID_LENGTH {
        return Err(FieldError::NationalIdLength {
            value: value.to_string(),
            length: chars.len(),
        });
    }

    let part = |from: usize, to: usize| chars[from..to].iter().collect::<String>();
    Ok(format!(
        "{}.{}.{}-{}",
        part(0, 3),
        part(3, 6),
        part(6, 9),
        part(9, NATIONAL_ID_LENGTH)
    ))
}
