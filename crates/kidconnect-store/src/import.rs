//! Parsing of uploaded record lists.

use crate::error::StoreError;
use crate::Result;
use serde::de::DeserializeOwned;

/// Parse a JSON or JSON5 array of records.
///
/// Used by the upload workflow before `replace_all`. Sheet column names
/// (`Parent`, `PhoneNumber`, `Date`, `Message`, ...) are accepted by the
/// record types themselves.
pub fn parse_records<T: DeserializeOwned>(content: &str) -> Result<Vec<T>> {
    json5::from_str(content).map_err(|e| StoreError::Parse(e.to_string()))
}
