//! Record decoders
//!
//! Turns aggregated raw records into typed entities.

use crate::error::{Error, Result};
use crate::types::RawRecord;
use serde::de::DeserializeOwned;

/// Decode a single record at position `index` of the aggregate
pub fn decode_record<T: DeserializeOwned>(index: usize, record: RawRecord) -> Result<T> {
    serde_json::from_value(record).map_err(|e| Error::record_decode(index, e.to_string()))
}

/// Decode every record, stopping at the first one that does not fit `T`
///
/// The reported index is the record's position in `records`, not in the
/// page it came from.
pub fn decode_all<T: DeserializeOwned>(records: Vec<RawRecord>) -> Result<Vec<T>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| decode_record(index, record))
        .collect()
}
