//! Entity decoder module
//!
//! # Overview
//!
//! Records arrive from the collection fetcher as raw JSON values. The decode
//! module maps them onto a typed schema one by one; a record that does not
//! fit aborts the whole batch with its position in the aggregate.

mod decoders;

pub use decoders::{decode_all, decode_record};

#[cfg(test)]
mod tests;
