//! Schema-safe parsers from raw upstream JSON to normalized datasets.
//!
//! Each parser is pure and all-or-nothing: a missing list field or a missing
//! required field on any row collapses the whole dataset to `Unavailable`.

pub mod dexs;
pub mod fees;
pub mod yields;
