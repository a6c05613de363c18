//! Point-of-interest lookup
//!
//! This module maps hobby categories to OpenStreetMap tag filters and
//! queries the Overpass interpreter for matching places. Per-tag failures
//! are collected rather than propagated, so a caller can tell "no POIs
//! exist here" apart from "every upstream call failed".

pub mod error;
pub mod hobby;
pub mod overpass;

pub use error::{PoiError, Result};
pub use hobby::{DEFAULT_TAG, FilterTag, tags_for_hobby};
pub use overpass::{OverpassClient, PoiFetchReport, TagOutcome};
