//! Core SEPA types, schema version resolution, field validation and
//! value formatting.
//!
//! Everything here is independent of XML serialization; the `pain`
//! module builds on top of it.

mod builder;
mod error;
mod format;
mod types;
mod validation;
mod version;

pub use builder::*;
pub use error::*;
pub use format::*;
pub use types::*;
pub use validation::*;
pub use version::*;
