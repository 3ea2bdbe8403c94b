//! Domain models for the evidence mock service
//!
//! Evidence records, the templates they are generated from, and the catalog
//! that maps control IDs to templates.

mod catalog;
mod evidence;
mod types;

pub use catalog::*;
pub use evidence::*;
pub use types::*;
