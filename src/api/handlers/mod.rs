//! REST API handlers organized by domain.

pub mod docs;
pub mod evidences;
pub mod health;

pub use docs::*;
pub use evidences::*;
pub use health::*;
