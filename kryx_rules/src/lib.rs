//! # Kryx Rules
//!
//! Rules tables and the derived-attributes engine for Kryx RPG actors.
//! The host owns raw actor records; this crate reads them and returns a freshly
//! computed overlay (saves, skills, initiative, resource pools, encumbrance,
//! experience). Nothing here performs I/O or keeps state between calls.

pub mod derived;
pub mod entities;
pub mod error;
pub mod items;
pub mod mechanics;
pub mod rules;

pub use derived::*;
pub use entities::*;
pub use error::*;
pub use items::*;
pub use mechanics::*;
pub use rules::*;
