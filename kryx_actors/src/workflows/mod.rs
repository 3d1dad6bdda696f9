//! Gameplay workflows that change an actor's record.

mod health;
mod rest;
mod superpower;

pub use health::*;
pub use rest::*;
pub use superpower::*;
