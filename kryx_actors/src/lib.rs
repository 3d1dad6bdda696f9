//! # Kryx Actors
//!
//! The host side of the Kryx rules engine. An [`ActorStore`] owns raw actor
//! records, rebuilds each actor's derived overlay whenever its record changes,
//! and runs the gameplay workflows that spend and recover resources and health.
//!
//! ## Core Components
//!
//! - **store**: actor documents keyed by [`ActorId`], with the update API
//! - **workflows**: resource spending, superpower use, damage, rests and second wind
//!
//! Every workflow mutates the raw record through [`ActorStore::update`], so the
//! overlay can never go stale.

pub mod error;
pub mod store;
pub mod workflows;

pub use error::*;
pub use store::*;
pub use workflows::*;
