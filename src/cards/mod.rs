//! Card system: development cards, nobles, and their registry.
//!
//! ## Key Types
//!
//! - `CardId` / `NobleId`: identifiers that move between containers
//! - `DevelopmentCard`: immutable card definition (tier, cost, bonus, prestige)
//! - `Noble`: immutable noble definition (bonus requirements, prestige)
//! - `CardRegistry`: the arena resolving ids to definitions
//!
//! `standard_registry()` builds the stock 90-card, 10-noble catalog.

pub mod catalog;
pub mod definition;
pub mod noble;
pub mod registry;

pub use catalog::standard_registry;
pub use definition::{CardId, DevelopmentCard, Tier};
pub use noble::{Noble, NobleId};
pub use registry::CardRegistry;
