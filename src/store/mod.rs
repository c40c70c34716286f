//! In-memory rule repository, listing filters and id allocation.

mod filter;
mod id;
mod repository;

pub use filter::{CategoryFilter, RuleFilter, UseFilter};
pub use id::next_id;
pub use repository::RuleStore;
