//! Seed data for the rule repository.
//!
//! Rules can be seeded from the built-in set or from a YAML file; either
//! way the repository refreshes derived tags as the rules become canonical.

mod loader;
mod seed;

pub use loader::load_rules;
pub use seed::builtin_rules;
