//! Custom serde module implementations.

pub mod uri;
