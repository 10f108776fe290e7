//! Clients for the public HTTP APIs used by fun commands.

pub mod dog;
pub mod numbers;
