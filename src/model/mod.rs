//! Domain models.
//!
//! Domain models are converted from entity models at the repository boundary so services and
//! commands never depend on database representations.

pub mod module;
pub mod points;
