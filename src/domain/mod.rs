//! Domain layer types and invariants.

pub mod appointments;
pub mod blogs;
pub mod contact;
pub mod site;
pub mod validation;
