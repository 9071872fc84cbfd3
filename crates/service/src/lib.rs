//! Service layer reconciling API models with persisted records.
//! - `record` holds the kind-independent pieces: gateway trait, transform
//!   trait and the reconciliation service.
//! - `student` and `employee` plug their models, transforms and SeaORM
//!   gateways into that pattern.

pub mod errors;
pub mod lookup;
pub mod format;
pub mod record;
pub mod student;
pub mod employee;
#[cfg(test)]
pub mod test_support;

pub use lookup::Lookup;
