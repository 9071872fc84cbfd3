//! Relational persistence for roster records: SeaORM table entities, the
//! gateway-facing record structs and the store functions that own id and
//! timestamp assignment.

pub mod errors;
pub mod db;
pub mod record;
pub mod student;
pub mod employee;

#[cfg(test)]
mod tests;
