//! Persistence model for phone records: the `phone` entity, the field
//! validation applied to incoming candidates, and the store operations that
//! run inside a caller-provided unit of work.

pub mod errors;
pub mod db;
pub mod phone;

#[cfg(test)]
mod tests;
