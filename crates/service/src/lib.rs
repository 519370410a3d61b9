//! Service layer providing the phone CRUD operations on top of models.
//! - Runs every operation as one unit of work (a database transaction).
//! - Reuses validation and entity definitions in `models` crate.
//! - Turns store absence into typed errors the boundary can map.

pub mod errors;
pub mod phone;
#[cfg(test)]
pub mod test_support;
