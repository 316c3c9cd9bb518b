// Resume CRUD: domain types, the store boundary with its Postgres and
// in-memory implementations, and the HTTP handlers.

pub mod handlers;
pub mod memory;
pub mod models;
pub mod postgres;
pub mod store;
