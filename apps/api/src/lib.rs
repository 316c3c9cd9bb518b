pub mod comments;
pub mod config;
pub mod db;
pub mod draft;
pub mod errors;
pub mod identity;
pub mod intake;
pub mod models;
pub mod render;
pub mod resume;
pub mod routes;
pub mod share;
pub mod state;
