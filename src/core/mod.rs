//! Shared primitives: errors, storage access, constants, and paths.

pub mod db;
pub mod error;
pub mod output;
pub mod schemas;
pub mod store;
