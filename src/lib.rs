pub mod db;

pub mod accounts;
pub mod debts;
pub mod inclusion;
pub mod investments;
pub mod settings;

pub mod constants;
pub mod errors;
pub mod networth;
pub mod schema;

pub use errors::{Error, Result};
pub use networth::*;
