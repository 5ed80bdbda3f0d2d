// Crate root library declaration and module exports.
pub mod agenda;
pub mod cli;
pub mod config;
pub mod context;
pub mod model;
pub mod storage;
