pub mod auth;
pub mod cli;
pub mod db;
pub mod errors;
pub mod models;
pub mod repl;
