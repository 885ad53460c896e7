#![warn(missing_docs)]
//! Demonstration server for the product interest ranking service: wires the
//! SQLite repositories and the Axum API together behind a CLI and a layered
//! configuration, with an optional startup seeding routine.

pub mod impls;

pub mod seed;

mod cli;
pub use cli::Cli;

mod config;
pub use self::config::AppConfig;
