// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod capture;
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod merge;
pub mod specs;

pub mod file;
pub mod progress;
pub mod runner;
pub mod store;

pub use error::{ConfigError, Error, Result};
