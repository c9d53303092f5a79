//! fruit-cli - file-based front end for the fruit-rage search.

pub mod config;
pub mod run;

pub use config::Config;
pub use run::run;
