//! fruit-policy - picks a search depth from board size, clock and fruit count.
//!
//! The built-in table is also shipped as `config/depth_policy.toml` so it can
//! be tuned without a rebuild.

pub mod error;
pub mod table;

use once_cell::sync::Lazy;

pub use error::{PolicyError, Result};
pub use table::{Band, DepthPolicy, Emergency, FruitLimit, Rule};

static STANDARD: Lazy<DepthPolicy> = Lazy::new(DepthPolicy::default);

/// The built-in table.
pub fn standard() -> &'static DepthPolicy {
    &STANDARD
}

/// [`DepthPolicy::choose_depth`] against the built-in table.
pub fn choose_depth(size: usize, time: f64, fruits: usize) -> Result<u32> {
    STANDARD.choose_depth(size, time, fruits)
}
