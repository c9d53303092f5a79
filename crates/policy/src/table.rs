//! Depth lookup table.
//!
//! Bands are keyed by board size. Inside a band the first rule whose time
//! threshold (strictly exceeded) and optional fruit limit both hold picks
//! the depth; otherwise the band's fallback applies. The emergency rule runs
//! before any band and always wins.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{PolicyError, Result};

/// `fruits < size² · numerator / denominator`, with integer division.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FruitLimit {
    pub numerator: usize,
    pub denominator: usize,
}

impl FruitLimit {
    pub const fn new(numerator: usize, denominator: usize) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Evaluated in `u128`. A product past `u128::MAX` divided by any
    /// `usize` denominator still exceeds every `usize` fruit count.
    pub fn admits(&self, size: usize, fruits: usize) -> bool {
        let size = size as u128;
        match (size * size).checked_mul(self.numerator as u128) {
            Some(scaled) => (fruits as u128) < scaled / self.denominator as u128,
            None => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Remaining time must be strictly greater than this.
    pub min_time: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fruit_limit: Option<FruitLimit>,
    pub depth: u32,
}

impl Rule {
    fn new(min_time: f64, fruit_limit: Option<FruitLimit>, depth: u32) -> Self {
        Self {
            min_time,
            fruit_limit,
            depth,
        }
    }

    pub fn matches(&self, size: usize, time: f64, fruits: usize) -> bool {
        time > self.min_time
            && self
                .fruit_limit
                .map_or(true, |limit| limit.admits(size, fruits))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Band {
    /// Largest board size in this band; `None` for the final, open band.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<usize>,
    #[serde(default)]
    pub rules: Vec<Rule>,
    pub fallback: u32,
}

impl Band {
    fn new(max_size: Option<usize>, rules: Vec<Rule>, fallback: u32) -> Self {
        Self {
            max_size,
            rules,
            fallback,
        }
    }

    pub fn covers(&self, size: usize) -> bool {
        self.max_size.map_or(true, |max| size <= max)
    }

    pub fn depth_for(&self, size: usize, time: f64, fruits: usize) -> u32 {
        self.rules
            .iter()
            .find(|rule| rule.matches(size, time, fruits))
            .map_or(self.fallback, |rule| rule.depth)
    }
}

/// Forces a shallow search when the clock is nearly out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Emergency {
    pub small_board_max: usize,
    pub small_board_min_time: f64,
    pub large_board_min_time: f64,
    pub depth: u32,
}

impl Emergency {
    pub fn triggers(&self, size: usize, time: f64) -> bool {
        if size <= self.small_board_max {
            time < self.small_board_min_time
        } else {
            time < self.large_board_min_time
        }
    }
}

impl Default for Emergency {
    fn default() -> Self {
        Self {
            small_board_max: 6,
            small_board_min_time: 2.0,
            large_board_min_time: 5.0,
            depth: 1,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DepthPolicy {
    #[serde(default)]
    pub emergency: Emergency,
    pub bands: Vec<Band>,
}

impl DepthPolicy {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let policy: DepthPolicy = toml::from_str(text)?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PolicyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let policy = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), bands = policy.bands.len(), "Loaded depth table");
        Ok(policy)
    }

    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Structural checks: at least one band, sizes strictly ascending, the
    /// last band open-ended, every depth at least 1, finite thresholds.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: String| Err(PolicyError::InvalidTable { reason });

        if self.bands.is_empty() {
            return invalid("table has no bands".to_string());
        }
        if self.emergency.depth == 0 {
            return invalid("emergency depth must be at least 1".to_string());
        }
        if !self.emergency.small_board_min_time.is_finite()
            || !self.emergency.large_board_min_time.is_finite()
        {
            return invalid("emergency thresholds must be finite".to_string());
        }

        let last = self.bands.len() - 1;
        let mut previous: Option<usize> = None;
        for (i, band) in self.bands.iter().enumerate() {
            match (band.max_size, i == last) {
                (Some(_), true) => {
                    return invalid("the last band must not set max_size".to_string());
                }
                (None, false) => {
                    return invalid(format!("band {i} must set max_size"));
                }
                (Some(max), false) => {
                    if previous.is_some_and(|prev| max <= prev) {
                        return invalid(format!("band {i} max_size {max} is not ascending"));
                    }
                    previous = Some(max);
                }
                (None, true) => {}
            }
            if band.fallback == 0 {
                return invalid(format!("band {i} fallback depth must be at least 1"));
            }
            for rule in &band.rules {
                if rule.depth == 0 {
                    return invalid(format!("band {i} has a rule with depth 0"));
                }
                if !rule.min_time.is_finite() {
                    return invalid(format!("band {i} has a non-finite time threshold"));
                }
                if rule.fruit_limit.is_some_and(|limit| limit.denominator == 0) {
                    return invalid(format!("band {i} has a fruit limit with denominator 0"));
                }
            }
        }
        Ok(())
    }

    pub fn band_for(&self, size: usize) -> Option<&Band> {
        self.bands.iter().find(|band| band.covers(size))
    }

    /// Depth limit for a board of `size`, `time` seconds left and `fruits`
    /// fruits on the board.
    pub fn choose_depth(&self, size: usize, time: f64, fruits: usize) -> Result<u32> {
        if size == 0 {
            return Err(PolicyError::InvalidSize { size });
        }
        if !time.is_finite() || time < 0.0 {
            return Err(PolicyError::InvalidTime { time });
        }
        let capacity = size
            .checked_mul(size)
            .ok_or(PolicyError::InvalidSize { size })?;
        if fruits > capacity {
            return Err(PolicyError::TooManyFruits { fruits, capacity });
        }

        if self.emergency.triggers(size, time) {
            warn!(size, time, "Clock nearly out, forcing emergency depth");
            return Ok(self.emergency.depth);
        }

        let band = self.band_for(size).ok_or(PolicyError::NoBand { size })?;
        let depth = band.depth_for(size, time, fruits);
        debug!(size, time, fruits, max_size = ?band.max_size, depth, "Chose search depth");
        Ok(depth)
    }
}

impl Default for DepthPolicy {
    fn default() -> Self {
        let quarter = Some(FruitLimit::new(1, 4));
        let half = Some(FruitLimit::new(1, 2));
        let four_sevenths = Some(FruitLimit::new(4, 7));
        let tenth = Some(FruitLimit::new(1, 10));

        Self {
            emergency: Emergency::default(),
            bands: vec![
                Band::new(
                    Some(6),
                    vec![Rule::new(150.0, None, 6), Rule::new(30.0, None, 5)],
                    4,
                ),
                Band::new(
                    Some(7),
                    vec![Rule::new(130.0, None, 5), Rule::new(40.0, None, 4)],
                    3,
                ),
                Band::new(
                    Some(8),
                    vec![Rule::new(130.0, four_sevenths, 5), Rule::new(45.0, None, 4)],
                    3,
                ),
                Band::new(
                    Some(10),
                    vec![
                        Rule::new(155.0, four_sevenths, 5),
                        Rule::new(150.0, None, 4),
                        Rule::new(65.0, half, 4),
                    ],
                    3,
                ),
                Band::new(
                    Some(11),
                    vec![
                        Rule::new(240.0, half, 5),
                        Rule::new(120.0, None, 4),
                        Rule::new(55.0, None, 3),
                    ],
                    2,
                ),
                Band::new(
                    Some(12),
                    vec![
                        Rule::new(250.0, half, 5),
                        Rule::new(210.0, None, 4),
                        Rule::new(80.0, None, 3),
                    ],
                    2,
                ),
                Band::new(
                    Some(16),
                    vec![
                        Rule::new(260.0, None, 3),
                        Rule::new(100.0, quarter, 3),
                        Rule::new(10.0, None, 2),
                    ],
                    1,
                ),
                Band::new(
                    Some(20),
                    vec![Rule::new(235.0, four_sevenths, 3), Rule::new(50.0, None, 2)],
                    1,
                ),
                Band::new(
                    None,
                    vec![
                        Rule::new(250.0, quarter, 3),
                        Rule::new(140.0, tenth, 3),
                        Rule::new(180.0, None, 2),
                        Rule::new(150.0, half, 2),
                    ],
                    1,
                ),
            ],
        }
    }
}
