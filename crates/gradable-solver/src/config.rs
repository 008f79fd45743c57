//! Configuration for the solver
//!
//! Names the anchor, pins its boundary value and picks which words become
//! variables.

use gradable_domain::{DEFAULT_ANCHOR, DEFAULT_BOUNDARY_VALUE, DEFAULT_PRECISION};
use serde::{Deserialize, Serialize};

/// Which words become variables of the linear system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariableMode {
    /// Only words reachable from the anchor
    #[default]
    Connected,
    /// Every word named in the equation table
    All,
}

impl VariableMode {
    /// Mode name as used in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            VariableMode::Connected => "connected",
            VariableMode::All => "all",
        }
    }
}

/// Configuration for one solver run
///
/// # Examples
///
/// ```
/// use gradable_solver::{SolverConfig, VariableMode};
///
/// let config = SolverConfig::default();
/// assert_eq!(config.anchor, "high_prop");
/// assert_eq!(config.boundary_value, 10.0);
/// assert_eq!(config.mode, VariableMode::Connected);
///
/// let config = SolverConfig::all_words();
/// assert_eq!(config.mode, VariableMode::All);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Pseudo-word pinned to the boundary value
    #[serde(default = "default_anchor")]
    pub anchor: String,

    /// Intensity the anchor is pinned to
    #[serde(default = "default_boundary_value")]
    pub boundary_value: f64,

    /// Decimal digits kept in presented scores
    #[serde(default = "default_precision")]
    pub precision: u32,

    /// Variable selection mode
    #[serde(default)]
    pub mode: VariableMode,

    /// Treat deduced (reciprocal) relations as equations
    ///
    /// The equation table must be loaded with the same setting; the pipeline
    /// rejects a table that disagrees.
    #[serde(default)]
    pub include_deduced: bool,
}

fn default_anchor() -> String {
    DEFAULT_ANCHOR.to_string()
}

fn default_boundary_value() -> f64 {
    DEFAULT_BOUNDARY_VALUE
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            anchor: default_anchor(),
            boundary_value: DEFAULT_BOUNDARY_VALUE,
            precision: DEFAULT_PRECISION,
            mode: VariableMode::Connected,
            include_deduced: false,
        }
    }
}

impl SolverConfig {
    /// Default settings with every word in the table as a variable
    pub fn all_words() -> Self {
        Self {
            mode: VariableMode::All,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.anchor.trim().is_empty() {
            return Err("anchor must not be empty".to_string());
        }
        if !self.boundary_value.is_finite() || self.boundary_value == 0.0 {
            return Err("boundary_value must be finite and non-zero".to_string());
        }
        if self.precision > 15 {
            return Err("precision cannot exceed 15 decimal digits".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
