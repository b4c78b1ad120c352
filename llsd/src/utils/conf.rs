use serde::Deserialize;

use crate::utils::error::LlsdResult;

/// Starting capacity of the output buffer, in bytes.
pub const DEFAULT_INITIAL_CAPACITY: usize = 256;

/// Tunables for a single encode.
///
/// The defaults reproduce the reference encoder exactly: no nesting ceiling and
/// no bound on lazy sequences. Both ceilings are opt-in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EncoderConfig {
    /// Capacity the output buffer starts with. Zero is treated as one.
    pub initial_capacity: usize,

    /// Maximum nesting of arrays, maps and indirections.
    pub max_depth: Option<usize>,

    /// Maximum number of elements drawn from any one lazy sequence.
    pub max_lazy_elements: Option<usize>,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_depth: None,
            max_lazy_elements: None,
        }
    }
}

impl EncoderConfig {
    /// Parse a configuration from a TOML document. Missing keys keep their defaults.
    ///
    /// ```rust
    /// # use llsd::utils::conf::EncoderConfig;
    /// let config = EncoderConfig::from_toml_str("max_depth = 64").unwrap();
    /// assert_eq!(config.max_depth, Some(64));
    /// assert_eq!(config.initial_capacity, 256);
    /// ```
    pub fn from_toml_str(source: &str) -> LlsdResult<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn with_max_lazy_elements(mut self, max_lazy_elements: usize) -> Self {
        self.max_lazy_elements = Some(max_lazy_elements);
        self
    }
}
