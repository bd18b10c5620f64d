//! Generator settings.

use serde::Deserialize;

use crate::domain::DEFAULT_FORMAT;
use crate::service::DEFAULT_MAX_CODES;

/// Starting alphabet before exclusions and extensions are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// Digits, lowercase and uppercase letters.
    #[default]
    Standard,
    /// Digits and lowercase letters without `l`.
    Readable,
}

/// Settings describing one batch of codes.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorSettings {
    /// Starting alphabet.
    #[serde(default)]
    pub preset: Preset,

    /// Format template.
    #[serde(default = "default_format")]
    pub format: String,

    /// Text prepended to every code.
    #[serde(default)]
    pub prefix: String,

    /// Text appended to every code.
    #[serde(default)]
    pub suffix: String,

    /// Characters for the `c` placeholder.
    #[serde(default)]
    pub custom: String,

    /// Digits and letters removed from the pools.
    #[serde(default)]
    pub exclude: String,

    /// Latin-1 letters added to the letter pools.
    #[serde(default)]
    pub extend: String,

    /// Number of codes to generate.
    #[serde(default = "default_count")]
    pub count: usize,

    /// Seed for reproducible output. Drawn from the OS when unset.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Safety ceiling for capacity estimation.
    #[serde(default = "default_max_codes")]
    pub max_codes: u64,
}

fn default_format() -> String {
    DEFAULT_FORMAT.to_string()
}

const fn default_count() -> usize {
    10
}

const fn default_max_codes() -> u64 {
    DEFAULT_MAX_CODES
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            preset: Preset::Standard,
            format: default_format(),
            prefix: String::new(),
            suffix: String::new(),
            custom: String::new(),
            exclude: String::new(),
            extend: String::new(),
            count: default_count(),
            seed: None,
            max_codes: DEFAULT_MAX_CODES,
        }
    }
}
