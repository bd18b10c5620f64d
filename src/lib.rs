//! # CodeFactory
//!
//! Generates batches of distinct short random codes (coupons, vouchers,
//! invite codes) from configurable character pools and a format template:
//!
//! - **Alphabet**: digit, lowercase, uppercase and custom pools that can be
//!   trimmed with `exclude` and widened with Latin-1 letters via `extend`
//! - **Format**: templates like `#aaaa` or `xx-dddd`, where placeholder letters
//!   select a pool and punctuation, symbols and spaces are copied verbatim
//! - **Capacity**: the number of distinct codes a combination can produce
//! - **Generation**: bounded-retry rejection sampling that never returns a
//!   partial or duplicated batch
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         CodeFactory                           │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ┌─────────────┐  ┌────────────┐  ┌──────────┐  ┌──────────┐ │
//! │  │ AlphabetSet │  │ FormatSpec │→ │ Capacity │→ │  Batch   │ │
//! │  │   (pools)   │→ │ (template) │  │  (gate)  │  │Generator │ │
//! │  └─────────────┘  └────────────┘  └──────────┘  └──────────┘ │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use codefactory::CodeFactory;
//!
//! let mut factory = CodeFactory::new().with_seed(7);
//! factory.set_format("dd-pp").unwrap();
//! factory.set_prefix("SALE-").unwrap();
//!
//! let codes = factory.generate(5).unwrap();
//! assert_eq!(codes.len(), 5);
//! assert!(codes.iter().all(|code| code.starts_with("SALE-")));
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod config;
pub mod domain;
pub mod error;
pub mod service;

use std::io::Write;

use tracing::info;

pub use crate::config::{AppConfig, GeneratorSettings, Preset};
pub use crate::domain::{AlphabetSet, CharacterPool, FormatSpec, Selector, Token};
pub use crate::error::{CodeError, ErrorCode, Result};
pub use crate::service::{Capacity, CapacityEstimator, CodeFactory};

/// Run the code generator once.
///
/// This function:
/// 1. Loads configuration from files and environment
/// 2. Initializes logging
/// 3. Builds a factory from the generator settings
/// 4. Generates one batch and writes it to stdout, one code per line
///
/// # Errors
///
/// Returns an error if:
/// - Configuration cannot be loaded
/// - The generator settings are rejected
/// - The batch cannot be generated
/// - Writing to stdout fails
pub fn run() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "Starting CodeFactory"
    );

    let mut factory = CodeFactory::from_settings(&config.generator)?;
    info!(
        format = %factory.format(),
        capacity = factory.max_codes(),
        "Generator configured"
    );

    let codes = factory.generate(config.generator.count)?;

    let mut out = std::io::stdout().lock();
    for code in &codes {
        writeln!(out, "{code}")?;
    }
    out.flush()?;

    info!(count = codes.len(), "Batch complete");
    Ok(())
}

/// Initialize logging based on configuration.
///
/// Logs go to stderr; stdout carries the generated codes.
fn init_logging(config: &AppConfig) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.observability.log_format == "json" {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
