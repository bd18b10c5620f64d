//! CodeFactory entry point.
//!
//! Loads configuration, generates one batch of codes and prints it.

use codefactory::run;

fn main() -> anyhow::Result<()> {
    run()
}
