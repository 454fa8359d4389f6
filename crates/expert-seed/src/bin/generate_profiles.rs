//! Expert profile seed script - prints the `expert_profiles` INSERT to stdout
//!
//! Run with:
//! ```
//! cargo run -p expert-seed --bin generate-profiles > expert_profiles.sql
//! ```
//!
//! Set `PROFILE_SEED` for reproducible output.

use std::io::{self, BufWriter, Write};

use anyhow::Context;
use expert_seed::builders::BatchBuilder;
use expert_seed::catalog::Catalog;
use expert_seed::config::GeneratorConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only SQL
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = GeneratorConfig::from_env()?;
    match config.seed {
        Some(seed) => tracing::info!("Using seed {seed}"),
        None => tracing::info!("Using entropy seed"),
    }

    let catalog = Catalog::builtin();
    let mut rng = config.rng();

    let result = BatchBuilder::from_config(&config)
        .build(&catalog, &mut rng)
        .context("Failed to generate expert profiles")?;

    let mut out = BufWriter::new(io::stdout().lock());
    result.write_sql(&mut out).context("Failed to write SQL")?;
    out.flush().context("Failed to flush SQL output")?;

    let summary = result.summary();
    tracing::info!("Generation completed in {}ms", result.generation_time_ms);
    tracing::info!("  Profiles: {}", summary.profile_count);
    tracing::info!("  Skipped ids: {:?}", result.skipped);
    tracing::info!("  Total sessions: {}", summary.total_sessions);
    tracing::info!("  Avg rating: {:.2}", summary.avg_rating);
    tracing::info!("  Avg reviews: {:.1}", summary.avg_review_count);
    tracing::info!("  Avg repeat clients: {:.1}", summary.avg_repeat_clients);

    Ok(())
}
