//! Builder for a full profile batch: every expert in an id range rendered
//! into a single `INSERT` statement plus the tier distribution report.

use std::io::{self, Write};
use std::ops::RangeInclusive;
use std::time::Instant;

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::{Catalog, CatalogError, TierDistribution};
use crate::config::GeneratorConfig;
use crate::generators::{GenerateError, GeneratedProfile, ProfileGenConfig, ProfileGenerator};
use crate::report::{GenerationSummary, write_distribution};
use crate::sql::{ProfileStatement, RenderError, profile_row, profile_statement};

#[derive(Debug, Error)]
pub enum BatchError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("Generation error: {0}")]
    Generate(#[from] GenerateError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
}

/// Result of building a batch.
#[derive(Debug)]
pub struct BatchResult {
    /// Generated profiles in ascending expert id order.
    pub profiles: Vec<GeneratedProfile>,
    pub statement: ProfileStatement,
    /// Distribution over the whole tier table.
    pub distribution: TierDistribution,
    /// Ids in the range with no catalog entry.
    pub skipped: Vec<u32>,
    /// Time spent generating (milliseconds).
    pub generation_time_ms: u64,
}

impl BatchResult {
    pub fn summary(&self) -> GenerationSummary {
        GenerationSummary::from_profiles(&self.profiles)
    }

    /// Writes the full SQL script: header comment, `INSERT` statement,
    /// completion comment and tier distribution.
    pub fn write_sql(&self, out: &mut impl Write) -> io::Result<()> {
        let count = self.profiles.len();

        writeln!(out, "-- Expert profiles for {count} experts (tiered levels applied)")?;
        if self.statement.is_empty() {
            writeln!(out, "-- No expert profiles generated")?;
        } else {
            self.statement.write_to(out)?;
        }

        writeln!(out)?;
        writeln!(out, "-- Expert profile data for {count} experts complete")?;
        writeln!(out)?;
        write_distribution(&self.distribution, out)
    }
}

/// Builder for a profile batch.
///
/// # Example
///
/// ```rust,ignore
/// let result = BatchBuilder::new()
///     .with_id_range(2..=31)
///     .build(&Catalog::builtin(), &mut rng)?;
/// result.write_sql(&mut std::io::stdout().lock())?;
/// ```
pub struct BatchBuilder {
    id_range: RangeInclusive<u32>,
    first_profile_id: u32,
    profile_config: ProfileGenConfig,
}

impl Default for BatchBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchBuilder {
    /// Creates a builder covering experts 2 through 31.
    pub fn new() -> Self {
        Self::from_config(&GeneratorConfig::default())
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            id_range: config.id_range(),
            first_profile_id: config.first_profile_id,
            profile_config: config.profile.clone(),
        }
    }

    /// Sets the expert id range to generate.
    pub fn with_id_range(mut self, range: RangeInclusive<u32>) -> Self {
        self.id_range = range;
        self
    }

    /// Sets the profile id of the first generated row.
    pub fn with_first_profile_id(mut self, id: u32) -> Self {
        self.first_profile_id = id;
        self
    }

    /// Sets the profile generation configuration.
    pub fn with_profile_config(mut self, config: ProfileGenConfig) -> Self {
        self.profile_config = config;
        self
    }

    /// Generates one profile per expert in the range.
    ///
    /// The catalog is validated over the whole range first, so a mismatch
    /// between its tables fails before any profile is generated. Ids with no
    /// tier info are skipped.
    pub fn build(&self, catalog: &Catalog, rng: &mut impl Rng) -> Result<BatchResult, BatchError> {
        let start = Instant::now();
        catalog.validate(self.id_range.clone())?;

        info!(
            "Generating profiles for experts {}..={}",
            self.id_range.start(),
            self.id_range.end()
        );

        let profile_gen = ProfileGenerator::with_config(self.profile_config.clone());
        let mut profiles = Vec::new();
        let mut statement = profile_statement();
        let mut skipped = Vec::new();
        let mut profile_id = self.first_profile_id;

        for expert_id in self.id_range.clone() {
            if catalog.tier_info(expert_id).is_none() {
                debug!(expert_id, "No catalog entry, skipping");
                skipped.push(expert_id);
                continue;
            }

            let profile = profile_gen.generate(catalog, expert_id, profile_id, rng)?;
            statement.push(profile_row(&profile)?);
            debug!(expert_id, profile_id, personality = %profile.personality, "Generated profile");

            profiles.push(profile);
            profile_id += 1;
        }

        info!("Generated {} profiles", profiles.len());

        Ok(BatchResult {
            profiles,
            statement,
            distribution: catalog.tier_distribution(),
            skipped,
            generation_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn render(result: &BatchResult) -> String {
        let mut buf = Vec::new();
        result.write_sql(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_full_batch() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(12345);
        let result = BatchBuilder::new().build(&catalog, &mut rng).unwrap();

        assert_eq!(result.profiles.len(), 30);
        assert_eq!(result.statement.rows().len(), 30);
        assert!(result.skipped.is_empty());

        let expert_ids: Vec<u32> = result.profiles.iter().map(|p| p.expert_id).collect();
        assert_eq!(expert_ids, (2..=31).collect::<Vec<_>>());

        let profile_ids: Vec<u32> = result.profiles.iter().map(|p| p.profile_id).collect();
        assert_eq!(profile_ids, (1..=30).collect::<Vec<_>>());
    }

    #[test]
    fn test_unmapped_ids_skipped() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(1);
        let result = BatchBuilder::new()
            .with_id_range(0..=5)
            .with_first_profile_id(100)
            .build(&catalog, &mut rng)
            .unwrap();

        assert_eq!(result.skipped, vec![0, 1]);
        let ids: Vec<(u32, u32)> = result
            .profiles
            .iter()
            .map(|p| (p.profile_id, p.expert_id))
            .collect();
        assert_eq!(ids, vec![(100, 2), (101, 3), (102, 4), (103, 5)]);
    }

    #[test]
    fn test_mismatched_catalog_fails_before_generation() {
        let (tiers, mut details) = Catalog::builtin().into_parts();
        details.remove(&20);
        let catalog = Catalog::new(tiers, details);
        let mut rng = rand::thread_rng();

        let err = BatchBuilder::new().build(&catalog, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            BatchError::Catalog(CatalogError::MissingDetails(20))
        ));
    }

    #[test]
    fn test_sql_layout() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(7);
        let result = BatchBuilder::new().build(&catalog, &mut rng).unwrap();
        let sql = render(&result);

        assert!(sql.starts_with("-- Expert profiles for 30 experts"));
        assert!(sql.contains("INSERT INTO expert_profiles (\n    id, expertId,"));
        assert!(sql.contains(") VALUES\n(1, 2, '김민지', '심리상담 전문가',"));
        assert!(sql.contains("-- Expert profile data for 30 experts complete"));
        assert!(sql.trim_end().ends_with("-- Master: 9 (30.0%)"));

        let row_lines: Vec<&str> = sql.lines().filter(|l| l.starts_with('(')).collect();
        assert_eq!(row_lines.len(), 30);
        assert_eq!(row_lines.iter().filter(|l| l.ends_with(';')).count(), 1);
        assert!(row_lines.last().unwrap().ends_with(';'));
    }

    #[test]
    fn test_empty_range_emits_no_insert() {
        let catalog = Catalog::builtin();
        let mut rng = rand::thread_rng();
        let result = BatchBuilder::new()
            .with_id_range(40..=45)
            .build(&catalog, &mut rng)
            .unwrap();
        let sql = render(&result);

        assert!(result.profiles.is_empty());
        assert!(!sql.contains("INSERT INTO"));
        assert!(sql.contains("-- No expert profiles generated"));
        // Distribution still covers the whole tier table
        assert!(sql.contains("-- Grandmaster: 14 (46.7%)"));
    }

    #[test]
    fn test_summary_matches_profiles() {
        let catalog = Catalog::builtin();
        let mut rng = StdRng::seed_from_u64(3);
        let result = BatchBuilder::new().build(&catalog, &mut rng).unwrap();
        let summary = result.summary();

        assert_eq!(summary.profile_count, 30);
        let sessions: u64 = result
            .profiles
            .iter()
            .map(|p| u64::from(p.total_sessions))
            .sum();
        assert_eq!(summary.total_sessions, sessions);
    }
}
