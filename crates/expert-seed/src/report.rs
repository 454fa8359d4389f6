//! Run summaries: the tier distribution appended to the SQL output and the
//! aggregate statistics logged after generation.

use std::io::{self, Write};

use crate::catalog::TierDistribution;
use crate::generators::GeneratedProfile;

/// Writes the distribution as SQL comment lines, e.g. `-- Master: 9 (30.0%)`.
pub fn write_distribution(dist: &TierDistribution, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "-- Tier distribution:")?;
    for &(tier, count) in &dist.counts {
        writeln!(out, "-- {tier}: {count} ({:.1}%)", dist.percentage(count))?;
    }
    Ok(())
}

/// Aggregate statistics over the generated profiles.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationSummary {
    pub profile_count: usize,
    pub total_sessions: u64,
    pub avg_rating: f64,
    pub avg_review_count: f64,
    pub avg_repeat_clients: f64,
}

impl GenerationSummary {
    pub fn from_profiles(profiles: &[GeneratedProfile]) -> Self {
        let count = profiles.len();
        let mean = |sum: f64| if count == 0 { 0.0 } else { sum / count as f64 };

        Self {
            profile_count: count,
            total_sessions: profiles.iter().map(|p| u64::from(p.total_sessions)).sum(),
            avg_rating: mean(profiles.iter().map(|p| p.avg_rating).sum()),
            avg_review_count: mean(profiles.iter().map(|p| f64::from(p.review_count)).sum()),
            avg_repeat_clients: mean(profiles.iter().map(|p| f64::from(p.repeat_clients)).sum()),
        }
    }
}
