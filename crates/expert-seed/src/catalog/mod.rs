//! Static expert metadata.
//!
//! The catalog holds two independent tables keyed by expert id:
//! - [`TierInfo`]: name, tier, level and per-minute price
//! - [`ProfileDetails`]: job title, specialties and categories
//!
//! Both tables are immutable once built. [`Catalog::validate`] cross-checks
//! them over an id range so mismatches surface before any output is written.

mod details;
mod tiers;

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rank category bucketing experts by level.
///
/// Variants are declared from highest to lowest rank, so the derived
/// ordering sorts the top tier first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Mythical,
    Legend,
    Champion,
    Grandmaster,
    Master,
}

impl Tier {
    /// All tiers in rank order.
    pub const ALL: [Tier; 5] = [
        Tier::Mythical,
        Tier::Legend,
        Tier::Champion,
        Tier::Grandmaster,
        Tier::Master,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Mythical => "Mythical",
            Tier::Legend => "Legend",
            Tier::Champion => "Champion",
            Tier::Grandmaster => "Grandmaster",
            Tier::Master => "Master",
        }
    }

    /// Name shown to users in the level label.
    pub fn localized_name(&self) -> &'static str {
        match self {
            Tier::Mythical => "미시컬",
            Tier::Legend => "레전드",
            Tier::Champion => "챔피언",
            Tier::Grandmaster => "그랜드마스터",
            Tier::Master => "마스터",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tier, level and pricing metadata for one expert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierInfo {
    /// Display name.
    pub name: String,
    pub tier: Tier,
    /// Computed level (e.g. 999 for the top-ranked expert).
    pub level: u32,
    /// Price per minute of consultation.
    pub price_per_minute: u32,
}

impl TierInfo {
    pub fn new(name: impl Into<String>, tier: Tier, level: u32, price_per_minute: u32) -> Self {
        Self {
            name: name.into(),
            tier,
            level,
            price_per_minute,
        }
    }

    /// Formatted level label, e.g. `미시컬 (Lv.999)`.
    pub fn level_label(&self) -> String {
        format!("{} (Lv.{})", self.tier.localized_name(), self.level)
    }

    /// Hourly rate derived from the per-minute price.
    pub fn hourly_rate(&self) -> u32 {
        self.price_per_minute * 60
    }
}

/// Descriptive metadata for one expert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileDetails {
    pub job_title: String,
    /// Ordered list; the first entries lead the generated description.
    pub specialties: Vec<String>,
    pub categories: Vec<String>,
}

impl ProfileDetails {
    pub fn new<S: Into<String>>(
        job_title: impl Into<String>,
        specialties: impl IntoIterator<Item = S>,
        categories: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            job_title: job_title.into(),
            specialties: specialties.into_iter().map(Into::into).collect(),
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Field name without the trailing " 전문가" (expert) suffix.
    pub fn field(&self) -> &str {
        self.job_title
            .strip_suffix(" 전문가")
            .unwrap_or(&self.job_title)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("No tier info for expert {0}")]
    MissingTierInfo(u32),
    #[error("No profile details for expert {0}")]
    MissingDetails(u32),
}

/// Per-tier entity counts over the tier table.
#[derive(Debug, Clone, PartialEq)]
pub struct TierDistribution {
    /// Tiers in rank order; tiers without entries are omitted.
    pub counts: Vec<(Tier, usize)>,
    pub total: usize,
}

impl TierDistribution {
    /// Share of the total for a count, in percent.
    pub fn percentage(&self, count: usize) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        count as f64 / self.total as f64 * 100.0
    }

    pub fn count(&self, tier: Tier) -> usize {
        self.counts
            .iter()
            .find(|(t, _)| *t == tier)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

/// Immutable lookup tables for expert metadata.
#[derive(Debug, Clone)]
pub struct Catalog {
    tiers: BTreeMap<u32, TierInfo>,
    details: BTreeMap<u32, ProfileDetails>,
}

impl Catalog {
    /// Builds a catalog from arbitrary entries. No cross-checking is done here.
    pub fn new(
        tiers: impl IntoIterator<Item = (u32, TierInfo)>,
        details: impl IntoIterator<Item = (u32, ProfileDetails)>,
    ) -> Self {
        Self {
            tiers: tiers.into_iter().collect(),
            details: details.into_iter().collect(),
        }
    }

    /// The 30 experts with ids 2 through 31.
    pub fn builtin() -> Self {
        Self::new(tiers::builtin(), details::builtin())
    }

    pub fn tier_info(&self, id: u32) -> Option<&TierInfo> {
        self.tiers.get(&id)
    }

    pub fn details(&self, id: u32) -> Option<&ProfileDetails> {
        self.details.get(&id)
    }

    /// Returns both records for an id, or the first missing one as an error.
    pub fn lookup(&self, id: u32) -> Result<(&TierInfo, &ProfileDetails), CatalogError> {
        let info = self.tier_info(id).ok_or(CatalogError::MissingTierInfo(id))?;
        let details = self.details(id).ok_or(CatalogError::MissingDetails(id))?;
        Ok((info, details))
    }

    /// Checks that every id in `range` is present in both tables or in neither.
    pub fn validate(&self, range: RangeInclusive<u32>) -> Result<(), CatalogError> {
        for id in range {
            match (self.tiers.contains_key(&id), self.details.contains_key(&id)) {
                (true, false) => return Err(CatalogError::MissingDetails(id)),
                (false, true) => return Err(CatalogError::MissingTierInfo(id)),
                _ => {}
            }
        }
        Ok(())
    }

    /// Ids present in the tier table, ascending.
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.tiers.keys().copied()
    }

    /// Number of entries in the tier table.
    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }

    pub fn tier_distribution(&self) -> TierDistribution {
        let mut counts: BTreeMap<Tier, usize> = BTreeMap::new();
        for info in self.tiers.values() {
            *counts.entry(info.tier).or_insert(0) += 1;
        }

        TierDistribution {
            counts: counts.into_iter().collect(),
            total: self.tiers.len(),
        }
    }

    /// Consumes the catalog, returning its raw tables.
    pub fn into_parts(self) -> (BTreeMap<u32, TierInfo>, BTreeMap<u32, ProfileDetails>) {
        (self.tiers, self.details)
    }
}
