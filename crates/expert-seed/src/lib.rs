//! Seed data generation for consult-on.
//!
//! This crate fabricates expert profiles for a fixed catalog of 30 experts and
//! renders them as a single multi-row SQL `INSERT` into `expert_profiles`,
//! followed by a tier distribution report.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use expert_seed::prelude::*;
//!
//! let config = GeneratorConfig::default().with_seed(12345);
//! let mut rng = config.rng();
//! let result = BatchBuilder::from_config(&config).build(&Catalog::builtin(), &mut rng)?;
//! result.write_sql(&mut std::io::stdout().lock())?;
//! ```

pub mod builders;
pub mod catalog;
pub mod config;
pub mod generators;
pub mod report;
pub mod sql;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{BatchBuilder, BatchError, BatchResult};
    pub use crate::catalog::{Catalog, CatalogError, ProfileDetails, Tier, TierInfo};
    pub use crate::config::GeneratorConfig;
    pub use crate::generators::{GeneratedProfile, Personality, ProfileGenConfig, ProfileGenerator};
    pub use crate::report::GenerationSummary;
    pub use crate::sql::{PROFILE_COLUMNS, SqlValue};
}
