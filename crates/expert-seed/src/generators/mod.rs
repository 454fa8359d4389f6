//! Entity generators for seed data.
//!
//! - [`ProfileGenerator`]: Generate expert profiles from catalog metadata
//! - [`Personality`]: MBTI tags sampled uniformly

pub mod personality;
pub mod profile;

pub use personality::Personality;
pub use profile::{
    Certification, ContactInfo, DayAvailability, GenerateError, GeneratedProfile,
    ProfileGenConfig, ProfileGenerator, SocialProof, WeeklyAvailability,
};
