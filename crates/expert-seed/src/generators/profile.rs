//! Expert profile generation.

use std::ops::RangeInclusive;

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::macros::date;
use time::{Date, Month, PrimitiveDateTime, Time};

use super::personality::Personality;
use crate::catalog::{Catalog, CatalogError, ProfileDetails, TierInfo};

pub const CANCELLATION_POLICY: &str = "24시간 전 취소 시 100% 환불";
pub const RESCHEDULE_POLICY: &str = "24시간 전까지 일정 변경 가능";
pub const HOLIDAY_POLICY: &str = "공휴일에는 상담을 진행하지 않습니다.";

const CONSULTATION_STYLE: &str = "전문적이고 친근한 상담 스타일로 고객의 목표 달성을 돕습니다.";
const EDUCATION: [&str; 2] = ["서울대학교 관련학과 학사", "연세대학교 관련학과 석사"];
const CERTIFICATIONS: [(&str, &str); 2] = [
    ("관련 자격증 1급", "한국관련협회"),
    ("전문가 자격증", "관련기관"),
];
const SPECIALTY_AREAS: [&str; 4] = ["전문분야1", "전문분야2", "전문분야3", "전문분야4"];
const TARGET_AUDIENCE: [&str; 4] = ["일반인", "직장인", "학생", "전문가"];
const CONSULTATION_TYPES: [&str; 2] = ["video", "chat"];
const LANGUAGES: [&str; 1] = ["한국어"];
const CONTACT_LOCATION: &str = "서울특별시";
const CONTACT_WEBSITE: &str = "https://care.co.kr";
const WEEKDAY_HOURS: &str = "09:00-18:00";

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error("Invalid timestamp component: {0}")]
    Timestamp(#[from] time::error::ComponentRange),
}

/// A certification entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
}

/// External links shown as social proof.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialProof {
    #[serde(rename = "linkedIn")]
    pub linked_in: String,
    pub website: String,
}

/// Contact block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub phone: String,
    pub email: String,
    pub location: String,
    pub website: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub available: bool,
    /// `HH:MM-HH:MM`, empty when unavailable.
    pub hours: String,
}

impl DayAvailability {
    fn open(hours: &str) -> Self {
        Self {
            available: true,
            hours: hours.to_string(),
        }
    }

    fn closed() -> Self {
        Self {
            available: false,
            hours: String::new(),
        }
    }
}

/// Availability by weekday. Serializes Monday first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyAvailability {
    pub monday: DayAvailability,
    pub tuesday: DayAvailability,
    pub wednesday: DayAvailability,
    pub thursday: DayAvailability,
    pub friday: DayAvailability,
    pub saturday: DayAvailability,
    pub sunday: DayAvailability,
}

impl WeeklyAvailability {
    /// Open on weekdays with the given hours, closed on weekends.
    pub fn weekdays(hours: &str) -> Self {
        Self {
            monday: DayAvailability::open(hours),
            tuesday: DayAvailability::open(hours),
            wednesday: DayAvailability::open(hours),
            thursday: DayAvailability::open(hours),
            friday: DayAvailability::open(hours),
            saturday: DayAvailability::closed(),
            sunday: DayAvailability::closed(),
        }
    }
}

/// Generated profile data ready for SQL rendering.
#[derive(Debug, Clone)]
pub struct GeneratedProfile {
    pub profile_id: u32,
    pub expert_id: u32,
    pub full_name: String,
    pub job_title: String,
    pub bio: String,
    pub description: String,
    pub education: Vec<String>,
    pub certifications: Vec<Certification>,
    pub specialties: Vec<String>,
    pub specialty_areas: Vec<String>,
    pub consultation_style: String,
    pub target_audience: Vec<String>,
    pub success_stories: u32,
    pub repeat_clients: u32,
    /// Minutes.
    pub average_session_duration: u32,
    pub next_available_slot: PrimitiveDateTime,
    pub cancellation_policy: String,
    pub reschedule_policy: String,
    pub holiday_policy: String,
    pub portfolio_items: Vec<serde_json::Value>,
    pub social_proof: SocialProof,
    pub pricing_tiers: Vec<serde_json::Value>,
    pub contact_info: ContactInfo,
    pub profile_image: Option<String>,
    pub portfolio_files: Vec<serde_json::Value>,
    pub tags: Vec<String>,
    pub consultation_types: Vec<String>,
    pub languages: Vec<String>,
    pub hourly_rate: u32,
    pub price_per_minute: u32,
    pub total_sessions: u32,
    /// One decimal place.
    pub avg_rating: f64,
    pub review_count: u32,
    /// Percent.
    pub completion_rate: u32,
    pub response_time: String,
    pub level: String,
    pub profile_views: u32,
    pub last_active_at: PrimitiveDateTime,
    pub joined_at: PrimitiveDateTime,
    pub availability: WeeklyAvailability,
    pub personality: Personality,
}

/// Sampling ranges and reference dates for profile generation.
///
/// All ranges are inclusive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileGenConfig {
    pub experience_years: RangeInclusive<u32>,
    pub success_stories: RangeInclusive<u32>,
    pub repeat_clients: RangeInclusive<u32>,
    pub session_duration_minutes: RangeInclusive<u32>,
    pub total_sessions: RangeInclusive<u32>,
    pub avg_rating: RangeInclusive<f64>,
    pub review_count: RangeInclusive<u32>,
    pub completion_rate: RangeInclusive<u32>,
    pub response_minutes: RangeInclusive<u32>,
    pub profile_views: RangeInclusive<u32>,
    /// Hour of the next available slot.
    pub slot_hours: RangeInclusive<u8>,
    /// Hour of the last activity.
    pub last_active_hours: RangeInclusive<u8>,
    /// Day of month the expert joined; capped at 28 so every month is valid.
    pub joined_days: RangeInclusive<u8>,
    pub next_slot_date: Date,
    pub last_active_date: Date,
    pub joined_year: i32,
}

impl Default for ProfileGenConfig {
    fn default() -> Self {
        Self {
            experience_years: 3..=12,
            success_stories: 20..=80,
            repeat_clients: 10..=60,
            session_duration_minutes: 60..=120,
            total_sessions: 120..=500,
            avg_rating: 4.2..=4.8,
            review_count: 60..=200,
            completion_rate: 85..=95,
            response_minutes: 30..=120,
            profile_views: 100..=1000,
            slot_hours: 9..=18,
            last_active_hours: 1..=23,
            joined_days: 1..=28,
            next_slot_date: date!(2025 - 09 - 16),
            last_active_date: date!(2025 - 09 - 20),
            joined_year: 2024,
        }
    }
}

/// Generates expert profiles from catalog metadata and random filler.
pub struct ProfileGenerator {
    config: ProfileGenConfig,
}

impl ProfileGenerator {
    /// Creates a new profile generator with default configuration.
    pub fn new() -> Self {
        Self {
            config: ProfileGenConfig::default(),
        }
    }

    /// Creates a generator with custom configuration.
    pub fn with_config(config: ProfileGenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ProfileGenConfig {
        &self.config
    }

    /// Generates the profile for one expert.
    ///
    /// Fails if the expert is missing from either catalog table; no defaults
    /// are substituted.
    pub fn generate(
        &self,
        catalog: &Catalog,
        expert_id: u32,
        profile_id: u32,
        rng: &mut impl Rng,
    ) -> Result<GeneratedProfile, GenerateError> {
        let (info, details) = catalog.lookup(expert_id)?;
        let cfg = &self.config;

        let years = rng.gen_range(cfg.experience_years.clone());

        Ok(GeneratedProfile {
            profile_id,
            expert_id,
            full_name: info.name.clone(),
            job_title: details.job_title.clone(),
            bio: format!(
                "{years}년 경력의 {} 전문가로, 다양한 분야에서 전문적인 상담을 제공합니다.",
                details.field()
            ),
            description: describe(details),
            education: to_strings(&EDUCATION),
            certifications: CERTIFICATIONS
                .iter()
                .map(|&(name, issuer)| Certification {
                    name: name.to_string(),
                    issuer: issuer.to_string(),
                })
                .collect(),
            specialties: details.specialties.clone(),
            specialty_areas: to_strings(&SPECIALTY_AREAS),
            consultation_style: CONSULTATION_STYLE.to_string(),
            target_audience: to_strings(&TARGET_AUDIENCE),
            success_stories: rng.gen_range(cfg.success_stories.clone()),
            repeat_clients: rng.gen_range(cfg.repeat_clients.clone()),
            average_session_duration: rng.gen_range(cfg.session_duration_minutes.clone()),
            next_available_slot: self.next_slot(rng)?,
            cancellation_policy: CANCELLATION_POLICY.to_string(),
            reschedule_policy: RESCHEDULE_POLICY.to_string(),
            holiday_policy: HOLIDAY_POLICY.to_string(),
            portfolio_items: Vec::new(),
            social_proof: social_proof(info, details),
            pricing_tiers: Vec::new(),
            contact_info: ContactInfo {
                phone: phone_number(rng),
                email: format!("expert{}@consult-on.kr", expert_id.saturating_sub(1)),
                location: CONTACT_LOCATION.to_string(),
                website: CONTACT_WEBSITE.to_string(),
            },
            profile_image: None,
            portfolio_files: Vec::new(),
            tags: details.specialties.clone(),
            consultation_types: to_strings(&CONSULTATION_TYPES),
            languages: to_strings(&LANGUAGES),
            hourly_rate: info.hourly_rate(),
            price_per_minute: info.price_per_minute,
            total_sessions: rng.gen_range(cfg.total_sessions.clone()),
            avg_rating: round_tenth(rng.gen_range(cfg.avg_rating.clone())),
            review_count: rng.gen_range(cfg.review_count.clone()),
            completion_rate: rng.gen_range(cfg.completion_rate.clone()),
            response_time: format!("{}분 이내", rng.gen_range(cfg.response_minutes.clone())),
            level: info.level_label(),
            profile_views: rng.gen_range(cfg.profile_views.clone()),
            last_active_at: self.last_active(rng)?,
            joined_at: self.joined(rng)?,
            availability: WeeklyAvailability::weekdays(WEEKDAY_HOURS),
            personality: rng.r#gen(),
        })
    }

    /// A slot on the hour.
    fn next_slot(&self, rng: &mut impl Rng) -> Result<PrimitiveDateTime, GenerateError> {
        let hour = rng.gen_range(self.config.slot_hours.clone());
        Ok(PrimitiveDateTime::new(
            self.config.next_slot_date,
            Time::from_hms(hour, 0, 0)?,
        ))
    }

    fn last_active(&self, rng: &mut impl Rng) -> Result<PrimitiveDateTime, GenerateError> {
        let hour = rng.gen_range(self.config.last_active_hours.clone());
        let minute = rng.gen_range(0..60);
        Ok(PrimitiveDateTime::new(
            self.config.last_active_date,
            Time::from_hms(hour, minute, 0)?,
        ))
    }

    /// Midnight on a random day of the configured year.
    fn joined(&self, rng: &mut impl Rng) -> Result<PrimitiveDateTime, GenerateError> {
        let month = Month::try_from(rng.gen_range(1..=12u8))?;
        let day = rng.gen_range(self.config.joined_days.clone());
        let date = Date::from_calendar_date(self.config.joined_year, month, day)?;
        Ok(date.midnight())
    }
}

impl Default for ProfileGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn describe(details: &ProfileDetails) -> String {
    let leading: Vec<&str> = details
        .specialties
        .iter()
        .take(2)
        .map(String::as_str)
        .collect();
    format!(
        "{} 등 관련 문제에 대한 전문적인 상담을 제공합니다. 개인의 상황과 목표에 맞는 맞춤형 솔루션을 제시합니다.",
        leading.join(", ")
    )
}

fn social_proof(info: &TierInfo, details: &ProfileDetails) -> SocialProof {
    let prefix: String = details.job_title.chars().take(2).collect();
    SocialProof {
        linked_in: format!("https://linkedin.com/in/{}", info.name.to_lowercase()),
        website: format!("https://{prefix}care.co.kr"),
    }
}

/// Korean mobile number, `010-NNNN-NNNN`.
fn phone_number(rng: &mut impl Rng) -> String {
    format!(
        "010-{}-{}",
        rng.gen_range(1000..=9999),
        rng.gen_range(1000..=9999)
    )
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use time::Weekday;

    #[test]
    fn test_generate_top_expert() {
        let catalog = Catalog::builtin();
        let profile_gen = ProfileGenerator::new();
        let mut rng = rand::thread_rng();
        let profile = profile_gen.generate(&catalog, 2, 1, &mut rng).unwrap();

        assert_eq!(profile.profile_id, 1);
        assert_eq!(profile.expert_id, 2);
        assert_eq!(profile.full_name, "김민지");
        assert_eq!(profile.hourly_rate, 48000);
        assert_eq!(profile.price_per_minute, 800);
        assert_eq!(profile.level, "미시컬 (Lv.999)");
        assert_eq!(profile.contact_info.email, "expert1@consult-on.kr");
        assert!(profile.bio.contains("년 경력의 심리상담 전문가로"));
        assert!(profile.description.starts_with("심리상담, 인지행동치료 등"));
        assert_eq!(profile.social_proof.website, "https://심리care.co.kr");
        assert_eq!(profile.tags, profile.specialties);
        assert!(profile.profile_image.is_none());
    }

    #[test]
    fn test_hourly_rate_for_every_expert() {
        let catalog = Catalog::builtin();
        let profile_gen = ProfileGenerator::new();
        let mut rng = StdRng::seed_from_u64(12345);

        for id in catalog.ids() {
            let profile = profile_gen.generate(&catalog, id, id, &mut rng).unwrap();
            assert_eq!(profile.hourly_rate, profile.price_per_minute * 60);
        }
    }

    #[test]
    fn test_sampled_values_within_ranges() {
        let catalog = Catalog::builtin();
        let profile_gen = ProfileGenerator::new();
        let cfg = profile_gen.config().clone();
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..200 {
            let p = profile_gen.generate(&catalog, 16, 1, &mut rng).unwrap();

            assert!(cfg.success_stories.contains(&p.success_stories));
            assert!(cfg.repeat_clients.contains(&p.repeat_clients));
            assert!(cfg.session_duration_minutes.contains(&p.average_session_duration));
            assert!(cfg.total_sessions.contains(&p.total_sessions));
            assert!(cfg.review_count.contains(&p.review_count));
            assert!(cfg.completion_rate.contains(&p.completion_rate));
            assert!(cfg.profile_views.contains(&p.profile_views));
            assert!(p.avg_rating >= 4.2 - 1e-9 && p.avg_rating <= 4.8 + 1e-9);
            assert!((p.avg_rating * 10.0 - (p.avg_rating * 10.0).round()).abs() < 1e-9);

            assert_eq!(p.next_available_slot.date(), cfg.next_slot_date);
            assert_eq!(p.next_available_slot.minute(), 0);
            assert!(cfg.slot_hours.contains(&p.next_available_slot.hour()));
            assert_eq!(p.last_active_at.date(), cfg.last_active_date);
            assert_eq!(p.joined_at.year(), cfg.joined_year);
            assert!(p.joined_at.day() <= 28);
            assert_eq!(p.joined_at.time(), Time::MIDNIGHT);

            let phone = p.contact_info.phone;
            assert_eq!(phone.len(), "010-0000-0000".len());
            assert!(phone.starts_with("010-"));
        }
    }

    #[test]
    fn test_policies_identical_across_experts() {
        let catalog = Catalog::builtin();
        let profile_gen = ProfileGenerator::new();
        let mut rng = rand::thread_rng();

        let a = profile_gen.generate(&catalog, 3, 1, &mut rng).unwrap();
        let b = profile_gen.generate(&catalog, 30, 2, &mut rng).unwrap();
        assert_eq!(a.cancellation_policy, b.cancellation_policy);
        assert_eq!(a.reschedule_policy, b.reschedule_policy);
        assert_eq!(a.holiday_policy, b.holiday_policy);
        assert_eq!(a.availability, b.availability);
    }

    #[test]
    fn test_weekday_availability_pattern() {
        let week = WeeklyAvailability::weekdays(WEEKDAY_HOURS);
        let days = [
            (Weekday::Monday, &week.monday),
            (Weekday::Tuesday, &week.tuesday),
            (Weekday::Wednesday, &week.wednesday),
            (Weekday::Thursday, &week.thursday),
            (Weekday::Friday, &week.friday),
            (Weekday::Saturday, &week.saturday),
            (Weekday::Sunday, &week.sunday),
        ];

        for (weekday, day) in days {
            let weekend = matches!(weekday, Weekday::Saturday | Weekday::Sunday);
            assert_eq!(day.available, !weekend, "{weekday}");
            assert_eq!(day.hours.is_empty(), weekend, "{weekday}");
        }
    }

    #[test]
    fn test_missing_details_fails() {
        let (tiers, mut details) = Catalog::builtin().into_parts();
        details.remove(&9);
        let catalog = Catalog::new(tiers, details);
        let mut rng = rand::thread_rng();

        let err = ProfileGenerator::new()
            .generate(&catalog, 9, 1, &mut rng)
            .unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Catalog(CatalogError::MissingDetails(9))
        ));
    }

    #[test]
    fn test_unknown_expert_fails() {
        let mut rng = rand::thread_rng();
        let err = ProfileGenerator::new()
            .generate(&Catalog::builtin(), 1, 1, &mut rng)
            .unwrap_err();
        assert!(matches!(
            err,
            GenerateError::Catalog(CatalogError::MissingTierInfo(1))
        ));
    }

    #[test]
    fn test_same_seed_same_profile() {
        let catalog = Catalog::builtin();
        let profile_gen = ProfileGenerator::new();

        let a = profile_gen
            .generate(&catalog, 5, 1, &mut StdRng::seed_from_u64(1))
            .unwrap();
        let b = profile_gen
            .generate(&catalog, 5, 1, &mut StdRng::seed_from_u64(1))
            .unwrap();
        assert_eq!(a.contact_info, b.contact_info);
        assert_eq!(a.total_sessions, b.total_sessions);
        assert_eq!(a.personality, b.personality);
        assert_eq!(a.joined_at, b.joined_at);
    }
}
