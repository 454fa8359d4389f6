//! Column layout of the `expert_profiles` table.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use super::{InsertStatement, RenderError, SqlValue};
use crate::generators::GeneratedProfile;

pub const PROFILE_TABLE: &str = "expert_profiles";

pub const PROFILE_COLUMNS: [&str; 43] = [
    "id",
    "expertId",
    "fullName",
    "jobTitle",
    "bio",
    "description",
    "education",
    "certifications",
    "specialties",
    "specialtyAreas",
    "consultationStyle",
    "targetAudience",
    "successStories",
    "repeatClients",
    "averageSessionDuration",
    "nextAvailableSlot",
    "cancellationPolicy",
    "reschedulePolicy",
    "holidayPolicy",
    "portfolioItems",
    "socialProof",
    "pricingTiers",
    "contactInfo",
    "profileImage",
    "portfolioFiles",
    "tags",
    "consultationTypes",
    "languages",
    "hourlyRate",
    "pricePerMinute",
    "totalSessions",
    "avgRating",
    "reviewCount",
    "completionRate",
    "responseTime",
    "level",
    "profileViews",
    "lastActiveAt",
    "joinedAt",
    "availability",
    "mbti",
    "createdAt",
    "updatedAt",
];

/// One value per column, in column order.
pub type ProfileRow = [SqlValue; PROFILE_COLUMNS.len()];

pub type ProfileStatement = InsertStatement<'static, { PROFILE_COLUMNS.len() }>;

/// An empty `INSERT INTO expert_profiles` statement.
pub fn profile_statement() -> ProfileStatement {
    InsertStatement::new(PROFILE_TABLE, &PROFILE_COLUMNS)
}

const SLOT_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

/// Converts a generated profile into its value tuple.
pub fn profile_row(p: &GeneratedProfile) -> Result<ProfileRow, RenderError> {
    Ok([
        p.profile_id.into(),
        p.expert_id.into(),
        SqlValue::text(&p.full_name),
        SqlValue::text(&p.job_title),
        SqlValue::text(&p.bio),
        SqlValue::text(&p.description),
        SqlValue::json(&p.education)?,
        SqlValue::json(&p.certifications)?,
        SqlValue::json(&p.specialties)?,
        SqlValue::json(&p.specialty_areas)?,
        SqlValue::text(&p.consultation_style),
        SqlValue::json(&p.target_audience)?,
        p.success_stories.into(),
        p.repeat_clients.into(),
        p.average_session_duration.into(),
        SqlValue::timestamp(p.next_available_slot, SLOT_FORMAT)?,
        SqlValue::text(&p.cancellation_policy),
        SqlValue::text(&p.reschedule_policy),
        SqlValue::text(&p.holiday_policy),
        SqlValue::json(&p.portfolio_items)?,
        SqlValue::json(&p.social_proof)?,
        SqlValue::json(&p.pricing_tiers)?,
        SqlValue::json(&p.contact_info)?,
        SqlValue::optional_text(p.profile_image.as_deref()),
        SqlValue::json(&p.portfolio_files)?,
        SqlValue::json(&p.tags)?,
        SqlValue::json(&p.consultation_types)?,
        SqlValue::json(&p.languages)?,
        p.hourly_rate.into(),
        p.price_per_minute.into(),
        p.total_sessions.into(),
        p.avg_rating.into(),
        p.review_count.into(),
        p.completion_rate.into(),
        SqlValue::text(&p.response_time),
        SqlValue::text(&p.level),
        p.profile_views.into(),
        SqlValue::timestamp(p.last_active_at, TIMESTAMP_FORMAT)?,
        SqlValue::timestamp(p.joined_at, TIMESTAMP_FORMAT)?,
        SqlValue::json(&p.availability)?,
        SqlValue::text(p.personality.as_str()),
        SqlValue::Expr("NOW()"),
        SqlValue::Expr("NOW()"),
    ])
}
