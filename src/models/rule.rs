//! The work-time rule schema.
//!
//! This module defines the [`Rule`] entity and the closed option enums its
//! fields range over. The original admin screens carried these options as
//! localized strings; here each is a tagged enum with an explicit mapping
//! to minutes or semantics at the classification-engine boundary.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::time_value::TimeValue;

/// Whether a rule participates in classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseFlag {
    /// The rule is in use.
    Active,
    /// The rule is retained but not applied.
    Inactive,
}

/// The unit durations are bucketed into before rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeUnit {
    /// 1-minute granularity.
    One,
    /// 10-minute granularity.
    Ten,
    /// 15-minute granularity.
    Fifteen,
    /// 30-minute granularity.
    Thirty,
}

impl TimeUnit {
    /// The unit size in minutes.
    pub fn minutes(&self) -> u32 {
        match self {
            TimeUnit::One => 1,
            TimeUnit::Ten => 10,
            TimeUnit::Fifteen => 15,
            TimeUnit::Thirty => 30,
        }
    }
}

/// How a partial unit of worked time is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rounding {
    /// Drop the partial unit.
    Truncate,
    /// Round to the nearest unit.
    Round,
    /// Count the partial unit as a full one.
    Ceiling,
}

/// How the early-work window is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EarlyMode {
    /// Everything before the basic window's start counts as early work.
    BeforeBasicStart,
    /// Only the configured fixed window counts as early work.
    FixedWindow,
}

/// How overtime is detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeMode {
    /// Time beyond the basic window is overtime.
    ExceedsBasic,
    /// Time beyond a fixed daily target is overtime.
    ExceedsFixedTarget,
}

/// How overtime minutes that co-occur with another category are attributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapPolicy {
    /// Overlapping minutes are recognized under every co-occurring category.
    SeparatePerCategory,
    /// Overlapping minutes are attributed to at most one category.
    AtMostOne,
}

/// How holidays are determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayBasis {
    /// The public-holiday calendar decides.
    PublicCalendar,
    /// Holidays are designated per work schedule.
    UserDefined,
}

/// Minimum recognized duration for a sub-policy, in minutes.
///
/// Independent of [`RecognitionMax`]; `min < max` is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognitionMin {
    /// 1 minute.
    M1,
    /// 5 minutes.
    M5,
    /// 10 minutes.
    M10,
    /// 15 minutes.
    M15,
    /// 30 minutes.
    M30,
}

impl RecognitionMin {
    /// The threshold in minutes.
    pub fn minutes(&self) -> u32 {
        match self {
            RecognitionMin::M1 => 1,
            RecognitionMin::M5 => 5,
            RecognitionMin::M10 => 10,
            RecognitionMin::M15 => 15,
            RecognitionMin::M30 => 30,
        }
    }
}

/// Maximum recognized duration for a sub-policy, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecognitionMax {
    /// 30 minutes.
    M30,
    /// 60 minutes.
    M60,
    /// 120 minutes.
    M120,
    /// 180 minutes.
    M180,
    /// 240 minutes.
    M240,
}

impl RecognitionMax {
    /// The cap in minutes.
    pub fn minutes(&self) -> u32 {
        match self {
            RecognitionMax::M30 => 30,
            RecognitionMax::M60 => 60,
            RecognitionMax::M120 => 120,
            RecognitionMax::M180 => 180,
            RecognitionMax::M240 => 240,
        }
    }
}

/// The window defining one work-day for classification purposes.
///
/// If `end` precedes `start` the window spans into the next calendar day;
/// the external classification engine interprets this, the core only
/// carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRange {
    /// Start of the work-day window.
    pub start: TimeValue,
    /// End of the work-day window.
    pub end: TimeValue,
}

/// A named work-time classification policy.
///
/// A rule combines a common section (unit, rounding, day window, exclusion
/// policy) with four optional sub-policies. Sub-policy fields stay resident
/// while their enabling flag is off: consumers must treat them as inert, and
/// re-enabling restores the previously entered values.
///
/// The `tags` field is a derived projection of the enabling flags. It is
/// never hand-edited; [`Rule::refresh_tags`] recomputes it immediately
/// before a rule becomes part of the canonical repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Unique identifier, immutable once assigned (e.g. "R-001").
    pub id: String,
    /// Display name; non-empty for a completed rule.
    pub name: String,
    /// Free-text description.
    pub desc: String,
    /// Lifecycle flag.
    pub use_flag: UseFlag,
    /// Derived category tags, `Basic` always first.
    #[serde(default)]
    pub tags: Vec<Category>,

    /// Granularity durations are bucketed into.
    pub time_unit: TimeUnit,
    /// Resolution of partial units.
    pub rounding: Rounding,
    /// The work-day window.
    pub day_range: DayRange,

    /// Whether away-from-desk intervals are subtracted before classification.
    pub exclude_enabled: bool,
    /// Subtract outing intervals. Inert unless `exclude_enabled`.
    pub exclude_outside: bool,
    /// Subtract mid-shift departures. Inert unless `exclude_enabled`.
    pub exclude_break: bool,

    /// Whether the early-work sub-policy is active.
    pub early_enabled: bool,
    /// How the early window is anchored.
    pub early_mode: EarlyMode,
    /// Fixed-window start; meaningful when `early_mode` is `FixedWindow`.
    pub early_start: TimeValue,
    /// Fixed-window end; meaningful when `early_mode` is `FixedWindow`.
    pub early_end: TimeValue,
    /// Minimum recognized early duration.
    pub early_min: RecognitionMin,
    /// Maximum recognized early duration.
    pub early_max: RecognitionMax,
    /// Whether recognized early minutes are kept out of the basic bucket.
    pub early_exclude_from_basic: bool,

    /// Whether the overtime sub-policy is active.
    pub overtime_enabled: bool,
    /// How overtime is detected.
    pub overtime_mode: OvertimeMode,
    /// Minimum recognized overtime duration.
    pub overtime_min: RecognitionMin,
    /// Maximum recognized overtime duration.
    pub overtime_max: RecognitionMax,
    /// Attribution of overtime minutes that co-occur with other categories.
    pub overlap_policy: OverlapPolicy,
    /// Overtime may co-occur with early work.
    pub overlap_early: bool,
    /// Overtime may co-occur with night work.
    pub overlap_night: bool,
    /// Overtime may co-occur with holiday work.
    pub overlap_holiday: bool,

    /// Whether the night sub-policy is active.
    pub night_enabled: bool,
    /// Start of the night window.
    pub night_start: TimeValue,
    /// End of the night window.
    pub night_end: TimeValue,
    /// The night window's end falls on the following calendar day.
    pub night_cross_day: bool,
    /// Minimum recognized night duration.
    pub night_min: RecognitionMin,
    /// Maximum recognized night duration.
    pub night_max: RecognitionMax,
    /// Whether recognized night minutes are kept out of the basic bucket.
    pub night_exclude_from_basic: bool,

    /// Whether the holiday sub-policy is active.
    pub holiday_enabled: bool,
    /// How holidays are determined.
    pub holiday_basis: HolidayBasis,
    /// Absence on a holiday is not penalized.
    pub holiday_absence_ignore: bool,
    /// Minimum recognized holiday duration.
    pub holiday_min: RecognitionMin,
    /// Maximum recognized holiday duration.
    pub holiday_max: RecognitionMax,
    /// Whether recognized holiday minutes are kept out of the basic bucket.
    pub holiday_exclude_from_basic: bool,
}

impl Rule {
    /// Computes the ordered active category tags for this rule.
    ///
    /// Pure and total: always yields [`Category::Basic`] first, followed by
    /// each enabled optional category in the fixed [`Category::ORDERED`]
    /// order.
    ///
    /// # Examples
    ///
    /// ```
    /// use worktime_rules::models::{Category, Rule};
    ///
    /// let mut rule = Rule::blank("R-001");
    /// assert_eq!(rule.tag_list(), vec![Category::Basic]);
    ///
    /// rule.night_enabled = true;
    /// assert_eq!(rule.tag_list(), vec![Category::Basic, Category::Night]);
    /// ```
    pub fn tag_list(&self) -> Vec<Category> {
        let mut tags = vec![Category::Basic];
        if self.early_enabled {
            tags.push(Category::Early);
        }
        if self.overtime_enabled {
            tags.push(Category::Overtime);
        }
        if self.night_enabled {
            tags.push(Category::Night);
        }
        if self.holiday_enabled {
            tags.push(Category::Holiday);
        }
        tags
    }

    /// Recomputes `tags` from the enabling flags.
    ///
    /// Invoked immediately before a rule becomes canonical (seeding, wizard
    /// completion, editor save). Tags are a commit-time projection, not a
    /// live-reactive one.
    pub fn refresh_tags(&mut self) {
        self.tags = self.tag_list();
    }

    /// Returns true if the rule's derived tags include the given category.
    pub fn has_tag(&self, category: Category) -> bool {
        self.tag_list().contains(&category)
    }

    /// Returns true if the rule satisfies the completed-rule invariant:
    /// a non-empty name after trimming whitespace.
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Creates a structurally complete blank rule with the documented
    /// defaults, ready for the wizard to edit.
    ///
    /// All optional categories start disabled; the common section defaults
    /// to 1-minute truncation over a 00:00–23:59 day window with exclusions
    /// on. Each sub-policy carries ready-to-reveal defaults so enabling it
    /// shows sensible values.
    pub fn blank(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            desc: String::new(),
            use_flag: UseFlag::Active,
            tags: vec![Category::Basic],

            time_unit: TimeUnit::One,
            rounding: Rounding::Truncate,
            day_range: DayRange {
                start: TimeValue::from_hm(0, 0),
                end: TimeValue::from_hm(23, 59),
            },

            exclude_enabled: true,
            exclude_outside: true,
            exclude_break: true,

            early_enabled: false,
            early_mode: EarlyMode::BeforeBasicStart,
            early_start: TimeValue::from_hm(0, 0),
            early_end: TimeValue::from_hm(0, 0),
            early_min: RecognitionMin::M1,
            early_max: RecognitionMax::M60,
            early_exclude_from_basic: false,

            overtime_enabled: false,
            overtime_mode: OvertimeMode::ExceedsBasic,
            overtime_min: RecognitionMin::M1,
            overtime_max: RecognitionMax::M120,
            overlap_policy: OverlapPolicy::SeparatePerCategory,
            overlap_early: false,
            overlap_night: true,
            overlap_holiday: true,

            night_enabled: false,
            night_start: TimeValue::from_hm(22, 0),
            night_end: TimeValue::from_hm(6, 0),
            night_cross_day: true,
            night_min: RecognitionMin::M1,
            night_max: RecognitionMax::M120,
            night_exclude_from_basic: false,

            holiday_enabled: false,
            holiday_basis: HolidayBasis::PublicCalendar,
            holiday_absence_ignore: true,
            holiday_min: RecognitionMin::M1,
            holiday_max: RecognitionMax::M120,
            holiday_exclude_from_basic: false,
        }
    }
}
