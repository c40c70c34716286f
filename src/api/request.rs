//! Request types for the rule management API.
//!
//! [`RulePayload`] carries every caller-editable rule field; `id` and
//! `tags` are excluded because the allocator assigns ids and tags are a
//! derived projection. Omitted fields fall back to the blank-rule
//! defaults, mirroring what the wizard's blank draft would hold.

use serde::{Deserialize, Serialize};

use crate::models::{
    DayRange, EarlyMode, HolidayBasis, OverlapPolicy, OvertimeMode, RecognitionMax,
    RecognitionMin, Rounding, Rule, TimeUnit, TimeValue, UseFlag,
};

/// Body for `POST /rules` and `PUT /rules/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulePayload {
    /// Optional id echo; when present on an update it must match the
    /// path id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Display name.
    pub name: String,
    /// Free-text description.
    pub desc: String,
    /// Lifecycle flag.
    pub use_flag: UseFlag,

    /// Granularity durations are bucketed into.
    pub time_unit: TimeUnit,
    /// Resolution of partial units.
    pub rounding: Rounding,
    /// The work-day window.
    pub day_range: DayRange,

    /// Whether away-from-desk intervals are subtracted.
    pub exclude_enabled: bool,
    /// Subtract outing intervals.
    pub exclude_outside: bool,
    /// Subtract mid-shift departures.
    pub exclude_break: bool,

    /// Whether the early-work sub-policy is active.
    pub early_enabled: bool,
    /// How the early window is anchored.
    pub early_mode: EarlyMode,
    /// Fixed-window start.
    pub early_start: TimeValue,
    /// Fixed-window end.
    pub early_end: TimeValue,
    /// Minimum recognized early duration.
    pub early_min: RecognitionMin,
    /// Maximum recognized early duration.
    pub early_max: RecognitionMax,
    /// Keep recognized early minutes out of the basic bucket.
    pub early_exclude_from_basic: bool,

    /// Whether the overtime sub-policy is active.
    pub overtime_enabled: bool,
    /// How overtime is detected.
    pub overtime_mode: OvertimeMode,
    /// Minimum recognized overtime duration.
    pub overtime_min: RecognitionMin,
    /// Maximum recognized overtime duration.
    pub overtime_max: RecognitionMax,
    /// Attribution of overlapping overtime minutes.
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
    /// The night window ends on the following calendar day.
    pub night_cross_day: bool,
    /// Minimum recognized night duration.
    pub night_min: RecognitionMin,
    /// Maximum recognized night duration.
    pub night_max: RecognitionMax,
    /// Keep recognized night minutes out of the basic bucket.
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
    /// Keep recognized holiday minutes out of the basic bucket.
    pub holiday_exclude_from_basic: bool,
}

impl Default for RulePayload {
    fn default() -> Self {
        Self::from(&Rule::blank(""))
    }
}

impl From<&Rule> for RulePayload {
    fn from(rule: &Rule) -> Self {
        Self {
            id: None,
            name: rule.name.clone(),
            desc: rule.desc.clone(),
            use_flag: rule.use_flag,
            time_unit: rule.time_unit,
            rounding: rule.rounding,
            day_range: rule.day_range.clone(),
            exclude_enabled: rule.exclude_enabled,
            exclude_outside: rule.exclude_outside,
            exclude_break: rule.exclude_break,
            early_enabled: rule.early_enabled,
            early_mode: rule.early_mode,
            early_start: rule.early_start.clone(),
            early_end: rule.early_end.clone(),
            early_min: rule.early_min,
            early_max: rule.early_max,
            early_exclude_from_basic: rule.early_exclude_from_basic,
            overtime_enabled: rule.overtime_enabled,
            overtime_mode: rule.overtime_mode,
            overtime_min: rule.overtime_min,
            overtime_max: rule.overtime_max,
            overlap_policy: rule.overlap_policy,
            overlap_early: rule.overlap_early,
            overlap_night: rule.overlap_night,
            overlap_holiday: rule.overlap_holiday,
            night_enabled: rule.night_enabled,
            night_start: rule.night_start.clone(),
            night_end: rule.night_end.clone(),
            night_cross_day: rule.night_cross_day,
            night_min: rule.night_min,
            night_max: rule.night_max,
            night_exclude_from_basic: rule.night_exclude_from_basic,
            holiday_enabled: rule.holiday_enabled,
            holiday_basis: rule.holiday_basis,
            holiday_absence_ignore: rule.holiday_absence_ignore,
            holiday_min: rule.holiday_min,
            holiday_max: rule.holiday_max,
            holiday_exclude_from_basic: rule.holiday_exclude_from_basic,
        }
    }
}

impl RulePayload {
    /// Writes every payload field onto a draft, leaving `id` and `tags`
    /// to the workflow that owns the draft.
    pub fn apply_to(&self, draft: &mut Rule) {
        draft.name = self.name.clone();
        draft.desc = self.desc.clone();
        draft.use_flag = self.use_flag;
        draft.time_unit = self.time_unit;
        draft.rounding = self.rounding;
        draft.day_range = self.day_range.clone();
        draft.exclude_enabled = self.exclude_enabled;
        draft.exclude_outside = self.exclude_outside;
        draft.exclude_break = self.exclude_break;
        draft.early_enabled = self.early_enabled;
        draft.early_mode = self.early_mode;
        draft.early_start = self.early_start.clone();
        draft.early_end = self.early_end.clone();
        draft.early_min = self.early_min;
        draft.early_max = self.early_max;
        draft.early_exclude_from_basic = self.early_exclude_from_basic;
        draft.overtime_enabled = self.overtime_enabled;
        draft.overtime_mode = self.overtime_mode;
        draft.overtime_min = self.overtime_min;
        draft.overtime_max = self.overtime_max;
        draft.overlap_policy = self.overlap_policy;
        draft.overlap_early = self.overlap_early;
        draft.overlap_night = self.overlap_night;
        draft.overlap_holiday = self.overlap_holiday;
        draft.night_enabled = self.night_enabled;
        draft.night_start = self.night_start.clone();
        draft.night_end = self.night_end.clone();
        draft.night_cross_day = self.night_cross_day;
        draft.night_min = self.night_min;
        draft.night_max = self.night_max;
        draft.night_exclude_from_basic = self.night_exclude_from_basic;
        draft.holiday_enabled = self.holiday_enabled;
        draft.holiday_basis = self.holiday_basis;
        draft.holiday_absence_ignore = self.holiday_absence_ignore;
        draft.holiday_min = self.holiday_min;
        draft.holiday_max = self.holiday_max;
        draft.holiday_exclude_from_basic = self.holiday_exclude_from_basic;
    }
}
