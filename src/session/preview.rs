//! Read-only projections for the wizard's preview step.
//!
//! Everything here is a pure function of a rule; nothing mutates the draft.

use serde::Serialize;

use crate::models::{
    Category, EarlyMode, HolidayBasis, OverlapPolicy, OvertimeMode, Rounding, Rule,
};

/// One label/value line of the settings summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewLine {
    /// What the line describes.
    pub label: &'static str,
    /// Human-readable rendering of the setting.
    pub value: String,
}

/// One active category with its one-line summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryLine {
    /// The active category.
    pub category: Category,
    /// Extra detail: the night window, the holiday basis, otherwise empty.
    pub detail: String,
}

/// The five processing steps the external classification engine performs
/// with a finished rule. Documentation text only; none of these steps are
/// executed in-core.
pub const PROCESSING_STEPS: [&str; 5] = [
    "Collect check-in/check-out punch records",
    "Fix the basic work window from the rule's day range",
    "Subtract excluded away-from-desk intervals",
    "Apply each enabled sub-policy's recognition window and bounds",
    "Bucket the resulting minutes by category, rounding per time unit",
];

/// Computes the per-tag summary lines for the preview step.
///
/// One line per derived tag, in tag order. Night shows its time window
/// (marking a cross-day end), holiday shows its basis; the remaining
/// categories carry no extra detail.
pub fn category_summaries(rule: &Rule) -> Vec<CategoryLine> {
    rule.tag_list()
        .into_iter()
        .map(|category| {
            let detail = match category {
                Category::Night => {
                    let suffix = if rule.night_cross_day { " (next day)" } else { "" };
                    format!("{} ~ {}{}", rule.night_start, rule.night_end, suffix)
                }
                Category::Holiday => format!("{} basis", holiday_basis_text(rule.holiday_basis)),
                _ => String::new(),
            };
            CategoryLine { category, detail }
        })
        .collect()
}

/// Computes the human-readable list of every active common and sub-policy
/// setting, as shown on the preview step.
pub fn setting_lines(rule: &Rule) -> Vec<PreviewLine> {
    let mut lines = vec![
        PreviewLine {
            label: "Time unit",
            value: format!(
                "{} min unit, {}",
                rule.time_unit.minutes(),
                rounding_text(rule.rounding)
            ),
        },
        PreviewLine {
            label: "Day window",
            value: format!("{} ~ {}", rule.day_range.start, rule.day_range.end),
        },
        PreviewLine {
            label: "Work exclusion",
            value: exclusion_text(rule),
        },
    ];

    if rule.early_enabled {
        lines.push(PreviewLine {
            label: "Early work",
            value: format!(
                "{}, {} min (min) / {} min (max)",
                early_mode_text(rule.early_mode),
                rule.early_min.minutes(),
                rule.early_max.minutes()
            ),
        });
    }
    if rule.overtime_enabled {
        lines.push(PreviewLine {
            label: "Overtime",
            value: format!(
                "{}, {} min (min) / {} min (max), {}",
                overtime_mode_text(rule.overtime_mode),
                rule.overtime_min.minutes(),
                rule.overtime_max.minutes(),
                overlap_text(rule.overlap_policy)
            ),
        });
    }
    if rule.night_enabled {
        let suffix = if rule.night_cross_day { " (next day)" } else { "" };
        lines.push(PreviewLine {
            label: "Night work",
            value: format!(
                "{} ~ {}{}, {} min (min) / {} min (max)",
                rule.night_start,
                rule.night_end,
                suffix,
                rule.night_min.minutes(),
                rule.night_max.minutes()
            ),
        });
    }
    if rule.holiday_enabled {
        let absence = if rule.holiday_absence_ignore {
            "absence ignored"
        } else {
            "absence applied"
        };
        lines.push(PreviewLine {
            label: "Holiday work",
            value: format!("{}, {}", holiday_basis_text(rule.holiday_basis), absence),
        });
    }

    lines
}

fn rounding_text(rounding: Rounding) -> &'static str {
    match rounding {
        Rounding::Truncate => "truncate",
        Rounding::Round => "round",
        Rounding::Ceiling => "ceiling",
    }
}

fn exclusion_text(rule: &Rule) -> String {
    if !rule.exclude_enabled {
        return "not used".to_string();
    }
    match (rule.exclude_outside, rule.exclude_break) {
        (true, true) => "outings and mid-shift departures excluded".to_string(),
        (true, false) => "outings excluded".to_string(),
        (false, true) => "mid-shift departures excluded".to_string(),
        (false, false) => "enabled, no intervals selected".to_string(),
    }
}

fn early_mode_text(mode: EarlyMode) -> &'static str {
    match mode {
        EarlyMode::BeforeBasicStart => "before basic start",
        EarlyMode::FixedWindow => "fixed window",
    }
}

fn overtime_mode_text(mode: OvertimeMode) -> &'static str {
    match mode {
        OvertimeMode::ExceedsBasic => "exceeds basic window",
        OvertimeMode::ExceedsFixedTarget => "exceeds fixed target",
    }
}

fn overlap_text(policy: OverlapPolicy) -> &'static str {
    match policy {
        OverlapPolicy::SeparatePerCategory => "separate per category",
        OverlapPolicy::AtMostOne => "at most one category",
    }
}

fn holiday_basis_text(basis: HolidayBasis) -> &'static str {
    match basis {
        HolidayBasis::PublicCalendar => "public holiday calendar",
        HolidayBasis::UserDefined => "user-defined",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn night_holiday_rule() -> Rule {
        let mut rule = Rule::blank("R-001");
        rule.name = "Night Shift A".to_string();
        rule.night_enabled = true;
        rule.holiday_enabled = true;
        rule
    }

    #[test]
    fn test_category_summaries_follow_tag_order() {
        let rule = night_holiday_rule();
        let lines = category_summaries(&rule);

        let categories: Vec<Category> = lines.iter().map(|l| l.category).collect();
        assert_eq!(
            categories,
            vec![Category::Basic, Category::Night, Category::Holiday]
        );
    }

    #[test]
    fn test_night_summary_shows_window_and_cross_day() {
        let rule = night_holiday_rule();
        let lines = category_summaries(&rule);
        let night = lines.iter().find(|l| l.category == Category::Night).unwrap();
        assert_eq!(night.detail, "22:00 ~ 06:00 (next day)");
    }

    #[test]
    fn test_holiday_summary_shows_basis() {
        let rule = night_holiday_rule();
        let lines = category_summaries(&rule);
        let holiday = lines
            .iter()
            .find(|l| l.category == Category::Holiday)
            .unwrap();
        assert_eq!(holiday.detail, "public holiday calendar basis");
    }

    #[test]
    fn test_basic_summary_has_no_detail() {
        let rule = Rule::blank("R-001");
        let lines = category_summaries(&rule);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].detail, "");
    }

    #[test]
    fn test_setting_lines_always_include_common_section() {
        let rule = Rule::blank("R-001");
        let lines = setting_lines(&rule);

        let labels: Vec<&str> = lines.iter().map(|l| l.label).collect();
        assert_eq!(labels, vec!["Time unit", "Day window", "Work exclusion"]);
        assert_eq!(lines[0].value, "1 min unit, truncate");
        assert_eq!(lines[1].value, "00:00 ~ 23:59");
        assert_eq!(lines[2].value, "outings and mid-shift departures excluded");
    }

    #[test]
    fn test_setting_lines_include_enabled_sub_policies_only() {
        let mut rule = Rule::blank("R-001");
        rule.overtime_enabled = true;

        let lines = setting_lines(&rule);
        let labels: Vec<&str> = lines.iter().map(|l| l.label).collect();
        assert!(labels.contains(&"Overtime"));
        assert!(!labels.contains(&"Early work"));
        assert!(!labels.contains(&"Night work"));

        let overtime = lines.iter().find(|l| l.label == "Overtime").unwrap();
        assert_eq!(
            overtime.value,
            "exceeds basic window, 1 min (min) / 120 min (max), separate per category"
        );
    }

    #[test]
    fn test_exclusion_text_variants() {
        let mut rule = Rule::blank("R-001");
        rule.exclude_enabled = false;
        assert_eq!(setting_lines(&rule)[2].value, "not used");

        rule.exclude_enabled = true;
        rule.exclude_break = false;
        assert_eq!(setting_lines(&rule)[2].value, "outings excluded");
    }

    #[test]
    fn test_preview_is_pure() {
        let rule = night_holiday_rule();
        let before = rule.clone();
        let _ = category_summaries(&rule);
        let _ = setting_lines(&rule);
        assert_eq!(rule, before);
    }

    #[test]
    fn test_processing_steps_documented() {
        assert_eq!(PROCESSING_STEPS.len(), 5);
        assert!(PROCESSING_STEPS[0].contains("punch"));
    }
}
