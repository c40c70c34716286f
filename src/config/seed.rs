//! Built-in seed rules.
//!
//! State is process-local and re-seeded on every start; these three rules
//! mirror the example data the admin screens ship with. Tags are refreshed
//! by the repository at seeding time, so they are not set here.

use crate::models::{Rounding, Rule, TimeUnit, TimeValue, UseFlag};

/// Returns the default seed rules, oldest id last mutated into place.
///
/// # Example
///
/// ```
/// use worktime_rules::config::builtin_rules;
/// use worktime_rules::store::RuleStore;
///
/// let store = RuleStore::seed(builtin_rules());
/// assert_eq!(store.next_id(), "R-004");
/// ```
pub fn builtin_rules() -> Vec<Rule> {
    let mut office = Rule::blank("R-001");
    office.name = "Standard office hours".to_string();
    office.desc = "Weekday attendance for office staff".to_string();
    office.time_unit = TimeUnit::Ten;
    office.day_range.start = TimeValue::from_hm(5, 0);
    office.day_range.end = TimeValue::from_hm(23, 0);

    let mut factory = Rule::blank("R-002");
    factory.name = "Factory overtime and night".to_string();
    factory.desc = "Shift floor staff with overtime and night recognition".to_string();
    factory.time_unit = TimeUnit::Fifteen;
    factory.rounding = Rounding::Round;
    factory.overtime_enabled = true;
    factory.night_enabled = true;

    let mut holiday = Rule::blank("R-003");
    holiday.name = "Holiday duty".to_string();
    holiday.desc = "Public holiday coverage, currently suspended".to_string();
    holiday.use_flag = UseFlag::Inactive;
    holiday.holiday_enabled = true;

    vec![office, factory, holiday]
}
