//! Core data models for the work-time rule engine.
//!
//! This module contains the rule schema and its supporting primitives.

mod category;
mod rule;
mod time_value;

pub use category::Category;
pub use rule::{
    DayRange, EarlyMode, HolidayBasis, OverlapPolicy, OvertimeMode, RecognitionMax,
    RecognitionMin, Rounding, Rule, TimeUnit, UseFlag,
};
pub use time_value::TimeValue;
