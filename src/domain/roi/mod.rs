//! ROI module - rental investment return calculator.

mod calculator;
mod snapshot;

pub use calculator::{
    InvestmentGradeLabel, RoiBreakdown, RoiCalculator, RoiError, RoiInputs, YearProjection,
    ANNUAL_RENT_GROWTH, EXCELLENT_GRADE_THRESHOLD, FAIR_GRADE_THRESHOLD, GOOD_GRADE_THRESHOLD,
    PROJECTION_YEARS,
};
pub use snapshot::RoiCalculation;
