//! Rental return calculator.
//!
//! Yields, amortization and a ten-year forward projection. The
//! projection is a per-year simulation rather than a closed form: value
//! and rent compound year by year and the loan amortizes month by month,
//! so per-year rounding matches what a reader can verify by hand.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Years covered by the projection series.
pub const PROJECTION_YEARS: u32 = 10;

/// Assumed annual rent growth used in projections.
pub const ANNUAL_RENT_GROWTH: f64 = 0.015;

/// Reference bands against which the composite grade normalizes.
/// A cap rate at or above 5% earns the full cap-rate component, and so on.
pub const CAP_RATE_REFERENCE: f64 = 0.05;
pub const CASH_ON_CASH_REFERENCE: f64 = 0.08;
pub const GROSS_YIELD_REFERENCE: f64 = 0.06;

/// Component weights of the composite grade (sum to 100).
pub const CAP_RATE_WEIGHT: f64 = 40.0;
pub const CASH_ON_CASH_WEIGHT: f64 = 40.0;
pub const GROSS_YIELD_WEIGHT: f64 = 20.0;

/// Grade label thresholds, exact at the boundary.
pub const EXCELLENT_GRADE_THRESHOLD: f64 = 75.0;
pub const GOOD_GRADE_THRESHOLD: f64 = 50.0;
pub const FAIR_GRADE_THRESHOLD: f64 = 25.0;

/// Errors raised by the ROI calculator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RoiError {
    /// Division guard: cash-on-cash return is cash flow over invested
    /// capital and is undefined without any.
    #[error("Cash-on-cash return is undefined with a zero down payment")]
    ZeroDownPayment,
}

/// Banded summary of the composite investment grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentGradeLabel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl InvestmentGradeLabel {
    /// Maps a composite grade to its label; boundaries are inclusive.
    pub fn from_grade(grade: f64) -> Self {
        if grade >= EXCELLENT_GRADE_THRESHOLD {
            InvestmentGradeLabel::Excellent
        } else if grade >= GOOD_GRADE_THRESHOLD {
            InvestmentGradeLabel::Good
        } else if grade >= FAIR_GRADE_THRESHOLD {
            InvestmentGradeLabel::Fair
        } else {
            InvestmentGradeLabel::Poor
        }
    }
}

/// Inputs to one ROI calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    /// Purchase price in euros, strictly positive.
    pub purchase_price: f64,
    /// Equity invested up front, in euros.
    pub down_payment: f64,
    pub monthly_rent: f64,
    pub monthly_expenses: f64,
    /// Expected annual property appreciation, as a fraction.
    pub annual_appreciation: f64,
    /// Expected vacancy, as a fraction of the year.
    pub vacancy_rate: f64,
    /// Nominal annual mortgage rate, as a fraction.
    pub mortgage_rate: f64,
    pub mortgage_term_years: u32,
}

impl RoiInputs {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.purchase_price.is_finite() || self.purchase_price <= 0.0 {
            return Err(ValidationError::invalid_format(
                "purchase_price",
                "must be a positive amount",
            ));
        }
        if !self.down_payment.is_finite() || self.down_payment < 0.0 {
            return Err(ValidationError::invalid_format(
                "down_payment",
                "must be zero or positive",
            ));
        }
        if self.down_payment > self.purchase_price {
            return Err(ValidationError::invalid_format(
                "down_payment",
                "cannot exceed the purchase price",
            ));
        }
        if !self.monthly_rent.is_finite() || self.monthly_rent < 0.0 {
            return Err(ValidationError::invalid_format(
                "monthly_rent",
                "must be zero or positive",
            ));
        }
        if !self.monthly_expenses.is_finite() || self.monthly_expenses < 0.0 {
            return Err(ValidationError::invalid_format(
                "monthly_expenses",
                "must be zero or positive",
            ));
        }
        if !(0.0..1.0).contains(&self.vacancy_rate) {
            return Err(ValidationError::out_of_range(
                "vacancy_rate",
                0.0,
                1.0,
                self.vacancy_rate,
            ));
        }
        if !self.mortgage_rate.is_finite() || self.mortgage_rate < 0.0 {
            return Err(ValidationError::invalid_format(
                "mortgage_rate",
                "must be zero or positive",
            ));
        }
        if self.mortgage_term_years == 0 || self.mortgage_term_years > 40 {
            return Err(ValidationError::out_of_range(
                "mortgage_term_years",
                1.0,
                40.0,
                f64::from(self.mortgage_term_years),
            ));
        }
        Ok(())
    }
}

/// One year of the forward projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearProjection {
    /// 1-based year index.
    pub year: u32,
    pub property_value: f64,
    /// Vacancy-adjusted rental income of the year.
    pub gross_rental_income: f64,
    pub remaining_principal: f64,
    /// Property value less remaining principal.
    pub equity: f64,
    pub annual_cash_flow: f64,
    pub cumulative_cash_flow: f64,
}

/// Complete output of one ROI calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoiBreakdown {
    pub gross_rental_income: f64,
    pub net_operating_income: f64,
    pub monthly_mortgage_payment: f64,
    pub annual_cash_flow: f64,
    pub gross_yield_percent: f64,
    pub net_yield_percent: f64,
    pub cap_rate_percent: f64,
    pub cash_on_cash_percent: f64,
    /// Composite 0-100 score over cap rate, cash-on-cash and yield.
    pub investment_grade: f64,
    pub investment_grade_label: InvestmentGradeLabel,
    pub projections: Vec<YearProjection>,
}

/// Pure calculator: investment inputs in, yield metrics and projection
/// series out. Deterministic for identical inputs.
pub struct RoiCalculator;

impl RoiCalculator {
    /// Computes the breakdown for validated inputs.
    ///
    /// # Errors
    ///
    /// `RoiError::ZeroDownPayment` when `down_payment` is zero, since
    /// cash-on-cash return would divide by it.
    pub fn calculate(inputs: &RoiInputs) -> Result<RoiBreakdown, RoiError> {
        if inputs.down_payment == 0.0 {
            return Err(RoiError::ZeroDownPayment);
        }

        let price = inputs.purchase_price;
        let gross_rental_income = inputs.monthly_rent * 12.0 * (1.0 - inputs.vacancy_rate);
        let net_operating_income = gross_rental_income - inputs.monthly_expenses * 12.0;

        let loan = price - inputs.down_payment;
        let monthly_payment = Self::monthly_payment(
            loan,
            inputs.mortgage_rate,
            inputs.mortgage_term_years * 12,
        );
        let annual_cash_flow = net_operating_income - monthly_payment * 12.0;

        let gross_yield = gross_rental_income / price;
        let net_yield = net_operating_income / price;
        let cap_rate = net_operating_income / price;
        let cash_on_cash = annual_cash_flow / inputs.down_payment;

        let investment_grade = Self::composite_grade(cap_rate, cash_on_cash, gross_yield);

        Ok(RoiBreakdown {
            gross_rental_income: round2(gross_rental_income),
            net_operating_income: round2(net_operating_income),
            monthly_mortgage_payment: round2(monthly_payment),
            annual_cash_flow: round2(annual_cash_flow),
            gross_yield_percent: round2(gross_yield * 100.0),
            net_yield_percent: round2(net_yield * 100.0),
            cap_rate_percent: round2(cap_rate * 100.0),
            cash_on_cash_percent: round2(cash_on_cash * 100.0),
            investment_grade,
            investment_grade_label: InvestmentGradeLabel::from_grade(investment_grade),
            projections: Self::project(inputs, loan, monthly_payment),
        })
    }

    /// Standard amortization payment; straight division at a zero rate.
    fn monthly_payment(loan: f64, annual_rate: f64, months: u32) -> f64 {
        if loan <= 0.0 {
            return 0.0;
        }
        let n = f64::from(months);
        if annual_rate == 0.0 {
            return loan / n;
        }
        let r = annual_rate / 12.0;
        loan * r / (1.0 - (1.0 + r).powf(-n))
    }

    /// Normalizes each metric against its reference band, weights and
    /// sums. Negative cash flow contributes zero, not a penalty.
    fn composite_grade(cap_rate: f64, cash_on_cash: f64, gross_yield: f64) -> f64 {
        let cap = (cap_rate / CAP_RATE_REFERENCE).clamp(0.0, 1.0) * CAP_RATE_WEIGHT;
        let coc = (cash_on_cash / CASH_ON_CASH_REFERENCE).clamp(0.0, 1.0) * CASH_ON_CASH_WEIGHT;
        let gy = (gross_yield / GROSS_YIELD_REFERENCE).clamp(0.0, 1.0) * GROSS_YIELD_WEIGHT;
        round1((cap + coc + gy).clamp(0.0, 100.0))
    }

    /// Forward simulation, one entry per year. Value and rent compound
    /// once per year; the loan amortizes month by month so the final
    /// partial payment never overshoots the balance.
    fn project(inputs: &RoiInputs, loan: f64, monthly_payment: f64) -> Vec<YearProjection> {
        let monthly_rate = inputs.mortgage_rate / 12.0;
        let annual_expenses = inputs.monthly_expenses * 12.0;

        let mut property_value = inputs.purchase_price;
        let mut yearly_rent = inputs.monthly_rent * 12.0 * (1.0 - inputs.vacancy_rate);
        let mut balance = loan;
        let mut cumulative_cash_flow = 0.0;

        (1..=PROJECTION_YEARS)
            .map(|year| {
                property_value *= 1.0 + inputs.annual_appreciation;
                yearly_rent *= 1.0 + ANNUAL_RENT_GROWTH;

                let mut debt_service = 0.0;
                for _ in 0..12 {
                    if balance <= 0.0 {
                        break;
                    }
                    let interest = balance * monthly_rate;
                    let principal = (monthly_payment - interest).min(balance);
                    balance -= principal;
                    debt_service += interest + principal;
                }

                let cash_flow = yearly_rent - annual_expenses - debt_service;
                cumulative_cash_flow += cash_flow;

                YearProjection {
                    year,
                    property_value: round2(property_value),
                    gross_rental_income: round2(yearly_rent),
                    remaining_principal: round2(balance),
                    equity: round2(property_value - balance),
                    annual_cash_flow: round2(cash_flow),
                    cumulative_cash_flow: round2(cumulative_cash_flow),
                }
            })
            .collect()
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
