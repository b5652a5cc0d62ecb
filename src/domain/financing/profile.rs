//! Applicant profile for financing eligibility scoring.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Employment situation of the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    Permanent,
    FixedTerm,
    SelfEmployed,
    Retired,
    Freelancer,
}

impl EmploymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EmploymentStatus::Permanent => "permanent employment",
            EmploymentStatus::FixedTerm => "fixed-term employment",
            EmploymentStatus::SelfEmployed => "self-employment",
            EmploymentStatus::Retired => "retirement",
            EmploymentStatus::Freelancer => "freelance work",
        }
    }
}

/// SCHUFA credit rating band.
///
/// `Unknown` covers applicants without a German credit history yet,
/// common for recent arrivals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchufaRating {
    Excellent,
    Good,
    Fair,
    Poor,
    VeryPoor,
    Unknown,
}

/// Residency status, ordered roughly by how lenders weigh it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidencyStatus {
    GermanCitizen,
    EuCitizen,
    PermanentResident,
    BlueCard,
    TemporaryPermit,
}

/// Raw applicant inputs to the financing scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancingProfile {
    pub employment_status: EmploymentStatus,
    /// Years in the current employment situation, 0 to 50.
    pub employment_years: u8,
    /// Monthly net household income in euros, strictly positive.
    pub monthly_net_income: f64,
    /// Existing monthly debt service in euros.
    pub monthly_debt: f64,
    /// Liquid funds available as down payment, in euros.
    pub down_payment_available: f64,
    pub schufa_rating: SchufaRating,
    pub residency_status: ResidencyStatus,
}

impl FinancingProfile {
    /// Validates documented input ranges. The scorer itself is total
    /// over validated profiles and never fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.employment_years > 50 {
            return Err(ValidationError::out_of_range(
                "employment_years",
                0.0,
                50.0,
                f64::from(self.employment_years),
            ));
        }
        if !self.monthly_net_income.is_finite() || self.monthly_net_income <= 0.0 {
            return Err(ValidationError::invalid_format(
                "monthly_net_income",
                "must be a positive amount",
            ));
        }
        if !self.monthly_debt.is_finite() || self.monthly_debt < 0.0 {
            return Err(ValidationError::invalid_format(
                "monthly_debt",
                "must be zero or positive",
            ));
        }
        if !self.down_payment_available.is_finite() || self.down_payment_available < 0.0 {
            return Err(ValidationError::invalid_format(
                "down_payment_available",
                "must be zero or positive",
            ));
        }
        Ok(())
    }

    /// Annual net income in euros.
    pub fn annual_net_income(&self) -> f64 {
        self.monthly_net_income * 12.0
    }

    /// Debt-to-income ratio (monthly debt over monthly net income).
    pub fn debt_to_income_ratio(&self) -> f64 {
        self.monthly_debt / self.monthly_net_income
    }
}
