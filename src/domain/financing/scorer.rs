//! Financing eligibility scorer.
//!
//! Six independently weighted sub-scores sum to a 0-100 total. Every cut
//! point lives in the constants block below; none are inlined at use
//! sites, so the banding can be audited in one place.

use serde::{Deserialize, Serialize};

use super::{EmploymentStatus, FinancingProfile, ResidencyStatus, SchufaRating};

// ── Sub-score maxima (sum to 100) ────────────────────────────────────

pub const EMPLOYMENT_MAX: f64 = 25.0;
pub const INCOME_RATIO_MAX: f64 = 20.0;
pub const DOWN_PAYMENT_MAX: f64 = 20.0;
pub const SCHUFA_MAX: f64 = 15.0;
pub const RESIDENCY_MAX: f64 = 15.0;
pub const YEARS_BONUS_MAX: f64 = 5.0;

// ── Banding cut points ───────────────────────────────────────────────

/// Debt-to-income below this ratio earns full marks.
pub const COMFORTABLE_DEBT_RATIO: f64 = 0.20;
/// Debt-to-income above this ratio earns the minimal band.
pub const STRAINED_DEBT_RATIO: f64 = 0.35;

/// Price proxy: banks roughly consider properties around five annual
/// net incomes; the down-payment fraction is measured against that.
pub const PRICE_PROXY_INCOME_MULTIPLE: f64 = 5.0;

/// Max loan heuristic: five annual net incomes, less a multiple of the
/// annual debt burden.
pub const LOAN_INCOME_MULTIPLE: f64 = 5.0;
pub const DEBT_ADJUSTMENT_MULTIPLE: f64 = 4.0;

/// Employment-years bonus saturates here.
pub const YEARS_BONUS_SATURATION: u8 = 5;

/// Likelihood label thresholds, exact at the boundary.
pub const HIGH_LIKELIHOOD_THRESHOLD: f64 = 75.0;
pub const MEDIUM_LIKELIHOOD_THRESHOLD: f64 = 50.0;

/// Sub-scores counting as a strength (fraction of the factor maximum).
const STRENGTH_FRACTION: f64 = 0.8;
/// Sub-scores needing improvement (fraction of the factor maximum).
const WEAKNESS_FRACTION: f64 = 0.4;

/// Banded likelihood of mortgage approval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikelihoodLabel {
    High,
    Medium,
    Low,
}

impl LikelihoodLabel {
    /// Maps a total score to its label. Boundaries are inclusive: a
    /// score of exactly 75 is High, 74.999 is Medium.
    pub fn from_score(score: f64) -> Self {
        if score >= HIGH_LIKELIHOOD_THRESHOLD {
            LikelihoodLabel::High
        } else if score >= MEDIUM_LIKELIHOOD_THRESHOLD {
            LikelihoodLabel::Medium
        } else {
            LikelihoodLabel::Low
        }
    }

    /// Expected interest rate band for this label, percent per year.
    /// Better labels get a tighter, lower band.
    pub fn expected_rate_band(&self) -> (f64, f64) {
        match self {
            LikelihoodLabel::High => (3.4, 3.9),
            LikelihoodLabel::Medium => (3.9, 4.6),
            LikelihoodLabel::Low => (4.6, 5.8),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LikelihoodLabel::High => "high",
            LikelihoodLabel::Medium => "medium",
            LikelihoodLabel::Low => "low",
        }
    }
}

/// The six weighted factor scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    pub employment: f64,
    pub income_ratio: f64,
    pub down_payment: f64,
    pub schufa: f64,
    pub residency: f64,
    pub years_bonus: f64,
}

impl SubScores {
    /// Sum of all factors, clamped to the 0-100 scale.
    pub fn total(&self) -> f64 {
        (self.employment
            + self.income_ratio
            + self.down_payment
            + self.schufa
            + self.residency
            + self.years_bonus)
            .clamp(0.0, 100.0)
    }
}

/// Complete output of one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancingReport {
    pub sub_scores: SubScores,
    pub total_score: f64,
    pub likelihood: LikelihoodLabel,
    /// Heuristic upper bound on the loan a bank might grant, euros.
    pub max_loan_estimate: f64,
    pub recommended_down_payment_percent: f64,
    /// Loan-to-value against the implied price proxy, percent.
    pub ltv_ratio_percent: f64,
    pub expected_rate_min: f64,
    pub expected_rate_max: f64,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub document_checklist: Vec<String>,
}

/// Pure scorer: applicant profile in, frozen-ready report out.
///
/// Never fails for profiles that passed `FinancingProfile::validate`,
/// and has no time or randomness dependence, so repeated invocations
/// on the same profile are bit-identical.
pub struct FinancingScorer;

impl FinancingScorer {
    /// Scores a validated applicant profile.
    pub fn score(profile: &FinancingProfile) -> FinancingReport {
        let sub_scores = SubScores {
            employment: Self::employment_score(profile.employment_status),
            income_ratio: Self::income_ratio_score(profile.debt_to_income_ratio()),
            down_payment: Self::down_payment_score(profile),
            schufa: Self::schufa_score(profile.schufa_rating),
            residency: Self::residency_score(profile.residency_status),
            years_bonus: Self::years_bonus_score(profile.employment_years),
        };
        let total_score = sub_scores.total();
        let likelihood = LikelihoodLabel::from_score(total_score);
        let (expected_rate_min, expected_rate_max) = likelihood.expected_rate_band();

        let implied_price = profile.annual_net_income() * PRICE_PROXY_INCOME_MULTIPLE;
        let down_fraction = profile.down_payment_available / implied_price;
        let loan_needed = (implied_price - profile.down_payment_available).max(0.0);

        FinancingReport {
            sub_scores,
            total_score,
            likelihood,
            max_loan_estimate: Self::max_loan_estimate(profile),
            recommended_down_payment_percent: Self::recommended_down_payment_percent(down_fraction),
            ltv_ratio_percent: round1(loan_needed / implied_price * 100.0),
            expected_rate_min,
            expected_rate_max,
            strengths: Self::strengths(&sub_scores, profile),
            improvements: Self::improvements(&sub_scores, profile),
            document_checklist: Self::document_checklist(profile),
        }
    }

    /// Table lookup by employment status; permanent contracts score
    /// highest, freelance work lowest.
    fn employment_score(status: EmploymentStatus) -> f64 {
        match status {
            EmploymentStatus::Permanent => EMPLOYMENT_MAX,
            EmploymentStatus::FixedTerm => 16.0,
            EmploymentStatus::Retired => 14.0,
            EmploymentStatus::SelfEmployed => 12.0,
            EmploymentStatus::Freelancer => 10.0,
        }
    }

    /// Banded on debt-to-income: full marks below 20%, partial up to
    /// 35%, minimal above.
    fn income_ratio_score(ratio: f64) -> f64 {
        if ratio < COMFORTABLE_DEBT_RATIO {
            INCOME_RATIO_MAX
        } else if ratio <= STRAINED_DEBT_RATIO {
            12.0
        } else {
            4.0
        }
    }

    /// Banded on down payment as a fraction of the implied price proxy.
    fn down_payment_score(profile: &FinancingProfile) -> f64 {
        let implied_price = profile.annual_net_income() * PRICE_PROXY_INCOME_MULTIPLE;
        let fraction = profile.down_payment_available / implied_price;
        if fraction >= 0.30 {
            DOWN_PAYMENT_MAX
        } else if fraction >= 0.20 {
            16.0
        } else if fraction >= 0.10 {
            10.0
        } else if fraction > 0.0 {
            5.0
        } else {
            0.0
        }
    }

    /// Monotonic with rating quality. `Unknown` deliberately lands
    /// between Fair and Poor: missing data is below median, not a hard
    /// failure, and the advisory text says so.
    fn schufa_score(rating: SchufaRating) -> f64 {
        match rating {
            SchufaRating::Excellent => SCHUFA_MAX,
            SchufaRating::Good => 12.0,
            SchufaRating::Fair => 9.0,
            SchufaRating::Unknown => 6.0,
            SchufaRating::Poor => 4.0,
            SchufaRating::VeryPoor => 1.0,
        }
    }

    fn residency_score(status: ResidencyStatus) -> f64 {
        match status {
            ResidencyStatus::GermanCitizen => RESIDENCY_MAX,
            ResidencyStatus::EuCitizen => 13.0,
            ResidencyStatus::PermanentResident => 10.0,
            ResidencyStatus::BlueCard => 8.0,
            ResidencyStatus::TemporaryPermit => 5.0,
        }
    }

    /// One point per employment year, saturating at five.
    fn years_bonus_score(years: u8) -> f64 {
        f64::from(years.min(YEARS_BONUS_SATURATION))
    }

    fn max_loan_estimate(profile: &FinancingProfile) -> f64 {
        let annual_debt = profile.monthly_debt * 12.0;
        (profile.annual_net_income() * LOAN_INCOME_MULTIPLE
            - annual_debt * DEBT_ADJUSTMENT_MULTIPLE)
            .max(0.0)
    }

    fn recommended_down_payment_percent(down_fraction: f64) -> f64 {
        // 20% equity is the usual bank comfort line; applicants already
        // above it are told to keep their actual level.
        if down_fraction >= 0.20 {
            round1(down_fraction * 100.0)
        } else {
            20.0
        }
    }

    fn strengths(scores: &SubScores, profile: &FinancingProfile) -> Vec<String> {
        let mut out = Vec::new();
        if scores.employment >= EMPLOYMENT_MAX * STRENGTH_FRACTION {
            out.push(format!(
                "Your {} is viewed favorably by German lenders.",
                profile.employment_status.label()
            ));
        }
        if scores.income_ratio >= INCOME_RATIO_MAX * STRENGTH_FRACTION {
            out.push(
                "Your existing debt load is comfortably low relative to income.".to_string(),
            );
        }
        if scores.down_payment >= DOWN_PAYMENT_MAX * STRENGTH_FRACTION {
            out.push(
                "Your down payment comfortably covers the usual equity expectations.".to_string(),
            );
        }
        if scores.schufa >= SCHUFA_MAX * STRENGTH_FRACTION {
            out.push("Your SCHUFA rating is a strong signal for banks.".to_string());
        }
        if scores.residency >= RESIDENCY_MAX * STRENGTH_FRACTION {
            out.push("Your residency status poses no obstacle to financing.".to_string());
        }
        if scores.years_bonus >= YEARS_BONUS_MAX * STRENGTH_FRACTION {
            out.push("Several years in your current employment add stability.".to_string());
        }
        out
    }

    fn improvements(scores: &SubScores, profile: &FinancingProfile) -> Vec<String> {
        let mut out = Vec::new();
        if scores.employment <= EMPLOYMENT_MAX * WEAKNESS_FRACTION {
            out.push(format!(
                "Banks discount {}; prepare two years of income records to offset this.",
                profile.employment_status.label()
            ));
        }
        if scores.income_ratio <= INCOME_RATIO_MAX * WEAKNESS_FRACTION {
            out.push(
                "Reduce monthly debt obligations; above 35% of net income most banks decline."
                    .to_string(),
            );
        }
        if scores.down_payment <= DOWN_PAYMENT_MAX * WEAKNESS_FRACTION {
            out.push(
                "Increase your down payment toward 20% of the target price to unlock better rates."
                    .to_string(),
            );
        }
        if profile.schufa_rating == SchufaRating::Unknown {
            out.push(
                "No SCHUFA history yet, so we score it conservatively below the median rather \
                 than as a failure; obtain a SCHUFA report to replace the assumption."
                    .to_string(),
            );
        } else if scores.schufa <= SCHUFA_MAX * WEAKNESS_FRACTION {
            out.push(
                "Clear negative SCHUFA entries before applying; they dominate bank decisions."
                    .to_string(),
            );
        }
        if scores.residency <= RESIDENCY_MAX * WEAKNESS_FRACTION {
            out.push(
                "A temporary permit limits lender choice; a longer-term status widens it."
                    .to_string(),
            );
        }
        out
    }

    fn document_checklist(profile: &FinancingProfile) -> Vec<String> {
        let mut docs = vec![
            "Passport or national ID".to_string(),
            "Proof of residence registration (Anmeldung)".to_string(),
            "Last three salary or income statements".to_string(),
            "Bank statements proving the down payment".to_string(),
            "SCHUFA report".to_string(),
        ];
        match profile.employment_status {
            EmploymentStatus::Permanent | EmploymentStatus::FixedTerm => {
                docs.push("Employment contract".to_string());
                if profile.employment_status == EmploymentStatus::FixedTerm {
                    docs.push("Employer statement on contract extension".to_string());
                }
            }
            EmploymentStatus::SelfEmployed | EmploymentStatus::Freelancer => {
                docs.push("Tax returns for the last 2 years".to_string());
                docs.push("Current BWA (business evaluation)".to_string());
            }
            EmploymentStatus::Retired => {
                docs.push("Pension statement (Rentenbescheid)".to_string());
            }
        }
        docs
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
