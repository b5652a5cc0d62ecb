//! Financing module - eligibility scoring for a German mortgage.

mod assessment;
mod profile;
mod scorer;

pub use assessment::FinancingAssessment;
pub use profile::{EmploymentStatus, FinancingProfile, ResidencyStatus, SchufaRating};
pub use scorer::{
    FinancingReport, FinancingScorer, LikelihoodLabel, SubScores, HIGH_LIKELIHOOD_THRESHOLD,
    MEDIUM_LIKELIHOOD_THRESHOLD,
};
