//! Relo Compass - Relocation planning and property purchase assessment for Germany.
//!
//! This crate tracks a user's relocation journey through ordered phases and
//! steps, evaluates purchase-side costs, financing eligibility and rental ROI
//! through deterministic calculators, and aggregates everything into a single
//! dashboard view.

pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
