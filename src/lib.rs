#![doc(test(attr(deny(warnings))))]

//! Insights Core computes spending summaries, category breakdowns, monthly
//! trends, budget goals, and paginated transaction listings over a fixed
//! single-customer dataset, for consumption by a dashboard frontend.

pub mod cli;
pub mod config;
pub mod core;
pub mod dataset;
pub mod domain;
pub mod errors;
pub mod storage;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("insights_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
        tracing::info!("Insights Core tracing initialized.");
    });
}
