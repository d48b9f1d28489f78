//! Core pipeline for the content-rollout progress dashboard: fetch a
//! published sheet's CSV export, parse it, reshape it into a
//! category → country → unit → step tree, and derive completion metrics.
//! The parse/build/aggregate stages are pure and synchronous; only the
//! fetch awaits.

pub mod config;
pub mod error;
pub mod fetch;
pub mod process;
pub mod progress;
