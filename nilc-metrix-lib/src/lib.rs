#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for nilc-metrix
//!
//! This library holds all functionality of the nilc-metrix service, which computes
//! textual complexity metrics for Portuguese texts and serves them over HTTP.
//!
//! # Module Organization
//!
//! - [`metrics`]: The static metric catalog
//! - [`analyzer`]: Invoking the external analyzer and parsing its output
//! - [`results`]: Assembling raw values into sorted, indexed results
//! - [`reports`]: Rendering results as JSON, CSV, console text, or HTML
//! - [`ranking`]: Per-sentence difficulty ranking
//! - [`server`]: The HTTP front end
//! - [`commands`]: Command-line interface and orchestration

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod analyzer;
#[cfg(not(any(debug_assertions, test)))]
mod analyzer;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod metrics;
#[cfg(not(any(debug_assertions, test)))]
mod metrics;

#[cfg(any(debug_assertions, test))]
pub mod ranking;
#[cfg(not(any(debug_assertions, test)))]
mod ranking;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

#[cfg(any(debug_assertions, test))]
pub mod results;
#[cfg(not(any(debug_assertions, test)))]
mod results;

#[cfg(any(debug_assertions, test))]
pub mod server;
#[cfg(not(any(debug_assertions, test)))]
mod server;

#[cfg(any(debug_assertions, test))]
pub mod upstream;
#[cfg(not(any(debug_assertions, test)))]
mod upstream;

pub use crate::commands::{Host, run};
