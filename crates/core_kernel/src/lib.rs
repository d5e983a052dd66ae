//! Core Kernel - Shared building blocks for the fiscal code workspace
//!
//! This crate provides the pieces every other crate leans on:
//! - Calendar checks for raw birth-date input
//! - Runtime configuration loaded from the environment
//! - Tracing subscriber installation
//! - The kernel error type

pub mod calendar;
pub mod config;
pub mod error;
pub mod telemetry;

pub use crate::calendar::{checked_date, two_digit_year, CalendarError};
pub use crate::config::FiscalCodeConfig;
pub use crate::error::CoreError;
pub use crate::telemetry::init_tracing;
