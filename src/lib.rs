//! Workforce-request decision engine for staff scheduling
//!
//! This crate evaluates pending time-off requests against balances, workgroup
//! rules, date overlaps, and department staffing; calculates annual worked-hour
//! balances adjusted for seniority; simulates batch approvals; and answers a
//! narrow set of free-text questions about the schedule.

#![warn(missing_docs)]

pub mod analysis;
pub mod api;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
