//! Payroll engine for a car-detailing shop.
//!
//! This crate turns a business day's service records, role assignments and
//! rate settings into per-employee salaries: washers earn commission on
//! their share of the jobs they did, admins share a cut of the day's revenue
//! and earn commission on their own jobs, and either role is lifted to a
//! configurable minimum unless it is switched off.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
