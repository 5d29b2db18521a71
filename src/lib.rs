//! Religiousness Assessment - questionnaire scoring and category insights
//!
//! This crate scores a 20-question assessment across four dimensions,
//! turns the scores into banded feedback, and labels the result with a
//! classifier trained on synthetic data.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
