//! CLI infrastructure for the ghost solver
//!
//! This module provides the command-line interface for solving dictionaries,
//! analyzing the resulting prefix trees, and exporting outcomes.

pub mod commands;
pub mod output;
