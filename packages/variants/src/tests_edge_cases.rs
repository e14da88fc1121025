//! Edge case tests for resolution
//! Boundary conditions, degenerate configurations, and unusual inputs
use crate::*;
