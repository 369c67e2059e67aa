//! Unit tests for the CLI runtime and its session plumbing.

mod support;
mod telemetry_tests;
