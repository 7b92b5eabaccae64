//! Core library for the `volley` CLI.
//!
//! This crate provides the internal building blocks used by the binary: CLI
//! argument types, run configuration, the request executor, the six pacing
//! strategies, metrics aggregation, and chart output. The primary user-facing
//! interface is the `volley` command-line application; library APIs may
//! evolve as the CLI grows.
pub mod args;
pub mod attack;
pub mod charts;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod logger;
pub mod metrics;
pub mod progress;
