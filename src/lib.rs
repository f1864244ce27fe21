//! Pixiu library - A company CLI for dependency management and deployment
//!
//! This library provides the core functionality for the `pixiu` CLI tool.

pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatch;
pub mod update;
