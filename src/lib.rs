//! Maintenance tool for the local damage-report database.
//!
//! The `reports` table is written by a separate intake system. This crate only
//! reads and deletes its rows:
//!
//! | Flag | Effect |
//! |------|--------|
//! | `--list` | Print all reports, newest first |
//! | `--all` | Delete every report |
//! | `--id N` | Delete report `N` |
//! | `--status S` | Delete every report in status `S` (접수, 검토중, 처리중, 완료) |
//!
//! Every delete asks for a `y` confirmation on stdin first.
//!
//! # Modules
//!
//! - [`config`] — Configuration loading from TOML files and environment variables
//! - [`db`] — Opening the existing database and checking for the `reports` table
//! - [`error`] — Typed errors for faults the tool cannot recover from
//! - [`report`] — Report types, status and urgency vocabularies, and queries
//! - [`cli`] — The four operations and their terminal output

pub mod cli;
pub mod config;
pub mod db;
pub mod error;
pub mod report;
