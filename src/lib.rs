//! Work-time rule administration core
//!
//! This crate provides the rule model, repository, and editing workflows for
//! managing work-time recognition rules: when worked minutes count as basic,
//! early, overtime, night, or holiday time. It covers the rule schema with
//! derived category tags, an in-memory repository with sequential id
//! allocation, a draft-based detail editor, a four-step creation wizard, and
//! an HTTP API over the lot.

#![warn(missing_docs)]

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod store;
