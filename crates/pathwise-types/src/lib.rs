//! Shared domain types for Pathwise.
//!
//! This crate contains the types used across the Pathwise client: the
//! session, chat transcript entries, password strength, assessment service
//! descriptors, UI effects, backend wire shapes, configuration and errors.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod session;
pub mod ui;
