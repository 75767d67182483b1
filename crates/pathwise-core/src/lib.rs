//! Decision layer for the Pathwise client.
//!
//! This crate holds the validators, the session manager, the chat
//! transcript and the form flows. It defines the [`backend::Backend`] port
//! that the infrastructure layer implements and depends only on
//! `pathwise-types` -- never on `pathwise-infra` or any HTTP crate.

pub mod backend;
pub mod controller;
pub mod service;
pub mod session;
pub mod transcript;
pub mod validate;
