//! Interactive terminal session.
//!
//! One controller lives for the whole session, so a login carries over to
//! later chats and assessments. Entry point: `loop_runner::run_shell`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
