//! First-run bootstrap for the EternalJukebox server.
//!
//! Checks whether a configuration file exists; when none does, walks the
//! operator through initialising one, either from the console prompts or via
//! a token-gated one-shot web page, and reports a terminal [`Outcome`] the
//! binary turns into a process exit code.
//!
//! [`Outcome`]: outcome::Outcome

pub mod config;
pub mod flow;
pub mod outcome;
pub mod prompt;
pub mod token;
pub mod web;

pub use flow::Bootstrap;
pub use outcome::Outcome;
