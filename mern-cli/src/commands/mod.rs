//! Command implementations for the `mern` CLI.
//!
//! Each action module corresponds to one or more top-level CLI commands.

/// Error and outcome types shared by every command.
pub mod error;

/// File generation — `mern react-component`, `mern express-model`,
/// `mern express-controller`, `mern express-route`, `mern express-middleware`.
///
/// Writes one boilerplate file under a fixed directory of the current
/// project, creating the directory when needed.
pub mod generate;

/// Template listing — `mern list`.
pub mod list;

/// Project scaffolding — `mern express <name>` and `mern react <name>`.
///
/// Copies a bundled project tree into `./<name>`.
pub mod new_project;

/// Overwrite policy and the confirmation prompt behind `--force`.
pub mod prompt;

/// Template source (bundled trees), `render`, and the file templates.
pub mod templates;

pub use error::{Outcome, ScaffoldError};
