//! # mern-cli
//!
//! Command-line tool for scaffolding Express and React projects and
//! generating MERN boilerplate files.
//!
//! This crate provides the `mern` binary with the following commands:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `mern express <name>` | Copy the Express project template to `./<name>` |
//! | `mern react <name>` | Copy the React project template to `./<name>` |
//! | `mern react-component <name>` | Write `src/components/<name>.jsx` |
//! | `mern express-model <name>` | Write `models/<name>.js` |
//! | `mern express-controller <name>` | Write `controllers/<name>.js` |
//! | `mern express-route <name>` | Write `routes/<name>.js` |
//! | `mern express-middleware <name>` | Write `middlewares/<name>.js` |
//! | `mern list` | Show bundled templates and file generators |
//!
//! ## Architecture
//!
//! - [`commands::new_project`] — project scaffolding (`mern express`, `mern react`)
//! - [`commands::generate`] — file generation (`mern express-*`, `mern react-component`)
//! - [`commands::list`] — template listing (`mern list`)
//! - [`commands::prompt`] — overwrite policy (`--force`, `--yes`)
//! - [`commands::templates`] — template source and code templates
//!
//! An existing destination is a soft failure: it is reported and skipped,
//! never overwritten unless `--force` is confirmed or `--yes` is given.

pub mod commands;
pub mod logging;
