use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{Outcome, ScaffoldError};
use super::prompt::Overwrite;
use super::templates::{express, react};

/// A single boilerplate file that can be generated inside an existing project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    ReactComponent,
    ExpressModel,
    ExpressController,
    ExpressRoute,
    ExpressMiddleware,
}

impl FileKind {
    pub const ALL: [FileKind; 5] = [
        FileKind::ReactComponent,
        FileKind::ExpressModel,
        FileKind::ExpressController,
        FileKind::ExpressRoute,
        FileKind::ExpressMiddleware,
    ];

    /// Directory, relative to the working directory, the file is written to.
    pub fn target_dir(self) -> &'static str {
        match self {
            FileKind::ReactComponent => "src/components",
            FileKind::ExpressModel => "models",
            FileKind::ExpressController => "controllers",
            FileKind::ExpressRoute => "routes",
            FileKind::ExpressMiddleware => "middlewares",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            FileKind::ReactComponent => "jsx",
            _ => "js",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FileKind::ReactComponent => "component",
            FileKind::ExpressModel => "model",
            FileKind::ExpressController => "controller",
            FileKind::ExpressRoute => "route",
            FileKind::ExpressMiddleware => "middleware",
        }
    }

    /// `<target_dir>/<name>.<ext>`. The name is used verbatim.
    pub fn destination(self, name: &str) -> PathBuf {
        Path::new(self.target_dir()).join(format!("{name}.{}", self.extension()))
    }

    pub fn render(self, name: &str) -> String {
        match self {
            FileKind::ReactComponent => react::component(name),
            FileKind::ExpressModel => express::model(name),
            FileKind::ExpressController => express::controller(name),
            FileKind::ExpressRoute => express::route(name),
            FileKind::ExpressMiddleware => express::middleware(name),
        }
    }
}

/// Write the `kind` boilerplate for `name` into the working directory.
///
/// Missing parent directories are created first. An existing file is left
/// untouched and reported as [`Outcome::Skipped`] unless `overwrite` allows
/// replacing it.
pub fn generate(kind: FileKind, name: &str, overwrite: Overwrite) -> Result<Outcome, ScaffoldError> {
    let path = kind.destination(name);

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
            tracing::debug!(dir = %parent.display(), "created directory");
        }
    }

    if path.exists() && !overwrite.allows(&path)? {
        tracing::debug!(path = %path.display(), "destination exists, skipping");
        println!(
            "{} {} '{}' already exists",
            "!".yellow(),
            capitalize(kind.label()),
            path.display()
        );
        return Ok(Outcome::Skipped(path));
    }

    fs::write(&path, kind.render(name)).map_err(|e| ScaffoldError::io(&path, e))?;
    tracing::debug!(path = %path.display(), kind = kind.label(), "wrote file");

    println!(
        "{} Generated {}: {}",
        "✓".green(),
        kind.label(),
        path.display().to_string().cyan()
    );

    Ok(Outcome::Created(path))
}

pub fn react_component(name: &str, overwrite: Overwrite) -> Result<Outcome, ScaffoldError> {
    generate(FileKind::ReactComponent, name, overwrite)
}

pub fn express_model(name: &str, overwrite: Overwrite) -> Result<Outcome, ScaffoldError> {
    generate(FileKind::ExpressModel, name, overwrite)
}

pub fn express_controller(name: &str, overwrite: Overwrite) -> Result<Outcome, ScaffoldError> {
    generate(FileKind::ExpressController, name, overwrite)
}

pub fn express_route(name: &str, overwrite: Overwrite) -> Result<Outcome, ScaffoldError> {
    generate(FileKind::ExpressRoute, name, overwrite)
}

pub fn express_middleware(name: &str, overwrite: Overwrite) -> Result<Outcome, ScaffoldError> {
    generate(FileKind::ExpressMiddleware, name, overwrite)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
