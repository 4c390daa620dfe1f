use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::{Outcome, ScaffoldError};
use super::prompt::Overwrite;
use super::templates::TemplateSource;

/// Project templates that can be copied with `mern express` / `mern react`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectKind {
    Express,
    React,
}

impl ProjectKind {
    pub fn template(self) -> &'static str {
        match self {
            ProjectKind::Express => "express",
            ProjectKind::React => "react",
        }
    }
}

/// Options shared by the project commands.
#[derive(Debug, Clone, Default)]
pub struct ProjectOptions {
    pub source: TemplateSource,
    pub overwrite: Overwrite,
}

/// Create `./<name>` from the `kind` template.
pub fn run(kind: ProjectKind, name: &str, opts: &ProjectOptions) -> Result<Outcome, ScaffoldError> {
    copy_tree(&opts.source, kind.template(), Path::new(name), opts.overwrite).inspect(|outcome| {
        if outcome.is_created() {
            println!();
            println!("  cd {name}");
            println!("  npm install");
            println!("  npm run dev");
            println!();
        }
    })
}

/// Copy every file of `template` under `destination`.
///
/// The template file list is resolved before anything is created, so a
/// missing template never leaves an empty destination behind. Partial copies
/// are not rolled back.
pub fn copy_tree(
    source: &TemplateSource,
    template: &str,
    destination: &Path,
    overwrite: Overwrite,
) -> Result<Outcome, ScaffoldError> {
    let files = source.files(template)?;

    // An empty name means the working directory itself.
    let destination = if destination.as_os_str().is_empty() {
        Path::new(".")
    } else {
        destination
    };

    if destination.exists() && !overwrite.allows(destination)? {
        tracing::debug!(path = %destination.display(), "destination exists, skipping");
        println!(
            "{} Directory '{}' already exists",
            "!".yellow(),
            destination.display()
        );
        return Ok(Outcome::Skipped(destination.to_path_buf()));
    }

    println!(
        "{} Creating {} project: {}",
        "->".blue(),
        template,
        destination.display().to_string().green()
    );

    fs::create_dir_all(destination).map_err(|e| ScaffoldError::io(destination, e))?;

    for file in &files {
        let target = target_path(destination, file);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
        }
        let bytes = source.read(template, file)?;
        fs::write(&target, bytes).map_err(|e| ScaffoldError::io(&target, e))?;
        tracing::debug!(path = %target.display(), "copied template file");
    }

    println!(
        "{} Project '{}' created successfully! ({} files)",
        "✓".green(),
        destination.display().to_string().green(),
        files.len()
    );

    Ok(Outcome::Created(destination.to_path_buf()))
}

fn target_path(destination: &Path, file: &str) -> PathBuf {
    file.split('/')
        .fold(destination.to_path_buf(), |path, part| path.join(part))
}
