pub mod express;
pub mod react;

use rust_embed::RustEmbed;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::error::ScaffoldError;

/// Project trees shipped inside the binary, one top-level folder per template.
#[derive(RustEmbed)]
#[folder = "templates/"]
struct BundledTemplates;

/// Names of the project templates the CLI knows how to copy.
pub const PROJECT_TEMPLATES: &[&str] = &["express", "react"];

/// Where project template trees are read from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TemplateSource {
    /// The trees embedded at build time.
    #[default]
    Bundled,
    /// `<root>/<template>/` on disk.
    Directory(PathBuf),
}

impl TemplateSource {
    pub fn from_option(dir: Option<PathBuf>) -> Self {
        match dir {
            Some(dir) => TemplateSource::Directory(dir),
            None => TemplateSource::Bundled,
        }
    }

    /// Sorted `/`-separated paths of every file in `template`, relative to
    /// the template root.
    ///
    /// A template without any file is reported as [`ScaffoldError::TemplateNotFound`].
    pub fn files(&self, template: &str) -> Result<Vec<String>, ScaffoldError> {
        let mut files = match self {
            TemplateSource::Bundled => {
                let prefix = format!("{template}/");
                BundledTemplates::iter()
                    .filter_map(|path| path.strip_prefix(prefix.as_str()).map(str::to_string))
                    .collect::<Vec<_>>()
            }
            TemplateSource::Directory(root) => {
                let base = root.join(template);
                if !base.is_dir() {
                    return Err(ScaffoldError::TemplateNotFound(template.to_string()));
                }
                collect_files(&base)?
            }
        };

        if files.is_empty() {
            return Err(ScaffoldError::TemplateNotFound(template.to_string()));
        }
        files.sort();
        Ok(files)
    }

    /// Raw bytes of `file` inside `template`.
    pub fn read(&self, template: &str, file: &str) -> Result<Vec<u8>, ScaffoldError> {
        match self {
            TemplateSource::Bundled => BundledTemplates::get(&format!("{template}/{file}"))
                .map(|f| f.data.into_owned())
                .ok_or_else(|| ScaffoldError::TemplateNotFound(format!("{template}/{file}"))),
            TemplateSource::Directory(root) => {
                let path = root.join(template).join(file);
                fs::read(&path).map_err(|e| ScaffoldError::io(&path, e))
            }
        }
    }
}

fn collect_files(base: &Path) -> Result<Vec<String>, ScaffoldError> {
    let mut out = Vec::new();
    for entry in WalkDir::new(base) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(base).to_path_buf();
            ScaffoldError::io(&path, e.into())
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(base) {
            let rel = rel
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            out.push(rel);
        }
    }
    Ok(out)
}

/// Simple template rendering: replaces {{key}} with value.
pub fn render(template: &str, vars: &[(&str, &str)]) -> String {
    let mut output = template.to_string();
    for (key, value) in vars {
        output = output.replace(&format!("{{{{{}}}}}", key), value);
    }
    output
}
