use colored::Colorize;

use super::error::ScaffoldError;
use super::generate::FileKind;
use super::templates::{TemplateSource, PROJECT_TEMPLATES};

/// A project template and the files it would copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateListing {
    pub name: &'static str,
    pub files: Vec<String>,
}

/// Print the project templates available from `source` and the file
/// generators, returning the project listing.
///
/// A template missing from `source` is shown as such and left out of the
/// returned listing.
pub fn run(source: &TemplateSource) -> Result<Vec<TemplateListing>, ScaffoldError> {
    let mut listings = Vec::new();

    println!("{}", "Project templates".bold());
    for &name in PROJECT_TEMPLATES {
        match source.files(name) {
            Ok(files) => {
                println!("  {} ({} files)", name.cyan(), files.len());
                for file in &files {
                    println!("    {file}");
                }
                listings.push(TemplateListing { name, files });
            }
            Err(ScaffoldError::TemplateNotFound(_)) => {
                println!("  {} {}", name.cyan(), "(missing)".red());
            }
            Err(e) => return Err(e),
        }
    }

    println!();
    println!("{}", "File generators".bold());
    for kind in FileKind::ALL {
        println!(
            "  {:<12} {}",
            kind.label().cyan(),
            kind.destination("<name>").display()
        );
    }

    Ok(listings)
}
