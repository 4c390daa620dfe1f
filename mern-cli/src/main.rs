use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use mern_cli::commands::generate::{self, FileKind};
use mern_cli::commands::new_project::{self, ProjectKind, ProjectOptions};
use mern_cli::commands::prompt::Overwrite;
use mern_cli::commands::templates::TemplateSource;
use mern_cli::commands::{list, ScaffoldError};
use mern_cli::logging;

#[derive(Parser)]
#[command(name = "mern", version, about = "MERN CLI — scaffold Express and React projects")]
struct Cli {
    /// Read project templates from this directory instead of the bundled ones
    #[arg(long, global = true, env = "MERN_TEMPLATES_DIR", value_name = "DIR")]
    templates: Option<PathBuf>,

    /// Log file operations
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone, Copy)]
struct OverwriteArgs {
    /// Ask before replacing an existing destination
    #[arg(long)]
    force: bool,

    /// Replace an existing destination without asking
    #[arg(short, long)]
    yes: bool,
}

impl From<OverwriteArgs> for Overwrite {
    fn from(args: OverwriteArgs) -> Self {
        Overwrite::from_flags(args.force, args.yes)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new Express project
    Express {
        /// Project name
        name: String,
        #[command(flatten)]
        overwrite: OverwriteArgs,
    },
    /// Create a new React project
    React {
        /// Project name
        name: String,
        #[command(flatten)]
        overwrite: OverwriteArgs,
    },
    /// Generate src/components/<name>.jsx
    ReactComponent {
        /// Component name (e.g. Header)
        name: String,
        #[command(flatten)]
        overwrite: OverwriteArgs,
    },
    /// Generate models/<name>.js
    ExpressModel {
        /// Model name (e.g. User)
        name: String,
        #[command(flatten)]
        overwrite: OverwriteArgs,
    },
    /// Generate controllers/<name>.js
    ExpressController {
        /// Controller name
        name: String,
        #[command(flatten)]
        overwrite: OverwriteArgs,
    },
    /// Generate routes/<name>.js
    ExpressRoute {
        /// Route name
        name: String,
        #[command(flatten)]
        overwrite: OverwriteArgs,
    },
    /// Generate middlewares/<name>.js
    ExpressMiddleware {
        /// File name
        name: String,
        #[command(flatten)]
        overwrite: OverwriteArgs,
    },
    /// List bundled project templates and file generators
    List,
}

fn run(cli: Cli) -> Result<(), ScaffoldError> {
    let source = TemplateSource::from_option(cli.templates);

    let project = |kind: ProjectKind, name: &str, overwrite: OverwriteArgs| {
        let opts = ProjectOptions {
            source: source.clone(),
            overwrite: overwrite.into(),
        };
        new_project::run(kind, name, &opts).map(drop)
    };
    let file = |kind: FileKind, name: &str, overwrite: OverwriteArgs| {
        generate::generate(kind, name, overwrite.into()).map(drop)
    };

    match cli.command {
        Commands::Express { name, overwrite } => project(ProjectKind::Express, &name, overwrite),
        Commands::React { name, overwrite } => project(ProjectKind::React, &name, overwrite),
        Commands::ReactComponent { name, overwrite } => {
            file(FileKind::ReactComponent, &name, overwrite)
        }
        Commands::ExpressModel { name, overwrite } => file(FileKind::ExpressModel, &name, overwrite),
        Commands::ExpressController { name, overwrite } => {
            file(FileKind::ExpressController, &name, overwrite)
        }
        Commands::ExpressRoute { name, overwrite } => file(FileKind::ExpressRoute, &name, overwrite),
        Commands::ExpressMiddleware { name, overwrite } => {
            file(FileKind::ExpressMiddleware, &name, overwrite)
        }
        Commands::List => list::run(&source).map(drop),
    }
}

/// Print a failed command's error and return the process exit code.
///
/// Failures are reported but do not change the exit status.
fn report(result: Result<(), ScaffoldError>) -> i32 {
    if let Err(e) = result {
        eprintln!("{}", format!("Error: {e}").red());
    }
    0
}

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose);

    std::process::exit(report(run(cli)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_every_file_command() {
        for cmd in [
            "react-component",
            "express-model",
            "express-controller",
            "express-route",
            "express-middleware",
        ] {
            let cli = Cli::try_parse_from(["mern", cmd, "Widget"]).unwrap();
            assert!(!matches!(cli.command, Commands::List), "{cmd}");
        }
    }

    #[test]
    fn parses_project_command_with_flags() {
        let cli = Cli::try_parse_from(["mern", "express", "api", "--force", "--yes"]).unwrap();
        match cli.command {
            Commands::Express { name, overwrite } => {
                assert_eq!(name, "api");
                assert_eq!(Overwrite::from(overwrite), Overwrite::Always);
            }
            _ => panic!("expected express command"),
        }
    }

    #[test]
    fn templates_dir_is_global() {
        let cli =
            Cli::try_parse_from(["mern", "react", "web", "--templates", "/tmp/tpl"]).unwrap();
        assert_eq!(cli.templates, Some(PathBuf::from("/tmp/tpl")));
    }

    #[test]
    fn missing_name_is_rejected() {
        assert!(Cli::try_parse_from(["mern", "express-route"]).is_err());
    }

    #[test]
    fn errors_still_exit_zero() {
        assert_eq!(report(Ok(())), 0);
        assert_eq!(
            report(Err(ScaffoldError::TemplateNotFound("express".into()))),
            0
        );
    }

    #[test]
    fn missing_template_dir_fails_without_changing_exit_code() {
        let templates = tempfile::TempDir::new().unwrap();
        let dir = templates.path().to_str().unwrap();
        let cli = Cli::try_parse_from(["mern", "express", "never-created", "--templates", dir])
            .unwrap();

        let result = run(cli);

        assert!(matches!(result, Err(ScaffoldError::TemplateNotFound(_))));
        assert!(!std::path::Path::new("never-created").exists());
        assert_eq!(report(result), 0);
    }

    #[test]
    fn empty_name_is_accepted_by_parser() {
        let cli = Cli::try_parse_from(["mern", "express", ""]).unwrap();
        assert!(matches!(cli.command, Commands::Express { ref name, .. } if name.is_empty()));
    }

    #[test]
    fn unknown_command_is_rejected() {
        assert!(Cli::try_parse_from(["mern", "vue", "app"]).is_err());
    }
}
