use dialoguer::Confirm;
use std::path::Path;

use super::error::ScaffoldError;

/// What to do when a destination already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overwrite {
    /// Leave the destination untouched.
    #[default]
    Never,
    /// Ask on the terminal before replacing it.
    Ask,
    /// Replace it without asking.
    Always,
}

impl Overwrite {
    /// Resolve the policy from the `--force` and `--yes` flags.
    ///
    /// `--yes` alone implies `--force`.
    pub fn from_flags(force: bool, yes: bool) -> Self {
        match (force, yes) {
            (_, true) => Overwrite::Always,
            (true, false) => Overwrite::Ask,
            (false, false) => Overwrite::Never,
        }
    }

    /// Decide whether the existing `path` may be replaced.
    pub fn allows(self, path: &Path) -> Result<bool, ScaffoldError> {
        match self {
            Overwrite::Never => Ok(false),
            Overwrite::Always => Ok(true),
            Overwrite::Ask => confirm_overwrite(path),
        }
    }
}

/// Ask the user whether `path` should be overwritten. Defaults to "no".
pub fn confirm_overwrite(path: &Path) -> Result<bool, ScaffoldError> {
    Confirm::new()
        .with_prompt(format!("Overwrite {}?", path.display()))
        .default(false)
        .interact()
        .map_err(|e| ScaffoldError::Prompt(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_resolve_to_policy() {
        assert_eq!(Overwrite::from_flags(false, false), Overwrite::Never);
        assert_eq!(Overwrite::from_flags(true, false), Overwrite::Ask);
        assert_eq!(Overwrite::from_flags(true, true), Overwrite::Always);
        assert_eq!(Overwrite::from_flags(false, true), Overwrite::Always);
    }

    #[test]
    fn never_and_always_do_not_prompt() {
        let path = Path::new("models/User.js");
        assert!(!Overwrite::Never.allows(path).unwrap());
        assert!(Overwrite::Always.allows(path).unwrap());
    }
}
