//! GitHub Actions workflow-command logger.
//!
//! Log lines go to stdout where the Actions runner picks them up and
//! renders them by severity. Fatal logging terminates the process and is
//! only ever invoked from `main`; everything below the entry point reports
//! failures through `Result` instead.

/// Severity of a workflow log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Warning,
    Error,
}

impl Level {
    /// Line prefix understood by the Actions runner.
    pub fn prefix(self) -> &'static str {
        match self {
            Level::Debug => "::debug::",
            Level::Warning => "::warning ",
            Level::Error => "::error ",
        }
    }
}

/// Emit one log line at the given severity.
pub fn log(level: Level, message: &str) {
    println!("{}{message}", level.prefix());
}

pub fn debug(message: &str) {
    log(Level::Debug, message);
}

#[allow(dead_code)]
pub fn warning(message: &str) {
    log(Level::Warning, message);
}

pub fn error(message: &str) {
    log(Level::Error, message);
}

/// Log at error severity and terminate the run.
///
/// The sole process-exit point of the crate.
pub fn fatal(message: &str) -> ! {
    error(message);
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::debug(Level::Debug, "::debug::")]
    #[case::warning(Level::Warning, "::warning ")]
    #[case::error(Level::Error, "::error ")]
    fn prefix_matches_actions_runner_format(#[case] level: Level, #[case] expected: &str) {
        assert_eq!(level.prefix(), expected);
    }
}
