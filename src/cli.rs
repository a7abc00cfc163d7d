//! Command-line argument parsing.

use crate::app::Screen;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Run the TUI, optionally forcing a start screen
    Run(Option<Screen>),
}

/// Parse command-line arguments and return the command to execute.
///
/// # Examples
///
/// ```
/// use pulse::cli::{parse_args, CliCommand};
///
/// let args = vec!["pulse".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut screen = None;
    for arg in args.skip(1) {
        // Skip the program name
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--admin" => screen = Some(Screen::Admin),
            "--landing" => screen = Some(Screen::Launch),
            _ => {}
        }
    }
    CliCommand::Run(screen)
}
