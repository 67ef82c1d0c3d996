//! Command-line argument parsing.

use std::path::PathBuf;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Print the resolved feature flags
    Flags,
    /// Render the header for one conversation from a store snapshot
    Render {
        snapshot: PathBuf,
        conversation_id: String,
        info_panel_open: bool,
        width: u16,
    },
    /// Print usage, optionally after an error message
    Usage(Option<String>),
}

/// Header width used when `--width` is not given.
pub const DEFAULT_WIDTH: u16 = 80;

/// Parse command-line arguments and return the command to run.
///
/// The first item is the program name and is skipped.
///
/// # Examples
///
/// ```
/// use convo_header::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["convo-header".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut positional = Vec::new();
    let mut info_panel_open = false;
    let mut width = DEFAULT_WIDTH;

    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--flags" => return CliCommand::Flags,
            "--help" | "-h" => return CliCommand::Usage(None),
            "--info-panel" => info_panel_open = true,
            "--width" => match args.next().and_then(|w| w.parse::<u16>().ok()) {
                Some(w) if w > 0 => width = w,
                _ => {
                    return CliCommand::Usage(Some(
                        "--width needs a positive number".to_string(),
                    ))
                }
            },
            s if s.starts_with('-') => {
                return CliCommand::Usage(Some(format!("unknown option: {}", s)))
            }
            _ => positional.push(arg),
        }
    }

    match <[String; 2]>::try_from(positional) {
        Ok([snapshot, conversation_id]) => CliCommand::Render {
            snapshot: PathBuf::from(snapshot),
            conversation_id,
            info_panel_open,
            width,
        },
        Err(positional) if positional.is_empty() => CliCommand::Usage(None),
        Err(_) => CliCommand::Usage(Some(
            "expected <snapshot.json> <conversation-id>".to_string(),
        )),
    }
}

/// Usage text for `--help`.
pub fn usage() -> &'static str {
    "usage: convo-header [--info-panel] [--width N] <snapshot.json> <conversation-id>\n       \
     convo-header --flags\n       \
     convo-header --version"
}
