//! Command-line argument parsing.

/// Parsed CLI command.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Print segments of a text
    Render(String),
    /// Print the localized-label form of a text
    Label(String),
    /// Round-trip a text through the rendered form
    Raw(String),
    /// Print the catalog
    List,
    /// Print recent emoji
    Recent,
    /// Record a use of an emoji
    Use(String),
    /// Print the quick-reaction row
    Reactions,
    /// Promote an emoji in the quick-reaction row
    React(String),
    /// Show usage
    Help,
    /// Show version information
    Version,
    /// Arguments could not be parsed
    Invalid(String),
}

/// Parse command-line arguments.
///
/// The first argument is the program name and is skipped. Text arguments
/// after the command are joined with spaces, so quoting is optional.
///
/// # Examples
///
/// ```
/// use atomicx_emoji::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["atomicx-emoji".to_string(), "label".to_string(), "hi[a]".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Label("hi[a]".to_string()));
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut args = args.skip(1);
    let Some(command) = args.next() else {
        return CliCommand::Help;
    };
    let rest: Vec<String> = args.collect();

    let text = || -> Option<String> {
        if rest.is_empty() {
            None
        } else {
            Some(rest.join(" "))
        }
    };
    let missing = |what: &str| CliCommand::Invalid(format!("'{}' needs {}", command, what));

    match command.as_str() {
        "--version" | "-V" => CliCommand::Version,
        "--help" | "-h" | "help" => CliCommand::Help,
        "render" => text().map_or_else(|| missing("text"), CliCommand::Render),
        "label" => text().map_or_else(|| missing("text"), CliCommand::Label),
        "raw" => text().map_or_else(|| missing("text"), CliCommand::Raw),
        "list" => CliCommand::List,
        "recent" => CliCommand::Recent,
        "use" => text().map_or_else(|| missing("an emoji code"), CliCommand::Use),
        "reactions" => CliCommand::Reactions,
        "react" => text().map_or_else(|| missing("an emoji code"), CliCommand::React),
        other => CliCommand::Invalid(format!("Unknown command: {}", other)),
    }
}
