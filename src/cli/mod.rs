//! CLI module.
//!
//! Parses arguments and runs one command against an [`EmojiContext`]:
//!
//! ```ignore
//! use atomicx_emoji::cli::{parse_args, run_cli_command};
//!
//! let command = parse_args(std::env::args());
//! run_cli_command(command, &mut std::io::stdout())?;
//! ```

pub mod args;

pub use args::{parse_args, CliCommand};

use std::io::Write;

use color_eyre::Result;

use crate::config::EmojiConfig;
use crate::context::EmojiContext;
use crate::transcode::Segment;

/// Current version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const USAGE: &str = "\
Usage: atomicx-emoji <command> [args]

Commands:
  render <text>     Print the segments of <text>
  label <text>      Print <text> with localized emoji labels
  raw <text>        Render <text> and convert it back to raw codes
  list              Print the catalog
  recent            Print recently used emoji
  use <code>        Record a use of <code>
  reactions         Print the quick-reaction row
  react <code>      Promote <code> in the quick-reaction row

Options:
  -h, --help        Show this help
  -V, --version     Show the version

Environment:
  ATOMICX_EMOJI_ROOT   Emoji resource directory
  ATOMICX_EMOJI_LANG   Label language (default: en)
  ATOMICX_EMOJI_STORE  State file (default: ~/.atomicx/emoji_state.json)
";

/// Run `command`, writing its output to `out`.
pub fn run_cli_command<W: Write>(command: CliCommand, out: &mut W) -> Result<()> {
    match command {
        CliCommand::Help => write!(out, "{}", USAGE)?,
        CliCommand::Version => writeln!(out, "atomicx-emoji {}", VERSION)?,
        CliCommand::Invalid(message) => {
            color_eyre::eyre::bail!("{}\n\n{}", message, USAGE);
        }
        other => {
            let config = EmojiConfig::from_env().with_prime_cache(false);
            let context = EmojiContext::init(config);
            run_with_context(other, &context, out)?;
        }
    }
    Ok(())
}

/// Run a catalog command against an existing context.
pub fn run_with_context<W: Write>(
    command: CliCommand,
    context: &EmojiContext,
    out: &mut W,
) -> Result<()> {
    match command {
        CliCommand::Render(text) => {
            for segment in context.render(&text).iter() {
                match segment {
                    Segment::Literal { text, .. } => writeln!(out, "text:  {}", text)?,
                    Segment::Emoji { entry, .. } => writeln!(
                        out,
                        "emoji: {} -> {}",
                        entry.name(),
                        entry.asset_path().display()
                    )?,
                }
            }
        }
        CliCommand::Label(text) => writeln!(out, "{}", context.label(&text))?,
        CliCommand::Raw(text) => {
            let rendered = context.render(&text).to_rendered_text();
            writeln!(out, "{}", rendered.to_raw_code_string())?;
        }
        CliCommand::List => {
            for entry in context.catalog() {
                writeln!(out, "{}\t{}", entry.name(), entry.localized_name())?;
            }
        }
        CliCommand::Recent => {
            for name in context.recent().get_recent() {
                writeln!(out, "{}", name)?;
            }
        }
        CliCommand::Use(name) => {
            if !context.catalog().contains(&name) {
                color_eyre::eyre::bail!("Unknown emoji code: {}", name);
            }
            if let Err(e) = context.recent().try_record_use(&name) {
                color_eyre::eyre::bail!("{}\n{}", e, e.category().recovery_hint());
            }
        }
        CliCommand::Reactions => {
            for name in context.reactions().names() {
                writeln!(out, "{}", name)?;
            }
        }
        CliCommand::React(name) => context.reactions().update(&name, context.catalog()),
        CliCommand::Help | CliCommand::Version | CliCommand::Invalid(_) => {
            return run_cli_command(command, out);
        }
    }
    Ok(())
}
