//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use tutor_chat_format::QaShape;

const AFTER_HELP: &str = "\
EXAMPLES:
  tutor-chat-format render reply.txt              Preview an assistant message
  tutor-chat-format render - --user < msg.txt     Read a student message from stdin
  tutor-chat-format render reply.txt -f json      Print the node tree as JSON
  tutor-chat-format config                        Show config path and options
  tutor-chat-format completions bash              Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Format tutor chat messages into typed content nodes",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Format a message and print the result
    Render(RenderArgs),
    /// Show config path and effective formatting options
    Config,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

#[derive(clap::Args)]
pub struct RenderArgs {
    /// Message file ('-' or omitted reads stdin)
    pub input: Option<PathBuf>,

    /// Treat the message as written by the student (no currency escaping)
    #[arg(long)]
    pub user: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Preview)]
    pub format: OutputFormat,

    /// Wrap width for the preview (0 disables wrapping)
    #[arg(short = 'w', long, default_value_t = 80)]
    pub width: usize,

    /// Disable ANSI styling in the preview
    #[arg(long)]
    pub no_color: bool,

    /// Show math as raw delimited text instead of rendered math
    #[arg(long)]
    pub no_math: bool,

    /// Extract every qa_block in a paragraph, not only the first
    #[arg(long)]
    pub all_blocks: bool,

    /// QA block payload layout (nested or flat)
    #[arg(long)]
    pub shape: Option<QaShape>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON node tree
    Json,
    /// Styled, wrapped terminal preview
    Preview,
    /// One node per line
    Outline,
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
