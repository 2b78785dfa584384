//! Application run modes: logger init, render, config display, completions.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use clap::CommandFactory;

use tutor_chat_format::core::config::{self, ConfigError};
use tutor_chat_format::core::script_loader::{MATH_RENDERER_SRC, ScriptLoader};
use tutor_chat_format::core::{app, paths};
use tutor_chat_format::preview::{self, PreviewOptions};
use tutor_chat_format::{FormatOptions, Formatter, RawMessage};

use crate::cli::{Args, Commands, OutputFormat, RenderArgs};

/// Errors surfaced by the binary.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Initialize env_logger on stderr. `RUST_LOG` overrides the -v/-q level.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .try_init();
}

pub fn dispatch(args: &Args) -> Result<(), RenderError> {
    match &args.command {
        Commands::Render(render) => {
            let options = config::load()?;
            run_render(render, options)
        }
        Commands::Config => show_config(),
        Commands::Completions { shell } => {
            clap_complete::generate(*shell, &mut Args::command(), app::NAME, &mut io::stdout());
            Ok(())
        }
    }
}

fn read_input(input: Option<&Path>) -> Result<String, RenderError> {
    match input {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).map_err(|source| RenderError::Read {
                path: path.display().to_string(),
                source,
            })
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(|source| RenderError::Read {
                    path: "stdin".to_string(),
                    source,
                })?;
            Ok(buf)
        }
    }
}

/// Format one message and print it in the requested output format.
pub fn run_render(args: &RenderArgs, mut options: FormatOptions) -> Result<(), RenderError> {
    if args.all_blocks {
        options.all_blocks = true;
    }
    if let Some(shape) = args.shape {
        options.qa_shape = shape;
    }

    let content = read_input(args.input.as_deref())?;
    let message = RawMessage::new(content.trim_end_matches(['\n', '\r']), args.user);
    let result = Formatter::new(options).format(&message);
    log::info!(
        "Rendered {} paragraphs from {} bytes",
        result.paragraphs.len(),
        message.content.len()
    );

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::Outline => preview::render_outline(&result),
        OutputFormat::Preview => {
            // The terminal draws math itself, so loading finishes at once.
            // --no-math records a failed load and math falls back to delimited text.
            let mut loader = ScriptLoader::new();
            loader.request(MATH_RENDERER_SRC);
            if args.no_math {
                loader.mark_failed(MATH_RENDERER_SRC);
            } else {
                loader.mark_ready(MATH_RENDERER_SRC);
            }
            let opts = PreviewOptions {
                width: args.width,
                color: !args.no_color,
            };
            preview::render_preview(&result, &loader, &opts)
        }
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output.trim_end_matches('\n')).map_err(RenderError::Output)?;
    stdout.flush().map_err(RenderError::Output)
}

/// Print the config file location and the effective options.
fn show_config() -> Result<(), RenderError> {
    let path = paths::config_file();
    let exists = path.as_ref().is_some_and(|p| p.exists());
    let options = config::load()?;
    println!("{} {}", app::NAME, app::VERSION);
    match path {
        Some(p) => println!(
            "Config: {} ({})",
            p.display(),
            if exists { "found" } else { "not found, using defaults" }
        ),
        None => println!("Config: no config directory available"),
    }
    println!("{}", serde_json::to_string_pretty(&options)?);
    Ok(())
}
