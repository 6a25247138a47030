//! CLI Adapter.

mod studio;

use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt};

use crate::app::api::{self, GenerateOptions};
use crate::domain::{AppError, StyleId, library, list_styles, render_terminal, response_schema};

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "ADLIB_LOG";

#[derive(Parser)]
#[command(name = "adlib")]
#[command(version)]
#[command(
    about = "Generate style-conditioned ad-libs, signature tags, and lyric rewrites",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to .adlib/config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available styles
    #[clap(visible_alias = "ls")]
    Styles,
    /// Generate ad-libs for lyrics read from a file or stdin
    #[clap(visible_alias = "g")]
    Generate {
        /// Style id or label; repeat to blend styles
        #[arg(short, long = "style", value_parser = parse_style_arg)]
        styles: Vec<StyleId>,
        /// Lyrics file (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
        /// Copy the full recording script to the clipboard
        #[arg(short, long)]
        copy: bool,
        /// Print the structured result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the prompt a generation would send, without calling the service
    #[clap(visible_alias = "p")]
    Prompt {
        /// Style id or label; repeat to blend styles
        #[arg(short, long = "style", value_parser = parse_style_arg)]
        styles: Vec<StyleId>,
        /// Lyrics file (reads stdin when omitted)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Print the structured response schema
    Schema,
    /// Interactive session: edit lyrics, toggle styles, generate, copy, reset
    #[clap(visible_alias = "s")]
    Studio,
    /// Stock ad-lib library
    #[clap(visible_alias = "lib")]
    Library {
        /// Copy the entry at this position (1-based)
        #[arg(short, long)]
        copy: Option<usize>,
    },
}

fn parse_style_arg(value: &str) -> Result<StyleId, String> {
    value.parse::<StyleId>().map_err(|e| e.to_string())
}

/// Install the stderr tracing subscriber. Silent unless `ADLIB_LOG` or `--verbose` asks.
fn init_tracing(verbose: bool) -> Result<(), TryInitError> {
    let default_level = if verbose { LevelFilter::DEBUG } else { LevelFilter::OFF };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .with_env_var(LOG_ENV)
                .from_env_lossy(),
        )
        .try_init()
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Warning: logging unavailable: {}", e);
    }
    let config = cli.config.as_deref();

    let result: Result<(), AppError> = match cli.command {
        Commands::Styles => {
            run_styles();
            Ok(())
        }
        Commands::Generate { styles, file, copy, json } => {
            run_generate(styles, file.as_deref(), copy, json, config)
        }
        Commands::Prompt { styles, file } => run_prompt(styles, file.as_deref(), config),
        Commands::Schema => run_schema(),
        Commands::Studio => studio::run_studio(config),
        Commands::Library { copy } => run_library(copy),
    };

    if let Err(e) = result {
        eprintln!("{}", error_report(&e, cli.verbose));
        std::process::exit(1);
    }
}

/// Final error text. Generation failures point at `--verbose` for the logged cause.
fn error_report(error: &AppError, verbose: bool) -> String {
    let mut report = format!("Error: {}", error.user_message());
    if error.is_generation_failure() && !verbose {
        report.push_str("\nRerun with --verbose to see the cause.");
    }
    report
}

fn run_styles() {
    for info in list_styles() {
        println!("{:<12} {:<12} {}", info.id.as_str(), info.label, info.descriptor);
    }
}

fn read_lyrics(file: Option<&Path>) -> Result<String, AppError> {
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .map_err(|source| AppError::LyricsFile { path: path.to_path_buf(), source });
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(AppError::NoLyricsInput);
    }
    let mut lyrics = String::new();
    stdin.read_to_string(&mut lyrics)?;
    Ok(lyrics)
}

fn run_generate(
    styles: Vec<StyleId>,
    file: Option<&Path>,
    copy: bool,
    json: bool,
    config: Option<&Path>,
) -> Result<(), AppError> {
    let lyrics = read_lyrics(file)?;
    let options = GenerateOptions { lyrics, styles };

    eprintln!("🎙️  {}", library::loading_step(0));
    let result = api::generate(&options, config)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_terminal(&result));
    }

    if copy {
        match api::copy_script(&result) {
            Ok(()) => eprintln!("✅ Copied full script to clipboard"),
            Err(e) => eprintln!("⚠️  Could not copy script: {}", e),
        }
    }
    Ok(())
}

fn run_prompt(
    styles: Vec<StyleId>,
    file: Option<&Path>,
    config: Option<&Path>,
) -> Result<(), AppError> {
    let lyrics = read_lyrics(file)?;
    let prompt = api::preview_prompt(&lyrics, &styles, config)?;
    println!("--- system instruction ---");
    println!("{}", prompt.system_instruction);
    println!("--- user content ---");
    println!("{}", prompt.user_content);
    Ok(())
}

fn run_schema() -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(&response_schema())?);
    Ok(())
}

fn run_library(copy: Option<usize>) -> Result<(), AppError> {
    if let Some(position) = copy {
        let entry = api::copy_library_entry(position)?;
        println!("✅ Copied {}", entry);
        return Ok(());
    }
    for (index, entry) in library::SAMPLE_LIBRARY.iter().enumerate() {
        println!("{:>2}. {}", index + 1, entry);
    }
    Ok(())
}
