use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docweave::{ConfigLoader, DocError};
use docweave::cli::Output;
use docweave::cli::commands::analyze::AnalyzeFormat;
use docweave::cli::commands::generate::GenerateOptions;

#[derive(Parser)]
#[command(name = "docweave")]
#[command(
    version,
    about = "Generate service documentation from a Git repository"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, global = true)]
    verbose: bool,

    #[arg(long, short, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Clone a repository and generate its documentation
    Generate {
        /// Git URL of the repository to document
        url: String,
        #[arg(short, long, help = "Output file (default: <repo>_docs.md)")]
        output: Option<PathBuf>,
        #[arg(long, env = "DOCWEAVE_API_KEY", hide_env_values = true)]
        api_key: Option<String>,
        #[arg(long, help = "OpenAI-compatible API base URL")]
        base_url: Option<String>,
        #[arg(long, help = "Model name")]
        model: Option<String>,
    },

    /// Analyze a local checkout and print the assembled context
    Analyze {
        /// Repository root (default: current directory)
        path: Option<PathBuf>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: AnalyzeFormat,
        #[arg(long, help = "Depth of the rendered directory tree")]
        max_depth: Option<usize>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "toml",
            help = "Output format: toml, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Write the default global configuration
    Init {
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mdocweave encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let out = Output::new();
            out.error(&format!("Error: {}", e));
            if let Some(hint) = e.downcast_ref::<DocError>().and_then(DocError::hint) {
                out.hint(hint);
            }
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    // Before parsing, so `--api-key` can fall back to DOCWEAVE_API_KEY from .env
    ConfigLoader::load_dotenv();
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Generate {
            url,
            output,
            api_key,
            base_url,
            model,
        } => {
            let rt = Runtime::new()?;
            rt.block_on(docweave::cli::commands::generate::run(GenerateOptions {
                url,
                output,
                api_key,
                base_url,
                model,
                verbose: cli.verbose,
            }))?;
        }
        Commands::Analyze {
            path,
            format,
            max_depth,
        } => {
            docweave::cli::commands::analyze::run(path, format, max_depth)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                docweave::cli::commands::config::show(&format)?;
            }
            ConfigAction::Path => {
                docweave::cli::commands::config::path()?;
            }
            ConfigAction::Init { force } => {
                docweave::cli::commands::config::init_global(force)?;
            }
        },
    }

    Ok(())
}
