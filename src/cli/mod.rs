use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod frontmatter;
mod validate;

#[derive(Parser)]
#[command(
    name = "marketcheck",
    version,
    about = "Plugin marketplace manifest and plugin directory validator"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show project information
    #[arg(long)]
    about: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Output format for validation results.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Format {
    /// Human-readable report (default)
    #[default]
    Text,
    /// JSON report object
    Json,
}

#[derive(Subcommand)]
#[command(next_display_order = None)]
enum Commands {
    /// Validate the marketplace manifest and every plugin it declares
    #[command(alias = "check")]
    Validate {
        /// Repository root [default: .]
        #[arg(long, default_value = ".")]
        root: PathBuf,
        /// Manifest path, relative to the root
        #[arg(long, default_value = marketcheck::config::DEFAULT_MANIFEST)]
        manifest: PathBuf,
        /// JSON Schema for the manifest, relative to the root [default: built-in]
        #[arg(long)]
        schema: Option<PathBuf>,
        /// Plugins directory, relative to the root
        #[arg(long, default_value = marketcheck::config::DEFAULT_PLUGINS_DIR)]
        plugins_dir: PathBuf,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Print the name and description parsed from a file's frontmatter
    Frontmatter {
        /// Path to a SKILL.md (or any file with frontmatter)
        file: PathBuf,
    },
}

pub fn run(cli: Cli) {
    init_logging(cli.verbose);

    if cli.about {
        print_about();
        return;
    }

    match cli.command {
        Some(Commands::Validate {
            root,
            manifest,
            schema,
            plugins_dir,
            format,
        }) => validate::run(root, manifest, schema, plugins_dir, format),
        Some(Commands::Frontmatter { file }) => frontmatter::run(file),
        None => {
            eprintln!("Usage: marketcheck <command> [args]");
            eprintln!("Run `marketcheck --help` for details.");
            std::process::exit(1);
        }
    }
}

/// Log to stderr so reports on stdout stay clean.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn print_about() {
    println!(
        "marketcheck: plugin marketplace validator\n\
         ├─ version:    {}\n\
         └─ licence:    {} https://www.apache.org/licenses/LICENSE-2.0",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_LICENSE"),
    );
}
