//! `cmod` — manage `c.mod` module manifests.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cmod", version, about = "Manage c.mod module manifests")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a c.mod file in the current directory
    Init {
        /// Import path of the module (e.g., c.example.org/hello)
        import_path: String,
    },
    /// Format a c.mod file to stdout
    Fmt {
        /// Manifest to format (default: ./c.mod)
        path: Option<PathBuf>,
        /// Output format (text, json)
        #[arg(long)]
        export: Option<String>,
    },
    /// Print the flags a c.mod file declares for a platform
    Flags {
        /// Manifest to read (default: ./c.mod)
        path: Option<PathBuf>,
        /// Platform key (default: the host OS)
        #[arg(long)]
        os: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        eprint!("{}", Cli::command().render_help());
        process::exit(1);
    };

    if let Err(e) = run(command) {
        match e.downcast_ref::<commands::Diagnostic>() {
            Some(diagnostic) => eprintln!("{diagnostic}"),
            None => eprintln!("error: {e:#}"),
        }
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Init { import_path } => commands::init::run(&import_path),

        Commands::Fmt { path, export } => {
            let path = commands::resolve_manifest_path(path.as_deref())?;
            commands::fmt::run(&path, export.as_deref())
        }

        Commands::Flags { path, os } => {
            let path = commands::resolve_manifest_path(path.as_deref())?;
            commands::flags::run(&path, os.as_deref())
        }
    }
}
