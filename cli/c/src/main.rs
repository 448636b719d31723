//! `c` — runs the toolchain's subcommands from `<C_ROOT>/commands`.

use std::convert::Infallible;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

use anyhow::{bail, Result};
use c_router::{Router, RouterConfig, DEFAULT_ROOT, ROOT_ENV};
use clap::Parser;

#[derive(Parser)]
#[command(name = "c", version, about = "The c toolchain")]
struct Cli {
    /// Toolchain root; commands live in <root>/commands
    #[arg(long, env = ROOT_ENV, default_value = DEFAULT_ROOT, value_parser = parse_root)]
    root: PathBuf,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
    /// Command to run, followed by its arguments
    #[arg(value_name = "COMMAND", trailing_var_arg = true)]
    argv: Vec<OsString>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}

/// An empty root (`C_ROOT=`) means the default installation.
fn parse_root(value: &str) -> Result<PathBuf, Infallible> {
    if value.is_empty() {
        Ok(PathBuf::from(DEFAULT_ROOT))
    } else {
        Ok(PathBuf::from(value))
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = RouterConfig::new(cli.root);
    log::debug!("toolchain root: {}", config.root().display());
    let router = Router::new(&config);

    let mut argv = cli.argv.into_iter();
    let Some(command) = argv.next() else {
        print_usage(&router);
        return Ok(());
    };
    let Ok(command) = command.into_string() else {
        bail!("command name is not valid UTF-8");
    };

    match router.dispatch(&command, argv)? {}
}

fn print_usage(router: &Router) {
    println!("usage: c <command> [arguments]");
    println!();
    println!("Available commands:");
    println!();
    for name in router.list() {
        println!("\t{name}");
    }
    println!();
}
