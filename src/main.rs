use clap::{Parser, Subcommand};
use tubestats::commands::*;
use tubestats::core::{
    error::{Result, TubeStatsError},
    print_error,
};
use std::env;

#[derive(Parser)]
#[command(name = "tubestats")]
#[command(about = "Live London tube line status in your terminal")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Line(s) to get status for, comma separated with no spaces (all lines if omitted)
    #[arg(short = 'l', long, visible_alias = "line", value_name = "LINES")]
    lines: Option<String>,

    /// Show more detailed output (reserved)
    #[arg(short = 'd', long)]
    detailed: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Save TfL API credentials to the config file
    Init(InitArgs),
}

/// 2 when the TfL API failed us, 1 for everything local
fn exit_code(error: &TubeStatsError) -> i32 {
    if error.is_upstream() {
        2
    } else {
        1
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "warn");
    }
    env_logger::init();

    let result = match cli.command {
        Some(Commands::Init(args)) => execute_init(args),
        None => execute_status(cli.lines.as_deref(), cli.detailed),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        std::process::exit(exit_code(&e));
    }

    Ok(())
}
