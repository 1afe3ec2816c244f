mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{check, convert, CheckArgs, ConvertArgs};

/// Relayout CLI - generate web bindings from mobile layout resources
#[derive(Parser, Debug)]
#[command(name = "relayout")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Translate layout resources to HTML and TypeScript wrappers
    Convert(ConvertArgs),

    /// Validate layouts and report merged binding sets without emitting
    Check(CheckArgs),
}

fn main() {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    let result = match cli.command {
        Command::Convert(args) => convert(args, &cwd),
        Command::Check(args) => check(args, &cwd),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
