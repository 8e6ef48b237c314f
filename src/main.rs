//  ____  ____                 __  __       _
// |  _ \|  _ \ __ _ ___ ___  |  \/  | __ _| |_ ___
// | |_) | |_) / _` / __/ __| | |\/| |/ _` | __/ _ \
// |  _ <|  __/ (_| \__ \__ \ | |  | | (_| | ||  __/
// |_| \_\_|   \__,_|___/___/ |_|  |_|\__,_|\__\___|
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-07-10
// Version : 0.1.0
// License : Mulan PSL v2
//
// A password hygiene toolkit written in Rust.

use anyhow::Result;
use clap::{Parser, Subcommand};

use rpassmate::commands;
use rpassmate::configtool::prompt_input;

#[derive(Debug, Parser)]
#[command(name = "rpassmate")]
#[command(about = "A password hygiene toolkit written in Rust", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check the strength of a password
    Check(CheckArgs),

    /// Generate a secure random password
    Gen(GenArgs),

    /// Write the default configuration file
    Init,
}

#[derive(Debug, Parser)]
struct CheckArgs {
    /// Password to check (prompted with echo suppressed when omitted)
    password: Option<String>,
}

#[derive(Debug, Parser)]
struct GenArgs {
    /// Length of the password (defaults to the configured value)
    #[arg(short, long)]
    length: Option<usize>,
}

fn run_menu() -> Result<()> {
    println!("1. Check the strength of a password");
    println!("2. Generate a secure password");
    let choice = prompt_input("Enter your choice [1/2]: ")?;

    match choice.as_str() {
        "1" => commands::check::check_password(None),
        "2" => commands::password_gen::generate_random(None),
        _ => {
            println!("Invalid choice.");
            Ok(())
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Check(args)) => commands::check::check_password(args.password),
        Some(Command::Gen(args)) => commands::password_gen::generate_random(args.length),
        Some(Command::Init) => commands::init::init_config(),
        None => run_menu(),
    }
}
