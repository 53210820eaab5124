pub mod init;
pub mod punch;
pub mod show;
pub mod sum;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Write the default configuration")]
    Init(init::InitArgs),
    #[command(about = "Clock in or out on one of today's two slots", arg_required_else_help = true)]
    Punch(punch::PunchArgs),
    #[command(about = "Show the morning/afternoon view of a day", arg_required_else_help = true)]
    Show(show::ShowArgs),
    #[command(about = "Sum worked hours for a month", arg_required_else_help = true)]
    Sum(sum::SumArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Punch(args) => punch::cmd(args),
            Commands::Show(args) => show::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
        }
    }
}
