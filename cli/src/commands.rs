pub mod roles;
pub mod run;
pub mod showcase;

use clap::{ArgAction, Parser, Subcommand};
use devteam_common::config::Config;
use devteam_common::role::Role;

#[derive(Parser)]
#[command(name = "devteam")]
#[command(about = "Walks a small developer team through its duties.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Reduce output; -q prints the scenario lines and nothing else
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show debug diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run every developer through its scenario (default)
    #[command(alias = "s")]
    Showcase,
    /// Run a single developer through its scenario
    #[command(alias = "r")]
    Run { role: Role },
    /// List the roles and the lines each one writes
    #[command(alias = "l")]
    Roles,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            quiet: self.quiet,
            verbose: self.verbose,
            no_color: self.no_color,
        }
    }
}
