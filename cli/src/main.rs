mod commands;
mod terminal;

use commands::{CommandLine, Commands, roles, run, showcase};
use terminal::{logging, print};
use tracing::debug;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    if cfg.no_color {
        colored::control::set_override(false);
    }

    logging::init_logging(&cfg)?;
    debug!(?cfg, "configuration loaded");

    print::banner(cfg.quiet);

    match commands.command.unwrap_or(Commands::Showcase) {
        Commands::Showcase => showcase::showcase(&cfg),
        Commands::Run { role } => run::run(role, &cfg),
        Commands::Roles => roles::roles(&cfg),
    }

    print::end_of_program(cfg.quiet);
    Ok(())
}
