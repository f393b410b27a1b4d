use colored::*;
use devteam_common::{config::Config, role::Role};
use devteam_core::developer::AnyDeveloper;
use devteam_core::scenario;

use crate::terminal::{colors, console::TracingConsole, print};

pub fn showcase(cfg: &Config) {
    let console = TracingConsole;

    if cfg.is_quiet() {
        scenario::showcase(&console);
        return;
    }

    for role in Role::ALL {
        print::header(role.title(), cfg.quiet);
        scenario::run(&AnyDeveloper::hire(role), &console);
    }

    print_summary(Role::ALL.len());
}

fn print_summary(team_size: usize) {
    let team: ColoredString = format!("{team_size} developers").bold().green();
    let output: String = format!("Showcase Complete: {team} deployed and tested");

    print::fat_separator();
    print::centerln(&output.color(colors::TEXT_DEFAULT).to_string());
}
