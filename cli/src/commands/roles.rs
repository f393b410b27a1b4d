use colored::*;
use devteam_common::{config::Config, role::Role};
use devteam_core::scenario;

use crate::terminal::print;

type Detail = (String, ColoredString);

pub fn roles(cfg: &Config) {
    print::header("team roles", cfg.quiet);

    for (idx, role) in Role::ALL.iter().enumerate() {
        print::tree_head(idx, role.title());
        print::as_tree_one_level(role_details(*role));
        if idx + 1 != Role::ALL.len() {
            print::print("");
        }
    }
}

fn role_details(role: Role) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        ("Name".to_string(), role.to_string().normal()),
        ("Needs".to_string(), role.capability().yellow()),
    ];

    details.extend(
        scenario::script(role)
            .into_iter()
            .enumerate()
            .map(|(i, line)| (format!("Step {}", i + 1), line.normal())),
    );

    details
}
