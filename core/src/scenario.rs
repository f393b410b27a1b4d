//! # Example Scenarios
//!
//! Scripted runs of each specialization: its capability, its extra duty
//! and then the shared duties through [`develop`].

use devteam_common::console::Console;
use devteam_common::role::Role;
use tracing::debug;

use crate::developer::{ADD_ANIMATION, AnyDeveloper, DEPLOY_WEBSITE, MANAGE_API, TEST_FUNCTIONALITY};
use crate::dispatch::develop;
use crate::implementations::{CREATE_DB, CREATE_DESIGN, CREATE_UI};

/// Runs the scenario of a single developer.
pub fn run(developer: &AnyDeveloper, console: &dyn Console) {
    match developer {
        AnyDeveloper::Frontend(dev) => {
            dev.create_ui(console);
            dev.add_animation(console);
        }
        AnyDeveloper::Backend(dev) => {
            dev.create_db(console);
            dev.manage_api(console);
        }
        AnyDeveloper::UiDesigner(dev) => {
            dev.create_design(console);
        }
    }
    develop(developer, console);
}

/// Hires one developer per role and runs each scenario in [`Role::ALL`] order.
pub fn showcase(console: &dyn Console) {
    for role in Role::ALL {
        debug!(%role, "starting scenario");
        run(&AnyDeveloper::hire(role), console);
    }
}

/// Lines a stock developer of `role` writes during [`run`].
pub fn script(role: Role) -> Vec<&'static str> {
    let mut lines = match role {
        Role::Frontend => vec![CREATE_UI, ADD_ANIMATION],
        Role::Backend => vec![CREATE_DB, MANAGE_API],
        Role::UiDesigner => vec![CREATE_DESIGN],
    };
    lines.extend([DEPLOY_WEBSITE, TEST_FUNCTIONALITY]);
    lines
}
