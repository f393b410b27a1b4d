use devteam_common::{config::Config, role::Role};
use devteam_core::developer::AnyDeveloper;
use devteam_core::scenario;
use tracing::debug;

use crate::terminal::{console::TracingConsole, print};

pub fn run(role: Role, cfg: &Config) {
    debug!(%role, "hiring developer");
    let developer = AnyDeveloper::hire(role);

    print::header(role.title(), cfg.quiet);
    scenario::run(&developer, &TracingConsole);
}
