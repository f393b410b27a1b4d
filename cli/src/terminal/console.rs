use devteam_common::console::Console;

use crate::terminal::print;

/// Console adapter that routes every line through the `tracing` subscriber.
pub struct TracingConsole;

impl Console for TracingConsole {
    fn line(&self, msg: &str) {
        print::print(msg);
    }
}
