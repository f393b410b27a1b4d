#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Output reduction level.
    ///
    /// `0` prints banner, headers and summary around the scenario lines.
    /// Anything above prints the scenario lines alone.
    pub quiet: u8,
    /// Enables `debug` diagnostics unless `RUST_LOG` says otherwise.
    pub verbose: bool,
    /// Disables ANSI colors on every line.
    pub no_color: bool,
}

impl Config {
    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }
}
