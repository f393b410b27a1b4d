use devteam_common::console::Console;
use tracing::debug;

use crate::developer::{Developer, SharedDuties};

/// Runs the shared duties of any developer: deploy, then test.
///
/// Accepts both concrete specializations and trait objects.
pub fn develop<D>(developer: &D, console: &dyn Console)
where
    D: Developer + ?Sized,
{
    debug!(role = %developer.role(), "dispatching shared duties");
    developer.deploy_website(console);
    developer.test_functionality(console);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::developer::{
        BackendDeveloper, DEPLOY_WEBSITE, FrontendDeveloper, TEST_FUNCTIONALITY, UiDesigner,
    };
    use devteam_common::console::RecordingConsole;

    #[test]
    fn develop_is_uniform_across_specializations() {
        let team: Vec<Box<dyn Developer>> = vec![
            Box::new(FrontendDeveloper::with_defaults()),
            Box::new(BackendDeveloper::with_defaults()),
            Box::new(UiDesigner::with_defaults()),
        ];

        for dev in &team {
            let console = RecordingConsole::new();
            develop(dev.as_ref(), &console);
            assert_eq!(console.lines(), vec![DEPLOY_WEBSITE, TEST_FUNCTIONALITY]);
        }
    }

    #[test]
    fn develop_accepts_concrete_types() {
        let console = RecordingConsole::new();
        develop(&BackendDeveloper::with_defaults(), &console);
        assert_eq!(console.lines().len(), 2);
    }
}
