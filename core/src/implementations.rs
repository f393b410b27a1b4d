use devteam_common::capability::{Database, Design, Ui};
use devteam_common::console::Console;

pub const CREATE_UI: &str = "Creating user interface...";
pub const CREATE_DB: &str = "Setting up database...";
pub const CREATE_DESIGN: &str = "Creating user interface design...";

pub struct UiImplementation;

impl Ui for UiImplementation {
    fn create_ui(&self, console: &dyn Console) {
        console.line(CREATE_UI);
    }
}

pub struct DbImplementation;

impl Database for DbImplementation {
    fn create_db(&self, console: &dyn Console) {
        console.line(CREATE_DB);
    }
}

pub struct DesignImplementation;

impl Design for DesignImplementation {
    fn create_design(&self, console: &dyn Console) {
        console.line(CREATE_DESIGN);
    }
}
