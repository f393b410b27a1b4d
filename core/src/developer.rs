//! # Developers
//!
//! A [`Developer`] owns the duties every team member shares. Each
//! specialization is handed exactly one capability at construction and
//! stores nothing else, so there is no way to ask a backend developer to
//! build a UI: the method does not exist on that type.
//!
//! [`AnyDeveloper`] closes the set for callers that only learn the role at
//! runtime.

use devteam_common::capability::{Database, Design, Ui};
use devteam_common::console::Console;
use devteam_common::role::Role;

use crate::implementations::{DbImplementation, DesignImplementation, UiImplementation};

pub const DEPLOY_WEBSITE: &str = "Deploying website...";
pub const TEST_FUNCTIONALITY: &str = "Testing website functionality...";
pub const ADD_ANIMATION: &str = "Adding animations to the UI...";
pub const MANAGE_API: &str = "Managing API for the backend...";

/// A member of the team. Implementors only say which role they fill.
pub trait Developer {
    fn role(&self) -> Role;
}

/// Duties shared by every developer, independent of capability.
///
/// Implemented once for every [`Developer`]; the blanket impl below is the
/// only impl coherence allows, so no specialization can change these lines.
pub trait SharedDuties {
    fn deploy_website(&self, console: &dyn Console);
    fn test_functionality(&self, console: &dyn Console);
}

impl<D: Developer + ?Sized> SharedDuties for D {
    fn deploy_website(&self, console: &dyn Console) {
        console.line(DEPLOY_WEBSITE);
    }

    fn test_functionality(&self, console: &dyn Console) {
        console.line(TEST_FUNCTIONALITY);
    }
}

pub struct FrontendDeveloper {
    ui: Box<dyn Ui>,
}

impl FrontendDeveloper {
    pub fn new(ui: Box<dyn Ui>) -> Self {
        Self { ui }
    }

    /// Frontend developer backed by [`UiImplementation`].
    pub fn with_defaults() -> Self {
        Self::new(Box::new(UiImplementation))
    }

    pub fn create_ui(&self, console: &dyn Console) {
        self.ui.create_ui(console);
    }

    pub fn add_animation(&self, console: &dyn Console) {
        console.line(ADD_ANIMATION);
    }
}

impl Developer for FrontendDeveloper {
    fn role(&self) -> Role {
        Role::Frontend
    }
}

pub struct BackendDeveloper {
    db: Box<dyn Database>,
}

impl BackendDeveloper {
    pub fn new(db: Box<dyn Database>) -> Self {
        Self { db }
    }

    /// Backend developer backed by [`DbImplementation`].
    pub fn with_defaults() -> Self {
        Self::new(Box::new(DbImplementation))
    }

    pub fn create_db(&self, console: &dyn Console) {
        self.db.create_db(console);
    }

    pub fn manage_api(&self, console: &dyn Console) {
        console.line(MANAGE_API);
    }
}

impl Developer for BackendDeveloper {
    fn role(&self) -> Role {
        Role::Backend
    }
}

/// Designer role. Has no extra duty beyond its capability.
pub struct UiDesigner {
    design: Box<dyn Design>,
}

impl UiDesigner {
    pub fn new(design: Box<dyn Design>) -> Self {
        Self { design }
    }

    /// Designer backed by [`DesignImplementation`].
    pub fn with_defaults() -> Self {
        Self::new(Box::new(DesignImplementation))
    }

    pub fn create_design(&self, console: &dyn Console) {
        self.design.create_design(console);
    }
}

impl Developer for UiDesigner {
    fn role(&self) -> Role {
        Role::UiDesigner
    }
}

pub enum AnyDeveloper {
    Frontend(FrontendDeveloper),
    Backend(BackendDeveloper),
    UiDesigner(UiDesigner),
}

impl AnyDeveloper {
    /// Builds the specialization for `role`, wired to the stock capability.
    pub fn hire(role: Role) -> Self {
        match role {
            Role::Frontend => AnyDeveloper::Frontend(FrontendDeveloper::with_defaults()),
            Role::Backend => AnyDeveloper::Backend(BackendDeveloper::with_defaults()),
            Role::UiDesigner => AnyDeveloper::UiDesigner(UiDesigner::with_defaults()),
        }
    }
}

impl Developer for AnyDeveloper {
    fn role(&self) -> Role {
        match self {
            AnyDeveloper::Frontend(dev) => dev.role(),
            AnyDeveloper::Backend(dev) => dev.role(),
            AnyDeveloper::UiDesigner(dev) => dev.role(),
        }
    }
}

impl From<FrontendDeveloper> for AnyDeveloper {
    fn from(dev: FrontendDeveloper) -> Self {
        AnyDeveloper::Frontend(dev)
    }
}

impl From<BackendDeveloper> for AnyDeveloper {
    fn from(dev: BackendDeveloper) -> Self {
        AnyDeveloper::Backend(dev)
    }
}

impl From<UiDesigner> for AnyDeveloper {
    fn from(dev: UiDesigner) -> Self {
        AnyDeveloper::UiDesigner(dev)
    }
}
