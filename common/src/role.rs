//! # Developer Roles
//!
//! Parsing and naming for the three specializations. The CLI accepts a role
//! as free text, so the textual form lives here next to the enum.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Frontend,
    Backend,
    UiDesigner,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role '{input}', expected one of: frontend, backend, designer")]
pub struct ParseRoleError {
    pub input: String,
}

impl Role {
    /// Every role in showcase order.
    pub const ALL: [Role; 3] = [Role::Frontend, Role::Backend, Role::UiDesigner];

    /// Name of the capability contract this role is built around.
    pub fn capability(&self) -> &'static str {
        match self {
            Role::Frontend => "Ui",
            Role::Backend => "Database",
            Role::UiDesigner => "Design",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Role::Frontend => "frontend developer",
            Role::Backend => "backend developer",
            Role::UiDesigner => "ui designer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Frontend => "frontend",
            Role::Backend => "backend",
            Role::UiDesigner => "designer",
        };
        f.write_str(name)
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    /// Parses a role name.
    ///
    /// Supported formats (case-insensitive):
    /// * **Frontend**: "frontend", "fe"
    /// * **Backend**: "backend", "be"
    /// * **Designer**: "designer", "ui-designer", "uidesigner", "ux"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "frontend" | "fe" => Ok(Role::Frontend),
            "backend" | "be" => Ok(Role::Backend),
            "designer" | "ui-designer" | "uidesigner" | "ux" => Ok(Role::UiDesigner),
            _ => Err(ParseRoleError {
                input: s.to_string(),
            }),
        }
    }
}
