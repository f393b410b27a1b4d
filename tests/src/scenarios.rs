#![cfg(test)]
use devteam_common::capability::{Database, Design};
use devteam_common::console::{Console, RecordingConsole};
use devteam_common::role::Role;
use devteam_core::developer::{AnyDeveloper, BackendDeveloper, Developer, UiDesigner};
use devteam_core::dispatch::develop;
use devteam_core::scenario;

/// Frontend walk-through: capability, extra duty, then the shared duties.
#[test]
fn frontend_end_to_end() {
    let console = RecordingConsole::new();
    scenario::run(&AnyDeveloper::hire(Role::Frontend), &console);

    assert_eq!(
        console.lines(),
        vec![
            "Creating user interface...",
            "Adding animations to the UI...",
            "Deploying website...",
            "Testing website functionality...",
        ]
    );
}

#[test]
fn backend_end_to_end() {
    let console = RecordingConsole::new();
    scenario::run(&AnyDeveloper::hire(Role::Backend), &console);

    assert_eq!(
        console.lines(),
        vec![
            "Setting up database...",
            "Managing API for the backend...",
            "Deploying website...",
            "Testing website functionality...",
        ]
    );
}

#[test]
fn designer_end_to_end() {
    let console = RecordingConsole::new();
    scenario::run(&AnyDeveloper::hire(Role::UiDesigner), &console);

    assert_eq!(
        console.lines(),
        vec![
            "Creating user interface design...",
            "Deploying website...",
            "Testing website functionality...",
        ]
    );
}

/// The full showcase is the three scenarios back to back, frontend first.
#[test]
fn showcase_matches_expected_transcript() {
    let console = RecordingConsole::new();
    scenario::showcase(&console);

    let lines = console.lines();
    assert_eq!(lines.len(), 11, "Unexpected transcript: {lines:#?}");
    assert_eq!(lines[0], "Creating user interface...");
    assert_eq!(lines[4], "Setting up database...");
    assert_eq!(lines[8], "Creating user interface design...");
    assert_eq!(lines[10], "Testing website functionality...");
}

/// Shared duties do not depend on which specialization runs them.
#[test]
fn develop_output_is_role_independent() {
    let transcripts: Vec<Vec<String>> = Role::ALL
        .into_iter()
        .map(|role| {
            let console = RecordingConsole::new();
            develop(&AnyDeveloper::hire(role), &console);
            console.take()
        })
        .collect();

    assert!(transcripts.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(
        transcripts[0],
        vec!["Deploying website...", "Testing website functionality..."]
    );
}

struct MigrationDb;

impl Database for MigrationDb {
    fn create_db(&self, console: &dyn Console) {
        console.line("Running migrations...");
    }
}

struct Wireframes;

impl Design for Wireframes {
    fn create_design(&self, console: &dyn Console) {
        console.line("Sketching wireframes...");
    }
}

/// Developers only see the contract, so any implementation can be swapped in.
#[test]
fn injected_capabilities_replace_stock_lines() {
    let console = RecordingConsole::new();

    let backend: AnyDeveloper = BackendDeveloper::new(Box::new(MigrationDb)).into();
    let designer: AnyDeveloper = UiDesigner::new(Box::new(Wireframes)).into();

    scenario::run(&backend, &console);
    scenario::run(&designer, &console);

    let lines = console.lines();
    assert_eq!(lines[0], "Running migrations...");
    assert_eq!(lines[1], "Managing API for the backend...");
    assert_eq!(lines[4], "Sketching wireframes...");
    assert_eq!(backend.role(), Role::Backend);
    assert_eq!(designer.role(), Role::UiDesigner);
}

#[test]
fn scripts_describe_what_run_writes() {
    for role in Role::ALL {
        let console = RecordingConsole::new();
        scenario::run(&AnyDeveloper::hire(role), &console);
        assert_eq!(
            console.lines(),
            scenario::script(role),
            "Script for {role} does not match its scenario"
        );
    }
}
