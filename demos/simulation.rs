//! Audit Simulation
//!
//! This example drives audits through their lifecycle and prints each state.
//!
//! Key concepts:
//! - The workflow delegates every step to the pure transition engine
//! - Invalid transitions surface as typed errors and leave the state unchanged
//! - Stray events on finished audits are ignored with a warning
//!
//! Run with: RUST_LOG=debug cargo run --example simulation

use audit_lifecycle::{AuditWorkflow, StepResult, TransitionError};
use chrono::Utc;
use tracing_subscriber::EnvFilter;

fn run_successful_audit() -> Result<(), TransitionError> {
    println!("--- Running Simulation: Successful Audit Flow ---");
    let mut audit = AuditWorkflow::new("AUD-001", Utc::now());
    println!("Current state: {}", audit.status());

    audit.start()?;
    println!("Current state: {}", audit.status());

    audit.complete("All screenshots verified and updated.")?;
    println!("Current state: {}", audit.status());

    println!("Final audit data: {:?}", audit.current_state());
    println!("Path: {:?}", audit.history().path());
    Ok(())
}

fn run_invalid_transition() -> Result<(), TransitionError> {
    println!("--- Running Simulation: Invalid Transition Flow ---");
    let mut audit = AuditWorkflow::new("AUD-002", Utc::now());
    println!("Current state: {}", audit.status());

    println!("Attempting to complete an audit that has not started...");
    audit.complete("This should fail.")?;
    Ok(())
}

fn run_late_cancel() -> Result<(), TransitionError> {
    println!("--- Running Simulation: Late Cancel Flow ---");
    let mut audit = AuditWorkflow::new("AUD-003", Utc::now());
    audit.start()?;
    audit.complete("Done.")?;

    println!("Sending a retried cancel after completion...");
    if let StepResult::Ignored(warning) = audit.cancel(Some("retried request".to_string()))? {
        println!("Ignored: {warning}");
    }
    println!("Current state: {}", audit.status());
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    if let Err(err) = run_successful_audit() {
        println!("An unexpected error occurred: {err}");
    }
    println!("--- End of Simulation ---\n");

    if let Err(err) = run_invalid_transition() {
        println!("CAUGHT EXPECTED ERROR: {err}");
    }
    println!("--- End of Simulation ---\n");

    if let Err(err) = run_late_cancel() {
        println!("An unexpected error occurred: {err}");
    }
    println!("--- End of Simulation ---");
}
