//! Field listing

use proposal_sdk::{ProposalField, ProposalRecord};

use crate::error::CliError;

/// Print every field key with its label, input kind and default text
pub fn list_fields() -> Result<(), CliError> {
    let defaults = ProposalRecord::default();
    for field in ProposalField::ALL {
        println!("{}", describe_field(field, defaults.get(field)));
    }
    Ok(())
}

fn describe_field(field: ProposalField, default: &str) -> String {
    let kind = match field.rows() {
        Some(rows) => format!("text, {} rows", rows),
        None => "line".to_string(),
    };
    // Multi-line defaults show their first line only
    let default = match default.lines().next() {
        Some(first) if !first.is_empty() => first,
        _ => "(empty)",
    };
    format!(
        "{:<24} {:<28} {:<14} {}",
        field.key(),
        field.label(),
        kind,
        default
    )
}
