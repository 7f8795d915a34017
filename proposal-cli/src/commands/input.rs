//! Building a proposal form from an input file and `--set` overrides

use anyhow::Context;
use proposal_sdk::{ProposalField, ProposalForm, ProposalRecord};
use std::path::Path;
use tracing::debug;

use crate::{cli::RecordArgs, error::CliError};

/// Split a `KEY=VALUE` override. A literal `\n` in the value becomes a newline.
pub fn parse_override(raw: &str) -> Result<(ProposalField, String), CliError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| CliError::Input(format!("expected KEY=VALUE, got '{}'", raw)))?;
    let field: ProposalField = key.parse()?;
    Ok((field, value.replace("\\n", "\n")))
}

/// Read a proposal from a JSON file; fields it omits keep the example text
pub fn load_record(path: &Path) -> Result<ProposalRecord, CliError> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read proposal file {}", path.display()))?;
    serde_json::from_str(&contents)
        .map_err(|e| CliError::Input(format!("{}: {}", path.display(), e)))
}

/// Defaults, then the input file, then each override in order
pub fn build_form(args: &RecordArgs) -> Result<ProposalForm, CliError> {
    let record = match &args.input {
        Some(path) => {
            debug!("Reading proposal from {}", path.display());
            load_record(path)?
        }
        None => ProposalRecord::default(),
    };

    let mut form = ProposalForm::with_record(record);
    for raw in &args.overrides {
        let (field, value) = parse_override(raw)?;
        debug!("Override {} ({} chars)", field, value.chars().count());
        form.update(field, value);
    }
    Ok(form)
}
