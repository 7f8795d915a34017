//! JSON template output

use proposal_sdk::ProposalRecord;

use crate::error::CliError;

/// Print a proposal record as pretty JSON
pub fn print_template(blank: bool) -> Result<(), CliError> {
    println!("{}", template_json(blank)?);
    Ok(())
}

fn template_json(blank: bool) -> Result<String, CliError> {
    let record = if blank {
        ProposalRecord::blank()
    } else {
        ProposalRecord::default()
    };
    Ok(serde_json::to_string_pretty(&record)?)
}
