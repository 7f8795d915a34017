//! Labelled form rendering

use proposal_sdk::ProposalRecord;

use crate::{cli::RecordArgs, commands::input::build_form, error::CliError};

pub const FORM_HEADING: &str = "Project to Reduce Carbon Footprint";
pub const FORM_INTRO: &str = "Fill the details below and generate a professional PDF proposal.";

/// Print the proposal built from the given input as a labelled form
pub fn show_proposal(args: &RecordArgs) -> Result<(), CliError> {
    let form = build_form(args)?;
    print!("{}", render_form(form.record()));
    Ok(())
}

pub fn render_form(record: &ProposalRecord) -> String {
    let mut out = format!(
        "{}\n{}\n{}\n",
        FORM_HEADING,
        "=".repeat(FORM_HEADING.chars().count()),
        FORM_INTRO
    );

    for (field, value) in record.iter() {
        out.push('\n');
        out.push_str(field.label());
        out.push('\n');
        if value.is_empty() {
            out.push_str("  (empty)\n");
            continue;
        }
        for line in value.lines() {
            out.push_str(&format!("  {}\n", line));
        }
    }
    out
}
