//! Interactive form filling on the terminal

use anyhow::Context;
use proposal_sdk::{ProposalField, ProposalForm};
use std::io::{self, BufRead, Write};

use crate::{cli::TargetArgs, commands::generate::render, config::AppConfig, error::CliError};

/// A line with only this marker ends multi-line input; as the first line it clears the field
pub const END_MARKER: &str = ".";

/// Prompt for every field on stdin, then render the proposal
pub async fn fill_proposal(config: &AppConfig, target: &TargetArgs) -> Result<(), CliError> {
    let mut form = ProposalForm::new();
    {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        fill_form(&mut form, &mut input, &mut output)
            .context("Failed to read proposal fields from the terminal")?;
    }

    let path = render(&mut form, config, target).await?;
    println!("Saved {}", path.display());
    Ok(())
}

/// Walk through the fields in order, updating each one the user answers.
///
/// An empty answer keeps the current value. Input ending early leaves the
/// remaining fields as they are.
pub fn fill_form<R: BufRead, W: Write>(
    form: &mut ProposalForm,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    for field in ProposalField::ALL {
        print_current(field, form.record().get(field), output)?;

        let answer = if field.is_multiline() {
            writeln!(
                output,
                "Enter new text, end with a line containing only '{}' (empty keeps it):",
                END_MARKER
            )?;
            read_block(input)?
        } else {
            write!(output, "> ")?;
            output.flush()?;
            read_single(input)?
        };

        match answer {
            Answer::Keep => {}
            Answer::Replace(value) => form.update(field, value),
            Answer::Eof => break,
        }
    }
    Ok(())
}

enum Answer {
    Keep,
    Replace(String),
    Eof,
}

fn print_current<W: Write>(field: ProposalField, value: &str, output: &mut W) -> io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", field.label())?;
    if field.is_multiline() {
        for line in value.lines() {
            writeln!(output, "  | {}", line)?;
        }
    } else {
        writeln!(output, "  [{}]", value)?;
    }
    Ok(())
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed_len);
    Ok(Some(line))
}

fn read_single<R: BufRead>(input: &mut R) -> io::Result<Answer> {
    Ok(match read_line(input)? {
        None => Answer::Eof,
        Some(line) if line.is_empty() => Answer::Keep,
        Some(line) if line == END_MARKER => Answer::Replace(String::new()),
        Some(line) => Answer::Replace(line),
    })
}

fn read_block<R: BufRead>(input: &mut R) -> io::Result<Answer> {
    let first = match read_line(input)? {
        None => return Ok(Answer::Eof),
        Some(line) if line.is_empty() => return Ok(Answer::Keep),
        Some(line) if line == END_MARKER => return Ok(Answer::Replace(String::new())),
        Some(line) => line,
    };

    let mut lines = vec![first];
    while let Some(line) = read_line(input)? {
        if line == END_MARKER {
            break;
        }
        lines.push(line);
    }
    Ok(Answer::Replace(lines.join("\n")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proposal_sdk::ProposalRecord;
    use std::io::Cursor;

    fn run(script: &str) -> (ProposalForm, String) {
        let mut form = ProposalForm::new();
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        fill_form(&mut form, &mut input, &mut output).unwrap();
        (form, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_empty_answers_keep_defaults() {
        let script = "\n".repeat(ProposalField::ALL.len());
        let (form, output) = run(&script);
        assert_eq!(form.current_record(), ProposalRecord::default());
        assert!(output.contains("Project Title\n  [Carbon Footprint Reduction Initiative]"));
    }

    #[test]
    fn test_answers_update_fields() {
        // title, organization, contactName, contactEmail, summary (block), objectives (cleared)
        let script = "Green Office 2030\nAcme\n\nops@acme.test\nLine one\nLine two\n.\n.\n";
        let (form, _) = run(script);
        let record = form.record();

        assert_eq!(record.title, "Green Office 2030");
        assert_eq!(record.organization, "Acme");
        assert_eq!(record.contact_name, "");
        assert_eq!(record.contact_email, "ops@acme.test");
        assert_eq!(record.summary, "Line one\nLine two");
        assert_eq!(record.objectives, "");
        assert_eq!(record.measures, ProposalRecord::default().measures);
    }

    #[test]
    fn test_windows_line_endings() {
        let (form, _) = run("Title\r\n");
        assert_eq!(form.record().title, "Title");
    }

    #[test]
    fn test_dot_clears_single_line_field() {
        let (form, _) = run(".\n");
        assert_eq!(form.record().title, "");
    }
}
