use std::path::PathBuf;
use tracing::{info, warn};

use crate::{
    client::DocumentClient,
    error::ProposalError,
    record::{ProposalField, ProposalRecord},
    sink::{DocumentSink, OUTPUT_FILE_NAME},
    state::{GenerationOutcome, SubmissionState},
};

/// Snapshot taken when a generation attempt starts.
///
/// Edits made to the form after the ticket was issued do not reach it.
#[derive(Debug)]
pub struct GenerationTicket {
    attempt: u64,
    snapshot: ProposalRecord,
}

impl GenerationTicket {
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    pub fn snapshot(&self) -> &ProposalRecord {
        &self.snapshot
    }
}

/// Owns the proposal being edited and the state of document generation
#[derive(Debug, Clone, Default)]
pub struct ProposalForm {
    record: ProposalRecord,
    submission: SubmissionState,
    attempts: u64,
}

impl ProposalForm {
    /// A form pre-filled with the default proposal text
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: ProposalRecord) -> Self {
        Self {
            record,
            ..Self::default()
        }
    }

    /// Replace one field, leaving every other field untouched
    pub fn update(&mut self, field: ProposalField, value: impl Into<String>) {
        self.record.set(field, value);
    }

    /// Replace one field addressed by its payload key
    pub fn update_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<(), ProposalError> {
        let field: ProposalField = name.parse()?;
        self.update(field, value);
        Ok(())
    }

    /// Owned copy of the current record
    pub fn current_record(&self) -> ProposalRecord {
        self.record.clone()
    }

    pub fn record(&self) -> &ProposalRecord {
        &self.record
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Enter the in-progress state and capture the record to send
    pub fn begin_generation(&mut self) -> GenerationTicket {
        self.attempts += 1;
        self.submission.start();
        info!("Starting document generation attempt {}", self.attempts);
        GenerationTicket {
            attempt: self.attempts,
            snapshot: self.current_record(),
        }
    }

    /// Record the result of an attempt started with [`begin_generation`](Self::begin_generation)
    pub fn finish_generation(
        &mut self,
        ticket: GenerationTicket,
        result: Result<PathBuf, ProposalError>,
    ) -> GenerationOutcome {
        match result {
            Ok(path) => {
                self.submission.succeed();
                info!(
                    "Generation attempt {} saved {}",
                    ticket.attempt,
                    path.display()
                );
                GenerationOutcome::Saved(path)
            }
            Err(e) => {
                let message = e.user_message();
                warn!("Generation attempt {} failed: {}", ticket.attempt, e);
                self.submission.fail(message.clone());
                GenerationOutcome::Failed(message)
            }
        }
    }

    /// Run one full generation attempt: request the PDF and save it.
    ///
    /// Failures are stored in the submission state and returned as
    /// [`GenerationOutcome::Failed`]; nothing is propagated as an error.
    pub async fn generate_document<S>(&mut self, client: &DocumentClient, sink: &S) -> GenerationOutcome
    where
        S: DocumentSink + ?Sized,
    {
        let ticket = self.begin_generation();
        let result = deliver(client, sink, ticket.snapshot()).await;
        self.finish_generation(ticket, result)
    }
}

/// Request the document for `record` and hand it to `sink`
pub async fn deliver<S>(
    client: &DocumentClient,
    sink: &S,
    record: &ProposalRecord,
) -> Result<PathBuf, ProposalError>
where
    S: DocumentSink + ?Sized,
{
    let document = client.request_pdf(record).await?;
    sink.save(OUTPUT_FILE_NAME, &document).await
}
