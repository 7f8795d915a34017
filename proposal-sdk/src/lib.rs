//! # Proposal SDK
//!
//! Form state and document request client for carbon footprint reduction
//! project proposals. The form holds a fixed set of free-text fields; a
//! generation attempt posts them as JSON to a PDF rendering endpoint and
//! saves the returned document.
//!
//! ## Example
//!
//! ```rust,no_run
//! use proposal_sdk::{
//!     ClientConfig, DiskSink, DocumentClient, GenerationOutcome, ProposalField, ProposalForm,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = DocumentClient::new(ClientConfig::default())?;
//!     let sink = DiskSink::new(".");
//!
//!     let mut form = ProposalForm::new();
//!     form.update(ProposalField::Organization, "Acme Corp");
//!     form.update(ProposalField::Budget, "€750,000 total across 3 years");
//!
//!     match form.generate_document(&client, &sink).await {
//!         GenerationOutcome::Saved(path) => println!("Saved {}", path.display()),
//!         GenerationOutcome::Failed(message) => eprintln!("{}", message),
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod form;
pub mod record;
pub mod sink;
pub mod state;

pub use client::{ClientConfig, DocumentClient, DEFAULT_BASE_URL, DEFAULT_ENDPOINT};
pub use error::ProposalError;
pub use form::{deliver, GenerationTicket, ProposalForm};
pub use record::{ProposalField, ProposalRecord};
pub use sink::{DiskSink, DocumentSink, OUTPUT_FILE_NAME};
pub use state::{GenerationOutcome, SubmissionPhase, SubmissionState};
