//! Document generation

use proposal_sdk::{deliver, DiskSink, DocumentClient, GenerationOutcome, ProposalForm};
use std::path::PathBuf;
use tracing::info;

use crate::{
    cli::{RecordArgs, TargetArgs},
    commands::input::build_form,
    config::AppConfig,
    error::CliError,
};

/// Build the proposal from the arguments and render it
pub async fn generate_proposal(
    config: &AppConfig,
    record: &RecordArgs,
    target: &TargetArgs,
) -> Result<(), CliError> {
    let mut form = build_form(record)?;
    let path = render(&mut form, config, target).await?;
    println!("Saved {}", path.display());
    Ok(())
}

/// Run one generation attempt against the configured service
pub async fn render(
    form: &mut ProposalForm,
    config: &AppConfig,
    target: &TargetArgs,
) -> Result<PathBuf, CliError> {
    let (client, sink) = connect(config, target)?;
    info!("Requesting document from {}", client.endpoint_url());

    let ticket = form.begin_generation();
    eprintln!("{}", form.submission().button_label());
    let result = deliver(&client, &sink, ticket.snapshot()).await;

    match form.finish_generation(ticket, result) {
        GenerationOutcome::Saved(path) => Ok(path),
        GenerationOutcome::Failed(message) => Err(CliError::Generation(message)),
    }
}

/// Client and sink for the configured service, with command-line overrides applied
pub fn connect(config: &AppConfig, target: &TargetArgs) -> Result<(DocumentClient, DiskSink), CliError> {
    let mut client_config = config.client_config();
    if let Some(base_url) = &target.base_url {
        client_config.base_url = base_url.clone();
    }
    let client = DocumentClient::new(client_config)?;

    let output_dir = target
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output.dir.clone());
    Ok((client, DiskSink::new(output_dir)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LoggingConfig, OutputConfig, ServerConfig};

    fn test_config() -> AppConfig {
        AppConfig {
            server: ServerConfig {
                base_url: "http://localhost:3000".to_string(),
                endpoint: "/api/pdf".to_string(),
                timeout_secs: None,
            },
            output: OutputConfig {
                dir: PathBuf::from("configured"),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }

    #[test]
    fn test_connect_uses_config() {
        let (client, sink) = connect(&test_config(), &TargetArgs::default()).unwrap();
        assert_eq!(client.endpoint_url(), "http://localhost:3000/api/pdf");
        assert_eq!(sink.output_dir(), PathBuf::from("configured").as_path());
    }

    #[test]
    fn test_connect_applies_overrides() {
        let target = TargetArgs {
            output_dir: Some(PathBuf::from("elsewhere")),
            base_url: Some("http://pdf.internal:8080".to_string()),
        };
        let (client, sink) = connect(&test_config(), &target).unwrap();
        assert_eq!(client.endpoint_url(), "http://pdf.internal:8080/api/pdf");
        assert_eq!(sink.output_dir(), PathBuf::from("elsewhere").as_path());
    }

    #[tokio::test]
    async fn test_render_unreachable_service_fails() {
        let dir = tempfile::tempdir().unwrap();
        let target = TargetArgs {
            output_dir: Some(dir.path().to_path_buf()),
            base_url: Some("http://127.0.0.1:1".to_string()),
        };
        let mut form = ProposalForm::new();

        let result = render(&mut form, &test_config(), &target).await;

        assert!(matches!(result, Err(CliError::Generation(_))));
        assert!(form.submission().error().is_some());
        assert!(!form.submission().in_progress());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
