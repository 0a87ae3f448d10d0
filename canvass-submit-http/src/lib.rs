//! HTTP submission backend for canvass.
//!
//! Delivers an assembled [`Record`] as a single multipart form POST, one
//! field per catalog question key, every value a string (possibly empty).
//! Any 2xx status counts as success; the response body is never parsed.
//! A non-success status or a transport-level failure is "submission
//! failed" — the wizard keeps its state and the caller may retry.

use canvass::{Record, Transport};
use reqwest::blocking::{Client, multipart::Form};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Error type for the HTTP backend.
#[derive(Debug, thiserror::Error)]
pub enum HttpSubmitError {
    /// The endpoint answered with a non-success status.
    #[error("Collection endpoint answered {0}")]
    Status(reqwest::StatusCode),

    /// The request never completed (connection, TLS, or protocol failure).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Blocking multipart transport to a fixed collection endpoint.
///
/// The endpoint URL is injected configuration, one per catalog variant.
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    endpoint: Url,
    client: Client,
}

impl HttpSubmitter {
    /// Create a submitter for the given collection endpoint.
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            client: Client::new(),
        }
    }

    /// Create a submitter with a request timeout instead of the transport
    /// default.
    pub fn with_timeout(endpoint: Url, timeout: Duration) -> Result<Self, HttpSubmitError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { endpoint, client })
    }

    /// Get the configured endpoint.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl Transport for HttpSubmitter {
    type Error = HttpSubmitError;

    fn submit(&self, record: &Record) -> Result<(), Self::Error> {
        let mut form = Form::new();
        for (key, value) in record.iter() {
            form = form.text(key.to_string(), value.to_string());
        }

        debug!(endpoint = %self.endpoint, fields = record.len(), "posting submission");
        let response = self.client.post(self.endpoint.clone()).multipart(form).send()?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "submission accepted");
            Ok(())
        } else {
            warn!(%status, "submission rejected");
            Err(HttpSubmitError::Status(status))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canvass::{Catalog, Question, Section, Wizard};
    use mockito::Matcher;

    fn catalog() -> Catalog {
        Catalog::new(
            "Test",
            vec![Section::new(
                "Only",
                vec![
                    Question::single("AgeGroup", "Age Group:", ["Under 18", "18–24"]),
                    Question::text("StateOrUT", "State:"),
                ],
            )],
        )
        .unwrap()
    }

    fn endpoint(server: &mockito::ServerGuard) -> Url {
        Url::parse(&format!("{}/exec", server.url())).unwrap()
    }

    #[test]
    fn posts_every_field_and_succeeds_on_2xx() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/exec")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#"name="AgeGroup""#.to_string()),
                Matcher::Regex("18–24".to_string()),
                // Unanswered questions are still on the wire, with empty values.
                Matcher::Regex(r#"name="StateOrUT""#.to_string()),
            ]))
            .with_status(200)
            .create();
        let submitter = HttpSubmitter::new(endpoint(&server));

        let mut wizard = Wizard::new(catalog());
        wizard.start();
        wizard.select_single("AgeGroup", "18–24");
        wizard.submit(&submitter).unwrap();

        mock.assert();
    }

    #[test]
    fn non_success_status_is_an_error() {
        let mut server = mockito::Server::new();
        let mock = server.mock("POST", "/exec").with_status(500).create();
        let submitter = HttpSubmitter::new(endpoint(&server));

        let record = Wizard::new(catalog()).assemble();
        let err = submitter.submit(&record).unwrap_err();
        assert!(matches!(err, HttpSubmitError::Status(status) if status.as_u16() == 500));

        mock.assert();
    }

    #[test]
    fn connection_failure_is_an_error() {
        // Bind and drop a listener to get a port nothing answers on.
        let addr = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap();
        let submitter = HttpSubmitter::new(Url::parse(&format!("http://{addr}/exec")).unwrap());

        let record = Wizard::new(catalog()).assemble();
        assert!(matches!(
            submitter.submit(&record),
            Err(HttpSubmitError::Http(_))
        ));
    }
}
