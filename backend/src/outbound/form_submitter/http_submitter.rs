//! Reqwest-backed form submitter.
//!
//! Every submission is one request to the form's action using the form's
//! method, with `Accept: application/json` and a `multipart/form-data` body.
//! The reply is decoded as JSON whatever its status code. Failures are handed
//! back unchanged: no retry, no timeout, no cancellation.

use std::sync::Arc;

use reqwest::header::ACCEPT;
use reqwest::multipart::{self, Part};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::domain::ports::{ResponseStatus, SubmissionObserver, TracingSubmissionObserver};
use crate::domain::{Form, FormMethod, FormValue, ResponseEnvelope};

const ACCEPT_JSON: &str = "application/json";

/// Failure of a form submission.
///
/// Both variants are transparent: `Display` and `source` are those of the
/// underlying reqwest or serde error.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request could not be built, sent, or its body read.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    /// The response body is not JSON of the expected shape.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
}

/// Form submitter issuing one HTTP request per call.
pub struct HttpFormSubmitter {
    client: Client,
    observer: Arc<dyn SubmissionObserver>,
}

impl HttpFormSubmitter {
    /// Build a submitter around a default reqwest client.
    ///
    /// The client applies no request timeout.
    /// ```rust,ignore
    /// let submitter = HttpFormSubmitter::new()?;
    /// ```
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client))
    }

    /// Build a submitter around a caller-configured client.
    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            observer: Arc::new(TracingSubmissionObserver),
        }
    }

    /// Replace the observer notified by [`HttpFormSubmitter::send_bare`].
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn SubmissionObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Submit `form` and return the decoded JSON body.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Transport`] when the request fails and
    /// [`SubmitError::Decode`] when the body is not JSON.
    pub async fn fetch_data(&self, form: &Form) -> Result<Value, SubmitError> {
        let response = self.dispatch(form).await?;
        decode_body(response).await
    }

    /// Submit `form` and decode the body as a [`ResponseEnvelope`].
    ///
    /// The envelope is returned as decoded; an `error` slot is not turned into
    /// a Rust error.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Transport`] when the request fails and
    /// [`SubmitError::Decode`] when the body is not a JSON object.
    pub async fn send(&self, form: &Form) -> Result<ResponseEnvelope, SubmitError> {
        let response = self.dispatch(form).await?;
        decode_body(response).await
    }

    /// Submit `form`, report the response status to the observer, then return
    /// the decoded JSON body.
    ///
    /// The observer runs once the response head arrives, so it also sees
    /// responses whose body later fails to decode.
    ///
    /// # Errors
    ///
    /// [`SubmitError::Transport`] when the request fails and
    /// [`SubmitError::Decode`] when the body is not JSON.
    pub async fn send_bare(&self, form: &Form) -> Result<Value, SubmitError> {
        let response = self.dispatch(form).await?;
        self.observer
            .response_received(&ResponseStatus::from_code(response.status().as_u16()));
        decode_body(response).await
    }

    async fn dispatch(&self, form: &Form) -> Result<Response, SubmitError> {
        let body = build_multipart(form)?;
        debug!(
            method = %form.method(),
            action = %form.action(),
            fields = form.fields().len(),
            "submitting form"
        );
        let response = self
            .client
            .request(http_method(form.method()), form.action().clone())
            .header(ACCEPT, ACCEPT_JSON)
            .multipart(body)
            .send()
            .await?;
        Ok(response)
    }
}

fn http_method(method: FormMethod) -> Method {
    match method {
        FormMethod::Get => Method::GET,
        FormMethod::Post => Method::POST,
    }
}

fn build_multipart(form: &Form) -> Result<multipart::Form, SubmitError> {
    form.fields().iter().try_fold(
        multipart::Form::new(),
        |body, (name, value)| -> Result<multipart::Form, SubmitError> {
            let part = match value {
                FormValue::Text(text) => Part::text(text.clone()),
                FormValue::File {
                    file_name,
                    content_type,
                    bytes,
                } => Part::bytes(bytes.clone())
                    .file_name(file_name.clone())
                    .mime_str(content_type)?,
            };
            Ok(body.part(name.clone(), part))
        },
    )
}

async fn decode_body<T: DeserializeOwned>(response: Response) -> Result<T, SubmitError> {
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
