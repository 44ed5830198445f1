//! Submittable form model.
//!
//! A [`Form`] holds what a browser reads off a form element at submit time:
//! the resolved action URL, the method, and the ordered form data set.

use std::fmt;

use thiserror::Error;
use url::Url;

/// HTTP method declared by a form's `method` attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FormMethod {
    /// `GET`, the fallback for missing or unknown attributes.
    #[default]
    Get,
    /// `POST`.
    Post,
}

impl FormMethod {
    /// Interpret a `method` attribute the way a browser reflects it.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    /// Missing or unrecognised values fall back to [`FormMethod::Get`].
    ///
    /// # Examples
    /// ```
    /// use registration::domain::FormMethod;
    ///
    /// assert_eq!(FormMethod::from_attribute("POST"), FormMethod::Post);
    /// assert_eq!(FormMethod::from_attribute("put"), FormMethod::Get);
    /// ```
    pub fn from_attribute(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("post") {
            Self::Post
        } else {
            Self::Get
        }
    }

    /// Upper-case method name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for FormMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of one entry in the form data set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    /// Plain text value.
    Text(String),
    /// Uploaded file.
    File {
        /// File name sent in the part's `Content-Disposition`.
        file_name: String,
        /// MIME type of the part.
        content_type: String,
        /// Raw file contents.
        bytes: Vec<u8>,
    },
}

/// Errors raised while building a [`Form`] from element attributes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The `action` attribute does not resolve against the base URL.
    #[error("form action `{action}` is not a valid URL: {source}")]
    InvalidAction {
        /// Attribute value as given.
        action: String,
        /// Parser failure.
        #[source]
        source: url::ParseError,
    },
}

/// Form snapshot ready for submission.
///
/// Field order is preserved and duplicate names are allowed, matching a
/// browser's form data set.
///
/// # Examples
/// ```
/// use registration::domain::{Form, FormMethod};
/// use url::Url;
///
/// let base = Url::parse("http://localhost:5173/register").expect("base url");
/// let form = Form::resolve(&base, "/register", "post")
///     .expect("action resolves")
///     .text("email", "mike@example.com")
///     .text("password", "hunter2");
/// assert_eq!(form.method(), FormMethod::Post);
/// assert_eq!(form.fields().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Form {
    action: Url,
    method: FormMethod,
    fields: Vec<(String, FormValue)>,
}

impl Form {
    /// Create an empty form for an already resolved action.
    pub fn new(action: Url, method: FormMethod) -> Self {
        Self {
            action,
            method,
            fields: Vec::new(),
        }
    }

    /// Build a form from raw `action` and `method` attributes.
    ///
    /// An empty action submits to `base` itself; relative actions are joined
    /// onto `base`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidAction`] when the action cannot be resolved.
    pub fn resolve(base: &Url, action: &str, method: &str) -> Result<Self, FormError> {
        let trimmed = action.trim();
        let resolved = if trimmed.is_empty() {
            base.clone()
        } else {
            base.join(trimmed)
                .map_err(|source| FormError::InvalidAction {
                    action: action.to_owned(),
                    source,
                })?
        };
        Ok(Self::new(resolved, FormMethod::from_attribute(method)))
    }

    /// Append a text entry.
    #[must_use]
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields
            .push((name.into(), FormValue::Text(value.into())));
        self
    }

    /// Append a file entry.
    #[must_use]
    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        self.fields.push((
            name.into(),
            FormValue::File {
                file_name: file_name.into(),
                content_type: content_type.into(),
                bytes: bytes.into(),
            },
        ));
        self
    }

    /// Resolved submission URL.
    pub fn action(&self) -> &Url {
        &self.action
    }

    /// Submission method.
    pub fn method(&self) -> FormMethod {
        self.method
    }

    /// Entries in submission order.
    pub fn fields(&self) -> &[(String, FormValue)] {
        &self.fields
    }
}
