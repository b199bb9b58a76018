//! Error handling for the viewer.
//!
//! Library code returns the strongly-typed [`ViewerError`]; the binary
//! boundary works with [`anyhow::Error`] and uses [`display_error`] to print
//! a short message plus an actionable suggestion where one exists.
//!
//! The component itself keeps the failure surface deliberately small: a
//! failed template fetch aborts the render (no fallback fragment), and a
//! missing or empty graph is not an error at all, it renders the placeholder
//! text instead.

use std::path::PathBuf;

use colored::Colorize;
use thiserror::Error;

/// The error type for viewer operations.
#[derive(Error, Debug)]
pub enum ViewerError {
    /// The template fetch failed: connection error, timeout, or a
    /// non-success status from the asset server.
    #[error("failed to fetch file template from {uri}")]
    TemplateFetch {
        uri: String,
        #[source]
        source: reqwest::Error,
    },

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client")]
    HttpClient {
        #[source]
        source: reqwest::Error,
    },

    /// Joining the asset base URL with the template path did not produce a
    /// valid URL.
    #[error("invalid template URL: cannot join '{path}' onto '{base}'")]
    TemplateUrl {
        base: String,
        path: String,
        #[source]
        source: url::ParseError,
    },

    /// Token substitution over the fetched template failed.
    #[error("failed to render file template")]
    TemplateRender {
        #[source]
        source: tera::Error,
    },

    /// The host page has no container registered under the given id.
    #[error("container element '{id}' not found in host page")]
    ContainerNotFound { id: String },

    /// A configuration file could not be read.
    #[error("failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file could not be parsed.
    #[error("failed to parse config file: {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: Box<toml::de::Error>,
    },
}

impl ViewerError {
    /// An actionable suggestion for resolving this error, when one exists.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::TemplateFetch { .. } => {
                Some("Check that the asset server is running and serves the template path")
            }
            Self::TemplateUrl { .. } => {
                Some("Check the assets base URL and template path in your configuration")
            }
            Self::ContainerNotFound { .. } => {
                Some("Register the container id on the host page before rendering")
            }
            Self::ConfigRead { .. } => Some("Check that the config file exists and is readable"),
            Self::ConfigParse { .. } => Some("Check the TOML syntax of the config file"),
            Self::HttpClient { .. } | Self::TemplateRender { .. } => None,
        }
    }
}

/// Print `error` and its cause chain in the format used by the binary.
///
/// When the chain bottoms out in a [`ViewerError`] with a suggestion, the
/// suggestion is printed after the causes.
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error}", "error:".red().bold());
    for cause in error.chain().skip(1) {
        eprintln!("  {} {cause}", "caused by:".yellow());
    }
    if let Some(viewer_error) = error.downcast_ref::<ViewerError>() {
        if let Some(suggestion) = viewer_error.suggestion() {
            eprintln!("  {} {suggestion}", "suggestion:".cyan());
        }
    }
}
