//! Template sources.
//!
//! Fetching the template is the render pipeline's only suspension point, so
//! it sits behind the [`TemplateSource`] trait; tests substitute in-memory
//! doubles for the HTTP implementation.

use std::time::Duration;

use anyhow::Result;
use reqwest::header::ACCEPT;
use tracing::debug;
use url::Url;

use crate::core::ViewerError;

/// Asynchronous provider of the file template's text.
///
/// Implementations fetch once per call; there is no caching and no retry at
/// this seam.
#[allow(async_fn_in_trait)]
pub trait TemplateSource {
    /// Fetch the template text.
    async fn fetch(&self) -> Result<String>;
}

/// Template source backed by the asset server.
///
/// The template URL is resolved eagerly from the asset base URL and the
/// template path, so a misconfigured pair fails at construction rather than
/// mid-render. The request declares `Accept: text/html` and treats any
/// non-success status as a fetch failure.
#[derive(Debug, Clone)]
pub struct HttpTemplateSource {
    client: reqwest::Client,
    template_url: Url,
}

impl HttpTemplateSource {
    /// Build a source for `template_path` on the server at `assets_base_url`.
    pub fn new(
        assets_base_url: &Url,
        template_path: &str,
        timeout: Duration,
    ) -> Result<Self, ViewerError> {
        let template_url =
            assets_base_url.join(template_path).map_err(|source| ViewerError::TemplateUrl {
                base: assets_base_url.to_string(),
                path: template_path.to_string(),
                source,
            })?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|source| ViewerError::HttpClient { source })?;

        Ok(Self { client, template_url })
    }

    /// The fully resolved URL the template is fetched from.
    pub fn template_url(&self) -> &Url {
        &self.template_url
    }

    fn fetch_error(&self, source: reqwest::Error) -> ViewerError {
        ViewerError::TemplateFetch { uri: self.template_url.to_string(), source }
    }
}

impl TemplateSource for HttpTemplateSource {
    async fn fetch(&self) -> Result<String> {
        debug!(url = %self.template_url, "fetching file template");

        let response = self
            .client
            .get(self.template_url.clone())
            .header(ACCEPT, "text/html")
            .send()
            .await
            .map_err(|source| self.fetch_error(source))?
            .error_for_status()
            .map_err(|source| self.fetch_error(source))?;

        let body = response.text().await.map_err(|source| self.fetch_error(source))?;
        debug!(bytes = body.len(), "fetched file template");
        Ok(body)
    }
}
