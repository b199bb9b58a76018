//! The file-content renderer.
//!
//! One component, one operation: fetch the file template, resolve the cached
//! graph for the base URI, fill the template with the graph's textual form,
//! and append the finished fragment to the host page's container. The fetch
//! is the only suspension point; everything after it runs straight through.

use std::sync::Arc;

use anyhow::Result;
use tracing::{debug, info};

use crate::graph::GraphCache;
use crate::page::HostPage;
use crate::templating::{self, TemplateSource};

/// Renders the current resource's graph into the host page.
///
/// The renderer reads nothing ambient: the template source, the graph cache,
/// the base URI, and the container id are all supplied at construction, so an
/// embedding host (or a test) controls every collaborator.
///
/// `render` appends exactly one fragment per successful call. Calling it
/// twice appends twice; the renderer does not guard against re-invocation.
pub struct FileContentRenderer<S> {
    source: S,
    cache: Arc<GraphCache>,
    base_uri: String,
    container_id: String,
}

impl<S: TemplateSource> FileContentRenderer<S> {
    /// Create a renderer over its collaborators.
    pub fn new(
        source: S,
        cache: Arc<GraphCache>,
        base_uri: impl Into<String>,
        container_id: impl Into<String>,
    ) -> Self {
        Self {
            source,
            cache,
            base_uri: base_uri.into(),
            container_id: container_id.into(),
        }
    }

    /// Run one render.
    ///
    /// Fetches the template, looks up the graph cached under the base URI,
    /// fills the template (substituting the `Empty File !` placeholder when
    /// the graph is absent or serializes to nothing), and appends the
    /// fragment to the page's container.
    ///
    /// Any failure before the final append leaves the page untouched. A
    /// missing or empty graph is not a failure.
    pub async fn render(&self, page: &HostPage) -> Result<()> {
        info!(base_uri = %self.base_uri, "rendering file view");

        let template = self.source.fetch().await?;

        let graph_text = match self.cache.lookup(&self.base_uri) {
            Some(graph) => graph.to_text(),
            None => {
                debug!(base_uri = %self.base_uri, "no cached graph for base URI");
                String::new()
            }
        };

        let fragment = templating::render_file_content(&template, &graph_text)?;
        page.append(&self.container_id, fragment)?;

        debug!(container = %self.container_id, "appended rendered fragment");
        Ok(())
    }

    /// The base URI this renderer resolves its graph under.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// The id of the container the rendered fragment is appended to.
    pub fn container_id(&self) -> &str {
        &self.container_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ViewerError;
    use crate::graph::StatementGraph;

    struct StaticTemplate(&'static str);

    impl TemplateSource for StaticTemplate {
        async fn fetch(&self) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct UnreachableTemplate;

    impl TemplateSource for UnreachableTemplate {
        async fn fetch(&self) -> Result<String> {
            anyhow::bail!("connection refused")
        }
    }

    fn cache_with(base_uri: &str, statements: &str) -> Arc<GraphCache> {
        let cache = Arc::new(GraphCache::new());
        cache.insert(base_uri, Arc::new(StatementGraph::from_lines(statements)));
        cache
    }

    #[tokio::test]
    async fn renders_graph_text_into_the_container() {
        let cache = cache_with("http://example.org/", "<subject> <p> <o> .");
        let page = HostPage::with_container("viewerContent");
        let renderer = FileContentRenderer::new(
            StaticTemplate("<pre>{{ fileContent }}</pre>"),
            cache,
            "http://example.org/",
            "viewerContent",
        );

        renderer.render(&page).await.unwrap();

        let fragments = page.fragments("viewerContent");
        assert_eq!(fragments, vec!["<pre><subject> <p> <o> .</pre>"]);
    }

    #[tokio::test]
    async fn unknown_container_aborts_without_mutation() {
        let cache = cache_with("http://example.org/", "<s> <p> <o> .");
        let page = HostPage::new();
        let renderer = FileContentRenderer::new(
            StaticTemplate("{{ fileContent }}"),
            cache,
            "http://example.org/",
            "viewerContent",
        );

        let error = renderer.render(&page).await.unwrap_err();
        assert!(matches!(
            error.downcast_ref::<ViewerError>(),
            Some(ViewerError::ContainerNotFound { .. })
        ));
        assert!(page.fragments("viewerContent").is_empty());
    }

    #[tokio::test]
    async fn failed_fetch_leaves_the_page_untouched() {
        let cache = cache_with("http://example.org/", "<s> <p> <o> .");
        let page = HostPage::with_container("viewerContent");
        let renderer = FileContentRenderer::new(
            UnreachableTemplate,
            cache,
            "http://example.org/",
            "viewerContent",
        );

        assert!(renderer.render(&page).await.is_err());
        assert!(page.fragments("viewerContent").is_empty());
    }

    #[test]
    fn accessors_expose_the_wiring() {
        let renderer = FileContentRenderer::new(
            StaticTemplate(""),
            Arc::new(GraphCache::new()),
            "http://example.org/doc",
            "viewerContent",
        );
        assert_eq!(renderer.base_uri(), "http://example.org/doc");
        assert_eq!(renderer.container_id(), "viewerContent");
    }
}
