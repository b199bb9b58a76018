//! ldp-viewer - renders the RDF graph of the current LDP resource into a
//! host HTML page.
//!
//! The crate is built around one component, [`viewer::FileContentRenderer`]:
//! it fetches an HTML template from the asset server, looks up the cached
//! graph for the current document's base URI, fills the template with the
//! graph's textual form (or the `Empty File !` placeholder when there is
//! nothing to show), and appends the rendered fragment to a container
//! element of the host page.
//!
//! # Core Modules
//!
//! - [`viewer`] - the render pipeline (fetch, lookup, fill, append)
//! - [`templating`] - template sources and token substitution
//! - [`graph`] - the graph string-conversion seam, statement graphs, and the
//!   shared graph cache
//! - [`page`] - the host page and its container elements
//!
//! # Supporting Modules
//!
//! - [`config`] - TOML-backed settings with CLI overrides
//! - [`cli`] - the `ldp-viewer` binary surface
//! - [`core`] - crate-wide error types
//! - [`constants`] - placeholder text, default paths, timeouts
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use ldp_viewer::graph::{GraphCache, StatementGraph};
//! use ldp_viewer::page::HostPage;
//! use ldp_viewer::templating::HttpTemplateSource;
//! use ldp_viewer::viewer::FileContentRenderer;
//! use url::Url;
//!
//! # async fn example() -> anyhow::Result<()> {
//! // The host owns the graph cache and the page; the renderer only reads
//! // the one and appends to the other.
//! let cache = Arc::new(GraphCache::new());
//! let mut graph = StatementGraph::new();
//! graph.insert("<http://example.org/doc> <http://purl.org/dc/terms/title> \"doc\" .");
//! cache.insert("http://example.org/doc", Arc::new(graph));
//!
//! let page = HostPage::with_container("viewerContent");
//!
//! let assets_base: Url = "http://127.0.0.1:8080/".parse()?;
//! let source = HttpTemplateSource::new(
//!     &assets_base,
//!     "/assets/ldp/templates/fileTemplate.html",
//!     Duration::from_secs(10),
//! )?;
//!
//! let renderer = FileContentRenderer::new(
//!     source,
//!     cache,
//!     "http://example.org/doc",
//!     "viewerContent",
//! );
//! renderer.render(&page).await?;
//!
//! println!("{}", page.to_html());
//! # Ok(())
//! # }
//! ```

// Core functionality modules
pub mod graph;
pub mod page;
pub mod templating;
pub mod viewer;

// Supporting modules
pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
