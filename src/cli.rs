//! Command-line interface for the viewer.
//!
//! The binary does one thing: run a single render against the configured
//! asset server and print the resulting page HTML to stdout. Flags override
//! the config file field for field; `--graph-file` seeds the graph cache the
//! way the surrounding LDP application would have populated it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use url::Url;

use crate::config::ViewerConfig;
use crate::graph::{GraphCache, StatementGraph};
use crate::page::HostPage;
use crate::templating::HttpTemplateSource;
use crate::viewer::FileContentRenderer;

/// Render the RDF graph of an LDP resource into a host HTML page.
#[derive(Parser, Debug)]
#[command(
    name = "ldp-viewer",
    version,
    about = "Render the RDF graph of an LDP resource into a host HTML page"
)]
pub struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long, env = "LDP_VIEWER_CONFIG")]
    config: Option<PathBuf>,

    /// Base URL of the asset server hosting the file template.
    #[arg(long)]
    assets_url: Option<Url>,

    /// Base URI of the resource whose graph should be rendered.
    #[arg(long)]
    base_uri: Option<String>,

    /// Seed the graph cache for the base URI from this file
    /// (one statement per line).
    #[arg(long)]
    graph_file: Option<PathBuf>,

    /// Id of the container element that receives the rendered fragment.
    #[arg(long)]
    container_id: Option<String>,

    /// Enable debug output.
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Execute one render run.
    pub async fn execute(self) -> Result<()> {
        self.init_logging();

        let mut config = match &self.config {
            Some(path) => ViewerConfig::load(path)?,
            None => ViewerConfig::default(),
        };
        if let Some(assets_url) = self.assets_url {
            config.assets_base_url = assets_url;
        }
        if let Some(base_uri) = self.base_uri {
            config.base_uri = base_uri;
        }
        if let Some(container_id) = self.container_id {
            config.container_id = container_id;
        }

        let cache = Arc::new(GraphCache::new());
        if let Some(path) = &self.graph_file {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read graph file: {}", path.display()))?;
            let graph = StatementGraph::from_lines(&text);
            tracing::debug!(
                statements = graph.len(),
                base_uri = %config.base_uri,
                "seeded graph cache"
            );
            cache.insert(config.base_uri.clone(), Arc::new(graph));
        }

        let page = HostPage::with_container(config.container_id.clone());
        let source = HttpTemplateSource::new(
            &config.assets_base_url,
            &config.template_path,
            config.fetch_timeout(),
        )?;
        let renderer = FileContentRenderer::new(
            source,
            cache,
            config.base_uri.clone(),
            config.container_id.clone(),
        );

        renderer.render(&page).await?;

        println!("{}", page.to_html());
        Ok(())
    }

    fn init_logging(&self) {
        let default_filter = if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        };
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

        // Page HTML goes to stdout; logs must not mix into it.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_parse_into_overrides() {
        let cli = Cli::parse_from([
            "ldp-viewer",
            "--assets-url",
            "http://assets.example.org/",
            "--base-uri",
            "http://example.org/doc",
            "--container-id",
            "main",
        ]);
        assert_eq!(cli.assets_url.as_ref().map(Url::as_str), Some("http://assets.example.org/"));
        assert_eq!(cli.base_uri.as_deref(), Some("http://example.org/doc"));
        assert_eq!(cli.container_id.as_deref(), Some("main"));
        assert!(cli.graph_file.is_none());
    }
}
