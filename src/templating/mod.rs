//! Template rendering for the file view.
//!
//! The fetched template is filled by one-off token substitution with a
//! single recognized field, `fileContent`. Auto-escaping is disabled: the
//! graph's textual form goes into the fragment verbatim, the way the
//! original page interpolated it.

pub mod source;

pub use source::{HttpTemplateSource, TemplateSource};

use tera::{Context as TeraContext, Tera};
use tracing::debug;

use crate::constants::EMPTY_FILE_PLACEHOLDER;
use crate::core::ViewerError;

/// The single context field recognized by file templates.
pub const FILE_CONTENT_FIELD: &str = "fileContent";

/// Whether a graph's textual form counts as empty.
///
/// Whitespace-only output is treated the same as no output at all.
pub fn is_empty_graph_text(text: &str) -> bool {
    text.trim().is_empty()
}

/// Fill `template` with the graph's textual form.
///
/// When `graph_text` is empty per [`is_empty_graph_text`], the literal
/// placeholder `Empty File !` is substituted instead. The render context is
/// built fresh per call and discarded afterwards.
pub fn render_file_content(template: &str, graph_text: &str) -> Result<String, ViewerError> {
    let file_content = if is_empty_graph_text(graph_text) {
        debug!("graph text is empty, substituting placeholder");
        EMPTY_FILE_PLACEHOLDER
    } else {
        graph_text
    };

    let mut context = TeraContext::new();
    context.insert(FILE_CONTENT_FIELD, file_content);

    Tera::one_off(template, &context, false)
        .map_err(|source| ViewerError::TemplateRender { source })
}
