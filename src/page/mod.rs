//! Host page model.
//!
//! The page owns a set of container elements identified by id. The renderer
//! appends rendered fragments to one of them; it never clears, replaces, or
//! reorders what the host already put there. Appending to an id the host
//! never registered is an error, and no container is mutated in that case.

use dashmap::DashMap;

use crate::core::ViewerError;

/// A host document holding identified container elements.
///
/// Containers accumulate fragments in append order. Registering an id that
/// already exists keeps its children untouched.
#[derive(Debug, Default)]
pub struct HostPage {
    containers: DashMap<String, Vec<String>>,
}

impl HostPage {
    /// Create a page with no containers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page with a single registered container.
    pub fn with_container(id: impl Into<String>) -> Self {
        let page = Self::new();
        page.register_container(id);
        page
    }

    /// Register an empty container under `id`.
    pub fn register_container(&self, id: impl Into<String>) {
        self.containers.entry(id.into()).or_default();
    }

    /// Append `fragment` as the last child of the container `id`.
    pub fn append(&self, id: &str, fragment: impl Into<String>) -> Result<(), ViewerError> {
        let mut container =
            self.containers.get_mut(id).ok_or_else(|| ViewerError::ContainerNotFound {
                id: id.to_string(),
            })?;
        container.push(fragment.into());
        Ok(())
    }

    /// Snapshot of the fragments currently appended to `id`.
    ///
    /// An unregistered id yields an empty snapshot.
    pub fn fragments(&self, id: &str) -> Vec<String> {
        self.containers.get(id).map(|children| children.value().clone()).unwrap_or_default()
    }

    /// Serialize the page as HTML.
    ///
    /// Each container becomes a `<div>` with its id, wrapping its children
    /// in append order. Containers serialize in id order so the output is
    /// stable.
    pub fn to_html(&self) -> String {
        let mut ids: Vec<String> = self.containers.iter().map(|entry| entry.key().clone()).collect();
        ids.sort();

        let mut html = String::new();
        for id in ids {
            if let Some(children) = self.containers.get(&id) {
                html.push_str(&format!("<div id=\"{id}\">\n"));
                for child in children.iter() {
                    html.push_str(child);
                    if !child.ends_with('\n') {
                        html.push('\n');
                    }
                }
                html.push_str("</div>\n");
            }
        }
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_adds_children_in_order() {
        let page = HostPage::with_container("viewerContent");
        page.append("viewerContent", "<p>first</p>").unwrap();
        page.append("viewerContent", "<p>second</p>").unwrap();

        assert_eq!(page.fragments("viewerContent"), vec!["<p>first</p>", "<p>second</p>"]);
    }

    #[test]
    fn append_to_unknown_container_fails_without_mutation() {
        let page = HostPage::with_container("viewerContent");

        let error = page.append("sidebar", "<p>lost</p>").unwrap_err();
        assert!(matches!(error, ViewerError::ContainerNotFound { ref id } if id == "sidebar"));
        assert!(page.fragments("viewerContent").is_empty());
        assert!(page.fragments("sidebar").is_empty());
    }

    #[test]
    fn reregistering_keeps_existing_children() {
        let page = HostPage::with_container("viewerContent");
        page.append("viewerContent", "<p>kept</p>").unwrap();
        page.register_container("viewerContent");

        assert_eq!(page.fragments("viewerContent"), vec!["<p>kept</p>"]);
    }

    #[test]
    fn to_html_wraps_children_in_the_container_div() {
        let page = HostPage::with_container("viewerContent");
        page.append("viewerContent", "<p>child</p>").unwrap();

        let html = page.to_html();
        assert_eq!(html, "<div id=\"viewerContent\">\n<p>child</p>\n</div>\n");
    }

    #[test]
    fn to_html_serializes_containers_in_id_order() {
        let page = HostPage::new();
        page.register_container("zeta");
        page.register_container("alpha");

        let html = page.to_html();
        let alpha = html.find("id=\"alpha\"").unwrap();
        let zeta = html.find("id=\"zeta\"").unwrap();
        assert!(alpha < zeta);
    }
}
