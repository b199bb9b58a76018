//! Global constants used throughout the viewer.
//!
//! Defaults mirror the asset layout of the LDP server the viewer was built
//! against; all of them can be overridden through [`crate::config`].

use std::time::Duration;

/// Text substituted for the `fileContent` field when the current resource's
/// graph is absent or serializes to an empty string.
pub const EMPTY_FILE_PLACEHOLDER: &str = "Empty File !";

/// Default path of the file template on the asset server.
pub const DEFAULT_TEMPLATE_PATH: &str = "/assets/ldp/templates/fileTemplate.html";

/// Default id of the container element that receives rendered fragments.
pub const DEFAULT_CONTAINER_ID: &str = "viewerContent";

/// Default timeout for the template fetch (10 seconds).
///
/// There is no retry; a fetch that exceeds this aborts the render.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);
