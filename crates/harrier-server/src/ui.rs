//! Embedded browser UI.

/// Dashboard page, embedded at compile time.
const INDEX_HTML: &str = include_str!("../assets/index.html");

/// Render the dashboard page with the external path prefix filled in.
///
/// The page fetches its tables from `{prefix}/api/...`, so behind a
/// path-rewriting proxy the prefix keeps requests routable.
pub fn render_index(root_path: &str) -> String {
    INDEX_HTML.replace("__ROOT_PATH__", root_path)
}
