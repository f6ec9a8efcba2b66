//! Tool identifier → icon fragment resolution.

use profilegen_shared::ToolCatalog;

/// CDN root that catalog path fragments are appended to.
pub const ICON_BASE_URL: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons/";

/// Rendered icon size in pixels (both axes).
const ICON_SIZE: u32 = 40;

/// Render one tool as an inline image, or as inline code when the catalog
/// has no icon for it.
pub fn resolve_icon(tool_id: &str, catalog: &ToolCatalog) -> String {
    match catalog.get(tool_id) {
        Some(path) => format!(
            r#"<img src="{ICON_BASE_URL}{path}" alt="{tool_id}" width="{ICON_SIZE}" height="{ICON_SIZE}"/>"#
        ),
        None => fallback(tool_id),
    }
}

fn fallback(tool_id: &str) -> String {
    format!("`{tool_id}`")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ToolCatalog {
        [
            ("python", "python/python-original.svg"),
            ("rust", "rust/rust-original.svg"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn known_tool_renders_image() {
        let html = resolve_icon("rust", &catalog());
        assert_eq!(
            html,
            r#"<img src="https://cdn.jsdelivr.net/gh/devicons/devicon/icons/rust/rust-original.svg" alt="rust" width="40" height="40"/>"#
        );
    }

    #[test]
    fn every_known_tool_embeds_base_and_path() {
        let catalog = catalog();
        for (id, path) in catalog.iter() {
            let html = resolve_icon(id, &catalog);
            assert!(html.contains(ICON_BASE_URL));
            assert!(html.contains(path));
        }
    }

    #[test]
    fn unknown_tool_falls_back_to_code() {
        assert_eq!(resolve_icon("haskell", &catalog()), "`haskell`");
        assert_eq!(resolve_icon("haskell", &ToolCatalog::default()), "`haskell`");
    }
}
