//! Devicon catalog JSON → [`ToolCatalog`].
//!
//! The upstream file is an array of objects; only `name` matters here.
//! Every icon is assumed to ship an `<name>/<name>-original.svg` variant.

use serde::Deserialize;

use profilegen_shared::{ProfileGenError, Result, ToolCatalog};

#[derive(Debug, Deserialize)]
struct DeviconItem {
    #[serde(default)]
    name: Option<String>,
}

/// Build a catalog from the raw Devicon JSON body.
pub fn parse_devicon_json(body: &str) -> Result<ToolCatalog> {
    let items: Vec<DeviconItem> = serde_json::from_str(body)
        .map_err(|e| ProfileGenError::parse(format!("invalid devicon.json: {e}")))?;

    Ok(items
        .into_iter()
        .filter_map(|item| item.name)
        .map(|name| name.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .map(|name| {
            let path = format!("{name}/{name}-original.svg");
            (name, path)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_names_to_original_svg() {
        let body = r#"[
            {"name": "python", "tags": ["language"], "versions": {"svg": ["original"]}},
            {"name": "Rust", "altnames": []},
            {"tags": ["no-name"]},
            {"name": "  "}
        ]"#;

        let catalog = parse_devicon_json(body).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("python"), Some("python/python-original.svg"));
        assert_eq!(catalog.get("rust"), Some("rust/rust-original.svg"));
    }

    #[test]
    fn rejects_non_array() {
        let err = parse_devicon_json(r#"{"name": "python"}"#).unwrap_err();
        assert!(matches!(err, ProfileGenError::Parse { .. }));
    }
}
