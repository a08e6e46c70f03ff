use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Icon shown when a catalog row or persisted entry carries none.
pub const PLACEHOLDER_ICON: &str = "icons/tool-generic.svg";
/// Destination used when a catalog row or persisted entry carries none.
pub const PLACEHOLDER_URL: &str = "#";

/// A named link with an icon, as offered by the catalog.
///
/// Immutable once constructed. The engine only changes a tool's membership
/// and position in the selection, never its fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default = "placeholder_icon")]
    pub icon: String,
    #[serde(default = "placeholder_url")]
    pub url: String,
}

fn placeholder_icon() -> String {
    PLACEHOLDER_ICON.to_string()
}

fn placeholder_url() -> String {
    PLACEHOLDER_URL.to_string()
}

impl Tool {
    /// Build a tool with placeholder icon and url.
    pub fn new(id: String, title: String) -> Self {
        Self {
            id,
            title,
            icon: placeholder_icon(),
            url: placeholder_url(),
        }
    }

    /// Normalize a raw catalog row into a tool.
    ///
    /// The id may arrive as a JSON number and is normalized to a string.
    /// A missing title falls back to the id; missing icon/url fall back to
    /// the placeholders. Rows without any id yield `None`.
    pub fn from_row(row: &Value) -> Option<Self> {
        let id = match row.get("id") {
            Some(Value::String(id)) => id.clone(),
            Some(Value::Number(id)) => id.to_string(),
            _ => return None,
        };
        let title = row
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or(id.as_str())
            .to_string();
        let icon = row
            .get("icon")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(placeholder_icon);
        let url = row
            .get("url")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(placeholder_url);
        Some(Self {
            id,
            title,
            icon,
            url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_row_normalizes_numeric_id() {
        let tool = Tool::from_row(&json!({ "id": 42, "title": "Workday" })).expect("tool");
        assert_eq!(tool.id, "42");
        assert_eq!(tool.title, "Workday");
    }

    #[test]
    fn from_row_substitutes_placeholders() {
        let tool = Tool::from_row(&json!({ "id": "wd" })).expect("tool");
        assert_eq!(tool.title, "wd");
        assert_eq!(tool.icon, PLACEHOLDER_ICON);
        assert_eq!(tool.url, PLACEHOLDER_URL);
    }

    #[test]
    fn from_row_without_id_is_skipped() {
        assert!(Tool::from_row(&json!({ "title": "No Id" })).is_none());
        assert!(Tool::from_row(&json!({ "id": null })).is_none());
    }

    #[test]
    fn persisted_entry_tolerates_unknown_and_missing_fields() {
        let tool: Tool = serde_json::from_value(json!({
            "id": "wd",
            "title": "Workday",
            "sort_hint": 3,
        }))
        .expect("deserialize");
        assert_eq!(tool.id, "wd");
        assert_eq!(tool.icon, PLACEHOLDER_ICON);
        assert_eq!(tool.url, PLACEHOLDER_URL);
    }
}
