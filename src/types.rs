use serde::{Deserialize, Serialize};

/// One entry from the org repository listing. Only the fields the
/// catalog needs survive deserialization.
#[derive(Deserialize, Debug, Clone)]
pub struct RepoSummary {
    pub name: String,
    pub html_url: String,
    pub updated_at: String,
    pub stargazers_count: u32,
}

/// Envelope returned by the GitHub contents endpoint.
#[derive(Deserialize, Debug)]
pub struct ContentsResponse {
    pub content: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AppOwner {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Parsed `.streamlit-app.yaml`. Every field is optional; manifest
/// authors get defaults at render time, not parse failures.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct AppManifest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<AppOwner>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

impl AppManifest {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Unknown")
    }

    /// Lowercased name, empty when absent. Keeps catalog ordering
    /// stable for unnamed manifests.
    pub fn sort_name(&self) -> String {
        self.name.as_deref().unwrap_or("").to_lowercase()
    }

    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or("other")
    }

    pub fn tag_list(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    pub fn keywords_or_empty(&self) -> &str {
        self.keywords.as_deref().unwrap_or("")
    }

    pub fn owner_name(&self) -> &str {
        self.owner
            .as_ref()
            .and_then(|o| o.name.as_deref())
            .unwrap_or("")
    }
}

/// One catalog entry: a manifest plus facts copied from the repository
/// listing. The manifest is flattened on the wire, so the persisted JSON
/// stays a single flat object; the underscore names are a reserved
/// namespace manifest authors must not use.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppRecord {
    #[serde(flatten)]
    pub manifest: AppManifest,
    #[serde(rename = "_repo_name")]
    pub repo_name: String,
    #[serde(rename = "_repo_url")]
    pub repo_url: String,
    #[serde(rename = "_last_updated", default)]
    pub last_updated: String,
    #[serde(rename = "_stars", default)]
    pub stars: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_missing_fields_get_defaults() {
        let m: AppManifest = serde_yaml::from_str("name: Painel X").unwrap();
        assert_eq!(m.display_name(), "Painel X");
        assert_eq!(m.category_or_default(), "other");
        assert!(m.tag_list().is_empty());
        assert_eq!(m.keywords_or_empty(), "");
        assert_eq!(m.owner_name(), "");
    }

    #[test]
    fn test_manifest_unknown_keys_ignored() {
        let m: AppManifest =
            serde_yaml::from_str("name: X\nextra_field: whatever\nowner:\n  name: DGB").unwrap();
        assert_eq!(m.owner_name(), "DGB");
    }

    #[test]
    fn test_record_serializes_flat() {
        let record = AppRecord {
            manifest: AppManifest {
                name: Some("App".into()),
                ..AppManifest::default()
            },
            repo_name: "streamlit-app".into(),
            repo_url: "https://github.com/destaquesgovbr/streamlit-app".into(),
            last_updated: "2025-06-01T12:00:00Z".into(),
            stars: 7,
        };
        let json: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&record).unwrap()).unwrap();
        assert_eq!(json["name"], "App");
        assert_eq!(json["_repo_name"], "streamlit-app");
        assert_eq!(json["_stars"], 7);
        assert!(json.get("manifest").is_none());
        assert!(json.get("category").is_none());
    }

    #[test]
    fn test_record_missing_stars_reads_as_zero() {
        let record: AppRecord = serde_json::from_str(
            r#"{"name": "App", "_repo_name": "streamlit-app", "_repo_url": "u"}"#,
        )
        .unwrap();
        assert_eq!(record.stars, 0);
        assert_eq!(record.last_updated, "");
    }
}
