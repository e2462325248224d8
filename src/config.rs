use std::env;

pub const GITHUB_ORG: &str = "destaquesgovbr";
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Manifest file every app repository carries at its root.
pub const MANIFEST_FILE: &str = ".streamlit-app.yaml";

/// App repositories are `streamlit-*`, minus the reserved names.
pub const REPO_PREFIX: &str = "streamlit-";
pub const EXCLUDED_REPOS: [&str; 2] = ["streamlit-boilerplate", "streamlit-catalog"];

pub const CATALOG_FILE: &str = "data/apps.json";
pub const SITE_FILE: &str = "index.html";

/// GitHub token from the environment. `GH_TOKEN` wins over `GITHUB_TOKEN`.
pub fn github_token() -> Option<String> {
    env::var("GH_TOKEN").or_else(|_| env::var("GITHUB_TOKEN")).ok()
}
