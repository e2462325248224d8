use crate::config;
use crate::types::{AppManifest, AppRecord, ContentsResponse, RepoSummary};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;

/// Why a repository contributed no catalog entry this run.
#[derive(Debug)]
pub enum FetchError {
    /// Repository has no manifest file (HTTP 404).
    NotFound,
    /// Any other non-success status from the contents endpoint.
    Status(u16),
    /// Transport, base64 or YAML failure.
    Invalid(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::NotFound => write!(f, "{} not found", config::MANIFEST_FILE),
            FetchError::Status(code) => write!(f, "HTTP error {}", code),
            FetchError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

/// Static allow/deny rule for app repositories.
pub fn is_app_repo(name: &str) -> bool {
    name.starts_with(config::REPO_PREFIX) && !config::EXCLUDED_REPOS.contains(&name)
}

pub struct Client {
    http: reqwest::blocking::Client,
    token: String,
}

impl Client {
    pub fn new(token: String) -> Self {
        let http = reqwest::blocking::Client::builder()
            .user_agent(concat!("streamlit-catalog/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Can't create HTTP client");
        Self { http, token }
    }

    fn get(&self, url: &str) -> reqwest::Result<reqwest::blocking::Response> {
        self.http
            .get(url)
            .header("Authorization", format!("token {}", self.token))
            .header("Accept", "application/vnd.github.v3+json")
            .send()
    }

    /// All public repositories of the organization, in listing order.
    /// Walks pages of 100 until GitHub returns an empty page. Any
    /// failure here is fatal to the run.
    pub fn list_org_repos(&self) -> Result<Vec<RepoSummary>, String> {
        collect_pages(|page| {
            let url = format!(
                "{}/orgs/{}/repos?per_page=100&type=public&page={}",
                config::GITHUB_API_BASE,
                config::GITHUB_ORG,
                page
            );
            let resp = self
                .get(&url)
                .map_err(|e| format!("network error: {}", e))?;
            if !resp.status().is_success() {
                return Err(format!("GitHub API returned status {}", resp.status()));
            }
            resp.json().map_err(|e| format!("bad listing payload: {}", e))
        })
    }

    /// Fetch and parse one repository's manifest, attaching the facts
    /// from its listing entry. Failures are per-repository and never
    /// abort the remaining fetches.
    pub fn fetch_manifest(&self, repo: &RepoSummary) -> Result<AppRecord, FetchError> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}",
            config::GITHUB_API_BASE,
            config::GITHUB_ORG,
            urlencoding::encode(&repo.name),
            config::MANIFEST_FILE
        );

        let resp = self
            .get(&url)
            .map_err(|e| FetchError::Invalid(format!("network error: {}", e)))?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound);
        }
        if !resp.status().is_success() {
            return Err(FetchError::Status(resp.status().as_u16()));
        }

        let envelope: ContentsResponse = resp
            .json()
            .map_err(|e| FetchError::Invalid(format!("bad contents payload: {}", e)))?;
        let manifest = decode_manifest(&envelope.content)?;

        Ok(AppRecord {
            manifest,
            repo_name: repo.name.clone(),
            repo_url: repo.html_url.clone(),
            last_updated: repo.updated_at.clone(),
            stars: repo.stargazers_count,
        })
    }
}

/// Accumulate pages starting at 1 until the first empty one, keeping
/// listing order.
fn collect_pages<F>(mut fetch_page: F) -> Result<Vec<RepoSummary>, String>
where
    F: FnMut(u32) -> Result<Vec<RepoSummary>, String>,
{
    let mut repos = Vec::new();
    let mut page = 1u32;
    loop {
        let page_repos = fetch_page(page)?;
        if page_repos.is_empty() {
            break;
        }
        repos.extend(page_repos);
        page += 1;
    }
    Ok(repos)
}

/// Decode the contents envelope into a manifest. GitHub wraps the
/// base64 payload at 60 columns, so whitespace is stripped first.
pub fn decode_manifest(encoded: &str) -> Result<AppManifest, FetchError> {
    let stripped: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD
        .decode(stripped.as_bytes())
        .map_err(|e| FetchError::Invalid(format!("base64: {}", e)))?;
    let text =
        String::from_utf8(bytes).map_err(|e| FetchError::Invalid(format!("utf-8: {}", e)))?;
    serde_yaml::from_str(&text).map_err(|e| FetchError::Invalid(format!("yaml: {}", e)))
}
