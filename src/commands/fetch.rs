use crate::catalog;
use crate::config;
use crate::github::{self, Client};
use std::path::Path;
use std::process;

/// Collector entry point: enumerate app repositories, fetch each
/// manifest, write the aggregate catalog.
pub fn fetch_metadata() {
    println!("Fetching Streamlit app metadata from GitHub...\n");

    let token = match config::github_token() {
        Some(token) => token,
        None => {
            eprintln!("Error: GH_TOKEN or GITHUB_TOKEN environment variable not set");
            process::exit(1);
        }
    };

    let client = Client::new(token);

    // A listing failure is fatal before anything is written, so a
    // previous data/apps.json survives untouched.
    let repos = match client.list_org_repos() {
        Ok(repos) => repos,
        Err(e) => {
            eprintln!(
                "Failed to list {} repositories: {}",
                config::GITHUB_ORG,
                e
            );
            process::exit(1);
        }
    };

    let candidates: Vec<_> = repos
        .into_iter()
        .filter(|repo| github::is_app_repo(&repo.name))
        .collect();
    println!("Found {} Streamlit app repositories", candidates.len());

    println!("\nFetching metadata files:");
    let mut apps = Vec::new();
    let mut skipped = 0;
    for repo in &candidates {
        match client.fetch_manifest(repo) {
            Ok(record) => {
                println!("  ✓ {}: {}", repo.name, record.manifest.display_name());
                apps.push(record);
            }
            Err(e) => {
                println!("  ✗ {}: {}", repo.name, e);
                skipped += 1;
            }
        }
    }

    if let Err(e) = catalog::save(&apps, Path::new(config::CATALOG_FILE)) {
        eprintln!("Failed to write catalog: {}", e);
        process::exit(1);
    }

    println!(
        "\n✓ Saved metadata for {} apps to {}",
        apps.len(),
        config::CATALOG_FILE
    );
    if skipped > 0 {
        println!("  ({} repositories skipped)", skipped);
    }
}
