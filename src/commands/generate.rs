use crate::catalog;
use crate::config;
use crate::site::{self, CatalogView};
use std::fs;
use std::path::Path;
use std::process;

/// Renderer entry point: read the catalog, derive the view, write the
/// static page.
pub fn generate_site() {
    println!("Generating catalog site...\n");

    let apps = match catalog::load(Path::new(config::CATALOG_FILE)) {
        Ok(apps) => apps,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let view = CatalogView::build(apps);
    let generated_at = chrono::Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
    let html = site::render(&view, &generated_at);

    if let Err(e) = fs::write(config::SITE_FILE, &html) {
        eprintln!("Can't write {}: {}", config::SITE_FILE, e);
        process::exit(1);
    }

    println!("✓ Generated {}", config::SITE_FILE);
    println!("  - {} apps", view.apps.len());
    println!("  - {} categories", view.categories.len());
    println!("  - {} total stars", view.total_stars);
}
