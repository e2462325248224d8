use crate::types::AppRecord;
use std::collections::BTreeSet;

const TEMPLATE: &str = include_str!("../templates/index.html");

/// Everything the page needs, derived fresh from the catalog on every
/// run. Never persisted.
pub struct CatalogView {
    pub apps: Vec<AppRecord>,
    pub categories: Vec<String>,
    pub total_stars: u64,
}

impl CatalogView {
    pub fn build(mut apps: Vec<AppRecord>) -> Self {
        apps.sort_by_cached_key(|app| app.manifest.sort_name());

        let categories: BTreeSet<String> = apps
            .iter()
            .map(|app| app.manifest.category_or_default().to_string())
            .collect();
        let total_stars = apps.iter().map(|app| u64::from(app.stars)).sum();

        Self {
            apps,
            categories: categories.into_iter().collect(),
            total_stars,
        }
    }
}

/// Substitute the view into the page template. `generated_at` comes
/// from the caller, so repeat runs over the same catalog are identical
/// apart from the timestamp.
pub fn render(view: &CatalogView, generated_at: &str) -> String {
    let mut cards = String::new();
    for app in &view.apps {
        cards.push_str(&render_card(app));
    }

    let categories_json = serde_json::to_string(&view.categories)
        .expect("category list serializes")
        // keep `</script>` out of the inline script block
        .replace('<', "\\u003c");

    TEMPLATE
        .replace("{{app_count}}", &view.apps.len().to_string())
        .replace("{{category_count}}", &view.categories.len().to_string())
        .replace("{{total_stars}}", &view.total_stars.to_string())
        .replace("{{cards}}", &cards)
        .replace("{{categories_json}}", &categories_json)
        .replace("{{generated_at}}", &escape(generated_at))
}

fn render_card(app: &AppRecord) -> String {
    let m = &app.manifest;

    let mut tag_pills = String::new();
    if !m.tag_list().is_empty() {
        tag_pills.push_str("                <div class=\"app-tags\">\n");
        for tag in m.tag_list() {
            tag_pills.push_str(&format!(
                "                    <span class=\"tag\">{}</span>\n",
                escape(tag)
            ));
        }
        tag_pills.push_str("                </div>\n");
    }

    format!(
        r#"            <div class="app-card" data-category="{category}" data-tags="{tags}" data-keywords="{keywords}">
                <div class="app-header">
                    <div class="app-icon">{icon}</div>
                    <div class="app-title">
                        <h3>{name}</h3>
                        <div class="version">v{version}</div>
                    </div>
                </div>

                <div class="app-description">
                    {description}
                </div>

                <div class="app-meta">
                    <span class="category-badge">{category}</span>
                    <span>⭐ {stars}</span>
                    <span>👤 {owner}</span>
                </div>

{tag_pills}                <div class="app-footer">
                    <a href="{repo_url}" class="btn btn-secondary" target="_blank">Código</a>
                    <a href="{documentation}" class="btn btn-primary" target="_blank">Abrir App</a>
                </div>
            </div>
"#,
        category = escape(m.category_or_default()),
        tags = escape(&m.tag_list().join(",")),
        keywords = escape(m.keywords_or_empty()),
        icon = escape(m.icon.as_deref().unwrap_or("")),
        name = escape(m.display_name()),
        version = escape(m.version.as_deref().unwrap_or("")),
        description = escape(m.description.as_deref().unwrap_or("")),
        stars = app.stars,
        owner = escape(m.owner_name()),
        tag_pills = tag_pills,
        repo_url = escape(&app.repo_url),
        documentation = escape(m.documentation.as_deref().unwrap_or("")),
    )
}

/// Minimal HTML escaping for text and attribute positions.
fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AppManifest, AppRecord};

    fn record(name: Option<&str>, category: Option<&str>, stars: u32) -> AppRecord {
        AppRecord {
            manifest: AppManifest {
                name: name.map(String::from),
                category: category.map(String::from),
                ..AppManifest::default()
            },
            repo_name: "streamlit-test".to_string(),
            repo_url: "https://github.com/destaquesgovbr/streamlit-test".to_string(),
            last_updated: "2025-06-01T12:00:00Z".to_string(),
            stars,
        }
    }

    #[test]
    fn test_missing_category_counts_as_other() {
        let view = CatalogView::build(vec![
            record(Some("a"), Some("finance"), 0),
            record(Some("b"), None, 0),
            record(Some("c"), Some("finance"), 0),
        ]);
        assert_eq!(view.categories, ["finance", "other"]);
    }

    #[test]
    fn test_sort_is_case_insensitive_and_stable() {
        let mut second_alpha = record(Some("alpha"), None, 0);
        second_alpha.repo_name = "streamlit-second".to_string();

        let view = CatalogView::build(vec![
            record(Some("Beta"), None, 0),
            record(Some("alpha"), None, 0),
            second_alpha,
        ]);

        let names: Vec<&str> = view
            .apps
            .iter()
            .map(|a| a.manifest.display_name())
            .collect();
        assert_eq!(names, ["alpha", "alpha", "Beta"]);
        assert_eq!(view.apps[0].repo_name, "streamlit-test");
        assert_eq!(view.apps[1].repo_name, "streamlit-second");
    }

    #[test]
    fn test_total_stars_sums_across_records() {
        let view = CatalogView::build(vec![
            record(Some("a"), None, 5),
            record(Some("b"), None, 0),
            record(Some("c"), None, 3),
        ]);
        assert_eq!(view.total_stars, 8);
    }

    #[test]
    fn test_render_exposes_filter_attributes() {
        let mut rec = record(Some("Painel"), Some("finance"), 1);
        rec.manifest.tags = Some(vec!["dados".to_string(), "precos".to_string()]);
        rec.manifest.keywords = Some("orçamento federal".to_string());

        let html = render(&CatalogView::build(vec![rec]), "2025-06-01 12:00 UTC");
        assert!(html.contains(r#"data-category="finance""#));
        assert!(html.contains(r#"data-tags="dados,precos""#));
        assert!(html.contains(r#"data-keywords="orçamento federal""#));
        assert!(html.contains(r#"<span class="tag">dados</span>"#));
    }

    #[test]
    fn test_render_escapes_manifest_html() {
        let mut rec = record(Some("<script>alert(1)</script>"), None, 0);
        rec.manifest.description = Some(r#"a "quoted" & <b>bold</b> claim"#.to_string());

        let html = render(&CatalogView::build(vec![rec]), "2025-06-01 12:00 UTC");
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("a &quot;quoted&quot; &amp; &lt;b&gt;bold&lt;/b&gt; claim"));
    }

    #[test]
    fn test_render_empty_catalog() {
        let html = render(&CatalogView::build(vec![]), "2025-06-01 12:00 UTC");
        assert!(html.contains(r#"id="noResults""#));
        assert!(html.contains("const categories = [];"));
        assert!(!html.contains(r#"<div class="app-card""#));
    }

    #[test]
    fn test_render_is_deterministic_for_fixed_timestamp() {
        let apps = vec![record(Some("a"), Some("finance"), 2)];
        let view = CatalogView::build(apps);
        let first = render(&view, "2025-06-01 12:00 UTC");
        let second = render(&view, "2025-06-01 12:00 UTC");
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_embeds_timestamp_and_stats() {
        let view = CatalogView::build(vec![
            record(Some("a"), Some("finance"), 2),
            record(Some("b"), Some("health"), 4),
        ]);
        let html = render(&view, "2025-06-01 12:00 UTC");
        assert!(html.contains("Atualizado em 2025-06-01 12:00 UTC"));
        assert!(html.contains(r#"const categories = ["finance","health"];"#));
    }
}
