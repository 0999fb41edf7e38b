use super::card::card;
use crate::model::Catalog;
use maud::{html, Markup, DOCTYPE};
use tracing::{debug, instrument};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PageOptions {
    pub title: String,
    pub search_placeholder: String,
    pub stylesheet: Option<String>,
    pub fallback_image: Option<String>,
}

impl Default for PageOptions {
    fn default() -> PageOptions {
        PageOptions {
            title: "Dashboard".to_owned(),
            search_placeholder: "Search".to_owned(),
            stylesheet: None,
            fallback_image: None,
        }
    }
}

/// Render the search box and the card grid, one card per project in catalog
/// order. The search box is inert and always present.
#[instrument(skip_all, fields(projects = catalog.len()))]
pub fn render_section(catalog: &Catalog, options: &PageOptions) -> Markup {
    let fallback = options.fallback_image.as_deref();
    let section = html! {
        div class="p-4" {
            section id="main" class="max-w-7xl mx-auto" {
                input type="text"
                    id="search"
                    placeholder=(options.search_placeholder)
                    class="w-full p-2 border border-gray-300 rounded-md";
                div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4" {
                    @for (key, project) in catalog.iter() {
                        (card(key, project, fallback))
                    }
                }
            }
        }
    };
    debug!("dashboard section rendered");
    section
}

/// Render a complete HTML document around [`render_section`].
pub fn render_page(catalog: &Catalog, options: &PageOptions) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (options.title) }
                @if let Some(stylesheet) = &options.stylesheet {
                    @if stylesheet.ends_with(".css") {
                        link rel="stylesheet" href=(stylesheet);
                    } @else {
                        script src=(stylesheet) {}
                    }
                }
            }
            body {
                (render_section(catalog, options))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Project;

    fn count_cards(html: &str) -> usize {
        html.matches(r#"<div class="card""#).count()
    }

    fn keys(html: &str) -> Vec<String> {
        html.split(r#"data-key=""#)
            .skip(1)
            .map(|s| s.split('"').next().unwrap_or_default().to_owned())
            .collect()
    }

    fn titles(html: &str) -> Vec<String> {
        html.split(r#"<h1 class="text-xl font-semibold mt-2">"#)
            .skip(1)
            .map(|s| s.split("</h1>").next().unwrap_or_default().to_owned())
            .collect()
    }

    #[test]
    fn builtin_catalog_renders_one_card() {
        let html = render_section(&Catalog::builtin(), &PageOptions::default()).into_string();
        assert_eq!(count_cards(&html), 1);
        assert_eq!(titles(&html), vec!["djangoproject"]);
        assert!(html.contains(">A description</p>"));
        assert!(html.contains(r#"src="https://via.placeholder.com/150""#));
    }

    #[test]
    fn empty_catalog_renders_empty_grid() {
        let html = render_section(&Catalog::default(), &PageOptions::default()).into_string();
        assert_eq!(count_cards(&html), 0);
        assert!(html.contains(
            r#"<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4"></div>"#
        ));
    }

    #[test]
    fn cards_follow_catalog_order() {
        let names = ["zeta", "alpha", "mid", "beta"];
        let catalog = Catalog::new(names.iter().map(|&n| Project::new(n)).collect()).unwrap();
        let html = render_section(&catalog, &PageOptions::default()).into_string();
        assert_eq!(count_cards(&html), names.len());
        assert_eq!(titles(&html), names);
        assert_eq!(keys(&html), vec!["0", "1", "2", "3"]);
    }

    #[test]
    fn rendering_is_idempotent() {
        let catalog = Catalog::new(vec![Project::new("a"), Project::new("b")]).unwrap();
        let options = PageOptions {
            fallback_image: Some("https://img.example/none.png".to_owned()),
            ..PageOptions::default()
        };
        let first = render_page(&catalog, &options).into_string();
        let second = render_page(&catalog, &options).into_string();
        assert_eq!(first, second);
    }

    #[test]
    fn search_box_is_always_present() {
        let search = r#"<input type="text" id="search" placeholder="Search""#;
        for catalog in [
            Catalog::default(),
            Catalog::builtin(),
            Catalog::new(vec![Project::new("a"), Project::new("b").with_image("")]).unwrap(),
        ] {
            let html = render_section(&catalog, &PageOptions::default()).into_string();
            assert_eq!(html.matches(search).count(), 1, "{html}");
            assert!(html.find(search) < html.find("grid-cols-1"));
        }
    }

    #[test]
    fn page_wraps_section() {
        let options = PageOptions {
            title: "Projects & more".to_owned(),
            stylesheet: Some("https://cdn.tailwindcss.com".to_owned()),
            ..PageOptions::default()
        };
        let html = render_page(&Catalog::builtin(), &options).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Projects &amp; more</title>"));
        assert!(html.contains(r#"<script src="https://cdn.tailwindcss.com"></script>"#));
        assert!(html.contains(r#"<section id="main" class="max-w-7xl mx-auto">"#));
        assert_eq!(count_cards(&html), 1);
    }

    #[test]
    fn css_stylesheet_is_linked() {
        let options = PageOptions {
            stylesheet: Some("/static/site.css".to_owned()),
            ..PageOptions::default()
        };
        let html = render_page(&Catalog::builtin(), &options).into_string();
        assert!(html.contains(r#"<link rel="stylesheet" href="/static/site.css">"#));
        assert!(!html.contains("<script"));
    }
}
