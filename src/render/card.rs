use crate::model::{Project, ProjectId};
use maud::{html, Markup};

const SWAP_TO_FALLBACK: &str = "this.onerror=null;this.src=this.dataset.fallback";

/// Render one project as a tile: image area, title line, description line.
///
/// Never fails: an empty image gives a placeholder block, and when
/// `fallback_image` is set a failed image load swaps to it once.
pub fn card(key: ProjectId, project: &Project, fallback_image: Option<&str>) -> Markup {
    html! {
        div class="card" data-key=(key.0) {
            div class="bg-white shadow-md rounded-md p-4" {
                @if project.has_image() {
                    img src=(project.image)
                        alt=(project.title)
                        class="w-full h-64 object-cover rounded-md"
                        data-fallback=[fallback_image]
                        onerror=[fallback_image.map(|_| SWAP_TO_FALLBACK)];
                } @else {
                    div class="w-full h-64 rounded-md bg-gray-200 flex items-center justify-center text-gray-400" {
                        "No image"
                    }
                }
                h1 class="text-xl font-semibold mt-2" { (project.title) }
                p class="text-gray-500 mt-2" { (project.description) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_title_description_and_image() {
        let html = card(ProjectId(0), &Project::new("djangoproject"), None).into_string();
        assert!(html.starts_with(r#"<div class="card" data-key="0">"#), "{html}");
        assert!(html.contains(r#"src="https://via.placeholder.com/150""#));
        assert!(html.contains(r#"alt="djangoproject""#));
        assert!(html.contains(">djangoproject</h1>"));
        assert!(html.contains(">A description</p>"));
        assert!(!html.contains("onerror"));
        assert!(!html.contains("data-fallback"));
    }

    #[test]
    fn fallback_is_wired_when_configured() {
        let html = card(
            ProjectId(3),
            &Project::new("web"),
            Some("https://img.example/missing.png"),
        )
        .into_string();
        assert!(html.contains(r#"data-key="3""#));
        assert!(html.contains(r#"data-fallback="https://img.example/missing.png""#));
        assert!(html.contains(SWAP_TO_FALLBACK));
    }

    #[test]
    fn empty_image_renders_placeholder() {
        let html = card(ProjectId(0), &Project::new("web").with_image(""), None).into_string();
        assert!(!html.contains("<img"));
        assert!(html.contains("No image"));
    }

    #[test]
    fn degraded_input_still_renders() {
        let html = card(ProjectId(0), &Project::new("").with_description(""), None).into_string();
        assert!(html.contains("<h1 class=\"text-xl font-semibold mt-2\"></h1>"));
        assert!(html.contains("<p class=\"text-gray-500 mt-2\"></p>"));
    }

    #[test]
    fn escapes_text() {
        let html = card(
            ProjectId(0),
            &Project::new("<script>").with_description("a & \"b\""),
            None,
        )
        .into_string();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("a &amp; &quot;b&quot;"));
    }
}
