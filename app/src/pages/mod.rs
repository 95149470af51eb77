//! One component per route.

mod artwork_section;
mod blog;
mod blog_section;
mod design_section;
mod home;
mod not_found;

pub use artwork_section::ArtworkSection;
pub use blog::{Blog, PostPage};
pub use blog_section::BlogSection;
pub use design_section::DesignSection;
pub use home::Home;
pub use not_found::NotFound;

#[cfg(test)]
mod tests {
    use leptos::prelude::*;
    use leptos_meta::provide_meta_context;

    use super::*;
    use crate::gallery::{ARTWORKS, DESIGNS};
    use crate::posts::POSTS;

    fn render<V: IntoView>(page: impl FnOnce() -> V) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_meta_context();
            page().to_html()
        })
    }

    #[test]
    fn test_home_features_latest_post() {
        let html = render(|| view! { <Home /> });
        assert!(html.contains(POSTS[POSTS.len() - 1].title));
        assert!(html.contains("href=\"/BlogSection\""));
    }

    #[test]
    fn test_blog_section_lists_every_post() {
        let html = render(|| view! { <BlogSection /> });
        for post in POSTS {
            assert!(html.contains(post.title), "missing {}", post.title);
        }
        let newest = html.find(POSTS[POSTS.len() - 1].title).unwrap();
        let oldest = html.find(POSTS[0].title).unwrap();
        assert!(newest < oldest);
    }

    #[test]
    fn test_gallery_pages_render_every_piece() {
        let html = render(|| view! { <DesignSection /> });
        for piece in DESIGNS {
            assert!(html.contains(piece.image));
        }

        let html = render(|| view! { <ArtworkSection /> });
        for piece in ARTWORKS {
            assert!(html.contains(piece.image));
        }
    }

    #[test]
    fn test_gallery_pages_have_introduction() {
        assert!(render(|| view! { <DesignSection /> }).contains("class=\"section-intro\""));
        assert!(render(|| view! { <ArtworkSection /> }).contains("class=\"section-intro\""));
    }

    #[test]
    fn test_not_found_default_message() {
        let html = render(|| view! { <NotFound /> });
        assert!(html.contains("There is nothing at this address."));
    }
}
