//! Personal portfolio and blog.
//!
//! A client-side rendered Leptos app: five routed pages built from static
//! content, with per-post head metadata for link previews.

#![recursion_limit = "512"]

pub mod components;
pub mod config;
pub mod content;
pub mod error;
pub mod gallery;
pub mod pages;
pub mod posts;
pub mod routing;
pub mod seo;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{Footer, Navbar};
use crate::config::{SiteConfig, provide_site_config};
use crate::pages::{ArtworkSection, Blog, BlogSection, DesignSection, Home, NotFound};
use crate::seo::SiteMetadata;

pub use crate::error::PostLookupError;

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_site_config(SiteConfig::current());

    view! {
      <SiteMetadata />

      <Router>
        <Navbar />
        <main>
          <Routes fallback=|| view! { <NotFound /> }>
            <Route path=StaticSegment("") view=Home />
            <Route path=StaticSegment("BlogSection") view=BlogSection />
            <Route path=StaticSegment("DesignSection") view=DesignSection />
            <Route path=StaticSegment("ArtworkSection") view=ArtworkSection />
            <Route path=StaticSegment("Blog") view=Blog />
            <Route path=(StaticSegment("Blogs"), ParamSegment("post")) view=Blog />
          </Routes>
        </main>
        <Footer />
      </Router>
    }
}

// The browser router cannot run on the host; these render through the
// server-side location instead.
#[cfg(all(test, not(feature = "csr")))]
mod tests {
    use leptos_router::location::RequestUrl;

    use super::*;
    use crate::posts::POSTS;
    use crate::routing::post_path;

    const NOT_FOUND: &str = "Page not found";

    fn render_at(path: &str) -> String {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(RequestUrl::new(path));
            view! { <App /> }.to_html()
        })
    }

    #[test]
    fn test_section_routes_render() {
        for (path, expected) in [
            ("/", "Read the blog"),
            ("/BlogSection", POSTS[0].title),
            ("/DesignSection", "Portfolio wireframes"),
            ("/ArtworkSection", "City at dusk"),
        ] {
            let html = render_at(path);
            assert!(html.contains(expected), "{path} is missing {expected}");
            assert!(!html.contains(NOT_FOUND), "{path} fell through to the fallback");
        }
    }

    #[test]
    fn test_every_post_route_renders_its_post() {
        for post in POSTS {
            let html = render_at(&post_path(post.number));
            assert!(html.contains(post.title), "post {} missing title", post.number);
            assert!(!html.contains(NOT_FOUND));
        }

        let html = render_at("/Blogs/Blog3.html");
        assert!(html.contains(POSTS[2].title));
    }

    #[test]
    fn test_bad_post_routes_render_not_found() {
        let past_end = post_path(POSTS.len() + 1);
        for path in [
            "/Blog",
            "/Blogs/Blog0",
            past_end.as_str(),
            "/Blogs/BlogX",
        ] {
            let html = render_at(path);
            assert!(html.contains(NOT_FOUND), "{path} did not render not-found");
        }
    }

    #[test]
    fn test_unknown_route_renders_fallback() {
        let html = render_at("/nope");
        assert!(html.contains(NOT_FOUND));
        assert!(html.contains("There is nothing at this address."));
    }
}
