//! A single blog post, selected by the number at the end of the URL.

use leptos::prelude::*;
use leptos_router::hooks::use_location;
use log::warn;

use crate::components::{BlogButtons, BlogReferences, Titles};
use crate::config::use_site_config;
use crate::content::post_content;
use crate::pages::NotFound;
use crate::posts::{PostRecord, Reference};
use crate::routing::post_from_path;
use crate::seo::{PostHead, PostMetadata};

cfg_if::cfg_if! {
    if #[cfg(target_arch = "wasm32")] {
        fn scroll_to_top() {
            window().scroll_to_with_x_and_y(0.0, 0.0);
        }
    } else {
        fn scroll_to_top() {}
    }
}

/// Blog page for the current location.
///
/// Unknown, zero and out-of-range numbers render [`NotFound`] with the reason.
#[component]
pub fn Blog() -> impl IntoView {
    let pathname = use_location().pathname;
    let resolved = Memo::new(move |_| {
        let path = pathname.get();
        post_from_path(&path).inspect_err(|err| warn!("{path}: {err}"))
    });

    Effect::new(move |_| {
        pathname.track();
        scroll_to_top();
    });

    move || match resolved.get() {
        Ok(post) => view! { <PostPage post=post /> }.into_any(),
        Err(err) => view! { <NotFound message=err.to_string() /> }.into_any(),
    }
}

/// Metadata, article, references and navigation for one post.
#[component]
pub fn PostPage(post: &'static PostRecord) -> impl IntoView {
    let config = use_site_config();
    let head = PostHead::for_post(&config, post);

    let (body, references): (AnyView, &'static [Reference]) = match post_content(post.number) {
        Some(content) => ((content.body)(), content.references),
        None => {
            warn!("post {} has no body", post.number);
            (().into_any(), &[])
        }
    };

    view! {
      <PostMetadata head=head />
      <article class="page-container h-entry fade-in">
        <article>
          <Titles title=post.title main=true date=post.date words=post.words />
          <section class="blog-contents e-content">{body}</section>
        </article>
        <Show when=move || !references.is_empty()>
          <BlogReferences references=references />
        </Show>
        <BlogButtons number=post.number />
      </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posts::POSTS;
    use leptos_meta::provide_meta_context;

    #[test]
    fn test_every_post_page_renders() {
        for post in POSTS {
            let owner = Owner::new();
            let html = owner.with(|| {
                provide_meta_context();
                view! { <PostPage post=post /> }.to_html()
            });
            assert!(html.contains(post.title), "post {} missing title", post.number);
            assert!(html.contains(post.date));
            assert!(html.contains("References"));
        }
    }

    #[test]
    fn test_not_found_renders_reason() {
        let owner = Owner::new();
        let err = post_from_path("/Blogs/Blog0").unwrap_err();
        let html = owner.with(|| {
            provide_meta_context();
            view! { <NotFound message=err.to_string() /> }.to_html()
        });
        assert!(html.contains("Page not found"));
        assert!(html.contains("Post 0 does not exist"));
    }
}
