//! Post cards for the home and blog listing pages.

use leptos::prelude::*;

use crate::posts::PostRecord;
use crate::routing::{post_path, preview_image_path};

/// Featured post card with a large preview image.
#[component]
pub fn BigCard(post: &'static PostRecord) -> impl IntoView {
    view! {
      <article class="big-card h-entry">
        <img class="big-card-image" src=preview_image_path(post.number) alt=post.image_alt />
        <div class="big-card-body">
          <p class="card-label">"Latest blog"</p>
          <h2 class="card-title p-name">{post.title}</h2>
          <p class="card-summary p-summary">{post.summary}</p>
          <a href=post_path(post.number) class="button u-url">
            "Read more"
          </a>
        </div>
      </article>
    }
}

/// Compact card used in the blog listing.
#[component]
pub fn BlogCard(post: &'static PostRecord) -> impl IntoView {
    view! {
      <article class="blog-card h-entry">
        <a href=post_path(post.number) class="blog-card-link u-url">
          <img class="blog-card-image" src=preview_image_path(post.number) alt=post.image_alt loading="lazy" />
          <h3 class="card-title p-name">{post.title}</h3>
        </a>
        <p class="card-meta">
          <time class="dt-published" datetime=post.date>{post.date}</time>
          " · "
          <span class="word-count">{post.words} " words"</span>
          " · "
          {post.reading_minutes()}
          " min read"
        </p>
        <p class="card-summary p-summary">{post.summary}</p>
      </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::posts::POSTS;

    #[test]
    fn test_blog_card_links_to_post() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <BlogCard post=&POSTS[0] /> }.to_html());
        assert!(html.contains("href=\"/Blogs/Blog1\""));
        assert!(html.contains("/assets/PreviewImages/Blog1.svg"));
        assert!(html.contains(POSTS[0].title));
    }

    #[test]
    fn test_blog_card_shows_word_count() {
        let owner = Owner::new();
        let post = &POSTS[1];
        let html = owner.with(|| view! { <BlogCard post=post /> }.to_html());
        assert!(html.contains("class=\"word-count\""));
        assert!(html.contains(&post.words.to_string()));
        assert!(html.contains("min read"));
    }

    #[test]
    fn test_big_card_renders_summary() {
        let owner = Owner::new();
        let post = &POSTS[2];
        let html = owner.with(|| view! { <BigCard post=post /> }.to_html());
        assert!(html.contains("Read more"));
        assert!(html.contains("href=\"/Blogs/Blog3\""));
    }
}
