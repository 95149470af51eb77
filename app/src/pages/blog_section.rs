use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{BlogCard, HeroPage};
use crate::config::use_site_config;
use crate::posts::POSTS;

/// Listing of every post, newest first.
#[component]
pub fn BlogSection() -> impl IntoView {
    let config = use_site_config();

    view! {
      <Title text=config.page_title("Blogs") />
      <div class="page-container fade-in">
        <HeroPage heading="Blogs" tagline="Writing on the theory and practice of designing for the web." />
        <section class="blog-list">
          {POSTS.iter().rev().map(|post| view! { <BlogCard post=post /> }).collect_view()}
        </section>
      </div>
    }
}
