use leptos::prelude::*;

use crate::posts::neighbours;
use crate::routing::{BLOG_SECTION, post_path};

/// Previous / all / next navigation under a post.
#[component]
pub fn BlogButtons(number: usize) -> impl IntoView {
    let (previous, next) = neighbours(number);

    view! {
      <nav class="blog-buttons" aria-label="Blog navigation">
        {match previous {
          Some(post) => {
            view! {
              <a href=post_path(post.number) class="button" rel="prev">
                "← Previous"
              </a>
            }
              .into_any()
          }
          None => view! { <span class="button disabled">"← Previous"</span> }.into_any(),
        }}
        <a href=BLOG_SECTION class="button">
          "All blogs"
        </a>
        {match next {
          Some(post) => {
            view! {
              <a href=post_path(post.number) class="button" rel="next">
                "Next →"
              </a>
            }
              .into_any()
          }
          None => view! { <span class="button disabled">"Next →"</span> }.into_any(),
        }}
      </nav>
    }
}
