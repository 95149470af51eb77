use leptos::prelude::*;

use crate::posts::Reference;

/// Bibliography at the end of a post.
#[component]
pub fn BlogReferences(references: &'static [Reference]) -> impl IntoView {
    view! {
      <section class="blog-references">
        <h2>"References"</h2>
        <ul>
          {references
            .iter()
            .map(|reference| {
              view! {
                <li>{reference.author} <cite>{reference.title}</cite> {reference.source}</li>
              }
            })
            .collect_view()}
        </ul>
      </section>
    }
}
