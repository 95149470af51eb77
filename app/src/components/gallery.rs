use leptos::prelude::*;

use crate::gallery::Artwork;

#[component]
pub fn Gallery(items: &'static [Artwork]) -> impl IntoView {
    view! {
      <section class="gallery">
        {items
          .iter()
          .map(|piece| {
            view! {
              <figure class="gallery-item">
                <img src=piece.image alt=piece.alt loading="lazy" />
                <figcaption>
                  <strong>{piece.title}</strong>
                  " "
                  {piece.caption}
                </figcaption>
              </figure>
            }
          })
          .collect_view()}
      </section>
    }
}
