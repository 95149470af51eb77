use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{Gallery, HeroPage};
use crate::config::use_site_config;
use crate::gallery::ARTWORKS;

#[component]
pub fn ArtworkSection() -> impl IntoView {
    let config = use_site_config();

    view! {
      <Title text=config.page_title("Artwork") />
      <div class="page-container fade-in">
        <HeroPage heading="Artwork" tagline="Digital painting, illustration and generative pieces." />
        <p class="section-intro">
          "Personal pieces made alongside my design work, from painted scenes to illustrations drawn in code."
        </p>
        <Gallery items=ARTWORKS />
      </div>
    }
}
