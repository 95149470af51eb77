use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{Gallery, HeroPage};
use crate::config::use_site_config;
use crate::gallery::DESIGNS;

#[component]
pub fn DesignSection() -> impl IntoView {
    let config = use_site_config();

    view! {
      <Title text=config.page_title("Design") />
      <div class="page-container fade-in">
        <HeroPage heading="Design" tagline="Wireframes, prototypes and style guides." />
        <p class="section-intro">
          "The design process behind this site, from the first sketches of its layout to the style guide it is built on."
        </p>
        <Gallery items=DESIGNS />
      </div>
    }
}
