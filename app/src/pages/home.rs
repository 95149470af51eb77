use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::{BigCard, HeroPage};
use crate::config::use_site_config;
use crate::posts::latest;
use crate::routing::{ARTWORK_SECTION, BLOG_SECTION, DESIGN_SECTION};

/// Landing page.
#[component]
pub fn Home() -> impl IntoView {
    let config = use_site_config();

    view! {
      <Title text=config.page_title("") />
      <div class="page-container fade-in">
        <HeroPage heading=config.author tagline=config.tagline>
          <a href=BLOG_SECTION class="button">
            "Read the blog"
          </a>
          <a href=DESIGN_SECTION class="button">
            "Design work"
          </a>
          <a href=ARTWORK_SECTION class="button">
            "Artwork"
          </a>
        </HeroPage>
        {latest().map(|post| view! { <BigCard post=post /> })}
        <section class="about">
          <h2>"About"</h2>
          <p>
            "I am a digital arts student working across interactive media, web design and illustration. This site collects my writing on web design theory alongside the design and art projects I have made along the way."
          </p>
        </section>
      </div>
    }
}
