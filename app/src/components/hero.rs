use leptos::prelude::*;

/// Full-width page banner.
#[component]
pub fn HeroPage(
    /// Main heading.
    heading: &'static str,
    /// Line under the heading.
    #[prop(optional)]
    tagline: Option<&'static str>,
    /// Calls to action rendered under the tagline.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
      <section class="hero">
        <h1 class="hero-heading">{heading}</h1>
        {tagline.map(|tagline| view! { <p class="hero-tagline">{tagline}</p> })}
        {children.map(|children| view! { <div class="hero-actions">{children()}</div> })}
      </section>
    }
}
