//! Post and section headings.

use leptos::prelude::*;

/// A heading with an optional date and word count line underneath.
#[component]
pub fn Titles(
    /// Heading text.
    #[prop(into)]
    title: String,
    /// Render as the page's `<h1>` instead of an `<h2>`.
    #[prop(optional)]
    main: bool,
    /// Publish date, `YYYY-MM-DD`.
    #[prop(optional)]
    date: Option<&'static str>,
    /// Word count.
    #[prop(optional)]
    words: Option<u32>,
) -> impl IntoView {
    let heading = if main {
        view! { <h1 class="title p-name">{title}</h1> }.into_any()
    } else {
        view! { <h2 class="title">{title}</h2> }.into_any()
    };
    let has_subtitle = date.is_some() || words.is_some();

    view! {
      <header class="titles">
        {heading}
        <Show when=move || has_subtitle>
          <p class="subtitle">
            {date.map(|date| view! { <time class="dt-published" datetime=date>{date}</time> })}
            {(date.is_some() && words.is_some()).then_some(" · ")}
            {words.map(|words| view! { <span class="word-count">{words} " words"</span> })}
          </p>
        </Show>
      </header>
    }
}
