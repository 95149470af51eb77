use leptos::prelude::*;
use leptos_meta::Title;

use crate::config::use_site_config;
use crate::routing::HOME;

/// Shown for unknown routes and posts that do not exist.
#[component]
pub fn NotFound(
    /// Why the page could not be shown.
    #[prop(optional, into)]
    message: Option<String>,
) -> impl IntoView {
    let config = use_site_config();

    view! {
      <Title text=config.page_title("Not found") />
      <div class="page-container not-found fade-in">
        <h1>"Page not found"</h1>
        <p>{message.unwrap_or_else(|| "There is nothing at this address.".to_string())}</p>
        <a href=HOME class="button">
          "Back home"
        </a>
      </div>
    }
}
