//! Site navigation bar with a collapsible menu for small screens.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::config::use_site_config;
use crate::routing::{HOME, NAV_ITEMS, is_active};

#[component]
pub fn Navbar() -> impl IntoView {
    let config = use_site_config();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    let toggle = move |_| menu_open.update(|open| *open = !*open);
    let close = move |_| menu_open.set(false);

    view! {
      <header class="navbar">
        <a href=HOME class="navbar-brand" on:click=close>
          {config.title}
        </a>
        <button
          class="navbar-toggle"
          aria-label="Toggle navigation"
          aria-expanded=move || menu_open.get().to_string()
          on:click=toggle
        >
          {move || if menu_open.get() { "✕" } else { "☰" }}
        </button>
        <nav class="navbar-links" class:open=move || menu_open.get() aria-label="Main navigation">
          <ul>
            {NAV_ITEMS
              .iter()
              .map(move |&(label, path)| {
                let active = Memo::new(move |_| is_active(path, &pathname.get()));
                view! {
                  <li class="navbar-item" class:active=active>
                    <a
                      href=path
                      on:click=close
                      aria-current=move || active.get().then_some("page")
                    >
                      {label}
                    </a>
                  </li>
                }
              })
              .collect_view()}
          </ul>
        </nav>
      </header>
    }
}
