use leptos::prelude::*;

use crate::config::use_site_config;

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_site_config();

    view! {
      <footer class="footer">
        <ul class="footer-links">
          {config
            .social
            .iter()
            .map(|&(label, url)| {
              view! {
                <li>
                  <a href=url rel="me noopener" target="_blank">
                    {label}
                  </a>
                </li>
              }
            })
            .collect_view()}
        </ul>
        <p class="footer-copyright">"© " {config.year} " " {config.author}</p>
      </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, provide_site_config};

    #[test]
    fn test_footer_renders_config() {
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_site_config(SiteConfig::DEFAULT);
            view! { <Footer /> }.to_html()
        });
        assert!(html.contains("Michael Parkin"));
        assert!(html.contains("2022"));
        assert!(html.contains("https://github.com/MikeParkinWits"));
    }
}
