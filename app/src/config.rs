//! Site-wide configuration.
//!
//! The bundle runs in the browser and has no filesystem to read a config file
//! from, so values are fixed at build time. `PORTFOLIO_BASE_URL` and
//! `PORTFOLIO_AUTHOR` override the defaults when set during compilation.

use leptos::prelude::*;

/// Configuration shared by every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    /// Site title, used as the suffix of every document title.
    pub title: &'static str,

    /// Author name for the footer, head metadata and structured data.
    pub author: &'static str,

    /// One-line description shown on the home page and in head metadata.
    pub tagline: &'static str,

    /// Absolute URL the bundle is published under, without trailing slash.
    pub base_url: &'static str,

    /// `article:section` and `article:tag` value for blog posts.
    pub section: &'static str,

    /// Copyright year.
    pub year: u16,

    /// Social links shown in the footer, as `(label, url)`.
    pub social: &'static [(&'static str, &'static str)],
}

impl SiteConfig {
    /// Built-in configuration.
    pub const DEFAULT: Self = Self {
        title: "Michael Parkin",
        author: "Michael Parkin",
        tagline: "Interactive media, web design theory and digital artwork.",
        base_url: "https://mikeparkinwits.github.io/wsoa4175a_1894979",
        section: "Theory",
        year: 2022,
        social: &[
            ("GitHub", "https://github.com/MikeParkinWits"),
            ("LinkedIn", "https://www.linkedin.com/in/michael-parkin"),
            ("Email", "mailto:1894979@students.wits.ac.za"),
        ],
    };

    /// Configuration with build-time overrides applied.
    pub fn current() -> Self {
        Self {
            base_url: option_env!("PORTFOLIO_BASE_URL").unwrap_or(Self::DEFAULT.base_url),
            author: option_env!("PORTFOLIO_AUTHOR").unwrap_or(Self::DEFAULT.author),
            ..Self::DEFAULT
        }
    }

    /// Document title for a page, e.g. `"Blogs | Michael Parkin"`.
    pub fn page_title(&self, page: &str) -> String {
        if page.is_empty() {
            self.title.to_string()
        } else {
            format!("{page} | {}", self.title)
        }
    }

    /// Joins a site-relative path onto the base URL.
    pub fn absolute(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::current()
    }
}

/// Makes `config` available to every component below the caller.
pub fn provide_site_config(config: SiteConfig) {
    provide_context(config);
}

/// Site configuration from context, falling back to [`SiteConfig::current`].
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_else(SiteConfig::current)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_title() {
        let config = SiteConfig::DEFAULT;
        assert_eq!(config.page_title("Blogs"), "Blogs | Michael Parkin");
        assert_eq!(config.page_title(""), "Michael Parkin");
    }

    #[test]
    fn test_absolute_joins_single_slash() {
        let config = SiteConfig {
            base_url: "https://example.com/site/",
            ..SiteConfig::DEFAULT
        };
        assert_eq!(
            config.absolute("/Blogs/Blog1.html"),
            "https://example.com/site/Blogs/Blog1.html"
        );
        assert_eq!(config.absolute("feed.xml"), "https://example.com/site/feed.xml");
    }

    #[test]
    fn test_current_keeps_defaults_for_other_fields() {
        let config = SiteConfig::current();
        assert_eq!(config.title, SiteConfig::DEFAULT.title);
        assert_eq!(config.section, "Theory");
        assert!(!config.social.is_empty());
    }

    #[test]
    fn test_use_site_config_without_context() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(use_site_config(), SiteConfig::current());
        });
    }

    #[test]
    fn test_use_site_config_from_context() {
        let owner = Owner::new();
        owner.with(|| {
            let custom = SiteConfig {
                title: "Custom",
                ..SiteConfig::DEFAULT
            };
            provide_site_config(custom);
            assert_eq!(use_site_config().title, "Custom");
        });
    }
}
