//! Document head metadata for link previews and search engines.

use leptos::prelude::*;
use leptos_meta::{Meta, Script, Title};
use log::error;
use serde::Serialize;

use crate::config::SiteConfig;
use crate::posts::PostRecord;
use crate::routing::{post_path, preview_image_path};

/// A single `<meta>` tag. `name` is emitted alongside `property` when set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub name: Option<&'static str>,
    pub property: &'static str,
    pub content: String,
}

impl MetaTag {
    fn property(property: &'static str, content: impl Into<String>) -> Self {
        Self {
            name: None,
            property,
            content: content.into(),
        }
    }

    fn named(name: &'static str, property: &'static str, content: impl Into<String>) -> Self {
        Self {
            name: Some(name),
            property,
            content: content.into(),
        }
    }
}

/// schema.org `Person`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonSchema {
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
}

/// schema.org `Article`, serialized as JSON-LD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleSchema {
    #[serde(rename = "@context")]
    pub context: String,
    #[serde(rename = "@type")]
    pub kind: String,
    pub name: String,
    pub author: PersonSchema,
    pub url: String,
    pub headline: String,
    pub image: Vec<String>,
    pub date_published: String,
}

impl ArticleSchema {
    /// JSON text safe to place inside a `<script>` element.
    pub fn to_json_ld(&self) -> serde_json::Result<String> {
        Ok(serde_json::to_string(self)?.replace("</", "<\\/"))
    }
}

/// Everything a blog page puts in the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostHead {
    pub title: String,
    pub url: String,
    pub image: String,
    pub tags: Vec<MetaTag>,
    pub schema: ArticleSchema,
}

impl PostHead {
    /// Builds the head metadata of `post`.
    pub fn for_post(config: &SiteConfig, post: &PostRecord) -> Self {
        let url = config.absolute(&format!("{}.html", post_path(post.number)));
        let image = config.absolute(&preview_image_path(post.number));

        let tags = vec![
            MetaTag::named("title", "og:title", post.title),
            MetaTag::property("og:type", "article"),
            MetaTag::named("author", "article:publisher", config.author),
            MetaTag::property("article:section", config.section),
            MetaTag::property("article:tag", config.section),
            MetaTag::property("og:url", url.clone()),
            MetaTag::property("og:image", image.clone()),
            MetaTag::property("og:image:alt", post.image_alt),
            MetaTag::named("description", "og:description", post.summary),
            MetaTag::property("article:published_time", post.date),
        ];

        let schema = ArticleSchema {
            context: "https://schema.org".to_string(),
            kind: "Article".to_string(),
            name: post.title.to_string(),
            author: PersonSchema {
                kind: "Person".to_string(),
                name: config.author.to_string(),
            },
            url: url.clone(),
            headline: post.title.to_string(),
            image: vec![image.clone()],
            date_published: post.date.to_string(),
        };

        Self {
            title: post.title.to_string(),
            url,
            image,
            tags,
            schema,
        }
    }

    /// Content of the tag with the given `property`, if present.
    pub fn tag(&self, property: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.property == property)
            .map(|tag| tag.content.as_str())
    }
}

/// Emits the title, `<meta>` tags and JSON-LD block of a blog page.
#[component]
pub fn PostMetadata(head: PostHead) -> impl IntoView {
    let json_ld = match head.schema.to_json_ld() {
        Ok(json) => Some(json),
        Err(err) => {
            error!("failed to serialize structured data for {}: {err}", head.url);
            None
        }
    };

    view! {
      <Title text=head.title />
      {head.tags.into_iter().map(meta_tag).collect_view()}
      {json_ld.map(|json| view! { <Script type_="application/ld+json">{json}</Script> })}
    }
}

/// Site-wide defaults, overridden per page where a page sets its own.
#[component]
pub fn SiteMetadata() -> impl IntoView {
    let config = crate::config::use_site_config();

    view! {
      <Meta name="description" content=config.tagline />
      <Meta property="og:site_name" content=config.title />
      <Meta property="og:locale" content="en_ZA" />
    }
}

fn meta_tag(tag: MetaTag) -> AnyView {
    match tag.name {
        Some(name) => {
            view! { <Meta name=name property=tag.property content=tag.content /> }.into_any()
        }
        None => view! { <Meta property=tag.property content=tag.content /> }.into_any(),
    }
}
