//! Preview host for the client-side rendered bundle.
//!
//! Serves the compiled `pkg` directory and static assets from the site root.
//! Paths that are not files get the HTML shell so client-side routes can be
//! opened directly, unless they look like a missing asset.

pub mod error;

use std::path::PathBuf;

use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    response::{Html, IntoResponse, Response},
};
use http::{HeaderValue, StatusCode, Uri, header};
use leptos::config::LeptosOptions;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, services::ServeDir, set_header::SetResponseHeaderLayer};

/// Where the built site lives and what its bundle is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServeConfig {
    /// Directory cargo-leptos writes the site to.
    pub site_root: PathBuf,

    /// Sub-directory of `site_root` holding the JS, wasm and CSS.
    pub pkg_dir: String,

    /// File stem of the JS, wasm and CSS outputs.
    pub output_name: String,
}

impl From<&LeptosOptions> for ServeConfig {
    fn from(options: &LeptosOptions) -> Self {
        Self {
            site_root: PathBuf::from(options.site_root.as_ref()),
            pkg_dir: options.site_pkg_dir.to_string(),
            output_name: options.output_name.to_string(),
        }
    }
}

impl ServeConfig {
    /// The HTML document that loads and starts the wasm bundle.
    pub fn shell(&self) -> String {
        let pkg = format!("/{}/{}", self.pkg_dir.trim_matches('/'), self.output_name);
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <link rel="stylesheet" href="{pkg}.css" />
    <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
    <script type="module">
      import init from '{pkg}.js';
      init({{ module_or_path: '{pkg}.wasm' }});
    </script>
  </head>
  <body></body>
</html>
"#
        )
    }
}

/// Create the preview server router.
pub fn create_router(config: &ServeConfig) -> Router {
    let shell = config.shell();
    let spa_shell = move |uri: Uri| {
        let shell = shell.clone();
        async move { shell_or_not_found(&uri, shell) }
    };

    let pkg_path = format!("/{}", config.pkg_dir.trim_matches('/'));
    let pkg = ServeDir::new(config.site_root.join(config.pkg_dir.trim_matches('/')));
    let site = ServeDir::new(&config.site_root).fallback(spa_shell.into_service());

    Router::new()
        .nest_service(&pkg_path, pkg)
        .fallback_service(site)
        .layer(
            ServiceBuilder::new()
                .layer(CompressionLayer::new())
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::CACHE_CONTROL,
                    HeaderValue::from_static("no-cache"),
                )),
        )
}

/// Client routes have no extension, or `.html` for published post URLs.
fn is_client_route(path: &str) -> bool {
    let last = path.rsplit('/').next().unwrap_or_default();
    !last.contains('.') || last.ends_with(".html")
}

fn shell_or_not_found(uri: &Uri, shell: String) -> Response {
    if is_client_route(uri.path()) {
        Html(shell).into_response()
    } else {
        StatusCode::NOT_FOUND.into_response()
    }
}
