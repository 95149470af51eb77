use leptos::config::get_configuration;
use log::{LevelFilter, info};
use server::{ServeConfig, create_router, error::Result};
use simple_logger::SimpleLogger;

#[tokio::main]
async fn main() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .env()
        .init()?;

    let conf = get_configuration(None)?;
    let options = conf.leptos_options;
    let addr = options.site_addr;
    let serve = ServeConfig::from(&options);

    info!("serving {} from {}", serve.output_name, serve.site_root.display());
    let app = create_router(&serve);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on http://{addr}");
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
