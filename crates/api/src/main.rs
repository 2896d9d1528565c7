use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let bind_addr = std::env::var("CATALOG_BIND").unwrap_or_else(|_| {
        tracing::info!("CATALOG_BIND not set; defaulting to 0.0.0.0:8080");
        "0.0.0.0:8080".to_string()
    });

    let app = catalog_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
