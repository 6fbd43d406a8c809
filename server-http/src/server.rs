use axum::Router;
use shared::config::Config;
use shared::{Error, Result};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

use crate::identity::ServiceIdentity;
use crate::routes::build_router;
use crate::state::AppState;

/// Bind the listening socket. There is no retry and no fallback port.
pub async fn bind(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr).await.map_err(|source| Error::Bind {
        addr: addr.to_string(),
        source,
    })
}

/// Serve until the process is killed.
pub async fn serve(listener: TcpListener, router: Router) -> Result<()> {
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;
    Ok(())
}

pub async fn run(identity: ServiceIdentity, config: &Config) -> Result<()> {
    let router = build_router(AppState::new(identity));

    let addr = config.bind_addr();
    let listener = bind(&addr).await?;

    info!("{} listening on http://{}", identity.name, addr);

    serve(listener, router).await
}
