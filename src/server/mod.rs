pub mod handlers;
mod routes;
mod state;

pub use routes::build_router;
pub use state::AppState;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Router with request tracing, ready to serve.
pub fn build_app(state: AppState) -> Router {
    build_router(state).layer(TraceLayer::new_for_http())
}

/// Serve `app` on an already bound listener until the process exits.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    let addr = listener.local_addr().context("Listener has no local address")?;
    info!("🌐 Listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .context("Web server terminated")
}
