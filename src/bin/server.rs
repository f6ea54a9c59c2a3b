use pingboard::api::create_api_server;
use pingboard::probe::PingProber;
use pingboard::store::PingStore;
use pingboard::sweep::SweepCoordinator;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Default listen address; override with PINGBOARD_ADDR.
const DEFAULT_ADDR: &str = "0.0.0.0:3005";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pingboard=info,tower_http=info")),
        )
        .init();

    println!("\n🛰  Pingboard - Subnet Availability Monitor\n");

    // The store lives for the whole process; records accumulate until reset
    let store = PingStore::new();
    let prober = Arc::new(PingProber::new());
    let coordinator = SweepCoordinator::new(store, prober);

    let app = create_api_server(coordinator);

    let addr = std::env::var("PINGBOARD_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    println!("📡 Listening on http://{addr}");
    println!("\n📚 Endpoints:");
    println!("   POST   /ping             - Probe hosts or .0-suffixed /24 subnets");
    println!("   POST   /reset            - Clear accumulated statistics");
    println!("   GET    /result           - Dump the aggregation store");
    println!("   GET    /metrics/:subnet  - Fresh 254-host Prometheus snapshot");
    println!("   GET    /health           - Liveness check");
    println!("\n🛑 Press Ctrl+C to stop the server\n");

    tracing::info!("pingboard server started on {addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
