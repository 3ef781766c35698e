use formling::handlers::build_router;
use formling::schema::detail_schema;
use formling::server::Server;
use formling::session::{FormController, SimulatedBackend};
use formling::settings::Settings;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();

	let settings = Settings::from_env()?;
	let schema = Arc::new(detail_schema());
	let backend = SimulatedBackend::new(schema.clone()).with_latency(settings.latency);
	let controller = Arc::new(FormController::new(Arc::new(backend)));

	let router = build_router(schema, controller);
	let server = Server::new(router);
	server
		.listen(settings.bind_addr)
		.await
		.map_err(|e| anyhow::anyhow!("server error: {e}"))?;

	Ok(())
}
