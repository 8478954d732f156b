use std::sync::Arc;

use anyhow::Context;
use bookgate_clients::ServiceRegistry;
use bookgate_kernel::{settings::Settings, InitCtx, ModuleRegistry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::load().with_context(|| "failed to load bookgate settings")?;

    bookgate_telemetry::init(&settings.telemetry)?;

    tracing::info!(
        env = ?settings.environment,
        book_backend = %settings.backend.book_endpoint,
        category_backend = %settings.backend.category_endpoint,
        "bookgate bootstrap starting"
    );

    // Failing to establish the backend channels is fatal; the gateway never
    // serves with a partial set of handles.
    let services = Arc::new(
        ServiceRegistry::connect(&settings.backend)
            .context("failed to establish backend channels")?,
    );

    let mut registry = ModuleRegistry::new();
    bookgate_app::modules::register_all(&mut registry, services);

    let ctx = InitCtx {
        settings: &settings,
    };
    registry.init_modules(&ctx).await?;

    bookgate_http::start_server(&registry, &settings).await
}
