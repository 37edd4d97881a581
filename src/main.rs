//! Talent Hub - Main Entry Point
//!
//! Configures the server with Axum API routes and the Dioxus application.
//! Uses the dioxus::serve() pattern for dx serve compatibility.

use talent_hub::app::App;

// Server entry point - NO #[tokio::main], dioxus::serve() creates its own runtime
#[cfg(feature = "server")]
fn main() {
    // IMPORTANT: Use dioxus::server::axum, NOT axum directly
    use dioxus::server::axum::routing::get;
    use tower_http::cors::CorsLayer;
    use tower_http::trace::TraceLayer;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting Talent Hub...");

    use talent_hub::directory;
    use talent_hub::handlers::{
        candidate_detail_handler, create_organization_handler, list_employers_handler,
        list_organizations_handler, search_candidates_handler, suggest_skills_handler,
    };

    dioxus::serve(|| async move {
        // Seed the in-memory directory before any request can hit it
        directory::ensure_seeded();

        // NOTE: Axum 0.8 uses {param} syntax instead of :param
        let router = dioxus::server::router(App)
            // Employer portal
            .route("/api/employer/candidates", get(search_candidates_handler))
            .route(
                "/api/employer/candidates/{candidate_id}",
                get(candidate_detail_handler),
            )
            // Skill suggestions
            .route("/api/skills", get(suggest_skills_handler))
            // Master admin portal
            .route(
                "/api/master/organizations",
                get(list_organizations_handler).post(create_organization_handler),
            )
            .route("/api/master/employers", get(list_employers_handler))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive());

        Ok(router)
    });
}

// WASM entry point (browser) - no server feature
#[cfg(all(not(feature = "server"), target_arch = "wasm32"))]
fn main() {
    web_sys::console::log_1(&"[WASM] Talent Hub initialized".into());
    dioxus::launch(App);
}

// Native client (desktop) - no server feature, not WASM
#[cfg(all(not(feature = "server"), not(target_arch = "wasm32")))]
fn main() {
    dioxus::launch(App);
}
