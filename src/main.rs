mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config,
            service::{auth::token::JwtKeys, notification::NotificationDispatcher},
            startup,
            state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        startup::ensure_admin(&db, config.bootstrap_admin.as_ref()).await?;
        if config.seed_demo {
            startup::seed_demo(&db).await?;
        }

        let mailer = startup::setup_mailer(&config)?;
        let covers = startup::setup_cover_storage(&config).await?;
        let notifier = NotificationDispatcher::new(db.clone(), mailer, config.frontend_url.clone());
        let jwt = JwtKeys::new(
            &config.jwt_secret,
            chrono::Duration::hours(config.jwt_expiration_hours),
        );

        tracing::info!("Starting server");

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router(&config)
            .with_state(AppState::new(db, jwt, notifier, covers));
        router = router.merge(server_routes);

        Ok(router)
    })
}
