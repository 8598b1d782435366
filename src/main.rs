#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() {
    use std::sync::Arc;

    use axum::{routing::post, Extension, Router};
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use portfolio_site::app::*;
    use portfolio_site::contact::{self, DynMailRelay, MailConfig, SmtpMailer, UnconfiguredRelay};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("portfolio_site=info,info")),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();

    let relay: DynMailRelay = match MailConfig::from_env() {
        Some(config) => match SmtpMailer::new(&config) {
            Ok(mailer) => {
                tracing::info!("smtp relay configured via {}", config.relay);
                Arc::new(mailer)
            }
            Err(err) => {
                tracing::warn!("couldn't build smtp relay ({err}), contact form disabled");
                Arc::new(UnconfiguredRelay)
            }
        },
        None => {
            tracing::warn!(
                "SMTP_USERNAME, SMTP_PASSWORD, and CONTACT_RECIPIENT are not all set, contact form disabled"
            );
            Arc::new(UnconfiguredRelay)
        }
    };

    let conf = get_configuration(None).unwrap();
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let app = Router::new()
        .route(contact::CONTACT_ENDPOINT, post(contact::submit))
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(Extension(relay))
        .with_state(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("listening on http://{}", &addr);
    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
}
