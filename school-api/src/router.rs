use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, config::ApplicationSettings, routes};

pub fn create(app_state: AppState, application: &ApplicationSettings) -> Router<()> {
    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/avatar", routes::avatars::router())
        .nest("/student", routes::students::router())
        .nest("/faculty", routes::faculties::router());

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(match HeaderValue::from_str(&application.app_url) {
            Ok(origin) => AllowOrigin::exact(origin),
            Err(_) => {
                tracing::warn!("invalid app_url '{}', CORS disabled", application.app_url);
                AllowOrigin::list([])
            }
        });

    // Finally, wrap the app with tracing layer, state and CORS
    app.with_state(app_state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
