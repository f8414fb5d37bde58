use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use lexgrile_server::{
    app_state::AppState,
    config::Config,
    graphql::create_schema,
    handlers::{graphql_handler, session_handler},
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if !config.has_api_key() {
        log::warn!("API_KEY is not set; quiz generation requests will fail");
    }
    log::info!(
        "Question generation via {} ({})",
        config.llm_api_base,
        config.llm_model
    );

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let allowed_origin = config.cors_allowed_origin.clone();

    let app_state = AppState::new(config);
    let schema = create_schema(app_state.clone());

    log::info!("Starting HTTP server on {}:{}", host, port);
    log::info!("GraphiQL playground: http://{}:{}/graphiql", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&allowed_origin)
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
            .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
            .max_age(3600);

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::Data::new(schema.clone()))
            .wrap(cors)
            .wrap(RequestIdMiddleware)
            .wrap(Logger::default())
            .configure(graphql_handler::configure)
            .configure(session_handler::configure)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
