use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::{
        domain::QuizConfiguration,
        dto::request::{StartQuizRequest, SubmitAnswerRequest, ToggleOptionRequest},
    },
};

#[get("/api/session")]
async fn get_session(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.session_service.snapshot().await)
}

#[post("/api/session/start")]
async fn start_quiz(
    state: web::Data<AppState>,
    request: web::Json<StartQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let config = QuizConfiguration::try_from(request.into_inner())?;
    let snapshot = state.session_service.start_quiz(config).await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/session/toggle")]
async fn toggle_option(
    state: web::Data<AppState>,
    request: web::Json<ToggleOptionRequest>,
) -> Result<HttpResponse, AppError> {
    let snapshot = state
        .session_service
        .toggle_option(request.option_index)
        .await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/session/submit")]
async fn submit_answer(
    state: web::Data<AppState>,
    request: web::Json<SubmitAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let snapshot = state
        .session_service
        .submit_answer(request.confirm_empty)
        .await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/session/next")]
async fn next_question(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let snapshot = state.session_service.next_question().await?;
    Ok(HttpResponse::Ok().json(snapshot))
}

#[post("/api/session/reset")]
async fn reset_session(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.session_service.reset().await)
}

#[get("/api/session/score")]
async fn get_score(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let score = state.session_service.score().await?;
    Ok(HttpResponse::Ok().json(score))
}

#[get("/api/session/review")]
async fn get_review(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let review = state.session_service.review().await?;
    Ok(HttpResponse::Ok().json(review))
}

#[get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "generation": if state.config.has_api_key() { "configured" } else { "missing_api_key" }
    }))
}

/// Registers every session route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(get_session)
        .service(start_quiz)
        .service(toggle_option)
        .service(submit_answer)
        .service(next_question)
        .service(reset_session)
        .service(get_score)
        .service(get_review);
}
