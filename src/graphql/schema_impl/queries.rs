use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::{
    app_state::AppState,
    models::{
        domain::{LegalCode, QuizConfiguration, SubjectSelection},
        dto::response::{ConfigurationOptions, QuestionReview, Score, SessionSnapshot},
    },
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn session(&self, ctx: &Context<'_>) -> Result<SessionSnapshot> {
        let state = ctx.data::<AppState>()?;
        Ok(state.session_service.snapshot().await)
    }

    /// Final score; only available once the session reached RESULTS.
    async fn score(&self, ctx: &Context<'_>) -> Result<Score> {
        let state = ctx.data::<AppState>()?;
        state.session_service.score().await.map_err(|e| e.extend())
    }

    async fn review(&self, ctx: &Context<'_>) -> Result<Vec<QuestionReview>> {
        let state = ctx.data::<AppState>()?;
        state.session_service.review().await.map_err(|e| e.extend())
    }

    async fn default_configuration(&self) -> QuizConfiguration {
        QuizConfiguration::default()
    }

    async fn configuration_options(&self) -> ConfigurationOptions {
        ConfigurationOptions::build()
    }

    /// Setup-form helper: the subject list after ticking or unticking `code`.
    /// The last remaining subject cannot be removed.
    async fn toggle_subject(&self, selected: Vec<LegalCode>, code: LegalCode) -> Vec<LegalCode> {
        match SubjectSelection::from_codes(&selected) {
            Some(mut selection) => {
                if !selection.toggle(code) {
                    log::debug!("Refused to remove the last subject {:?}", code);
                }
                selection.into_codes()
            }
            None => vec![code],
        }
    }
}
