use async_graphql::{Context, ErrorExtensions, Object, Result};

use crate::{
    app_state::AppState,
    models::{
        domain::QuizConfiguration,
        dto::{
            request::StartQuizRequest,
            response::{ResetResponse, SessionSnapshot},
        },
    },
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Generates a new quiz. Resolves once generation has settled; a failed
    /// generation comes back as a SETUP snapshot carrying the error message.
    async fn start_quiz(&self, ctx: &Context<'_>, input: StartQuizRequest) -> Result<SessionSnapshot> {
        let state = ctx.data::<AppState>()?;
        let config = QuizConfiguration::try_from(input).map_err(|e| e.extend())?;

        state
            .session_service
            .start_quiz(config)
            .await
            .map_err(|e| e.extend())
    }

    async fn toggle_option(&self, ctx: &Context<'_>, option_index: u32) -> Result<SessionSnapshot> {
        let state = ctx.data::<AppState>()?;
        state
            .session_service
            .toggle_option(option_index)
            .await
            .map_err(|e| e.extend())
    }

    async fn submit_answer(
        &self,
        ctx: &Context<'_>,
        #[graphql(default = false)] confirm_empty: bool,
    ) -> Result<SessionSnapshot> {
        let state = ctx.data::<AppState>()?;
        state
            .session_service
            .submit_answer(confirm_empty)
            .await
            .map_err(|e| e.extend())
    }

    async fn next_question(&self, ctx: &Context<'_>) -> Result<SessionSnapshot> {
        let state = ctx.data::<AppState>()?;
        state
            .session_service
            .next_question()
            .await
            .map_err(|e| e.extend())
    }

    async fn reset_session(&self, ctx: &Context<'_>) -> Result<ResetResponse> {
        let state = ctx.data::<AppState>()?;
        Ok(state.session_service.reset().await)
    }
}
