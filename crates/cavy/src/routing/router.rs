//! Responder Router
//!
//! Orchestrates one chat turn: intercepts, responder selection, prompt
//! assembly, the single completion call, and reply parsing. Stateless per
//! request; the conversation history is owned by the caller.

use std::sync::Arc;

use crate::domain::{DomainError, GroupReply, MoodTier, Turn};
use crate::ports::{CompletionOptions, CompletionProvider, RandomSource};

use super::{addressing, intercept, parser, prompt, selection};

/// The responder router, constructed once with an injected completion
/// provider and reused across requests.
pub struct ResponderRouter {
    provider: Arc<dyn CompletionProvider>,
    options: CompletionOptions,
}

impl ResponderRouter {
    pub fn new(provider: Arc<dyn CompletionProvider>, options: CompletionOptions) -> Self {
        Self { provider, options }
    }

    /// Answer the latest user turn with an attributed group reply.
    pub async fn respond(
        &self,
        turns: &[Turn],
        happiness: u8,
        rng: &mut dyn RandomSource,
    ) -> Result<GroupReply, DomainError> {
        // 1. The last turn is the trigger
        let trigger = turns
            .last()
            .ok_or_else(|| DomainError::Validation("messages must not be empty".to_string()))?;

        // 2. Deterministic shortcuts skip the completion call entirely
        if let Some(reply) = intercept::intercept(trigger, rng) {
            tracing::debug!(reply = %reply.content(), "intercept answered without completion");
            return Ok(reply);
        }

        // 3. Route: who was addressed, what mood, who speaks
        let addressed = addressing::addressed_character(&trigger.content);
        let tier = MoodTier::from_happiness(happiness);
        let responders = selection::select_responders(addressed, tier, rng);

        if let Some(character) = addressed {
            tracing::info!(
                "{} was directly addressed. Responders: {:?}",
                character,
                responders.iter().map(|c| c.display_name()).collect::<Vec<_>>()
            );
        } else {
            tracing::debug!(
                tier = %tier,
                responders = ?responders.iter().map(|c| c.display_name()).collect::<Vec<_>>(),
                "selected responders"
            );
        }

        // 4. Assemble the prompt and call the completion service once
        let messages = prompt::assemble(&responders, addressed, tier, turns);
        let completion = self.provider.complete(&messages, &self.options).await?;

        // 5. Parse the text block into attributed lines
        Ok(parser::parse_reply(&completion.content, addressed))
    }
}
