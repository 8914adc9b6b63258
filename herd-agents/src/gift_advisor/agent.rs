use std::sync::Arc;

use shared_types::{ChatResponse, Contact, GiftProduct, ProductRecommendation};

use crate::llm::{
    complete_with_retry, CompletionClient, CompletionError, CompletionRequest, RetryPolicy,
};
use crate::storage::ContactDirectory;

use super::name_extraction::extract_candidate_names;
use super::system_prompt::build_prompt;

const MODEL: &str = "claude-3-5-sonnet-20241022";
const MAX_TOKENS: u32 = 1000;

/// Cap on rows a single name lookup may return.
const SEARCH_LIMIT: usize = 10;
/// Generic context size when no candidate resolves.
const SAMPLE_LIMIT: usize = 5;
/// Catalog id the degraded reply recommends.
const FALLBACK_PRODUCT_ID: i64 = 3;

/// Turns one user message into one structured gift recommendation.
///
/// The product catalog is injected read-only configuration so the agent
/// can be exercised without process-wide state.
pub struct GiftAdvisorAgent {
    llm_client: Arc<dyn CompletionClient>,
    directory: Arc<dyn ContactDirectory>,
    catalog: Vec<GiftProduct>,
    retry: RetryPolicy,
}

impl GiftAdvisorAgent {
    pub fn new(
        llm_client: Arc<dyn CompletionClient>,
        directory: Arc<dyn ContactDirectory>,
        catalog: Vec<GiftProduct>,
    ) -> Self {
        Self {
            llm_client,
            directory,
            catalog,
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// One request, strictly sequential: extract candidate names,
    /// resolve a contact, build the prompt, call the completion service
    /// under the retry policy, parse or degrade.
    pub async fn advise(
        &self,
        user_id: &str,
        message: &str,
    ) -> Result<ChatResponse, CompletionError> {
        let candidates = extract_candidate_names(message);
        tracing::debug!(?candidates, "extracted name candidates");

        let contact = self.resolve_contact(user_id, &candidates).await;

        let sample = if contact.is_none() {
            self.sample_contacts(user_id).await
        } else {
            Vec::new()
        };

        let prompt = build_prompt(contact.as_ref(), &sample, &self.catalog, message);
        let request = CompletionRequest {
            model: MODEL.to_string(),
            max_tokens: MAX_TOKENS,
            prompt,
        };

        match complete_with_retry(self.llm_client.as_ref(), &request, &self.retry).await? {
            Some(text) => Ok(parse_reply(&text)),
            None => Ok(self.fallback_reply(contact.as_ref())),
        }
    }

    /// First candidate with any match wins; within one candidate's
    /// results an exact first-name match beats the first row. Lookup
    /// failures count as "no match" so the request can continue.
    async fn resolve_contact(&self, user_id: &str, candidates: &[String]) -> Option<Contact> {
        for term in candidates {
            let results = match self
                .directory
                .search_by_name(user_id, term, SEARCH_LIMIT)
                .await
            {
                Ok(results) => results,
                Err(error) => {
                    tracing::warn!(%term, %error, "contact search failed, treating as no match");
                    continue;
                }
            };

            if results.is_empty() {
                continue;
            }

            let lowered = term.to_lowercase();
            let best = results
                .iter()
                .find(|c| c.name.to_lowercase().split(' ').next() == Some(lowered.as_str()))
                .or_else(|| results.first())
                .cloned();

            if let Some(found) = &best {
                tracing::debug!(%term, name = %found.name, "resolved contact");
            }
            return best;
        }

        None
    }

    async fn sample_contacts(&self, user_id: &str) -> Vec<Contact> {
        match self.directory.sample(user_id, SAMPLE_LIMIT).await {
            Ok(contacts) => contacts,
            Err(error) => {
                tracing::warn!(%error, "contact sampling failed, continuing without context");
                Vec::new()
            }
        }
    }

    /// Deterministic reply for when the completion service stayed
    /// overloaded through every attempt.
    fn fallback_reply(&self, contact: Option<&Contact>) -> ChatResponse {
        let who = contact.map(|c| c.name.as_str()).unwrap_or("some contacts");
        let contact_name = contact.map(|c| c.name.clone()).unwrap_or_default();

        let pick = self
            .catalog
            .iter()
            .find(|p| p.id == FALLBACK_PRODUCT_ID)
            .or_else(|| self.catalog.first());

        let recommended = pick
            .map(|product| {
                vec![ProductRecommendation {
                    id: product.id,
                    reason: format!("{} makes a universally appreciated gift", product.name),
                    contact_name,
                }]
            })
            .unwrap_or_default();

        let closing = pick
            .map(|product| format!(" The {} would make a great birthday gift.", product.name))
            .unwrap_or_default();

        ChatResponse {
            response: format!(
                "I found {} in your list! Based on their profile, I'd recommend checking out our curated gift options.{}",
                who, closing
            ),
            recommended_products: recommended,
            suggested_actions: vec![
                "Tell me more about their interests".to_string(),
                "Show me other gift options".to_string(),
            ],
        }
    }
}

/// Parse the completion output; an unparseable reply degrades to a
/// generic one instead of surfacing an error.
fn parse_reply(text: &str) -> ChatResponse {
    match serde_json::from_str(text) {
        Ok(reply) => reply,
        Err(error) => {
            tracing::warn!(%error, "completion output was not valid JSON, using generic reply");
            generic_reply()
        }
    }
}

fn generic_reply() -> ChatResponse {
    ChatResponse {
        response: "I'd be happy to help with gift recommendations!".to_string(),
        recommended_products: Vec::new(),
        suggested_actions: vec!["Ask about gift recommendations".to_string()],
    }
}
