use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry in a conversation. Turns are append-only; a turn is never
/// mutated once created.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommended_products: Option<Vec<ProductRecommendation>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_actions: Option<Vec<String>>,
    pub created_at: i64,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        ChatTurn {
            role: ChatRole::User,
            content: content.into(),
            recommended_products: None,
            suggested_actions: None,
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    pub fn assistant(reply: &ChatResponse) -> Self {
        ChatTurn {
            role: ChatRole::Assistant,
            content: reply.response.clone(),
            recommended_products: Some(reply.recommended_products.clone()),
            suggested_actions: Some(reply.suggested_actions.clone()),
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// A product pick tied to one reply. Lives only inside a ChatTurn, never
/// persisted.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecommendation {
    pub id: i64,
    pub reason: String,
    #[serde(default)]
    pub contact_name: String,
}

/// Catalog entry handed to the gift advisor as read-only configuration.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GiftProduct {
    pub id: i64,
    pub name: String,
    pub brand: String,
    pub price: i64,
    pub description: String,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    #[serde(default)]
    pub response: String,
    #[serde(default)]
    pub recommended_products: Vec<ProductRecommendation>,
    #[serde(default)]
    pub suggested_actions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_response_wire_shape() {
        let reply = ChatResponse {
            response: "Try the candle".to_string(),
            recommended_products: vec![ProductRecommendation {
                id: 1,
                reason: "matches her interests".to_string(),
                contact_name: "Sarah Jones".to_string(),
            }],
            suggested_actions: vec!["Browse products".to_string()],
        };

        let json = serde_json::to_value(&reply).unwrap();
        assert!(json.get("recommendedProducts").is_some());
        assert!(json.get("suggestedActions").is_some());
        assert_eq!(
            json["recommendedProducts"][0]["contactName"],
            "Sarah Jones"
        );
    }

    #[test]
    fn test_chat_response_missing_fields_default() {
        let reply: ChatResponse =
            serde_json::from_str(r#"{"response": "hi"}"#).unwrap();
        assert_eq!(reply.response, "hi");
        assert!(reply.recommended_products.is_empty());
        assert!(reply.suggested_actions.is_empty());
    }

    #[test]
    fn test_chat_role_serialization() {
        assert_eq!(
            serde_json::to_string(&ChatRole::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn test_assistant_turn_carries_reply() {
        let reply = ChatResponse {
            response: "hello".to_string(),
            recommended_products: vec![],
            suggested_actions: vec!["Browse products".to_string()],
        };
        let turn = ChatTurn::assistant(&reply);
        assert_eq!(turn.role, ChatRole::Assistant);
        assert_eq!(turn.content, "hello");
        assert_eq!(turn.suggested_actions.as_deref(), Some(&["Browse products".to_string()][..]));
    }
}
