use shared_types::{Contact, GiftProduct};

/// Build the single-turn prompt: resolved contact (or the generic
/// sample), the product catalog, and the literal user message, plus the
/// strict-JSON reply instructions.
pub fn build_prompt(
    contact: Option<&Contact>,
    sample: &[Contact],
    catalog: &[GiftProduct],
    message: &str,
) -> String {
    let context = match contact {
        Some(found) => format!("FOUND CONTACT: {}", to_json(found)),
        None => format!("CONTACTS SAMPLE: {}", to_json(&sample)),
    };

    let guidance = if contact.is_some() {
        "Focus on this specific contact and their details for personalized recommendations."
    } else {
        "Provide general guidance or ask for more details about who they want to shop for."
    };

    let contact_name = contact.map(|c| c.name.as_str()).unwrap_or("");

    format!(
        r#"You are a gift recommendation assistant.

{context}

PRODUCTS: {products}
USER: "{message}"

{guidance}

Respond with ONLY valid JSON:
{{
  "response": "Your helpful response",
  "recommendedProducts": [{{"id": 1, "reason": "why this fits", "contactName": "{contact_name}"}}],
  "suggestedActions": ["Ask about someone specific", "Browse products"]
}}"#,
        context = context,
        products = to_json(&catalog),
        message = message,
        guidance = guidance,
        contact_name = contact_name,
    )
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "null".to_string())
}
