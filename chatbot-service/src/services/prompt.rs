//! Static storefront context and prompt composition.

use crate::models::PresetPrompt;

/// Context block describing the platform, sent ahead of every user question.
pub const WEBSITE_CONTEXT: &str = r#"You are a helpful AI assistant for "Amma's Healing", an e-commerce healthcare platform.

Website Information:
- Name: Amma's Healing
- Type: Healthcare and medical supplies e-commerce platform
- Categories: Refreshments, Home & Kitchen, Medicine
- Features:
  * Browse 500+ healthcare and wellness products
  * Secure user authentication and profile management
  * Shopping cart and order tracking
  * Flash sales with countdown timers
  * Email notifications for orders
  * Admin dashboard with analytics and leaderboard
  * Top buyers leaderboard
  * Order history and status tracking

Answer questions about the website in a helpful, friendly, and professional manner.
Keep responses concise (2-3 sentences) unless more detail is requested."#;

/// Fixed catalog of suggested questions, in display order.
pub const PRESET_PROMPTS: [PresetPrompt; 4] = [
    PresetPrompt {
        id: 1,
        question: "What products can I buy on Amma's Healing?",
        category: "products",
    },
    PresetPrompt {
        id: 2,
        question: "How do I track my order?",
        category: "orders",
    },
    PresetPrompt {
        id: 3,
        question: "What are flash sales and how do they work?",
        category: "features",
    },
    PresetPrompt {
        id: 4,
        question: "How do I create an account and manage my profile?",
        category: "account",
    },
];

/// Build the full prompt sent to the model for a user question.
///
/// The question is inserted verbatim; no truncation or escaping.
pub fn compose_prompt(context: &str, question: &str) -> String {
    format!(
        "{context}\n\nUser Question: {question}\n\n\
         Provide a helpful, accurate answer based on the website information above.\n\
         If the question is outside the scope of the website, politely redirect to relevant topics.\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_contains_context_before_question() {
        let prompt = compose_prompt(WEBSITE_CONTEXT, "How do I track my order?");

        let context_pos = prompt.find(WEBSITE_CONTEXT).expect("context present");
        let question_pos = prompt
            .find("User Question: How do I track my order?")
            .expect("question present");
        assert!(context_pos < question_pos);
    }

    #[test]
    fn question_is_inserted_verbatim() {
        let question = r#"Is "ashwagandha" in stock? <b>100%</b> sure?"#;
        let prompt = compose_prompt(WEBSITE_CONTEXT, question);
        assert!(prompt.contains(question));
    }

    #[test]
    fn prompt_ends_with_instruction_suffix() {
        let prompt = compose_prompt(WEBSITE_CONTEXT, "hi");
        assert!(prompt.ends_with(
            "politely redirect to relevant topics.\n"
        ));
    }

    #[test]
    fn preset_catalog_has_four_entries_in_order() {
        assert_eq!(PRESET_PROMPTS.len(), 4);
        let ids: Vec<u32> = PRESET_PROMPTS.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}
