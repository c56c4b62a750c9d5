use crate::catalog::MessageTemplate;
use crate::model::{CardStyle, Message};

/// Error type for building a message from a draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    #[error("recipient name is empty")]
    EmptyRecipient,
    #[error("message body is empty")]
    EmptyBody,
}

/// In-progress state backing the compose flow.
///
/// The UI disables its send action while `is_valid` is false, so the store
/// never receives a message with an empty recipient or body.
#[derive(Debug, Clone, Default)]
pub struct ComposeDraft {
    pub recipient_name: String,
    pub message_body: String,
    pub selected_template: Option<MessageTemplate>,
    pub card_style: CardStyle,
}

impl ComposeDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the draft can currently be built into a valid message
    pub fn is_valid(&self) -> bool {
        !self.recipient_name.trim().is_empty() && !self.message_body.trim().is_empty()
    }

    /// Replace the body with a template's text and remember which template
    /// was used (a denormalized copy travels with the built message)
    pub fn apply_template(&mut self, template: MessageTemplate) {
        self.message_body = template.text.to_string();
        self.selected_template = Some(template);
    }

    /// Build an unsent message from the draft, trimming both text fields
    pub fn build(&self) -> Result<Message, ComposeError> {
        let recipient = self.recipient_name.trim();
        if recipient.is_empty() {
            return Err(ComposeError::EmptyRecipient);
        }
        let body = self.message_body.trim();
        if body.is_empty() {
            return Err(ComposeError::EmptyBody);
        }

        Ok(Message::new(
            recipient.to_string(),
            body.to_string(),
            self.selected_template.map(|t| t.text.to_string()),
            self.card_style,
        ))
    }

    pub fn reset(&mut self) {
        *self = ComposeDraft::default();
    }
}
