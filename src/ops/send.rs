//! Send flow: render a stored message as a card, hand it to the platform
//! share action, and record the outcome. Rendering and sharing are owned
//! by the UI layer and reached through the traits below.

use uuid::Uuid;

use crate::model::Message;
use crate::store::MessageStore;

/// Error type for the send flow
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("message not found: {0}")]
    NotFound(Uuid),
    #[error("could not render card: {0}")]
    Render(String),
}

/// Produces a shareable image for a message
pub trait CardRenderer {
    fn render(&self, message: &Message) -> Result<Vec<u8>, SendError>;
}

/// Platform share action. Returns whether the user completed the share
/// (false covers both cancellation and failure).
pub trait ShareSink {
    fn share_image(&self, image: &[u8]) -> bool;
    fn share_text(&self, text: &str) -> bool;
}

/// Render the message with `id` and hand it to the share sink. The message
/// is marked sent only when the sink reports a completed share.
/// Returns whether the share completed.
pub fn send_card<R, S>(
    store: &mut MessageStore,
    renderer: &R,
    sink: &S,
    id: Uuid,
) -> Result<bool, SendError>
where
    R: CardRenderer,
    S: ShareSink,
{
    let message = store.get(id).ok_or(SendError::NotFound(id))?.clone();
    let image = renderer.render(&message)?;

    if sink.share_image(&image) {
        store.mark_sent(id);
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Share plain letter text. No history entry is involved.
pub fn send_text<S: ShareSink>(sink: &S, text: &str) -> bool {
    sink.share_text(text)
}
