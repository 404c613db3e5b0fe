/// Yes/no question put to the person driving the client.
///
/// Destructive operations ask before any request is issued; a declined
/// prompt is a no-op, not an error.
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, question: &str) -> bool;
}
