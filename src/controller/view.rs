use crate::conversation::Message;

/// Rendering surface driven by the controller.
///
/// Calls arrive on the task that owns the controller, in the order the
/// controller issues them.
pub trait View {
    fn render_conversation_list(&mut self, titles: &[String]);
    fn render_transcript(&mut self, messages: &[Message]);
    fn clear_transcript(&mut self);
    /// Blocking, user-visible error.
    fn notify_error(&mut self, description: &str);
}
