use gpt_client::{Message, View};

/// What the controller last asked the terminal to show.
#[derive(Debug, Default)]
pub struct TuiView {
    titles: Vec<String>,
    transcript: Vec<Message>,
    popup: Option<String>,
}

impl TuiView {
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn popup(&self) -> Option<&str> {
        self.popup.as_deref()
    }

    pub fn dismiss_popup(&mut self) -> bool {
        self.popup.take().is_some()
    }
}

impl View for TuiView {
    fn render_conversation_list(&mut self, titles: &[String]) {
        self.titles = titles.to_vec();
    }

    fn render_transcript(&mut self, messages: &[Message]) {
        self.transcript = messages.to_vec();
    }

    fn clear_transcript(&mut self) {
        self.transcript.clear();
    }

    /// Errors raised before the popup is dismissed stack up in it.
    fn notify_error(&mut self, description: &str) {
        let line = format!("Error: {description}");
        match self.popup.as_mut() {
            Some(popup) => {
                popup.push('\n');
                popup.push_str(&line);
            }
            None => self.popup = Some(line),
        }
    }
}
