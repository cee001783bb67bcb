use std::sync::Arc;

use crate::chat::CompletionProvider;
use crate::conversation::{to_chat_messages, ConversationStore, Message, Role};
use crate::error::{ClientError, LLMError};
use crate::persistence::ConversationFile;

use super::intent::Intent;
use super::turn::TurnRequest;
use super::view::View;

/// Which conversation turns go to. Derived from the store on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Unselected,
    Selected(usize),
}

pub struct ConversationController<V: View> {
    store: ConversationStore,
    file: ConversationFile,
    provider: Arc<dyn CompletionProvider>,
    model: String,
    view: V,
    in_flight: Option<usize>,
}

impl<V: View> ConversationController<V> {
    pub fn new(
        store: ConversationStore,
        file: ConversationFile,
        provider: Arc<dyn CompletionProvider>,
        model: impl Into<String>,
        view: V,
    ) -> Self {
        Self {
            store,
            file,
            provider,
            model: model.into(),
            view,
            in_flight: None,
        }
    }

    pub fn selection(&self) -> Selection {
        match self.store.selected_index() {
            Some(index) => Selection::Selected(index),
            None => Selection::Unselected,
        }
    }

    pub fn store(&self) -> &ConversationStore {
        &self.store
    }

    pub fn file(&self) -> &ConversationFile {
        &self.file
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Redraws the list and, when something is selected, its transcript.
    pub fn refresh(&mut self) {
        self.view.render_conversation_list(&self.store.titles());
        self.view.clear_transcript();
        if let Some(conversation) = self.store.selected() {
            self.view.render_transcript(&conversation.messages);
        }
    }

    pub fn new_conversation(&mut self) -> Result<usize, ClientError> {
        self.ensure_idle()?;
        let (index, saved) = self.create_and_show();
        saved.map(|_| index)
    }

    pub fn pick_conversation(&mut self, index: usize) -> Result<(), ClientError> {
        self.ensure_idle()?;
        let conversation = self.store.select(index)?;
        log::debug!("picked conversation {index}");
        self.view.clear_transcript();
        self.view.render_transcript(&conversation.messages);
        Ok(())
    }

    pub fn model_selected(&mut self, identifier: impl Into<String>) {
        self.model = identifier.into();
        log::info!("model set to {}", self.model);
    }

    /// Runs a whole turn in place: user message, remote call, reply, save.
    ///
    /// Returns the appended assistant message, or `None` when `text` is blank.
    pub async fn submit_message(&mut self, text: &str) -> Result<Option<Message>, ClientError> {
        let Some(request) = self.begin_turn(text)? else {
            return Ok(None);
        };
        let result = request.run().await;
        self.finish_turn(&request, result).map(Some)
    }

    /// First half of a turn: records and shows the user message and hands
    /// back the remote call to perform. The controller stays busy until
    /// [`finish_turn`](Self::finish_turn) is called with the same request.
    /// Blank text is ignored, even while busy.
    pub fn begin_turn(&mut self, text: &str) -> Result<Option<TurnRequest>, ClientError> {
        let content = text.trim();
        if content.is_empty() {
            return Ok(None);
        }
        self.ensure_idle()?;

        let index = match self.selection() {
            Selection::Selected(index) => index,
            Selection::Unselected => {
                let (index, saved) = self.create_and_show();
                if let Err(err) = saved {
                    log::warn!("continuing turn after failed save: {err}");
                }
                index
            }
        };

        self.store.append_message(index, Role::User, content)?;
        let conversation = self.store.get(index)?;
        self.view.render_transcript(&conversation.messages);

        let request = TurnRequest::new(
            index,
            self.model.clone(),
            to_chat_messages(&conversation.messages),
            Arc::clone(&self.provider),
        );
        log::info!(
            "turn started on conversation {index} with {} ({} messages)",
            request.model(),
            request.messages().len()
        );
        self.in_flight = Some(index);
        Ok(Some(request))
    }

    /// Second half of a turn: records the reply (or the failure) on the
    /// conversation captured in `request`, redraws it and saves.
    pub fn finish_turn(
        &mut self,
        request: &TurnRequest,
        result: Result<String, LLMError>,
    ) -> Result<Message, ClientError> {
        let index = request.index();
        if self.in_flight == Some(index) {
            self.in_flight = None;
        } else {
            log::warn!("finishing a turn on conversation {index} that was not in flight");
        }

        let (reply, failure) = match result {
            Ok(text) => (Message::assistant(text.trim()), None),
            Err(err) => {
                let description = err.to_string();
                log::warn!("turn on conversation {index} failed: {description}");
                self.view.notify_error(&description);
                (Message::assistant(format!("Error: {description}")), Some(err))
            }
        };

        self.store
            .append_message(index, reply.role, reply.content.as_str())?;
        if self.store.selected_index() == Some(index) {
            let conversation = self.store.get(index)?;
            self.view.render_transcript(&conversation.messages);
        }
        self.persist()?;

        match failure {
            Some(err) => Err(ClientError::Provider(err)),
            None => Ok(reply),
        }
    }

    pub async fn dispatch(&mut self, intent: Intent) -> Result<(), ClientError> {
        match intent {
            Intent::NewConversation => self.new_conversation().map(|_| ()),
            Intent::PickConversation(index) => self.pick_conversation(index),
            Intent::SubmitMessage(text) => self.submit_message(&text).await.map(|_| ()),
            Intent::ModelSelected(model) => {
                self.model_selected(model);
                Ok(())
            }
        }
    }

    fn create_and_show(&mut self) -> (usize, Result<(), ClientError>) {
        let index = self.store.create_conversation();
        let saved = self.persist();
        self.view.render_conversation_list(&self.store.titles());
        self.view.clear_transcript();
        if let Ok(conversation) = self.store.get(index) {
            self.view.render_transcript(&conversation.messages);
        }
        (index, saved)
    }

    fn persist(&mut self) -> Result<(), ClientError> {
        if let Err(err) = self.file.save(self.store.snapshot()) {
            let err = ClientError::from(err);
            log::error!("{err}");
            self.view.notify_error(&err.to_string());
            return Err(err);
        }
        Ok(())
    }

    fn ensure_idle(&self) -> Result<(), ClientError> {
        match self.in_flight {
            Some(_) => Err(ClientError::Busy),
            None => Ok(()),
        }
    }
}
