//! The chat controller.
//!
//! Mediates between user input, the backend and the renderer. It is the only
//! owner of [`ConversationState`]; the renderer and backend receive commands
//! and data by value.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll, ready};

use tracing::{debug, warn};

use super::state::{ConversationState, FlightTicket, Message, Sender};
use crate::backend::{BackendClient, BackendUnavailable};
use crate::i18n::LanguageCode;
use crate::ui::Theme;

/// Bot reply shown when the backend cannot be reached.
pub const FALLBACK_REPLY: &str = "Sorry, couldn't connect to the server.";

type BackendRequest = Pin<Box<dyn Future<Output = Result<String, BackendUnavailable>> + Send>>;

/// A backend round-trip that has been started but not yet delivered.
///
/// Owns everything it needs, so other controller operations may run while it
/// is pending. Awaiting it yields a [`BotReply`] for
/// [`ChatController::receive_bot_reply`]. Dropping it (or the reply)
/// undelivered ends the busy state; the controller hides the indicator on
/// its next call.
#[must_use = "the conversation stays busy only while the reply is kept"]
pub struct PendingReply {
    request: BackendRequest,
    ticket: FlightTicket,
}

impl Future for PendingReply {
    type Output = BotReply;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<BotReply> {
        let outcome = ready!(self.request.as_mut().poll(cx));
        Poll::Ready(BotReply {
            outcome,
            ticket: self.ticket.clone(),
        })
    }
}

impl fmt::Debug for PendingReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingReply").finish_non_exhaustive()
    }
}

/// The backend outcome of a [`PendingReply`], ready to be delivered.
#[derive(Debug)]
#[must_use = "deliver it with `ChatController::receive_bot_reply`"]
pub struct BotReply {
    outcome: Result<String, BackendUnavailable>,
    ticket: FlightTicket,
}

impl BotReply {
    pub const fn outcome(&self) -> &Result<String, BackendUnavailable> {
        &self.outcome
    }
}

/// Turns controller commands into visible changes.
pub trait Renderer {
    fn append_message(&mut self, text: &str, sender: Sender);
    fn show_busy_indicator(&mut self);
    fn hide_busy_indicator(&mut self);
    /// Removes every rendered message. A fixed welcome banner may stay.
    fn clear_messages(&mut self);
    fn apply_language(&mut self, language: LanguageCode);
    fn apply_theme(&mut self, theme: Theme);
}

pub struct ChatController<B, R> {
    state: ConversationState,
    backend: Arc<B>,
    renderer: R,
}

impl<B, R> ChatController<B, R>
where
    B: BackendClient,
    R: Renderer,
{
    pub fn new(backend: B, renderer: R, language: LanguageCode, theme: Theme) -> Self {
        Self {
            state: ConversationState::new(language, theme),
            backend: Arc::new(backend),
            renderer,
        }
    }

    /// Applies the initial theme and language to the renderer.
    pub fn start(&mut self) {
        self.renderer.apply_theme(self.state.theme());
        self.renderer.apply_language(self.state.language());
    }

    pub const fn state(&self) -> &ConversationState {
        &self.state
    }

    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Appends a user message and starts the backend request for it.
    ///
    /// Blank input is ignored. Input submitted while a reply is still in
    /// flight is rejected so that at most one request is outstanding. In both
    /// cases nothing changes and `None` is returned.
    pub fn submit_user_message(&mut self, text: &str) -> Option<PendingReply> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.release_abandoned_reply();
        if self.state.is_busy() {
            warn!("Ignoring message submitted while a reply is pending");
            return None;
        }

        debug!(chars = text.chars().count(), "Submitting user message");
        self.state.push(Message::user(text));
        self.renderer.append_message(text, Sender::User);

        Some(self.request_bot_reply(text.to_string()))
    }

    fn request_bot_reply(&mut self, user_text: String) -> PendingReply {
        let ticket = self.state.begin_flight();
        self.renderer.show_busy_indicator();

        let backend = Arc::clone(&self.backend);
        PendingReply {
            request: Box::pin(async move { backend.send(&user_text).await }),
            ticket,
        }
    }

    /// Delivers a reply produced by this controller's pending request.
    ///
    /// The busy indicator is always hidden before the resulting bot message
    /// is appended. Failures become the fixed fallback reply. A reply that
    /// belongs to another request is dropped without touching the log.
    pub fn receive_bot_reply(&mut self, reply: BotReply) {
        let BotReply { outcome, ticket } = reply;
        if !self.state.is_current_flight(&ticket) {
            warn!("Ignoring reply to a request this chat is not waiting for");
            return;
        }
        self.state.end_flight();
        self.renderer.hide_busy_indicator();

        let reply = match outcome {
            Ok(reply) => reply,
            Err(err) => {
                warn!(cause = %err.cause(), "Backend request failed: {err}");
                FALLBACK_REPLY.to_string()
            }
        };

        self.renderer.append_message(&reply, Sender::Bot);
        self.state.push(Message::bot(reply));
    }

    /// Submits `text`, waits for the backend and delivers the reply.
    ///
    /// Returns `false` when the input was ignored.
    pub async fn exchange(&mut self, text: &str) -> bool {
        let Some(pending) = self.submit_user_message(text) else {
            return false;
        };

        let reply = pending.await;
        self.receive_bot_reply(reply);
        true
    }

    /// Hides the indicator left up by a pending reply that was dropped.
    fn release_abandoned_reply(&mut self) {
        if self.state.take_abandoned_flight() {
            debug!("Pending reply was dropped before delivery");
            self.renderer.hide_busy_indicator();
        }
    }

    /// Clears the conversation log.
    ///
    /// A reply that is still in flight is not cancelled and will be appended
    /// to the new, empty log when it arrives.
    pub fn reset_conversation(&mut self) {
        self.release_abandoned_reply();
        debug!(
            cleared = self.state.messages().len(),
            busy = self.state.is_busy(),
            "Starting new chat"
        );
        self.state.clear();
        self.renderer.clear_messages();
    }

    pub fn set_language(&mut self, language: LanguageCode) {
        self.release_abandoned_reply();
        debug!(%language, "Setting language");
        self.state.set_language(language);
        self.backend.language_changed(language);
        self.renderer.apply_language(language);
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.release_abandoned_reply();
        debug!(%theme, "Setting theme");
        self.state.set_theme(theme);
        self.renderer.apply_theme(theme);
    }

    /// Switches to the other theme and returns it.
    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.state.theme().toggled();
        self.set_theme(theme);
        theme
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum RenderEvent {
        Append(String, Sender),
        ShowBusy,
        HideBusy,
        Clear,
        Language(LanguageCode),
        Theme(Theme),
    }

    #[derive(Default)]
    struct RecordingRenderer {
        events: Vec<RenderEvent>,
    }

    impl Renderer for RecordingRenderer {
        fn append_message(&mut self, text: &str, sender: Sender) {
            self.events.push(RenderEvent::Append(text.to_string(), sender));
        }

        fn show_busy_indicator(&mut self) {
            self.events.push(RenderEvent::ShowBusy);
        }

        fn hide_busy_indicator(&mut self) {
            self.events.push(RenderEvent::HideBusy);
        }

        fn clear_messages(&mut self) {
            self.events.push(RenderEvent::Clear);
        }

        fn apply_language(&mut self, language: LanguageCode) {
            self.events.push(RenderEvent::Language(language));
        }

        fn apply_theme(&mut self, theme: Theme) {
            self.events.push(RenderEvent::Theme(theme));
        }
    }

    /// Replies with a fixed text, or fails when `reply` is `None`.
    struct ScriptedBackend {
        reply: Option<&'static str>,
        sent: Mutex<Vec<String>>,
        languages: Mutex<Vec<LanguageCode>>,
    }

    impl ScriptedBackend {
        const fn replying(reply: &'static str) -> Self {
            Self {
                reply: Some(reply),
                sent: Mutex::new(Vec::new()),
                languages: Mutex::new(Vec::new()),
            }
        }

        const fn failing() -> Self {
            Self {
                reply: None,
                sent: Mutex::new(Vec::new()),
                languages: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> Vec<String> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl BackendClient for ScriptedBackend {
        async fn send(&self, message: &str) -> Result<String, BackendUnavailable> {
            self.sent.lock().unwrap().push(message.to_string());
            self.reply
                .map(str::to_string)
                .ok_or_else(|| BackendUnavailable::network("connection refused"))
        }

        fn language_changed(&self, language: LanguageCode) {
            self.languages.lock().unwrap().push(language);
        }
    }

    fn controller(backend: ScriptedBackend) -> ChatController<ScriptedBackend, RecordingRenderer> {
        ChatController::new(
            backend,
            RecordingRenderer::default(),
            LanguageCode::En,
            Theme::Light,
        )
    }

    fn log(controller: &ChatController<ScriptedBackend, RecordingRenderer>) -> Vec<(Sender, String)> {
        controller
            .state()
            .messages()
            .iter()
            .map(|m| (m.sender(), m.text().to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_hello_round_trip() {
        let mut chat = controller(ScriptedBackend::replying("Hi!"));

        let pending = chat.submit_user_message("Hello").unwrap();

        assert_eq!(log(&chat), [(Sender::User, "Hello".to_string())]);
        assert!(chat.state().is_busy());
        assert_eq!(chat.renderer().events.last(), Some(&RenderEvent::ShowBusy));

        let reply = pending.await;
        assert!(matches!(reply.outcome(), Ok(text) if text == "Hi!"));
        chat.receive_bot_reply(reply);

        assert_eq!(
            log(&chat),
            [
                (Sender::User, "Hello".to_string()),
                (Sender::Bot, "Hi!".to_string())
            ]
        );
        assert!(!chat.state().is_busy());
        assert_eq!(
            chat.renderer().events,
            [
                RenderEvent::Append("Hello".to_string(), Sender::User),
                RenderEvent::ShowBusy,
                RenderEvent::HideBusy,
                RenderEvent::Append("Hi!".to_string(), Sender::Bot),
            ]
        );
        assert_eq!(chat.backend().sent(), ["Hello"]);
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let mut chat = controller(ScriptedBackend::replying("unused"));

        assert!(chat.submit_user_message("").is_none());
        assert!(chat.submit_user_message("  ").is_none());
        assert!(!chat.exchange("\t\n").await);

        assert!(chat.state().messages().is_empty());
        assert!(!chat.state().is_busy());
        assert!(chat.renderer().events.is_empty());
        assert!(chat.backend().sent().is_empty());
    }

    #[tokio::test]
    async fn test_input_is_trimmed_before_sending() {
        let mut chat = controller(ScriptedBackend::replying("ok"));

        chat.exchange("  Hello  ").await;

        assert_eq!(log(&chat)[0], (Sender::User, "Hello".to_string()));
        assert_eq!(chat.backend().sent(), ["Hello"]);
    }

    #[tokio::test]
    async fn test_backend_failure_shows_fallback() {
        let mut chat = controller(ScriptedBackend::failing());

        assert!(chat.exchange("X").await);

        assert_eq!(
            log(&chat),
            [
                (Sender::User, "X".to_string()),
                (Sender::Bot, FALLBACK_REPLY.to_string())
            ]
        );
        assert!(!chat.state().is_busy());
        let events = &chat.renderer().events;
        assert_eq!(events[events.len() - 2], RenderEvent::HideBusy);
    }

    #[tokio::test]
    async fn test_busy_until_reply_is_delivered() {
        let mut chat = controller(ScriptedBackend::replying("done"));
        assert!(!chat.state().is_busy());

        let pending = chat.submit_user_message("wait").unwrap();
        assert!(chat.state().is_busy());

        let reply = pending.await;
        assert!(chat.state().is_busy());

        chat.receive_bot_reply(reply);
        assert!(!chat.state().is_busy());
    }

    #[tokio::test]
    async fn test_second_submission_while_busy_is_rejected() {
        let mut chat = controller(ScriptedBackend::replying("first reply"));

        let pending = chat.submit_user_message("first").unwrap();
        assert!(chat.submit_user_message("second").is_none());
        assert_eq!(log(&chat).len(), 1);

        chat.receive_bot_reply(pending.await);

        assert_eq!(chat.backend().sent(), ["first"]);
        assert!(chat.submit_user_message("third").is_some());
    }

    #[tokio::test]
    async fn test_dropped_reply_releases_busy_state() {
        let mut chat = controller(ScriptedBackend::replying("second reply"));

        let pending = chat.submit_user_message("first").unwrap();
        drop(pending);
        assert!(!chat.state().is_busy());

        let pending = chat.submit_user_message("second").unwrap();
        chat.receive_bot_reply(pending.await);

        assert_eq!(
            log(&chat),
            [
                (Sender::User, "first".to_string()),
                (Sender::User, "second".to_string()),
                (Sender::Bot, "second reply".to_string()),
            ]
        );
        assert_eq!(
            chat.renderer().events,
            [
                RenderEvent::Append("first".to_string(), Sender::User),
                RenderEvent::ShowBusy,
                RenderEvent::HideBusy,
                RenderEvent::Append("second".to_string(), Sender::User),
                RenderEvent::ShowBusy,
                RenderEvent::HideBusy,
                RenderEvent::Append("second reply".to_string(), Sender::Bot),
            ]
        );
    }

    #[tokio::test]
    async fn test_dropped_reply_hides_indicator_on_reset() {
        let mut chat = controller(ScriptedBackend::replying("never shown"));

        let reply = chat.submit_user_message("hello").unwrap().await;
        drop(reply);
        chat.reset_conversation();

        assert!(!chat.state().is_busy());
        assert!(chat.state().messages().is_empty());
        assert_eq!(
            &chat.renderer().events[1..],
            [RenderEvent::ShowBusy, RenderEvent::HideBusy, RenderEvent::Clear]
        );
    }

    #[tokio::test]
    async fn test_reply_for_another_chat_is_ignored() {
        let mut asked = controller(ScriptedBackend::replying("meant for asked"));
        let mut idle = controller(ScriptedBackend::replying("unused"));

        let reply = asked.submit_user_message("question").unwrap().await;
        idle.receive_bot_reply(reply);

        assert!(idle.state().messages().is_empty());
        assert!(idle.renderer().events.is_empty());
        assert!(!asked.state().is_busy());
    }

    #[tokio::test]
    async fn test_reset_clears_log() {
        let mut chat = controller(ScriptedBackend::replying("reply"));
        chat.exchange("one").await;
        chat.exchange("two").await;

        chat.reset_conversation();

        assert!(chat.state().messages().is_empty());
        assert_eq!(chat.renderer().events.last(), Some(&RenderEvent::Clear));
    }

    #[tokio::test]
    async fn test_late_reply_lands_after_reset() {
        let mut chat = controller(ScriptedBackend::replying("late"));

        let pending = chat.submit_user_message("question").unwrap();
        chat.reset_conversation();
        assert!(chat.state().messages().is_empty());
        assert!(chat.state().is_busy());

        chat.receive_bot_reply(pending.await);

        assert_eq!(log(&chat), [(Sender::Bot, "late".to_string())]);
        assert!(!chat.state().is_busy());
    }

    #[test]
    fn test_language_and_theme_setters() {
        let mut chat = controller(ScriptedBackend::replying("unused"));

        chat.set_language(LanguageCode::Hi);
        assert_eq!(chat.toggle_theme(), Theme::Dark);

        assert_eq!(chat.state().language(), LanguageCode::Hi);
        assert_eq!(chat.state().theme(), Theme::Dark);
        assert!(chat.state().messages().is_empty());
        assert!(!chat.state().is_busy());
        assert_eq!(
            chat.renderer().events,
            [
                RenderEvent::Language(LanguageCode::Hi),
                RenderEvent::Theme(Theme::Dark)
            ]
        );
        assert_eq!(
            *chat.backend().languages.lock().unwrap(),
            [LanguageCode::Hi]
        );
    }

    #[test]
    fn test_start_applies_initial_settings() {
        let mut chat = ChatController::new(
            ScriptedBackend::replying("unused"),
            RecordingRenderer::default(),
            LanguageCode::Hi,
            Theme::Dark,
        );

        chat.start();

        assert_eq!(
            chat.renderer().events,
            [
                RenderEvent::Theme(Theme::Dark),
                RenderEvent::Language(LanguageCode::Hi)
            ]
        );
    }
}
