use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{BackendClient, BackendUnavailable};
use crate::i18n::LanguageCode;

/// Offline backend that answers with the active language's canned replies.
///
/// Replies rotate round-robin and never fail.
pub struct CannedBackend {
    language: RwLock<LanguageCode>,
    next: AtomicUsize,
}

impl CannedBackend {
    pub const fn new(language: LanguageCode) -> Self {
        Self {
            language: RwLock::new(language),
            next: AtomicUsize::new(0),
        }
    }

    fn current_language(&self) -> LanguageCode {
        // A poisoned lock still holds a valid language.
        *self
            .language
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn next_reply(&self) -> &'static str {
        let replies = self.current_language().strings().canned_replies;
        let index = self.next.fetch_add(1, Ordering::Relaxed);
        replies[index % replies.len()]
    }
}

impl BackendClient for CannedBackend {
    async fn send(&self, _message: &str) -> Result<String, BackendUnavailable> {
        Ok(self.next_reply().to_string())
    }

    fn language_changed(&self, language: LanguageCode) {
        *self
            .language
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = language;
    }
}
