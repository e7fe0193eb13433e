//! User-visible notifications.
//!
//! DESIGN
//! ======
//! The board never blocks on its notification consumer. Notices go through a
//! bounded channel with `try_send`; when the consumer falls behind or has gone
//! away the notice is dropped and a warning is logged instead.

#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tracing::warn;

use crate::error::BoardError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Board contents could not be fetched.
    LoadFailure,
    /// A durable write failed; local state was kept.
    WriteFailure,
    /// An action needs a signed-in actor.
    AuthRequired,
    /// A request was refused (unknown card or column, drag already active).
    Rejected,
}

/// One message for the host's toast / status area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub code: &'static str,
    pub message: String,
    /// Whether the host should hold the user until they acknowledge it.
    pub blocking: bool,
}

impl Notice {
    #[must_use]
    pub fn from_error(err: &BoardError) -> Self {
        let kind = match err {
            BoardError::LoadFailure(_) => NoticeKind::LoadFailure,
            BoardError::WriteFailure { .. } => NoticeKind::WriteFailure,
            BoardError::AuthRequired => NoticeKind::AuthRequired,
            BoardError::CardNotFound(_)
            | BoardError::UnknownColumn(_)
            | BoardError::GestureInProgress(_)
            | BoardError::InvalidColumns(_)
            | BoardError::Config(_) => NoticeKind::Rejected,
        };
        Self { kind, code: err.error_code(), message: err.to_string(), blocking: kind == NoticeKind::AuthRequired }
    }
}

/// Sending half of the notification channel. Cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    tx: Option<mpsc::Sender<Notice>>,
}

impl Notifier {
    /// A notifier that discards everything.
    #[must_use]
    pub fn disabled() -> Self {
        Self { tx: None }
    }

    /// A notifier paired with the receiver the host drains.
    #[must_use]
    pub fn channel(capacity: usize) -> (Self, mpsc::Receiver<Notice>) {
        let (tx, rx) = mpsc::channel(capacity.max(1));
        (Self { tx: Some(tx) }, rx)
    }

    /// Best-effort, non-blocking delivery.
    pub fn notify(&self, notice: Notice) {
        let Some(tx) = &self.tx else {
            return;
        };

        match tx.try_send(notice) {
            Ok(()) => {}
            Err(TrySendError::Full(notice)) => {
                warn!(code = notice.code, message = %notice.message, "notice queue full; dropping notice");
            }
            Err(TrySendError::Closed(notice)) => {
                warn!(code = notice.code, message = %notice.message, "notice queue closed; dropping notice");
            }
        }
    }

    /// Convenience for reporting a [`BoardError`].
    pub fn report(&self, err: &BoardError) {
        self.notify(Notice::from_error(err));
    }
}
