//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! At most one notice is visible. A new notice replaces the current one
//! immediately; the timers scheduled for the old one still fire but carry a
//! stale id and do nothing.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

/// How long a notice stays fully visible.
pub const DISPLAY_MS: u64 = 3000;
/// Length of the exit animation before removal.
pub const EXIT_MS: u64 = 300;

/// Identifies one shown notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NoticeId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticePhase {
    Visible,
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: NoticeId,
    pub message: String,
    pub phase: NoticePhase,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    current: Option<Notice>,
    seq: u64,
}

impl NotificationState {
    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }

    /// Show `message`, dropping whatever notice was up.
    pub fn show(&mut self, message: impl Into<String>) -> NoticeId {
        self.seq += 1;
        let id = NoticeId(self.seq);
        self.current = Some(Notice { id, message: message.into(), phase: NoticePhase::Visible });
        id
    }

    /// Start the exit animation. Returns `false` if `id` is no longer current.
    pub fn begin_exit(&mut self, id: NoticeId) -> bool {
        match self.current.as_mut() {
            Some(notice) if notice.id == id => {
                notice.phase = NoticePhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Remove the notice. Returns `false` if `id` is no longer current.
    pub fn dismiss(&mut self, id: NoticeId) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
