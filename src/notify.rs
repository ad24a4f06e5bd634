/// Toast notification queue

const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            NotificationKind::Info => "notification-info",
            NotificationKind::Success => "notification-success",
            NotificationKind::Warning => "notification-warning",
            NotificationKind::Error => "notification-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    /// Exit animation is playing
    pub leaving: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NotificationQueue {
    next_id: u64,
    items: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    /// Queue a toast and return its id.
    ///
    /// At most four toasts stay visible; pushing a fifth drops the oldest
    /// immediately, before its lifetime runs out.
    pub fn push(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;

        self.items.push(Notification {
            id,
            message: message.into(),
            kind,
            leaving: false,
        });

        if self.items.len() > MAX_VISIBLE {
            let drain = self.items.len() - MAX_VISIBLE;
            self.items.drain(0..drain);
        }

        id
    }

    pub fn mark_leaving(&mut self, id: u64) -> bool {
        self.items
            .iter_mut()
            .find(|n| n.id == id)
            .map(|n| {
                n.leaving = true;
            })
            .is_some()
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let original_len = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() < original_len
    }
}
