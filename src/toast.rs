//! Transient notifications

use crate::config::ClientConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

impl Toast {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, text: text.into() }
    }

    /// How long the toast stays on screen
    pub fn duration_ms(&self, config: &ClientConfig) -> u32 {
        match self.kind {
            ToastKind::Success => config.success_toast_ms,
            ToastKind::Error => config.error_toast_ms,
        }
    }
}

/// Toasts currently on screen, oldest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    items: Vec<(u64, Toast)>,
    next_id: u64,
}

impl ToastQueue {
    /// Show a toast; the returned id is what [`ToastQueue::dismiss`] takes
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push((id, toast));
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|(item_id, _)| *item_id != id);
    }

    pub fn items(&self) -> &[(u64, Toast)] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
