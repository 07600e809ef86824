use std::sync::{Arc, Mutex, MutexGuard};

/// Shared log of user-facing messages. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct MessageService {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MessageService {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add(&self, message: impl Into<String>) {
        self.lock().push(message.into());
    }

    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }
}

pub struct MessagesView {
    messages: MessageService,
}

impl MessagesView {
    pub fn new(messages: MessageService) -> Self {
        Self { messages }
    }

    pub fn render(&self) -> String {
        let messages = self.messages.messages();
        if messages.is_empty() {
            return String::new();
        }
        let mut out = String::from("Messages\n");
        for message in messages {
            out.push_str(&message);
            out.push('\n');
        }
        out
    }

    pub fn clear(&self) {
        self.messages.clear();
    }
}
