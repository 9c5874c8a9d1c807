use mosaic_core::EditorSession;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Editor session identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    /// Random 24-character alphanumeric id
    pub fn generate() -> Self {
        use rand::Rng;
        let id: String = rand::thread_rng()
            .sample_iter(&rand::distributions::Alphanumeric)
            .take(24)
            .map(char::from)
            .collect();
        Self(id)
    }

    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An editor session with bookkeeping timestamps
#[derive(Debug)]
pub struct Session {
    pub editor: EditorSession,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub last_active: chrono::DateTime<chrono::Utc>,
}

impl Session {
    pub fn new(editor: EditorSession) -> Self {
        let now = chrono::Utc::now();
        Self {
            editor,
            created_at: now,
            last_active: now,
        }
    }

    pub fn touch(&mut self) {
        self.last_active = chrono::Utc::now();
    }

    /// Idle for longer than `ttl`
    pub fn is_expired(&self, ttl: chrono::Duration) -> bool {
        chrono::Utc::now() - self.last_active > ttl
    }
}
