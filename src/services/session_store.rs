use crate::error::ApiError;
use crate::models::{Session, SessionId};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Shared handle to one session; events on it are serialized by the mutex
pub type SessionHandle = Arc<Mutex<Session>>;

/// Trait for editor session storage
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Store a new session and return its id
    async fn insert(&self, session: Session) -> Result<SessionId, ApiError>;

    /// Find a session by id
    async fn find_by_id(&self, id: &SessionId) -> Result<Option<SessionHandle>, ApiError>;

    /// Drop a session and its history. Returns whether it existed.
    async fn remove(&self, id: &SessionId) -> Result<bool, ApiError>;

    /// Number of live sessions
    async fn len(&self) -> usize;
}

/// In-memory session storage
///
/// With an idle TTL, sessions untouched for longer than the TTL are dropped
/// whenever a new session is inserted, and are not returned by lookups.
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SessionHandle>>>,
    idle_ttl: Option<chrono::Duration>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl: None,
        }
    }

    /// Store that expires sessions idle for longer than `ttl`
    pub fn with_idle_ttl(ttl: Option<chrono::Duration>) -> Self {
        Self {
            idle_ttl: ttl,
            ..Self::new()
        }
    }

    fn is_stale(&self, handle: &SessionHandle) -> bool {
        let Some(ttl) = self.idle_ttl else {
            return false;
        };
        // A locked session is handling an event right now
        match handle.try_lock() {
            Ok(session) => session.is_expired(ttl),
            Err(_) => false,
        }
    }

    fn sweep(&self, sessions: &mut HashMap<SessionId, SessionHandle>) {
        let before = sessions.len();
        sessions.retain(|_, handle| !self.is_stale(handle));
        let expired = before - sessions.len();
        if expired > 0 {
            tracing::info!(expired, live = sessions.len(), "Expired idle sessions");
        }
    }
}

impl Default for InMemorySessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn insert(&self, session: Session) -> Result<SessionId, ApiError> {
        let mut sessions = self.sessions.write().await;
        self.sweep(&mut sessions);
        let mut id = SessionId::generate();
        while sessions.contains_key(&id) {
            id = SessionId::generate();
        }
        sessions.insert(id.clone(), Arc::new(Mutex::new(session)));
        tracing::debug!(session_id = %id, live = sessions.len(), "Session created");
        Ok(id)
    }

    async fn find_by_id(&self, id: &SessionId) -> Result<Option<SessionHandle>, ApiError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(id).filter(|h| !self.is_stale(h)).cloned())
    }

    async fn remove(&self, id: &SessionId) -> Result<bool, ApiError> {
        let mut sessions = self.sessions.write().await;
        let removed = sessions.remove(id).is_some();
        if removed {
            tracing::debug!(session_id = %id, live = sessions.len(), "Session removed");
        }
        Ok(removed)
    }

    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}
