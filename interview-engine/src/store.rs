use crate::state::InterviewState;
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Handle to one session's state; the mutex serializes all access to it
pub type SessionHandle = Arc<Mutex<InterviewState>>;

/// Keyed store of interview sessions
///
/// The engine is the only mutator of the states behind the handles.
/// Implementations must support concurrent access across session
/// identifiers; per-identifier serialization is provided by the handle's
/// mutex. The in-memory implementation is process-lifetime scoped; a
/// durable implementation can be swapped in behind this trait.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the session, creating an empty one on first reference
    async fn get_or_create(&self, session_id: &str) -> SessionHandle;

    /// Fetch the session without creating it
    async fn get(&self, session_id: &str) -> Option<SessionHandle>;
}

/// In-memory session store backed by a concurrent map
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    sessions: DashMap<String, SessionHandle>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get_or_create(&self, session_id: &str) -> SessionHandle {
        let entry = self
            .sessions
            .entry(session_id.to_string())
            .or_insert_with(|| {
                debug!(session_id = session_id, "Creating interview session");
                Arc::new(Mutex::new(InterviewState::new(session_id)))
            });
        Arc::clone(entry.value())
    }

    async fn get(&self, session_id: &str) -> Option<SessionHandle> {
        self.sessions
            .get(session_id)
            .map(|entry| Arc::clone(entry.value()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_does_not_create() {
        let store = InMemorySessionStore::new();
        assert!(store.get("missing").await.is_none());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_get_or_create_returns_same_handle() {
        let store = InMemorySessionStore::new();
        let first = store.get_or_create("s1").await;
        let second = store.get_or_create("s1").await;
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_sessions_are_independent() {
        let store = InMemorySessionStore::new();
        let one = store.get_or_create("s1").await;
        let two = store.get_or_create("s2").await;

        one.lock().await.current_field = Some("symptoms".to_string());
        assert!(two.lock().await.current_field.is_none());
    }
}
