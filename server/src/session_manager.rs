use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

use common::engine::tictactoe::{Board, BoardState, apply_player_move};
use common::id_generator::generate_session_id;

pub type SessionId = String;

struct Session {
    board: Board,
    last_activity: Instant,
}

impl Session {
    fn new() -> Self {
        Self {
            board: Board::new(),
            last_activity: Instant::now(),
        }
    }
}

#[derive(Clone)]
pub struct SessionManager {
    sessions: Arc<Mutex<HashMap<SessionId, Session>>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub async fn create_session(&self) -> SessionId {
        let mut sessions = self.sessions.lock().await;
        loop {
            let id = generate_session_id();
            if !sessions.contains_key(&id) {
                sessions.insert(id.clone(), Session::new());
                return id;
            }
        }
    }

    pub async fn destroy_session(&self, session_id: &str) -> bool {
        self.sessions.lock().await.remove(session_id).is_some()
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }

    /// Runs one full turn in the given session. A finished game immediately
    /// resets the session's board so the next request starts a fresh round.
    pub async fn play(
        &self,
        session_id: &str,
        position: usize,
    ) -> Result<(Option<usize>, BoardState), String> {
        let mut sessions = self.sessions.lock().await;
        let session = sessions
            .get_mut(session_id)
            .ok_or_else(|| "Invalid session ID".to_string())?;

        session.last_activity = Instant::now();

        let (computer_position, state) = apply_player_move(&mut session.board, position)?;

        if state.is_terminal() {
            session.board = Board::new();
        }

        Ok((computer_position, state))
    }

    pub async fn cleanup_inactive(&self, timeout: Duration) -> usize {
        let mut sessions = self.sessions.lock().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.last_activity.elapsed() < timeout);
        before - sessions.len()
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_created_sessions_get_unique_ids() {
        let manager = SessionManager::new();
        let first = manager.create_session().await;
        let second = manager.create_session().await;

        assert_ne!(first, second);
        assert_eq!(manager.session_count().await, 2);
    }

    #[tokio::test]
    async fn test_play_rejects_unknown_session() {
        let manager = SessionManager::new();
        assert!(manager.play("000000", 0).await.is_err());
    }

    #[tokio::test]
    async fn test_play_runs_a_turn() {
        let manager = SessionManager::new();
        let id = manager.create_session().await;

        let (computer_position, state) = manager.play(&id, 4).await.unwrap();

        assert!(computer_position.is_some());
        assert_eq!(state, BoardState::Open);
    }

    #[tokio::test]
    async fn test_play_rejects_taken_position() {
        let manager = SessionManager::new();
        let id = manager.create_session().await;

        manager.play(&id, 4).await.unwrap();
        assert!(manager.play(&id, 4).await.is_err());
    }

    #[tokio::test]
    async fn test_destroy_session() {
        let manager = SessionManager::new();
        let id = manager.create_session().await;

        assert!(manager.destroy_session(&id).await);
        assert!(!manager.destroy_session(&id).await);
    }

    #[tokio::test]
    async fn test_cleanup_removes_idle_sessions() {
        let manager = SessionManager::new();
        manager.create_session().await;
        manager.create_session().await;

        let removed = manager.cleanup_inactive(Duration::ZERO).await;

        assert_eq!(removed, 2);
        assert_eq!(manager.session_count().await, 0);
    }

    #[tokio::test]
    async fn test_cleanup_keeps_active_sessions() {
        let manager = SessionManager::new();
        manager.create_session().await;

        let removed = manager.cleanup_inactive(Duration::from_secs(3600)).await;

        assert_eq!(removed, 0);
        assert_eq!(manager.session_count().await, 1);
    }
}
