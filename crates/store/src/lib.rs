//! # HireSync Store
//!
//! In-memory session storage for the HireSync API. Scheduling sessions are
//! process-wide keyed state with a create/read/delete lifecycle and no
//! persistence guarantee across restarts; the store is injected into the API
//! rather than living in a global.
//!
//! Entries expire after a configurable TTL. Expired entries are never
//! returned by reads and are swept on writes and via [`SessionStore::purge_expired`].

pub mod models;

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, Utc};
use hiresync_core::models::availability::DatedInterviewSlot;
use hiresync_core::models::schedule::{Candidate, JobPosting};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::StoredSession;

/// Shared, clonable handle to the in-memory session map.
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, StoredSession>>>,
    ttl: Duration,
}

impl SessionStore {
    /// Creates an empty store whose entries expire `ttl` after creation.
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Creates a session and returns the stored record, including its
    /// generated ID. Sweeps expired entries while holding the write lock.
    pub async fn create(
        &self,
        candidate: Candidate,
        job: JobPosting,
        recommended_slot: Option<DatedInterviewSlot>,
        available_slots: Vec<DatedInterviewSlot>,
    ) -> StoredSession {
        let session = StoredSession {
            id: Uuid::new_v4(),
            candidate,
            job,
            recommended_slot,
            available_slots,
            created_at: Utc::now(),
        };

        tracing::debug!("Creating session: id={}", session.id);

        let mut sessions = self.sessions.write().await;
        let now = Utc::now();
        sessions.retain(|_, s| now - s.created_at < self.ttl);
        sessions.insert(session.id, session.clone());
        session
    }

    /// Looks up a session by ID. An expired session is indistinguishable
    /// from a missing one.
    pub async fn get(&self, id: Uuid) -> Option<StoredSession> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(&id)?;
        if Utc::now() - session.created_at >= self.ttl {
            return None;
        }
        Some(session.clone())
    }

    /// Deletes a session, returning whether a live entry was removed.
    pub async fn delete(&self, id: Uuid) -> bool {
        tracing::debug!("Deleting session: id={}", id);
        let mut sessions = self.sessions.write().await;
        match sessions.remove(&id) {
            Some(session) => Utc::now() - session.created_at < self.ttl,
            None => false,
        }
    }

    /// Removes all expired sessions, returning how many were dropped.
    pub async fn purge_expired(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        let now = Utc::now();
        let before = sessions.len();
        sessions.retain(|_, s| now - s.created_at < self.ttl);
        before - sessions.len()
    }

    /// Number of entries currently held, expired or not.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
