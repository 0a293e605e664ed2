//! Swipe sessions — one live, ranked deck per user.
//!
//! A deck is re-ranked wholesale when the candidate profile changes. Profile
//! updates can arrive late (resume analysis is slow), so every refresh carries
//! a `RefreshTicket` stamped with a generation from a process-wide counter.
//! Only the ticket matching the session's latest generation may replace the
//! deck; anything older, or addressed to a session that has since ended or
//! been restarted, is discarded.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::job::ScoredJob;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Permission to replace one user's deck, valid until a newer ticket is
/// issued or the session ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket {
    pub user_id: Uuid,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RefreshOutcome {
    Applied,
    Stale,
    NoSession,
}

#[derive(Debug, Error, PartialEq)]
pub enum SwipeError {
    #[error("no active swipe session")]
    NoSession,
    #[error("job {0} is not in the current deck")]
    NotInDeck(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub user_id: Uuid,
    pub generation: u64,
    pub started_at: DateTime<Utc>,
    pub swiped_count: usize,
    pub saved_count: usize,
    pub remaining: usize,
    pub deck: Vec<ScoredJob>,
}

#[derive(Debug)]
struct SwipeSession {
    generation: u64,
    started_at: DateTime<Utc>,
    deck: Vec<ScoredJob>,
    swiped: HashMap<String, SwipeDirection>,
}

impl SwipeSession {
    fn snapshot(&self, user_id: Uuid) -> SessionSnapshot {
        SessionSnapshot {
            user_id,
            generation: self.generation,
            started_at: self.started_at,
            swiped_count: self.swiped.len(),
            saved_count: self
                .swiped
                .values()
                .filter(|d| **d == SwipeDirection::Right)
                .count(),
            remaining: self.deck.len(),
            deck: self.deck.clone(),
        }
    }
}

/// All live sessions. Cheap to clone; clones share state.
#[derive(Clone, Default)]
pub struct SessionRegistry {
    sessions: Arc<RwLock<HashMap<Uuid, SwipeSession>>>,
    generations: Arc<AtomicU64>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_generation(&self) -> u64 {
        self.generations.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Starts (or restarts) a session with a freshly ranked deck.
    /// Tickets issued for a previous session become stale.
    pub async fn start(&self, user_id: Uuid, deck: Vec<ScoredJob>) -> SessionSnapshot {
        let session = SwipeSession {
            generation: self.next_generation(),
            started_at: Utc::now(),
            deck,
            swiped: HashMap::new(),
        };
        let snapshot = session.snapshot(user_id);
        self.sessions.write().await.insert(user_id, session);
        snapshot
    }

    pub async fn snapshot(&self, user_id: Uuid) -> Option<SessionSnapshot> {
        self.sessions
            .read()
            .await
            .get(&user_id)
            .map(|s| s.snapshot(user_id))
    }

    /// Ends a session. Returns false if there was none.
    pub async fn end(&self, user_id: Uuid) -> bool {
        self.sessions.write().await.remove(&user_id).is_some()
    }

    /// Issues a ticket for a re-rank, superseding any ticket issued before it.
    /// `None` when the user has no live session.
    pub async fn begin_refresh(&self, user_id: Uuid) -> Option<RefreshTicket> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&user_id)?;
        session.generation = self.next_generation();
        Some(RefreshTicket {
            user_id,
            generation: session.generation,
        })
    }

    /// Replaces the deck if `ticket` is still the latest. Cards already swiped
    /// in this session never come back.
    pub async fn apply_refresh(
        &self,
        ticket: RefreshTicket,
        ranking: Vec<ScoredJob>,
    ) -> RefreshOutcome {
        let mut sessions = self.sessions.write().await;
        let Some(session) = sessions.get_mut(&ticket.user_id) else {
            return RefreshOutcome::NoSession;
        };
        if session.generation != ticket.generation {
            return RefreshOutcome::Stale;
        }

        session.deck = ranking
            .into_iter()
            .filter(|s| !session.swiped.contains_key(&s.job.id))
            .collect();
        RefreshOutcome::Applied
    }

    /// The card for `job_id` if it is still in the deck. Leaves the deck as is.
    pub async fn card(&self, user_id: Uuid, job_id: &str) -> Result<ScoredJob, SwipeError> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(&user_id).ok_or(SwipeError::NoSession)?;
        session
            .deck
            .iter()
            .find(|s| s.job.id == job_id)
            .cloned()
            .ok_or_else(|| SwipeError::NotInDeck(job_id.to_string()))
    }

    /// Removes `job_id` from the deck and returns the card.
    pub async fn swipe(
        &self,
        user_id: Uuid,
        job_id: &str,
        direction: SwipeDirection,
    ) -> Result<ScoredJob, SwipeError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&user_id).ok_or(SwipeError::NoSession)?;

        let position = session
            .deck
            .iter()
            .position(|s| s.job.id == job_id)
            .ok_or_else(|| SwipeError::NotInDeck(job_id.to_string()))?;

        let card = session.deck.remove(position);
        session.swiped.insert(card.job.id.clone(), direction);
        Ok(card)
    }
}
