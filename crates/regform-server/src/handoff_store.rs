// File: src/handoff_store.rs
// Purpose: One-shot in-memory hand-off of accepted submissions to the results page

use regform::Submission;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Accepted submissions keyed by the token carried in the redirect.
///
/// Each payload can be taken exactly once. When full, the oldest waiting
/// payload is dropped to make room.
#[derive(Clone)]
pub struct HandoffStore {
    inner: Arc<RwLock<Pending>>,
    capacity: usize,
}

#[derive(Default)]
struct Pending {
    entries: HashMap<Uuid, Submission>,
    order: VecDeque<Uuid>,
}

impl HandoffStore {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Pending::default())),
            capacity: capacity.max(1),
        }
    }

    /// Park a submission and return the token that retrieves it
    pub async fn put(&self, submission: Submission) -> Uuid {
        let token = Uuid::new_v4();
        let mut pending = self.inner.write().await;

        while pending.order.len() >= self.capacity {
            if let Some(oldest) = pending.order.pop_front() {
                pending.entries.remove(&oldest);
                tracing::warn!(%oldest, "handoff store full, dropping oldest submission");
            }
        }

        pending.entries.insert(token, submission);
        pending.order.push_back(token);
        token
    }

    /// Remove and return the submission for `token`, if still waiting
    pub async fn take(&self, token: &Uuid) -> Option<Submission> {
        let mut pending = self.inner.write().await;
        let submission = pending.entries.remove(token)?;
        pending.order.retain(|t| t != token);
        Some(submission)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
