// A mounted view and the display state it owns
use crate::application::tick::{RandomSource, TickAction, apply_tick};
use crate::domain::prediction::{PredictionResponse, merge_predictions};
use crate::domain::view::{ViewKind, ViewState};
use tokio::sync::{Mutex, broadcast};
use uuid::Uuid;

const UPDATE_CHANNEL_CAPACITY: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Applied,
    Unchanged,
    Unmounted,
}

struct SessionInner {
    state: ViewState,
    mounted: bool,
}

/// All mutation goes through `inner`, and `unmount` flips `mounted` under
/// the same lock, so nothing mutates the state once it has been discarded.
pub struct ViewSession {
    id: Uuid,
    kind: ViewKind,
    inner: Mutex<SessionInner>,
    updates: broadcast::Sender<ViewState>,
}

impl ViewSession {
    pub fn new(state: ViewState) -> Self {
        let (updates, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        Self {
            id: Uuid::new_v4(),
            kind: state.kind,
            inner: Mutex::new(SessionInner {
                state,
                mounted: true,
            }),
            updates,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> ViewKind {
        self.kind
    }

    pub async fn snapshot(&self) -> ViewState {
        self.inner.lock().await.state.clone()
    }

    pub async fn is_mounted(&self) -> bool {
        self.inner.lock().await.mounted
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ViewState> {
        self.updates.subscribe()
    }

    /// Number of live update streams
    pub fn subscriber_count(&self) -> usize {
        self.updates.receiver_count()
    }

    pub async fn apply(&self, action: &TickAction, rng: &mut dyn RandomSource) -> TickOutcome {
        let mut inner = self.inner.lock().await;
        if !inner.mounted {
            return TickOutcome::Unmounted;
        }

        if apply_tick(&mut inner.state, action, rng) {
            // No subscribers is fine
            let _ = self.updates.send(inner.state.clone());
            TickOutcome::Applied
        } else {
            TickOutcome::Unchanged
        }
    }

    /// Merge a prediction response. Returns `None` once unmounted.
    pub async fn merge_predictions(&self, response: &PredictionResponse) -> Option<usize> {
        let mut inner = self.inner.lock().await;
        if !inner.mounted {
            return None;
        }

        let merged = merge_predictions(&mut inner.state.predictions, response);
        if merged > 0 {
            inner.state.touch();
            let _ = self.updates.send(inner.state.clone());
        }
        Some(merged)
    }

    /// Returns true on the first call only.
    pub async fn unmount(&self) -> bool {
        let mut inner = self.inner.lock().await;
        std::mem::replace(&mut inner.mounted, false)
    }
}
