// Session service - Mount and unmount view sessions
use crate::application::clock::Clock;
use crate::application::data_provider::ViewDataProvider;
use crate::application::prediction_service::{PredictionSource, refresh_predictions};
use crate::application::scheduler::SchedulerError;
use crate::application::tick::RandomSource;
use crate::application::ticker::{TickPlan, run_ticker};
use crate::application::view_session::ViewSession;
use crate::domain::view::ViewKind;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use uuid::Uuid;

pub type RandomFactory = Arc<dyn Fn() -> Box<dyn RandomSource> + Send + Sync>;

struct SessionEntry {
    session: Arc<ViewSession>,
    tasks: Vec<JoinHandle<()>>,
    /// Clock time of the last mount or lookup, in milliseconds
    last_seen_ms: AtomicU64,
}

impl SessionEntry {
    fn touch(&self, now: Duration) {
        self.last_seen_ms.store(now.as_millis() as u64, Ordering::Relaxed);
    }

    /// Idle means no open stream and no lookup for at least `limit`
    fn is_idle(&self, now: Duration, limit: Duration) -> bool {
        let last_seen = Duration::from_millis(self.last_seen_ms.load(Ordering::Relaxed));
        self.session.subscriber_count() == 0 && now.saturating_sub(last_seen) >= limit
    }
}

#[derive(Clone)]
pub struct SessionService {
    provider: Arc<dyn ViewDataProvider>,
    predictions: Option<Arc<dyn PredictionSource>>,
    clock: Arc<dyn Clock>,
    plan: TickPlan,
    random: RandomFactory,
    idle_timeout: Option<Duration>,
    sessions: Arc<RwLock<HashMap<Uuid, SessionEntry>>>,
}

impl SessionService {
    pub fn new(
        provider: Arc<dyn ViewDataProvider>,
        predictions: Option<Arc<dyn PredictionSource>>,
        clock: Arc<dyn Clock>,
        plan: TickPlan,
        random: RandomFactory,
    ) -> Self {
        Self {
            provider,
            predictions,
            clock,
            plan,
            random,
            idle_timeout: None,
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Reclaim sessions left idle for `timeout`. `None` keeps them until unmounted.
    pub fn with_idle_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.idle_timeout = timeout;
        self
    }

    /// Seed a fresh session for `kind` and start its tick and prediction tasks
    pub async fn mount(&self, kind: ViewKind) -> Result<Arc<ViewSession>, SchedulerError> {
        let (scheduler, bindings) = self.plan.schedule_for(kind, self.clock.now())?;
        let session = Arc::new(ViewSession::new(self.provider.seed(kind)));

        let mut tasks = vec![tokio::spawn(run_ticker(
            session.clone(),
            scheduler,
            bindings,
            self.clock.clone(),
            (self.random)(),
        ))];

        if kind == ViewKind::Insights {
            if let Some(source) = &self.predictions {
                let source = source.clone();
                let target = session.clone();
                let input = self.provider.prediction_input();
                tasks.push(tokio::spawn(async move {
                    refresh_predictions(&target, source.as_ref(), &input).await;
                }));
            }
        }

        self.sessions.write().await.insert(
            session.id(),
            SessionEntry {
                session: session.clone(),
                tasks,
                last_seen_ms: AtomicU64::new(self.clock.now().as_millis() as u64),
            },
        );

        tracing::info!("Mounted {} view as session {}", kind, session.id());
        Ok(session)
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<ViewSession>> {
        let sessions = self.sessions.read().await;
        let entry = sessions.get(&id)?;
        entry.touch(self.clock.now());
        Some(entry.session.clone())
    }

    /// Tear a session down. Returns false if it was not mounted.
    pub async fn unmount(&self, id: Uuid) -> bool {
        let Some(entry) = self.sessions.write().await.remove(&id) else {
            return false;
        };

        entry.session.unmount().await;
        for task in entry.tasks {
            task.abort();
        }

        tracing::info!("Unmounted {} session {}", entry.session.kind(), id);
        true
    }

    pub async fn unmount_all(&self) -> usize {
        let ids: Vec<Uuid> = self.sessions.read().await.keys().copied().collect();
        let mut count = 0;
        for id in ids {
            if self.unmount(id).await {
                count += 1;
            }
        }
        count
    }

    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Unmount every idle session. Returns how many were reclaimed.
    pub async fn reap_idle(&self) -> usize {
        let Some(limit) = self.idle_timeout else {
            return 0;
        };

        let now = self.clock.now();
        let idle: Vec<Uuid> = self
            .sessions
            .read()
            .await
            .iter()
            .filter(|(_, entry)| entry.is_idle(now, limit))
            .map(|(id, _)| *id)
            .collect();

        let mut count = 0;
        for id in idle {
            if self.unmount(id).await {
                count += 1;
            }
        }
        if count > 0 {
            tracing::info!("Reclaimed {} idle sessions", count);
        }
        count
    }

    /// Sweep for idle sessions every `interval` until the task is dropped
    pub async fn run_reaper(self, interval: Duration) {
        if self.idle_timeout.is_none() {
            return;
        }

        let mut next = self.clock.now() + interval;
        loop {
            self.clock.sleep_until(next).await;
            self.reap_idle().await;
            next += interval;
        }
    }
}
