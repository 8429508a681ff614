// Async driver that applies scheduled ticks to a session
use crate::application::clock::Clock;
use crate::application::scheduler::{SchedulerError, TaskId, TickScheduler};
use crate::application::tick::{RandomSource, TickAction};
use crate::application::view_session::{TickOutcome, ViewSession};
use crate::domain::view::ViewKind;
use std::sync::Arc;
use std::time::Duration;

/// Which ticks a mounted view gets and how they behave
#[derive(Debug, Clone, PartialEq)]
pub struct TickPlan {
    pub sensor_period: Duration,
    pub sensor_title: String,
    pub sensor_delta: f64,
    pub header_period: Duration,
    pub header_max_xp_gain: u32,
}

impl Default for TickPlan {
    fn default() -> Self {
        Self {
            sensor_period: Duration::from_millis(5_000),
            sensor_title: "Avg Temperature".to_string(),
            sensor_delta: 0.2,
            header_period: Duration::from_millis(30_000),
            header_max_xp_gain: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickBinding {
    pub task: TaskId,
    pub action: TickAction,
}

impl TickPlan {
    /// Build the schedule for `kind`, starting at `start`. Only the dashboard
    /// drifts a sensor; every view carries the header tick.
    pub fn schedule_for(
        &self,
        kind: ViewKind,
        start: Duration,
    ) -> Result<(TickScheduler, Vec<TickBinding>), SchedulerError> {
        let mut scheduler = TickScheduler::new(start);
        let mut bindings = Vec::new();

        if kind == ViewKind::Dashboard {
            let task = scheduler.every("sensor-drift", self.sensor_period)?;
            bindings.push(TickBinding {
                task,
                action: TickAction::SensorDrift {
                    title: self.sensor_title.clone(),
                    delta: self.sensor_delta,
                },
            });
        }

        let task = scheduler.every("header-xp", self.header_period)?;
        bindings.push(TickBinding {
            task,
            action: TickAction::HeaderXp {
                max_gain: self.header_max_xp_gain,
            },
        });

        Ok((scheduler, bindings))
    }
}

/// Runs until the session is unmounted or the schedule is empty.
pub async fn run_ticker(
    session: Arc<ViewSession>,
    mut scheduler: TickScheduler,
    bindings: Vec<TickBinding>,
    clock: Arc<dyn Clock>,
    mut rng: Box<dyn RandomSource>,
) {
    while let Some(deadline) = scheduler.next_deadline() {
        clock.sleep_until(deadline).await;

        for task in scheduler.due(clock.now()) {
            let Some(binding) = bindings.iter().find(|b| b.task == task) else {
                continue;
            };

            match session.apply(&binding.action, rng.as_mut()).await {
                TickOutcome::Unmounted => {
                    tracing::debug!("Session {} unmounted, ticker exiting", session.id());
                    return;
                }
                TickOutcome::Applied => {
                    tracing::debug!(
                        "Applied {} tick to session {}",
                        scheduler.name(task).unwrap_or("unnamed"),
                        session.id()
                    );
                }
                TickOutcome::Unchanged => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::clock::{ManualClock, TokioClock};
    use crate::application::tick::SequenceRandom;
    use crate::domain::sensor::{SensorReading, SensorStatus, Trend};
    use crate::domain::view::ViewState;

    fn dashboard_session() -> Arc<ViewSession> {
        let mut state = ViewState::empty(ViewKind::Dashboard);
        state.sensors = vec![
            SensorReading::new("Avg Temperature", "22.5", "°C", SensorStatus::Online, Trend::Up, "+0.3°"),
            SensorReading::new("Humidity", "68", "%", SensorStatus::Online, Trend::Stable, "±2%"),
        ];
        Arc::new(ViewSession::new(state))
    }

    fn spawn_ticker(
        session: &Arc<ViewSession>,
        kind: ViewKind,
        clock: Arc<dyn Clock>,
        samples: Vec<f64>,
    ) -> tokio::task::JoinHandle<()> {
        let (scheduler, bindings) = TickPlan::default().schedule_for(kind, clock.now()).unwrap();
        tokio::spawn(run_ticker(
            session.clone(),
            scheduler,
            bindings,
            clock,
            Box::new(SequenceRandom::new(samples)),
        ))
    }

    #[test]
    fn test_schedule_for_dashboard_and_other_views() {
        let plan = TickPlan::default();

        let (_, bindings) = plan.schedule_for(ViewKind::Dashboard, Duration::ZERO).unwrap();
        assert_eq!(bindings.len(), 2);
        assert!(matches!(bindings[0].action, TickAction::SensorDrift { .. }));

        let (_, bindings) = plan.schedule_for(ViewKind::Wind, Duration::ZERO).unwrap();
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].action, TickAction::HeaderXp { max_gain: 10 });
    }

    #[test]
    fn test_schedule_for_rejects_zero_period() {
        let plan = TickPlan {
            header_period: Duration::ZERO,
            ..TickPlan::default()
        };
        assert!(plan.schedule_for(ViewKind::Map, Duration::ZERO).is_err());
    }

    #[tokio::test]
    async fn test_manual_clock_drives_sensor_ticks() {
        let session = dashboard_session();
        let clock = Arc::new(ManualClock::new());
        let mut rx = session.subscribe();
        let handle = spawn_ticker(&session, ViewKind::Dashboard, clock.clone(), vec![0.0]);

        clock.advance(Duration::from_millis(5_000));
        let first = rx.recv().await.unwrap();
        assert_eq!(first.sensors[0].value, "22.4");

        clock.advance(Duration::from_millis(5_000));
        let second = rx.recv().await.unwrap();
        assert_eq!(second.sensors[0].value, "22.3");
        assert_eq!(second.sensors[1], session.snapshot().await.sensors[1]);
        assert_eq!(second.sensors[1].value, "68");

        handle.abort();
    }

    #[tokio::test]
    async fn test_unmount_before_tick_prevents_mutation() {
        let session = dashboard_session();
        let clock = Arc::new(ManualClock::new());
        let before = session.snapshot().await;
        let handle = spawn_ticker(&session, ViewKind::Dashboard, clock.clone(), vec![0.9]);

        session.unmount().await;
        clock.advance(Duration::from_secs(60));

        // The ticker observes the unmount on its first due tick and exits
        handle.await.unwrap();
        assert_eq!(session.snapshot().await, before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_clock_header_tick_every_30s() {
        let mut state = ViewState::empty(ViewKind::Health);
        state.header.xp = 100;
        let session = Arc::new(ViewSession::new(state));
        let clock: Arc<dyn Clock> = Arc::new(TokioClock::new());
        let mut rx = session.subscribe();
        let handle = spawn_ticker(&session, ViewKind::Health, clock, vec![0.55]);

        let update = rx.recv().await.unwrap();
        assert_eq!(update.header.xp, 105);
        assert_eq!(update.tick_count, 1);

        let update = rx.recv().await.unwrap();
        assert_eq!(update.header.xp, 110);

        handle.abort();
    }
}
