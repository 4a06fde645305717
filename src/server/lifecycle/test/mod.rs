use super::*;
use crate::server::{
    error::database::DatabaseError,
    lifecycle::shutdown::{ShutdownReason, ShutdownSignal},
};
use async_trait::async_trait;
use axum::routing::get;
use sea_orm::DbErr;
use std::{
    net::{Ipv4Addr, SocketAddr},
    sync::{Arc, Mutex},
    time::Duration,
};
use tokio::{sync::watch, task::JoinHandle, time::timeout};


const WAIT: Duration = Duration::from_secs(5);

/// Observable steps recorded by the fake database and the test router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Connect,
    RouterBuilt,
    RequestStarted,
    RequestCompleted,
    Disconnect,
}

/// Shared, ordered record of [`Event`]s.
#[derive(Clone, Default)]
struct EventLog(Arc<Mutex<Vec<Event>>>);

impl EventLog {
    fn push(&self, event: Event) {
        self.0.lock().unwrap().push(event);
    }

    fn snapshot(&self) -> Vec<Event> {
        self.0.lock().unwrap().clone()
    }

    fn count(&self, event: Event) -> usize {
        self.snapshot().iter().filter(|e| **e == event).count()
    }

    /// Polls until `event` has been recorded.
    async fn wait_for(&self, event: Event) {
        timeout(WAIT, async {
            while self.count(event) == 0 {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("event was never recorded");
    }
}

/// Database stand-in that records calls and fails on request.
#[derive(Clone, Default)]
struct FakeDatabase {
    events: EventLog,
    fail_connect: bool,
    fail_disconnect: bool,
    connect_delay: Option<Duration>,
}

#[async_trait]
impl DatabaseLifecycle for FakeDatabase {
    type Handle = EventLog;

    async fn connect(&self) -> Result<EventLog, DatabaseError> {
        self.events.push(Event::Connect);

        if let Some(delay) = self.connect_delay {
            tokio::time::sleep(delay).await;
        }

        if self.fail_connect {
            return Err(DatabaseError::Connect(DbErr::Custom(
                "connection refused".to_string(),
            )));
        }

        Ok(self.events.clone())
    }

    async fn disconnect(&self) -> Result<(), DatabaseError> {
        self.events.push(Event::Disconnect);

        if self.fail_disconnect {
            return Err(DatabaseError::Disconnect(DbErr::Custom(
                "pool already closed".to_string(),
            )));
        }

        Ok(())
    }
}

/// Router used by the controller tests.
///
/// - `/ping` answers immediately
/// - `/slow` takes 300ms and records its start and completion
/// - `/hang` records its start and never completes in test time
fn test_app(events: EventLog) -> Router {
    events.push(Event::RouterBuilt);

    let slow_events = events.clone();
    let hang_events = events;

    Router::new()
        .route("/ping", get(|| async { "pong" }))
        .route(
            "/slow",
            get(move || async move {
                slow_events.push(Event::RequestStarted);
                tokio::time::sleep(Duration::from_millis(300)).await;
                slow_events.push(Event::RequestCompleted);
                "done"
            }),
        )
        .route(
            "/hang",
            get(move || async move {
                hang_events.push(Event::RequestStarted);
                tokio::time::sleep(Duration::from_secs(60)).await;
                "never"
            }),
        )
}

fn loopback() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, 0))
}

/// A controller running in the background with handles for driving it.
struct Running {
    state: watch::Receiver<LifecycleState>,
    shutdown: ShutdownSignal,
    task: JoinHandle<ExitStatus>,
}

impl Running {
    fn spawn(database: FakeDatabase, addr: SocketAddr, drain_timeout: Duration) -> Self {
        let controller = LifecycleController::new(database, addr, drain_timeout);
        let state = controller.subscribe();
        let shutdown = ShutdownSignal::new();

        let task = tokio::spawn(controller.run(test_app, shutdown.clone()));

        Self {
            state,
            shutdown,
            task,
        }
    }

    /// Waits for the controller to either listen or stop, returning the state reached.
    async fn settled(&mut self) -> LifecycleState {
        *timeout(
            WAIT,
            self.state.wait_for(|state| {
                matches!(
                    state,
                    LifecycleState::Listening(_) | LifecycleState::Stopped(_)
                )
            }),
        )
        .await
        .expect("controller did not settle")
        .expect("controller dropped without settling")
    }

    async fn listening_addr(&mut self) -> SocketAddr {
        match self.settled().await {
            LifecycleState::Listening(addr) => addr,
            other => panic!("expected Listening, got {:?}", other),
        }
    }

    async fn finish(self) -> ExitStatus {
        timeout(WAIT, self.task)
            .await
            .expect("controller did not stop")
            .expect("controller task panicked")
    }
}

async fn get_text(addr: SocketAddr, path: &str) -> reqwest::Result<(u16, String)> {
    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, addr.port()));
    let response = reqwest::get(format!("http://{}{}", addr, path)).await?;
    let status = response.status().as_u16();

    Ok((status, response.text().await?))
}
