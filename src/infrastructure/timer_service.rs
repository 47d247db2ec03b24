use std::collections::HashMap;
use std::time::Duration;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::core::{
    raw_msg::RawMsg,
    timer::{TimerId, TimerKey},
};

/// Operations accepted by the TimerService
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerOperation {
    Schedule { key: TimerKey, after: Duration },
    Cancel { id: TimerId },
}

/// TimerService runs one sleeping task per pending timer and reports each
/// expiry as `RawMsg::TimerFired`. A slot holds at most one pending timer:
/// scheduling into an occupied slot cancels the previous one first.
pub struct TimerService {
    // Incoming channels
    op_rx: mpsc::UnboundedReceiver<TimerOperation>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
    pending: HashMap<TimerId, CancellationToken>,
}

pub type NewTimerService = (
    mpsc::UnboundedSender<TimerOperation>, // op_tx - operations to send
    CancellationToken,                     // shutdown signal
    TimerService,
);

impl TimerService {
    pub fn new(raw_tx: mpsc::UnboundedSender<RawMsg>) -> NewTimerService {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            op_tx,
            cancel_token.clone(),
            Self {
                op_rx,
                cancel_token,
                raw_tx,
                pending: HashMap::new(),
            },
        )
    }

    /// Run the TimerService in background task
    pub fn run(mut self) {
        tokio::spawn(async move {
            if let Err(e) = self.run_service().await {
                log::error!("TimerService error: {e}");
                let _ = self
                    .raw_tx
                    .send(RawMsg::Error(format!("TimerService error: {e}")));
            }
        });
    }

    /// Main service loop
    async fn run_service(&mut self) -> Result<()> {
        loop {
            tokio::select! {
                result = self.op_rx.recv() => {
                    match result {
                        Some(op) => self.handle_operation(op),
                        None => {
                            log::info!("TimerService operation channel closed");
                            break;
                        }
                    }
                }

                _ = self.cancel_token.cancelled() => {
                    log::info!("TimerService received cancellation signal");
                    break;
                }
            }
        }

        for (_, token) in self.pending.drain() {
            token.cancel();
        }
        Ok(())
    }

    fn handle_operation(&mut self, op: TimerOperation) {
        match op {
            TimerOperation::Schedule { key, after } => self.schedule(key, after),
            TimerOperation::Cancel { id } => self.cancel(id),
        }
    }

    fn schedule(&mut self, key: TimerKey, after: Duration) {
        self.cancel(key.id);

        let token = self.cancel_token.child_token();
        self.pending.insert(key.id, token.clone());

        let raw_tx = self.raw_tx.clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(after) => {
                    let _ = raw_tx.send(RawMsg::TimerFired(key));
                }
            }
        });
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(token) = self.pending.remove(&id) {
            token.cancel();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::time::Instant;

    fn start() -> (
        mpsc::UnboundedSender<TimerOperation>,
        CancellationToken,
        mpsc::UnboundedReceiver<RawMsg>,
    ) {
        let (raw_tx, raw_rx) = mpsc::unbounded_channel();
        let (op_tx, cancel, service) = TimerService::new(raw_tx);
        service.run();
        (op_tx, cancel, raw_rx)
    }

    #[tokio::test(start_paused = true)]
    async fn test_timer_fires_after_delay() {
        let (op_tx, _cancel, mut raw_rx) = start();
        let key = TimerKey::new(TimerId::Typewriter, 1);
        let started = Instant::now();
        op_tx
            .send(TimerOperation::Schedule {
                key,
                after: Duration::from_millis(80),
            })
            .unwrap();

        assert_eq!(raw_rx.recv().await, Some(RawMsg::TimerFired(key)));
        assert_eq!(started.elapsed(), Duration::from_millis(80));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_prevents_delivery() {
        let (op_tx, _cancel, mut raw_rx) = start();
        op_tx
            .send(TimerOperation::Schedule {
                key: TimerKey::new(TimerId::AckDismiss, 1),
                after: Duration::from_secs(5),
            })
            .unwrap();
        op_tx
            .send(TimerOperation::Cancel {
                id: TimerId::AckDismiss,
            })
            .unwrap();

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!(raw_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_schedule_replaces_pending_timer_in_slot() {
        let (op_tx, _cancel, mut raw_rx) = start();
        let old = TimerKey::new(TimerId::Typewriter, 1);
        let new = TimerKey::new(TimerId::Typewriter, 2);
        op_tx
            .send(TimerOperation::Schedule {
                key: old,
                after: Duration::from_millis(500),
            })
            .unwrap();
        op_tx
            .send(TimerOperation::Schedule {
                key: new,
                after: Duration::from_millis(500),
            })
            .unwrap();

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(raw_rx.try_recv().ok(), Some(RawMsg::TimerFired(new)));
        assert!(raw_rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_slots_are_independent() {
        let (op_tx, _cancel, mut raw_rx) = start();
        let typing = TimerKey::new(TimerId::Typewriter, 1);
        let reveal = TimerKey::new(TimerId::ContentReveal, 1);
        op_tx
            .send(TimerOperation::Schedule {
                key: typing,
                after: Duration::from_millis(80),
            })
            .unwrap();
        op_tx
            .send(TimerOperation::Schedule {
                key: reveal,
                after: Duration::from_millis(300),
            })
            .unwrap();

        assert_eq!(raw_rx.recv().await, Some(RawMsg::TimerFired(typing)));
        assert_eq!(raw_rx.recv().await, Some(RawMsg::TimerFired(reveal)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_cancels_pending_timers() {
        let (op_tx, cancel, mut raw_rx) = start();
        op_tx
            .send(TimerOperation::Schedule {
                key: TimerKey::new(TimerId::Typewriter, 1),
                after: Duration::from_millis(80),
            })
            .unwrap();
        tokio::task::yield_now().await;
        cancel.cancel();

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(raw_rx.try_recv().is_err());
    }
}
