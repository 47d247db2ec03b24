use std::sync::Arc;

use color_eyre::eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::core::raw_msg::RawMsg;
use crate::domain::contact::{ContactPayload, MailOutcome, SubmissionId};
use crate::infrastructure::mail::MailClient;

/// Operations accepted by the MailService
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailOperation {
    Send {
        submission: SubmissionId,
        payload: ContactPayload,
    },
}

/// MailService sends contact form submissions off the update path.
/// Each request runs in its own task and reports exactly one
/// `RawMsg::MailCompleted`. In-flight requests are never cancelled.
pub struct MailService {
    client: Arc<dyn MailClient>,
    // Incoming channels
    op_rx: mpsc::UnboundedReceiver<MailOperation>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

pub type NewMailService = (
    mpsc::UnboundedSender<MailOperation>, // op_tx - operations to send
    CancellationToken,                    // shutdown signal
    MailService,
);

impl MailService {
    pub fn new(
        client: Arc<dyn MailClient>,
        raw_tx: mpsc::UnboundedSender<RawMsg>,
    ) -> NewMailService {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            op_tx,
            cancel_token.clone(),
            Self {
                client,
                op_rx,
                cancel_token,
                raw_tx,
            },
        )
    }

    /// Run the MailService in background task
    pub fn run(mut self) {
        tokio::spawn(async move {
            if let Err(e) = self.run_service().await {
                log::error!("MailService error: {e}");
                let _ = self
                    .raw_tx
                    .send(RawMsg::Error(format!("MailService error: {e}")));
            }
        });
    }

    async fn run_service(&mut self) -> Result<()> {
        loop {
            tokio::select! {
                result = self.op_rx.recv() => {
                    match result {
                        Some(op) => self.handle_operation(op),
                        None => {
                            log::info!("MailService operation channel closed");
                            break;
                        }
                    }
                }

                _ = self.cancel_token.cancelled() => {
                    log::info!("MailService received cancellation signal");
                    break;
                }
            }
        }
        Ok(())
    }

    fn handle_operation(&self, op: MailOperation) {
        match op {
            MailOperation::Send {
                submission,
                payload,
            } => {
                let client = Arc::clone(&self.client);
                let raw_tx = self.raw_tx.clone();
                let span = tracing::info_span!(
                    "send_mail",
                    visit = submission.visit,
                    seq = submission.seq
                );
                tokio::spawn(
                    async move {
                        let outcome = match client.send(&payload).await {
                            Ok(()) => MailOutcome::Sent,
                            Err(e) => {
                                log::error!("Failed to send contact message: {e}");
                                e.outcome()
                            }
                        };
                        let _ = raw_tx.send(RawMsg::MailCompleted {
                            submission,
                            outcome,
                        });
                    }
                    .instrument(span),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::mail::MailError;
    use async_trait::async_trait;
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;
    use std::sync::Mutex;

    struct RecordingClient {
        sent: Mutex<Vec<ContactPayload>>,
        reject_with: Option<String>,
    }

    #[async_trait]
    impl MailClient for RecordingClient {
        async fn send(&self, payload: &ContactPayload) -> Result<(), MailError> {
            self.sent.lock().expect("lock").push(payload.clone());
            match &self.reject_with {
                None => Ok(()),
                Some(message) => Err(MailError::Rejected {
                    status: StatusCode::UNPROCESSABLE_ENTITY,
                    message: Some(message.clone()),
                }),
            }
        }
    }

    fn payload() -> ContactPayload {
        ContactPayload {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        }
    }

    #[tokio::test]
    async fn test_send_reports_one_completion() {
        let client = Arc::new(RecordingClient {
            sent: Mutex::new(Vec::new()),
            reject_with: None,
        });
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
        let (op_tx, _cancel, service) = MailService::new(Arc::clone(&client) as Arc<dyn MailClient>, raw_tx);
        service.run();

        let submission = SubmissionId { visit: 0, seq: 1 };
        op_tx
            .send(MailOperation::Send {
                submission,
                payload: payload(),
            })
            .unwrap();

        assert_eq!(
            raw_rx.recv().await,
            Some(RawMsg::MailCompleted {
                submission,
                outcome: MailOutcome::Sent
            })
        );
        assert_eq!(client.sent.lock().unwrap().as_slice(), &[payload()]);
    }

    #[tokio::test]
    async fn test_rejection_is_reported_with_message() {
        let client = Arc::new(RecordingClient {
            sent: Mutex::new(Vec::new()),
            reject_with: Some("Invalid email".into()),
        });
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
        let (op_tx, _cancel, service) = MailService::new(client, raw_tx);
        service.run();

        let submission = SubmissionId { visit: 2, seq: 7 };
        op_tx
            .send(MailOperation::Send {
                submission,
                payload: payload(),
            })
            .unwrap();

        assert_eq!(
            raw_rx.recv().await,
            Some(RawMsg::MailCompleted {
                submission,
                outcome: MailOutcome::Rejected {
                    message: Some("Invalid email".into())
                }
            })
        );
    }
}
