use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::cmd::{Cmd, TuiCommand},
    infrastructure::{
        mail_service::MailOperation, resume::ResumeDownloader, timer_service::TimerOperation,
    },
};

/// Command executor that routes commands to the services owning each side effect
#[derive(Clone, Default)]
pub struct CmdExecutor {
    timer_sender: Option<mpsc::UnboundedSender<TimerOperation>>,
    mail_sender: Option<mpsc::UnboundedSender<MailOperation>>,
    resume_downloader: Option<ResumeDownloader>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
}

impl CmdExecutor {
    /// Create an executor with no services attached; every effect is dropped with a warning
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_timer_sender(&mut self, sender: mpsc::UnboundedSender<TimerOperation>) {
        self.timer_sender = Some(sender);
    }

    pub fn set_mail_sender(&mut self, sender: mpsc::UnboundedSender<MailOperation>) {
        self.mail_sender = Some(sender);
    }

    pub fn set_resume_downloader(&mut self, downloader: ResumeDownloader) {
        self.resume_downloader = Some(downloader);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::None => {}

            Cmd::ScheduleTimer { key, after } => {
                if let Some(tx) = &self.timer_sender {
                    tx.send(TimerOperation::Schedule {
                        key: *key,
                        after: *after,
                    })?;
                } else {
                    log::warn!("ScheduleTimer {key:?} ignored: TimerService not available");
                }
            }

            Cmd::CancelTimer { id } => {
                if let Some(tx) = &self.timer_sender {
                    tx.send(TimerOperation::Cancel { id: *id })?;
                } else {
                    log::warn!("CancelTimer {id:?} ignored: TimerService not available");
                }
            }

            Cmd::SendMail {
                submission,
                payload,
            } => {
                if let Some(tx) = &self.mail_sender {
                    log::info!("CmdExecutor: routing submission {submission:?} to MailService");
                    tx.send(MailOperation::Send {
                        submission: *submission,
                        payload: payload.clone(),
                    })?;
                } else {
                    log::warn!("SendMail ignored: MailService not available");
                }
            }

            Cmd::DownloadResume { source, file_name } => {
                if let Some(downloader) = &self.resume_downloader {
                    downloader.download(source.clone(), file_name.clone());
                } else {
                    log::warn!("DownloadResume ignored: no downloader configured");
                }
            }

            Cmd::Tui(tui_cmd) => match tui_cmd {
                TuiCommand::Resize { width, height } => {
                    if let Some(tx) = &self.tui_sender {
                        let _ = tx.send(TuiCommand::Resize {
                            width: *width,
                            height: *height,
                        });
                    } else {
                        log::warn!(
                            "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                        );
                    }
                }
            },

            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    let _ = rtx.send(());
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }

            Cmd::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd)?;
                }
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Result<Vec<String>> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        Ok(execution_log)
    }

    /// Get execution statistics
    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_timer_sender: self.timer_sender.is_some(),
            is_timer_sender_closed: self.timer_sender.as_ref().map(|tx| tx.is_closed()),
            has_mail_sender: self.mail_sender.is_some(),
            is_mail_sender_closed: self.mail_sender.as_ref().map(|tx| tx.is_closed()),
            has_resume_downloader: self.resume_downloader.is_some(),
        }
    }
}

/// Command executor statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdExecutorStats {
    pub has_timer_sender: bool,
    pub is_timer_sender_closed: Option<bool>,
    pub has_mail_sender: bool,
    pub is_mail_sender_closed: Option<bool>,
    pub has_resume_downloader: bool,
}

/// Extension trait for Cmd to get human-readable names
trait CmdName {
    fn name(&self) -> String;
}

impl CmdName for Cmd {
    fn name(&self) -> String {
        match self {
            Cmd::None => "None".to_string(),
            Cmd::ScheduleTimer { key, .. } => format!("ScheduleTimer({:?})", key.id),
            Cmd::CancelTimer { id } => format!("CancelTimer({id:?})"),
            Cmd::SendMail { .. } => "SendMail".to_string(),
            Cmd::DownloadResume { .. } => "DownloadResume".to_string(),
            Cmd::RequestRender => "RequestRender".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Batch(cmds) => format!("Batch({})", cmds.len()),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::timer::{TimerId, TimerKey};
    use crate::domain::contact::{ContactPayload, SubmissionId};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn test_execute_schedule_and_cancel_timer() {
        let mut executor = CmdExecutor::new();
        let (timer_tx, mut timer_rx) = mpsc::unbounded_channel();
        executor.set_timer_sender(timer_tx);

        let key = TimerKey::new(TimerId::Typewriter, 4);
        executor
            .execute_command(&Cmd::schedule(
                TimerId::Typewriter,
                4,
                Duration::from_millis(80),
            ))
            .unwrap();
        executor
            .execute_command(&Cmd::CancelTimer {
                id: TimerId::Typewriter,
            })
            .unwrap();

        assert_eq!(
            timer_rx.try_recv().unwrap(),
            TimerOperation::Schedule {
                key,
                after: Duration::from_millis(80)
            }
        );
        assert_eq!(
            timer_rx.try_recv().unwrap(),
            TimerOperation::Cancel {
                id: TimerId::Typewriter
            }
        );
    }

    #[test]
    fn test_execute_send_mail() {
        let mut executor = CmdExecutor::new();
        let (mail_tx, mut mail_rx) = mpsc::unbounded_channel();
        executor.set_mail_sender(mail_tx);

        let submission = SubmissionId { visit: 1, seq: 2 };
        let payload = ContactPayload {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            subject: "Hi".into(),
            message: "Hello".into(),
        };
        executor
            .execute_command(&Cmd::SendMail {
                submission,
                payload: payload.clone(),
            })
            .unwrap();

        assert_eq!(
            mail_rx.try_recv().unwrap(),
            MailOperation::Send {
                submission,
                payload
            }
        );
    }

    #[test]
    fn test_missing_services_drop_commands() {
        let executor = CmdExecutor::new();
        let result = executor.execute_command(&Cmd::Batch(vec![
            Cmd::schedule(TimerId::AckDismiss, 1, Duration::from_secs(5)),
            Cmd::SendMail {
                submission: SubmissionId::default(),
                payload: ContactPayload::default(),
            },
            Cmd::DownloadResume {
                source: "assets/resume.pdf".into(),
                file_name: "resume.pdf".into(),
            },
        ]));
        assert!(result.is_ok());
    }

    #[test]
    fn test_closed_timer_channel_is_an_error() {
        let mut executor = CmdExecutor::new();
        let (timer_tx, timer_rx) = mpsc::unbounded_channel();
        executor.set_timer_sender(timer_tx);
        drop(timer_rx);

        let log = executor
            .execute_commands(&[Cmd::CancelTimer {
                id: TimerId::ContentReveal,
            }])
            .unwrap();
        assert!(log[0].starts_with("✗ Failed to execute CancelTimer(ContentReveal)"));
    }

    #[test]
    fn test_execute_resize() {
        let mut executor = CmdExecutor::new();
        let (tui_tx, mut tui_rx) = mpsc::unbounded_channel::<TuiCommand>();
        executor.set_tui_sender(tui_tx);

        executor
            .execute_command(&Cmd::Tui(TuiCommand::Resize {
                width: 80,
                height: 24,
            }))
            .unwrap();

        assert_eq!(
            tui_rx.try_recv().unwrap(),
            TuiCommand::Resize {
                width: 80,
                height: 24
            }
        );
    }

    #[test]
    fn test_execute_batch_with_render() {
        let mut executor = CmdExecutor::new();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel::<()>();
        executor.set_render_request_sender(render_tx);

        let log = executor
            .execute_commands(&[
                Cmd::Batch(vec![Cmd::RequestRender, Cmd::None]),
                Cmd::LogInfo {
                    message: "test".to_string(),
                },
            ])
            .unwrap();

        assert_eq!(log.len(), 2);
        assert_eq!(log[0], "✓ Executed: Batch(2)");
        assert_eq!(log[1], "✓ Executed: LogInfo");
        render_rx.try_recv().unwrap();
    }

    #[test]
    fn test_executor_stats() {
        let mut executor = CmdExecutor::new();
        assert_eq!(
            executor.get_stats(),
            CmdExecutorStats {
                has_timer_sender: false,
                is_timer_sender_closed: None,
                has_mail_sender: false,
                is_mail_sender_closed: None,
                has_resume_downloader: false,
            }
        );

        let (timer_tx, _timer_rx) = mpsc::unbounded_channel();
        executor.set_timer_sender(timer_tx);
        let stats = executor.get_stats();
        assert!(stats.has_timer_sender);
        assert_eq!(stats.is_timer_sender_closed, Some(false));
    }
}
