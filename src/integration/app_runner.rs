use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{
        cmd::TuiCommand,
        cmd_executor::CmdExecutor,
        msg::{nav::NavMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    domain::ui::Page,
    infrastructure::{
        config::Config,
        mail::{HttpMailClient, MailClient},
        mail_service::MailService,
        resume::ResumeDownloader,
        timer_service::TimerService,
        tui::{self, TuiLike},
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// One wake-up of the main loop
enum LoopEvent {
    Tui(Option<tui::Event>),
    Service(RawMsg),
}

/// Drives the application: terminal events and service results go into the
/// runtime, commands go out to the services, and frames are drawn when the
/// terminal asks for one or a command requested it.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    renderer: Renderer,
    coalescer: Coalescer,
    started: Instant,
    // Results from timer, mail and download services
    service_rx: mpsc::UnboundedReceiver<RawMsg>,
    render_req_rx: mpsc::UnboundedReceiver<()>,
    tui_cmd_rx: mpsc::UnboundedReceiver<TuiCommand>,
    // For service termination
    service_tokens: Vec<CancellationToken>,
}

impl AppRunner {
    pub fn runtime(&self) -> &Runtime {
        &self.runtime
    }

    pub fn runtime_mut(&mut self) -> &mut Runtime {
        &mut self.runtime
    }

    /// Wire the runtime to the timer, mail and download services and the given terminal.
    pub fn new_with_tui(
        config: Config,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        mail_client: Arc<dyn MailClient>,
        start_page: Option<Page>,
    ) -> Result<Self> {
        let mut initial_state = AppState::new_with_config(config);
        if let Some(page) = start_page {
            initial_state = initial_state.with_start_page(page);
        }

        let (service_tx, service_rx) = mpsc::unbounded_channel::<RawMsg>();

        let (timer_tx, timer_cancel, timer_service) = TimerService::new(service_tx.clone());
        timer_service.run();
        let (mail_tx, mail_cancel, mail_service) = MailService::new(mail_client, service_tx.clone());
        mail_service.run();

        let (render_req_tx, render_req_rx) = mpsc::unbounded_channel::<()>();
        let (tui_cmd_tx, tui_cmd_rx) = mpsc::unbounded_channel::<TuiCommand>();

        let mut executor = CmdExecutor::new();
        executor.set_timer_sender(timer_tx);
        executor.set_mail_sender(mail_tx);
        executor.set_resume_downloader(ResumeDownloader::new(service_tx));
        executor.set_render_request_sender(render_req_tx);
        executor.set_tui_sender(tui_cmd_tx);

        let mut runtime = Runtime::new(initial_state);
        runtime.set_executor(executor);

        Ok(Self {
            runtime,
            tui,
            renderer: Renderer::new(),
            coalescer: Coalescer::new(),
            started: Instant::now(),
            service_rx,
            render_req_rx,
            tui_cmd_rx,
            service_tokens: vec![timer_cancel, mail_cancel],
        })
    }

    /// Production wiring: HTTP mail client from the contact configuration.
    pub fn new_with_real(
        config: Config,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        start_page: Option<Page>,
    ) -> Result<Self> {
        let mail_client: Arc<dyn MailClient> = Arc::new(HttpMailClient::new(&config.contact)?);
        Self::new_with_tui(config, tui, mail_client, start_page)
    }

    /// Run the main loop until the state asks to quit or the terminal closes.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;

        self.runtime.send_msg(Msg::Nav(NavMsg::MountCurrent));
        self.update_cycle();
        self.render().await?;

        loop {
            let event = {
                let mut tui = self.tui.lock().await;
                tokio::select! {
                    biased;
                    Some(raw) = self.service_rx.recv() => LoopEvent::Service(raw),
                    ev = tui.next() => LoopEvent::Tui(ev),
                }
            };

            match event {
                LoopEvent::Service(raw) => {
                    self.runtime.send_raw_msg(raw);
                    while let Ok(raw) = self.service_rx.try_recv() {
                        self.runtime.send_raw_msg(raw);
                    }
                }
                LoopEvent::Tui(None) => {
                    self.runtime.send_raw_msg(RawMsg::Quit);
                }
                LoopEvent::Tui(Some(ev)) => {
                    if self.handle_tui_event(ev) {
                        self.coalescer.note_frame_due();
                    }
                }
            }

            self.update_cycle();

            if self.runtime.state().system.should_suspend {
                self.suspend_and_resume().await?;
                self.coalescer.note_frame_due();
            }

            let mut resizes = Vec::new();
            while let Ok(TuiCommand::Resize { width, height }) = self.tui_cmd_rx.try_recv() {
                resizes.push((width, height));
            }
            if let Some((width, height)) = self.coalescer.resize(&resizes) {
                self.tui
                    .lock()
                    .await
                    .resize(Rect::new(0, 0, width, height))?;
            }

            let mut queued_render_reqs = 0;
            while self.render_req_rx.try_recv().is_ok() {
                queued_render_reqs += 1;
            }
            self.coalescer.note_render_requests(queued_render_reqs);
            if self.coalescer.take_render() {
                self.render().await?;
            }

            if self.runtime.state().system.should_quit {
                break;
            }
        }

        for token in &self.service_tokens {
            token.cancel();
        }
        self.tui.lock().await.exit()?;
        Ok(())
    }

    /// Returns true when the event asks for a frame.
    fn handle_tui_event(&mut self, ev: tui::Event) -> bool {
        match ev {
            // The cursor phase is read from the clock, so sample it for every frame
            tui::Event::Render => {
                self.runtime
                    .send_raw_msg(RawMsg::Tick(self.started.elapsed()));
                return true;
            }
            tui::Event::Tick => {
                self.runtime
                    .send_raw_msg(RawMsg::Tick(self.started.elapsed()));
            }
            tui::Event::Quit | tui::Event::Closed => self.runtime.send_raw_msg(RawMsg::Quit),
            tui::Event::Resize(w, h) => self.runtime.send_raw_msg(RawMsg::Resize(w, h)),
            tui::Event::Key(key) => self.runtime.send_raw_msg(RawMsg::Key(key)),
            tui::Event::Paste(s) => self.runtime.send_raw_msg(RawMsg::Paste(s)),
            tui::Event::Error => log::warn!("Terminal reported an input error"),
            tui::Event::Init
            | tui::Event::FocusGained
            | tui::Event::FocusLost
            | tui::Event::Mouse(_) => {}
        }
        false
    }

    fn update_cycle(&mut self) {
        if let Err(e) = self.runtime.run_update_cycle() {
            log::error!("Runtime error: {e}");
            self.runtime
                .send_raw_msg(RawMsg::Error(format!("Runtime error: {e}")));
        }
    }

    async fn suspend_and_resume(&mut self) -> Result<()> {
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.update_cycle();
        Ok(())
    }

    async fn render(&mut self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }
}
