#![deny(warnings)]

use clap::Parser;
use color_eyre::eyre::Result;
use std::sync::Arc;
use tokio::sync::Mutex;

use folio::{
    infrastructure::{
        cli::Cli,
        config::Config,
        mail::{HttpMailClient, MailClient},
        tui::{real::RealTui, test::TestTui, TuiLike},
    },
    integration::app_runner::AppRunner,
    utils::{initialize_logging, initialize_panic_handler},
};

const HEADLESS_SIZE: (u16, u16) = (120, 40);

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();

    let config = Config::new()?;

    if args.headless {
        return run_headless(config, &args).await;
    }

    let tui: Arc<Mutex<dyn TuiLike + Send>> = Arc::new(Mutex::new(
        RealTui::new()?
            .tick_rate(args.tick_rate)
            .frame_rate(args.frame_rate),
    ));
    let mut runner = AppRunner::new_with_real(config, tui, args.page)?;
    runner.run().await?;

    Ok(())
}

/// Render the start page once into an in-memory terminal and print it.
async fn run_headless(config: Config, args: &Cli) -> Result<()> {
    let (width, height) = HEADLESS_SIZE;
    let test_tui = Arc::new(Mutex::new(TestTui::new(width, height)?));
    let handle = Arc::clone(&test_tui);
    let tui: Arc<Mutex<dyn TuiLike + Send>> = handle;
    let mail_client: Arc<dyn MailClient> = Arc::new(HttpMailClient::new(&config.contact)?);

    let mut runner = AppRunner::new_with_tui(config, tui, mail_client, args.page)?;
    runner.run().await?;

    print!("{}", test_tui.lock().await.screen_text());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
