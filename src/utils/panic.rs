use color_eyre::config::{HookBuilder, PanicHook};
use color_eyre::eyre::Result;
use std::panic::{self, PanicHookInfo};
use std::process;

use crate::infrastructure::tui::real::restore_terminal;

/// Install color-eyre hooks and a panic hook that gives the terminal back
/// before anything is printed.
pub fn initialize_panic_handler() -> Result<()> {
    let (panic_hook, eyre_hook) = HookBuilder::default()
        .panic_section(format!(
            "This is a bug. Consider reporting it at {}",
            env!("CARGO_PKG_REPOSITORY")
        ))
        .capture_span_trace_by_default(false)
        .display_location_section(false)
        .display_env_section(false)
        .into_hooks();
    eyre_hook.install()?;

    panic::set_hook(Box::new(move |info| {
        if let Err(e) = restore_terminal() {
            log::error!("Unable to restore terminal: {e:?}");
        }
        report(&panic_hook, info);
        process::exit(libc::EXIT_FAILURE);
    }));
    Ok(())
}

/// Release builds write a human-panic dump; debug builds print a full
/// better-panic backtrace. The report always lands in the log file.
fn report(panic_hook: &PanicHook, info: &PanicHookInfo<'_>) {
    let colored = panic_hook.panic_report(info).to_string();
    log::error!("Panic: {}", strip_ansi_escapes::strip_str(&colored));

    #[cfg(not(debug_assertions))]
    {
        use human_panic::{handle_dump, print_msg, Metadata};
        let meta = Metadata::new(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
            .authors(env!("CARGO_PKG_AUTHORS").replace(':', ", "))
            .homepage(env!("CARGO_PKG_HOMEPAGE"));
        let dump = handle_dump(&meta, info);
        if print_msg(dump, &meta).is_err() {
            eprintln!("{} crashed", env!("CARGO_PKG_NAME"));
        }
        eprintln!("{colored}");
    }

    #[cfg(debug_assertions)]
    {
        better_panic::Settings::auto()
            .most_recent_first(false)
            .lineno_suffix(true)
            .verbosity(better_panic::Verbosity::Full)
            .create_panic_handler()(info);
    }
}
