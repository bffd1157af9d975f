use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

mod app;
mod config;
mod error;
mod notification;
#[cfg(test)]
mod test_utils;
mod theme;
mod widgets;

use app::{App, TOASTS};

/// Interactive playground for the notiq notification queue
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive notification queue demo: add, update, dismiss and clear toasts"
)]
struct Args {
    /// Number of toasts to queue at startup
    #[arg(long, default_value_t = 0)]
    seed: usize,
}

fn main() -> Result<()> {
    // Writes to /tmp/notiq-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        if let Ok(log_file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/notiq-debug.log")
        {
            env_logger::Builder::new()
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(log_file)))
                .format(|buf, record| {
                    use std::time::SystemTime;
                    let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                    writeln!(
                        buf,
                        "[{}] [{}] {}",
                        datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                        record.level(),
                        record.args()
                    )
                })
                .init();
        }

        log::debug!("=== NOTIQ DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    let args = Args::parse();

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let terminal = init_terminal()?;

    let app = App::new(&config_result.config);
    let result = run(terminal, app, config_result.warning, args.seed);

    restore_terminal()?;
    result?;

    #[cfg(debug_assertions)]
    log::debug!("=== NOTIQ DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode and alternate screen
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    if let Err(e) = execute!(stdout(), EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(
    mut terminal: DefaultTerminal,
    mut app: App,
    config_warning: Option<String>,
    seed: usize,
) -> Result<()> {
    // Every component below reads the queue through the provider
    let provider = app.provider().clone();
    let _scope = provider.enter();

    if let Some(warning) = config_warning {
        app.show_config_warning(&warning)?;
    }
    app.seed(seed)?;

    loop {
        if app.should_render() {
            let toasts = TOASTS.use_queue()?;
            terminal.draw(|frame| app.render(frame, &*toasts.borrow()))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
