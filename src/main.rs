use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;

use bookdesk::api::{HttpCatalog, spawn_worker};
use bookdesk::app::App;
use bookdesk::config::{self, Config};
use bookdesk::error::BookdeskError;

/// Search a library catalog from the terminal
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Config file to use instead of ~/.config/bookdesk/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Catalog API address, overriding the config file
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Bearer token, overriding the config file
    #[arg(long, value_name = "TOKEN")]
    token: Option<String>,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();

    #[cfg(debug_assertions)]
    init_debug_logging();

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let config = apply_overrides(loaded.config, &args);
    config::validate_base_url(&config.api.base_url)?;

    let catalog = HttpCatalog::from_config(&config.api).map_err(BookdeskError::HttpClient)?;
    let mut worker = spawn_worker(Arc::new(catalog));
    let responses = worker
        .take_responses()
        .ok_or_else(|| eyre!("API worker response channel already taken"))?;

    let mut app = App::new(&config, worker.request_tx.clone(), responses);
    if let Some(warning) = loaded.warning {
        app.set_status(warning);
    }
    app.load_dictionaries();

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, &mut app);

    // Restore terminal even when the loop failed
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    worker.shutdown();

    result
}

fn apply_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(url) = &args.base_url {
        config.api.base_url = url.clone();
    }
    if let Some(token) = &args.token {
        config.api.token = Some(token.clone());
    }
    config
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        let timeout = app.poll_timeout(Instant::now());
        if event::poll(timeout)? {
            app.handle_event(event::read()?, Instant::now());
        }
        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Debug builds log to a file, since stderr belongs to the terminal UI
#[cfg(debug_assertions)]
fn init_debug_logging() {
    use std::io::Write;

    let Some(dir) = dirs::cache_dir().map(|d| d.join("bookdesk")) else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }
    let Ok(file) = std::fs::File::create(dir.join("bookdesk.log")) else {
        return;
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
