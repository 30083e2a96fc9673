use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use tickscout::api::ApiClient;
use tickscout::app::App;
use tickscout::config;
use tickscout::fetcher::spawn_worker;
use tickscout::history::{self, HistoryState};
use tickscout::watchlist::{self, WatchlistState};

/// How long the event loop waits for input before ticking timers and
/// draining worker responses
const POLL_INTERVAL: Duration = Duration::from_millis(30);

#[derive(Parser)]
#[command(version, about = "Terminal stock search with ranked autocomplete")]
struct Cli {
    /// Start with this query already typed into the search field
    query: Option<String>,

    /// Override the API base URL from the config file
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Skip the network entirely and search the built-in catalog
    #[arg(long)]
    offline: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    #[cfg(debug_assertions)]
    env_logger::init();

    let cli = Cli::parse();

    let (mut config, config_err) = config::load_config();
    if let Some(api_url) = cli.api_url {
        config.api.base_url = api_url;
    }

    let client = if cli.offline {
        None
    } else {
        Some(ApiClient::new(&config.api.base_url, config.api.timeout_ms)?)
    };
    let fetcher = spawn_worker(client);

    let mut app = App::new(config, fetcher);
    app.history = HistoryState::new(history::storage::load_history());
    app.watchlist = WatchlistState::new(watchlist::storage::load_watchlist());

    if let Some(err) = config_err {
        app.notification.warn(format!("Config ignored: {err}"));
    }
    if let Some(query) = cli.query {
        app.set_input_text(&query);
        app.on_input_changed();
    }

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();

    let result = run(terminal, &mut app);

    // Restore terminal (automatic cleanup)
    ratatui::restore();

    history::storage::save_history(app.history.records());
    watchlist::storage::save_watchlist(app.watchlist.entries());

    result
}

fn run(mut terminal: DefaultTerminal, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        // Fire due debounce deadlines and drain worker responses
        app.tick();

        terminal.draw(|frame| app.render(frame))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                // Only process key press events (avoid duplicates)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key);
                }
                _ => {}
            }
        }
    }

    Ok(())
}
