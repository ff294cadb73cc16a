use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ascii_weather::app::{App, Command, InputEvent};
use ascii_weather::config::AppConfig;
use ascii_weather::formatters::ForecastRenderer;
use ascii_weather::logging;
use ascii_weather::service::WeatherService;
use ascii_weather::ui;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(&config);

    tracing::info!("Starting ascii-weather");

    let service = WeatherService::new(config.api.clone())?;
    let renderer = ForecastRenderer::new(config.render.clone());

    let (location, forecast) = service.initial_lookup().await;
    let mut app = App::new(location, forecast);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app, &service, &renderer).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        tracing::error!("Terminal loop failed: {:?}", err);
    }

    tracing::info!("Shutdown complete");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    service: &WeatherService,
    renderer: &ForecastRenderer,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app, renderer))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        let Some(input) = InputEvent::from_key(key) else {
            continue;
        };

        match app.update(input) {
            Some(Command::Quit) => break,
            Some(Command::Lookup { city, state }) => {
                // Blocks the view until both lookups return.
                let (location, forecast) = service.lookup(&city, &state).await;
                app.apply_lookup(location, forecast);
            }
            None => {}
        }
    }

    Ok(())
}
