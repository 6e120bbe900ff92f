use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use skillquest_gemini::{BlockingGeminiClient, DEFAULT_MODEL};
use skillquest_tui::app::App;

#[derive(Debug, Parser)]
#[command(name = "skillquest", about = "SkillQuest course outline generator")]
struct Config {
    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model name, e.g. "gemini-2.5-flash"
    #[arg(long, env = "SKILLQUEST_MODEL", default_value = DEFAULT_MODEL)]
    model: String,
}

fn main() -> Result<()> {
    let config = Config::parse();

    // Missing credential is fatal before the terminal is touched.
    let api_key = config
        .api_key
        .filter(|k| !k.is_empty())
        .context("GEMINI_API_KEY is not set")?;
    let client = BlockingGeminiClient::new(&api_key, &config.model)?;

    let app = App::new(Arc::new(client));
    run_tui(app)
}

fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e}");
    }

    result
}

fn event_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        // Use poll with timeout while a request is in flight or the copy
        // confirmation must expire, blocking read otherwise
        if app.needs_polling() {
            if event::poll(Duration::from_millis(200))? {
                if let Event::Key(key) = event::read()? {
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        break;
                    }
                    if key.code == KeyCode::Char('q') && !app.is_input_mode() {
                        break;
                    }
                    app.handle_key(key);
                }
            } else {
                app.poll();
            }
        } else if let Event::Key(key) = event::read()? {
            // Ctrl+C always quits
            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                break;
            }
            // q quits unless the form is capturing text
            if key.code == KeyCode::Char('q') && !app.is_input_mode() {
                break;
            }
            app.handle_key(key);
        }
    }

    Ok(())
}
