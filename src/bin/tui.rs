//! Portfolio Chat TUI (Terminal User Interface)
//!
//! Usage: `portfolio-chat-tui [settings.json]`

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use portfolio_chat::settings::Settings;
use portfolio_chat::tui::{self, App, ui};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use std::io;
use std::time::{Duration, Instant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let settings_path = std::env::args().nth(1).unwrap_or_else(|| "settings.json".to_string());
    let settings = Settings::load(&settings_path)?;
    if let Some(log_file) = &settings.log_file {
        portfolio_chat::init_to_file(log_file)?;
    }
    tracing::info!("Loaded settings from {}", settings_path);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state
    let mut app = App::new(settings);

    // Run main loop
    let res = run_app(&mut terminal, &mut app);

    // Tear down the widget before the terminal goes away
    app.quit();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        let size = terminal.size()?;
        app.set_viewport(size.width, size.height);
        app.tick(Instant::now());

        terminal.draw(|f| ui::ui(f, app))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Press {
                    tui::handle_key(app, key, size.height);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
