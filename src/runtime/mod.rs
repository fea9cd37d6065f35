use clap::Parser;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::cli::Cli;
use crate::library::scan;

mod event_loop;
mod logging;
mod settings;
mod terminal;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut settings = settings::load_settings(cli.config.as_deref());
    cli.apply(&mut settings);

    if cli.print_config {
        print!("{}", settings.to_toml()?);
        return Ok(());
    }

    logging::init(&settings.logging)?;

    let dir = settings.library.dir.clone();
    let (tracks, scan_error) = match scan(&dir, &settings.library) {
        Ok(tracks) => (tracks, None),
        Err(err) => {
            tracing::warn!(%err, "library scan failed");
            (Vec::new(), Some(err.to_string()))
        }
    };

    let mut app = App::new(tracks, dir, &settings);
    if let Some(err) = scan_error {
        app.set_library_error(err);
    }

    terminal::install_panic_hook();
    let _guard = terminal::TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;

    event_loop::run(&mut terminal, &settings, &mut app)
}
