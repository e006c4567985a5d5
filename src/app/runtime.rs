use std::time::Duration;

use anyhow::Result;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::backend::BackendClient;
use crate::settings::ResolvedConfig;

use super::App;

/// Construct an [`App`] backed by the real HTTP client and run it to
/// completion.
pub(crate) fn run(settings: &ResolvedConfig) -> Result<()> {
    let client = BackendClient::new(settings.backend.clone())?;
    let mut app = App::new(settings, Box::new(client));
    app.run()
}

impl App<'_> {
    /// Pump the terminal event loop until the user exits.
    pub(crate) fn run(&mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        loop {
            self.pump_submit_results();
            self.throbber_state.calc_next();
            terminal.draw(|frame| self.draw(frame))?;

            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key)? {
                            break;
                        }
                    }
                    Event::Resize(_, _) => {}
                    _ => {}
                }
            }
        }

        ratatui::restore();
        Ok(())
    }
}
