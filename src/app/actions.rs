use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::clipboard;
use crate::launch::{self, SearchEngine};

use super::App;

impl App<'_> {
    /// Handle one key press. Returns true when the app should exit.
    pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => return Ok(true),
                KeyCode::Char('y') => {
                    self.copy_selected();
                    return Ok(false);
                }
                KeyCode::Char('l') => {
                    self.open_selected(SearchEngine::LinkedIn);
                    return Ok(false);
                }
                KeyCode::Char('g') => {
                    self.open_selected(SearchEngine::Google);
                    return Ok(false);
                }
                _ => {}
            }
        }

        match key.code {
            KeyCode::Esc => return Ok(true),
            KeyCode::Enter => self.submit(),
            KeyCode::Up => self.move_selection_up(),
            KeyCode::Down => self.move_selection_down(),
            _ => {
                // Everything else belongs to the title input: typing,
                // backspace, left/right cursor movement.
                if self.title_input.input(key) {
                    self.sync_title();
                }
            }
        }
        Ok(false)
    }

    fn copy_selected(&mut self) {
        let Some(query) = self.selected_query().map(str::to_string) else {
            return;
        };

        self.status = Some(match clipboard::copy(&query) {
            Ok(()) => "Copied query to clipboard".to_string(),
            Err(err) => format!("Copy failed: {err}"),
        });
    }

    fn open_selected(&mut self, engine: SearchEngine) {
        let Some(query) = self.selected_query() else {
            return;
        };

        let opened = engine
            .search_url(query)
            .map_err(|err| err.to_string())
            .and_then(|url| launch::open_url(&url));

        self.status = Some(match opened {
            Ok(()) => format!("Opened query in {}", engine.label()),
            Err(err) => format!("Open in {} failed: {err}", engine.label()),
        });
    }
}
