use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::{App, Focus};

impl App {
    /// Handle a key press event
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Try global keys first
        if self.handle_global_keys(key) {
            return;
        }

        // Not a global key, delegate to the focused pane
        match self.focus {
            Focus::InputField => self.handle_input_field_key(key),
            Focus::WatchlistPane => self.handle_watchlist_key(key),
        }
    }

    /// Handle keys that work regardless of focus.
    /// Returns true if the key was handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        // Help popup blocks everything else while visible
        if self.help.visible {
            match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.help.visible = false;
                }
                _ => {}
            }
            return true;
        }

        // Ctrl+C: exit application
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return true;
        }

        if key.code == KeyCode::F(1) {
            self.help.toggle();
            return true;
        }

        // Analysis overlay takes over key handling while open
        if self.analysis.is_visible() {
            match key.code {
                KeyCode::Esc | KeyCode::Char('q') => self.analysis.close(),
                KeyCode::Char('r') => self.retry_analysis(),
                KeyCode::Char('a') => self.add_analyzed_to_watchlist(),
                _ => {}
            }
            return true;
        }

        // History popup navigation (anchored under the input field)
        if self.history.is_visible() {
            match key.code {
                KeyCode::Esc => self.history.close(),
                KeyCode::Down => self.history.select_next(),
                KeyCode::Up => self.history.select_prev(),
                KeyCode::Enter => {
                    if let Some(query) = self.history.selected_query().map(str::to_string) {
                        self.history.close();
                        self.commit_search(&query);
                    }
                }
                _ => {}
            }
            return true;
        }

        false
    }

    /// Keys for the input field (search + suggestion navigation)
    fn handle_input_field_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                if self.suggest.is_visible() {
                    self.suggest.hide();
                } else {
                    // Removes focus from the search box
                    self.focus = Focus::WatchlistPane;
                }
            }

            KeyCode::Down => self.suggest.select_next(),
            KeyCode::Up => self.suggest.select_prev(),

            KeyCode::Enter => {
                if let Some(suggestion) = self.suggest.selected_suggestion() {
                    let symbol = suggestion.symbol.clone();
                    self.commit_search(&symbol);
                } else {
                    let text = self.input_text().trim().to_string();
                    self.commit_search(&text);
                }
            }

            // Accept the highlighted suggestion into the field without
            // dispatching the analysis yet
            KeyCode::Tab => {
                if let Some(suggestion) = self.suggest.selected_suggestion() {
                    let symbol = suggestion.symbol.clone();
                    self.set_input_text(&symbol);
                    self.suggest.hide();
                    self.debouncer.cancel();
                }
            }

            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.dispatch_popular_fetch();
            }

            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let name = self.input_text().trim().to_string();
                self.commit_theme_search(&name);
            }

            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                let filter = self.input_text().trim().to_string();
                self.history.open(&filter);
            }

            _ => {
                let content_changed = self.input.input(key);
                if content_changed {
                    self.on_input_changed();
                }
            }
        }
    }

    /// Keys for the watchlist pane
    fn handle_watchlist_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,

            KeyCode::Char('/') | KeyCode::Char('i') => {
                self.watchlist.clear_selection();
                self.focus = Focus::InputField;
            }

            KeyCode::Char('?') => self.help.toggle(),

            KeyCode::Down | KeyCode::Char('j') => self.watchlist.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.watchlist.select_prev(),

            KeyCode::Enter => {
                if let Some(entry) = self.watchlist.selected_entry() {
                    let symbol = entry.symbol.clone();
                    self.focus = Focus::InputField;
                    self.commit_search(&symbol);
                }
            }

            KeyCode::Char('d') => {
                if let Some(removed) = self.watchlist.remove_selected() {
                    self.notification
                        .info(format!("Removed {} from watchlist", removed.symbol));
                }
            }

            KeyCode::Esc => self.watchlist.clear_selection(),

            _ => {}
        }
    }
}
