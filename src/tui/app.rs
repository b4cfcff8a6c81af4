use crate::catalog::ItemKind;
use crate::index::{ItemId, Route, SearchIndex};
use crate::search;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Signal from the key dispatcher back to the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Quit,
}

/// Effect emitted by the search modal when a key commits or dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalEffect {
    /// Exactly one of these is emitted per committed selection.
    Navigate(String),
    Dismissed,
}

/// The search overlay: query text, ranked results, highlighted cursor.
///
/// Three observable states: closed, open with an empty query, open with
/// results computed. Opening and closing both reset to a clean slate so no
/// prior session residue leaks into the next open.
pub struct SearchModal {
    pub open: bool,
    pub query: String,
    pub results: Vec<ItemId>,
    pub highlighted: usize,
}

impl SearchModal {
    pub fn new() -> Self {
        Self {
            open: false,
            query: String::new(),
            results: Vec::new(),
            highlighted: 0,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
        self.reset();
    }

    pub fn close(&mut self) {
        self.open = false;
        self.reset();
    }

    fn reset(&mut self) {
        self.query.clear();
        self.results.clear();
        self.highlighted = 0;
    }

    /// Re-run the matcher; the highlight resets whenever the result set
    /// is recomputed.
    fn refresh(&mut self, index: &SearchIndex) {
        self.results = search::rank(&self.query, index.items());
        self.highlighted = 0;
    }

    /// Move the highlight down, clamped at the last result (no wraparound).
    pub fn select_next(&mut self) {
        if !self.results.is_empty() {
            self.highlighted = (self.highlighted + 1).min(self.results.len() - 1);
        }
    }

    /// Move the highlight up, clamped at the first result.
    pub fn select_prev(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn selected(&self) -> Option<ItemId> {
        self.results.get(self.highlighted).copied()
    }

    /// Handle one key while the modal is open.
    ///
    /// Single-letter page shortcuts never fire here: printable characters
    /// are query text while the modal owns focus. Only the open-search
    /// chord (Ctrl+K) keeps its global meaning, toggling the modal shut.
    pub fn on_key(&mut self, key: KeyEvent, index: &SearchIndex) -> Option<ModalEffect> {
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('k')) => {
                self.close();
                Some(ModalEffect::Dismissed)
            }
            (KeyModifiers::CONTROL, KeyCode::Char('n')) => {
                self.select_next();
                None
            }
            (KeyModifiers::CONTROL, KeyCode::Char('p')) => {
                self.select_prev();
                None
            }
            (KeyModifiers::NONE | KeyModifiers::SHIFT, code) => match code {
                KeyCode::Esc => {
                    self.close();
                    Some(ModalEffect::Dismissed)
                }
                KeyCode::Down | KeyCode::Tab => {
                    self.select_next();
                    None
                }
                KeyCode::Up | KeyCode::BackTab => {
                    self.select_prev();
                    None
                }
                KeyCode::Enter => {
                    let href = self.selected().and_then(|id| index.get(id)).map(|item| item.href.clone());
                    match href {
                        Some(href) => {
                            self.close();
                            Some(ModalEffect::Navigate(href))
                        }
                        // Enter with nothing highlighted is a no-op.
                        None => None,
                    }
                }
                KeyCode::Backspace => {
                    self.query.pop();
                    self.refresh(index);
                    None
                }
                KeyCode::Char(c) => {
                    self.query.push(c);
                    self.refresh(index);
                    None
                }
                _ => None,
            },
            _ => None,
        }
    }
}

impl Default for SearchModal {
    fn default() -> Self {
        Self::new()
    }
}

/// Application state: current route, overlays, and the section-page cursor.
pub struct App {
    index: SearchIndex,
    pub route: Route,
    pub modal: SearchModal,
    pub help_open: bool,
    /// Cursor within the current section page's entry list.
    pub section_cursor: usize,
    pub status: String,
}

impl App {
    pub fn new(index: SearchIndex) -> Self {
        let status = format!("{} entries · press / to search, ? for help", index.len());
        Self {
            index,
            route: Route::Home,
            modal: SearchModal::new(),
            help_open: false,
            section_cursor: 0,
            status,
        }
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Resolve an href and change route. Unknown paths land on the
    /// not-found page rather than erroring.
    pub fn navigate(&mut self, href: &str) {
        let route = self.index.resolve(href);
        self.goto(route);
    }

    pub fn goto(&mut self, route: Route) {
        self.route = route;
        self.section_cursor = 0;
        self.status = match route {
            Route::Home => format!("{} entries · press / to search, ? for help", self.index.len()),
            Route::Section(kind) => format!(
                "{} — {} entries",
                kind.section_title(),
                self.index.ids_of_kind(kind).len()
            ),
            Route::Detail(id) => self
                .index
                .get(id)
                .map(|item| item.href.clone())
                .unwrap_or_default(),
            Route::NotFound => "Page not found".to_string(),
        };
    }

    /// Position of the current page in the site's page order
    /// (home first, then the sections). None for detail/not-found pages.
    fn page_position(&self) -> Option<usize> {
        match self.route {
            Route::Home => Some(0),
            Route::Section(kind) => ItemKind::ALL.iter().position(|&k| k == kind).map(|i| i + 1),
            Route::Detail(_) | Route::NotFound => None,
        }
    }

    fn page_at(pos: usize) -> Route {
        if pos == 0 {
            Route::Home
        } else {
            Route::Section(ItemKind::ALL[pos - 1])
        }
    }

    /// Next page in site order; a no-op at the last page or on pages
    /// outside the order.
    pub fn next_page(&mut self) {
        if let Some(pos) = self.page_position()
            && pos < ItemKind::ALL.len()
        {
            self.goto(Self::page_at(pos + 1));
        }
    }

    /// Previous page in site order; a no-op at home.
    pub fn prev_page(&mut self) {
        if let Some(pos) = self.page_position()
            && pos > 0
        {
            self.goto(Self::page_at(pos - 1));
        }
    }

    pub fn go_home(&mut self) {
        self.goto(Route::Home);
    }

    /// Step back up the page hierarchy: detail to its section, section
    /// to home.
    pub fn back(&mut self) {
        match self.route {
            Route::Detail(id) => {
                let kind = self.index.get(id).map(|item| item.kind);
                match kind {
                    Some(kind) => self.goto(Route::Section(kind)),
                    None => self.go_home(),
                }
            }
            Route::Section(_) | Route::NotFound => self.go_home(),
            Route::Home => {}
        }
    }

    pub fn cursor_down(&mut self) {
        if let Route::Section(kind) = self.route {
            let count = self.index.ids_of_kind(kind).len();
            if count > 0 {
                self.section_cursor = (self.section_cursor + 1).min(count - 1);
            }
        }
    }

    pub fn cursor_up(&mut self) {
        self.section_cursor = self.section_cursor.saturating_sub(1);
    }

    /// Open the detail page for the entry under the section cursor.
    pub fn open_under_cursor(&mut self) {
        if let Route::Section(kind) = self.route
            && let Some(&id) = self.index.ids_of_kind(kind).get(self.section_cursor)
        {
            self.goto(Route::Detail(id));
        }
    }

    /// The one keyboard dispatcher. Attached for the lifetime of the
    /// event loop; overlays get first refusal, then the page shortcuts.
    pub fn on_key(&mut self, key: KeyEvent) -> Option<Signal> {
        // Quit chords work everywhere.
        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c'))
            | (KeyModifiers::CONTROL, KeyCode::Char('q')) => return Some(Signal::Quit),
            _ => {}
        }

        if self.help_open {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => self.help_open = false,
                _ => {}
            }
            return None;
        }

        if self.modal.open {
            match self.modal.on_key(key, &self.index) {
                Some(ModalEffect::Navigate(href)) => self.navigate(&href),
                Some(ModalEffect::Dismissed) | None => {}
            }
            return None;
        }

        match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('k')) => self.modal.open(),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, code) => match code {
                KeyCode::Char('/') | KeyCode::Char('s') => self.modal.open(),
                KeyCode::Char('?') => self.help_open = true,
                KeyCode::Char('n') | KeyCode::Right => self.next_page(),
                KeyCode::Char('p') | KeyCode::Left => self.prev_page(),
                KeyCode::Char('h') => self.go_home(),
                KeyCode::Char('q') => return Some(Signal::Quit),
                KeyCode::Esc | KeyCode::Backspace => self.back(),
                KeyCode::Down | KeyCode::Char('j') => self.cursor_down(),
                KeyCode::Up | KeyCode::Char('k') => self.cursor_up(),
                KeyCode::Enter => self.open_under_cursor(),
                _ => {}
            },
            _ => {}
        }
        None
    }
}
