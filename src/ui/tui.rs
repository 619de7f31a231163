use crate::core::config::Settings;
use crate::core::error::Result;
use crate::note::workflow::{create_note, NoteDraft};
use crate::search::client::{meets_query_threshold, TaxonomyClient, MIN_QUERY_LEN};
use crate::search::results::ResultList;
use crate::storage::vault::FsVault;
use crossterm::cursor;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use std::io;
use tokio::runtime::Runtime;

/// Screen states for the TUI flow
#[derive(PartialEq)]
enum Screen {
    Welcome,
    Search,
}

/// Map a terminal position to a result entry.
///
/// `offset` is the index of the first visible entry (the list scrolls to keep
/// the selection visible); the block border occupies the outermost rows and
/// columns of `area`.
pub fn hit_test(area: Rect, offset: usize, len: usize, column: u16, row: u16) -> Option<usize> {
    if column < area.x + 1 || column >= area.x + area.width.saturating_sub(1) {
        return None;
    }
    if row < area.y + 1 || row >= area.y + area.height.saturating_sub(1) {
        return None;
    }

    let index = offset + (row - area.y - 1) as usize;
    if index < len {
        Some(index)
    } else {
        None
    }
}

/// Interactive search interface: type a species name, pick a match, get a note
pub struct SearchTui {
    // Screen state
    screen: Screen,

    // Search state
    query: String,
    list: ResultList,
    search_error: Option<String>,

    // Outcome of the last note creation, shown on the welcome screen
    status_message: Option<String>,

    // Last rendered results area and scroll offset, used to map mouse
    // positions to entries
    results_area: Option<Rect>,
    list_offset: usize,

    // Core components
    settings: Settings,
    client: TaxonomyClient,
    vault: FsVault,
    runtime: Runtime,
}

impl SearchTui {
    pub fn new(settings: Settings, client: TaxonomyClient, vault: FsVault, runtime: Runtime) -> Self {
        Self {
            screen: Screen::Welcome,
            query: String::new(),
            list: ResultList::new(),
            search_error: None,
            status_message: None,
            results_area: None,
            list_offset: 0,
            settings,
            client,
            vault,
            runtime,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;

        // Always restore terminal, even if we early-return with an error.
        struct TerminalRestore;
        impl Drop for TerminalRestore {
            fn drop(&mut self) {
                let _ = disable_raw_mode();
                let mut stdout = io::stdout();
                let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture, cursor::Show);
            }
        }
        let _restore = TerminalRestore;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = ratatui::Terminal::new(backend)?;

        let mut should_quit = false;

        while !should_quit {
            terminal.draw(|f| self.render_ui(f))?;

            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match self.screen {
                    Screen::Welcome => match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => {
                            should_quit = true;
                        }
                        KeyCode::Enter => {
                            self.open_search();
                        }
                        _ => {}
                    },
                    Screen::Search => {
                        self.on_search_key(key);
                    }
                },
                Event::Mouse(mouse) if self.screen == Screen::Search => {
                    self.handle_mouse(mouse);
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn open_search(&mut self) {
        self.screen = Screen::Search;
        self.query.clear();
        self.list.clear();
        self.list_offset = 0;
        self.search_error = None;
        self.status_message = None;
    }

    fn close_search(&mut self) {
        self.screen = Screen::Welcome;
        self.query.clear();
        self.list.clear();
        self.list_offset = 0;
        self.search_error = None;
    }

    /// Handle one key press on the search screen.
    ///
    /// Control-modified characters are key chords, not input; only `Ctrl+U`
    /// (clear) is bound.
    pub fn on_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.close_search();
            }
            KeyCode::Enter => {
                self.commit_active();
            }
            KeyCode::Up => {
                self.list.move_up();
            }
            KeyCode::Down => {
                self.list.move_down();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.query.clear();
                self.run_query();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.query.push(c);
                self.run_query();
            }
            KeyCode::Backspace => {
                self.query.pop();
                self.run_query();
            }
            _ => {}
        }
    }

    /// The query as currently typed
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Issue a search for the current query.
    ///
    /// Queries below the length gate clear the list without a request. The
    /// request is awaited right here, so responses cannot arrive out of
    /// order. Failures surface as an inline message instead of killing the
    /// loop.
    fn run_query(&mut self) {
        if !meets_query_threshold(&self.query) {
            self.list.clear();
            self.list_offset = 0;
            self.search_error = None;
            return;
        }

        match self.runtime.block_on(self.client.search(&self.query)) {
            Ok(results) => {
                self.search_error = None;
                self.list.replace(results);
            }
            Err(e) => {
                self.list.clear();
                self.search_error = Some(e.to_string());
            }
        }
        self.list_offset = 0;
    }

    /// Create a note for the highlighted result.
    ///
    /// The search interface closes whether or not the create succeeded; the
    /// outcome lands on the welcome status line.
    fn commit_active(&mut self) {
        let result = match self.list.active_result() {
            Some(r) => r.clone(),
            None => return,
        };

        self.status_message = Some(match create_note(&result, &self.settings, &self.vault) {
            Ok(path) => format!("Created {}", path.display()),
            Err(e) => format!("Note not created: {}", e),
        });

        self.close_search();
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let index = match self.result_at(mouse.column, mouse.row) {
            Some(i) => i,
            None => return,
        };

        match mouse.kind {
            MouseEventKind::Moved => {
                self.list.set_active(index);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.list.set_active(index);
                self.commit_active();
            }
            _ => {}
        }
    }

    fn result_at(&self, column: u16, row: u16) -> Option<usize> {
        hit_test(
            self.results_area?,
            self.list_offset,
            self.list.len(),
            column,
            row,
        )
    }

    fn render_ui(&mut self, f: &mut Frame) {
        let size = f.size();
        let background = Block::default().style(Style::default().bg(Color::Rgb(35, 35, 35)));
        f.render_widget(background, size);

        match self.screen {
            Screen::Welcome => self.render_welcome(f),
            Screen::Search => self.render_search(f),
        }
    }

    fn render_welcome(&mut self, f: &mut Frame) {
        let size = f.size();
        let muted = Color::Rgb(140, 140, 140);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Banner + status
                Constraint::Length(2), // Footer (border + text)
            ])
            .split(size);

        let banner: &[&str] = &[
            "",
            "   _     _         _             _       ",
            "  | |__ (_)_ __ __| |_ __   ___ | |_ ___ ",
            "  | '_ \\| | '__/ _` | '_ \\ / _ \\| __/ _ \\",
            "  | |_) | | | | (_| | | | | (_) | ||  __/",
            "  |_.__/|_|_|  \\__,_|_| |_|\\___/ \\__\\___|",
            "",
            "        eBird taxonomy search  >(.)__",
            "                                (___/ ",
        ];

        let mut lines: Vec<Line> = banner
            .iter()
            .map(|line| {
                Line::from(Span::styled(
                    *line,
                    Style::default().fg(Color::Rgb(214, 175, 0)).add_modifier(Modifier::BOLD),
                ))
            })
            .collect();

        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Notes folder: {}", self.settings.folder),
            Style::default().fg(muted),
        )));

        if let Some(msg) = &self.status_message {
            let color = if msg.starts_with("Created") {
                Color::Rgb(70, 200, 90)
            } else {
                Color::Rgb(235, 90, 90)
            };
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                msg.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::NONE))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, chunks[0]);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(": Search  "),
            Span::styled("q", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            Span::raw(": Quit"),
        ]))
        .style(Style::default().fg(muted))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(muted)),
        );
        f.render_widget(footer, chunks[1]);
    }

    fn render_search(&mut self, f: &mut Frame) {
        let size = f.size();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(3), // Search bar
                Constraint::Min(0),    // Results
                Constraint::Length(2), // Footer (border + text)
            ])
            .split(size);

        // Title (top-left)
        let title = Paragraph::new(Line::from(Span::styled(
            "birdnote",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::NONE))
        .alignment(Alignment::Left);
        f.render_widget(title, chunks[0]);

        // Search bar
        let search_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Span::styled(
                "Search eBird",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ));

        let search_text = if self.query.is_empty() {
            Span::styled("Type a species name...", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(&self.query, Style::default().fg(Color::White))
        };

        let search_paragraph = Paragraph::new(Line::from(search_text)).block(search_block);
        f.render_widget(search_paragraph, chunks[1]);

        // Results area
        if self.list.is_empty() {
            self.results_area = None;
            self.render_empty_results(f, chunks[2]);
        } else {
            let result_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([
                    Constraint::Percentage(55), // Results list
                    Constraint::Percentage(45), // Details panel
                ])
                .split(chunks[2]);

            self.results_area = Some(result_chunks[0]);

            let items: Vec<ListItem> = self
                .list
                .results()
                .iter()
                .enumerate()
                .map(|(i, result)| {
                    let style = if i == self.list.active_index() {
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Yellow)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default()
                    };
                    ListItem::new(Line::from(Span::styled(result.name.clone(), style)))
                })
                .collect();

            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::White))
                        .title(vec![
                            Span::styled(
                                "Results",
                                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                            ),
                            Span::raw(format!(" ({} found)", self.list.len())),
                        ]),
                )
                .highlight_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                );

            // Keep the scroll offset across frames so mouse positions map to
            // the entries actually on screen.
            let mut list_state = ListState::default().with_offset(self.list_offset);
            list_state.select(Some(self.list.active_index()));
            f.render_stateful_widget(list, result_chunks[0], &mut list_state);
            self.list_offset = list_state.offset();

            if let Some(result) = self.list.active_result() {
                let draft = NoteDraft::from_result(result);
                let details = self.render_details(&draft);
                f.render_widget(details, result_chunks[1]);
            }
        }

        // Footer
        let footer = Paragraph::new(Line::from(vec![
            Span::styled("↑↓", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(": Navigate  "),
            Span::styled("Enter", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
            Span::raw(": Create note  "),
            Span::styled("Ctrl+U", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
            Span::raw(": Clear  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(": Close"),
        ]))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(footer, chunks[3]);
    }

    fn render_empty_results(&self, f: &mut Frame, area: Rect) {
        let lines = if let Some(err) = &self.search_error {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    err.clone(),
                    Style::default().fg(Color::Rgb(235, 90, 90)).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Keep typing to retry, or check your settings.",
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        } else if meets_query_threshold(&self.query) {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No species found. Try a different name.",
                    Style::default().fg(Color::White),
                )),
            ]
        } else {
            vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!("Type at least {} characters to search", MIN_QUERY_LEN),
                    Style::default().fg(Color::White),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    "Common or scientific names both work",
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        };

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::White))
                    .title("Results"),
            )
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
    }

    fn render_details(&self, draft: &NoteDraft) -> Paragraph<'static> {
        let scientific = if draft.scientific_name.is_empty() {
            Span::styled("(unknown)", Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(
                draft.scientific_name.clone(),
                Style::default().fg(Color::White).add_modifier(Modifier::ITALIC),
            )
        };

        let target = format!("{}/{}.md", self.settings.folder, draft.common_name);

        let lines = vec![
            Line::from(vec![
                Span::styled("Common name: ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::styled(draft.common_name.clone(), Style::default().fg(Color::White)),
            ]),
            Line::from(vec![
                Span::styled("Scientific:  ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                scientific,
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("eBird: ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::styled(draft.ebird_url.clone(), Style::default().fg(Color::White)),
            ]),
            Line::from(vec![
                Span::styled("BotW:  ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::styled(draft.birds_of_the_world_url.clone(), Style::default().fg(Color::White)),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Note:  ", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
                Span::styled(target, Style::default().fg(Color::White)),
            ]),
        ];

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan))
                    .title("Note preview"),
            )
            .wrap(Wrap { trim: false })
    }
}
