//! Interactive TUI (Terminal User Interface) for Primer.
//!
//! Provides a two-pane learning view with:
//! - A search box that filters the topic list on every keystroke
//! - A sidebar of matching topics with the matched text highlighted
//! - A detail pane with the topic content, exercise hint and quiz
//! - A route prompt for jumping straight to `#/topic/{id}`

use crate::app::{route_for, App};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use primer_core::{
    quiz::grade, Route, SearchField, SearchIndicator, SearchQuery, Topic, TopicIndex, Verdict,
};
use ratatui::{prelude::*, widgets::*};
use std::io;
use std::time::{Duration, Instant};
use tracing::debug;

/// Which pane receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Search,
    Detail,
}

/// A sidebar entry: position in the index plus the field that matched.
#[derive(Debug, Clone, Copy)]
struct Match {
    index: usize,
    field: Option<SearchField>,
}

/// TUI application state.
struct TuiApp {
    /// The main application
    app: App,

    /// Current search query string
    query: String,

    /// Topics passing the current query, in catalog order
    matches: Vec<Match>,

    /// Selected sidebar row
    selected: usize,

    indicator: SearchIndicator,

    /// What the detail pane shows
    route: Route,

    focus: Focus,

    quiz: primer_core::QuizSession,

    show_hint: bool,

    detail_scroll: u16,

    /// Route prompt input, when open
    prompt: Option<String>,

    /// Whether we should quit
    should_quit: bool,

    /// Status message
    status_message: Option<String>,

    /// Drives the spinner animation
    started: Instant,
}

/// The topic opened by `route`. The landing view has none, so quiz and hint
/// keys do nothing there.
fn open_topic<'a>(app: &'a App, route: &Route) -> Option<&'a Topic> {
    app.index.resolve_route(route)
}

impl TuiApp {
    fn new(app: App) -> Self {
        let indicator = SearchIndicator::new(app.config.debounce());
        let mut tui_app = TuiApp {
            app,
            query: String::new(),
            matches: Vec::new(),
            selected: 0,
            indicator,
            route: Route::Landing,
            focus: Focus::Search,
            quiz: primer_core::QuizSession::new(),
            show_hint: false,
            detail_scroll: 0,
            prompt: None,
            should_quit: false,
            status_message: None,
            started: Instant::now(),
        };
        tui_app.refilter(Instant::now());
        tui_app
    }

    fn index(&self) -> &TopicIndex {
        &self.app.index
    }

    /// Recompute the sidebar for the current query.
    fn refilter(&mut self, now: Instant) {
        let query = SearchQuery::new(&self.query);
        let index = &self.app.index;

        self.matches = index
            .search_with_fields(&query)
            .into_iter()
            .filter_map(|r| {
                index.position(&r.topic.id).map(|i| Match {
                    index: i,
                    field: r.field,
                })
            })
            .collect();

        self.selected = 0;
        self.indicator.on_query_change(now, &self.query);
        debug!(query = %self.query, matches = self.matches.len(), "Filtered topics");
    }

    fn on_char(&mut self, c: char, now: Instant) {
        self.query.push(c);
        self.refilter(now);
    }

    fn on_backspace(&mut self, now: Instant) {
        if self.query.pop().is_some() {
            self.refilter(now);
        }
    }

    fn clear_query(&mut self, now: Instant) {
        self.query.clear();
        self.refilter(now);
    }

    fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn select_next(&mut self) {
        if self.selected + 1 < self.matches.len() {
            self.selected += 1;
        }
    }

    /// The topic under the sidebar cursor.
    fn selected_topic(&self) -> Option<&Topic> {
        let m = self.matches.get(self.selected)?;
        self.index().topics().get(m.index)
    }

    fn open_selected(&mut self) {
        if let Some(route) = self.selected_topic().map(Route::for_topic) {
            self.navigate(route);
        }
    }

    /// Show `route` in the detail pane with a fresh quiz attempt.
    fn navigate(&mut self, route: Route) {
        debug!(%route, "Navigating");

        if let Some(pos) = route.topic_id().and_then(|id| self.index().position(id)) {
            if let Some(row) = self.matches.iter().position(|m| m.index == pos) {
                self.selected = row;
            }
        }

        self.route = route;
        self.quiz.reset();
        self.show_hint = false;
        self.detail_scroll = 0;
        self.focus = Focus::Detail;
        self.status_message = None;
    }

    fn select_option(&mut self, index: usize) {
        if let Some(topic) = open_topic(&self.app, &self.route) {
            self.quiz.select(&topic.quiz, index);
        }
    }

    fn move_option(&mut self, delta: isize) {
        if let Some(topic) = open_topic(&self.app, &self.route) {
            self.quiz.move_selection(&topic.quiz, delta);
        }
    }

    fn submit_answer(&mut self) {
        let Some(topic) = open_topic(&self.app, &self.route) else {
            return;
        };

        self.status_message = match self.quiz.submit(&topic.quiz) {
            Some(Verdict::Correct) => Some("Correct! Well done.".to_string()),
            Some(Verdict::Incorrect) => Some("Not quite. Press r to try again.".to_string()),
            None => Some("Select an answer first.".to_string()),
        };
    }

    fn try_again(&mut self) {
        if self.quiz.is_submitted() {
            self.quiz.reset();
            self.status_message = None;
        }
    }

    /// Option index whose id is `c`, for answering by letter.
    fn option_for_char(&self, c: char) -> Option<usize> {
        let topic = open_topic(&self.app, &self.route)?;
        let mut buf = [0u8; 4];
        let id = c.encode_utf8(&mut buf);
        topic
            .quiz
            .options
            .iter()
            .position(|o| o.id.eq_ignore_ascii_case(id))
    }

    fn on_key(&mut self, key: KeyEvent, now: Instant) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        if ctrl && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if let Some(input) = self.prompt.as_mut() {
            match key.code {
                KeyCode::Esc => self.prompt = None,
                KeyCode::Enter => {
                    let route = route_for(input);
                    self.prompt = None;
                    self.navigate(route);
                }
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(c) if !ctrl => input.push(c),
                _ => {}
            }
            return;
        }

        match self.focus {
            Focus::Search => self.on_search_key(key, ctrl, now),
            Focus::Detail => self.on_detail_key(key),
        }
    }

    fn on_search_key(&mut self, key: KeyEvent, ctrl: bool, now: Instant) {
        match key.code {
            KeyCode::Char('u') if ctrl => self.clear_query(now),
            KeyCode::Char('g') if ctrl => self.prompt = Some(String::new()),
            KeyCode::Char(_) if ctrl => {}
            KeyCode::Char(c) => self.on_char(c, now),
            KeyCode::Backspace => self.on_backspace(now),
            KeyCode::Esc if !self.query.is_empty() => self.clear_query(now),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::Home => self.selected = 0,
            KeyCode::End => self.selected = self.matches.len().saturating_sub(1),
            KeyCode::Enter => self.open_selected(),
            KeyCode::Tab => self.focus = Focus::Detail,
            _ => {}
        }
    }

    fn on_detail_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Tab | KeyCode::Char('/') => self.focus = Focus::Search,
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('g') => self.prompt = Some(String::new()),
            KeyCode::Char('h') => self.show_hint = !self.show_hint,
            KeyCode::Char('r') => self.try_again(),
            KeyCode::Char('j') | KeyCode::PageDown => {
                self.detail_scroll = self.detail_scroll.saturating_add(5)
            }
            KeyCode::Char('k') | KeyCode::PageUp => {
                self.detail_scroll = self.detail_scroll.saturating_sub(5)
            }
            KeyCode::Char(c) => {
                if let Some(i) = self.option_for_char(c) {
                    self.select_option(i);
                }
            }
            KeyCode::Up => self.move_option(-1),
            KeyCode::Down => self.move_option(1),
            KeyCode::Enter => self.submit_answer(),
            _ => {}
        }
    }

    /// Sidebar heading. The match count only appears once the query has
    /// actually hidden some topics.
    fn banner(&self) -> String {
        let total = self.index().len();
        if self.matches.len() < total {
            format!("Found {} of {} topics", self.matches.len(), total)
        } else {
            format!("{} topics", total)
        }
    }

    /// Spinner frame while the search indicator is active.
    fn spinner(&self, now: Instant) -> Option<&'static str> {
        const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];
        self.indicator.is_active(now).then(|| {
            let tick = now.duration_since(self.started).as_millis() / 100;
            FRAMES[(tick % FRAMES.len() as u128) as usize]
        })
    }
}

/// Run the TUI application.
pub fn run(app: App) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut tui_app = TuiApp::new(app);

    // Main loop
    let result = run_loop(&mut terminal, &mut tui_app);
    tui_app.indicator.cancel();

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// Main event loop.
fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut TuiApp) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key, Instant::now());
                }
            }
        }

        app.indicator.poll(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

mod ui {
    use super::*;
    use crate::render::{self, code_spans, landing_blocks, topic_blocks};
    use primer_core::highlight;

    /// Draw the UI.
    pub fn draw(f: &mut Frame, app: &TuiApp) {
        let now = Instant::now();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Search box
                Constraint::Min(10),   // Topics and detail
                Constraint::Length(1), // Status bar / prompt
            ])
            .split(f.area());

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(chunks[1]);

        draw_search_box(f, app, chunks[0], now);
        draw_sidebar(f, app, body[0]);
        draw_detail(f, app, body[1]);

        if app.prompt.is_some() {
            draw_prompt(f, app, chunks[2]);
        } else {
            draw_status_bar(f, app, chunks[2]);
        }
    }

    fn focus_border(active: bool) -> Style {
        if active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    /// Draw the search input box.
    fn draw_search_box(f: &mut Frame, app: &TuiApp, area: Rect, now: Instant) {
        let title = match app.spinner(now) {
            Some(frame) => format!(" Search {} searching... ", frame),
            None => " Search (Ctrl+U to clear) ".to_string(),
        };

        let active = app.focus == Focus::Search && app.prompt.is_none();
        let input = Paragraph::new(app.query.as_str())
            .style(Style::default().fg(Color::Yellow))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(focus_border(active))
                    .title(title),
            );
        f.render_widget(input, area);

        if active {
            f.set_cursor_position(Position::new(
                area.x + app.query.chars().count() as u16 + 1,
                area.y + 1,
            ));
        }
    }

    /// Draw the topic list with highlighted titles.
    fn draw_sidebar(f: &mut Frame, app: &TuiApp, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(focus_border(app.focus == Focus::Search))
            .title(format!(" {} ", app.index().title()));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(inner);

        f.render_widget(
            Paragraph::new(app.banner()).style(Style::default().fg(Color::Gray)),
            rows[0],
        );

        if app.matches.is_empty() {
            let empty = Paragraph::new("No topics match your search.")
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true });
            f.render_widget(empty, rows[1]);
            return;
        }

        let ui_config = &app.app.config.ui;
        let match_style = if ui_config.highlight_matches {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let topics = app.index().topics();
        let items: Vec<ListItem> = app
            .matches
            .iter()
            .filter_map(|m| {
                let topic = topics.get(m.index)?;
                let mut spans: Vec<Span> = highlight(&topic.title, &app.query)
                    .into_iter()
                    .map(|seg| {
                        if seg.matched {
                            Span::styled(seg.text, match_style)
                        } else {
                            Span::raw(seg.text)
                        }
                    })
                    .collect();

                if ui_config.show_match_field {
                    if let Some(field) = m.field.filter(|f| *f != SearchField::Title) {
                        spans.push(Span::styled(
                            format!(" ({})", field),
                            Style::default().fg(Color::DarkGray),
                        ));
                    }
                }

                Some(ListItem::new(Line::from(spans)))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().bg(Color::Blue).fg(Color::White))
            .highlight_symbol("> ");
        let mut state = ListState::default().with_selected(Some(app.selected));
        f.render_stateful_widget(list, rows[1], &mut state);
    }

    /// Draw the detail pane for the current route.
    fn draw_detail(f: &mut Frame, app: &TuiApp, area: Rect) {
        let lines = match &app.route {
            Route::Landing => landing_lines(app),
            Route::Topic(id) => match open_topic(&app.app, &app.route) {
                Some(topic) => topic_lines(app, topic),
                None => not_found_lines(id),
            },
        };

        let detail = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((app.detail_scroll, 0))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(focus_border(app.focus == Focus::Detail))
                    .title(format!(" {} ", app.route)),
            );
        f.render_widget(detail, area);
    }

    fn not_found_lines(id: &str) -> Vec<Line<'static>> {
        vec![
            Line::styled(
                "Topic Not Found",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Line::raw(""),
            Line::raw(format!(
                "Sorry, we couldn't find the topic \"{}\" you were looking for.",
                id
            )),
            Line::raw("Press Esc to go back to the topic list."),
        ]
    }

    /// Text with `code` spans styled.
    fn inline(text: &str, base: Style) -> Vec<Span<'static>> {
        code_spans(text)
            .into_iter()
            .map(|(part, is_code)| {
                if is_code {
                    Span::styled(part, Style::default().fg(Color::Green))
                } else {
                    Span::styled(part, base)
                }
            })
            .collect()
    }

    fn heading_style() -> Style {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    }

    fn landing_lines(app: &TuiApp) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::styled(
                format!("Welcome to {}", app.index().title()),
                heading_style(),
            ),
            Line::raw("Pick a topic from the list and press Enter."),
        ];

        if let Some(topic) = app.app.landing_topic() {
            lines.push(Line::raw(""));
            lines.extend(block_lines(landing_blocks(topic)));
        }

        lines
    }

    fn block_lines(blocks: Vec<render::Block>) -> Vec<Line<'static>> {
        let heading = heading_style();
        let mut lines = Vec::new();

        for block in blocks {
            match block {
                render::Block::Title(text) => lines.push(Line::styled(
                    text,
                    heading.add_modifier(Modifier::UNDERLINED),
                )),
                render::Block::Heading(text) => {
                    lines.push(Line::raw(""));
                    lines.push(Line::styled(text, heading));
                }
                render::Block::Paragraph(text) => {
                    lines.push(Line::from(inline(&text, Style::default())))
                }
                render::Block::Bullet(text) => {
                    let mut spans = vec![Span::raw("  \u{2022} ")];
                    spans.extend(inline(&text, Style::default()));
                    lines.push(Line::from(spans));
                }
                render::Block::Code(code) => {
                    for line in code.lines() {
                        lines.push(Line::styled(
                            format!("    {}", line),
                            Style::default().fg(Color::Green),
                        ));
                    }
                }
                render::Block::Note(text) => lines.push(Line::from(inline(
                    &text,
                    Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
                ))),
            }
        }

        lines
    }

    fn topic_lines(app: &TuiApp, topic: &Topic) -> Vec<Line<'static>> {
        let heading = heading_style();
        let mut lines = block_lines(topic_blocks(topic));

        if let Some(hint) = &topic.exercise.solution_hint {
            lines.push(Line::raw(""));
            if app.show_hint {
                let mut spans = vec![Span::styled(
                    "Hint: ",
                    Style::default().add_modifier(Modifier::BOLD),
                )];
                spans.extend(inline(hint, Style::default()));
                lines.push(Line::from(spans));
            } else {
                lines.push(Line::styled(
                    "Press h to show a hint.",
                    Style::default().fg(Color::DarkGray),
                ));
            }
        }

        lines.extend(quiz_lines(app, topic, heading));
        lines
    }

    fn quiz_lines(app: &TuiApp, topic: &Topic, heading: Style) -> Vec<Line<'static>> {
        let quiz = &topic.quiz;
        let verdict = app.quiz.verdict(quiz);
        let mut lines = vec![
            Line::raw(""),
            Line::styled("Quiz", heading),
            Line::from(inline(&quiz.question, Style::default())),
        ];

        for (i, option) in quiz.options.iter().enumerate() {
            let selected = app.quiz.selected() == Some(i);
            let marker = if selected { "(\u{2022})" } else { "( )" };

            let style = match verdict {
                Some(_) if grade(quiz, &option.id) == Some(Verdict::Correct) => {
                    Style::default().fg(Color::Green)
                }
                Some(Verdict::Incorrect) if selected => Style::default().fg(Color::Red),
                _ if selected => Style::default().add_modifier(Modifier::BOLD),
                _ => Style::default(),
            };

            let mut spans = vec![Span::styled(format!("  {} {}) ", marker, option.id), style)];
            spans.extend(inline(&option.text, style));
            lines.push(Line::from(spans));
        }

        match verdict {
            Some(verdict) => {
                lines.push(Line::raw(""));
                let (text, color) = if verdict.is_correct() {
                    ("Correct! Well done.".to_string(), Color::Green)
                } else {
                    let answer = quiz
                        .correct_option()
                        .map(|o| o.text.clone())
                        .unwrap_or_default();
                    (
                        format!("Not quite. The correct answer was '{}'.", answer),
                        Color::Red,
                    )
                };
                lines.push(Line::styled(
                    text,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ));
                if let Some(explanation) = &quiz.explanation {
                    lines.push(Line::from(inline(explanation, Style::default())));
                }
                if !verdict.is_correct() {
                    lines.push(Line::styled(
                        "Press r to try again.",
                        Style::default().fg(Color::DarkGray),
                    ));
                }
            }
            None => lines.push(Line::styled(
                "Choose with the option letter or Up/Down, then press Enter.",
                Style::default().fg(Color::DarkGray),
            )),
        }

        lines
    }

    /// Draw the route prompt over the status bar.
    fn draw_prompt(f: &mut Frame, app: &TuiApp, area: Rect) {
        let input = app.prompt.as_deref().unwrap_or_default();
        let label = "Go to (id or #/topic/id): ";
        let prompt = Paragraph::new(Line::from(vec![
            Span::styled(label, Style::default().fg(Color::Cyan)),
            Span::styled(input.to_string(), Style::default().fg(Color::Yellow)),
        ]));
        f.render_widget(prompt, area);
        f.set_cursor_position(Position::new(
            area.x + (label.len() + input.chars().count()) as u16,
            area.y,
        ));
    }

    /// Draw the status bar.
    fn draw_status_bar(f: &mut Frame, app: &TuiApp, area: Rect) {
        let status = if let Some(ref msg) = app.status_message {
            msg.clone()
        } else {
            match app.focus {
                Focus::Search => {
                    "Type to filter | \u{2191}\u{2193}:Navigate Enter:Open Tab:Detail Ctrl+G:Go to Esc:Clear/Quit"
                        .to_string()
                }
                Focus::Detail => {
                    "a-d/\u{2191}\u{2193}:Choose Enter:Submit r:Try again h:Hint j/k:Scroll g:Go to Esc:Search q:Quit"
                        .to_string()
                }
            }
        };

        let status_bar = Paragraph::new(status).style(Style::default().fg(Color::Gray));
        f.render_widget(status_bar, area);
    }
}
