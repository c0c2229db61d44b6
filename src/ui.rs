use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use kolko_stoji_realita::{
    children_label, format_thousands, texts, CommentCategory, CostInput, EstimateReport,
    HousingType, Region,
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;

/// Highest child count offered as a choice (shown as "3+")
const MAX_CHILDREN_CHOICE: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Question {
    Region,
    Housing,
    Children,
    Car,
}

impl Question {
    pub fn next(&self) -> Self {
        match self {
            Question::Region => Question::Housing,
            Question::Housing => Question::Children,
            Question::Children => Question::Car,
            Question::Car => Question::Region,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Question::Region => Question::Car,
            Question::Housing => Question::Region,
            Question::Children => Question::Housing,
            Question::Car => Question::Children,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Question::Region => texts::QUESTION_REGION,
            Question::Housing => texts::QUESTION_HOUSING,
            Question::Children => texts::QUESTION_CHILDREN,
            Question::Car => texts::QUESTION_CAR,
        }
    }
}

pub struct App {
    pub input: CostInput,
    pub focus: Question,
    pub show_result: bool,
    pub report: Option<EstimateReport>,
}

impl App {
    pub fn new(input: CostInput) -> Self {
        Self {
            input,
            focus: Question::Region,
            show_result: false,
            report: None,
        }
    }

    pub fn calculate(&mut self) {
        self.report = Some(EstimateReport::new(self.input));
        self.show_result = true;
    }

    /// Changing the region refreshes a visible result straight away
    pub fn set_region(&mut self, region: Region) {
        self.input.region = region;
        if self.show_result {
            self.report = Some(EstimateReport::new(self.input));
        }
    }

    pub fn set_housing(&mut self, housing: HousingType) {
        self.input.housing = housing;
    }

    pub fn set_children(&mut self, children: u32) {
        self.input.children = children.min(MAX_CHILDREN_CHOICE);
    }

    pub fn set_car(&mut self, has_car: bool) {
        self.input.has_car = has_car;
    }

    pub fn next_question(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn previous_question(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Move the focused answer one option to the right
    pub fn select_next(&mut self) {
        match self.focus {
            Question::Region => self.set_region(self.input.region.next()),
            Question::Housing => self.set_housing(self.input.housing.next()),
            Question::Children => {
                let next = if self.input.children >= MAX_CHILDREN_CHOICE {
                    0
                } else {
                    self.input.children + 1
                };
                self.set_children(next);
            }
            Question::Car => self.set_car(!self.input.has_car),
        }
    }

    /// Move the focused answer one option to the left
    pub fn select_previous(&mut self) {
        match self.focus {
            Question::Region => self.set_region(self.input.region.previous()),
            Question::Housing => self.set_housing(self.input.housing.previous()),
            Question::Children => {
                let previous = if self.input.children == 0 {
                    MAX_CHILDREN_CHOICE
                } else {
                    self.input.children.min(MAX_CHILDREN_CHOICE) - 1
                };
                self.set_children(previous);
            }
            Question::Car => self.set_car(!self.input.has_car),
        }
    }

    /// Quick switch to the n-th other region listed under the result (1-based)
    pub fn jump_to_other_region(&mut self, n: usize) {
        if !self.show_result || n == 0 {
            return;
        }
        let target = self
            .report
            .as_ref()
            .and_then(|report| report.other_regions.get(n - 1))
            .map(|other| other.region);

        if let Some(region) = target {
            self.set_region(region);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(CostInput::default())
    }
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    ui_outcome(res)
}

/// Surface a failed event loop once the terminal is restored
fn ui_outcome(res: io::Result<()>) -> Result<()> {
    res.context("Terminal UI failed")
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Enter | KeyCode::Char(' ') => app.calculate(),
                KeyCode::BackTab => app.previous_question(),
                KeyCode::Tab => {
                    if key.modifiers.contains(KeyModifiers::SHIFT) {
                        app.previous_question();
                    } else {
                        app.next_question();
                    }
                }
                KeyCode::Down | KeyCode::Char('j') => app.next_question(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_question(),
                KeyCode::Right | KeyCode::Char('l') => app.select_next(),
                KeyCode::Left | KeyCode::Char('h') => app.select_previous(),
                KeyCode::Char(c @ '1'..='3') => {
                    app.jump_to_other_region(c as usize - '0' as usize);
                }
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Calculator + result
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_header(f, chunks[0]);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(50), // Questions
            Constraint::Percentage(50), // Result
        ])
        .split(chunks[1]);

    render_questions(f, content_chunks[0], app);
    render_result(f, content_chunks[1], app);

    render_status_bar(f, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header_text = vec![
        Line::from(vec![
            Span::styled(
                texts::HEADLINE,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(texts::HEADLINE_SUB, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(texts::TAGLINE, Style::default().fg(Color::Gray))),
    ];

    let header = Paragraph::new(header_text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" {} ", texts::PROJECT_NAME.to_uppercase())),
    );

    f.render_widget(header, area);
}

fn choice_spans(options: Vec<(String, bool)>) -> Vec<Span<'static>> {
    let mut spans = vec![Span::raw("  ")];
    for (i, (label, selected)) in options.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(format!(" {} ", label), style));
    }
    spans
}

fn render_questions(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let input = &app.input;
    let questions = [
        (
            Question::Region,
            Region::ALL
                .iter()
                .map(|r| (r.label().to_string(), *r == input.region))
                .collect::<Vec<_>>(),
        ),
        (
            Question::Housing,
            HousingType::ALL
                .iter()
                .map(|h| (h.label().to_string(), *h == input.housing))
                .collect(),
        ),
        (
            Question::Children,
            (0..=MAX_CHILDREN_CHOICE)
                .map(|n| (children_label(n), n == input.children.min(MAX_CHILDREN_CHOICE)))
                .collect(),
        ),
        (
            Question::Car,
            [false, true]
                .iter()
                .map(|v| (texts::yes_no(*v).to_string(), *v == input.has_car))
                .collect(),
        ),
    ];

    for (i, (question, options)) in questions.into_iter().enumerate() {
        let border = if question == app.focus {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let panel = Paragraph::new(Line::from(choice_spans(options))).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" {} ", question.title())),
        );
        f.render_widget(panel, rows[i]);
    }

    let button = Paragraph::new(Line::from(Span::styled(
        format!("{}  (Enter)", texts::CALCULATE),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::White)));
    f.render_widget(button, rows[4]);
}

fn category_color(category: CommentCategory) -> Color {
    match category {
        CommentCategory::Modest => Color::Green,
        CommentCategory::Typical => Color::Yellow,
        CommentCategory::High => Color::Red,
    }
}

fn render_result(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(format!(" {} ", texts::RESULT_TITLE));

    let report = match (&app.report, app.show_result) {
        (Some(report), true) => report,
        _ => {
            let hint = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "  Vyplň 4 otázky a stlač Enter.",
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
                )),
            ])
            .block(block);
            f.render_widget(hint, area);
            return;
        }
    };

    let color = category_color(report.category);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            format_thousands(report.estimate),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(texts::PER_MONTH, Style::default().fg(Color::Gray)))
            .alignment(Alignment::Center),
        Line::from(""),
        Line::from(Span::styled(
            report.message.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::ITALIC),
        ))
        .alignment(Alignment::Center),
        Line::from(""),
        Line::from("  ─────────────────────────────────────"),
        Line::from(Span::styled(
            format!("  {}", texts::OTHER_REGIONS),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
    ];

    for (i, other) in report.other_regions.iter().enumerate() {
        let diff_color = if other.difference < 0 { Color::Green } else { Color::Red };
        content.push(Line::from(vec![
            Span::styled(format!("  {} ", i + 1), Style::default().fg(Color::Yellow)),
            Span::raw(format!("{:<12}", other.label)),
            Span::raw(format!("{:>8} €", format_thousands(other.estimate))),
            Span::styled(format!("  ({:+})", other.difference), Style::default().fg(diff_color)),
        ]));
    }

    content.push(Line::from("  ─────────────────────────────────────"));
    content.push(Line::from(Span::styled(
        "  Zdieľať:",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )));
    for line in report.share_text.lines() {
        content.push(Line::from(Span::styled(
            format!("  {}", line),
            Style::default().fg(Color::Gray),
        )));
    }
    content.push(Line::from(""));
    content.push(Line::from(Span::styled(
        format!("  {}", texts::DISCLAIMER),
        Style::default().fg(Color::DarkGray),
    )));

    let panel = Paragraph::new(content).wrap(Wrap { trim: false }).block(block);
    f.render_widget(panel, area);
}

fn render_status_bar(f: &mut Frame, area: Rect) {
    let status_spans = vec![
        Span::styled(" Tab", Style::default().fg(Color::Yellow)),
        Span::raw(" Otázka | "),
        Span::styled("←/→", Style::default().fg(Color::Yellow)),
        Span::raw(" Odpoveď | "),
        Span::styled("Enter", Style::default().fg(Color::Yellow)),
        Span::raw(" Vypočítať | "),
        Span::styled("1-3", Style::default().fg(Color::Yellow)),
        Span::raw(" Iný kraj | "),
        Span::styled("q", Style::default().fg(Color::Red)),
        Span::raw(" Koniec | "),
        Span::styled(texts::footer(), Style::default().fg(Color::DarkGray)),
    ];

    let status_bar = Paragraph::new(Line::from(status_spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );

    f.render_widget(status_bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_loop_failure_is_reported() {
        assert!(ui_outcome(Ok(())).is_ok());

        let err = ui_outcome(Err(io::Error::new(io::ErrorKind::BrokenPipe, "tty gone"))).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.starts_with("Terminal UI failed"));
        assert!(message.contains("tty gone"));
    }

    #[test]
    fn test_calculate_shows_result() {
        let mut app = App::default();
        assert!(!app.show_result);
        assert!(app.report.is_none());

        app.calculate();

        assert!(app.show_result);
        assert_eq!(app.report.as_ref().unwrap().estimate, 1310);
    }

    #[test]
    fn test_region_change_recomputes_visible_result() {
        let mut app = App::default();
        app.calculate();

        app.set_region(Region::Vychod);

        assert_eq!(app.report.as_ref().unwrap().estimate, 1030);
    }

    #[test]
    fn test_region_change_before_calculate_keeps_result_hidden() {
        let mut app = App::default();
        app.set_region(Region::Stred);

        assert!(!app.show_result);
        assert!(app.report.is_none());
    }

    #[test]
    fn test_other_answers_wait_for_calculate() {
        let mut app = App::default();
        app.calculate();

        app.set_car(true);
        assert_eq!(app.report.as_ref().unwrap().estimate, 1310);

        app.calculate();
        assert_eq!(app.report.as_ref().unwrap().estimate, 1510);
    }

    #[test]
    fn test_children_choice_wraps_and_caps() {
        let mut app = App::default();
        app.focus = Question::Children;

        for expected in [1, 2, 3, 0] {
            app.select_next();
            assert_eq!(app.input.children, expected);
        }

        app.select_previous();
        assert_eq!(app.input.children, 3);

        app.set_children(9);
        assert_eq!(app.input.children, 3);
    }

    #[test]
    fn test_question_navigation_wraps() {
        let mut app = App::default();
        app.previous_question();
        assert_eq!(app.focus, Question::Car);
        app.next_question();
        assert_eq!(app.focus, Question::Region);
    }

    #[test]
    fn test_jump_to_other_region() {
        let mut app = App::default();

        // Ignored until a result is visible
        app.jump_to_other_region(1);
        assert_eq!(app.input.region, Region::Bratislava);

        app.calculate();
        app.jump_to_other_region(3);
        assert_eq!(app.input.region, Region::Vychod);
        assert_eq!(app.report.as_ref().unwrap().input.region, Region::Vychod);

        // Out of range is a no-op
        app.jump_to_other_region(4);
        assert_eq!(app.input.region, Region::Vychod);
    }
}
