//! Rural Healthcare Workforce Analysis: interactive Ratatui TUI
//!
//! Layout:
//!   ┌─── header ──────────────────────────────────────────────────────────┐
//!   │  [1] Home  [2] Analysis  [3] Solutions  [4] Data                    │
//!   ├─── page body ───────────────────────────────────────────────────────┤
//!   │  Home:      intro, findings, density chart, causal-loop diagram     │
//!   │  Analysis:  variables, loops, expandable E-P-S sections             │
//!   │  Solutions: interventions table, leverage points, priorities        │
//!   │  Data:      ratio / vacancy / shortage charts (fetched on entry)    │
//!   ├─────────────────────────────────────────────────────────────────────┤
//!   │  footer (key bindings)                                              │
//!   └─────────────────────────────────────────────────────────────────────┘

use std::{
    io,
    sync::{mpsc, Arc},
    time::Duration,
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle, Context, Line as CanvasLine},
        Bar, BarChart, BarGroup, Block, Borders, Paragraph, Row, Table, Wrap,
    },
    Frame, Terminal,
};
use tokio::runtime::Runtime;

use ruralcare_contracts::StatsReport;
use ruralcare_content::{
    analysis_sections,
    diagram::{LoopTag, BADGES, CANVAS_HEIGHT, CANVAS_WIDTH, LINKS, NODES, NODE_RADIUS},
    narrative::{self, BulletGroup, LoopKind},
    ExpandableSection, Page,
};
use ruralcare_core::{
    chart::{density_rows, ratio_rows, shortage_rows, vacancy_rows},
    HealthcareStatsProvider,
};
use ruralcare_source::{SourceConfig, WorldBankSource};

// ── Domain types ──────────────────────────────────────────────────────────────

/// A view's data: requested but not yet delivered, or delivered.
#[derive(Debug, Clone, PartialEq)]
enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
}

/// Results delivered from background fetches.
#[derive(Debug)]
enum Fetched {
    Density(f64),
    /// Tagged with the Data-tab visit that requested it.
    Report { visit: u64, report: StatsReport },
}

/// What the event loop must do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    None,
    Quit,
    /// Spawn a report fetch for the given Data-tab visit.
    FetchReport(u64),
}

// ── App state ─────────────────────────────────────────────────────────────────

struct App {
    tab: Page,

    // Analysis page.
    sections: Vec<ExpandableSection>,
    cursor: usize,

    // Home density chart, fetched once at startup.
    density: LoadState<f64>,

    // Data page. Discarded whenever the tab is left.
    report: LoadState<StatsReport>,
    // Incremented on every entry to and exit from the Data tab; a report
    // carrying an older visit number is dropped.
    data_visit: u64,
}

impl App {
    fn new() -> Self {
        Self {
            tab: Page::Home,
            sections: analysis_sections(),
            cursor: 0,
            density: LoadState::Loading,
            report: LoadState::Idle,
            data_visit: 0,
        }
    }

    /// Switch tabs. Returns the visit number when a report fetch is needed.
    fn select_tab(&mut self, page: Page) -> Option<u64> {
        if page == self.tab {
            return None;
        }
        if self.tab == Page::Data {
            self.report = LoadState::Idle;
            self.data_visit += 1;
        }
        self.tab = page;
        if page == Page::Data {
            self.data_visit += 1;
            self.report = LoadState::Loading;
            return Some(self.data_visit);
        }
        None
    }

    fn move_cursor(&mut self, down: bool) {
        if self.tab != Page::Analysis || self.sections.is_empty() {
            return;
        }
        self.cursor = if down {
            (self.cursor + 1).min(self.sections.len() - 1)
        } else {
            self.cursor.saturating_sub(1)
        };
    }

    fn toggle_section(&mut self) {
        if self.tab != Page::Analysis {
            return;
        }
        if let Some(section) = self.sections.get_mut(self.cursor) {
            section.toggle();
        }
    }

    fn apply(&mut self, fetched: Fetched) {
        match fetched {
            Fetched::Density(value) => self.density = LoadState::Ready(value),
            Fetched::Report { visit, report } => {
                if self.tab == Page::Data && visit == self.data_visit {
                    self.report = LoadState::Ready(report);
                }
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        let fetch = match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Action::Quit
            }

            KeyCode::Char(digit @ '1'..='4') => {
                let index = digit as usize - '1' as usize;
                self.select_tab(Page::ALL[index])
            }
            KeyCode::Right => self.select_tab(self.tab.next()),
            KeyCode::Left => self.select_tab(self.tab.prev()),

            KeyCode::Up => {
                self.move_cursor(false);
                None
            }
            KeyCode::Down => {
                self.move_cursor(true);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_section();
                None
            }

            _ => None,
        };
        fetch.map_or(Action::None, Action::FetchReport)
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

fn ui(f: &mut Frame, app: &App) {
    let outer_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(10),   // page body
            Constraint::Length(3), // footer
        ])
        .split(f.area());

    render_header(f, outer_chunks[0], app);
    match app.tab {
        Page::Home => render_home(f, outer_chunks[1], app),
        Page::Analysis => render_analysis(f, outer_chunks[1], app),
        Page::Solutions => render_solutions(f, outer_chunks[1]),
        Page::Data => render_data(f, outer_chunks[1], app),
    }
    render_footer(f, outer_chunks[2], app);
}

fn panel(title: &str) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
}

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn bullet(text: &str) -> Line<'_> {
    Line::from(vec![
        Span::styled("  • ", Style::default().fg(Color::DarkGray)),
        Span::raw(text),
    ])
}

fn group_lines(groups: &[BulletGroup], lines: &mut Vec<Line<'static>>) {
    for group in groups {
        if let Some(title) = group.heading {
            lines.push(Line::from(Span::styled(
                title,
                Style::default().add_modifier(Modifier::BOLD),
            )));
        }
        lines.extend(group.items.iter().map(|item| bullet(item)));
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let title_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut spans: Vec<Span> = vec![Span::styled(
        format!("{}    ", narrative::SITE_TITLE),
        title_style,
    )];

    for page in Page::ALL {
        let style = if app.tab == page {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(
            format!("[{}] {}  ", page.index() + 1, page.title()),
            style,
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(header, area);
}

// ── Home ──────────────────────────────────────────────────────────────────────

fn render_home(f: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let mut lines: Vec<Line> = Vec::new();
    for paragraph in narrative::HOME_INTRO {
        lines.push(Line::from(paragraph));
        lines.push(Line::from(""));
    }
    lines.push(heading("Key Findings"));
    lines.extend(narrative::KEY_FINDINGS.into_iter().map(bullet));
    let intro = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(panel(narrative::HOME_HEADING));
    f.render_widget(intro, rows[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(rows[1]);

    render_density(f, cols[0], app);
    render_diagram(f, cols[1]);
}

fn render_density(f: &mut Frame, area: Rect, app: &App) {
    let block = panel(narrative::DENSITY_CHART_TITLE);
    let LoadState::Ready(density) = app.density else {
        let p = Paragraph::new(Span::styled(
            format!("  {}", narrative::LOADING_MESSAGE),
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(p, area);
        return;
    };

    let colours = [Color::LightRed, Color::Green];
    let bars: Vec<Bar> = density_rows(density)
        .into_iter()
        .zip(colours)
        .map(|(row, colour)| {
            Bar::default()
                .label(Line::from(row.name))
                .value(scaled(row.value, 100.0))
                .text_value(format!("{:.2}", row.value))
                .style(Style::default().fg(colour))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(12)
        .bar_gap(4);
    f.render_widget(chart, area);
}

fn render_diagram(f: &mut Frame, area: Rect) {
    let canvas = Canvas::default()
        .block(panel(narrative::DIAGRAM_TITLE))
        .x_bounds([0.0, CANVAS_WIDTH])
        .y_bounds([0.0, CANVAS_HEIGHT])
        .paint(|ctx| paint_diagram(ctx));
    f.render_widget(canvas, area);
}

/// Canvas y grows upward; diagram coordinates grow downward.
fn flip(y: f64) -> f64 {
    CANVAS_HEIGHT - y
}

fn loop_colour(tag: LoopTag) -> Color {
    match tag {
        LoopTag::R1 => Color::Red,
        LoopTag::R2 => Color::LightRed,
        LoopTag::B1 => Color::Green,
        LoopTag::External => Color::Magenta,
    }
}

/// Split a segment into `pieces` equal parts and keep every other one.
fn dashes(start: (f64, f64), end: (f64, f64), pieces: usize) -> Vec<((f64, f64), (f64, f64))> {
    let step = |i: usize| {
        let t = i as f64 / pieces as f64;
        (start.0 + (end.0 - start.0) * t, start.1 + (end.1 - start.1) * t)
    };
    (0..pieces).step_by(2).map(|i| (step(i), step(i + 1))).collect()
}

fn paint_diagram(ctx: &mut Context) {
    for node in &NODES {
        ctx.draw(&Circle {
            x: node.x,
            y: flip(node.y),
            radius: NODE_RADIUS,
            color: Color::Blue,
        });
    }

    for link in &LINKS {
        let color = loop_colour(link.loop_tag);
        let segments = if link.dashed {
            dashes(link.start, link.end, 9)
        } else {
            vec![(link.start, link.end)]
        };
        for (a, b) in segments {
            ctx.draw(&CanvasLine {
                x1: a.0,
                y1: flip(a.1),
                x2: b.0,
                y2: flip(b.1),
                color,
            });
        }
    }

    ctx.layer();

    for node in &NODES {
        ctx.print(node.x - NODE_RADIUS * 0.8, flip(node.y), node.label);
    }
    for link in &LINKS {
        ctx.print(
            link.sign_at.0,
            flip(link.sign_at.1),
            Span::styled(
                link.polarity.to_string(),
                Style::default()
                    .fg(loop_colour(link.loop_tag))
                    .add_modifier(Modifier::BOLD),
            ),
        );
    }
    for badge in &BADGES {
        ctx.print(
            badge.x,
            flip(badge.y),
            Span::styled(
                format!("{:?}", badge.tag),
                Style::default()
                    .fg(Color::White)
                    .bg(loop_colour(badge.tag))
                    .add_modifier(Modifier::BOLD),
            ),
        );
    }
}

// ── Analysis ──────────────────────────────────────────────────────────────────

fn render_analysis(f: &mut Frame, area: Rect, app: &App) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let mut left: Vec<Line> = vec![heading("Core Variables")];
    left.extend(narrative::CORE_VARIABLES.into_iter().map(bullet));
    left.push(Line::from(""));

    left.push(heading("Key Relationships"));
    for rel in &narrative::KEY_RELATIONSHIPS {
        left.push(Line::from(vec![
            Span::raw(format!("  {} → {} ", rel.from, rel.to)),
            Span::styled(
                format!("({})", rel.polarity),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]));
        left.push(Line::from(Span::styled(
            format!("      {}", rel.explanation),
            Style::default().fg(Color::Gray),
        )));
    }
    left.push(Line::from(""));

    left.push(heading("Feedback Loops"));
    for lp in &narrative::FEEDBACK_LOOPS {
        let colour = match lp.kind {
            LoopKind::Reinforcing => Color::Red,
            LoopKind::Balancing => Color::Green,
        };
        left.push(Line::from(vec![
            Span::styled(
                format!("  {} ", lp.id),
                Style::default().fg(colour).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("{} ({})", lp.name, lp.kind.label())),
        ]));
        left.push(Line::from(Span::styled(
            format!("      {}", lp.chain.join(" → ")),
            Style::default().fg(Color::Gray),
        )));
    }

    let system = Paragraph::new(left)
        .wrap(Wrap { trim: false })
        .block(panel("System Structure"));
    f.render_widget(system, cols[0]);

    let mut right: Vec<Line> = Vec::new();
    for (i, section) in app.sections.iter().enumerate() {
        let marker = if section.is_expanded() { "▾" } else { "▸" };
        let style = if i == app.cursor {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        };
        right.push(Line::from(Span::styled(
            format!("{} {}", marker, section.title),
            style,
        )));
        if section.is_expanded() {
            group_lines(section.groups, &mut right);
        }
        right.push(Line::from(""));
    }

    right.push(heading("System Archetypes"));
    for archetype in &narrative::ARCHETYPES {
        right.push(Line::from(vec![
            Span::styled(
                format!("  {}: ", archetype.name),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(archetype.description),
        ]));
    }

    let eps = Paragraph::new(right)
        .wrap(Wrap { trim: false })
        .block(panel("Event-Pattern-Structure"));
    f.render_widget(eps, cols[1]);
}

// ── Solutions ─────────────────────────────────────────────────────────────────

fn render_solutions(f: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(10), Constraint::Min(6)])
        .split(area);

    let header = Row::new(["Intervention", "Level", "Effectiveness", "Limitations"]).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    let body: Vec<Row> = narrative::EXISTING_INTERVENTIONS
        .iter()
        .map(|i| {
            Row::new([
                truncate(i.name, 32),
                i.level.label().to_string(),
                truncate(i.effectiveness, 40),
                truncate(i.limitations, 40),
            ])
        })
        .collect();
    let table = Table::new(
        body,
        [
            Constraint::Percentage(25),
            Constraint::Length(10),
            Constraint::Percentage(32),
            Constraint::Percentage(33),
        ],
    )
    .header(header)
    .block(panel("Existing Interventions"));
    f.render_widget(table, rows[0]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    let mut leverage: Vec<Line> = vec![Line::from(Span::styled(
        narrative::INTERVENTIONS_NOTE,
        Style::default().fg(Color::Gray),
    ))];
    for tier in &narrative::LEVERAGE_POINTS {
        leverage.push(Line::from(""));
        leverage.push(heading(tier.title));
        group_lines(tier.groups, &mut leverage);
    }
    let leverage = Paragraph::new(leverage)
        .wrap(Wrap { trim: false })
        .block(panel("Leverage Points"));
    f.render_widget(leverage, cols[0]);

    let mut priorities: Vec<Line> = Vec::new();
    group_lines(&narrative::IMPLEMENTATION_PRIORITIES, &mut priorities);
    let priorities = Paragraph::new(priorities)
        .wrap(Wrap { trim: false })
        .block(panel("Implementation Priorities"));
    f.render_widget(priorities, cols[1]);
}

// ── Data ──────────────────────────────────────────────────────────────────────

fn render_data(f: &mut Frame, area: Rect, app: &App) {
    let LoadState::Ready(report) = &app.report else {
        let p = Paragraph::new(Span::styled(
            format!("  {}", narrative::LOADING_MESSAGE),
            Style::default().fg(Color::DarkGray),
        ))
        .block(panel(narrative::DATA_HEADING));
        f.render_widget(p, area);
        return;
    };
    let stats = &report.stats;

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // origin line
            Constraint::Min(10),   // ratio chart
            Constraint::Length(10), // vacancy + shortage
            Constraint::Length(5), // sources
        ])
        .split(area);

    let (origin_colour, origin_note) = if report.is_fallback() {
        (Color::Yellow, report.failure.clone().unwrap_or_default())
    } else {
        (Color::Green, format!("density {:.3} per 1,000", stats.physician_density))
    };
    let status = Paragraph::new(Line::from(vec![
        Span::styled("  Source: ", Style::default().fg(Color::Gray)),
        Span::styled(
            report.origin.label(),
            Style::default()
                .fg(origin_colour)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "  {}  ",
            report.produced_at.format("%Y-%m-%d %H:%M:%S UTC")
        )),
        Span::styled(truncate(&origin_note, 80), Style::default().fg(Color::Gray)),
    ]))
    .block(panel(narrative::DATA_HEADING));
    f.render_widget(status, rows[0]);

    let mut ratio_chart = BarChart::default()
        .block(panel(&format!(
            "{} ({})",
            narrative::RATIO_CHART_TITLE,
            narrative::RATIO_CHART_SUBTITLE
        )))
        .bar_width(5)
        .bar_gap(1)
        .group_gap(3);
    for row in ratio_rows(stats) {
        let bars = [
            Bar::default()
                .label(Line::from("R"))
                .value(row.rural)
                .style(Style::default().fg(Color::LightRed)),
            Bar::default()
                .label(Line::from("U"))
                .value(row.urban)
                .style(Style::default().fg(Color::LightBlue)),
            Bar::default()
                .label(Line::from("W"))
                .value(row.who)
                .style(Style::default().fg(Color::Green)),
        ];
        ratio_chart = ratio_chart.data(BarGroup::default().label(Line::from(row.name)).bars(&bars));
    }
    f.render_widget(ratio_chart, rows[1]);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    let vacancy: Vec<Bar> = vacancy_rows(stats)
        .into_iter()
        .map(|row| {
            Bar::default()
                .label(Line::from(row.name))
                .value(scaled(row.rate, 10.0))
                .text_value(format!("{:.1}", row.rate))
                .style(Style::default().fg(Color::Yellow))
        })
        .collect();
    let vacancy = BarChart::default()
        .block(panel(narrative::VACANCY_CHART_TITLE))
        .data(BarGroup::default().bars(&vacancy))
        .bar_width(9)
        .bar_gap(2);
    f.render_widget(vacancy, cols[0]);

    let shortage: Vec<Bar> = shortage_rows(stats)
        .into_iter()
        .map(|row| {
            Bar::default()
                .label(Line::from(row.name))
                .value(scaled(row.shortage, 10.0))
                .text_value(format!("{:.0}", row.shortage))
                .style(Style::default().fg(Color::Magenta))
        })
        .collect();
    let shortage = BarChart::default()
        .block(panel(narrative::SHORTAGE_CHART_TITLE))
        .data(BarGroup::default().bars(&shortage))
        .bar_width(9)
        .bar_gap(2);
    f.render_widget(shortage, cols[1]);

    let sources = Paragraph::new(
        narrative::DATA_SOURCES
            .into_iter()
            .map(bullet)
            .collect::<Vec<_>>(),
    )
    .wrap(Wrap { trim: true })
    .block(panel("Data Sources"));
    f.render_widget(sources, rows[3]);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = vec![
        Span::styled(" [1-4 ←→] ", Style::default().fg(Color::Cyan)),
        Span::raw("Switch page  "),
    ];

    if app.tab == Page::Analysis {
        spans.push(Span::styled("[↑↓] ", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw("Select section  "));
        spans.push(Span::styled("[Enter] ", Style::default().fg(Color::Cyan)));
        spans.push(Span::raw("Expand/collapse  "));
    }

    spans.push(Span::styled("[q] ", Style::default().fg(Color::Cyan)));
    spans.push(Span::raw("Quit"));

    let footer = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}

// ── Utility helpers ───────────────────────────────────────────────────────────

/// Truncate a string to at most `max` chars, appending "…" if truncated.
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// Bar heights are integers; scale fractional values before plotting.
fn scaled(value: f64, factor: f64) -> u64 {
    (value * factor).round().max(0.0) as u64
}

// ── Background fetches ────────────────────────────────────────────────────────

fn spawn_density(rt: &Runtime, provider: &Arc<HealthcareStatsProvider>, tx: &mpsc::Sender<Fetched>) {
    let provider = Arc::clone(provider);
    let tx = tx.clone();
    rt.spawn(async move {
        let density = provider.latest_physician_density().await;
        // The receiver is gone only after the UI has exited.
        let _ = tx.send(Fetched::Density(density));
    });
}

fn spawn_report(
    rt: &Runtime,
    provider: &Arc<HealthcareStatsProvider>,
    tx: &mpsc::Sender<Fetched>,
    visit: u64,
) {
    let provider = Arc::clone(provider);
    let tx = tx.clone();
    rt.spawn(async move {
        let report = provider.produce_report().await;
        let _ = tx.send(Fetched::Report { visit, report });
    });
}

// ── Terminal setup / teardown ─────────────────────────────────────────────────

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

// ── Main event loop ───────────────────────────────────────────────────────────

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    rt: &Runtime,
    provider: &Arc<HealthcareStatsProvider>,
) -> io::Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut app = App::new();

    spawn_density(rt, provider, &tx);

    loop {
        while let Ok(fetched) = rx.try_recv() {
            app.apply(fetched);
        }

        terminal.draw(|f| ui(f, &app))?;

        // Short poll so fetched data appears without a key press.
        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match app.handle_key(key) {
            Action::Quit => return Ok(()),
            Action::FetchReport(visit) => spawn_report(rt, provider, &tx, visit),
            Action::None => {}
        }
    }
}

fn main() -> io::Result<()> {
    let rt = Runtime::new()?;
    let source = WorldBankSource::new(SourceConfig::default())
        .map_err(|e| io::Error::other(e.to_string()))?;
    let provider = Arc::new(HealthcareStatsProvider::new(Box::new(source)));

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, &rt, &provider);
    restore_terminal(&mut terminal)?;

    // Outstanding fetches are abandoned rather than awaited.
    rt.shutdown_background();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ruralcare_contracts::StatsOrigin;
    use ruralcare_core::derive::fallback_stats;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn sample_report() -> StatsReport {
        StatsReport {
            stats: fallback_stats(),
            origin: StatsOrigin::Fallback,
            produced_at: Default::default(),
            failure: Some("transport error: connection refused".to_string()),
        }
    }

    // ── Tab routing ──────────────────────────────────────────────────────────

    #[test]
    fn starts_on_home_with_density_loading() {
        let app = App::new();
        assert_eq!(app.tab, Page::Home);
        assert_eq!(app.density, LoadState::Loading);
        assert_eq!(app.report, LoadState::Idle);
    }

    #[test]
    fn entering_data_requests_a_fetch() {
        let mut app = App::new();
        let action = app.handle_key(press(KeyCode::Char('4')));
        assert_eq!(action, Action::FetchReport(1));
        assert_eq!(app.tab, Page::Data);
        assert_eq!(app.report, LoadState::Loading);
    }

    #[test]
    fn reselecting_current_tab_does_nothing() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Char('4')));
        assert_eq!(app.handle_key(press(KeyCode::Char('4'))), Action::None);
        assert_eq!(app.data_visit, 1);
    }

    #[test]
    fn arrows_cycle_through_pages() {
        let mut app = App::new();
        assert_eq!(app.handle_key(press(KeyCode::Left)), Action::FetchReport(1));
        assert_eq!(app.tab, Page::Data);
        assert_eq!(app.handle_key(press(KeyCode::Right)), Action::None);
        assert_eq!(app.tab, Page::Home);
        app.handle_key(press(KeyCode::Right));
        assert_eq!(app.tab, Page::Analysis);
    }

    #[test]
    fn leaving_data_discards_the_report() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Char('4')));
        app.apply(Fetched::Report {
            visit: 1,
            report: sample_report(),
        });
        assert!(matches!(app.report, LoadState::Ready(_)));

        app.handle_key(press(KeyCode::Char('1')));
        assert_eq!(app.report, LoadState::Idle);

        // Re-entering fetches again under a new visit number.
        let action = app.handle_key(press(KeyCode::Char('4')));
        assert_eq!(action, Action::FetchReport(3));
        assert_eq!(app.report, LoadState::Loading);
    }

    #[test]
    fn stale_report_is_dropped() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Char('4')));
        app.handle_key(press(KeyCode::Char('2')));
        app.handle_key(press(KeyCode::Char('4')));

        app.apply(Fetched::Report {
            visit: 1,
            report: sample_report(),
        });
        assert_eq!(app.report, LoadState::Loading, "report from an earlier visit must not land");

        app.apply(Fetched::Report {
            visit: 3,
            report: sample_report(),
        });
        assert!(matches!(app.report, LoadState::Ready(_)));
    }

    #[test]
    fn density_arrives_regardless_of_tab() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Char('3')));
        app.apply(Fetched::Density(0.73));
        assert_eq!(app.density, LoadState::Ready(0.73));
    }

    #[test]
    fn quit_keys() {
        let mut app = App::new();
        assert_eq!(app.handle_key(press(KeyCode::Char('q'))), Action::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(app.handle_key(ctrl_c), Action::Quit);
        assert_eq!(app.handle_key(press(KeyCode::Char('c'))), Action::None);
    }

    // ── Expandable sections ──────────────────────────────────────────────────

    #[test]
    fn cursor_and_toggle_only_act_on_analysis() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Enter));
        assert_eq!(app.cursor, 0);
        assert!(app.sections.iter().all(|s| !s.is_expanded()));

        app.handle_key(press(KeyCode::Char('2')));
        app.handle_key(press(KeyCode::Down));
        app.handle_key(press(KeyCode::Char(' ')));
        assert_eq!(app.cursor, 1);
        assert!(app.sections[1].is_expanded());
        assert!(!app.sections[0].is_expanded());
    }

    #[test]
    fn cursor_is_clamped() {
        let mut app = App::new();
        app.handle_key(press(KeyCode::Char('2')));
        app.handle_key(press(KeyCode::Up));
        assert_eq!(app.cursor, 0);
        for _ in 0..10 {
            app.handle_key(press(KeyCode::Down));
        }
        assert_eq!(app.cursor, app.sections.len() - 1);
    }

    // ── Helpers ──────────────────────────────────────────────────────────────

    #[test]
    fn dashes_keep_alternate_pieces() {
        let pieces = dashes((0.0, 0.0), (90.0, 0.0), 9);
        assert_eq!(pieces.len(), 5);
        assert_eq!(pieces[0], ((0.0, 0.0), (10.0, 0.0)));
        assert_eq!(pieces[4], ((80.0, 0.0), (90.0, 0.0)));
    }

    #[test]
    fn truncate_appends_ellipsis() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdefghij", 5), "abcd…");
    }

    #[test]
    fn scaled_rounds_and_clamps() {
        assert_eq!(scaled(0.73, 100.0), 73);
        assert_eq!(scaled(38.4, 10.0), 384);
        assert_eq!(scaled(-1.0, 10.0), 0);
    }

    // ── Rendering ────────────────────────────────────────────────────────────

    #[test]
    fn every_page_renders_in_both_load_states() {
        let mut terminal = Terminal::new(TestBackend::new(140, 48)).unwrap();
        let mut app = App::new();

        for page in Page::ALL {
            app.select_tab(page);
            terminal.draw(|f| ui(f, &app)).unwrap();
        }

        app.apply(Fetched::Density(0.73));
        app.apply(Fetched::Report {
            visit: app.data_visit,
            report: sample_report(),
        });
        assert!(matches!(app.report, LoadState::Ready(_)));
        terminal.draw(|f| ui(f, &app)).unwrap();

        app.select_tab(Page::Home);
        terminal.draw(|f| ui(f, &app)).unwrap();
    }

    #[test]
    fn loading_message_shown_before_data_arrives() {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        let mut app = App::new();
        app.select_tab(Page::Data);
        terminal.draw(|f| ui(f, &app)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains(narrative::LOADING_MESSAGE));
    }
}
