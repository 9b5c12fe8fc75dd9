//! Play command implementation - interactive two-player TUI.
//!
//! Lowercase keys act for player one, uppercase for player two. The
//! reducer already ignores actions once the game is over, so keys stay
//! routed unconditionally; only the win modal and restart need UI state.

use super::CliError;
use crossterm::{
    event::{self, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
};
use skirmish::game::{Action, Event, GameState, Phase, PlayerId};
use skirmish::render;
use std::io::stdout;
use std::time::Duration;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the TUI fails.
pub(crate) fn execute(p1_name: String, p2_name: String) -> Result<(), CliError> {
    let app = App::new(GameState::new(p1_name, p2_name));
    run_tui(app)
}

/// App state for the TUI.
struct App {
    state: GameState,
    /// Log lines, most recent first.
    log: Vec<String>,
    /// Selected inventory index per player.
    selected: [usize; 2],
    /// Whether the win modal is showing.
    modal_open: bool,
}

impl App {
    fn new(state: GameState) -> Self {
        Self {
            state,
            log: vec!["Ready - eat or attack to begin.".to_string()],
            selected: [0; 2],
            modal_open: false,
        }
    }

    /// Feed one action through the reducer and absorb its events.
    fn dispatch(&mut self, action: &Action) {
        let events = self.state.apply(action);
        for event in &events {
            if matches!(event, Event::GameOver { .. }) {
                self.modal_open = true;
            }
            self.log.insert(0, render::describe(&self.state, event));
        }
        self.clamp_selection();
    }

    /// Keep selections valid after an item depletes.
    fn clamp_selection(&mut self) {
        for id in [PlayerId::One, PlayerId::Two] {
            let len = self.state.inventory(id).len();
            let slot = &mut self.selected[id.index()];
            *slot = (*slot).min(len.saturating_sub(1));
        }
    }

    fn cycle_selection(&mut self, id: PlayerId) {
        let len = self.state.inventory(id).len();
        if len > 0 {
            let slot = &mut self.selected[id.index()];
            *slot = (*slot + 1) % len;
        }
    }

    fn use_selected(&mut self, id: PlayerId) {
        let Some(item) = self
            .state
            .inventory(id)
            .items()
            .get(self.selected[id.index()])
        else {
            return;
        };
        let action = Action::UseItem {
            player: id,
            item: item.id.clone(),
        };
        self.dispatch(&action);
    }

    fn restart(&mut self) {
        self.modal_open = false;
        self.dispatch(&Action::Restart);
    }
}

fn run_tui(mut app: App) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    loop {
        terminal
            .draw(|f| ui(f, &app))
            .map_err(|e| CliError::new(e.to_string()))?;

        // Handle input with timeout
        if event::poll(Duration::from_millis(50)).map_err(|e| CliError::new(e.to_string()))?
            && let TermEvent::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => break,
                KeyCode::Char('r') => app.restart(),
                KeyCode::Enter => app.modal_open = false,
                KeyCode::Char('e') => app.dispatch(&Action::Eat {
                    player: PlayerId::One,
                }),
                KeyCode::Char('E') => app.dispatch(&Action::Eat {
                    player: PlayerId::Two,
                }),
                KeyCode::Char('a') => app.dispatch(&Action::Attack {
                    attacker: PlayerId::One,
                }),
                KeyCode::Char('A') => app.dispatch(&Action::Attack {
                    attacker: PlayerId::Two,
                }),
                KeyCode::Char('i') => app.use_selected(PlayerId::One),
                KeyCode::Char('I') => app.use_selected(PlayerId::Two),
                KeyCode::Tab => app.cycle_selection(PlayerId::One),
                KeyCode::BackTab => app.cycle_selection(PlayerId::Two),
                _ => {}
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header / win banner
            Constraint::Min(12),   // Players and log
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    let player_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(main_chunks[0]);

    render_player(f, player_chunks[0], app, PlayerId::One);
    render_player(f, player_chunks[1], app, PlayerId::Two);
    render_log(f, main_chunks[1], app);
    render_footer(f, chunks[2], app);

    if app.modal_open
        && let Phase::Over { winner } = app.state.phase
    {
        render_modal(f, winner, app);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let (text, style) = match app.state.phase {
        Phase::Playing => (
            " Skirmish ".to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Phase::Over { winner } => {
            let winner_name = &app.state.player(winner).name;
            let loser_name = &app.state.player(winner.opponent()).name;
            (
                format!(" {winner_name} WINS - {loser_name} DEFEATED "),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
        }
    };

    let header = Paragraph::new(text)
        .style(style)
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_player(f: &mut Frame, area: Rect, app: &App, id: PlayerId) {
    let player = app.state.player(id);
    let (marker, border_color) = match app.state.phase {
        Phase::Over { winner } if winner == id => ("WINNER", Color::Green),
        Phase::Over { .. } => ("DEFEATED", Color::Red),
        Phase::Playing => ("", Color::White),
    };
    let title = if marker.is_empty() {
        format!(" {} ", player.name)
    } else {
        format!(" {} [{marker}] ", player.name)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(energy_color(player.energy())))
        .label(format!("{}/100", player.energy()))
        .percent(u16::from(player.energy()));
    f.render_widget(gauge, rows[0]);

    let mut lines = Vec::new();
    let inventory = app.state.inventory(id);
    if inventory.is_empty() {
        lines.push(Line::from(Span::styled(
            "(no items left)",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (idx, item) in inventory.items().iter().enumerate() {
        let is_selected = idx == app.selected[id.index()];
        let cursor = if is_selected { "> " } else { "  " };
        let style = if is_selected {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(
            format!("{cursor}{} (x{})", item.name, item.remaining_uses),
            style,
        )));
    }
    f.render_widget(Paragraph::new(lines), rows[1]);
}

/// Bar color mirrors how much energy is left.
fn energy_color(energy: u8) -> Color {
    if energy > 50 {
        Color::Green
    } else if energy > 20 {
        Color::Yellow
    } else {
        Color::Red
    }
}

fn render_log(f: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app.log.iter().map(|entry| Line::from(entry.as_str())).collect();
    let log = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Log "))
        .wrap(Wrap { trim: false });
    f.render_widget(log, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let controls = if app.state.is_over() {
        " [r] Restart  [Enter] Close modal  [q] Quit "
    } else {
        " [e/E] Eat  [a/A] Attack  [i/I] Use item  [Tab/S-Tab] Select item  [r] Restart  [q] Quit "
    };

    let footer = Paragraph::new(controls)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(footer, area);
}

fn render_modal(f: &mut Frame, winner: PlayerId, app: &App) {
    let area = centered_rect(50, 40, f.area());
    let winner_name = &app.state.player(winner).name;
    let loser_name = &app.state.player(winner.opponent()).name;

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("{winner_name} WINS"),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("{winner_name} has defeated {loser_name}.")),
        Line::from(""),
        Line::from(Span::styled(
            "[r] Play again   [Enter] Close",
            Style::default().fg(Color::Gray),
        )),
    ];

    let modal = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Game Over "));

    f.render_widget(Clear, area);
    f.render_widget(modal, area);
}

/// Center a `percent_x` by `percent_y` rectangle inside `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
