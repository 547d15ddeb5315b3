//! Stateless UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{Player, Position, Square};

use crate::app::App;
use crate::input::Focus;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board + moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_board(frame, body[0], app);
    draw_moves(frame, body[1], app);

    let status = Paragraph::new(app.game().status_text())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(
        "arrows move  enter play/jump  1-9 play  [ ] step  tab switch  q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn pane_block(title: &'static str, focused: bool) -> Block<'static> {
    let border = if focused { Color::White } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = pane_block("Board", app.focus() == Focus::Board);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 17, 5);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(board_area);

    for row in 0..3 {
        let line = board_line(app, row);
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), rows[row * 2]);
        if row < 2 {
            let sep = Paragraph::new("-----+-----+-----")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn board_line(app: &App, row: usize) -> Line<'static> {
    let mut spans = Vec::with_capacity(5);
    for col in 0..3 {
        if let Some(pos) = Position::from_row_col(row, col) {
            spans.push(cell_span(app, pos));
        }
        if col < 2 {
            spans.push(Span::styled("|", Style::default().fg(Color::DarkGray)));
        }
    }
    Line::from(spans)
}

fn cell_span(app: &App, pos: Position) -> Span<'static> {
    let board = app.game().board();
    let winning = app
        .game()
        .winning_line()
        .is_some_and(|line| line.contains(&pos));

    let (symbol, base_style) = match board.get(pos) {
        Square::Empty if app.show_coordinates() => (
            format!("  {}  ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => ("     ".to_string(), Style::default()),
        Square::Occupied(Player::X) => (
            "  X  ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "  O  ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == app.cursor() && app.focus() == Focus::Board {
        base_style.bg(Color::White).fg(Color::Black)
    } else if winning {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    Span::styled(symbol, style)
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let current = app.game().current_move();
    let moves = app.game().history().moves();
    let items: Vec<ListItem> = app
        .game()
        .history_labels()
        .into_iter()
        .enumerate()
        .map(|(index, label)| {
            let style = if index == current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if index == current { "* " } else { "  " };
            // Entry i > 0 was reached by moves[i - 1]; show it as mark@cell.
            let placed = index
                .checked_sub(1)
                .and_then(|i| moves.get(i).copied().flatten())
                .map(|mov| format!("  {}@{}", mov.player, mov.position.to_index() + 1))
                .unwrap_or_default();
            ListItem::new(Line::from(Span::styled(
                format!("{}{}{}", marker, label, placed),
                style,
            )))
        })
        .collect();

    let list = List::new(items)
        .block(pane_block("Moves", app.focus() == Focus::Moves))
        .highlight_style(Style::default().bg(Color::White).fg(Color::Black));

    let mut state = ListState::default();
    if app.focus() == Focus::Moves {
        state.select(Some(app.selected()));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
