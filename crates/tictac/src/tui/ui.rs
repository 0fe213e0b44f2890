//! Stateless rendering of the app.

use super::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use std::str::FromStr;
use tictac_core::{Player, Skin, Tile};

/// Draws the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Turn
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(format!(
        "Tic Tac Toe | {} | {}",
        app.session().mode(),
        app.skin().name()
    ))
    .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_turn(frame, chunks[1], app);
    draw_board(frame, chunks[2], app);

    let status = Paragraph::new(app.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(
        "1-9/arrows+enter: place  p: pause  n: new game  m: mode  s: skin  q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    if app.session().is_paused() || !app.session().is_active() {
        draw_menu(frame, area, app);
    }
}

/// Colour for `player`'s pieces under `skin`.
pub fn piece_color(skin: &Skin, player: Player) -> Color {
    let name = match player {
        Player::One => skin.palette().x_piece(),
        Player::Two => skin.palette().o_piece(),
    };
    Color::from_str(name).unwrap_or(Color::White)
}

fn bounds_color(skin: &Skin) -> Color {
    Color::from_str(skin.palette().bounds()).unwrap_or(Color::DarkGray)
}

/// Turn indicator colour for the player to move, independent of skin.
pub fn turn_color(player: Player) -> Color {
    match player {
        Player::One => Color::Rgb(0x71, 0xE7, 0x00),
        Player::Two => Color::Rgb(0x04, 0x27, 0xE7),
    }
}

fn draw_turn(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let active = session.is_active().then(|| session.current_player());

    let mut spans = Vec::new();
    for player in [Player::One, Player::Two] {
        let style = if active == Some(player) {
            Style::default()
                .fg(turn_color(player))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        if player == Player::Two {
            spans.push(Span::raw("   "));
        }
        spans.push(Span::styled(format!("{} ({})", player, player.piece()), style));
    }
    if app.is_thinking() {
        spans.push(Span::raw("  thinking..."));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 41, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let winning = app.session().winning_triple();
    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row, winning);
        if row < 2 {
            let sep = Paragraph::new("─".repeat(41))
                .style(Style::default().fg(bounds_color(app.skin())));
            frame.render_widget(sep, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize, winning: Option<[Tile; 3]>) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
            Constraint::Length(1),
            Constraint::Length(13),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(tile) = Tile::from_row_col(row, col) {
            let highlighted = winning.is_some_and(|triple| triple.contains(&tile));
            draw_cell(frame, cols[col * 2], app, tile, highlighted);
        }
        if col < 2 {
            let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(bounds_color(app.skin())));
            frame.render_widget(sep, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, tile: Tile, highlighted: bool) {
    let (symbol, style) = match app.session().occupancy().get(tile) {
        Some(player) => {
            let color = piece_color(app.skin(), player);
            let style = if highlighted {
                Style::default().fg(Color::Black).bg(color)
            } else {
                Style::default().fg(color)
            };
            (player.piece().to_string(), style.add_modifier(Modifier::BOLD))
        }
        None => (
            (tile.index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
    };

    let style = if tile == app.cursor() && app.session().is_active() {
        style.bg(Color::White).fg(Color::Black)
    } else {
        style
    };

    let text = vec![Line::from(""), Line::from(Span::styled(format!(" {symbol} "), style))];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_menu(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let (heading, action, color) = match session.outcome() {
        Some(outcome) => {
            let color = outcome
                .winner()
                .map(|p| piece_color(app.skin(), p))
                .unwrap_or(Color::Yellow);
            (outcome.message().to_string(), "r: Restart Game", color)
        }
        None => ("Game Paused".to_string(), "r: Resume", Color::Yellow),
    };

    let popup = center_rect(area, 42, 6);
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            heading,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!("{action}  n: New Game  q: Quit")),
    ];
    let menu = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(Clear, popup);
    frame.render_widget(menu, popup);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
