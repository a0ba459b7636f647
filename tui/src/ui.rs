//! Stateless rendering of a session.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use termsweep_core::{Session, SessionState, TileView};

const HELP: &str = "move: arrows/hjkl/wasd  flag: space/f/o  reveal: enter/e/i  new: n  quit: q";

/// Draws the board, a status line and the key help, and parks the terminal cursor on
/// the session cursor.
pub fn draw(frame: &mut Frame, session: &Session) {
    let needed = required_size(session);
    let area = frame.area();
    if area.width < needed.width || area.height < needed.height {
        let message = format!(
            "Terminal too small, need {}x{} (have {}x{})",
            needed.width, needed.height, area.width, area.height
        );
        frame.render_widget(Paragraph::new(message), area);
        return;
    }

    let board = session.board();
    let [board_area, status_area, help_area, _] = Layout::vertical([
        Constraint::Length(needed.height - 2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
    ])
    .areas(area);
    let [board_area, _] = Layout::horizontal([
        Constraint::Length(board.width().saturating_add(2)),
        Constraint::Min(0),
    ])
    .areas(board_area);

    let block = Block::bordered();
    let inner = block.inner(board_area);
    frame.render_widget(Paragraph::new(board_lines(session)).block(block), board_area);

    frame.render_widget(Paragraph::new(status_line(session)), status_area);
    frame.render_widget(
        Paragraph::new(HELP).style(Style::new().fg(Color::DarkGray)),
        help_area,
    );

    let (x, y) = session.cursor();
    let cursor = Position::new(inner.x.saturating_add(x), inner.y.saturating_add(y));
    if inner.contains(cursor) {
        frame.set_cursor_position(cursor);
    }
}

fn board_lines(session: &Session) -> Vec<Line<'static>> {
    let board = session.board();
    let show_mines = session.state() == SessionState::Lost;

    (0..board.height())
        .map(|y| {
            Line::from(
                (0..board.width())
                    .map(|x| tile_span(board.view((x, y), show_mines)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}

fn tile_span(view: TileView) -> Span<'static> {
    let covered = Style::new().fg(Color::Black).bg(Color::White);
    match view {
        TileView::Hidden => Span::styled(" ", covered),
        TileView::Flagged => Span::styled("F", covered.fg(Color::Red)),
        TileView::Revealed(0) => Span::raw(" "),
        TileView::Revealed(count) => Span::styled(
            count.to_string(),
            Style::new().fg(number_color(count)),
        ),
        TileView::Mine => Span::styled(
            "*",
            Style::new()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
    }
}

fn number_color(count: u8) -> Color {
    match count {
        1 => Color::Blue,
        2 => Color::Green,
        3 => Color::Red,
        4 => Color::Cyan,
        5 => Color::Magenta,
        6 => Color::Yellow,
        7 => Color::White,
        _ => Color::Gray,
    }
}

fn status_line(session: &Session) -> Line<'static> {
    let flags = format!("Flags: {}", session.board().flags_remaining());
    match session.state() {
        SessionState::Playing | SessionState::Quit => Line::from(flags),
        SessionState::Won => Line::from(vec![
            Span::styled(
                "You win!",
                Style::new().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  {flags}  n: new game, q: quit")),
        ]),
        SessionState::Lost => Line::from(vec![
            Span::styled(
                "Boom!",
                Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!("  {flags}  n: new game, q: quit")),
        ]),
    }
}

/// Smallest terminal that fits the bordered board plus the status and help lines.
pub fn required_size(session: &Session) -> Rect {
    let board = session.board();
    Rect::new(
        0,
        0,
        board.width().saturating_add(2),
        board.height().saturating_add(4),
    )
}
