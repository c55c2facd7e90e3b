//! Run scene rendering.
//!
//! Uses a cell-buffer approach for per-character color control: the jungle,
//! entities, and runner are drawn into a 2D grid scaled down from the 800x400
//! logical play field, then stamped row-by-row as Paragraph widgets.

use super::game_common::{
    create_game_layout, render_info_panel_frame, render_result_overlay, render_status_bar,
    GameResultType,
};
use crate::game::types::{
    CollectibleKind, Rect as GameRect, RunnerGame, GAME_HEIGHT, GAME_WIDTH, LEVEL_LENGTH,
};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Cell grid dimensions the play field is scaled into.
const RENDER_COLS: u16 = 80;
const RENDER_ROWS: u16 = 20;

const GROUND_CHAR: char = '▓';
const CHOCOBEE_CHAR: char = '*';
const PUDDING_CHAR: char = '@';
const OBSTACLE_CHAR: char = '#';

/// Render the run scene.
pub fn render_run_scene(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    // Result overlay takes priority
    if game.outcome.is_some() {
        render_run_result(frame, area, game);
        return;
    }

    let layout = create_game_layout(frame, area, " Jungle Run ", Color::LightGreen, 15, 22);

    render_play_field(frame, layout.content, game);

    if game.waiting_to_start {
        render_start_prompt(frame, layout.content);
    }

    render_status_bar_content(frame, layout.status_bar, game);
    render_info_panel(frame, layout.info_panel, game);
}

/// Cell in the render buffer with foreground and background colors.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
    bg: Color,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::Reset,
            bg: Color::Reset,
        }
    }
}

/// Stamp a logical-pixel rect into the cell buffer.
fn fill_rect(
    buffer: &mut [Vec<Cell>],
    rect: &GameRect,
    ch: char,
    fg: Color,
    x_scale: f64,
    y_scale: f64,
) {
    let render_h = buffer.len() as i32;
    if render_h == 0 {
        return;
    }
    let render_w = buffer[0].len() as i32;

    let col_start = (rect.x * x_scale).round() as i32;
    let col_end = ((rect.right() * x_scale).round() as i32).max(col_start + 1);
    let row_start = (rect.y * y_scale).round() as i32;
    let row_end = ((rect.bottom() * y_scale).round() as i32).max(row_start + 1);

    for row in row_start..row_end {
        if row < 0 || row >= render_h {
            continue;
        }
        for col in col_start..col_end {
            if col < 0 || col >= render_w {
                continue;
            }
            buffer[row as usize][col as usize] = Cell {
                ch,
                fg,
                bg: Color::Reset,
            };
        }
    }
}

/// Render the main play field: jungle backdrop, entities, runner, scoreboard.
fn render_play_field(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    if area.height < 2 || area.width < 10 {
        return;
    }

    let render_height = area.height.min(RENDER_ROWS);
    let render_width = area.width.min(RENDER_COLS);

    let mut buffer: Vec<Vec<Cell>> =
        vec![vec![Cell::default(); render_width as usize]; render_height as usize];

    let x_scale = render_width as f64 / GAME_WIDTH;
    let y_scale = render_height as f64 / GAME_HEIGHT;

    // ── Jungle backdrop: foliage drifting with the background offset ──
    let drift = (-game.bg_offset * x_scale) % render_width as f64;
    for &(base_x, row, pattern, fg) in &[
        (8.0_f64, 2u16, "\u{2663}\u{2663}", Color::Rgb(30, 90, 40)),
        (26.0, 1, "\u{2663}", Color::Rgb(25, 80, 35)),
        (45.0, 3, "\u{2663}\u{2663}\u{2663}", Color::Rgb(35, 100, 45)),
        (63.0, 2, "\u{2663}", Color::Rgb(30, 90, 40)),
        (17.0, 5, "\"", Color::Rgb(40, 110, 50)),
        (55.0, 5, "\"\"", Color::Rgb(40, 110, 50)),
    ] {
        let cx = ((base_x - drift).rem_euclid(render_width as f64)) as usize;
        let ry = (row as f64 * render_height as f64 / RENDER_ROWS as f64).round() as usize;
        if ry + 1 < render_height as usize {
            for (i, ch) in pattern.chars().enumerate() {
                let col = (cx + i) % render_width as usize;
                if buffer[ry][col].ch == ' ' {
                    buffer[ry][col] = Cell {
                        ch,
                        fg,
                        bg: Color::Reset,
                    };
                }
            }
        }
    }

    // ── Ground strip (bottom rows of the 400px field, below the runner) ──
    let ground_row = (render_height as usize).saturating_sub(1);
    for cell in buffer[ground_row].iter_mut() {
        *cell = Cell {
            ch: GROUND_CHAR,
            fg: Color::Rgb(80, 110, 50),
            bg: Color::Rgb(40, 60, 30),
        };
    }

    // ── Goal actor (the parents), once spawned ──
    if game.goal.spawned {
        fill_rect(
            &mut buffer,
            &game.goal.rect(),
            '\u{2588}',
            Color::LightMagenta,
            x_scale,
            y_scale,
        );
    }

    // ── Obstacles ──
    for obstacle in &game.obstacles {
        fill_rect(
            &mut buffer,
            &obstacle.rect(),
            OBSTACLE_CHAR,
            Color::Rgb(130, 100, 70),
            x_scale,
            y_scale,
        );
    }

    // ── Collectibles ──
    for item in &game.items {
        let (ch, fg) = match item.kind {
            CollectibleKind::Chocobee => (CHOCOBEE_CHAR, Color::LightYellow),
            CollectibleKind::Pudding => (PUDDING_CHAR, Color::Rgb(230, 180, 100)),
        };
        fill_rect(&mut buffer, &item.rect(), ch, fg, x_scale, y_scale);
    }

    // ── Runner ──
    fill_rect(
        &mut buffer,
        &game.player_rect(),
        '\u{2588}',
        Color::LightRed,
        x_scale,
        y_scale,
    );

    // ── Scoreboard (top-left) ──
    let shown_distance = game.distance.min(LEVEL_LENGTH) as u64;
    let scoreboard = [
        format!("Score: {}", game.score),
        format!("Distance: {}/{}", shown_distance, LEVEL_LENGTH as u64),
        format!("Chocobees: {}", game.choco_count),
        format!("Puddings: {}", game.pudding_count),
    ];
    for (row, text) in scoreboard.iter().enumerate() {
        if row >= render_height as usize {
            break;
        }
        for (i, ch) in text.chars().enumerate() {
            if i < render_width as usize {
                buffer[row][i] = Cell {
                    ch,
                    fg: Color::White,
                    bg: Color::Reset,
                };
            }
        }
    }

    // ── Render buffer to terminal ──
    let x_offset = area.x;
    let y_offset = area.y;

    for (row_idx, row_data) in buffer.iter().enumerate().take(render_height as usize) {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_bg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if (cell.fg != current_fg || cell.bg != current_bg) && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(current_bg),
                ));
            }
            current_fg = cell.fg;
            current_bg = cell.bg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(current_bg),
            ));
        }

        let line = Paragraph::new(Line::from(spans));
        let row_area = Rect::new(x_offset, y_offset + row_idx as u16, render_width, 1);
        if row_area.y < area.y + area.height {
            frame.render_widget(line, row_area);
        }
    }
}

/// Render the status bar below the play field.
fn render_status_bar_content(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    if game.waiting_to_start {
        render_status_bar(
            frame,
            area,
            "Ready",
            Color::LightGreen,
            &[("[Space/Up]", "Start"), ("[Esc]", "Home")],
        );
        return;
    }

    let status = if game.jump_count == 1 && game.can_double_jump {
        "Double jump!"
    } else {
        "Run!"
    };
    render_status_bar(
        frame,
        area,
        status,
        Color::LightGreen,
        &[("[Space/Up]", "Jump"), ("[Esc]", "Home")],
    );
}

/// Render the info panel on the right side.
fn render_info_panel(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    let inner = render_info_panel_frame(frame, area);

    let progress = (game.distance / LEVEL_LENGTH).min(1.0);
    let bar_width = 12usize;
    let filled = (progress * bar_width as f64).round() as usize;
    let mut bar = String::with_capacity(bar_width);
    for i in 0..bar_width {
        bar.push(if i < filled { '\u{2588}' } else { '\u{2591}' });
    }

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Difficulty: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.difficulty.name(),
                Style::default().fg(Color::LightGreen),
            ),
        ]),
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", game.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Jungle: ", Style::default().fg(Color::DarkGray)),
            Span::styled(bar, Style::default().fg(Color::LightGreen)),
        ]),
        Line::from(vec![
            Span::styled("Speed: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{:.1}", game.scroll_speed),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(" \u{2588} ", Style::default().fg(Color::LightRed)),
            Span::styled("You", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" * ", Style::default().fg(Color::LightYellow)),
            Span::styled("Chocobee +1", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" @ ", Style::default().fg(Color::Rgb(230, 180, 100))),
            Span::styled("Pudding +3", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" # ", Style::default().fg(Color::Rgb(130, 100, 70))),
            Span::styled("Obstacle", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(" \u{2588} ", Style::default().fg(Color::LightMagenta)),
            Span::styled("Parents", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    let text = Paragraph::new(lines);
    frame.render_widget(text, inner);
}

/// Render the "Press Space to Start" prompt centered on the play field.
fn render_start_prompt(frame: &mut Frame, area: Rect) {
    if area.height < 5 || area.width < 20 {
        return;
    }

    let center_y = area.y + area.height / 2;
    let prompt = "[ Press Space/Up to Start ]";
    let x = area.x + area.width.saturating_sub(prompt.len() as u16) / 2;

    let line = Paragraph::new(Line::from(vec![Span::styled(
        prompt,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )]));

    let prompt_area = Rect::new(x, center_y, prompt.len() as u16, 1);
    if prompt_area.y < area.y + area.height {
        frame.render_widget(line, prompt_area);
    }
}

/// Render the end-of-run overlay.
fn render_run_result(frame: &mut Frame, area: Rect, game: &RunnerGame) {
    let tally = format!(
        "Final score: {}  ({} chocobees, {} puddings)",
        game.score, game.choco_count, game.pudding_count
    );

    if game.game_won() {
        render_result_overlay(
            frame,
            area,
            GameResultType::Win,
            ":: YOU FOUND YOUR PARENTS! ::",
            "You made it through the jungle!",
            &tally,
        );
    } else {
        render_result_overlay(
            frame,
            area,
            GameResultType::Loss,
            "GAME OVER",
            "You ran straight into an obstacle.",
            &tally,
        );
    }
}
