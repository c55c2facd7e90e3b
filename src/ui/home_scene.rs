//! Home screen: title, difficulty selection, and lifetime records.

use crate::game::Difficulty;
use crate::records::Records;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const TITLE: &[&str] = &[
    r" ___                    _        ___               ",
    r"|_  |_ _ ___ ___ ___   | |___   | _ \_  _ ___      ",
    r" | || | |   | . | | |_ | | -_|  |   / || |   |     ",
    r"|___|___|_|_|_  |_|_|  |_|___|  |_|_\___/|_|_|     ",
    r"            |___|                                  ",
];

/// Render the home screen.
pub fn render_home_scene(
    frame: &mut Frame,
    area: Rect,
    selected: Difficulty,
    records: &Records,
) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Jungle Run ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightGreen));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = vec![Line::from("")];

    for row in TITLE {
        lines.push(Line::from(Span::styled(
            *row,
            Style::default().fg(Color::LightGreen),
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Collect chocobees and puddings, dodge the obstacles,",
        Style::default().fg(Color::White),
    )));
    lines.push(Line::from(Span::styled(
        "and find your parents at the end of the jungle!",
        Style::default().fg(Color::White),
    )));
    lines.push(Line::from(""));

    // Difficulty selector
    let mut selector: Vec<Span> = vec![Span::styled(
        "\u{25C0} ",
        Style::default().fg(Color::DarkGray),
    )];
    for (i, diff) in Difficulty::ALL.iter().enumerate() {
        if i > 0 {
            selector.push(Span::raw("   "));
        }
        let style = if *diff == selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::LightGreen)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        selector.push(Span::styled(format!(" {} ", diff.name()), style));
    }
    selector.push(Span::styled(
        " \u{25B6}",
        Style::default().fg(Color::DarkGray),
    ));
    lines.push(Line::from(selector));
    lines.push(Line::from(""));

    // Records for the selected difficulty
    let record = records.for_difficulty(selected);
    let record_line = if record.runs == 0 {
        Span::styled(
            "No runs yet on this difficulty.",
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(
            format!(
                "Best score: {}   Runs: {}   Completed: {}",
                record.best_score, record.runs, record.wins
            ),
            Style::default().fg(Color::Cyan),
        )
    };
    lines.push(Line::from(record_line));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled("[Enter/Space]", Style::default().fg(Color::White)),
        Span::styled(" Start   ", Style::default().fg(Color::DarkGray)),
        Span::styled("[\u{25C0}/\u{25B6}]", Style::default().fg(Color::White)),
        Span::styled(" Difficulty   ", Style::default().fg(Color::DarkGray)),
        Span::styled("[Q]", Style::default().fg(Color::White)),
        Span::styled(" Quit", Style::default().fg(Color::DarkGray)),
    ]));

    let content_height = lines.len() as u16;
    let y_offset = inner.y + inner.height.saturating_sub(content_height) / 2;
    let text = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(
        text,
        Rect::new(
            inner.x,
            y_offset,
            inner.width,
            content_height.min(inner.height),
        ),
    );
}
