//! Life statistics stage rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::models::content::{LIFE_STATS, STATS_CONTINUE, STATS_DISCOVERED};
use crate::models::StatsTour;
use crate::theme::{
    get_pulse_color, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, CARD_BORDER, GOLD_ACCENT,
    GREEN_SUCCESS, PINK_ACCENT, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY, VIOLET_DIM,
};

/// Render the stat picker (two rows of three cards), the selected stat and
/// the continue hint
pub fn render_life_stats(
    area: Rect,
    tour: &StatsTour,
    show_discovery: bool,
    tick: u64,
    frame: &mut Frame,
) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // First row of cards
            Constraint::Length(4), // Second row of cards
            Constraint::Min(5),    // Detail card
            Constraint::Length(1), // Discovery / continue line
        ])
        .split(area);

    for (row, row_area) in [layout[0], layout[1]].into_iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(row_area);
        for (col, cell) in cells.iter().enumerate() {
            let index = row * 3 + col;
            render_stat_card(*cell, tour, index, frame);
        }
    }

    render_stat_detail(layout[2], tour, frame);

    let status = if show_discovery {
        Line::from(Span::styled(
            STATS_DISCOVERED,
            Style::default().fg(GOLD_ACCENT).add_modifier(Modifier::BOLD),
        ))
    } else if tour.all_viewed() {
        let color = get_pulse_color(tick, PINK_ACCENT, VIOLET_DIM);
        Line::from(vec![
            Span::styled("[Enter] ", Style::default().fg(TEXT_MUTED)),
            Span::styled(
                STATS_CONTINUE,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ])
    } else {
        Line::from(Span::styled(
            format!("{}/{} entdeckt", tour.viewed_count(), LIFE_STATS.len()),
            Style::default().fg(TEXT_MUTED),
        ))
    };
    frame.render_widget(Paragraph::new(status).alignment(Alignment::Center), layout[3]);
}

/// One picker card: key, emoji and number. Viewed cards get a check mark.
fn render_stat_card(area: Rect, tour: &StatsTour, index: usize, frame: &mut Frame) {
    let Some(stat) = LIFE_STATS.get(index) else {
        return;
    };
    let selected = tour.current_index() == index;
    let viewed = tour.is_viewed(index);

    let border_color = if selected { PINK_ACCENT } else { BORDER_SUBTLE };
    let bg_color = if selected { BG_TERTIARY } else { BG_SECONDARY };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(CARD_BORDER)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg_color));

    let (marker, marker_color) = if viewed {
        ("✓", GREEN_SUCCESS)
    } else {
        ("?", TEXT_MUTED)
    };

    let content = vec![
        Line::from(vec![
            Span::styled(format!("{} ", index + 1), Style::default().fg(TEXT_MUTED)),
            Span::raw(format!("{} ", stat.emoji)),
            Span::styled(marker, Style::default().fg(marker_color)),
        ]),
        Line::from(Span::styled(
            if viewed { stat.number } else { "•••" },
            Style::default().fg(GOLD_ACCENT).add_modifier(Modifier::BOLD),
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn render_stat_detail(area: Rect, tour: &StatsTour, frame: &mut Frame) {
    let stat = tour.current();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(CARD_BORDER)
        .border_style(Style::default().fg(PINK_ACCENT))
        .style(Style::default().bg(BG_SECONDARY));

    let content = vec![
        Line::from(Span::raw(stat.emoji)),
        Line::from(vec![
            Span::styled(
                stat.number,
                Style::default().fg(GOLD_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", stat.unit), Style::default().fg(TEXT_PRIMARY)),
        ]),
        Line::from(Span::styled(stat.description, Style::default().fg(TEXT_SECONDARY))),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
