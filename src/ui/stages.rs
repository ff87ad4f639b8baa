//! Welcome, age check and big reveal rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::models::content::{
    AGE_ERROR, AGE_PLACEHOLDER, AGE_SUCCESS, REVEAL_HEADLINE, REVEAL_MESSAGE, REVEAL_RESTART,
    WELCOME_BUTTON,
};
use crate::models::{AgeFeedback, AgeGate, RevealPhase};
use crate::theme::{
    get_pulse_color, BG_SECONDARY, BORDER_SUBTLE, CARD_BORDER, GOLD_ACCENT, GREEN_SUCCESS,
    PINK_ACCENT, RED_ERROR, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY, VIOLET_DIM, VIOLET_PRIMARY,
};
use crate::ui::helpers::centered_rect;

const CAKE: [&str; 5] = [
    "    i i i    ",
    "  ┌─┴─┴─┴─┐  ",
    "  │ ~ ~ ~ │  ",
    "┌─┴───────┴─┐",
    "└───────────┘",
];

const GIFT: [&str; 5] = [
    "  \\ ♥ /  ",
    "┌───┼───┐",
    "│   │   │",
    "├───┼───┤",
    "└───┴───┘",
];

pub fn render_welcome(area: Rect, tick: u64, frame: &mut Frame) {
    let mut lines: Vec<Line> = CAKE
        .iter()
        .map(|row| Line::from(Span::styled(*row, Style::default().fg(GOLD_ACCENT))))
        .collect();
    lines.push(Line::default());

    let color = get_pulse_color(tick, PINK_ACCENT, VIOLET_PRIMARY);
    lines.push(Line::from(vec![
        Span::styled("[Enter] ", Style::default().fg(TEXT_MUTED)),
        Span::styled(
            format!("✨ {} ✨", WELCOME_BUTTON),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]));

    let height = lines.len() as u16;
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered_rect(area.width, height, area));
}

pub fn render_age(area: Rect, gate: &AgeGate, input: &str, tick: u64, frame: &mut Frame) {
    let card = centered_rect(36, 6, area);
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Field
            Constraint::Length(1),
            Constraint::Length(2), // Feedback
        ])
        .split(card);

    let (border_color, feedback) = match gate.feedback() {
        AgeFeedback::Hidden => (VIOLET_PRIMARY, None),
        AgeFeedback::Error { .. } => (RED_ERROR, Some((AGE_ERROR, RED_ERROR))),
        AgeFeedback::Success { .. } => (GREEN_SUCCESS, Some((AGE_SUCCESS, GREEN_SUCCESS))),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(CARD_BORDER)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(BG_SECONDARY));

    let field = if input.is_empty() {
        Line::from(Span::styled(
            AGE_PLACEHOLDER,
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::ITALIC),
        ))
    } else {
        let mut spans = vec![Span::styled(
            input.to_string(),
            Style::default().fg(TEXT_PRIMARY).add_modifier(Modifier::BOLD),
        )];
        if !gate.is_locked() {
            let cursor = get_pulse_color(tick, PINK_ACCENT, BG_SECONDARY);
            spans.push(Span::styled("▏", Style::default().fg(cursor)));
        }
        Line::from(spans)
    };
    frame.render_widget(
        Paragraph::new(field).block(block).alignment(Alignment::Center),
        layout[0],
    );

    if let Some((text, color)) = feedback {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, layout[2]);
    }
}

/// The reveal unfolds by phase; later phases keep what earlier ones showed
pub fn render_reveal(area: Rect, phase: RevealPhase, tick: u64, frame: &mut Frame) {
    let mut lines: Vec<Line> = Vec::new();

    if phase >= RevealPhase::Gift {
        let gift_color = get_pulse_color(tick, PINK_ACCENT, GOLD_ACCENT);
        lines.extend(
            GIFT.iter()
                .map(|row| Line::from(Span::styled(*row, Style::default().fg(gift_color)))),
        );
        lines.push(Line::default());
    } else {
        lines.push(Line::from(Span::styled("🎁 ...", Style::default().fg(TEXT_MUTED))));
    }

    if phase >= RevealPhase::Message {
        lines.push(Line::from(Span::styled(
            format!("🎉 {} 🎉", REVEAL_HEADLINE),
            Style::default().fg(GOLD_ACCENT).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            REVEAL_MESSAGE,
            Style::default().fg(TEXT_SECONDARY),
        )));
        lines.push(Line::default());
    }

    if phase == RevealPhase::Finale {
        let color = get_pulse_color(tick, PINK_ACCENT, VIOLET_DIM);
        lines.push(Line::from(vec![
            Span::styled("[Enter] ", Style::default().fg(TEXT_MUTED)),
            Span::styled(
                format!("🔄 {}", REVEAL_RESTART),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(CARD_BORDER)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, centered_rect(area.width.min(72), area.height, area));
}
