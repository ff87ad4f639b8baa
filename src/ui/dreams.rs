//! Dream collection rendering: the per-category prompt and the summary cards

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::content::{
    find_category, DREAMS_CONTINUE, DREAMS_SKIP, DREAMS_SUMMARY_SUBTITLE, DREAMS_SUMMARY_TITLE,
    DREAM_CATEGORIES, UNKNOWN_CATEGORY_EMOJI, UNKNOWN_CATEGORY_TITLE,
};
use crate::models::dreams::MAX_DREAM_CHARS;
use crate::models::{Dream, DreamFlow};
use crate::theme::{
    get_pulse_color, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, CARD_BORDER, GOLD_ACCENT,
    PINK_ACCENT, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY, VIOLET_DIM, VIOLET_PRIMARY,
};
use crate::ui::helpers::wrap_text;

pub fn render_dreams(area: Rect, flow: &DreamFlow, input: &str, tick: u64, frame: &mut Frame) {
    if flow.is_showing_summary() {
        render_dream_summary(area, flow.dreams(), tick, frame);
    } else {
        render_dream_prompt(area, flow, input, tick, frame);
    }
}

/// Category card with the text field
fn render_dream_prompt(area: Rect, flow: &DreamFlow, input: &str, tick: u64, frame: &mut Frame) {
    let Some(category) = flow.current_category() else {
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Category heading
            Constraint::Length(5), // Text field
            Constraint::Length(1), // Counter
            Constraint::Length(1), // Skip hint
            Constraint::Min(0),
        ])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(vec![
            Span::raw(format!("{} ", category.icon)),
            Span::styled(
                category.title,
                Style::default().fg(GOLD_ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("Kategorie {} von {}", flow.category_index() + 1, DREAM_CATEGORIES.len()),
            Style::default().fg(TEXT_MUTED),
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, layout[0]);

    let field_block = Block::default()
        .borders(Borders::ALL)
        .border_type(CARD_BORDER)
        .border_style(Style::default().fg(VIOLET_PRIMARY))
        .style(Style::default().bg(BG_SECONDARY));

    let field_width = field_block.inner(layout[1]).width.saturating_sub(1) as usize;
    let field_lines: Vec<Line> = if input.is_empty() {
        vec![Line::from(Span::styled(
            category.placeholder,
            Style::default().fg(TEXT_MUTED).add_modifier(Modifier::ITALIC),
        ))]
    } else {
        let mut lines: Vec<Line> = wrap_text(input, field_width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(TEXT_PRIMARY))))
            .collect();
        let cursor_color = get_pulse_color(tick, PINK_ACCENT, BG_SECONDARY);
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled("▏", Style::default().fg(cursor_color)));
        }
        lines
    };
    frame.render_widget(Paragraph::new(field_lines).block(field_block), layout[1]);

    let counter = Paragraph::new(Line::from(Span::styled(
        format!("{}/{}", input.chars().count(), MAX_DREAM_CHARS),
        Style::default().fg(TEXT_MUTED),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(counter, layout[2]);

    if flow.can_skip() {
        let skip = Paragraph::new(Line::from(vec![
            Span::styled("[Tab] ", Style::default().fg(TEXT_MUTED)),
            Span::styled(DREAMS_SKIP, Style::default().fg(TEXT_SECONDARY)),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(skip, layout[3]);
    }
}

/// One card per dream, in collection order
fn render_dream_summary(area: Rect, dreams: &[Dream], tick: u64, frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Summary heading
            Constraint::Min(3),    // Cards
            Constraint::Length(1), // Continue hint
        ])
        .split(area);

    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            DREAMS_SUMMARY_TITLE,
            Style::default().fg(GOLD_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(DREAMS_SUMMARY_SUBTITLE, Style::default().fg(TEXT_SECONDARY))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(heading, layout[0]);

    let card_height = 4;
    let mut y = layout[1].y;
    for dream in dreams {
        if y + card_height > layout[1].y + layout[1].height {
            break;
        }
        let card_area = Rect::new(layout[1].x, y, layout[1].width, card_height);
        render_dream_card(card_area, dream, frame);
        y += card_height;
    }

    let color = get_pulse_color(tick, PINK_ACCENT, VIOLET_DIM);
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("[Enter] ", Style::default().fg(TEXT_MUTED)),
        Span::styled(
            DREAMS_CONTINUE,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hint, layout[2]);
}

fn render_dream_card(area: Rect, dream: &Dream, frame: &mut Frame) {
    let (emoji, title) = find_category(dream.category_id)
        .map(|c| (c.emoji, c.title))
        .unwrap_or((UNKNOWN_CATEGORY_EMOJI, UNKNOWN_CATEGORY_TITLE));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(CARD_BORDER)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_TERTIARY))
        .title(Span::styled(
            format!(" {} {} ", emoji, title),
            Style::default().fg(GOLD_ACCENT),
        ));

    // Truncate to what fits on the two inner lines
    let inner_width = area.width.saturating_sub(2) as usize;
    let lines: Vec<Line> = wrap_text(&dream.text, inner_width)
        .into_iter()
        .take(2)
        .map(|l| Line::from(Span::styled(l, Style::default().fg(TEXT_PRIMARY))))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
