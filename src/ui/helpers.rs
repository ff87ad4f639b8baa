//! UI helper functions

use ratatui::prelude::*;

use crate::models::Stage;
use crate::theme::{BORDER_SUBTLE, GOLD_ACCENT, PINK_ACCENT, SPARKLE_COLORS};

const SPARKLE_SYMBOLS: [&str; 4] = ["✦", "·", "✧", "*"];

/// Simple text wrapping helper. Widths are counted in characters.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_line.is_empty() {
            current_line = word.to_string();
            current_len = word_len;
        } else if current_len + 1 + word_len <= max_width {
            current_line.push(' ');
            current_line.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(current_line);
            current_line = word.to_string();
            current_len = word_len;
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

/// A rect of the given size centered in `area`, clamped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// One dot per stage: filled up to the current one
pub fn progress_dots(current: Stage) -> Line<'static> {
    let mut spans = Vec::with_capacity(Stage::ALL.len() * 2);
    for stage in Stage::ALL {
        let (symbol, color) = if stage == current {
            ("●", PINK_ACCENT)
        } else if stage.index() < current.index() {
            ("●", GOLD_ACCENT)
        } else {
            ("○", BORDER_SUBTLE)
        };
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(symbol, Style::default().fg(color)));
    }
    Line::from(spans)
}

/// Sparkle positions for this animation tick. Each sparkle sits at a fixed
/// spot and blinks on its own rhythm.
pub fn sparkles(area: Rect, tick: u64, count: usize) -> Vec<(u16, u16, &'static str, Color)> {
    if area.width == 0 || area.height == 0 {
        return Vec::new();
    }
    (0..count as u64)
        .filter(|i| (tick + i * 3) % 7 != 0)
        .map(|i| {
            let seed = i.wrapping_mul(2_654_435_761).wrapping_add(97);
            let x = area.x + (seed % area.width as u64) as u16;
            let y = area.y + ((seed / 13) % area.height as u64) as u16;
            let phase = ((tick / 3 + i) % SPARKLE_SYMBOLS.len() as u64) as usize;
            (x, y, SPARKLE_SYMBOLS[phase], SPARKLE_COLORS[(i as usize) % SPARKLE_COLORS.len()])
        })
        .collect()
}
