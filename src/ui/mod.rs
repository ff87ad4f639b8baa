//! UI module for birthday-tui
//!
//! This module contains the render pass: the sparkle backdrop, the progress
//! dots, the stage header, one body per stage, key hints and the
//! transition overlay.

mod dreams;
mod helpers;
mod stages;
mod stats;

use std::time::Instant;

use ratatui::{
    prelude::*,
    widgets::{Block, Clear, Paragraph},
};

use crate::app::App;
use crate::models::content::{messages, personalize};
use crate::models::{RevealPhase, Stage};
use crate::theme::{
    get_pulse_color, BG_PRIMARY, GOLD_ACCENT, PINK_ACCENT, TEXT_MUTED, TEXT_SECONDARY,
    VIOLET_PRIMARY,
};

pub use helpers::{centered_rect, progress_dots, sparkles, wrap_text};

const SPARKLE_COUNT: usize = 40;

/// Draw the whole screen for the current app state
pub fn draw(frame: &mut Frame, app: &App, now: Instant) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);
    render_sparkles(frame, area, app.animation_tick);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Progress dots
            Constraint::Length(1),
            Constraint::Length(3), // Title + subtitle
            Constraint::Min(6),    // Stage body
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    let stage = app.stage();
    if stage.shows_progress() {
        frame.render_widget(
            Paragraph::new(progress_dots(stage)).alignment(Alignment::Center),
            layout[0],
        );
    }

    render_header(frame, layout[2], stage, app.name());

    let body = centered_rect(layout[3].width.min(80), layout[3].height, layout[3]);
    let tick = app.animation_tick;
    match stage {
        Stage::Welcome => stages::render_welcome(body, tick, frame),
        Stage::AgeVerification => stages::render_age(body, app.age(), app.input(), tick, frame),
        Stage::MemoryLane => dreams::render_dreams(body, app.dreams(), app.input(), tick, frame),
        Stage::Wishes => {
            stats::render_life_stats(body, app.stats(), app.shows_discovery(now), tick, frame)
        }
        Stage::BigReveal => {
            let phase = app.reveal_phase(now).unwrap_or(RevealPhase::Intro);
            stages::render_reveal(body, phase, tick, frame)
        }
    }

    frame.render_widget(
        Paragraph::new(key_hints(app)).alignment(Alignment::Center),
        layout[4],
    );

    if app.transition().is_transitioning() {
        render_overlay(frame, area, tick);
    }
}

fn render_header(frame: &mut Frame, area: Rect, stage: Stage, name: &str) {
    let copy = messages(stage);
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            personalize(copy.title, name),
            Style::default().fg(PINK_ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(copy.subtitle, Style::default().fg(TEXT_SECONDARY))),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn key_hints(app: &App) -> Line<'static> {
    let hints = match app.stage() {
        Stage::Welcome => " Enter: Start | q: Beenden ",
        Stage::AgeVerification => " Enter: Bestätigen | Esc: Beenden ",
        Stage::MemoryLane if app.dreams().is_showing_summary() => {
            " Enter: Weiter | q: Beenden "
        }
        Stage::MemoryLane => " Enter: Speichern | Tab: Überspringen | Esc: Beenden ",
        Stage::Wishes => " ←/→ oder 1-6: Auswählen | Enter: Weiter | q: Beenden ",
        Stage::BigReveal => " Enter: Nochmal | q: Beenden ",
    };
    Line::from(Span::styled(hints, Style::default().fg(TEXT_MUTED)))
}

fn render_sparkles(frame: &mut Frame, area: Rect, tick: u64) {
    let buffer = frame.buffer_mut();
    for (x, y, symbol, color) in sparkles(area, tick, SPARKLE_COUNT) {
        buffer.set_string(x, y, symbol, Style::default().fg(color));
    }
}

/// Full-screen curtain that hides the stage swap
fn render_overlay(frame: &mut Frame, area: Rect, tick: u64) {
    frame.render_widget(Clear, area);
    frame.render_widget(Block::default().style(Style::default().bg(BG_PRIMARY)), area);
    render_sparkles(frame, area, tick.wrapping_mul(3));

    let color = get_pulse_color(tick, GOLD_ACCENT, VIOLET_PRIMARY);
    let curtain = Paragraph::new(Line::from(Span::styled(
        "✨ ✨ ✨",
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(curtain, centered_rect(area.width, 1, area));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::tests::RecordingSink;
    use crate::persistence::STAGE_KEY;
    use crate::storage::{KeyValueStore, MemoryStore};
    use crate::transition::COMMIT_DELAY;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Duration;

    fn app_at(stage: &str, now: Instant) -> App {
        let store = MemoryStore::new();
        store.set(STAGE_KEY, stage).unwrap();
        App::new(Box::new(store), RecordingSink::new(false), "Alina", now)
    }

    fn screen_text(app: &App, now: Instant) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app, now)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_welcome_is_personalized_without_progress() {
        let now = Instant::now();
        let text = screen_text(&app_at("welcome", now), now);
        assert!(text.contains("Herzlich Willkommen, Alina!"));
        assert!(text.contains("Beginne deine Reise"));
        assert!(!text.contains("○"));
    }

    #[test]
    fn test_progress_shown_on_middle_stages() {
        let now = Instant::now();
        for stage in ["age-verification", "memory-lane", "wishes"] {
            let text = screen_text(&app_at(stage, now), now);
            assert!(text.contains("●"), "stage {}", stage);
        }
        let text = screen_text(&app_at("big-reveal", now), now);
        assert!(!text.contains("○"));
    }

    #[test]
    fn test_dream_prompt_shows_category() {
        let now = Instant::now();
        let text = screen_text(&app_at("memory-lane", now), now);
        assert!(text.contains("Karriere & Beruf"));
        assert!(text.contains("Was möchtest du beruflich erreichen?"));
        assert!(!text.contains("Zu meinen Träumen springen"));
    }

    #[test]
    fn test_reveal_restart_appears_in_finale() {
        let now = Instant::now();
        let app = app_at("big-reveal", now);
        assert!(!screen_text(&app, now).contains("Nochmal erleben"));
        assert!(screen_text(&app, now + Duration::from_secs(5)).contains("Nochmal erleben"));
    }

    #[test]
    fn test_overlay_hides_stage_during_transition() {
        let now = Instant::now();
        let mut app = app_at("welcome", now);
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE), now);
        let text = screen_text(&app, now);
        assert!(!text.contains("Herzlich Willkommen"));

        app.tick(now + COMMIT_DELAY);
        let text = screen_text(&app, now + COMMIT_DELAY);
        assert!(!text.contains("Wie alt wirst du heute?"));
    }
}
