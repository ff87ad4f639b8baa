//! Application state and core logic for the Birthday TUI.
//!
//! This module contains the `App` struct which holds all runtime state of
//! the journey: the stage machine, the transition overlay, the per-stage
//! input models and the one-shot dream dispatch. Time is passed in
//! explicitly so every deadline can be driven from tests.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info, warn};

use crate::machine::StageMachine;
use crate::models::age::MAX_AGE_CHARS;
use crate::models::dreams::{push_capped, MAX_DREAM_CHARS};
use crate::models::{
    AgeCheck, AgeGate, DreamFlow, DreamRejection, RevealPhase, RevealSequence, Stage, StatsTour,
    SubmitOutcome,
};
use crate::notify::{DispatchState, DreamDispatch, NotificationSink};
use crate::persistence::StagePersistence;
use crate::storage::KeyValueStore;
use crate::transition::TransitionController;

/// How often the sparkle animation moves
pub const ANIMATION_INTERVAL: Duration = Duration::from_millis(150);

/// How long the "stat discovered" toast stays up
pub const DISCOVERY_TOAST: Duration = Duration::from_secs(2);

/// Application state
pub struct App {
    machine: StageMachine<Box<dyn KeyValueStore>>,
    transition: TransitionController,
    age: AgeGate,
    dreams: DreamFlow,
    stats: StatsTour,
    reveal: Option<RevealSequence>,
    // Text typed into the age or dream field
    input: String,
    discovered_at: Option<Instant>,
    dispatch: DreamDispatch,
    sink: Arc<dyn NotificationSink>,
    name: String,
    // Animation state
    pub animation_tick: u64,
    last_animation_update: Instant,
    pub should_quit: bool,
}

impl App {
    pub fn new(
        store: Box<dyn KeyValueStore>,
        sink: Arc<dyn NotificationSink>,
        name: impl Into<String>,
        now: Instant,
    ) -> Self {
        let machine = StageMachine::new(StagePersistence::new(store));
        let mut app = Self {
            machine,
            transition: TransitionController::new(),
            age: AgeGate::new(),
            dreams: DreamFlow::new(),
            stats: StatsTour::new(),
            reveal: None,
            input: String::new(),
            discovered_at: None,
            dispatch: DreamDispatch::new(),
            sink,
            name: name.into(),
            animation_tick: 0,
            last_animation_update: now,
            should_quit: false,
        };
        app.enter_stage(app.machine.current(), now);
        app
    }

    pub fn stage(&self) -> Stage {
        self.machine.current()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn transition(&self) -> &TransitionController {
        &self.transition
    }

    pub fn age(&self) -> &AgeGate {
        &self.age
    }

    pub fn dreams(&self) -> &DreamFlow {
        &self.dreams
    }

    pub fn stats(&self) -> &StatsTour {
        &self.stats
    }

    pub fn dispatch_state(&self) -> DispatchState {
        self.dispatch.state()
    }

    pub fn machine(&self) -> &StageMachine<Box<dyn KeyValueStore>> {
        &self.machine
    }

    /// Current reveal phase, `None` outside the big reveal
    pub fn reveal_phase(&self, now: Instant) -> Option<RevealPhase> {
        self.reveal.map(|reveal| reveal.phase(now))
    }

    /// Whether the "stat discovered" toast is showing
    pub fn shows_discovery(&self, now: Instant) -> bool {
        self.discovered_at
            .is_some_and(|at| now.saturating_duration_since(at) < DISCOVERY_TOAST)
    }

    /// True when the current screen has a text field
    pub fn accepts_text(&self) -> bool {
        match self.stage() {
            Stage::AgeVerification => !self.age.is_locked(),
            Stage::MemoryLane => !self.dreams.is_showing_summary(),
            _ => false,
        }
    }

    /// Advance every deadline up to `now`
    pub fn tick(&mut self, now: Instant) {
        if now.saturating_duration_since(self.last_animation_update) >= ANIMATION_INTERVAL {
            self.animation_tick = self.animation_tick.wrapping_add(1);
            self.last_animation_update = now;
        }

        if self.age.tick(now) && self.stage() == Stage::AgeVerification {
            self.request(Stage::MemoryLane, now);
        }

        if let Some(stage) = self.transition.tick(&mut self.machine, now) {
            self.enter_stage(stage, now);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') if !self.accepts_text() => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        // The overlay swallows input until it is gone
        if self.transition.is_transitioning() {
            return;
        }

        match self.stage() {
            Stage::Welcome => {
                if key.code == KeyCode::Enter {
                    self.request(Stage::AgeVerification, now);
                }
            }
            Stage::AgeVerification => self.handle_age_key(key, now),
            Stage::MemoryLane => self.handle_dream_key(key, now),
            Stage::Wishes => self.handle_stats_key(key, now),
            Stage::BigReveal => {
                let restart = matches!(key.code, KeyCode::Enter | KeyCode::Char('r'));
                if restart && self.reveal.is_some_and(|r| r.can_restart(now)) {
                    self.request(Stage::Welcome, now);
                }
            }
        }
    }

    fn handle_age_key(&mut self, key: KeyEvent, now: Instant) {
        if self.age.is_locked() {
            return;
        }
        match key.code {
            KeyCode::Char(c) => push_capped(&mut self.input, c, MAX_AGE_CHARS),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Enter => match self.age.submit(&self.input, now) {
                AgeCheck::Accepted => info!("Age confirmed"),
                AgeCheck::Rejected => debug!("Age rejected: {:?}", self.input),
                AgeCheck::Ignored => {}
            },
            _ => {}
        }
    }

    fn handle_dream_key(&mut self, key: KeyEvent, now: Instant) {
        if self.dreams.is_showing_summary() {
            if key.code == KeyCode::Enter {
                self.request(Stage::Wishes, now);
            }
            return;
        }
        match key.code {
            KeyCode::Char(c) => push_capped(&mut self.input, c, MAX_DREAM_CHARS),
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Tab => {
                if self.dreams.skip_to_summary() {
                    info!("Skipped to dream summary with {} dreams", self.dreams.dreams().len());
                    self.input.clear();
                    self.on_summary_shown();
                }
            }
            KeyCode::Enter => match self.dreams.submit(&self.input) {
                Ok(SubmitOutcome::NextCategory(index)) => {
                    debug!("Dream saved, moving to category {}", index);
                    self.input.clear();
                }
                Ok(SubmitOutcome::SummaryReady) => {
                    self.input.clear();
                    self.on_summary_shown();
                }
                Err(DreamRejection::Blank) | Err(DreamRejection::Closed) => {}
            },
            _ => {}
        }
    }

    fn handle_stats_key(&mut self, key: KeyEvent, now: Instant) {
        let discovered = match key.code {
            KeyCode::Left | KeyCode::Up => self.stats.select_previous(),
            KeyCode::Right | KeyCode::Down => self.stats.select_next(),
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(d) if d >= 1 => self.stats.select(d as usize - 1),
                _ => false,
            },
            KeyCode::Enter => {
                if self.stats.all_viewed() {
                    self.request(Stage::BigReveal, now);
                }
                false
            }
            _ => false,
        };
        if discovered {
            self.discovered_at = Some(now);
        }
    }

    /// Start the notification the first time a summary shows in this process
    fn on_summary_shown(&mut self) {
        let dreams = self.dreams.dreams().to_vec();
        if self.dispatch.fire_once(Arc::clone(&self.sink), dreams).is_none() {
            debug!("Dreams already dispatched this session");
        }
    }

    fn request(&mut self, next: Stage, now: Instant) {
        if let Err(e) = self.transition.request(&self.machine, next, now) {
            warn!("Transition rejected: {}", e);
        }
    }

    /// Reset the local state of a stage that just became current
    fn enter_stage(&mut self, stage: Stage, now: Instant) {
        self.input.clear();
        self.discovered_at = None;
        self.reveal = None;
        match stage {
            Stage::Welcome => {}
            Stage::AgeVerification => self.age = AgeGate::new(),
            Stage::MemoryLane => self.dreams = DreamFlow::new(),
            Stage::Wishes => self.stats = StatsTour::new(),
            Stage::BigReveal => self.reveal = Some(RevealSequence::new(now)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::age::FEEDBACK_DURATION;
    use crate::models::reveal::RESTART_DELAY;
    use crate::notify::tests::RecordingSink;
    use crate::persistence::STAGE_KEY;
    use crate::storage::MemoryStore;
    use crate::transition::{COMMIT_DELAY, OVERLAY_DURATION};
    use std::sync::atomic::Ordering;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)), now);
        }
    }

    fn app_at(stage: Option<&str>, sink: Arc<RecordingSink>) -> (App, Arc<MemoryStore>, Instant) {
        let store = Arc::new(MemoryStore::new());
        if let Some(stage) = stage {
            store.set(STAGE_KEY, stage).unwrap();
        }
        let now = Instant::now();
        let app = App::new(Box::new(Arc::clone(&store)), sink, "Alina", now);
        (app, store, now)
    }

    /// Let a requested transition run to completion
    fn finish_transition(app: &mut App, requested: Instant) -> Instant {
        app.tick(requested + COMMIT_DELAY);
        let done = requested + OVERLAY_DURATION;
        app.tick(done);
        assert!(!app.transition().is_transitioning());
        done
    }

    #[test]
    fn test_starts_at_stored_stage() {
        let (app, _, _) = app_at(Some("wishes"), RecordingSink::new(false));
        assert_eq!(app.stage(), Stage::Wishes);

        let (app, _, _) = app_at(Some("bogus"), RecordingSink::new(false));
        assert_eq!(app.stage(), Stage::Welcome);
    }

    #[test]
    fn test_enter_on_welcome_requests_transition() {
        let (mut app, store, t0) = app_at(None, RecordingSink::new(false));
        app.handle_key(key(KeyCode::Enter), t0);
        assert!(app.transition().is_transitioning());
        assert_eq!(app.stage(), Stage::Welcome);

        app.tick(t0 + COMMIT_DELAY);
        assert_eq!(app.stage(), Stage::AgeVerification);
        assert!(app.transition().is_transitioning());
        assert_eq!(store.get(STAGE_KEY).unwrap().as_deref(), Some("age-verification"));

        app.tick(t0 + OVERLAY_DURATION);
        assert!(!app.transition().is_transitioning());
    }

    #[test]
    fn test_input_ignored_during_transition() {
        let (mut app, _, t0) = app_at(None, RecordingSink::new(false));
        app.handle_key(key(KeyCode::Enter), t0);
        app.tick(t0 + COMMIT_DELAY);
        assert_eq!(app.stage(), Stage::AgeVerification);

        type_text(&mut app, "18", t0 + COMMIT_DELAY);
        assert_eq!(app.input(), "");
    }

    #[test]
    fn test_wrong_age_shows_error_and_stays() {
        let (mut app, _, t0) = app_at(Some("age-verification"), RecordingSink::new(false));
        type_text(&mut app, "17", t0);
        app.handle_key(key(KeyCode::Enter), t0);
        assert!(matches!(app.age().feedback(), crate::models::AgeFeedback::Error { .. }));

        app.tick(t0 + FEEDBACK_DURATION);
        assert_eq!(app.age().feedback(), crate::models::AgeFeedback::Hidden);
        assert_eq!(app.stage(), Stage::AgeVerification);
        assert!(!app.transition().is_transitioning());
    }

    #[test]
    fn test_correct_age_advances_after_feedback() {
        let (mut app, _, t0) = app_at(Some("age-verification"), RecordingSink::new(false));
        type_text(&mut app, "18", t0);
        app.handle_key(key(KeyCode::Enter), t0);
        assert!(app.age().is_locked());

        // Locked while counting down
        type_text(&mut app, "9", t0);
        assert_eq!(app.input(), "18");

        app.tick(t0 + Duration::from_millis(2999));
        assert!(!app.transition().is_transitioning());

        let requested = t0 + FEEDBACK_DURATION;
        app.tick(requested);
        assert!(app.transition().is_transitioning());
        finish_transition(&mut app, requested);
        assert_eq!(app.stage(), Stage::MemoryLane);
        assert_eq!(app.input(), "");
    }

    #[test]
    fn test_q_is_typed_into_text_fields() {
        let (mut app, _, t0) = app_at(Some("memory-lane"), RecordingSink::new(false));
        type_text(&mut app, "quer durch Japan", t0);
        assert!(!app.should_quit);
        assert_eq!(app.input(), "quer durch Japan");

        app.handle_key(key(KeyCode::Esc), t0);
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_quits_outside_text_fields() {
        let (mut app, _, t0) = app_at(None, RecordingSink::new(false));
        app.handle_key(key(KeyCode::Char('q')), t0);
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_dreams_collected_in_order_and_sent_once() {
        let sink = RecordingSink::new(false);
        let (mut app, _, t0) = app_at(Some("memory-lane"), Arc::clone(&sink));

        // Blank text does not move on
        type_text(&mut app, "   ", t0);
        app.handle_key(key(KeyCode::Enter), t0);
        assert_eq!(app.dreams().category_index(), 0);
        assert!(app.dreams().dreams().is_empty());

        for (i, text) in ["Tierärztin", "Island", "Geduld", "Cello"].iter().enumerate() {
            app.handle_key(key(KeyCode::Backspace), t0);
            app.handle_key(key(KeyCode::Backspace), t0);
            app.handle_key(key(KeyCode::Backspace), t0);
            type_text(&mut app, text, t0);
            app.handle_key(key(KeyCode::Enter), t0);
            assert_eq!(app.dreams().dreams().len(), i + 1);
        }

        assert!(app.dreams().is_showing_summary());
        let ids: Vec<u8> = app.dreams().dreams().iter().map(|d| d.category_id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        // Let the detached delivery run
        for _ in 0..50 {
            if app.dispatch_state() == DispatchState::Attempted {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(app.dispatch_state(), DispatchState::Attempted);
        assert_eq!(sink.calls.load(Ordering::SeqCst), 1);
        assert_eq!(sink.received.lock().unwrap()[0][0].text, "Tierärztin");
    }

    #[tokio::test]
    async fn test_failed_notification_is_never_retried() {
        let sink = RecordingSink::new(true);
        let (mut app, _, t0) = app_at(Some("memory-lane"), Arc::clone(&sink));

        type_text(&mut app, "Pilotin", t0);
        app.handle_key(key(KeyCode::Enter), t0);
        app.handle_key(key(KeyCode::Tab), t0);
        assert!(app.dreams().is_showing_summary());

        for _ in 0..50 {
            if app.dispatch_state() == DispatchState::Attempted {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(app.dispatch_state(), DispatchState::Attempted);

        // Render passes and more keys on the summary do not send again
        app.tick(t0 + Duration::from_millis(100));
        app.handle_key(key(KeyCode::Tab), t0);
        assert_eq!(sink.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_replayed_summary_does_not_send_again() {
        let sink = RecordingSink::new(true);
        let (mut app, _, t0) = app_at(Some("memory-lane"), Arc::clone(&sink));

        type_text(&mut app, "Pilotin", t0);
        app.handle_key(key(KeyCode::Enter), t0);
        app.handle_key(key(KeyCode::Tab), t0);
        for _ in 0..50 {
            if app.dispatch_state() == DispatchState::Attempted {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        assert_eq!(app.dispatch_state(), DispatchState::Attempted);

        // On through the stats and the reveal, then restart
        app.handle_key(key(KeyCode::Enter), t0);
        let mut now = finish_transition(&mut app, t0);
        for c in ['2', '3', '4', '5', '6'] {
            app.handle_key(key(KeyCode::Char(c)), now);
        }
        app.handle_key(key(KeyCode::Enter), now);
        now = finish_transition(&mut app, now);
        assert_eq!(app.stage(), Stage::BigReveal);
        now += RESTART_DELAY;
        app.handle_key(key(KeyCode::Enter), now);
        now = finish_transition(&mut app, now);
        assert_eq!(app.stage(), Stage::Welcome);

        // Walk back to the dreams
        app.handle_key(key(KeyCode::Enter), now);
        now = finish_transition(&mut app, now);
        type_text(&mut app, "18", now);
        app.handle_key(key(KeyCode::Enter), now);
        now += FEEDBACK_DURATION;
        app.tick(now);
        now = finish_transition(&mut app, now);
        assert_eq!(app.stage(), Stage::MemoryLane);
        assert!(!app.dreams().is_showing_summary());

        type_text(&mut app, "Weltreise", now);
        app.handle_key(key(KeyCode::Enter), now);
        app.handle_key(key(KeyCode::Tab), now);
        assert!(app.dreams().is_showing_summary());

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(sink.calls.load(Ordering::SeqCst), 1);
        assert_eq!(app.dispatch_state(), DispatchState::Attempted);
    }

    #[test]
    fn test_padded_age_is_rejected() {
        for padded in [" 18 ", "18 ", " 18"] {
            let (mut app, _, t0) = app_at(Some("age-verification"), RecordingSink::new(false));
            type_text(&mut app, padded, t0);
            app.handle_key(key(KeyCode::Enter), t0);
            assert!(
                matches!(app.age().feedback(), crate::models::AgeFeedback::Error { .. }),
                "input {:?}",
                padded
            );
            assert!(!app.age().is_locked());

            app.tick(t0 + FEEDBACK_DURATION);
            assert_eq!(app.stage(), Stage::AgeVerification);
            assert!(!app.transition().is_transitioning());
        }
    }

    #[test]
    fn test_skip_needs_a_dream() {
        let (mut app, _, t0) = app_at(Some("memory-lane"), RecordingSink::new(false));
        app.handle_key(key(KeyCode::Tab), t0);
        assert!(!app.dreams().is_showing_summary());
    }

    #[test]
    fn test_stats_gate_continue() {
        let (mut app, _, t0) = app_at(Some("wishes"), RecordingSink::new(false));
        app.handle_key(key(KeyCode::Enter), t0);
        assert!(!app.transition().is_transitioning());

        app.handle_key(key(KeyCode::Right), t0);
        assert!(app.shows_discovery(t0));
        assert!(!app.shows_discovery(t0 + DISCOVERY_TOAST));

        for c in ['3', '4', '5', '6'] {
            app.handle_key(key(KeyCode::Char(c)), t0);
        }
        assert!(app.stats().all_viewed());

        app.handle_key(key(KeyCode::Enter), t0);
        assert_eq!(app.transition().pending_target(), Some(Stage::BigReveal));
    }

    #[test]
    fn test_reveal_restart_waits_for_finale() {
        let (mut app, store, t0) = app_at(Some("big-reveal"), RecordingSink::new(false));
        assert_eq!(app.reveal_phase(t0), Some(RevealPhase::Intro));

        app.handle_key(key(KeyCode::Enter), t0 + Duration::from_secs(4));
        assert!(!app.transition().is_transitioning());

        let requested = t0 + RESTART_DELAY;
        app.handle_key(key(KeyCode::Char('r')), requested);
        finish_transition(&mut app, requested);
        assert_eq!(app.stage(), Stage::Welcome);
        assert_eq!(app.reveal_phase(requested), None);
        assert_eq!(store.get(STAGE_KEY).unwrap(), None);
    }

    #[tokio::test]
    async fn test_full_journey_and_restart() {
        let sink = RecordingSink::new(true);
        let (mut app, store, t0) = app_at(None, Arc::clone(&sink));
        assert_eq!(app.stage(), Stage::Welcome);

        // Welcome -> AgeVerification
        app.handle_key(key(KeyCode::Enter), t0);
        app.tick(t0 + COMMIT_DELAY - Duration::from_millis(1));
        assert_eq!(app.stage(), Stage::Welcome);
        let mut now = finish_transition(&mut app, t0);
        assert_eq!(app.stage(), Stage::AgeVerification);

        // AgeVerification -> MemoryLane
        type_text(&mut app, "18", now);
        app.handle_key(key(KeyCode::Enter), now);
        now += FEEDBACK_DURATION;
        app.tick(now);
        now = finish_transition(&mut app, now);
        assert_eq!(app.stage(), Stage::MemoryLane);

        // MemoryLane -> Wishes
        type_text(&mut app, "Eigene Wohnung", now);
        app.handle_key(key(KeyCode::Enter), now);
        app.handle_key(key(KeyCode::Tab), now);
        app.handle_key(key(KeyCode::Enter), now);
        now = finish_transition(&mut app, now);
        assert_eq!(app.stage(), Stage::Wishes);

        // Wishes -> BigReveal
        for c in ['2', '3', '4', '5', '6'] {
            app.handle_key(key(KeyCode::Char(c)), now);
        }
        app.handle_key(key(KeyCode::Enter), now);
        now = finish_transition(&mut app, now);
        assert_eq!(app.stage(), Stage::BigReveal);
        assert_eq!(store.get(STAGE_KEY).unwrap().as_deref(), Some("big-reveal"));

        // Restart
        now += RESTART_DELAY;
        app.handle_key(key(KeyCode::Enter), now);
        finish_transition(&mut app, now);
        assert_eq!(app.stage(), Stage::Welcome);
        assert_eq!(store.get(STAGE_KEY).unwrap(), None);
        assert_eq!(app.machine().persistence().load(), None);
    }
}
