//! Theme module for birthday-tui
//!
//! This module provides a centralized color palette and styling constants
//! for the "midnight party" look: deep violet backgrounds with pink, gold
//! and lilac accents.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

// ============================================================================
// Background Colors - Night Sky Palette
// ============================================================================

/// Primary background color - deep night violet (#0f0a1e)
pub const BG_PRIMARY: Color = Color::Rgb(15, 10, 30);

/// Secondary background color - card surface (#1a1330)
pub const BG_SECONDARY: Color = Color::Rgb(26, 19, 48);

/// Tertiary background color - for highlighted cards (#261c45)
pub const BG_TERTIARY: Color = Color::Rgb(38, 28, 69);

/// Subtle border color (#3b2f5c)
pub const BORDER_SUBTLE: Color = Color::Rgb(59, 47, 92);

// ============================================================================
// Accent Colors
// ============================================================================

/// Primary violet accent, same as the webhook embed (#8b5cf6)
pub const VIOLET_PRIMARY: Color = Color::Rgb(139, 92, 246);

/// Dimmed violet for secondary elements (#5b3aa8)
pub const VIOLET_DIM: Color = Color::Rgb(91, 58, 168);

/// Party pink (#ec4899)
pub const PINK_ACCENT: Color = Color::Rgb(236, 72, 153);

/// Candle gold (#fbbf24)
pub const GOLD_ACCENT: Color = Color::Rgb(251, 191, 36);

// ============================================================================
// Status Colors
// ============================================================================

/// Green success color (#4ade80)
pub const GREEN_SUCCESS: Color = Color::Rgb(74, 222, 128);

/// Red error color (#f87171)
pub const RED_ERROR: Color = Color::Rgb(248, 113, 113);

// ============================================================================
// Text Colors
// ============================================================================

/// Primary text color - bright white (#f5f3ff)
pub const TEXT_PRIMARY: Color = Color::Rgb(245, 243, 255);

/// Secondary text color - soft lilac (#c4b5fd)
pub const TEXT_SECONDARY: Color = Color::Rgb(196, 181, 253);

/// Muted text color - for labels and hints (#7c6f9c)
pub const TEXT_MUTED: Color = Color::Rgb(124, 111, 156);

// ============================================================================
// Borders & Animation
// ============================================================================

/// Rounded corners for every card
pub const CARD_BORDER: BorderType = BorderType::Rounded;

/// Colors the sparkle backdrop cycles through
pub const SPARKLE_COLORS: [Color; 4] = [GOLD_ACCENT, PINK_ACCENT, VIOLET_PRIMARY, TEXT_SECONDARY];

/// Alternate between two colors every few animation ticks
pub fn get_pulse_color(tick: u64, bright: Color, dim: Color) -> Color {
    if (tick / 4) % 2 == 0 {
        bright
    } else {
        dim
    }
}
