//! Discord-style webhook payload for a collected set of dreams.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::models::content::{find_category, personalize, UNKNOWN_CATEGORY_EMOJI, UNKNOWN_CATEGORY_TITLE};
use crate::models::Dream;

/// Embed accent color (purple)
pub const EMBED_COLOR: u32 = 0x8B5CF6;

const CONTENT: &str = "🎈 **Neue Geburtstags-Träume eingegangen!** 🎈";
const TITLE: &str = "🎂 {name}s Geburtstags-Träume";
const INTRO: &str = "Hier sind die Träume und Wünsche, die {name} zu ihrem 18. Geburtstag geteilt hat:";
const FOOTER: &str = "Happy Birthday {name}! 🎉";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookPayload {
    pub content: String,
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub timestamp: String,
    pub footer: EmbedFooter,
    pub fields: Vec<EmbedField>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedFooter {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// One block per dream: emoji, bold category label, then the text
pub fn format_dreams(dreams: &[Dream]) -> String {
    dreams
        .iter()
        .map(|dream| {
            let (emoji, title) = match find_category(dream.category_id) {
                Some(category) => (category.emoji, category.title),
                None => (UNKNOWN_CATEGORY_EMOJI, UNKNOWN_CATEGORY_TITLE),
            };
            format!("{} **{}**\n{}\n", emoji, title, dream.text)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn build_payload(dreams: &[Dream], name: &str, now: DateTime<Utc>) -> WebhookPayload {
    let description = format!("{}\n\n{}", personalize(INTRO, name), format_dreams(dreams));

    let embed = Embed {
        title: personalize(TITLE, name),
        description,
        color: EMBED_COLOR,
        timestamp: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        footer: EmbedFooter {
            text: personalize(FOOTER, name),
        },
        fields: vec![
            EmbedField {
                name: "🌟 Anzahl der Träume".to_string(),
                value: dreams.len().to_string(),
                inline: true,
            },
            EmbedField {
                name: "📅 Datum".to_string(),
                value: now.format("%-d.%-m.%Y").to_string(),
                inline: true,
            },
        ],
    };

    WebhookPayload {
        content: CONTENT.to_string(),
        embeds: vec![embed],
    }
}
