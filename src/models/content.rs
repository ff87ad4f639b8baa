//! Static copy for each stage, the dream categories and the life statistics.
//!
//! Titles may contain a `{name}` placeholder that is filled with the
//! configured celebrant name via [`personalize`].

use super::Stage;

/// Title/subtitle pair shown at the top of a stage
#[derive(Debug, Clone, Copy)]
pub struct StageMessages {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const WELCOME: StageMessages = StageMessages {
    title: "Herzlich Willkommen, {name}!",
    subtitle: "Ein ganz besonderer Tag wartet auf dich...",
};
pub const WELCOME_BUTTON: &str = "Beginne deine Reise";

pub const AGE_VERIFICATION: StageMessages = StageMessages {
    title: "Bist du bereit für den nächsten Schritt?",
    subtitle: "Wie alt wirst du heute?",
};
pub const AGE_PLACEHOLDER: &str = "Dein Alter eingeben...";
pub const AGE_ERROR: &str = "Das ist nicht ganz richtig... 🤔";
pub const AGE_SUCCESS: &str = "Perfekt! Du bist jetzt volljährig! 🎉";

pub const MEMORY_LANE: StageMessages = StageMessages {
    title: "Deine Träume für die Zukunft...",
    subtitle: "Teile deine Wünsche und Träume für das nächste Kapitel deines Lebens",
};
pub const DREAMS_SUMMARY_TITLE: &str = "Deine Träume-Konstellation ✨";
pub const DREAMS_SUMMARY_SUBTITLE: &str = "Mögen all deine Träume wahr werden!";
pub const DREAMS_CONTINUE: &str = "Weiter zur nächsten Überraschung";
pub const DREAMS_SKIP: &str = "Zu meinen Träumen springen";

pub const WISHES: StageMessages = StageMessages {
    title: "18 Jahre in Zahlen...",
    subtitle: "Wähle die Statistiken, um dein Leben in Zahlen zu entdecken",
};
pub const STATS_CONTINUE: &str = "Bereit für die große Überraschung?";
pub const STATS_DISCOVERED: &str = "📊 Statistik entdeckt! 📊";

pub const BIG_REVEAL: StageMessages = StageMessages {
    title: "Deine große Überraschung...",
    subtitle: "Das Beste kommt zum Schluss!",
};
pub const REVEAL_HEADLINE: &str = "Herzlichen Glückwunsch zum 18. Geburtstag!";
pub const REVEAL_MESSAGE: &str = "Du hast es geschafft! Du bist jetzt offiziell erwachsen und bereit für alle \
Abenteuer, die das Leben für dich bereithält. Möge dieses neue Kapitel voller Freude, Erfolg und \
wunderbarer Überraschungen sein!";
pub const REVEAL_RESTART: &str = "Nochmal erleben";

/// Messages for a stage
pub fn messages(stage: Stage) -> StageMessages {
    match stage {
        Stage::Welcome => WELCOME,
        Stage::AgeVerification => AGE_VERIFICATION,
        Stage::MemoryLane => MEMORY_LANE,
        Stage::Wishes => WISHES,
        Stage::BigReveal => BIG_REVEAL,
    }
}

/// Replace the `{name}` placeholder
pub fn personalize(template: &str, name: &str) -> String {
    template.replace("{name}", name)
}

/// A dream category, visited in table order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DreamCategory {
    pub id: u8,
    pub title: &'static str,
    pub placeholder: &'static str,
    pub emoji: &'static str,
    pub icon: &'static str,
}

pub const DREAM_CATEGORIES: [DreamCategory; 4] = [
    DreamCategory {
        id: 1,
        title: "Karriere & Beruf",
        placeholder: "Was möchtest du beruflich erreichen?",
        emoji: "💼",
        icon: "🎯",
    },
    DreamCategory {
        id: 2,
        title: "Reisen & Abenteuer",
        placeholder: "Welche Orte möchtest du entdecken?",
        emoji: "✈️",
        icon: "🌍",
    },
    DreamCategory {
        id: 3,
        title: "Persönliche Ziele",
        placeholder: "Woran möchtest du wachsen?",
        emoji: "🌟",
        icon: "💪",
    },
    DreamCategory {
        id: 4,
        title: "Hobbys & Leidenschaften",
        placeholder: "Was möchtest du lernen oder erleben?",
        emoji: "🎨",
        icon: "❤️",
    },
];

/// Label used for category ids outside the table
pub const UNKNOWN_CATEGORY_TITLE: &str = "Unbekannte Kategorie";
pub const UNKNOWN_CATEGORY_EMOJI: &str = "✨";

pub fn find_category(id: u8) -> Option<&'static DreamCategory> {
    DREAM_CATEGORIES.iter().find(|c| c.id == id)
}

/// One entry of the life statistics tour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeStat {
    pub id: u8,
    pub number: &'static str,
    pub unit: &'static str,
    pub description: &'static str,
    pub emoji: &'static str,
}

pub const LIFE_STATS: [LifeStat; 6] = [
    LifeStat {
        id: 1,
        number: "6.574",
        unit: "Tage",
        description: "So viele Tage hast du gelebt - jeden einzelnen davon einzigartig!",
        emoji: "📅",
    },
    LifeStat {
        id: 2,
        number: "157.776",
        unit: "Stunden",
        description: "So viele Stunden Lebenserfahrung - gefüllt mit Lachen, Lernen und Wachsen!",
        emoji: "⏰",
    },
    LifeStat {
        id: 3,
        number: "18",
        unit: "Geburtstage",
        description: "Jeder Geburtstag ein neues Kapitel, und heute beginnt das Beste!",
        emoji: "🎂",
    },
    LifeStat {
        id: 4,
        number: "~20.000",
        unit: "Mahlzeiten",
        description: "So viele leckere Momente - von Babybrei bis zu deinen Lieblingsdesserts!",
        emoji: "🍽️",
    },
    LifeStat {
        id: 5,
        number: "~52.500",
        unit: "Schlafstunden",
        description: "Zeit für Träume, Erholung und die Vorbereitung auf neue Abenteuer!",
        emoji: "😴",
    },
    LifeStat {
        id: 6,
        number: "1",
        unit: "Volljährigkeit",
        description: "Heute erreichst du diesen besonderen Meilenstein - herzlichen Glückwunsch!",
        emoji: "🎯",
    },
];
