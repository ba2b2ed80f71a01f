//! Accent palette for feed cards.

#[cfg(test)]
#[path = "card_style_test.rs"]
mod card_style_test;

/// Visual accent applied to one feed card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardStyle {
    /// CSS modifier suffix, e.g. `article-card--blue`.
    pub accent: &'static str,
    pub icon: &'static str,
}

const PALETTE: [CardStyle; 4] = [
    CardStyle { accent: "blue", icon: "💎" },
    CardStyle { accent: "indigo", icon: "🚀" },
    CardStyle { accent: "rose", icon: "🔥" },
    CardStyle { accent: "amber", icon: "⚡" },
];

/// Pick the accent for an article id. Negative ids wrap like positive ones.
pub fn card_style(id: i64) -> CardStyle {
    // rem_euclid keeps the index in 0..4 for any id
    #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    let index = id.rem_euclid(PALETTE.len() as i64) as usize;
    PALETTE[index]
}

/// Feed positions rendered as wide cards.
pub fn is_featured(position: usize) -> bool {
    position == 0 || position == 7
}
