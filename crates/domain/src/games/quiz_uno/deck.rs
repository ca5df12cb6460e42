//! Card and deck primitives for the quiz card game.

use serde::{Deserialize, Serialize};

use crate::random::{shuffle, RandomSource};

/// The four suit colors. Wild cards carry no color until played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardColor {
    Red,
    Yellow,
    Green,
    Blue,
}

pub const COLORS: [CardColor; 4] = [
    CardColor::Red,
    CardColor::Yellow,
    CardColor::Green,
    CardColor::Blue,
];

/// Card rank: ten number ranks plus two specials per color, and the
/// colorless wilds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardRank {
    Number(u8),
    Skip,
    DrawTwo,
    Wild,
    WildDrawFour,
}

impl CardRank {
    /// Attack cards force the opponent to draw.
    pub fn is_attack(self) -> bool {
        matches!(self, Self::DrawTwo | Self::WildDrawFour)
    }

    pub fn is_wild(self) -> bool {
        matches!(self, Self::Wild | Self::WildDrawFour)
    }

    /// Cards the opponent draws when this attack lands.
    pub fn draw_penalty(self) -> usize {
        match self {
            Self::DrawTwo => 2,
            Self::WildDrawFour => 4,
            _ => 0,
        }
    }
}

/// One card. `color` is `None` only for wilds still in hand or pile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub color: Option<CardColor>,
    pub rank: CardRank,
}

impl Card {
    pub fn colored(color: CardColor, rank: CardRank) -> Self {
        Self {
            color: Some(color),
            rank,
        }
    }

    pub fn wild(rank: CardRank) -> Self {
        Self { color: None, rank }
    }

    /// Legality against the discard top: wilds always play; otherwise
    /// the color must match the active color or the rank must match
    /// the top card's rank.
    pub fn matches(&self, top: &Card, active_color: CardColor) -> bool {
        if self.rank.is_wild() {
            return true;
        }
        self.color == Some(active_color) || self.rank == top.rank
    }
}

/// Build the full shuffled draw pile: per color, ranks 0-9 once and
/// each special twice; plus four of each wild.
pub fn build_deck(rng: &mut dyn RandomSource) -> Vec<Card> {
    let mut deck = Vec::with_capacity(64);
    for color in COLORS {
        for n in 0..10 {
            deck.push(Card::colored(color, CardRank::Number(n)));
        }
        for _ in 0..2 {
            deck.push(Card::colored(color, CardRank::Skip));
            deck.push(Card::colored(color, CardRank::DrawTwo));
        }
    }
    for _ in 0..4 {
        deck.push(Card::wild(CardRank::Wild));
        deck.push(Card::wild(CardRank::WildDrawFour));
    }
    shuffle(rng, &mut deck);
    deck
}
