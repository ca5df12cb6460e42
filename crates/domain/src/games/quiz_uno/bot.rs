//! Bot card-play policy.
//!
//! Difficulty is a single swappable ordering over the bot's currently
//! legal plays, not a separate algorithm per level.

use crate::config::BotDifficulty;
use crate::random::{shuffle, RandomSource};

use super::deck::{Card, CardRank};

/// Order legal hand indices by difficulty policy; the bot plays the
/// first entry. `candidates` must index into `hand`.
pub fn order_candidates(
    difficulty: BotDifficulty,
    candidates: &mut [usize],
    hand: &[Card],
    rng: &mut dyn RandomSource,
) {
    match difficulty {
        // Easy plays at random.
        BotDifficulty::Easy => shuffle(rng, candidates),
        // Medium takes the first legal match in hand order.
        BotDifficulty::Medium => {}
        // Hard leads with +4, then +2, over everything else.
        BotDifficulty::Hard => {
            candidates.sort_by_key(|&idx| match hand[idx].rank {
                CardRank::WildDrawFour => 0,
                CardRank::DrawTwo => 1,
                _ => 2,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::quiz_uno::deck::CardColor;
    use crate::random::StepRandom;

    fn hand() -> Vec<Card> {
        vec![
            Card::colored(CardColor::Red, CardRank::Number(3)),
            Card::colored(CardColor::Red, CardRank::DrawTwo),
            Card::wild(CardRank::WildDrawFour),
            Card::colored(CardColor::Red, CardRank::Skip),
        ]
    }

    #[test]
    fn medium_preserves_hand_order() {
        let mut candidates = vec![0, 1, 2, 3];
        order_candidates(
            BotDifficulty::Medium,
            &mut candidates,
            &hand(),
            &mut StepRandom::fixed(0),
        );
        assert_eq!(candidates, vec![0, 1, 2, 3]);
    }

    #[test]
    fn hard_leads_with_plus_four_then_plus_two() {
        let mut candidates = vec![0, 1, 2, 3];
        order_candidates(
            BotDifficulty::Hard,
            &mut candidates,
            &hand(),
            &mut StepRandom::fixed(0),
        );
        assert_eq!(candidates[0], 2);
        assert_eq!(candidates[1], 1);
    }

    #[test]
    fn easy_shuffles_with_injected_rng() {
        let mut candidates = vec![0, 1, 2, 3];
        order_candidates(
            BotDifficulty::Easy,
            &mut candidates,
            &hand(),
            &mut StepRandom::new(vec![0, 0, 0]),
        );
        // Scripted all-zero swaps rotate the slice.
        assert_eq!(candidates, vec![1, 2, 3, 0]);
    }
}
