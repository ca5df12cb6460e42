//! Quiz Uno game state.
//!
//! Standard two-player Uno deck mechanics with a quiz layer bolted
//! onto state transitions rather than replacing them: attack and wild
//! plays are always gated, any other play has a flat bonus-gate
//! chance. The bot's plays are never gated; quizzes are the learner's.

use serde::{Deserialize, Serialize};

use crate::config::{BotDifficulty, QuizUnoConfig};
use crate::error::DomainError;
use crate::random::{self, RandomSource};

use super::bot::order_candidates;
use super::deck::{build_deck, Card, CardColor, CardRank, COLORS};

/// Flat chance that a non-attack, non-wild play triggers a bonus gate.
pub const BONUS_GATE_PERCENT: u8 = 30;

/// Why a play was gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateKind {
    /// +2 / +4 plays: a wrong answer forfeits the draw penalty.
    Atk,
    /// Wild plays: a wrong answer hands color choice to chance.
    Wild,
    /// Random gate on ordinary plays: a correct answer makes the
    /// opponent draw one.
    Bonus,
}

/// Which side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Bot,
}

#[derive(Debug, Clone)]
struct PendingGate {
    hand_index: usize,
    kind: GateKind,
    chosen_color: Option<CardColor>,
    question_index: usize,
}

/// Effects of one completed card play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayedCard {
    pub card: Card,
    pub opponent_drew: usize,
    pub opponent_skipped: bool,
    pub winner: Option<Side>,
}

/// What happened when the player attempted a play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Played(PlayedCard),
    /// The play is held pending a quiz answer; the hand and discard
    /// are untouched until [`UnoGame::resolve_gate`].
    Gated {
        kind: GateKind,
        question_index: usize,
    },
}

/// One bot turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotPlay {
    pub played: Option<Card>,
    pub drew_card: bool,
    pub opponent_drew: usize,
    pub opponent_skipped: bool,
    pub winner: Option<Side>,
}

/// Reported at game end. Winning and passing are independent: course
/// completion requires both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndReport {
    pub winner: Side,
    pub gated_total: u32,
    pub gated_correct: u32,
    pub percent_correct: u8,
    pub passed: bool,
    pub completed: bool,
}

/// Runtime game state for one play-through.
#[derive(Debug, Clone)]
pub struct UnoGame {
    draw_pile: Vec<Card>,
    discard: Vec<Card>,
    player_hand: Vec<Card>,
    bot_hand: Vec<Card>,
    active_color: CardColor,
    player_turn: bool,
    drawn_this_turn: bool,
    pending: Option<PendingGate>,
    gated_total: u32,
    gated_correct: u32,
    pass_mark: u8,
    q_idx: usize,
    question_count: usize,
    difficulty: BotDifficulty,
    winner: Option<Side>,
}

impl UnoGame {
    /// Deal a fresh game. `question_count` must be at least 1 (callers
    /// substitute the placeholder bank first).
    pub fn new(
        config: &QuizUnoConfig,
        question_count: usize,
        rng: &mut dyn RandomSource,
    ) -> Result<Self, DomainError> {
        if question_count == 0 {
            return Err(DomainError::validation("question bank must not be empty"));
        }
        let mut draw_pile = build_deck(rng);
        let mut deal = |pile: &mut Vec<Card>| -> Vec<Card> {
            (0..config.hand_size).filter_map(|_| pile.pop()).collect()
        };
        let player_hand = deal(&mut draw_pile);
        let bot_hand = deal(&mut draw_pile);

        // Flip the starter; a wild starter gets a random active color.
        let starter = draw_pile.pop().unwrap_or(Card::colored(
            CardColor::Red,
            CardRank::Number(0),
        ));
        let active_color = starter
            .color
            .unwrap_or_else(|| COLORS[rng.index(COLORS.len())]);

        Ok(Self {
            draw_pile,
            discard: vec![starter],
            player_hand,
            bot_hand,
            active_color,
            player_turn: true,
            drawn_this_turn: false,
            pending: None,
            gated_total: 0,
            gated_correct: 0,
            pass_mark: config.pass_mark,
            q_idx: 0,
            question_count,
            difficulty: config.difficulty,
            winner: None,
        })
    }

    pub fn player_hand(&self) -> &[Card] {
        &self.player_hand
    }

    pub fn bot_hand_size(&self) -> usize {
        self.bot_hand.len()
    }

    pub fn top_card(&self) -> Card {
        // The discard always holds at least the starter.
        self.discard.last().copied().unwrap_or(Card::colored(
            CardColor::Red,
            CardRank::Number(0),
        ))
    }

    pub fn active_color(&self) -> CardColor {
        self.active_color
    }

    pub fn is_player_turn(&self) -> bool {
        self.player_turn
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn gated_total(&self) -> u32 {
        self.gated_total
    }

    pub fn gated_correct(&self) -> u32 {
        self.gated_correct
    }

    pub fn question_cursor(&self) -> usize {
        self.q_idx
    }

    /// Indices of the player's currently legal plays.
    pub fn legal_plays(&self) -> Vec<usize> {
        let top = self.top_card();
        self.player_hand
            .iter()
            .enumerate()
            .filter(|(_, card)| card.matches(&top, self.active_color))
            .map(|(idx, _)| idx)
            .collect()
    }

    fn guard_player_move(&self) -> Result<(), DomainError> {
        if self.winner.is_some() {
            return Err(DomainError::transition("the game is over"));
        }
        if self.pending.is_some() {
            return Err(DomainError::constraint("a quiz gate is outstanding"));
        }
        if !self.player_turn {
            return Err(DomainError::constraint("not the player's turn"));
        }
        Ok(())
    }

    /// Attempt to play a card from the player's hand. Wild plays must
    /// name a color. Gated plays leave all state untouched except the
    /// gate itself.
    pub fn play_card(
        &mut self,
        hand_index: usize,
        chosen_color: Option<CardColor>,
        rng: &mut dyn RandomSource,
    ) -> Result<PlayOutcome, DomainError> {
        self.guard_player_move()?;
        let card = *self
            .player_hand
            .get(hand_index)
            .ok_or_else(|| DomainError::validation("no such card in hand"))?;
        if !card.matches(&self.top_card(), self.active_color) {
            return Err(DomainError::constraint("card does not match the discard"));
        }
        if card.rank.is_wild() && chosen_color.is_none() {
            return Err(DomainError::validation("wild plays must name a color"));
        }

        let kind = if card.rank.is_attack() {
            Some(GateKind::Atk)
        } else if card.rank.is_wild() {
            Some(GateKind::Wild)
        } else if rng.chance(BONUS_GATE_PERCENT) {
            Some(GateKind::Bonus)
        } else {
            None
        };

        match kind {
            Some(kind) => {
                let question_index = self.q_idx;
                self.pending = Some(PendingGate {
                    hand_index,
                    kind,
                    chosen_color,
                    question_index,
                });
                Ok(PlayOutcome::Gated {
                    kind,
                    question_index,
                })
            }
            None => Ok(PlayOutcome::Played(self.complete_player_play(
                hand_index,
                chosen_color,
                true,
                false,
                rng,
            ))),
        }
    }

    /// Resolve the outstanding quiz gate and complete the held play.
    pub fn resolve_gate(
        &mut self,
        correct: bool,
        rng: &mut dyn RandomSource,
    ) -> Result<PlayedCard, DomainError> {
        let gate = self
            .pending
            .take()
            .ok_or_else(|| DomainError::constraint("no quiz gate outstanding"))?;
        self.gated_total += 1;
        if correct {
            self.gated_correct += 1;
        }
        self.q_idx = (gate.question_index + 1) % self.question_count;

        let chosen_color = match (gate.kind, correct) {
            // A fumbled wild hands the color choice to chance.
            (GateKind::Wild, false) => Some(COLORS[rng.index(COLORS.len())]),
            _ => gate.chosen_color,
        };
        let effect_ok = match gate.kind {
            GateKind::Atk => correct,
            GateKind::Wild => true,
            GateKind::Bonus => false,
        };
        let bonus = gate.kind == GateKind::Bonus && correct;
        Ok(self.complete_player_play(gate.hand_index, chosen_color, effect_ok, bonus, rng))
    }

    fn complete_player_play(
        &mut self,
        hand_index: usize,
        chosen_color: Option<CardColor>,
        effect_ok: bool,
        bonus_draw: bool,
        rng: &mut dyn RandomSource,
    ) -> PlayedCard {
        let card = self.player_hand.remove(hand_index);
        self.active_color = card.color.or(chosen_color).unwrap_or(self.active_color);
        self.discard.push(card);

        let mut opponent_drew = 0;
        let mut opponent_skipped = false;
        if effect_ok && card.rank.is_attack() {
            opponent_drew = self.force_draw(Side::Bot, card.rank.draw_penalty(), rng);
            opponent_skipped = true;
        }
        if card.rank == CardRank::Skip {
            opponent_skipped = true;
        }
        if bonus_draw {
            opponent_drew += self.force_draw(Side::Bot, 1, rng);
        }

        if self.player_hand.is_empty() {
            self.winner = Some(Side::Player);
        } else if !opponent_skipped {
            self.player_turn = false;
        }
        self.drawn_this_turn = false;

        PlayedCard {
            card,
            opponent_drew,
            opponent_skipped,
            winner: self.winner,
        }
    }

    /// Draw one card into the player's hand (once per turn). Returns
    /// the index of the drawn card so the caller can offer to play it.
    pub fn draw_card(&mut self, rng: &mut dyn RandomSource) -> Result<usize, DomainError> {
        self.guard_player_move()?;
        if self.drawn_this_turn {
            return Err(DomainError::constraint("already drew this turn"));
        }
        match self.draw_from_pile(rng) {
            Some(card) => {
                self.player_hand.push(card);
                self.drawn_this_turn = true;
                Ok(self.player_hand.len() - 1)
            }
            None => Err(DomainError::constraint("no cards left to draw")),
        }
    }

    /// Pass the turn after drawing an unplayable card. Passing without
    /// having drawn is rejected; the player must always take a card
    /// before giving up the turn.
    pub fn end_turn(&mut self) -> Result<(), DomainError> {
        self.guard_player_move()?;
        if !self.drawn_this_turn {
            return Err(DomainError::constraint("must draw before passing"));
        }
        self.player_turn = false;
        self.drawn_this_turn = false;
        Ok(())
    }

    /// Run one bot turn: play the first legal card under the difficulty
    /// policy, or draw and play the drawn card when possible, or pass.
    /// Bot attacks apply unconditionally (the bot answers no quizzes).
    pub fn bot_turn(&mut self, rng: &mut dyn RandomSource) -> Result<BotPlay, DomainError> {
        if self.winner.is_some() {
            return Err(DomainError::transition("the game is over"));
        }
        if self.pending.is_some() {
            return Err(DomainError::constraint("a quiz gate is outstanding"));
        }
        if self.player_turn {
            return Err(DomainError::constraint("it is the player's turn"));
        }

        let top = self.top_card();
        let mut candidates: Vec<usize> = self
            .bot_hand
            .iter()
            .enumerate()
            .filter(|(_, card)| card.matches(&top, self.active_color))
            .map(|(idx, _)| idx)
            .collect();
        order_candidates(self.difficulty, &mut candidates, &self.bot_hand, rng);

        if let Some(&idx) = candidates.first() {
            return Ok(self.complete_bot_play(idx, rng));
        }

        // No legal play: draw once and play the drawn card if it fits.
        let mut play = BotPlay {
            played: None,
            drew_card: false,
            opponent_drew: 0,
            opponent_skipped: false,
            winner: None,
        };
        if let Some(card) = self.draw_from_pile(rng) {
            self.bot_hand.push(card);
            play.drew_card = true;
            if card.matches(&self.top_card(), self.active_color) {
                return Ok(self.complete_bot_play_with_drawn(play, rng));
            }
        }
        self.player_turn = true;
        Ok(play)
    }

    fn complete_bot_play_with_drawn(
        &mut self,
        mut play: BotPlay,
        rng: &mut dyn RandomSource,
    ) -> BotPlay {
        let idx = self.bot_hand.len() - 1;
        let completed = self.complete_bot_play(idx, rng);
        play.played = completed.played;
        play.opponent_drew = completed.opponent_drew;
        play.opponent_skipped = completed.opponent_skipped;
        play.winner = completed.winner;
        play
    }

    fn complete_bot_play(&mut self, hand_index: usize, rng: &mut dyn RandomSource) -> BotPlay {
        let card = self.bot_hand.remove(hand_index);
        self.active_color = card
            .color
            .unwrap_or_else(|| self.bot_color_choice(rng));
        self.discard.push(card);

        let mut opponent_drew = 0;
        let mut opponent_skipped = false;
        if card.rank.is_attack() {
            opponent_drew = self.force_draw(Side::Player, card.rank.draw_penalty(), rng);
            opponent_skipped = true;
        }
        if card.rank == CardRank::Skip {
            opponent_skipped = true;
        }

        if self.bot_hand.is_empty() {
            self.winner = Some(Side::Bot);
        } else if !opponent_skipped {
            self.player_turn = true;
        }

        BotPlay {
            played: Some(card),
            drew_card: false,
            opponent_drew,
            opponent_skipped,
            winner: self.winner,
        }
    }

    /// Bot wild plays pick the color it holds most of.
    fn bot_color_choice(&self, rng: &mut dyn RandomSource) -> CardColor {
        let mut best = COLORS[rng.index(COLORS.len())];
        let mut best_count = 0;
        for color in COLORS {
            let count = self
                .bot_hand
                .iter()
                .filter(|c| c.color == Some(color))
                .count();
            if count > best_count {
                best = color;
                best_count = count;
            }
        }
        best
    }

    fn force_draw(&mut self, side: Side, count: usize, rng: &mut dyn RandomSource) -> usize {
        let mut drawn = 0;
        for _ in 0..count {
            let Some(card) = self.draw_from_pile(rng) else {
                break;
            };
            match side {
                Side::Player => self.player_hand.push(card),
                Side::Bot => self.bot_hand.push(card),
            }
            drawn += 1;
        }
        drawn
    }

    /// Pop from the draw pile, reshuffling the discard (minus its top
    /// card) back in when the pile runs dry.
    fn draw_from_pile(&mut self, rng: &mut dyn RandomSource) -> Option<Card> {
        if self.draw_pile.is_empty() && self.discard.len() > 1 {
            let top = self.discard.pop();
            self.draw_pile.append(&mut self.discard);
            // Recycled wilds go back colorless.
            for card in &mut self.draw_pile {
                if card.rank.is_wild() {
                    card.color = None;
                }
            }
            random::shuffle(rng, &mut self.draw_pile);
            if let Some(top) = top {
                self.discard.push(top);
            }
        }
        self.draw_pile.pop()
    }

    /// End-of-game report; `None` while the game is still running.
    /// With zero gated quizzes the pass is vacuous (100%).
    pub fn end_report(&self) -> Option<EndReport> {
        let winner = self.winner?;
        let percent_correct = if self.gated_total == 0 {
            100
        } else {
            (self.gated_correct * 100 / self.gated_total) as u8
        };
        let passed = percent_correct >= self.pass_mark;
        Some(EndReport {
            winner,
            gated_total: self.gated_total,
            gated_correct: self.gated_correct,
            percent_correct,
            passed,
            completed: winner == Side::Player && passed,
        })
    }
}
