//! Combat state machine.
//!
//! Screens are mutually exclusive; exactly one is active at a time:
//!
//! ```text
//! start -> deploy -> game <-> quiz
//!                    game -> end -> start
//! ```
//!
//! The end screen's restart reenters `start`, never `deploy`, and a
//! fresh deployment follows. No board mutation ever happens while a
//! quiz gate is outstanding, and the win condition is checked after
//! every shot before any turn handoff.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::random::RandomSource;

use super::bot::BotGunner;
use super::fleet::{Fleet, ShotOutcome};

/// Correct cluster answers required to arm the radar ping.
pub const RADAR_STREAK: u32 = 3;

/// The mutually exclusive UI screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Start,
    Deploy,
    Game,
    Quiz,
    End,
}

impl Screen {
    /// The explicit transition table.
    pub fn can_transition(self, to: Screen) -> bool {
        matches!(
            (self, to),
            (Screen::Start, Screen::Deploy)
                | (Screen::Deploy, Screen::Game)
                | (Screen::Game, Screen::Quiz)
                | (Screen::Quiz, Screen::Game)
                | (Screen::Game, Screen::End)
                | (Screen::End, Screen::Start)
        )
    }
}

/// Weapon selected for the player's next shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weapon {
    #[default]
    Standard,
    Cluster,
}

/// Which side won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Victor {
    Player,
    Enemy,
}

/// One wrong answer, recorded for the end-of-game debrief. Never read
/// during play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntelEntry {
    pub question_index: usize,
    pub chosen_answer: usize,
}

/// Outcome of resolving a cluster quiz gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClusterResolution {
    pub correct: bool,
    /// Cells actually resolved against the board; empty on a wrong
    /// answer (the shot is forfeited, not penalized further).
    pub shots: Vec<(usize, usize, ShotOutcome)>,
    /// True when this answer armed the radar ping.
    pub radar_armed: bool,
}

/// Result of one bot turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotShot {
    pub row: usize,
    pub col: usize,
    pub outcome: ShotOutcome,
}

/// Runtime combat state. Created on "start game", discarded at the end
/// screen; never serialized back to the authoring system.
#[derive(Debug, Clone)]
pub struct Battle {
    screen: Screen,
    player: Fleet,
    enemy: Fleet,
    bot: BotGunner,
    player_turn: bool,
    weapon: Weapon,
    streak: u32,
    radar_ready: bool,
    q_idx: usize,
    question_count: usize,
    pending_target: Option<(usize, usize)>,
    intel_log: Vec<IntelEntry>,
    victor: Option<Victor>,
}

impl Battle {
    /// Begin combat from a confirmed player fleet and an auto-placed
    /// enemy fleet. The player moves first.
    pub fn new(player: Fleet, enemy: Fleet, question_count: usize) -> Result<Self, DomainError> {
        if !player.all_placed() || !enemy.all_placed() {
            return Err(DomainError::transition(
                "combat requires both fleets fully deployed",
            ));
        }
        if question_count == 0 {
            return Err(DomainError::validation("question bank must not be empty"));
        }
        Ok(Self {
            screen: Screen::Game,
            player,
            enemy,
            bot: BotGunner::new(),
            player_turn: true,
            weapon: Weapon::default(),
            streak: 0,
            radar_ready: false,
            q_idx: 0,
            question_count,
            pending_target: None,
            intel_log: Vec::new(),
            victor: None,
        })
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn player_fleet(&self) -> &Fleet {
        &self.player
    }

    pub fn enemy_fleet(&self) -> &Fleet {
        &self.enemy
    }

    pub fn is_player_turn(&self) -> bool {
        self.player_turn
    }

    pub fn weapon(&self) -> Weapon {
        self.weapon
    }

    pub fn streak(&self) -> u32 {
        self.streak
    }

    pub fn radar_ready(&self) -> bool {
        self.radar_ready
    }

    pub fn victor(&self) -> Option<Victor> {
        self.victor
    }

    pub fn intel_log(&self) -> &[IntelEntry] {
        &self.intel_log
    }

    /// The question the next cluster gate will ask.
    pub fn question_cursor(&self) -> usize {
        self.q_idx
    }

    pub fn select_weapon(&mut self, weapon: Weapon) {
        self.weapon = weapon;
    }

    fn guard_player_shot(&self) -> Result<(), DomainError> {
        if self.screen != Screen::Game {
            return Err(DomainError::transition("not on the game screen"));
        }
        if self.pending_target.is_some() {
            return Err(DomainError::constraint("a quiz gate is outstanding"));
        }
        if !self.player_turn {
            return Err(DomainError::constraint("not the player's turn"));
        }
        Ok(())
    }

    /// Standard weapon: firing at an unhit enemy cell is unconditional.
    /// Resolves immediately and hands the turn to the bot.
    pub fn fire_standard(&mut self, row: usize, col: usize) -> Result<ShotOutcome, DomainError> {
        self.guard_player_shot()?;
        if !self.enemy.grid().in_bounds(row, col) {
            return Err(DomainError::OutOfBounds {
                row,
                col,
                size: self.enemy.grid().size(),
            });
        }
        if self.enemy.is_hit(row, col) {
            return Err(DomainError::constraint("cell already resolved"));
        }
        let outcome = self.enemy.fire(row, col);
        self.check_win_then_handoff(false);
        Ok(outcome)
    }

    /// Cluster weapon: the shot is gated behind a quiz question. Marks
    /// the target pending and moves to the quiz screen; the board is
    /// untouched until [`Battle::resolve_quiz`].
    pub fn request_cluster(&mut self, row: usize, col: usize) -> Result<usize, DomainError> {
        self.guard_player_shot()?;
        if !self.enemy.grid().in_bounds(row, col) {
            return Err(DomainError::OutOfBounds {
                row,
                col,
                size: self.enemy.grid().size(),
            });
        }
        self.pending_target = Some((row, col));
        self.screen = Screen::Quiz;
        Ok(self.q_idx)
    }

    /// Resolve the outstanding quiz gate. A correct answer fires the
    /// 5-cell "+" pattern (clipped to the grid); a wrong answer
    /// forfeits the shot with zero board mutation. Either way the turn
    /// advances — wrong answers cost the opportunity, nothing more.
    pub fn resolve_quiz(
        &mut self,
        correct: bool,
        chosen_answer: usize,
    ) -> Result<ClusterResolution, DomainError> {
        if self.screen != Screen::Quiz {
            return Err(DomainError::transition("no quiz in progress"));
        }
        let (row, col) = self
            .pending_target
            .take()
            .ok_or_else(|| DomainError::constraint("no pending cluster target"))?;

        let asked = self.q_idx;
        self.q_idx = (self.q_idx + 1) % self.question_count;
        self.screen = Screen::Game;

        let mut resolution = ClusterResolution {
            correct,
            shots: Vec::new(),
            radar_armed: false,
        };

        if correct {
            self.streak += 1;
            if self.streak >= RADAR_STREAK && !self.radar_ready {
                self.radar_ready = true;
                resolution.radar_armed = true;
            }
            for (r, c) in cluster_pattern(row, col, self.enemy.grid().size()) {
                if !self.enemy.is_hit(r, c) {
                    let outcome = self.enemy.fire(r, c);
                    resolution.shots.push((r, c, outcome));
                }
            }
        } else {
            self.streak = 0;
            self.intel_log.push(IntelEntry {
                question_index: asked,
                chosen_answer,
            });
        }

        self.check_win_then_handoff(false);
        Ok(resolution)
    }

    /// Consume the armed radar ping: reveal one randomly chosen unhit
    /// enemy ship cell. Resets the streak regardless of whether the
    /// revealed cell is ever fired at.
    pub fn radar_ping(
        &mut self,
        rng: &mut dyn RandomSource,
    ) -> Result<(usize, usize), DomainError> {
        if !self.radar_ready {
            return Err(DomainError::constraint("radar uplink not armed"));
        }
        let cells = self.enemy.unhit_ship_cells();
        if cells.is_empty() {
            return Err(DomainError::constraint("no ship cells left to reveal"));
        }
        self.radar_ready = false;
        self.streak = 0;
        Ok(cells[rng.index(cells.len())])
    }

    /// Run the bot's turn against the player fleet.
    pub fn bot_turn(&mut self, rng: &mut dyn RandomSource) -> Result<BotShot, DomainError> {
        if self.screen != Screen::Game {
            return Err(DomainError::transition("not on the game screen"));
        }
        if self.player_turn {
            return Err(DomainError::constraint("it is the player's turn"));
        }
        let (row, col) = self
            .bot
            .choose_target(&self.player, rng)
            .ok_or_else(|| DomainError::constraint("no unresolved cells remain"))?;
        let outcome = self.player.fire(row, col);
        self.bot.note_result(&self.player, row, col, outcome);
        self.check_win_then_handoff(true);
        Ok(BotShot { row, col, outcome })
    }

    /// Win check runs after every shot, before any turn handoff. Only
    /// the fleet that was just fired upon can change state, so both
    /// sides can never be fully sunk between two consecutive shots.
    fn check_win_then_handoff(&mut self, bot_fired: bool) {
        if self.enemy.all_sunk() {
            self.victor = Some(Victor::Player);
            self.screen = Screen::End;
            return;
        }
        if self.player.all_sunk() {
            self.victor = Some(Victor::Enemy);
            self.screen = Screen::End;
            return;
        }
        self.player_turn = bot_fired;
    }

    /// Leave the end screen for a fresh start ("new operation"). The
    /// battle itself is discarded by the caller; this only validates
    /// the transition.
    pub fn restart(&mut self) -> Result<(), DomainError> {
        if !self.screen.can_transition(Screen::Start) {
            return Err(DomainError::transition(
                "restart is only available from the end screen",
            ));
        }
        self.screen = Screen::Start;
        Ok(())
    }
}

/// The 5-cell "+" pattern centered on a cell, clipped to grid bounds.
pub fn cluster_pattern(row: usize, col: usize, grid_size: usize) -> Vec<(usize, usize)> {
    let mut cells = vec![(row, col)];
    if row > 0 {
        cells.push((row - 1, col));
    }
    if row + 1 < grid_size {
        cells.push((row + 1, col));
    }
    if col > 0 {
        cells.push((row, col - 1));
    }
    if col + 1 < grid_size {
        cells.push((row, col + 1));
    }
    cells.retain(|&(r, c)| r < grid_size && c < grid_size);
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::battleships::grid::Orientation;
    use crate::random::StepRandom;

    fn placed_fleet() -> Fleet {
        let mut fleet = Fleet::new(8, &[2]);
        assert!(fleet.place(0, 0, 0, Orientation::Horizontal));
        fleet
    }

    fn battle() -> Battle {
        Battle::new(placed_fleet(), placed_fleet(), 3).unwrap()
    }

    #[test]
    fn transition_table_matches_screen_flow() {
        assert!(Screen::Start.can_transition(Screen::Deploy));
        assert!(Screen::Deploy.can_transition(Screen::Game));
        assert!(Screen::Game.can_transition(Screen::Quiz));
        assert!(Screen::Quiz.can_transition(Screen::Game));
        assert!(Screen::Game.can_transition(Screen::End));
        assert!(Screen::End.can_transition(Screen::Start));
        // Restart reenters start, never deploy directly.
        assert!(!Screen::End.can_transition(Screen::Deploy));
        assert!(!Screen::Quiz.can_transition(Screen::End));
    }

    #[test]
    fn new_requires_deployed_fleets() {
        let unplaced = Fleet::new(8, &[2]);
        assert!(Battle::new(unplaced, placed_fleet(), 3).is_err());
    }

    #[test]
    fn standard_shot_resolves_and_hands_off() {
        let mut battle = battle();
        let outcome = battle.fire_standard(5, 5).unwrap();
        assert_eq!(outcome, ShotOutcome::Miss);
        assert!(!battle.is_player_turn());
    }

    #[test]
    fn refiring_resolved_cell_is_rejected_without_turn_loss() {
        let mut battle = battle();
        battle.fire_standard(5, 5).unwrap();
        let mut rng = StepRandom::new(vec![7, 7]);
        battle.bot_turn(&mut rng).unwrap();
        assert!(battle.fire_standard(5, 5).is_err());
        assert!(battle.is_player_turn());
    }

    #[test]
    fn cluster_gate_defers_board_mutation() {
        let mut battle = battle();
        let question = battle.request_cluster(0, 0).unwrap();
        assert_eq!(question, 0);
        assert_eq!(battle.screen(), Screen::Quiz);
        // Pending gate: the target cell is still unresolved.
        assert!(!battle.enemy_fleet().is_hit(0, 0));
        // And no further shot may be taken.
        assert!(battle.fire_standard(3, 3).is_err());
    }

    #[test]
    fn cluster_miss_with_wrong_answer_leaves_board_unchanged() {
        let mut battle = battle();
        battle.request_cluster(5, 5).unwrap();
        let resolution = battle.resolve_quiz(false, 2).unwrap();
        assert!(!resolution.correct);
        assert!(resolution.shots.is_empty());
        assert_eq!(battle.enemy_fleet().unhit_ship_cells().len(), 2);
        assert!(!battle.enemy_fleet().is_hit(5, 5));
        // Turn still passes; wrong answers cost the opportunity only.
        assert!(!battle.is_player_turn());
        assert_eq!(battle.streak(), 0);
        assert_eq!(battle.intel_log().len(), 1);
        assert_eq!(battle.intel_log()[0].question_index, 0);
    }

    #[test]
    fn correct_cluster_fires_plus_pattern_clipped() {
        let mut battle = battle();
        battle.request_cluster(0, 7).unwrap();
        let resolution = battle.resolve_quiz(true, 0).unwrap();
        assert!(resolution.correct);
        // Corner-adjacent center: center, below, left only.
        let cells: Vec<(usize, usize)> =
            resolution.shots.iter().map(|&(r, c, _)| (r, c)).collect();
        assert_eq!(cells, vec![(0, 7), (1, 7), (0, 6)]);
    }

    #[test]
    fn question_cursor_wraps_modulo_bank() {
        let mut battle = battle();
        for (round, expected) in [0, 1, 2, 0].into_iter().enumerate() {
            assert_eq!(battle.question_cursor(), expected);
            battle.request_cluster(6, 6).unwrap();
            battle.resolve_quiz(false, 0).unwrap();
            // Distinct bot misses each round keep the game running.
            let mut rng = StepRandom::new(vec![7, round as i32 + 3]);
            battle.bot_turn(&mut rng).unwrap();
        }
    }

    #[test]
    fn three_correct_answers_arm_the_radar() {
        let mut battle = battle();
        for round in 0..3 {
            battle.request_cluster(6, round * 2).unwrap();
            let resolution = battle.resolve_quiz(true, 0).unwrap();
            assert_eq!(resolution.radar_armed, round == 2);
            let mut rng = StepRandom::new(vec![7, 7 - round as i32]);
            battle.bot_turn(&mut rng).unwrap();
        }
        assert!(battle.radar_ready());
        assert_eq!(battle.streak(), 3);

        // The ping is one-shot and resets the streak.
        let mut rng = StepRandom::fixed(0);
        let revealed = battle.radar_ping(&mut rng).unwrap();
        assert!(battle
            .enemy_fleet()
            .unhit_ship_cells()
            .contains(&revealed));
        assert!(!battle.radar_ready());
        assert_eq!(battle.streak(), 0);
        assert!(battle.radar_ping(&mut rng).is_err());
    }

    #[test]
    fn wrong_answer_resets_the_streak() {
        let mut battle = battle();
        battle.request_cluster(6, 0).unwrap();
        battle.resolve_quiz(true, 0).unwrap();
        let mut rng = StepRandom::new(vec![7, 7]);
        battle.bot_turn(&mut rng).unwrap();
        assert_eq!(battle.streak(), 1);

        battle.request_cluster(6, 2).unwrap();
        battle.resolve_quiz(false, 1).unwrap();
        assert_eq!(battle.streak(), 0);
    }

    #[test]
    fn win_is_checked_before_handoff_and_sides_stay_exclusive() {
        let mut battle = battle();
        battle.fire_standard(0, 0).unwrap();
        let mut rng = StepRandom::new(vec![7, 7]);
        battle.bot_turn(&mut rng).unwrap();
        battle.fire_standard(0, 1).unwrap();
        assert_eq!(battle.victor(), Some(Victor::Player));
        assert_eq!(battle.screen(), Screen::End);
        assert!(!battle.player_fleet().all_sunk());
        // No further bot turn after the game ended.
        assert!(battle.bot_turn(&mut rng).is_err());
    }

    #[test]
    fn restart_only_from_end_screen() {
        let mut battle = battle();
        assert!(battle.restart().is_err());
        battle.fire_standard(0, 0).unwrap();
        let mut rng = StepRandom::new(vec![7, 7]);
        battle.bot_turn(&mut rng).unwrap();
        battle.fire_standard(0, 1).unwrap();
        assert!(battle.restart().is_ok());
        assert_eq!(battle.screen(), Screen::Start);
    }
}
