//! Combat: monster encounters settled by rock-paper-scissors
//!
//! A battle is a single round. The monster profile (kind, damage, reward)
//! is rolled when the encounter starts and stays fixed until the player
//! answers. A tie costs nothing, a win pays the reward, a loss costs the
//! damage. Input that is not a valid hand counts as a loss.

use core::ops::Range;

use log::info;
use strum::{Display, EnumIter};

use crate::difficulty::Difficulty;
use crate::player::Player;
use crate::rng::GameRng;

/// Monster tiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum MonsterKind {
    Slime,
    Goblin,
    Orc,
}

/// Tier weights from a percentage roll, per difficulty. Total weight is 100.
const EASY_WEIGHTS: [(MonsterKind, u32); 3] = [
    (MonsterKind::Slime, 70),
    (MonsterKind::Goblin, 20),
    (MonsterKind::Orc, 10),
];

const NORMAL_WEIGHTS: [(MonsterKind, u32); 3] = [
    (MonsterKind::Slime, 50),
    (MonsterKind::Goblin, 30),
    (MonsterKind::Orc, 20),
];

const ALL_KINDS: [MonsterKind; 3] = [MonsterKind::Slime, MonsterKind::Goblin, MonsterKind::Orc];

impl MonsterKind {
    /// Damage dealt on a loss, half-open
    pub const fn damage_range(self) -> Range<i32> {
        match self {
            MonsterKind::Slime => 5..10,
            MonsterKind::Goblin => 10..20,
            MonsterKind::Orc => 20..35,
        }
    }

    /// Gold paid on a win, half-open
    pub const fn reward_range(self) -> Range<i32> {
        match self {
            MonsterKind::Slime => 5..15,
            MonsterKind::Goblin => 15..30,
            MonsterKind::Orc => 30..50,
        }
    }
}

/// Pick a monster tier for the difficulty
pub fn select_monster(difficulty: Difficulty, rng: &mut GameRng) -> MonsterKind {
    let weights = match difficulty {
        Difficulty::Easy => &EASY_WEIGHTS,
        Difficulty::Normal => &NORMAL_WEIGHTS,
        Difficulty::Hard => {
            return ALL_KINDS[rng.rn2(ALL_KINDS.len() as u32) as usize];
        }
    };

    let roll = rng.percent_roll();
    let mut cumulative = 0;
    for &(kind, weight) in weights {
        cumulative += weight;
        if roll < cumulative {
            return kind;
        }
    }

    // Weights sum to 100
    MonsterKind::Orc
}

/// A monster waiting for the player's hand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encounter {
    pub kind: MonsterKind,
    pub damage: i32,
    pub reward: u32,
}

impl Encounter {
    /// Roll a monster for the difficulty: tier, then damage, then reward
    pub fn roll(difficulty: Difficulty, rng: &mut GameRng) -> Self {
        let kind = select_monster(difficulty, rng);
        let damage = rng.range(kind.damage_range());
        let reward = rng.range(kind.reward_range()) as u32;
        info!("encounter: {} (damage {}, reward {})", kind, damage, reward);
        Self {
            kind,
            damage,
            reward,
        }
    }
}

/// Rock-paper-scissors hands, numbered as on the battle prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Hand {
    Scissors = 1,
    Rock = 2,
    Paper = 3,
}

impl Hand {
    /// Parse a prompt answer: `1`, `2` or `3`, surrounding whitespace allowed
    pub fn parse(input: &str) -> Option<Hand> {
        match input.trim().parse::<i64>().ok()? {
            1 => Some(Hand::Scissors),
            2 => Some(Hand::Rock),
            3 => Some(Hand::Paper),
            _ => None,
        }
    }

    /// Whether this hand beats `other`
    pub const fn beats(self, other: Hand) -> bool {
        matches!(
            (self, other),
            (Hand::Scissors, Hand::Paper) | (Hand::Rock, Hand::Scissors) | (Hand::Paper, Hand::Rock)
        )
    }

    fn random(rng: &mut GameRng) -> Hand {
        const HANDS: [Hand; 3] = [Hand::Scissors, Hand::Rock, Hand::Paper];
        HANDS[rng.rn2(3) as usize]
    }
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Tie,
    Win,
    Loss,
    /// The player's answer was not a hand; treated as a loss
    Fumble,
}

/// Result of a resolved battle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BattleReport {
    pub encounter: Encounter,
    pub player_hand: Option<Hand>,
    pub monster_hand: Option<Hand>,
    pub outcome: Outcome,
    pub hp_lost: i32,
    pub gold_gained: u32,
}

impl BattleReport {
    /// Narration lines for the message log
    pub fn messages(&self) -> Vec<String> {
        let name = self.encounter.kind;
        let mut lines = Vec::new();
        if let (Some(player), Some(monster)) = (self.player_hand, self.monster_hand) {
            lines.push(format!("You: {} vs {}: {}", player, name, monster));
        }
        match self.outcome {
            Outcome::Tie => lines.push("It's a tie! Nothing happens.".to_string()),
            Outcome::Win => {
                lines.push(format!("You win! You defeated the {}.", name));
                lines.push(format!("You gained {} gold!", self.gold_gained));
            }
            Outcome::Loss => {
                lines.push(format!("You lose... the {} hits you.", name));
                lines.push(format!("You lost {} HP.", self.hp_lost));
            }
            Outcome::Fumble => {
                lines.push("Invalid input! You panic and try to run away.".to_string());
                lines.push(format!("The {} hits you in the back as you flee.", name));
                lines.push(format!("You lost {} HP.", self.hp_lost));
            }
        }
        lines
    }
}

/// Outcome of `player` against `monster`
pub fn judge(player: Hand, monster: Hand) -> Outcome {
    if player == monster {
        Outcome::Tie
    } else if player.beats(monster) {
        Outcome::Win
    } else {
        Outcome::Loss
    }
}

/// Settle a battle from the player's raw answer and apply it to `player`
///
/// The monster's hand is only drawn when the answer is a valid hand.
pub fn resolve(
    encounter: &Encounter,
    input: &str,
    player: &mut Player,
    rng: &mut GameRng,
) -> BattleReport {
    let player_hand = Hand::parse(input);
    let monster_hand = player_hand.map(|_| Hand::random(rng));

    let outcome = match (player_hand, monster_hand) {
        (Some(p), Some(m)) => judge(p, m),
        _ => Outcome::Fumble,
    };

    let mut report = BattleReport {
        encounter: *encounter,
        player_hand,
        monster_hand,
        outcome,
        hp_lost: 0,
        gold_gained: 0,
    };

    match outcome {
        Outcome::Tie => {}
        Outcome::Win => {
            player.gold += encounter.reward;
            report.gold_gained = encounter.reward;
        }
        Outcome::Loss | Outcome::Fumble => {
            player.take_damage(encounter.damage);
            report.hp_lost = encounter.damage;
        }
    }

    info!(
        "battle vs {}: {:?} (hp {}, gold {})",
        encounter.kind, outcome, player.hp, player.gold
    );
    report
}
