use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::hand::{evaluate, Evaluation, Hand};

/// Round outcome. The kebab-case form doubles as a styling key for displays.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    PlayerWin,
    ComputerWin,
    Tie,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::PlayerWin => "player-win",
            Outcome::ComputerWin => "computer-win",
            Outcome::Tie => "tie",
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub message: String,
    pub outcome: Outcome,
}

#[derive(Debug, Copy, Clone)]
enum Side {
    Player,
    Computer,
}

impl Side {
    fn name(self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Computer => "Computer",
        }
    }

    fn outcome(self) -> Outcome {
        match self {
            Side::Player => Outcome::PlayerWin,
            Side::Computer => Outcome::ComputerWin,
        }
    }
}

fn win_by_category(side: Side, eval: &Evaluation) -> Verdict {
    Verdict {
        message: format!("{} wins with {}", side.name(), eval.category),
        outcome: side.outcome(),
    }
}

fn win_by_tie_break(side: Side, eval: &Evaluation, hand: &Hand) -> Verdict {
    let message = match hand.find_by_value(eval.tie_break) {
        Some(card) => format!(
            "{} wins with {} ({})",
            side.name(),
            eval.category,
            card.rank.label()
        ),
        None => format!("{} wins with {}", side.name(), eval.category),
    };
    Verdict {
        message,
        outcome: side.outcome(),
    }
}

/// Arbitrates two evaluated hands.
///
/// A higher category wins outright. Equal categories fall back to the
/// tie-break value, and the message then names the rank of the first card in
/// the winning hand carrying that value. Equal on both counts is a tie.
///
/// # Examples
///
/// ```
/// use simple_poker_engine::cards::Card;
/// use simple_poker_engine::hand::{evaluate, Hand};
/// use simple_poker_engine::verdict::{decide, Outcome};
///
/// let parse = |s: [&str; 4]| Hand::new(s.map(|c| c.parse::<Card>().unwrap()));
/// let player = parse(["Ah", "Ad", "7s", "8c"]);
/// let computer = parse(["Kh", "Kd", "9s", "10c"]);
///
/// let verdict = decide(&evaluate(&player), &evaluate(&computer), &player, &computer);
/// assert_eq!(verdict.outcome, Outcome::PlayerWin);
/// assert_eq!(verdict.message, "Player wins with a Pair (A)");
/// ```
pub fn decide(
    player_eval: &Evaluation,
    computer_eval: &Evaluation,
    player_hand: &Hand,
    computer_hand: &Hand,
) -> Verdict {
    match player_eval.category.cmp(&computer_eval.category) {
        Ordering::Greater => win_by_category(Side::Player, player_eval),
        Ordering::Less => win_by_category(Side::Computer, computer_eval),
        Ordering::Equal => match player_eval.tie_break.cmp(&computer_eval.tie_break) {
            Ordering::Greater => win_by_tie_break(Side::Player, player_eval, player_hand),
            Ordering::Less => win_by_tie_break(Side::Computer, computer_eval, computer_hand),
            Ordering::Equal => Verdict {
                message: "Tie".to_string(),
                outcome: Outcome::Tie,
            },
        },
    }
}

/// Evaluates both hands and arbitrates them.
pub fn resolve(player: &Hand, computer: &Hand) -> Verdict {
    decide(&evaluate(player), &evaluate(computer), player, computer)
}
