//! Bridge and torch: minimum total time to get everyone across.
//!
//! Purpose
//! - At most two people cross at once, carrying the single torch; a pair
//!   moves at the pace of the slower person. Find the fastest schedule.
//!
//! Method
//! - Sort by crossing time. With the `k` slowest still on the near side, the
//!   best plan moves the slowest one (escort by the fastest) or the two
//!   slowest together (the two fastest ferry the torch). `best[k]` is filled
//!   bottom-up and the chosen moves are replayed into a schedule.

use std::fmt;

use tracing::debug;

/// Optimal schedule: total time and the groups crossing in order.
///
/// Groups alternate direction, starting with a forward crossing. Entries are
/// indices into the caller's `times` slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Crossing {
    pub total: u64,
    pub strategy: Vec<Vec<usize>>,
}

/// Which move settles the remaining slowest people.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Move {
    Escort,
    Pair,
}

/// Fastest way to get everyone across.
///
/// An empty group yields `total == 0` and an empty strategy.
pub fn cross_bridge(times: &[u32]) -> Crossing {
    let n = times.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&i| (times[i], i));
    let t = |k: usize| u64::from(times[order[k]]);

    let mut best = vec![0u64; n + 1];
    let mut moves = vec![Move::Escort; n + 1];
    for k in 1..=n {
        best[k] = match k {
            1 => t(0),
            2 => t(1),
            _ => {
                let escort = best[k - 1] + t(0) + t(k - 1);
                if k >= 4 {
                    let pair = best[k - 2] + t(0) + 2 * t(1) + t(k - 1);
                    if pair < escort {
                        moves[k] = Move::Pair;
                        pair
                    } else {
                        escort
                    }
                } else {
                    escort
                }
            }
        };
    }

    let mut strategy = Vec::new();
    let mut k = n;
    while k > 2 {
        match moves[k] {
            Move::Escort => {
                strategy.push(vec![order[0], order[k - 1]]);
                strategy.push(vec![order[0]]);
                k -= 1;
            }
            Move::Pair => {
                strategy.push(vec![order[0], order[1]]);
                strategy.push(vec![order[0]]);
                strategy.push(vec![order[k - 2], order[k - 1]]);
                strategy.push(vec![order[1]]);
                k -= 2;
            }
        }
    }
    match k {
        2 => strategy.push(vec![order[0], order[1]]),
        1 => strategy.push(vec![order[0]]),
        _ => {}
    }
    debug!(people = n, total = best[n], steps = strategy.len(), "bridge");
    Crossing {
        total: best[n],
        strategy,
    }
}

/// Why a schedule is not a valid crossing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StrategyError {
    #[error("strategy is empty")]
    Empty,
    #[error("step {step} moves nobody")]
    EmptyGroup { step: usize },
    #[error("step {step} moves {size} people; the bridge holds two")]
    Overloaded { step: usize, size: usize },
    #[error("step {step} names unknown person {person}")]
    UnknownPerson { step: usize, person: usize },
    #[error("step {step}: person {person} is on the {side} side")]
    WrongSide {
        step: usize,
        person: usize,
        side: Bank,
    },
    #[error("person {person} never crossed")]
    Stranded { person: usize },
    #[error("strategy takes {actual} but reports {reported}")]
    Total { reported: u64, actual: u64 },
}

/// River bank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bank {
    Near,
    Far,
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bank::Near => write!(f, "near"),
            Bank::Far => write!(f, "far"),
        }
    }
}

/// Replay `crossing.strategy` and check it moves everyone across in exactly
/// `crossing.total`.
pub fn verify_strategy(times: &[u32], crossing: &Crossing) -> Result<(), StrategyError> {
    if times.is_empty() {
        if crossing.strategy.is_empty() && crossing.total == 0 {
            return Ok(());
        }
        return Err(StrategyError::Total {
            reported: crossing.total,
            actual: 0,
        });
    }
    if crossing.strategy.is_empty() {
        return Err(StrategyError::Empty);
    }
    let mut bank = vec![Bank::Near; times.len()];
    let mut elapsed = 0u64;
    for (step, group) in crossing.strategy.iter().enumerate() {
        let (from, to) = if step % 2 == 0 {
            (Bank::Near, Bank::Far)
        } else {
            (Bank::Far, Bank::Near)
        };
        if group.is_empty() {
            return Err(StrategyError::EmptyGroup { step });
        }
        if group.len() > 2 {
            return Err(StrategyError::Overloaded {
                step,
                size: group.len(),
            });
        }
        let mut slowest = 0u32;
        for &person in group {
            let side = *bank
                .get(person)
                .ok_or(StrategyError::UnknownPerson { step, person })?;
            if side != from {
                return Err(StrategyError::WrongSide { step, person, side });
            }
            bank[person] = to;
            slowest = slowest.max(times[person]);
        }
        elapsed += u64::from(slowest);
    }
    if let Some(person) = bank.iter().position(|b| *b == Bank::Near) {
        return Err(StrategyError::Stranded { person });
    }
    if elapsed != crossing.total {
        return Err(StrategyError::Total {
            reported: crossing.total,
            actual: elapsed,
        });
    }
    Ok(())
}
