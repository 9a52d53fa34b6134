//! Legal boat crossings between valid states

use super::State;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// What the boat carries during a crossing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cargo {
    Nothing,
    Wolf,
    Rabbit,
    Carrot,
}

impl Cargo {
    const ITEMS: [Cargo; 3] = [Cargo::Wolf, Cargo::Rabbit, Cargo::Carrot];
}

impl fmt::Display for Cargo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cargo::Nothing => "nothing",
            Cargo::Wolf => "wolf",
            Cargo::Rabbit => "rabbit",
            Cargo::Carrot => "carrot",
        };
        f.write_str(name)
    }
}

/// Work out the single crossing that turns `a` into `b`.
///
/// Returns `None` when no legal crossing exists: the boat stayed put, an item
/// moved against the boat, or more than one item moved.
pub fn crossing(a: &State, b: &State) -> Option<Cargo> {
    if a.boat == b.boat {
        return None;
    }

    let mut cargo = Cargo::Nothing;
    for ((before, after), item) in a.items().into_iter().zip(b.items()).zip(Cargo::ITEMS) {
        if before == after {
            continue;
        }
        if cargo != Cargo::Nothing || after != b.boat {
            return None;
        }
        cargo = item;
    }

    Some(cargo)
}

/// Whether a single legal crossing connects `a` to `b`
pub fn can_connect(a: &State, b: &State) -> bool {
    crossing(a, b).is_some()
}

/// A registered crossing. `from`/`to` record the direction it was first discovered in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    /// 1-based identifier in discovery order
    pub id: usize,
    pub from: State,
    pub to: State,
    pub cargo: Cargo,
}

impl Transition {
    /// Whether `state` is one of the two endpoints
    pub fn touches(&self, state: &State) -> bool {
        self.from == *state || self.to == *state
    }
}

/// Table of crossings keyed by ordered state pair.
///
/// Both directions of a crossing resolve to the same identifier.
#[derive(Debug, Default, Clone)]
pub struct TransitionTable {
    transitions: Vec<Transition>,
    lookup: HashMap<(State, State), usize>,
}

impl TransitionTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register every legal crossing between distinct states, visiting ordered pairs in list order
    pub fn build(states: &[State]) -> Self {
        let mut table = Self::new();

        for a in states {
            for b in states {
                if a == b {
                    continue;
                }
                if let Some(cargo) = crossing(a, b) {
                    table.register(*a, *b, cargo);
                }
            }
        }

        debug!(
            states = states.len(),
            transitions = table.len(),
            "Built transition table"
        );
        table
    }

    /// Register the crossing `a -> b` and return its identifier.
    ///
    /// If either direction is already known the existing identifier is reused.
    pub fn register(&mut self, a: State, b: State, cargo: Cargo) -> usize {
        let existing = self.id(&a, &b).or_else(|| self.id(&b, &a));
        if let Some(id) = existing {
            self.lookup.insert((a, b), id);
            return id;
        }

        let id = self.transitions.len() + 1;
        self.transitions.push(Transition { id, from: a, to: b, cargo });
        self.lookup.insert((a, b), id);
        id
    }

    /// Identifier of the crossing `a -> b`, if registered
    pub fn id(&self, a: &State, b: &State) -> Option<usize> {
        self.lookup.get(&(*a, *b)).copied()
    }

    /// Look up a transition by identifier
    pub fn get(&self, id: usize) -> Option<&Transition> {
        id.checked_sub(1).and_then(|index| self.transitions.get(index))
    }

    /// Number of distinct transitions
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Transitions in identifier order
    pub fn iter(&self) -> impl Iterator<Item = &Transition> {
        self.transitions.iter()
    }

    /// Identifiers of transitions that have `state` as an endpoint, in identifier order
    pub fn incident<'a>(&'a self, state: &'a State) -> impl Iterator<Item = usize> + 'a {
        self.transitions
            .iter()
            .filter(move |transition| transition.touches(state))
            .map(|transition| transition.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::enumerate_valid_states;
    use std::collections::HashSet;

    fn state(label: &str) -> State {
        let bits: Vec<bool> = label.chars().map(|c| c == '1').collect();
        State::new(bits[0], bits[1], bits[2], bits[3])
    }

    #[test]
    fn test_boat_must_move() {
        for i in 0..16 {
            for j in 0..16 {
                let a = State::from_index(i);
                let b = State::from_index(j);
                if a.boat == b.boat {
                    assert!(!can_connect(&a, &b), "{} -> {} kept the boat", a, b);
                }
            }
        }
    }

    #[test]
    fn test_at_most_one_item_carried() {
        for i in 0..16 {
            for j in 0..16 {
                let a = State::from_index(i);
                let b = State::from_index(j);
                let moved = a
                    .items()
                    .iter()
                    .zip(b.items().iter())
                    .filter(|(x, y)| x != y)
                    .count();
                if moved >= 2 {
                    assert!(!can_connect(&a, &b), "{} -> {} moved {} items", a, b, moved);
                }
            }
        }
    }

    #[test]
    fn test_crossing_cargo() {
        assert_eq!(crossing(&state("0000"), &state("0101")), Some(Cargo::Rabbit));
        assert_eq!(crossing(&state("0101"), &state("0100")), Some(Cargo::Nothing));
        assert_eq!(crossing(&state("0100"), &state("1101")), Some(Cargo::Wolf));
        assert_eq!(crossing(&state("0101"), &state("0000")), Some(Cargo::Rabbit));
        // Rabbit moving against the boat
        assert_eq!(crossing(&state("0100"), &state("0001")), None);
        // Two items at once
        assert_eq!(crossing(&state("0000"), &state("1101")), None);
    }

    #[test]
    fn test_transition_table_contents() {
        let states = enumerate_valid_states();
        let table = TransitionTable::build(&states);
        assert_eq!(table.len(), 10);

        let pairs: Vec<(usize, usize)> = table
            .iter()
            .map(|t| {
                let from = states.iter().position(|s| *s == t.from).unwrap() + 1;
                let to = states.iter().position(|s| *s == t.to).unwrap() + 1;
                (from, to)
            })
            .collect();
        assert_eq!(
            pairs,
            vec![(1, 6), (2, 7), (2, 8), (3, 6), (3, 7), (3, 9), (4, 8), (4, 9), (5, 8), (5, 10)]
        );

        let ids: Vec<usize> = table.iter().map(|t| t.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_one_id_per_unordered_pair() {
        let states = enumerate_valid_states();
        let table = TransitionTable::build(&states);

        let mut seen: HashSet<usize> = HashSet::new();
        for a in &states {
            for b in &states {
                if let Some(id) = table.id(a, b) {
                    assert_eq!(table.id(b, a), Some(id));
                    seen.insert(id);
                }
            }
        }
        assert_eq!(seen.len(), table.len());
    }

    #[test]
    fn test_register_is_idempotent() {
        let mut table = TransitionTable::new();
        let a = state("0000");
        let b = state("0101");

        let first = table.register(a, b, Cargo::Rabbit);
        let again = table.register(a, b, Cargo::Rabbit);
        let reverse = table.register(b, a, Cargo::Rabbit);

        assert_eq!(first, 1);
        assert_eq!(again, first);
        assert_eq!(reverse, first);
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(1).map(|t| t.from), Some(a));
        assert!(table.get(0).is_none());
    }

    #[test]
    fn test_incident_transitions() {
        let states = enumerate_valid_states();
        let table = TransitionTable::build(&states);

        let start: Vec<usize> = table.incident(&State::start()).collect();
        assert_eq!(start, vec![1]);

        // 0101 (rabbit and boat across) connects only to the start and to 0100
        let hub: Vec<usize> = table.incident(&states[5]).collect();
        assert_eq!(hub, vec![1, 4]);

        let goal: Vec<usize> = table.incident(&State::goal()).collect();
        assert_eq!(goal, vec![10]);
    }
}
