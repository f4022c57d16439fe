#[cfg(test)]
use serde::Serialize;

use std::iter;

use crate::state::{State, StateId};

/// A Thompson-style automaton fragment.
///
/// Every `Nfa` owns its whole state graph. `entry` is where matching starts and
/// `exit` is the single accepting state of the fragment at the moment it is
/// returned. The combinators below take their operands by value: the states of
/// a consumed fragment are moved into the result and get rewired there (exit
/// flags cleared, epsilon edges added), so a fragment can never be observed
/// after it has been embedded into a larger one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(test, derive(Serialize))]
pub struct Nfa {
    states: Vec<State>,
    entry: StateId,
    exit: StateId,
}

impl Nfa {
    fn add_state(&mut self) -> StateId {
        self.states.push(State::new());
        StateId::new(self.states.len() - 1)
    }

    fn state_mut(&mut self, id: StateId) -> &mut State {
        &mut self.states[id.index()]
    }

    fn new() -> Self {
        let mut exit = State::new();
        exit.accepting = true;
        Nfa {
            states: vec![State::new(), exit],
            entry: StateId::new(0),
            exit: StateId::new(1),
        }
    }

    /// Appends the states of `other` after our own, returning its entry and
    /// exit translated into our index space.
    fn absorb(&mut self, other: Nfa) -> (StateId, StateId) {
        let offset = self.states.len();
        self.states
            .extend(other.states.into_iter().map(|s| s.shifted(offset)));
        (other.entry.offset(offset), other.exit.offset(offset))
    }

    /// Matches exactly the one symbol `c`.
    pub fn from_char(c: char) -> Self {
        let mut nfa = Nfa::new();
        let exit = nfa.exit;
        nfa.state_mut(nfa.entry).add_symbol_edge(c, exit);
        nfa
    }

    /// Matches only the empty input.
    pub fn from_epsilon() -> Self {
        let mut nfa = Nfa::new();
        let exit = nfa.exit;
        nfa.state_mut(nfa.entry).add_epsilon_edge(exit);
        nfa
    }

    /// Matches exactly the symbols of `s` in order, followed by an empty
    /// fragment. The empty string gives [`Nfa::from_epsilon`].
    pub fn from_literal(s: &str) -> Self {
        Nfa::sequence(
            s.chars()
                .map(Nfa::from_char)
                .chain(iter::once(Nfa::from_epsilon())),
        )
    }

    /// Matches any single symbol from `symbols`.
    pub fn from_any_of(symbols: &str) -> Self {
        Nfa::choice(symbols.chars().map(Nfa::from_char))
    }

    /// `self` followed by `other`.
    pub fn concatenate(mut self, other: Nfa) -> Self {
        let first_exit = self.exit;
        let (second_entry, second_exit) = self.absorb(other);

        self.state_mut(first_exit).accepting = false;
        self.state_mut(second_exit).accepting = true;

        // connect two machines using the epsilon
        self.state_mut(first_exit).add_epsilon_edge(second_entry);

        self.exit = second_exit;
        self
    }

    /// Either `self` or `other`.
    pub fn alternate(mut self, other: Nfa) -> Self {
        let (first_entry, first_exit) = (self.entry, self.exit);
        let (second_entry, second_exit) = self.absorb(other);

        self.state_mut(first_exit).accepting = false;
        self.state_mut(second_exit).accepting = false;

        let entry = self.add_state();
        let exit = self.add_state();
        self.state_mut(exit).accepting = true;

        self.state_mut(entry).add_epsilon_edge(first_entry);
        self.state_mut(entry).add_epsilon_edge(second_entry);
        self.state_mut(first_exit).add_epsilon_edge(exit);
        self.state_mut(second_exit).add_epsilon_edge(exit);

        self.entry = entry;
        self.exit = exit;
        self
    }

    /// Zero or more repetitions. Rewires the fragment in place: this is the
    /// only combinator that introduces cycles.
    pub fn kleene_star(mut self) -> Self {
        let (entry, exit) = (self.entry, self.exit);
        self.state_mut(exit).add_epsilon_edge(entry);
        self.state_mut(entry).add_epsilon_edge(exit);
        self
    }

    /// One or more repetitions.
    pub fn one_or_more(mut self) -> Self {
        let (entry, exit) = (self.entry, self.exit);
        self.state_mut(exit).add_epsilon_edge(entry);
        self
    }

    /// Zero or one occurrence.
    pub fn zero_or_one(self) -> Self {
        self.alternate(Nfa::from_epsilon())
    }

    /// Left fold of [`Nfa::concatenate`]; no fragments at all gives
    /// [`Nfa::from_epsilon`].
    pub fn sequence(fragments: impl IntoIterator<Item = Nfa>) -> Self {
        let mut fragments = fragments.into_iter();
        match fragments.next() {
            None => Nfa::from_epsilon(),
            Some(first) => fragments.fold(first, Nfa::concatenate),
        }
    }

    /// Left fold of [`Nfa::alternate`]; no fragments at all gives
    /// [`Nfa::from_epsilon`].
    pub fn choice(fragments: impl IntoIterator<Item = Nfa>) -> Self {
        let mut fragments = fragments.into_iter();
        match fragments.next() {
            None => Nfa::from_epsilon(),
            Some(first) => fragments.fold(first, Nfa::alternate),
        }
    }

    pub fn entry(&self) -> StateId {
        self.entry
    }

    pub fn exit(&self) -> StateId {
        self.exit
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn state(&self, id: StateId) -> Option<&State> {
        self.states.get(id.index())
    }

    // ids handed out by this arena are always in bounds
    pub(crate) fn state_at(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }
}
