#[cfg(test)]
use serde::Serialize;
use std::collections::BTreeMap;

/// Index of a state inside the arena of the `Nfa` that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(test, derive(Serialize))]
pub struct StateId(usize);

impl StateId {
    pub(crate) fn new(index: usize) -> Self {
        StateId(index)
    }

    pub fn index(self) -> usize {
        self.0
    }

    pub(crate) fn offset(self, offset: usize) -> Self {
        StateId(self.0 + offset)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(test, derive(Serialize))]
pub struct State {
    pub(crate) accepting: bool,
    pub(crate) symbol_edges: BTreeMap<char, Vec<StateId>>,
    pub(crate) epsilon_edges: Vec<StateId>,
}

impl State {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_symbol_edge(&mut self, symbol: char, target: StateId) {
        self.symbol_edges.entry(symbol).or_default().push(target);
    }

    pub(crate) fn add_epsilon_edge(&mut self, target: StateId) {
        self.epsilon_edges.push(target);
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    /// Successors reachable by consuming `symbol`, in insertion order.
    pub fn on_symbol(&self, symbol: char) -> &[StateId] {
        self.symbol_edges
            .get(&symbol)
            .map_or(&[], |targets| targets.as_slice())
    }

    pub fn on_epsilon(&self) -> &[StateId] {
        &self.epsilon_edges
    }

    // used when another arena is appended after this state's own arena
    pub(crate) fn shifted(mut self, offset: usize) -> Self {
        for targets in self.symbol_edges.values_mut() {
            for target in targets.iter_mut() {
                *target = target.offset(offset);
            }
        }
        for target in self.epsilon_edges.iter_mut() {
            *target = target.offset(offset);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_empty_and_not_accepting() {
        // when
        let state = State::new();

        // then
        assert!(!state.is_accepting());
        assert!(state.on_epsilon().is_empty());
        assert!(state.on_symbol('a').is_empty());
    }

    #[test]
    fn edges_keep_insertion_order() {
        // given
        let mut state = State::new();

        // when
        state.add_symbol_edge('a', StateId::new(3));
        state.add_symbol_edge('b', StateId::new(1));
        state.add_symbol_edge('a', StateId::new(2));
        state.add_epsilon_edge(StateId::new(5));
        state.add_epsilon_edge(StateId::new(4));

        // then
        assert_eq!(state.on_symbol('a'), &[StateId::new(3), StateId::new(2)]);
        assert_eq!(state.on_symbol('b'), &[StateId::new(1)]);
        assert_eq!(state.on_epsilon(), &[StateId::new(5), StateId::new(4)]);
    }

    #[test]
    fn shifted_moves_every_target() {
        // given
        let mut state = State::new();
        state.add_symbol_edge('x', StateId::new(0));
        state.add_epsilon_edge(StateId::new(1));

        // when
        let state = state.shifted(10);

        // then
        assert_eq!(state.on_symbol('x'), &[StateId::new(10)]);
        assert_eq!(state.on_epsilon(), &[StateId::new(11)]);
    }
}
