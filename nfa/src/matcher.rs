use std::collections::HashSet;

use crate::nfa::Nfa;
use crate::state::StateId;

/// A pending visit of `state` with `pos` symbols already consumed.
///
/// `guard` indexes the set of states reached through epsilon edges only since
/// the last consumed symbol. Frames on the work stack never have a smaller
/// guard than the frames below them.
struct Frame {
    state: StateId,
    pos: usize,
    guard: usize,
}

impl Nfa {
    /// Whether the whole of `s` is accepted, decoded as Unicode scalar values.
    pub fn accepts(&self, s: &str) -> bool {
        let symbols: Vec<char> = s.chars().collect();
        self.accepts_symbols(&symbols)
    }

    /// Whether the whole of `symbols` is accepted.
    ///
    /// Depth-first backtracking search: symbol edges are tried before epsilon
    /// edges, each in insertion order. Seeing a state again within one epsilon
    /// segment means an epsilon cycle and that branch fails. No memoization is
    /// done, so automata with heavy branching can take exponential time in the
    /// input length.
    pub fn accepts_symbols(&self, symbols: &[char]) -> bool {
        let mut guards: Vec<HashSet<StateId>> = vec![HashSet::new()];
        let mut pending = vec![Frame {
            state: self.entry(),
            pos: 0,
            guard: 0,
        }];

        while let Some(Frame { state: id, pos, guard }) = pending.pop() {
            // newer guards belong to branches that are already exhausted
            guards.truncate(guard + 1);
            if !guards[guard].insert(id) {
                continue;
            }
            let state = self.state_at(id);

            // pushed in reverse so that the first edge is popped first
            let on_epsilon = state.on_epsilon().iter().rev().map(|&next| Frame {
                state: next,
                pos,
                guard,
            });

            match symbols.get(pos) {
                None => {
                    if state.is_accepting() {
                        return true;
                    }
                    pending.extend(on_epsilon);
                }
                Some(&c) => {
                    pending.extend(on_epsilon);
                    // consuming a symbol starts a new epsilon segment
                    for &next in state.on_symbol(c).iter().rev() {
                        guards.push(HashSet::new());
                        pending.push(Frame {
                            state: next,
                            pos: pos + 1,
                            guard: guards.len() - 1,
                        });
                    }
                }
            }
        }
        false
    }
}
