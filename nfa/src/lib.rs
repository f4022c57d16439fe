//! Nondeterministic finite automata built from regular-expression combinators
//! and matched against whole inputs by backtracking.
//!
//! ```
//! use nfa::Nfa;
//!
//! let words = Nfa::sequence(vec![
//!     Nfa::from_literal("foo")
//!         .alternate(Nfa::from_literal("bar"))
//!         .kleene_star(),
//!     Nfa::from_epsilon(),
//! ]);
//!
//! assert!(words.accepts("foofoobarfoo"));
//! assert!(!words.accepts("foofoobarfooX"));
//! ```

mod matcher;
mod nfa;
mod state;

pub use crate::nfa::Nfa;
pub use state::{State, StateId};
