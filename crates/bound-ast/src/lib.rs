//! Predicates whose column references have been resolved against a dataset,
//! and their evaluation under three-valued logic.
mod expr;
mod truth;

pub use {expr::*, truth::Truth};
