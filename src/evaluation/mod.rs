pub mod parameters;
mod value_eval;

pub use value_eval::{greedy_eval, static_eval, value_features};
