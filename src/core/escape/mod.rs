pub mod budget;
pub mod evaluator;
