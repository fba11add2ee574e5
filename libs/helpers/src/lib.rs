pub mod check;
pub mod scores;
