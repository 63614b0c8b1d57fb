pub mod difficulty;
pub mod ratings;
pub mod songs;
