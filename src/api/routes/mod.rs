pub mod difficulty;
pub mod health;
pub mod ratings;
pub mod songs;
