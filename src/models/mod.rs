pub mod difficulty;
pub mod page;
pub mod pool;
pub mod rating;
pub mod song;
