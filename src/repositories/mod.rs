pub mod memory;
pub mod mysql;
pub mod songs;
