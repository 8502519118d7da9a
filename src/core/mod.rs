pub mod config;
pub mod dragdrop;
pub mod grid;
pub mod keys;
pub mod reset;
pub mod session;
pub mod shuffle;
pub mod sketch;
