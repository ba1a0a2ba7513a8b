pub mod common;
pub mod game;
pub mod health;
pub mod query;
