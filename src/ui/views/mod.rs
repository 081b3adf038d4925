pub mod quiz;
pub mod scoreboard;
