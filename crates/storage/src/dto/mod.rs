pub mod common;
pub mod leaderboard;
pub mod results;
pub mod schedule;
