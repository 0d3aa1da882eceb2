pub mod leaderboard;
pub mod schedule;
