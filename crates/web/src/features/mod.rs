pub mod leaderboards;
pub mod results;
pub mod schedule;
