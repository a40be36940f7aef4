pub mod leaderboard;
pub mod purchase;
pub mod report;
pub mod score;
