pub mod emissions_repository;
pub mod leaderboard_repository;
pub mod purchase_repository;
