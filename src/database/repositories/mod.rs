pub mod player;
pub mod team;

// Re-export all repositories for easy importing
pub use player::PlayerRepository;
pub use team::TeamRepository;

/// Fixed page size of the listing endpoints.
pub const LIST_LIMIT: i64 = 20;
