pub mod health;
pub mod players;
pub mod shared;
pub mod teams;
