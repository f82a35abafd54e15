pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use config::Config;
pub use database::Database;
pub use database::repositories::{PlayerRepository, TeamRepository};
pub use error::AppError;

use actix_web::web;

use database::{PLAYER_COLLECTION, TEAM_COLLECTION};

/// Shared data handed to every worker.
#[derive(Clone)]
pub struct AppData {
    pub database: web::Data<Database>,
    pub teams: web::Data<TeamRepository>,
    pub players: web::Data<PlayerRepository>,
}

impl AppData {
    pub fn new(database: Database) -> Self {
        let teams = TeamRepository::new(database.collection(TEAM_COLLECTION));
        let players = PlayerRepository::new(database.collection(PLAYER_COLLECTION));

        Self {
            database: web::Data::new(database),
            teams: web::Data::new(teams),
            players: web::Data::new(players),
        }
    }

    pub fn register(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.database.clone())
            .app_data(self.teams.clone())
            .app_data(self.players.clone());
    }
}
