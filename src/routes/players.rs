use actix_web::web;

use crate::handlers::players;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/player", web::post().to(players::create_player))
        .route("/player/{id}", web::get().to(players::get_player))
        .route("/player/{id}", web::put().to(players::update_player))
        .route("/player/{id}", web::delete().to(players::delete_player))
        .route("/players", web::get().to(players::get_players));
}
