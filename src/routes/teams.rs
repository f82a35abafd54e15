use actix_web::web;

use crate::handlers::teams;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/team", web::post().to(teams::create_team))
        .route("/team/{id}", web::get().to(teams::get_team))
        .route("/team/{id}/players", web::get().to(teams::get_team_with_players))
        .route("/team/{id}", web::put().to(teams::update_team))
        .route("/team/{id}", web::delete().to(teams::delete_team))
        .route("/teams", web::get().to(teams::get_teams));
}
