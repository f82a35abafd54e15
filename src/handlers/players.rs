use actix_web::{HttpResponse, Result, web};

use crate::{
    database::{
        models::{Player, PlayerInput, Team, parse_record_id},
        repositories::{LIST_LIMIT, PlayerRepository, TeamRepository},
    },
    error::AppError,
    handlers::shared::{ApiResponse, InsertResult},
};

fn player_not_found() -> AppError {
    AppError::NotFound("Player with specified ID not found!".to_string())
}

async fn find_player(repo: &PlayerRepository, raw_id: &str) -> Result<Player, AppError> {
    let Some(id) = parse_record_id(raw_id) else {
        log::warn!("Player id {:?} is not a valid identifier", raw_id);
        return Err(player_not_found());
    };

    repo.find_by_id(&id).await?.ok_or_else(|| {
        log::warn!("Player {} not found", id);
        player_not_found()
    })
}

/// Resolves a player's team reference. Any failure yields `None`.
async fn resolve_team(repo: &TeamRepository, team_id: &str) -> Option<Team> {
    let id = parse_record_id(team_id)?;

    match repo.find_by_id(&id).await {
        Ok(team) => team,
        Err(err) => {
            log::warn!("Could not resolve team {}: {}", team_id, err);
            None
        }
    }
}

/// No check is made that `team_id` names an existing team. A `team_id` that parses
/// as an identifier is stored in normalised form so team rosters find it.
pub async fn create_player(
    repo: web::Data<PlayerRepository>,
    input: web::Json<PlayerInput>,
) -> Result<HttpResponse> {
    let input = input.into_inner();
    input.validate()?;

    let team_id = parse_record_id(&input.team_id).unwrap_or(input.team_id);
    let player = Player::new(input.name, team_id);
    repo.create_player(&player).await?;
    log::info!("Player {} created for team {}", player.id, player.team_id);

    Ok(ApiResponse::created(
        InsertResult {
            inserted_id: player.id,
        },
        "Player created successfully",
    ))
}

pub async fn get_player(
    repo: web::Data<PlayerRepository>,
    team_repo: web::Data<TeamRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let player = find_player(&repo, &path.into_inner()).await?;
    let team = resolve_team(&team_repo, &player.team_id).await;

    Ok(ApiResponse::ok(
        player.with_team(team),
        "Player retrieved successfully",
    ))
}

pub async fn update_player(
    repo: web::Data<PlayerRepository>,
    path: web::Path<String>,
    input: web::Json<PlayerInput>,
) -> Result<HttpResponse> {
    let raw_id = path.into_inner();
    let input = input.into_inner();
    input.validate()?;

    if let Some(id) = parse_record_id(&raw_id) {
        repo.update_name(&id, &input.name).await?;
    }

    let player = find_player(&repo, &raw_id).await?;
    log::info!("Player {} updated", player.id);

    Ok(ApiResponse::ok(player, "Player updated successfully"))
}

pub async fn delete_player(
    repo: web::Data<PlayerRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let raw_id = path.into_inner();
    let id = parse_record_id(&raw_id).ok_or_else(player_not_found)?;

    if !repo.delete_player(&id).await? {
        log::warn!("Player {} not found for deletion", id);
        return Err(player_not_found().into());
    }

    log::info!("Player {} deleted", id);
    Ok(HttpResponse::NoContent().finish())
}

pub async fn get_players(repo: web::Data<PlayerRepository>) -> Result<HttpResponse> {
    let players = repo.list_players(LIST_LIMIT).await?;

    Ok(ApiResponse::ok(players, "Players retrieved successfully"))
}
