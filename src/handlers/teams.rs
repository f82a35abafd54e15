use actix_web::{HttpResponse, Result, web};

use crate::{
    database::{
        models::{Team, TeamInput, parse_record_id},
        repositories::{LIST_LIMIT, PlayerRepository, TeamRepository},
    },
    error::AppError,
    handlers::shared::{ApiResponse, InsertResult},
};

fn team_not_found() -> AppError {
    AppError::NotFound("Team with specified ID not found!".to_string())
}

/// Looks a team up by a raw path identifier.
async fn find_team(repo: &TeamRepository, raw_id: &str) -> Result<Team, AppError> {
    let Some(id) = parse_record_id(raw_id) else {
        log::warn!("Team id {:?} is not a valid identifier", raw_id);
        return Err(team_not_found());
    };

    repo.find_by_id(&id).await?.ok_or_else(|| {
        log::warn!("Team {} not found", id);
        team_not_found()
    })
}

pub async fn create_team(
    repo: web::Data<TeamRepository>,
    input: web::Json<TeamInput>,
) -> Result<HttpResponse> {
    let input = input.into_inner();
    input.validate()?;

    let team = Team::new(input.name);
    repo.create_team(&team).await?;
    log::info!("Team {} created", team.id);

    Ok(ApiResponse::created(
        InsertResult {
            inserted_id: team.id,
        },
        "Team created successfully",
    ))
}

pub async fn get_team(
    repo: web::Data<TeamRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let team = find_team(&repo, &path.into_inner()).await?;

    Ok(ApiResponse::ok(team, "Team retrieved successfully"))
}

pub async fn get_team_with_players(
    repo: web::Data<TeamRepository>,
    player_repo: web::Data<PlayerRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let team = find_team(&repo, &path.into_inner()).await?;
    let players = player_repo.find_by_team(&team.id).await?;

    Ok(ApiResponse::ok(
        team.with_players(players),
        "Team retrieved successfully",
    ))
}

/// Only the name changes. A missing team surfaces on the re-fetch, not the write.
pub async fn update_team(
    repo: web::Data<TeamRepository>,
    path: web::Path<String>,
    input: web::Json<TeamInput>,
) -> Result<HttpResponse> {
    let raw_id = path.into_inner();
    let input = input.into_inner();
    input.validate()?;

    if let Some(id) = parse_record_id(&raw_id) {
        repo.update_name(&id, &input.name).await?;
    }

    let team = find_team(&repo, &raw_id).await?;
    log::info!("Team {} updated", team.id);

    Ok(ApiResponse::ok(team, "Team updated successfully"))
}

/// Players referencing the team are left in place.
pub async fn delete_team(
    repo: web::Data<TeamRepository>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let raw_id = path.into_inner();
    let id = parse_record_id(&raw_id).ok_or_else(team_not_found)?;

    if !repo.delete_team(&id).await? {
        log::warn!("Team {} not found for deletion", id);
        return Err(team_not_found().into());
    }

    log::info!("Team {} deleted", id);
    Ok(HttpResponse::NoContent().finish())
}

pub async fn get_teams(repo: web::Data<TeamRepository>) -> Result<HttpResponse> {
    let teams = repo.list_teams(LIST_LIMIT).await?;

    Ok(ApiResponse::ok(teams, "Teams retrieved successfully"))
}
