use crate::dtos::{
    BlockchainInfo, CreateTournamentRequest, CreateTournamentResponse, JoinTournamentRequest,
    JoinTournamentResponse, ParticipantListResponse, StatusUpdateResponse,
    TournamentDetailResponse, TournamentListParams, TournamentListResponse, UpdateStatusRequest,
};
use crate::startup::AppState;
use anyhow::anyhow;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;
use validator::Validate;

pub async fn list_tournaments(
    State(state): State<AppState>,
    Query(params): Query<TournamentListParams>,
) -> Result<impl IntoResponse, AppError> {
    let tournaments = state.tournaments.list(params.sport.as_deref()).await?;

    Ok(Json(TournamentListResponse {
        success: true,
        tournaments: tournaments.into_iter().map(Into::into).collect(),
    }))
}

pub async fn get_tournament(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let tournament = state
        .tournaments
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow!("Tournament not found")))?;

    Ok(Json(TournamentDetailResponse {
        success: true,
        tournament: tournament.into(),
    }))
}

pub async fn create_tournament(
    State(state): State<AppState>,
    Json(payload): Json<CreateTournamentRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let (tournament, contract) = state.tournaments.create(payload).await?;
    let blockchain = BlockchainInfo {
        contract_address: contract.contract_address,
        transaction_hash: contract.transaction_hash,
    };

    Ok((
        StatusCode::CREATED,
        Json(CreateTournamentResponse {
            success: true,
            tournament: tournament.into(),
            message: "Tournament created successfully and smart contract deployed".to_string(),
            blockchain,
        }),
    ))
}

pub async fn join_tournament(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<JoinTournamentRequest>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let (tournament, transaction_hash) = state.tournaments.join(&id, payload).await?;
    let blockchain = BlockchainInfo {
        contract_address: tournament.contract_address.clone(),
        transaction_hash,
    };

    Ok(Json(JoinTournamentResponse {
        success: true,
        message: "Successfully joined tournament".to_string(),
        tournament: tournament.into(),
        blockchain,
    }))
}

pub async fn list_participants(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let participants = state.tournaments.participants(&id).await?;

    Ok(Json(ParticipantListResponse {
        success: true,
        participants: participants.into_iter().map(Into::into).collect(),
    }))
}

pub async fn update_tournament_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let tournament = state.tournaments.update_status(&id, payload.status).await?;

    Ok(Json(StatusUpdateResponse {
        success: true,
        tournament: tournament.into(),
        message: "Tournament status updated".to_string(),
    }))
}
