use crate::dtos::{CreateTournamentRequest, JoinTournamentRequest};
use crate::models::{Participant, Tournament, TournamentStatus, DEFAULT_MAX_PARTICIPANTS};
use crate::services::chain::{ChainProvider, DeployedContract, TournamentDeployment};
use crate::services::database::MongoDb;
use crate::services::metrics;
use anyhow::anyhow;
use chrono::Utc;
use futures::stream::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{FindOneAndUpdateOptions, FindOptions, ReturnDocument};
use service_core::error::AppError;
use std::sync::Arc;

/// Tournament CRUD and capacity bookkeeping over the document store.
///
/// Every operation is an independent single-document read-modify-write; there
/// is no cross-request coordination on the join path.
#[derive(Clone)]
pub struct TournamentService {
    db: MongoDb,
    chain: Arc<dyn ChainProvider>,
}

impl TournamentService {
    pub fn new(db: MongoDb, chain: Arc<dyn ChainProvider>) -> Self {
        Self { db, chain }
    }

    pub async fn list(&self, sport: Option<&str>) -> Result<Vec<Tournament>, AppError> {
        let filter = match sport {
            Some(s) => doc! { "sport": s },
            None => doc! {},
        };
        let options = FindOptions::builder()
            .sort(doc! { "created_at": -1 })
            .build();

        let mut cursor = self.db.tournaments().find(filter, options).await?;
        let mut tournaments = Vec::new();
        while let Some(tournament) = cursor.try_next().await? {
            tournaments.push(tournament);
        }
        Ok(tournaments)
    }

    pub async fn get(&self, tournament_id: &str) -> Result<Option<Tournament>, AppError> {
        let tournament = self
            .db
            .tournaments()
            .find_one(doc! { "tournament_id": tournament_id }, None)
            .await?;
        Ok(tournament)
    }

    pub async fn create(
        &self,
        payload: CreateTournamentRequest,
    ) -> Result<(Tournament, DeployedContract), AppError> {
        let mut missing = Vec::new();
        let name = require(payload.name, "name", &mut missing);
        let sport = require(payload.sport, "sport", &mut missing);
        let entry_fee = require(payload.entry_fee, "entry_fee", &mut missing);
        let prize_pool = require(payload.prize_pool, "prize_pool", &mut missing);
        let creator_address = require(payload.creator_address, "creator_address", &mut missing);
        let end_time = match payload.end_time {
            Some(t) => t,
            None => {
                missing.push("end_time");
                Utc::now()
            }
        };
        if !missing.is_empty() {
            return Err(AppError::BadRequest(anyhow!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let max_participants = payload.max_participants.unwrap_or(DEFAULT_MAX_PARTICIPANTS);
        if let Some(initial) = payload.participants {
            if initial > max_participants {
                return Err(AppError::BadRequest(anyhow!(
                    "participants cannot exceed max_participants"
                )));
            }
        }

        let deployment = TournamentDeployment {
            name: name.clone(),
            sport: sport.clone(),
            entry_fee: entry_fee.clone(),
            prize_pool: prize_pool.clone(),
            max_participants,
            creator_address: creator_address.clone(),
        };
        let contract = self
            .chain
            .deploy_tournament(&deployment)
            .await
            .map_err(|e| AppError::InternalError(anyhow!("Contract deployment failed: {}", e)))?;

        let mut tournament = Tournament::new(
            name,
            sport,
            entry_fee,
            prize_pool,
            max_participants,
            contract.contract_address.clone(),
            creator_address,
            end_time,
        );
        if let Some(status) = payload.status {
            tournament.status = status;
        }
        if let Some(initial) = payload.participants {
            tournament.participants = initial;
        }

        self.db.tournaments().insert_one(&tournament, None).await?;

        metrics::record_tournament_created(&tournament.sport);
        tracing::info!(
            tournament_id = %tournament.tournament_id,
            contract_address = %contract.contract_address,
            transaction_hash = %contract.transaction_hash,
            "Tournament created"
        );

        Ok((tournament, contract))
    }

    pub async fn join(
        &self,
        tournament_id: &str,
        payload: JoinTournamentRequest,
    ) -> Result<(Tournament, String), AppError> {
        let mut missing = Vec::new();
        let user_address = require(payload.user_address, "user_address", &mut missing);
        let amount = require(payload.amount, "amount", &mut missing);
        if !missing.is_empty() {
            return Err(AppError::BadRequest(anyhow!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let filter = doc! { "tournament_id": tournament_id };
        let mut tournament = self
            .db
            .tournaments()
            .find_one(filter.clone(), None)
            .await?
            .ok_or_else(|| AppError::NotFound(anyhow!("Tournament not found")))?;

        if tournament.status != TournamentStatus::Active {
            return Err(AppError::BadRequest(anyhow!("Tournament is not active")));
        }
        if tournament.is_full() {
            return Err(AppError::BadRequest(anyhow!("Tournament is full")));
        }

        let transaction_hash = self
            .chain
            .join_tournament(&tournament.contract_address, &user_address, &amount)
            .await
            .map_err(|e| AppError::InternalError(anyhow!("Chain join failed: {}", e)))?;

        // The unique (tournament_id, user_address) index turns a repeat join
        // into a conflict before the participant count moves.
        let participant = Participant::new(
            tournament_id.to_string(),
            user_address.clone(),
            amount,
            transaction_hash.clone(),
        );
        self.db
            .participants()
            .insert_one(&participant, None)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    AppError::Conflict(anyhow!("Address has already joined this tournament"))
                } else {
                    AppError::from(e)
                }
            })?;

        tournament.participants += 1;
        if tournament.is_full() {
            tournament.status = TournamentStatus::Inactive;
        }
        tournament.updated_at = Utc::now();

        let update = doc! {
            "$set": {
                "participants": tournament.participants,
                "status": status_bson(&tournament.status)?,
                "updated_at": mongodb::bson::DateTime::from_chrono(tournament.updated_at),
            }
        };
        self.db.tournaments().update_one(filter, update, None).await?;

        metrics::record_tournament_join(&tournament.sport);
        tracing::info!(
            tournament_id = %tournament_id,
            user_address = %user_address,
            transaction_hash = %transaction_hash,
            participants = tournament.participants,
            "User joined tournament"
        );

        Ok((tournament, transaction_hash))
    }

    pub async fn participants(&self, tournament_id: &str) -> Result<Vec<Participant>, AppError> {
        if self.get(tournament_id).await?.is_none() {
            return Err(AppError::NotFound(anyhow!("Tournament not found")));
        }

        let options = FindOptions::builder().sort(doc! { "joined_at": 1 }).build();
        let mut cursor = self
            .db
            .participants()
            .find(doc! { "tournament_id": tournament_id }, options)
            .await?;

        let mut participants = Vec::new();
        while let Some(participant) = cursor.try_next().await? {
            participants.push(participant);
        }
        Ok(participants)
    }

    pub async fn update_status(
        &self,
        tournament_id: &str,
        status: TournamentStatus,
    ) -> Result<Tournament, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let update = doc! {
            "$set": {
                "status": status_bson(&status)?,
                "updated_at": mongodb::bson::DateTime::now(),
            }
        };

        let updated = self
            .db
            .tournaments()
            .find_one_and_update(doc! { "tournament_id": tournament_id }, update, options)
            .await?
            .ok_or_else(|| AppError::NotFound(anyhow!("Tournament not found")))?;

        tracing::info!(
            tournament_id = %tournament_id,
            status = %updated.status,
            "Tournament status updated"
        );
        Ok(updated)
    }
}

fn require(
    value: Option<String>,
    field: &'static str,
    missing: &mut Vec<&'static str>,
) -> String {
    match value {
        Some(v) => v,
        None => {
            missing.push(field);
            String::new()
        }
    }
}

fn status_bson(status: &TournamentStatus) -> Result<mongodb::bson::Bson, AppError> {
    mongodb::bson::to_bson(status)
        .map_err(|e| AppError::InternalError(anyhow!("Failed to serialize status: {}", e)))
}

fn is_duplicate_key_error(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_err)) if write_err.code == 11000
    )
}
