use crate::models::{Participant, Tournament, TournamentStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Creation payload. Required fields are `Option` so that missing values can
/// be reported as a 400 with a field list rather than a deserialization error;
/// `validator` covers format and range constraints on whatever was sent.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTournamentRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,

    #[validate(length(min = 1, message = "sport must not be empty"))]
    pub sport: Option<String>,

    #[validate(length(min = 1, message = "entry_fee must not be empty"))]
    pub entry_fee: Option<String>,

    #[validate(length(min = 1, message = "prize_pool must not be empty"))]
    pub prize_pool: Option<String>,

    #[validate(length(min = 1, message = "creator_address must not be empty"))]
    pub creator_address: Option<String>,

    pub end_time: Option<DateTime<Utc>>,

    pub status: Option<TournamentStatus>,

    pub participants: Option<u32>,

    #[validate(range(min = 2, max = 10000, message = "max_participants out of range"))]
    pub max_participants: Option<u32>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct JoinTournamentRequest {
    #[validate(length(min = 1, message = "user_address must not be empty"))]
    pub user_address: Option<String>,

    #[validate(length(min = 1, message = "amount must not be empty"))]
    pub amount: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: TournamentStatus,
}

#[derive(Debug, Deserialize)]
pub struct TournamentListParams {
    pub sport: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TournamentResponse {
    pub tournament_id: String,
    pub name: String,
    pub sport: String,
    pub entry_fee: String,
    pub prize_pool: String,
    pub status: TournamentStatus,
    pub participants: u32,
    pub max_participants: u32,
    pub contract_address: String,
    pub creator_address: String,
    pub end_time: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Tournament> for TournamentResponse {
    fn from(t: Tournament) -> Self {
        Self {
            tournament_id: t.tournament_id,
            name: t.name,
            sport: t.sport,
            entry_fee: t.entry_fee,
            prize_pool: t.prize_pool,
            status: t.status,
            participants: t.participants,
            max_participants: t.max_participants,
            contract_address: t.contract_address,
            creator_address: t.creator_address,
            end_time: t.end_time.to_rfc3339(),
            created_at: t.created_at.to_rfc3339(),
            updated_at: t.updated_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TournamentListResponse {
    pub success: bool,
    pub tournaments: Vec<TournamentResponse>,
}

#[derive(Debug, Serialize)]
pub struct TournamentDetailResponse {
    pub success: bool,
    pub tournament: TournamentResponse,
}

/// Mock contract coordinates echoed back to the caller.
#[derive(Debug, Serialize)]
pub struct BlockchainInfo {
    pub contract_address: String,
    pub transaction_hash: String,
}

#[derive(Debug, Serialize)]
pub struct CreateTournamentResponse {
    pub success: bool,
    pub tournament: TournamentResponse,
    pub message: String,
    pub blockchain: BlockchainInfo,
}

#[derive(Debug, Serialize)]
pub struct JoinTournamentResponse {
    pub success: bool,
    pub message: String,
    pub tournament: TournamentResponse,
    pub blockchain: BlockchainInfo,
}

#[derive(Debug, Serialize)]
pub struct StatusUpdateResponse {
    pub success: bool,
    pub tournament: TournamentResponse,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ParticipantResponse {
    pub tournament_id: String,
    pub user_address: String,
    pub amount_paid: String,
    pub transaction_hash: String,
    pub joined_at: String,
}

impl From<Participant> for ParticipantResponse {
    fn from(p: Participant) -> Self {
        Self {
            tournament_id: p.tournament_id,
            user_address: p.user_address,
            amount_paid: p.amount_paid,
            transaction_hash: p.transaction_hash,
            joined_at: p.joined_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ParticipantListResponse {
    pub success: bool,
    pub participants: Vec<ParticipantResponse>,
}
