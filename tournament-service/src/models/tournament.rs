use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_MAX_PARTICIPANTS: u32 = 100;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum TournamentStatus {
    Active,
    Inactive,
    Completed,
    Cancelled,
}

impl std::fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentStatus::Active => write!(f, "Active"),
            TournamentStatus::Inactive => write!(f, "Inactive"),
            TournamentStatus::Completed => write!(f, "Completed"),
            TournamentStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// A contest with an entry fee, a prize pool, and a participant capacity.
///
/// `entry_fee` and `prize_pool` are decimal ETH amounts kept as strings, as the
/// upstream wallet tooling sends them. `contract_address` comes from the chain
/// provider at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tournament {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
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
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub end_time: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Tournament {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        sport: String,
        entry_fee: String,
        prize_pool: String,
        max_participants: u32,
        contract_address: String,
        creator_address: String,
        end_time: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            tournament_id: Uuid::new_v4().to_string(),
            name,
            sport,
            entry_fee,
            prize_pool,
            status: TournamentStatus::Active,
            participants: 0,
            max_participants,
            contract_address,
            creator_address,
            end_time,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_full(&self) -> bool {
        self.participants >= self.max_participants
    }
}

/// One join record per `(tournament_id, user_address)` pair, enforced by a
/// unique index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub tournament_id: String,
    pub user_address: String,
    pub amount_paid: String,
    pub transaction_hash: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub joined_at: DateTime<Utc>,
}

impl Participant {
    pub fn new(
        tournament_id: String,
        user_address: String,
        amount_paid: String,
        transaction_hash: String,
    ) -> Self {
        Self {
            id: None,
            tournament_id,
            user_address,
            amount_paid,
            transaction_hash,
            joined_at: Utc::now(),
        }
    }
}
