//! Replaces the tournaments collection with a fixed set of sample records.

use chrono::{Duration, Utc};
use mongodb::bson::doc;
use service_core::observability::init_tracing;
use tournament_service::config::TournamentConfig;
use tournament_service::models::{Tournament, TournamentStatus};
use tournament_service::services::MongoDb;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = TournamentConfig::load()
        .map_err(|e| std::io::Error::other(format!("Configuration error: {}", e)))?;

    init_tracing("tournament-seed", &config.common.log_level);

    let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
        .await
        .map_err(|e| std::io::Error::other(format!("Database connection error: {}", e)))?;
    db.initialize_indexes()
        .await
        .map_err(|e| std::io::Error::other(format!("Database initialization error: {}", e)))?;

    db.tournaments()
        .delete_many(doc! {}, None)
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to clear tournaments: {}", e)))?;
    tracing::info!("Cleared existing tournaments");

    let samples = sample_tournaments();
    db.tournaments()
        .insert_many(&samples, None)
        .await
        .map_err(|e| std::io::Error::other(format!("Failed to insert samples: {}", e)))?;

    tracing::info!(count = samples.len(), "Sample tournaments seeded");
    for tournament in &samples {
        tracing::info!(
            name = %tournament.name,
            sport = %tournament.sport,
            entry_fee = %tournament.entry_fee,
            prize_pool = %tournament.prize_pool,
            "Seeded tournament"
        );
    }

    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn sample(
    tournament_id: &str,
    name: &str,
    sport: &str,
    entry_fee: &str,
    prize_pool: &str,
    max_participants: u32,
    contract_address: &str,
    creator_address: &str,
    days_from_now: i64,
) -> Tournament {
    let now = Utc::now();
    Tournament {
        id: None,
        tournament_id: tournament_id.to_string(),
        name: name.to_string(),
        sport: sport.to_string(),
        entry_fee: entry_fee.to_string(),
        prize_pool: prize_pool.to_string(),
        status: TournamentStatus::Active,
        participants: 0,
        max_participants,
        contract_address: contract_address.to_string(),
        creator_address: creator_address.to_string(),
        end_time: now + Duration::days(days_from_now),
        created_at: now,
        updated_at: now,
    }
}

fn sample_tournaments() -> Vec<Tournament> {
    vec![
        sample(
            "tournament-1",
            "Cricket World Cup 2024",
            "cricket",
            "0.01",
            "0.1",
            100,
            "0x1234567890123456789012345678901234567890",
            "0xabcdef1234567890abcdef1234567890abcdef12",
            7,
        ),
        sample(
            "tournament-2",
            "Premier League Fantasy",
            "football",
            "0.02",
            "0.2",
            50,
            "0x2345678901234567890123456789012345678901",
            "0xbcdef1234567890abcdef1234567890abcdef123",
            5,
        ),
        sample(
            "tournament-3",
            "Tennis Grand Slam",
            "tennis",
            "0.005",
            "0.05",
            200,
            "0x3456789012345678901234567890123456789012",
            "0xcdef1234567890abcdef1234567890abcdef1234",
            3,
        ),
        sample(
            "tournament-4",
            "Basketball Championship",
            "basketball",
            "0.015",
            "0.15",
            80,
            "0x4567890123456789012345678901234567890123",
            "0xdef1234567890abcdef1234567890abcdef12345",
            10,
        ),
    ]
}
