use crate::models::{Participant, Tournament};
use mongodb::{
    bson::doc, options::IndexOptions, Client as MongoClient, Collection, Database, IndexModel,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for tournament-service");

        let tournaments = self.tournaments();

        // Unique lookup key for every tournament route
        let tournament_id_index = IndexModel::builder()
            .keys(doc! { "tournament_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("tournament_id_unique".to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        // Compound index on (sport, status) for filtered listings
        let sport_status_index = IndexModel::builder()
            .keys(doc! { "sport": 1, "status": 1 })
            .options(
                IndexOptions::builder()
                    .name("sport_status_lookup".to_string())
                    .build(),
            )
            .build();

        tournaments
            .create_indexes([tournament_id_index, sport_status_index], None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create indexes on tournaments collection: {}", e);
                AppError::from(e)
            })?;
        tracing::info!("Created indexes on tournaments.(tournament_id) and (sport, status)");

        // One join per address per tournament
        let participant_index = IndexModel::builder()
            .keys(doc! { "tournament_id": 1, "user_address": 1 })
            .options(
                IndexOptions::builder()
                    .name("tournament_user_unique".to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        self.participants()
            .create_index(participant_index, None)
            .await
            .map_err(|e| {
                tracing::error!(
                    "Failed to create unique index on participants collection: {}",
                    e
                );
                AppError::from(e)
            })?;
        tracing::info!("Created unique index on participants.(tournament_id, user_address)");

        Ok(())
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn tournaments(&self) -> Collection<Tournament> {
        self.db.collection("tournaments")
    }

    pub fn participants(&self) -> Collection<Participant> {
        self.db.collection("participants")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
