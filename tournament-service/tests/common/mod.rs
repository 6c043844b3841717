use tournament_service::config::TournamentConfig;
use tournament_service::services::MongoDb;
use tournament_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        std::env::set_var("MONGODB_URI", "mongodb://localhost:27017");

        let db_name = format!("tournament_test_{}", Uuid::new_v4());

        let mut config = TournamentConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    pub async fn create_tournament(&self, body: &serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/api/tournaments", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn join_tournament(
        &self,
        tournament_id: &str,
        body: &serde_json::Value,
    ) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!(
                "{}/api/tournaments/{}/join",
                self.address, tournament_id
            ))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Cleanup test resources (drops the per-test database).
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}

/// Full creation payload for a tournament with the given sport and capacity.
#[allow(dead_code)]
pub fn tournament_payload(sport: &str, max_participants: u32) -> serde_json::Value {
    serde_json::json!({
        "name": format!("{} Invitational", sport),
        "sport": sport,
        "entry_fee": "0.01",
        "prize_pool": "0.1",
        "creator_address": "0xabcdef1234567890abcdef1234567890abcdef12",
        "end_time": "2026-12-31T00:00:00Z",
        "max_participants": max_participants
    })
}
