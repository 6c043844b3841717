pub mod chain;
pub mod database;
pub mod metrics;
pub mod tournaments;

pub use chain::{
    ChainError, ChainProvider, DeployedContract, MockChainProvider, TournamentDeployment,
};
pub use database::MongoDb;
pub use metrics::{get_metrics, init_metrics};
pub use tournaments::TournamentService;
