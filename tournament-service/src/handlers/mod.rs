pub mod health;
pub mod sports;
pub mod tournaments;

pub use health::{health_check, metrics_endpoint, readiness_check};
pub use sports::list_sports;
pub use tournaments::{
    create_tournament, get_tournament, join_tournament, list_participants, list_tournaments,
    update_tournament_status,
};
