use axum::{response::IntoResponse, Json};
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Clone, Serialize)]
pub struct Sport {
    pub id: &'static str,
    pub name: &'static str,
}

pub const SUPPORTED_SPORTS: &[Sport] = &[
    Sport {
        id: "cricket",
        name: "Cricket",
    },
    Sport {
        id: "football",
        name: "Football",
    },
    Sport {
        id: "basketball",
        name: "Basketball",
    },
    Sport {
        id: "tennis",
        name: "Tennis",
    },
    Sport {
        id: "hockey",
        name: "Hockey",
    },
    Sport {
        id: "badminton",
        name: "Badminton",
    },
];

pub async fn list_sports() -> impl IntoResponse {
    Json(json!({ "sports": SUPPORTED_SPORTS }))
}
