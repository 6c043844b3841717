pub mod tournaments;

pub use tournaments::{
    BlockchainInfo, CreateTournamentRequest, CreateTournamentResponse, JoinTournamentRequest,
    JoinTournamentResponse, ParticipantListResponse, ParticipantResponse, StatusUpdateResponse,
    TournamentDetailResponse, TournamentListParams, TournamentListResponse, TournamentResponse,
    UpdateStatusRequest,
};
