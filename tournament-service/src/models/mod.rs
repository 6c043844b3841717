pub mod tournament;

pub use tournament::{Participant, Tournament, TournamentStatus, DEFAULT_MAX_PARTICIPANTS};
