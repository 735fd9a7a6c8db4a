//! Off-thread search: requests go in over a channel, one response per
//! request comes back on a stream, and the caller's runtime never blocks
//! on a deep search.

pub mod definitions;
pub mod logic;

pub use definitions::{
    BestMove, ParsingMessageError, PositionSnapshot, SearchRequest, SearchResponse, Uuid,
};
pub use logic::{handle_message, solve_request, spawn_worker, SearchWorker, WorkerClosedError};
