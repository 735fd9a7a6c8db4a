use std::fmt::Display;

use postcard::{from_bytes, to_allocvec};
use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::core::algorithms::SearchStats;
use crate::core::checkers::{CheckersBoard, CheckersMove};
use crate::core::connect_four::{ConnectFourBoard, ConnectFourMove};
use crate::core::definitions::Score;

pub use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PositionSnapshot {
    Checkers(CheckersBoard),
    ConnectFour(ConnectFourBoard),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BestMove {
    Checkers(CheckersMove),
    ConnectFour(ConnectFourMove),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub id: Uuid,
    pub position: PositionSnapshot,
    pub config: SearchConfig,
}

/// `best` is `None` when the AI has no legal move in the requested position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub id: Uuid,
    pub best: Option<BestMove>,
    pub score: Option<Score>,
    pub stats: SearchStats,
}

impl SearchRequest {
    pub fn new(position: PositionSnapshot, config: SearchConfig) -> Self {
        SearchRequest {
            id: Uuid::new_v4(),
            position,
            config,
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, ParsingMessageError> {
        to_allocvec(self).map_err(ParsingMessageError::PostcardError)
    }
}

impl SearchResponse {
    pub fn no_move(id: Uuid) -> Self {
        SearchResponse {
            id,
            best: None,
            score: None,
            stats: SearchStats::default(),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, ParsingMessageError> {
        to_allocvec(self).map_err(ParsingMessageError::PostcardError)
    }
}

#[derive(Debug)]
pub enum ParsingMessageError {
    EmptyMessage,
    PostcardError(postcard::Error),
}

impl Display for ParsingMessageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParsingMessageError::EmptyMessage => write!(f, "received an empty message"),
            ParsingMessageError::PostcardError(err) => write!(f, "malformed message: {}", err),
        }
    }
}

impl std::error::Error for ParsingMessageError {}

impl TryFrom<&[u8]> for SearchRequest {
    type Error = ParsingMessageError;
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(ParsingMessageError::EmptyMessage);
        }
        from_bytes(value).map_err(ParsingMessageError::PostcardError)
    }
}

impl TryFrom<&[u8]> for SearchResponse {
    type Error = ParsingMessageError;
    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(ParsingMessageError::EmptyMessage);
        }
        from_bytes(value).map_err(ParsingMessageError::PostcardError)
    }
}
