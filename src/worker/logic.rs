use std::fmt::Display;

use log::{debug, error, trace};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio_stream::wrappers::UnboundedReceiverStream;

use crate::config::SearchConfig;
use crate::core::algorithms::SearchResult;
use crate::worker::definitions::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerClosedError;

impl Display for WorkerClosedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "search worker has stopped")
    }
}

impl std::error::Error for WorkerClosedError {}

/// Handle used to queue searches. Dropping every handle stops the worker
/// once the queued requests are answered.
#[derive(Debug, Clone)]
pub struct SearchWorker {
    sender: UnboundedSender<SearchRequest>,
}

impl SearchWorker {
    pub fn submit(
        &self,
        position: PositionSnapshot,
        config: SearchConfig,
    ) -> Result<Uuid, WorkerClosedError> {
        let request = SearchRequest::new(position, config);
        let id = request.id;
        self.submit_request(request)?;
        Ok(id)
    }

    pub fn submit_request(&self, request: SearchRequest) -> Result<(), WorkerClosedError> {
        self.sender.send(request).map_err(|_| WorkerClosedError)
    }
}

/// Starts the worker task on the current tokio runtime.
pub fn spawn_worker() -> (SearchWorker, UnboundedReceiverStream<SearchResponse>) {
    let (request_sender, request_rcv) = mpsc::unbounded_channel();
    let (response_sender, response_rcv) = mpsc::unbounded_channel();
    tokio::task::spawn(worker_loop(request_rcv, response_sender));
    (
        SearchWorker {
            sender: request_sender,
        },
        UnboundedReceiverStream::new(response_rcv),
    )
}

async fn worker_loop(
    mut receiver: UnboundedReceiver<SearchRequest>,
    sender: UnboundedSender<SearchResponse>,
) {
    while let Some(request) = receiver.recv().await {
        let id = request.id;
        trace!("Worker received request {}", id);
        let response = match tokio::task::spawn_blocking(move || solve_request(&request)).await {
            Ok(response) => response,
            Err(err) => {
                error!("Search for request {} failed: {}", id, err);
                SearchResponse::no_move(id)
            }
        };
        if sender.send(response).is_err() {
            debug!("Nobody listens for responses, worker stops");
            break;
        }
    }
    trace!("Worker finished");
}

fn into_response<M>(
    id: Uuid,
    result: Option<SearchResult<M>>,
    wrap: impl FnOnce(M) -> BestMove,
) -> SearchResponse {
    match result {
        Some(result) => SearchResponse {
            id,
            best: Some(wrap(result.best_move)),
            score: Some(result.score),
            stats: result.stats,
        },
        None => SearchResponse::no_move(id),
    }
}

/// Runs the search a request asks for, synchronously.
pub fn solve_request(request: &SearchRequest) -> SearchResponse {
    match &request.position {
        PositionSnapshot::Checkers(board) => into_response(
            request.id,
            request.config.checkers_bot().search(board),
            BestMove::Checkers,
        ),
        PositionSnapshot::ConnectFour(board) => into_response(
            request.id,
            request.config.connect_four_bot().search(board),
            BestMove::ConnectFour,
        ),
    }
}

/// Encoded request in, encoded response out.
pub fn handle_message(bytes: &[u8]) -> Result<Vec<u8>, ParsingMessageError> {
    let request = SearchRequest::try_from(bytes)?;
    solve_request(&request).encode()
}
