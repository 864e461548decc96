//! Bridging transport completions and event streams into client results
//!
//! Unary calls go through [`forward`]. Streaming calls are wrapped in a
//! [`ForwardStream`]: a pump task owns the transport stream and pushes
//! transformed items through a bounded channel, and a cancellation token is
//! checked before every item on both sides of that channel.

use crate::convert::ConversionError;
use crate::types::ClientError;
use futures::future::BoxFuture;
use futures::stream::{BoxStream, FusedStream};
use futures::{FutureExt, Stream, StreamExt};
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tonic::Status;
use tracing::{debug, error, warn};
use ulid::Ulid;

/// Raw message stream of a streaming transport call. Dropping it aborts the
/// call.
pub type TransportStream<T> = BoxStream<'static, Result<T, Status>>;

/// Adapt a unary transport completion.
///
/// A transport error is passed through untouched and `transform` is not run.
/// A transform failure is a defect and surfaces as [`ClientError::Conversion`].
pub fn forward<R, T, F>(result: Result<R, Status>, transform: F) -> Result<T, ClientError>
where
    F: FnOnce(R) -> Result<T, ConversionError>,
{
    let raw = result.map_err(|status| {
        debug!("Transport call failed: {}", status);
        ClientError::Transport(status)
    })?;

    transform(raw).map_err(|e| {
        error!("Failed to convert transport response: {}", e);
        ClientError::Conversion(e)
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamState {
    /// Created, not yet polled; the transport stream is still parked
    Idle,
    Active,
    Ended,
    Errored,
    Cancelled,
}

impl StreamState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            StreamState::Ended | StreamState::Errored | StreamState::Cancelled
        )
    }
}

/// Pump future waiting for the first poll. It owns the transport stream, so
/// taking it out and dropping it aborts a call that never started.
type ParkedPump = Arc<Mutex<Option<BoxFuture<'static, ()>>>>;

fn take_parked(parked: &ParkedPump) -> Option<BoxFuture<'static, ()>> {
    match parked.lock() {
        Ok(mut slot) => slot.take(),
        Err(poisoned) => poisoned.into_inner().take(),
    }
}

fn release_parked(parked: &ParkedPump) {
    drop(take_parked(parked));
}

/// Cancels a [`ForwardStream`] from anywhere
#[derive(Clone)]
pub struct CancelHandle {
    token: CancellationToken,
    parked: ParkedPump,
}

impl CancelHandle {
    /// Cancel the stream. A transport stream that was never started is
    /// released before this returns.
    pub fn cancel(&self) {
        self.token.cancel();
        release_parked(&self.parked);
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl std::fmt::Debug for CancelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CancelHandle")
            .field("cancelled", &self.token.is_cancelled())
            .finish()
    }
}

/// Domain-level stream over a streaming transport call.
///
/// Yields transformed items until the transport ends, fails or the stream is
/// cancelled. A transport error or a transform failure is delivered as a
/// single `Err` item, after which the stream yields `None` forever. After
/// cancellation nothing more is delivered, even items already buffered.
/// Dropping the stream cancels it.
pub struct ForwardStream<T> {
    call_id: Ulid,
    state: StreamState,
    parked: ParkedPump,
    receiver: mpsc::Receiver<Result<T, ClientError>>,
    token: CancellationToken,
}

impl<T: Send + 'static> ForwardStream<T> {
    /// Wrap `upstream`, applying `transform` to every raw message.
    ///
    /// Nothing is spawned until the first poll.
    pub fn new<R, F>(upstream: TransportStream<R>, transform: F, buffer_size: usize) -> Self
    where
        R: Send + 'static,
        F: FnMut(R) -> Result<T, ConversionError> + Send + 'static,
    {
        let call_id = Ulid::new();
        let token = CancellationToken::new();
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        let pump = run_pump(call_id, upstream, transform, sender, token.clone()).boxed();

        Self {
            call_id,
            state: StreamState::Idle,
            parked: Arc::new(Mutex::new(Some(pump))),
            receiver,
            token,
        }
    }
}

impl<T> ForwardStream<T> {
    pub fn call_id(&self) -> Ulid {
        self.call_id
    }

    /// Current state; a pending cancellation counts as cancelled
    pub fn state(&self) -> StreamState {
        if !self.state.is_terminal() && self.token.is_cancelled() {
            StreamState::Cancelled
        } else {
            self.state
        }
    }

    pub fn cancel(&mut self) {
        self.token.cancel();
        if !self.state.is_terminal() {
            self.finish(StreamState::Cancelled);
        }
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        CancelHandle {
            token: self.token.clone(),
            parked: self.parked.clone(),
        }
    }

    fn finish(&mut self, state: StreamState) {
        debug!("Stream {} finished as {:?}", self.call_id, state);
        self.state = state;
        release_parked(&self.parked);
        self.receiver.close();
    }
}

impl<T> Stream for ForwardStream<T> {
    type Item = Result<T, ClientError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if this.state.is_terminal() {
            return Poll::Ready(None);
        }

        if this.token.is_cancelled() {
            this.finish(StreamState::Cancelled);
            return Poll::Ready(None);
        }

        if let Some(pump) = take_parked(&this.parked) {
            debug!("Stream {} started", this.call_id);
            this.state = StreamState::Active;
            tokio::spawn(pump);
        }

        match this.receiver.poll_recv(cx) {
            Poll::Pending => Poll::Pending,
            Poll::Ready(None) => {
                let state = if this.token.is_cancelled() {
                    StreamState::Cancelled
                } else {
                    StreamState::Ended
                };
                this.finish(state);
                Poll::Ready(None)
            }
            Poll::Ready(Some(item)) => {
                if this.token.is_cancelled() {
                    this.finish(StreamState::Cancelled);
                    return Poll::Ready(None);
                }
                if item.is_err() {
                    this.finish(StreamState::Errored);
                }
                Poll::Ready(Some(item))
            }
        }
    }
}

impl<T> FusedStream for ForwardStream<T> {
    fn is_terminated(&self) -> bool {
        self.state.is_terminal()
    }
}

impl<T> Drop for ForwardStream<T> {
    fn drop(&mut self) {
        self.token.cancel();
        // Outstanding cancel handles still share the slot
        release_parked(&self.parked);
    }
}

impl<T> std::fmt::Debug for ForwardStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ForwardStream")
            .field("call_id", &self.call_id)
            .field("state", &self.state())
            .finish()
    }
}

/// Owns the transport stream until it ends, fails or the call is cancelled.
/// Returning drops both the transport stream and the sender, which is the
/// single release point of the call.
async fn run_pump<R, T, F>(
    call_id: Ulid,
    mut upstream: TransportStream<R>,
    mut transform: F,
    sender: mpsc::Sender<Result<T, ClientError>>,
    token: CancellationToken,
) where
    F: FnMut(R) -> Result<T, ConversionError>,
{
    loop {
        let next = tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!("Stream {} cancelled", call_id);
                return;
            }
            next = upstream.next() => next,
        };

        let item = match next {
            None => {
                debug!("Stream {} completed by transport", call_id);
                return;
            }
            Some(Err(status)) => {
                warn!("Stream {} failed: {}", call_id, status);
                Err(ClientError::Transport(status))
            }
            Some(Ok(raw)) => transform(raw).map_err(|e| {
                error!("Stream {} failed to convert message: {}", call_id, e);
                ClientError::Conversion(e)
            }),
        };
        let terminal = item.is_err();

        tokio::select! {
            biased;
            _ = token.cancelled() => {
                debug!("Stream {} cancelled while delivering", call_id);
                return;
            }
            sent = sender.send(item) => {
                if sent.is_err() {
                    debug!("Stream {} consumer went away", call_id);
                    return;
                }
            }
        }

        if terminal {
            return;
        }
    }
}
