//! # Adapters Layer (Hexagonal Architecture)
//!
//! Observer implementations and an in-process signing transport.

mod callbacks;
mod channel;
mod recording;
mod scripted_transport;

pub use callbacks::CallbackObserver;
pub use channel::ChannelObserver;
pub use recording::RecordingObserver;
pub use scripted_transport::{Delivery, RecordedDispatch, ScriptedTransport};
