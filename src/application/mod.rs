//! Application layer - Use cases and port interfaces

pub mod convert;
pub mod ports;
pub mod routing;
pub mod sessions;

pub use convert::{ConvertError, ConvertInput, ConvertOutput, ConvertTextUseCase};
pub use routing::{AudioSink, AudioStream, RoutingPath};
pub use sessions::{SessionManager, SessionSlot};
