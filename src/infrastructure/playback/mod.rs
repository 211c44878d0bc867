//! Playback infrastructure module
//!
//! Plays a finished conversion through the default output device (the
//! listen mode).

mod rodio;

pub use self::rodio::RodioPlayer;
