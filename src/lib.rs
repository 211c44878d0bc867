//! VoxFile - text-to-speech file converter CLI
//!
//! This crate converts text into a spoken audio file: it routes a speech
//! engine's rendered output through a capture session and saves the
//! finalized blob, with optional playback and desktop notifications.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, entities, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (espeak-ng, ffmpeg, rodio, etc.)
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
