//! MedTranslate - healthcare translation assistant
//!
//! This crate translates between patients and providers: text typed, picked
//! from quick medical phrases or transcribed from the microphone is
//! translated with Google Gemini and can be spoken aloud.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Core business logic, value objects, interaction state and errors
//! - **Application**: Use cases, session handlers and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (Gemini, speech synthesis, audio devices, config)
//! - **CLI**: Command-line interface, argument parsing and the session loop

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
