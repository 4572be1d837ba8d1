//! Library exports for the inkboard drawing core.
//!
//! Exposes the geometry model, the element store, and the tool state machine
//! that turns an ordered stream of pointer and keyboard events into element
//! mutations. Hosts embed [`input::InputState`] and feed it through
//! [`input::surface::dispatch`]; renderers read the store and the live draft
//! back out of it.

pub mod config;
pub mod draw;
pub mod error;
pub mod input;
pub mod replay;

pub use config::Config;
pub use error::CanvasError;
