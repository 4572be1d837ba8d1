mod core;
mod history;
mod pointer;
mod render;
mod text;
#[cfg(test)]
mod tests;

pub use self::core::{DrawingState, InputState, Phase};
pub use history::{History, HistoryEntry};
pub use render::Scene;
