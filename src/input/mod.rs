//! Input handling and tool state machine.
//!
//! This module translates host pointer, keyboard and toolbar events into
//! element store mutations. It holds the active tool selection and the state
//! machine for the interaction in progress (idle, drawing, editing, erasing,
//! panning).

pub mod events;
pub mod modifiers;
pub mod state;
pub mod surface;
pub mod tool;
pub mod toolbar;

// Re-export commonly used types at module level
pub use events::{Key, MouseButton};
pub use modifiers::Modifiers;
pub use state::{DrawingState, HistoryEntry, InputState, Phase, Scene};
pub use surface::{HostEvent, dispatch};
pub use tool::{ShapeKind, ToggleButton, ToolName};
pub use toolbar::Toolbar;
