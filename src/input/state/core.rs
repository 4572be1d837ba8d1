//! Tool session state machine and input state management.

use super::history::History;
use crate::config::Config;
use crate::draw::{Element, ElementId, ElementStore, Geometry, Point, Style, Viewport};
use crate::error::CanvasError;
use crate::input::{ShapeKind, ToolName, Toolbar};
use serde::{Deserialize, Serialize};

/// Current interaction session.
///
/// Every pointer-driven variant lives from one pointer press to its release
/// (or a cancel). Drafts are owned here and only reach the store on commit.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingState {
    /// No interaction in progress
    Idle,
    /// Pencil or shape draft being dragged out
    Drawing {
        /// Where the pointer went down (world space)
        anchor: Point,
        draft: Element,
    },
    /// Mouse tool dragging a committed element
    Editing {
        target: ElementId,
        /// Geometry at the start of the drag, restored on cancel
        original: Geometry,
        /// Pointer position of the previous move (world space)
        last: Point,
    },
    /// Text draft waiting for content and an explicit commit
    TextEditing { draft: Element },
    /// Eraser stroke; holds everything removed so far
    Erasing { removed: Vec<Element> },
    /// Hand tool drag
    Panning {
        /// Viewport at the start of the drag, restored on cancel
        origin: Viewport,
        /// Pointer position of the previous move (screen space)
        last: Point,
    },
}

/// Coarse phase of the session, as reported to hosts and in errors.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    Idle,
    Drawing,
    Editing,
    Erasing,
    Panning,
}

impl DrawingState {
    pub fn phase(&self) -> Phase {
        match self {
            DrawingState::Idle => Phase::Idle,
            DrawingState::Drawing { .. } => Phase::Drawing,
            DrawingState::Editing { .. } | DrawingState::TextEditing { .. } => Phase::Editing,
            DrawingState::Erasing { .. } => Phase::Erasing,
            DrawingState::Panning { .. } => Phase::Panning,
        }
    }
}

/// Main input state: the element store plus everything needed to interpret
/// pointer and keyboard events against it.
///
/// This is the only mutator of the store. Renderers read it through
/// [`InputState::elements`], [`InputState::draft`] and [`InputState::scene`].
#[derive(Debug)]
pub struct InputState {
    pub(super) store: ElementStore,
    pub(super) toolbar: Toolbar,
    pub(super) viewport: Viewport,
    /// Current session state machine
    pub(crate) state: DrawingState,
    pub(super) history: History,
    /// Style applied to newly created elements
    pub current_style: Style,
    /// Slack used by the mouse tool when picking an element
    pub hit_tolerance: f64,
    /// Slack used by the eraser
    pub eraser_tolerance: f64,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Surface width in pixels (set by the host after configuration)
    pub screen_width: u32,
    /// Surface height in pixels (set by the host after configuration)
    pub screen_height: u32,
}

impl InputState {
    /// Creates an InputState with an empty store and the given defaults.
    ///
    /// # Arguments
    /// * `style` - Style for newly created elements
    /// * `toolbar` - Initial tool and shape selection
    /// * `hit_tolerance` - Pick slack for the mouse tool
    /// * `eraser_tolerance` - Pick slack for the eraser
    /// * `max_history` - Undo depth (0 = unlimited)
    pub fn with_defaults(
        style: Style,
        toolbar: Toolbar,
        hit_tolerance: f64,
        eraser_tolerance: f64,
        max_history: usize,
    ) -> Self {
        Self {
            store: ElementStore::new(),
            toolbar,
            viewport: Viewport::new(),
            state: DrawingState::Idle,
            history: History::new(max_history),
            current_style: style,
            hit_tolerance,
            eraser_tolerance,
            needs_redraw: true,
            screen_width: 0,
            screen_height: 0,
        }
    }

    /// Builds an InputState from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(
            Style {
                color: config.drawing.default_color.to_color(),
                thickness: config.drawing.default_thickness,
                font_size: config.drawing.default_font_size,
            },
            Toolbar::new(config.tools.default_tool, config.tools.default_shape),
            config.tools.hit_tolerance,
            config.tools.eraser_tolerance,
            config.history.max_depth,
        )
    }

    /// Updates surface dimensions after host configuration.
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn state(&self) -> &DrawingState {
        &self.state
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, DrawingState::Idle)
    }

    /// True while a pointer button is held on behalf of the active tool.
    ///
    /// A text session is not pointer-held: it outlives the pointer release.
    pub fn pointer_held(&self) -> bool {
        matches!(
            self.state,
            DrawingState::Drawing { .. }
                | DrawingState::Editing { .. }
                | DrawingState::Erasing { .. }
                | DrawingState::Panning { .. }
        )
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn active_tool(&self) -> ToolName {
        self.toolbar.active_tool()
    }

    pub fn active_shape(&self) -> ShapeKind {
        self.toolbar.active_shape()
    }

    pub fn store(&self) -> &ElementStore {
        &self.store
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Switches the active tool. Refused while any session is open.
    pub fn set_active_tool(&mut self, tool: ToolName) -> Result<(), CanvasError> {
        self.require_idle_for(tool.to_string())?;
        if self.toolbar.select_tool(tool) {
            log::info!("Active tool: {tool}");
            self.needs_redraw = true;
        }
        Ok(())
    }

    /// Switches the shape drawn by the shape tool. Refused while any session is open.
    pub fn set_active_shape(&mut self, kind: ShapeKind) -> Result<(), CanvasError> {
        self.require_idle_for(kind.to_string())?;
        if self.toolbar.select_shape(kind) {
            log::info!("Active shape: {kind}");
            self.needs_redraw = true;
        }
        Ok(())
    }

    fn require_idle_for(&self, requested: String) -> Result<(), CanvasError> {
        if self.is_idle() {
            Ok(())
        } else {
            Err(CanvasError::ToolChangeDuringSession {
                requested,
                phase: self.phase(),
            })
        }
    }

    pub(super) fn invalid_event(&self, event: &'static str) -> CanvasError {
        CanvasError::InvalidEvent {
            event,
            phase: self.phase(),
        }
    }

    /// Draft element with a fresh id and the current style.
    pub(super) fn new_draft(&mut self, geometry: Geometry) -> Element {
        Element::new(self.store.next_id(), geometry, self.current_style)
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
