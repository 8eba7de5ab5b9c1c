//! Drawing surfaces.
//!
//! Effects paint through [`Paint`]; the host decides what a line or a disc
//! turns into (canvas calls, GPU vertices, a recorded command list).

use vitrine_core::Vec2;

use crate::style::Color;

/// A 2D paint capability (the canvas "2d context").
pub trait Paint {
    /// Clears the whole surface.
    fn clear(&mut self, width: f32, height: f32);
    /// Strokes a straight line.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);
    /// Fills a disc.
    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Color);
}

/// A rectangular drawing surface owned by the host.
pub trait Surface: Send {
    /// Current size in pixels (width, height).
    fn size(&self) -> (f32, f32);
    /// The paint context, or `None` if the host could not provide one.
    fn context(&mut self) -> Option<&mut dyn Paint>;
}

/// A recorded draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Clear the surface.
    Clear {
        /// Width cleared.
        width: f32,
        /// Height cleared.
        height: f32,
    },
    /// Straight line.
    Line {
        /// Start point.
        from: Vec2,
        /// End point.
        to: Vec2,
        /// Stroke color.
        color: Color,
        /// Line width.
        width: f32,
    },
    /// Filled disc.
    Disc {
        /// Center point.
        center: Vec2,
        /// Radius.
        radius: f32,
        /// Fill color.
        color: Color,
    },
}

/// Paint implementation that records commands for a frame.
#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(1024),
        }
    }

    /// Recorded commands since the last clear.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Line { .. }))
            .count()
    }

    /// Number of recorded discs.
    #[must_use]
    pub fn disc_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Disc { .. }))
            .count()
    }
}

impl Paint for CommandBuffer {
    fn clear(&mut self, width: f32, height: f32) {
        // A clear wipes everything painted before it
        self.commands.clear();
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line { from, to, color, width });
    }

    fn fill_disc(&mut self, center: Vec2, radius: f32, color: Color) {
        self.commands.push(DrawCommand::Disc { center, radius, color });
    }
}

/// Headless surface backed by a [`CommandBuffer`].
///
/// Used by the preview binary and tests; a context can be withheld to
/// exercise the missing-context path.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    buffer: Option<CommandBuffer>,
}

impl RecordingSurface {
    /// Creates a surface with a paint context.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            buffer: Some(CommandBuffer::new()),
        }
    }

    /// Creates a surface whose host failed to provide a context.
    #[must_use]
    pub fn without_context(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            buffer: None,
        }
    }

    /// Changes the surface size (the host's layout pass).
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// The last painted frame, if any.
    #[must_use]
    pub fn buffer(&self) -> Option<&CommandBuffer> {
        self.buffer.as_ref()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn context(&mut self) -> Option<&mut dyn Paint> {
        self.buffer.as_mut().map(|buffer| buffer as &mut dyn Paint)
    }
}
