//! Flipbook - pixel-grid drawing surface and frame-sequence animation core.
//!
//! This crate implements the editing core of a small sprite/flipbook
//! animation tool: a user paints brush-sized blocks onto a raster canvas,
//! frames are chained into an ordered sequence, and playback loops through
//! them at a configurable rate.
//!
//! # Architecture
//!
//! The crate is split into three main modules:
//!
//! - `schema`: Project configuration and the persistence aggregate
//! - `canvas`: The raster surface, brush state, and color history
//! - `timeline`: Frame sequence storage and the playback state machine
//!
//! plus [`Editor`], which wires a surface and a timeline together the way
//! an application shell would. Display widgets, dialogs, file formats, and
//! the timer that drives playback ticks are external collaborators; the
//! core only defines the contracts they call into.
//!
//! # Example
//!
//! ```rust
//! use flipbook::{
//!     canvas::{Point, Rgba},
//!     schema::ProjectConfig,
//!     Editor,
//! };
//!
//! let mut editor = Editor::new(&ProjectConfig::default());
//!
//! // Paint one brush block on the first frame.
//! editor.surface_mut().set_brush_size(4);
//! editor.surface_mut().pick_color(Rgba::opaque(200, 40, 40));
//! editor.pointer_pressed(Point::new(10.0, 10.0));
//! editor.pointer_released(Point::new(10.0, 10.0));
//!
//! // Add a second frame and play the loop.
//! editor.add_frame();
//! editor.play();
//! editor.tick();
//! ```

pub mod canvas;
pub mod schema;
pub mod timeline;

mod editor;

// Re-export commonly used types
pub use canvas::{PixelBuffer, Point, RasterSurface, Rgba};
pub use editor::Editor;
pub use schema::{ProjectConfig, ProjectData};
pub use timeline::{FrameSequence, PlaybackState, Timeline};
