//! Rendering Seam
//!
//! The core never talks to a graphics API. Instead it drives a
//! [`RenderContext`], a small immediate-mode interface the host implements:
//!
//! - [`context`]: the [`RenderContext`] trait
//! - [`matrix_stack`]: a [`MatrixStack`] hosts can embed
//! - [`recording`]: [`RecordingContext`], a headless context recording
//!   [`RenderCommand`]s
//! - [`traversal`]: [`display_scene`], the depth-first scene walk

pub mod context;
pub mod matrix_stack;
pub mod recording;
pub mod traversal;

pub use context::RenderContext;
pub use matrix_stack::MatrixStack;
pub use recording::{RecordingContext, RenderCommand};
pub use traversal::display_scene;
