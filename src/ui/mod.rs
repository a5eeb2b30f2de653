//! User interface rendering layer.
//!
//! Orchestrates the terminal UI, transforming view models into ANSI-styled
//! output through composable components. Rendering follows a declarative
//! model:
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable UI state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (cursor, highlighting)
//! - [`theme`]: Color scheme definitions and ANSI escape generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{DisplayItem, EmptyState, FooterInfo, HeaderInfo, InputBarInfo, UIViewModel};
