//! UI module - handles all TUI rendering
//!
//! Structure:
//! - `draw/` - Draw functions, split by pane
//! - `theme.rs` - UI themes and hex color parsing

mod draw;
pub mod theme;

// Re-export main draw function
pub use draw::draw;

// Re-export commonly used types
pub use theme::Theme;
