//! UI State Machines
//!
//! Pure controller state for the ancillary page behaviors: theme mode,
//! modal carousel, scroll progress, fade-in latch, hero typewriter and
//! the modal content model. No DOM types in here.

pub mod carousel;
pub mod project;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod typing;

pub use carousel::*;
pub use project::*;
pub use reveal::*;
pub use scroll::*;
pub use theme::*;
pub use typing::*;
