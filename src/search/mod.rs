//! Search System: In-Page Text Search
//!
//! Snapshot capture, query filtering, keyword highlighting and the
//! pure display model. The DOM layer feeds captured element texts in
//! and walks the display model out; nothing in here touches the page.

pub mod filter;
pub mod highlight;
pub mod index;
pub mod normalize;
pub mod results;

pub use filter::*;
pub use highlight::*;
pub use index::*;
pub use normalize::*;
pub use results::*;
