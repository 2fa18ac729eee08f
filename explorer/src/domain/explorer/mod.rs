//! Span explorer: forest construction, traversal and tree rendering

mod forest;
mod palette;
mod render;
mod session;
mod traversal;

pub use forest::{ForestNode, ForestOptions, SpanForest};
pub use palette::{ColorMode, Palette, TreeGuides};
pub use render::{RenderOptions, TreeRenderer, attribute_chips};
pub use session::{ExplorerSession, SpanClickHandler};
pub use traversal::{ExpansionState, VisitRecord, visit, visit_subtree};
