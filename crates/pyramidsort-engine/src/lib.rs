pub mod classify;
pub mod io;
pub mod order;
pub mod reorder;
pub mod selection;

// Re-export key types for easier usage
pub use classify::{Role, classify};
pub use order::{compare, sort_key};
pub use reorder::{LINE_SEP, reorder};
pub use selection::{LineRange, reorder_line_range};
