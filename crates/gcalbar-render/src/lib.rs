//! Text rendering for the gcalbar widget.
//!
//! Pure computation over in-memory values: the multi-week calendar grid,
//! the grouped agenda list, and the compositor that zips both into
//! side-by-side output lines. No I/O happens in this crate.

pub mod compose;
pub mod error;
pub mod events;
pub mod grid;
pub mod highlight;
pub mod types;

pub use compose::{zip_columns, COLUMN_GAP};
pub use error::RenderError;
pub use events::format_events;
pub use grid::{build_grid, GRID_ROW_WIDTH};
pub use highlight::{escape_hashes, highlight};
pub use types::{EventRecord, EventWhen};
