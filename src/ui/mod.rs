//! Page interaction state, kept free of any DOM so it can be driven by a thin
//! event-dispatch layer.

pub mod debounce;
pub mod hotkeys;
pub mod page;
pub mod scrollspy;

pub use debounce::Debouncer;
pub use hotkeys::{Key, KeyEvent, KeyOutcome, SearchOverlay};
pub use scrollspy::{Extent, NavLink, current_link};
