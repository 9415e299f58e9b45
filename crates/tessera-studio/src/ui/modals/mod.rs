//! Modal dialogs
//!
//! - `Modal` - titled dialog frame
//! - `with_modal_overlay()` - shows a `Modal` above the window with a click-to-close backdrop

mod overlay;

pub use overlay::{with_modal_overlay, Modal};
