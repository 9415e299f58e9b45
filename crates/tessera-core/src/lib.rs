//! Tessera core - UI-free logic for the snippet builder
//!
//! Everything here is plain data and pure functions so it can be tested
//! without a window:
//!
//! - **counter**: the bounded counter behind every numeric option
//!   (text coercion, press-and-hold stepping, validity)
//! - **count** / **decimal**: number modes and tenth-precision arithmetic
//! - **color**: hex parsing and CSS colour strings
//! - **markup**: HTML/CSS export of the styled button

pub mod color;
pub mod count;
pub mod counter;
pub mod decimal;
pub mod error;
pub mod markup;

pub use color::{background_css, hex_to_rgb, Rgb};
pub use count::{Direction, NumberType};
pub use counter::{BoundedCounter, HoldSession, Validity, HOLD_INTERVAL};
pub use error::{ColorError, ColorResult};
pub use markup::{render_export, ButtonStyle, ExportOptions, ExportTemplate};
