//! Icon set generation: resample a source image to fixed sizes, flatten
//! transparency for the apple-touch-icon, and pack ICO containers and
//! favicon sets in memory.

pub mod color;
pub mod container;
mod error;
pub mod favicon;
pub mod flatten;
pub mod handlers;
pub mod options;
pub mod output;
mod png;
mod resize;
pub mod sizes;

pub use color::Color;
pub use container::{ico_entry_sizes, ico_from_source, pack_ico, unpack_ico};
pub use error::IconError;
pub use favicon::{Artifact, FaviconOptions, FaviconSet, generate_favicon_set};
pub use flatten::{apple_touch_icon, flatten};
pub use png::encode_png;
pub use resize::resize;
pub use sizes::SizeSet;
