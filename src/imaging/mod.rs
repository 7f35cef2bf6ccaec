//! Image processing — statically linked, no system packages required.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Probe** (dims + raw EXIF) | `image` decoder, `exif_metadata` |
//! | **Resize** | Lanczos3 via the `image` crate |
//! | **Encode** | lossy WebP via the `webp` crate |
//!
//! The module is split into:
//! - **Calculations**: pure dimension math (unit testable)
//! - **Parameters**: data structures describing operations
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]
//! - **Operations**: high-level functions combining calculations + backend

pub mod backend;
mod calculations;
pub mod operations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend, ImageProbe};
pub use calculations::scale_to_width;
pub use operations::{DerivativeOutput, create_derivative, probe_image};
pub use params::{Quality, ResizeParams};
pub use rust_backend::RustBackend;
