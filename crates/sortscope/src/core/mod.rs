//! Core abstractions for stepwise sorting
//!
//! The container, the snapshot it lives in, the suspend/resume engine the
//! algorithms are written against, and the geometry and canvas the renderer
//! draws on.

mod canvas;
mod container;
mod error;
mod frame;
pub mod logging;
mod partition;
mod snapshot;
mod step;
mod types;

pub use canvas::*;
pub use container::*;
pub use error::*;
pub use frame::*;
pub use logging::*;
pub use partition::*;
pub use snapshot::*;
pub use step::*;
pub use types::*;
