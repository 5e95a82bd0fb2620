//! Embassy async tasks
//!
//! Each task runs independently and communicates via the shared display
//! buffer and the signals in `channels`.

pub mod content;
pub mod refresh;

pub use content::content_task;
pub use refresh::{refresh_task, TubeDriver};
