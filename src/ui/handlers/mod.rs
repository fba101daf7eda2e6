//! Handler modules for managing user input and the ground history.

mod input_handler;
mod snapshot_handler;

pub use input_handler::InputHandler;
pub use snapshot_handler::SnapshotHandler;
