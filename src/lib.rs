pub mod args;
pub mod keyboard;
pub mod logging;
pub mod snapshot;
pub mod ui;
