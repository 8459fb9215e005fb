//! Load or generate a list of strings, detect whether it holds integers,
//! floating-point numbers or text, and sort it ascending.
//!
//! The GUI lives in the `rusty-sorter` binary; this library holds everything
//! that does not depend on egui.

pub mod data;
pub mod state;
