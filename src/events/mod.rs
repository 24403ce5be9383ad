pub mod buttons;
pub mod pointer;

pub use buttons::wire_navigation_buttons;
pub use pointer::{wire_input_handlers, InputWiring};
