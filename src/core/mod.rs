pub mod clock;
pub mod controller;
pub mod input_adapter;

pub use clock::{Clock, FpsCounter, FrameInfo};
pub use controller::{Button, Controller};
pub use input_adapter::{MouseMode, WinitController};
