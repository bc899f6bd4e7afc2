//! Background search driver for interactive play.

mod controller;

pub use controller::EngineController;
