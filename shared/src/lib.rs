// Models and display helpers shared between the engine and the GUI.
pub mod models;
pub mod utils;
