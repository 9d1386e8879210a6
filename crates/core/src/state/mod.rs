//! Observable converter state shared with a presentation layer.

mod converter_state;


pub use converter_state::ConverterState;
