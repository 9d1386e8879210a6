//! FX module - conversion arithmetic and user-facing message templates.

mod conversion_engine;
mod messages;

pub use conversion_engine::{parse_amount, ConversionEngine};
pub use messages::Messages;
