pub mod analysis;
pub mod common_pins;
pub mod dates;
pub mod demographics;
pub mod error;
pub mod models;
pub mod service;
pub mod suggest;
mod utils;

pub use analysis::{PatternKind, PinAnalysis};
pub use common_pins::CommonPinSet;
pub use dates::{date_parts, DateParts};
pub use error::{PinError, PinResult};
pub use models::{Demographics, ReasonCode, Strength, Verdict};
pub use service::{PinChecker, PinStrengthService, MAX_DIGIT_LENGTH};
pub use suggest::suggest_pin;
pub use utils::is_valid_pin;
