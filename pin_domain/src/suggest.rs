use rand::Rng;
use tracing::debug;

use crate::error::{PinError, PinResult};
use crate::models::{Demographics, Strength};
use crate::service::PinStrengthService;

pub const MAX_SUGGESTION_ATTEMPTS: usize = 1000;

/// Draw a random PIN of the service's length
pub fn random_pin<R: Rng + ?Sized>(digit_length: usize, rng: &mut R) -> String {
    (0..digit_length)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// Suggest a random PIN that classifies as strong for the given holder
pub fn suggest_pin<S, R>(service: &S, demographics: &Demographics, rng: &mut R) -> PinResult<String>
where
    S: PinStrengthService + ?Sized,
    R: Rng + ?Sized,
{
    for attempt in 1..=MAX_SUGGESTION_ATTEMPTS {
        let pin = random_pin(service.digit_length(), rng);
        if service.classify(&pin, demographics).strength == Strength::Strong {
            debug!("Found strong PIN suggestion after {} attempts", attempt);
            return Ok(pin);
        }
    }
    Err(PinError::SuggestionExhausted(MAX_SUGGESTION_ATTEMPTS))
}
