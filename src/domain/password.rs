use validator::ValidationError;
use zxcvbn::zxcvbn;

const MIN_LENGTH: usize = 8;
const MIN_STRENGTH_SCORE: u8 = 3;

/// Checks the seeded owner password before it is hashed.
pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_LENGTH {
        let mut error = ValidationError::new("password_length");
        error.message = Some(format!("Must be at least {} characters", MIN_LENGTH).into());
        return Err(error);
    }

    let estimate = zxcvbn(password, &[]);
    let score = estimate.score() as u8;

    if score < MIN_STRENGTH_SCORE {
        let feedback = estimate.feedback()
            .and_then(|f| f.warning().map(|w| w.to_string()))
            .unwrap_or_else(|| "Password is too weak".to_string());

        let mut error = ValidationError::new("password_strength");
        error.message = Some(feedback.into());
        return Err(error);
    }

    Ok(())
}
