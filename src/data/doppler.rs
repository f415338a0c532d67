use thiserror::Error;

/// Speed of light in km/s.
pub const SPEED_OF_LIGHT_KMS: f64 = 3.0e5;

/// Inputs for which the shifted wavelength is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DomainError {
    #[error("expansion velocity {0} km/s must be finite and below the speed of light")]
    Superluminal(f64),

    #[error("redshift {0} must be finite and greater than -1")]
    Redshift(f64),

    #[error("shifted wavelength of {0} Å is not finite")]
    NonFinite(f64),
}

/// Relativistic Doppler factor `(1 - β) / sqrt(1 - β²)` for ejecta moving
/// at `v_exp` km/s, i.e. `sqrt((1 - β) / (1 + β))`.
///
/// Positive velocities shorten the wavelength (blueshift of the approaching
/// ejecta surface).
pub fn doppler_factor(v_exp: f64) -> Result<f64, DomainError> {
    if !v_exp.is_finite() || v_exp.abs() >= SPEED_OF_LIGHT_KMS {
        return Err(DomainError::Superluminal(v_exp));
    }
    let beta = v_exp / SPEED_OF_LIGHT_KMS;
    Ok((1.0 - beta) / (1.0 - beta * beta).sqrt())
}

/// Combined cosmological redshift factor and Doppler factor.
pub fn shift_factor(redshift: f64, v_exp: f64) -> Result<f64, DomainError> {
    if !redshift.is_finite() || redshift <= -1.0 {
        return Err(DomainError::Redshift(redshift));
    }
    Ok((1.0 + redshift) * doppler_factor(v_exp)?)
}

/// Observed wavelength of a line emitted at `rest_wavelength`.
pub fn observed(rest_wavelength: f64, redshift: f64, v_exp: f64) -> Result<f64, DomainError> {
    let shifted = rest_wavelength * shift_factor(redshift, v_exp)?;
    if !shifted.is_finite() {
        return Err(DomainError::NonFinite(rest_wavelength));
    }
    Ok(shifted)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_identity_at_rest() {
        for w in [2025.0, 4861.0, 6563.0, 18756.0] {
            assert_eq!(observed(w, 0.0, 0.0).unwrap(), w);
        }
    }

    #[test]
    fn test_redshift_monotonic() {
        let w = 6563.0;
        let mut prev = observed(w, 0.0, 0.0).unwrap();
        for step in 1..=10 {
            let z = f64::from(step) * 0.1;
            let next = observed(w, z, 0.0).unwrap();
            assert!(next > prev, "z={z}: {next} <= {prev}");
            prev = next;
        }
    }

    #[test]
    fn test_velocity_monotonic_blueshift() {
        let w = 6355.0;
        let mut prev = observed(w, 0.05, 0.0).unwrap();
        for v in (1000..30000).step_by(1000) {
            let next = observed(w, 0.05, f64::from(v)).unwrap();
            assert!(next < prev, "v={v}: {next} >= {prev}");
            prev = next;
        }
    }

    #[test]
    fn test_factor_closed_forms_agree() {
        for v in [0.0, 1000.0, 11000.0, 29999.0] {
            let beta = v / SPEED_OF_LIGHT_KMS;
            let expected = ((1.0 - beta) / (1.0 + beta)).sqrt();
            assert_relative_eq!(doppler_factor(v).unwrap(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_h_beta_at_redshift_one() {
        assert_relative_eq!(observed(4861.0, 1.0, 0.0).unwrap(), 9722.0);
    }

    #[test]
    fn test_speed_of_light_rejected() {
        assert_eq!(
            observed(4861.0, 0.0, SPEED_OF_LIGHT_KMS),
            Err(DomainError::Superluminal(SPEED_OF_LIGHT_KMS))
        );
        assert!(observed(4861.0, 0.0, 3.5e5).is_err());
        assert!(observed(4861.0, 0.0, -SPEED_OF_LIGHT_KMS).is_err());
        assert!(observed(4861.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_near_light_speed_stays_finite() {
        let w = observed(4861.0, 0.0, SPEED_OF_LIGHT_KMS - 1e-3).unwrap();
        assert!(w.is_finite());
        assert!(w > 0.0);
    }

    #[test]
    fn test_overflowing_wavelength_rejected() {
        assert!(matches!(
            observed(f64::MAX, 1.0, 0.0),
            Err(DomainError::NonFinite(_))
        ));
    }

    #[test]
    fn test_invalid_redshift_rejected() {
        assert!(matches!(
            observed(4861.0, -1.0, 0.0),
            Err(DomainError::Redshift(_))
        ));
        assert!(observed(4861.0, f64::INFINITY, 0.0).is_err());
    }
}
