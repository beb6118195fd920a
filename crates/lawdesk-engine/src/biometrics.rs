//! Platform biometric check, consumed as a trait

pub const BIOMETRIC_PROMPT: &str = "Authenticate to access your law practice";

pub trait BiometricVerifier: Send + Sync {
    fn has_hardware(&self) -> bool;

    fn is_enrolled(&self) -> bool;

    /// Show the platform prompt; `true` when the user was recognised
    fn authenticate(&self, prompt: &str) -> bool;
}

/// Verifier for hosts without biometric hardware
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableBiometrics;

impl BiometricVerifier for UnavailableBiometrics {
    fn has_hardware(&self) -> bool {
        false
    }

    fn is_enrolled(&self) -> bool {
        false
    }

    fn authenticate(&self, _prompt: &str) -> bool {
        false
    }
}
