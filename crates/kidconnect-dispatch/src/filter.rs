//! Recipient admission control.

use kidconnect_core::{Recipient, Whitelist};
use std::fmt;

/// Why a recipient cannot be messaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IneligibleReason {
    /// Number is blank after trimming.
    NoPhoneNumber,
    /// Number is not on the whitelist.
    NotWhitelisted,
}

impl fmt::Display for IneligibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NoPhoneNumber => "no phone number",
            Self::NotWhitelisted => "not in whitelist",
        })
    }
}

/// Result of the eligibility check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eligibility {
    Eligible,
    Ineligible(IneligibleReason),
}

impl Eligibility {
    pub fn is_eligible(&self) -> bool {
        matches!(self, Self::Eligible)
    }

    /// The exclusion reason, if any.
    pub fn reason(&self) -> Option<IneligibleReason> {
        match self {
            Self::Eligible => None,
            Self::Ineligible(reason) => Some(*reason),
        }
    }
}

/// Decides which recipients may be messaged.
///
/// Eligible iff the trimmed number is non-empty and on the whitelist.
#[derive(Debug, Clone, Default)]
pub struct RecipientFilter {
    whitelist: Whitelist,
}

impl RecipientFilter {
    pub fn new(whitelist: Whitelist) -> Self {
        Self { whitelist }
    }

    pub fn check(&self, recipient: &Recipient) -> Eligibility {
        is_eligible(recipient, &self.whitelist)
    }
}

/// Check a recipient against a whitelist.
pub fn is_eligible(recipient: &Recipient, whitelist: &Whitelist) -> Eligibility {
    if !recipient.is_addressable() {
        Eligibility::Ineligible(IneligibleReason::NoPhoneNumber)
    } else if !whitelist.contains(recipient.trimmed_number()) {
        Eligibility::Ineligible(IneligibleReason::NotWhitelisted)
    } else {
        Eligibility::Eligible
    }
}
