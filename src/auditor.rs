//! Password auditor - runs the sections in order and builds the outcome.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::complexity::Complexity;
use crate::outcome::Outcome;
use crate::policy::Policy;
use crate::sections::{CharClasses, char_length, entropy, length_section, requirements_section};

/// Audits `password` against `policy`.
///
/// Checks run in a fixed order: length bounds, then required classes in the
/// order digits, lower, upper, symbols, extended. The first failure stops the
/// audit and is returned in [`Outcome::error`] together with the length.
///
/// Pure and stateless; safe to call from any number of threads.
pub fn audit(password: &str, policy: &Policy) -> Outcome {
    let length = char_length(password);

    if let Err(err) = length_section(length, policy) {
        #[cfg(feature = "tracing")]
        tracing::debug!("Audit rejected at length check ({} chars): {}", length, err);
        return Outcome::rejected(length, err);
    }

    let classes = CharClasses::scan(password);

    if let Err(err) = requirements_section(&classes, policy) {
        #[cfg(feature = "tracing")]
        tracing::debug!("Audit rejected at requirements check: {}", err);
        return Outcome::rejected(length, err);
    }

    let complexity = Complexity::from_classes(&classes);

    #[cfg(feature = "tracing")]
    tracing::debug!("Audit passed: {} chars, tier {}", length, complexity);

    Outcome {
        entropy: entropy::estimate(length, &classes),
        strong: complexity >= policy.minimum_complexity,
        length,
        complexity,
        has_extended: classes.extended,
        error: None,
    }
}

/// Same as [`audit`] for a password held in a [`SecretString`].
pub fn audit_secret(password: &SecretString, policy: &Policy) -> Outcome {
    audit(password.expose_secret(), policy)
}

/// Audits the password and sends the outcome over `tx`.
///
/// Nothing is sent if `token` is already cancelled.
#[cfg(feature = "async")]
pub async fn audit_tx(
    password: &SecretString,
    policy: Policy,
    token: CancellationToken,
    tx: mpsc::Sender<Outcome>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Audit cancelled before start");
        return;
    }

    let outcome = audit_secret(password, &policy);

    if let Err(e) = tx.send(outcome).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password audit outcome: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
