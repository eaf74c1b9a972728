//! Password strength evaluator - main scoring logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::classes::CharacterClasses;
use crate::policy::ScoringPolicy;
use crate::strength::{Score, StrengthEvaluation, StrengthTier};

/// Classifies a password with the default (composite) policy.
///
/// Total over all inputs, including the empty string.
///
/// ```
/// use pwd_field::{classify, StrengthTier};
///
/// assert_eq!(classify(""), StrengthTier::Weak);
/// assert_eq!(classify("Passw0rd!"), StrengthTier::Medium);
/// assert_eq!(classify("MyStr0ng&Pass!!"), StrengthTier::Strong);
/// ```
pub fn classify(password: &str) -> StrengthTier {
    classify_with(password, ScoringPolicy::Composite)
}

/// Classifies a password with an explicit policy.
pub fn classify_with(password: &str, policy: ScoringPolicy) -> StrengthTier {
    let tier = policy.tier_for(compute_score(password, policy).value());

    #[cfg(feature = "tracing")]
    tracing::trace!(?policy, %tier, "password classified");

    tier
}

/// Computes the raw score of a password under the given policy.
pub fn compute_score(password: &str, policy: ScoringPolicy) -> Score {
    let classes = CharacterClasses::from_password(password);
    let total = policy
        .sections()
        .iter()
        .filter_map(|(_, section)| section(&classes))
        .map(|adjustment| adjustment.points)
        .sum();
    Score::new(total)
}

/// Evaluates password strength and returns a detailed evaluation.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `policy` - Scoring rule set
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// A `StrengthEvaluation` with the score, tier and one reason per section
/// that changed the score.
pub fn evaluate_password_strength(
    password: &SecretString,
    policy: ScoringPolicy,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> StrengthEvaluation {
    let classes = CharacterClasses::from_password(password.expose_secret());
    let mut reasons = Vec::new();
    let mut total: i64 = 0;

    for (_section_name, section_fn) in policy.sections() {
        // Check cancellation before each section (async only)
        #[cfg(feature = "async")]
        {
            if let Some(ref t) = token {
                if t.is_cancelled() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Evaluation cancelled before section: {}", _section_name);
                    reasons.push("Evaluation cancelled".to_string());
                    return StrengthEvaluation {
                        score: None,
                        tier: None,
                        reasons,
                    };
                }
            }
        }

        if let Some(adjustment) = section_fn(&classes) {
            #[cfg(feature = "tracing")]
            tracing::trace!(section = _section_name, points = adjustment.points, "section applied");
            total += adjustment.points;
            reasons.push(adjustment.reason);
        }
    }

    StrengthEvaluation {
        score: Some(Score::new(total)),
        tier: Some(policy.tier_for(total)),
        reasons,
    }
}

/// Async version that waits for `debounce`, then sends the evaluation via
/// channel.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    policy: ScoringPolicy,
    debounce: Duration,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(debounce).await;
    let evaluation = evaluate_password_strength(password, policy, Some(token));

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}


#[cfg(all(test, feature = "async"))]
mod async_tests {
    use super::*;

    #[tokio::test]
    async fn test_evaluate_with_cancellation() {
        let token = CancellationToken::new();
        token.cancel();

        let pwd = SecretString::new("SomePassword123!".to_string().into());
        let evaluation = evaluate_password_strength(&pwd, ScoringPolicy::Composite, Some(token));

        assert!(!evaluation.is_evaluated());
        assert!(evaluation.score.is_none());
        assert_eq!(evaluation.reasons, vec!["Evaluation cancelled".to_string()]);
    }

    #[tokio::test]
    async fn test_evaluate_without_cancellation() {
        let token = CancellationToken::new();

        let pwd = SecretString::new("TestPass123!".to_string().into());
        let evaluation = evaluate_password_strength(&pwd, ScoringPolicy::Composite, Some(token));

        assert!(evaluation.is_evaluated());
        assert!(evaluation.score.is_some());
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_password_strength_tx() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();

        let pwd = SecretString::new("MyStr0ng&Pass!!".to_string().into());

        evaluate_password_strength_tx(
            &pwd,
            ScoringPolicy::Composite,
            Duration::from_millis(300),
            token,
            tx,
        )
        .await;

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert_eq!(evaluation.tier, Some(StrengthTier::Strong));
    }

    #[tokio::test(start_paused = true)]
    async fn test_evaluate_tx_cancelled_during_debounce() {
        let (tx, mut rx) = mpsc::channel(1);
        let token = CancellationToken::new();
        let pwd = SecretString::new("Passw0rd!".to_string().into());

        let cancel = token.clone();
        let task = tokio::spawn(async move {
            evaluate_password_strength_tx(
                &pwd,
                ScoringPolicy::Composite,
                Duration::from_millis(300),
                token,
                tx,
            )
            .await;
        });
        cancel.cancel();
        task.await.expect("evaluation task panicked");

        let evaluation = rx.recv().await.expect("Should receive evaluation");
        assert!(!evaluation.is_evaluated());
    }

    #[tokio::test]
    async fn test_evaluate_tx_closed_receiver() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let pwd = SecretString::new("abc".to_string().into());
        // Must not panic when nobody is listening
        evaluate_password_strength_tx(
            &pwd,
            ScoringPolicy::Composite,
            Duration::ZERO,
            CancellationToken::new(),
            tx,
        )
        .await;
    }
}
