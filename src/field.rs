//! Headless password field model.
//!
//! [`PasswordField`] owns the entered text, reclassifies it on every change
//! and exposes the state a UI layer needs to draw the strength indicator.
//! Drawing, layout and focus handling belong to the host toolkit.

use std::fmt;
use std::time::Duration;

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::{FieldConfig, Hsba, Theme};
use crate::evaluator::classify_with;
use crate::policy::ScoringPolicy;
use crate::strength::StrengthTier;

#[cfg(feature = "async")]
use crate::evaluator::evaluate_password_strength_tx;
#[cfg(feature = "async")]
use crate::strength::StrengthEvaluation;

/// Number of segments in the strength indicator.
pub const INDICATOR_SEGMENTS: usize = 3;

/// Kinds of notification sent to listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldEventKind {
    EditingChanged,
    ValueChanged,
    EditingDidBegin,
    EditingDidEnd,
    EditingDidEndOnExit,
}

/// Notification delivered to listeners, with the strength at that moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldEvent {
    pub kind: FieldEventKind,
    pub strength: StrengthTier,
}

/// Handle returned by [`PasswordField::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&FieldEvent)>;

/// Rendering state of the three-segment indicator and its label.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorState {
    pub segments: [Hsba; INDICATOR_SEGMENTS],
    pub label: String,
}

impl IndicatorState {
    /// Lights the first `tier.lit_segments()` segments with the tier color.
    pub fn for_tier(tier: StrengthTier, theme: &Theme) -> Self {
        let lit = theme.colors.for_tier(tier);
        let mut segments = [theme.colors.unused; INDICATOR_SEGMENTS];
        for segment in segments.iter_mut().take(tier.lit_segments()) {
            *segment = lit;
        }

        Self {
            segments,
            label: theme.labels.for_tier(tier).to_string(),
        }
    }
}

pub struct PasswordField {
    password: SecretString,
    strength: StrengthTier,
    policy: ScoringPolicy,
    debounce: Duration,
    theme: Theme,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
}

impl PasswordField {
    /// Creates an empty field. The empty password is classified immediately,
    /// so the indicator starts in the weak state.
    pub fn new(config: FieldConfig) -> Self {
        let policy = config.policy;
        Self {
            password: SecretString::from(String::new()),
            strength: classify_with("", policy),
            policy,
            debounce: config.debounce(),
            theme: config.theme,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    /// Current password, read-only.
    pub fn password(&self) -> &SecretString {
        &self.password
    }

    pub fn strength(&self) -> StrengthTier {
        self.strength
    }

    pub fn policy(&self) -> ScoringPolicy {
        self.policy
    }

    /// Delay applied before an async evaluation, from `debounce_ms`.
    pub fn debounce(&self) -> Duration {
        self.debounce
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn indicator(&self) -> IndicatorState {
        IndicatorState::for_tier(self.strength, &self.theme)
    }

    /// Evaluates the current password in detail after the configured
    /// debounce and sends the result on `tx`. Cancelling `token` during the
    /// debounce yields a cancelled evaluation.
    #[cfg(feature = "async")]
    pub async fn evaluate_tx(&self, token: CancellationToken, tx: mpsc::Sender<StrengthEvaluation>) {
        evaluate_password_strength_tx(&self.password, self.policy, self.debounce, token, tx).await;
    }

    /// Registers a listener. Listeners run synchronously, in registration
    /// order, after the field state has been updated.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&FieldEvent) + 'static,
    {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    /// The text changed while editing.
    pub fn text_changed(&mut self, text: Option<&str>) {
        self.set_password(text);
        self.notify(&[FieldEventKind::EditingChanged, FieldEventKind::ValueChanged]);
    }

    pub fn begin_editing(&mut self, text: Option<&str>) {
        self.set_password(text);
        self.notify(&[FieldEventKind::EditingDidBegin]);
    }

    pub fn end_editing(&mut self, text: Option<&str>) {
        self.set_password(text);
        self.notify(&[FieldEventKind::EditingDidEnd]);
    }

    pub fn end_editing_on_exit(&mut self, text: Option<&str>) {
        self.set_password(text);
        self.notify(&[FieldEventKind::EditingDidEndOnExit]);
    }

    /// The return key was pressed. Emits `EditingDidEnd` and returns true,
    /// telling the host to resign focus.
    pub fn return_pressed(&mut self) -> bool {
        self.notify(&[FieldEventKind::EditingDidEnd]);
        true
    }

    fn set_password(&mut self, text: Option<&str>) {
        let text = text.unwrap_or_default();
        self.strength = classify_with(text, self.policy);
        self.password = SecretString::from(text.to_string());
    }

    fn notify(&mut self, kinds: &[FieldEventKind]) {
        for &kind in kinds {
            let event = FieldEvent {
                kind,
                strength: self.strength,
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(?event, listeners = self.listeners.len(), "field event");

            for (_, listener) in self.listeners.iter_mut() {
                listener(&event);
            }
        }
    }
}

impl Default for PasswordField {
    fn default() -> Self {
        Self::new(FieldConfig::default())
    }
}

impl fmt::Debug for PasswordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordField")
            .field("password", &"[REDACTED]")
            .field("strength", &self.strength)
            .field("policy", &self.policy)
            .field("debounce", &self.debounce)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
