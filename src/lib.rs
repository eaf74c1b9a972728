//! Password field strength library
//!
//! This library scores passwords into weak/medium/strong tiers and provides
//! a headless model of a password entry field that reclassifies on every
//! edit and tells listeners about it.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_FIELD_CONFIG`: Custom path to the TOML config file
//!   (default: `./assets/password_field.toml`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_field::{classify, load_config, PasswordField, StrengthTier};
//!
//! assert_eq!(classify("Passw0rd!"), StrengthTier::Medium);
//!
//! // Load theme and policy (call once at startup)
//! let config = load_config().expect("Failed to load config");
//!
//! let mut field = PasswordField::new(config);
//! field.subscribe(|event| println!("{:?} -> {}", event.kind, event.strength));
//! field.text_changed(Some("MyStr0ng&Pass!!"));
//!
//! println!("Label: {}", field.indicator().label);
//! ```

// Internal modules
mod classes;
mod config;
mod evaluator;
mod field;
mod policy;
mod sections;
mod strength;

// Public API
pub use config::{
    CONFIG_PATH_ENV, ConfigError, FieldConfig, Hsba, Layout, Palette, StrengthLabels, Theme,
    get_config_path, load_config, load_config_from,
};
pub use evaluator::{classify, classify_with, compute_score, evaluate_password_strength};
pub use field::{
    FieldEvent, FieldEventKind, INDICATOR_SEGMENTS, IndicatorState, ListenerId, PasswordField,
};
pub use policy::ScoringPolicy;
pub use strength::{Score, StrengthEvaluation, StrengthTier};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
