//! Browser-independent logic of the registration page

pub mod config;
pub mod hover;
pub mod reveal;
pub mod status;
pub mod submission;
pub mod theme;
pub mod validation;

pub use config::RegistrationConfig;
pub use hover::CardHover;
pub use reveal::{RevealKind, RevealStyle, RevealTracker, reveal_style};
pub use status::{FormPhase, FormView, StatusMessage, StatusTone};
pub use submission::{AttemptOutcome, SubmissionReceipt, SubmitError, Transport, submit_registration};
pub use theme::{PreferenceStore, ThemePreference};
pub use validation::{RegistrationInput, ValidationError, validate_registration};
