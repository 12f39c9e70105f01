pub mod card;
pub mod icon;
pub mod pages;
pub mod register_form;
pub mod reveal;
pub mod scroll;
pub mod theme;
pub mod transport;

pub use card::Card;
pub use icon::{Icon, icons};
pub use register_form::RegistrationForm;
pub use theme::{ThemeContext, ThemeToggle, provide_theme_context, use_theme_context};
