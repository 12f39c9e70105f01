//! Application pages module
//!
//! - Landing page (home, with registration)
//! - Not found page

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
