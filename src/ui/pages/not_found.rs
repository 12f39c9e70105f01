//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="hero">
            // Error code
            <h1>"404"</h1>

            // Description
            <p>"The page you're looking for doesn't exist or has been moved."</p>

            <A href="/" attr:class="btn">
                "Back to DevSummit"
            </A>
        </section>
    }
}
