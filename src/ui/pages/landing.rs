//! Landing page component
//!
//! A single scrolling page featuring:
//! - Header with the theme toggle
//! - Hero section with a jump to registration
//! - About section with hover cards
//! - Event timeline
//! - Registration form
//!
//! Sections, cards and timeline items are revealed as they scroll into view.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::card::Card;
use crate::ui::icon::{Icon, icons};
use crate::ui::register_form::RegistrationForm;
use crate::ui::reveal::use_scroll_reveal;
use crate::ui::scroll::scroll_to_section;
use crate::ui::theme::ThemeToggle;

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    use_scroll_reveal();

    view! {
        <Title text="DevSummit - Register" />
        <Meta name="description" content="Two days of talks, workshops and a hackathon. Register your seat." />

        <Header />

        <main>
            // Hero Section
            <section id="home" class="hero">
                <h1 class="landing-fade-in-up">"DevSummit"</h1>
                <p class="landing-fade-in-up landing-delay-200">
                    "Two days of talks, hands-on workshops and an overnight hackathon."
                </p>
                <button class="btn landing-fade-in-up landing-delay-400" on:click=move |_| scroll_to_section("register")>
                    "Register Now"
                </button>
                <button
                    class="scroll-indicator"
                    on:click=move |_| scroll_to_section("about")
                    aria-label="Scroll to details"
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-6 h-6" />
                </button>
            </section>

            // About Section
            <section id="about" class="section">
                <h2>"Why Attend?"</h2>
                <div class="cards">
                    <Card
                        icon=icons::USERS
                        title="Meet the Community"
                        description="Connect with students, engineers and organizers from across the region."
                    />
                    <Card
                        icon=icons::CALENDAR
                        title="Workshops"
                        description="Hands-on sessions on systems programming, the web platform and cloud tooling."
                    />
                    <Card
                        icon=icons::TROPHY
                        title="Hackathon"
                        description="Build something in 24 hours and present it to the judges."
                    />
                </div>
            </section>

            // Timeline Section
            <section id="schedule" class="section">
                <h2>"Schedule"</h2>
                <ul class="timeline">
                    <li><strong>"09:00"</strong>" Registration and breakfast"</li>
                    <li><strong>"10:00"</strong>" Opening keynote"</li>
                    <li><strong>"11:30"</strong>" Workshop tracks"</li>
                    <li><strong>"14:00"</strong>" Hackathon kickoff"</li>
                    <li><strong>"18:00"</strong>" Demos and awards"</li>
                </ul>
            </section>

            // Registration Section
            <section id="register" class="section">
                <h2>"Register"</h2>
                <p>"Seats are limited. Fill in your details to reserve one."</p>
                <RegistrationForm />
            </section>
        </main>

        <Footer />

        <LandingStyles />
    }
}

/// Header component with section links
#[component]
fn Header() -> impl IntoView {
    let nav_link = move |target: &'static str, label: &'static str| {
        view! {
            <a
                href=format!("#{}", target)
                on:click=move |ev| {
                    ev.prevent_default();
                    scroll_to_section(target);
                }
            >
                {label}
            </a>
        }
    };

    view! {
        <header class="site-header">
            <span class="logo">"DevSummit"</span>
            <nav>
                {nav_link("about", "About")}
                {nav_link("schedule", "Schedule")}
                {nav_link("register", "Register")}
            </nav>
            <ThemeToggle />
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <span>"© 2025 DevSummit. Built with Rust & Leptos."</span>
        </footer>
    }
}

/// CSS styles for the landing page
#[component]
fn LandingStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            body {
                margin: 0;
                font-family: system-ui, sans-serif;
                background: #f7f8fc;
                color: #1f2937;
                transition: background 0.3s, color 0.3s;
            }
            body.dark-mode {
                background: #111827;
                color: #e5e7eb;
            }

            .site-header {
                position: fixed;
                top: 0;
                left: 0;
                right: 0;
                z-index: 50;
                display: flex;
                align-items: center;
                justify-content: space-between;
                padding: 1rem 2rem;
                backdrop-filter: blur(8px);
            }
            .site-header nav a {
                margin: 0 0.75rem;
                color: inherit;
                text-decoration: none;
            }
            .theme-toggle {
                padding: 0.5rem;
                border: 1px solid #9ca3af;
                border-radius: 0.5rem;
                background: transparent;
                cursor: pointer;
            }
            body.dark-mode .theme-toggle img {
                filter: invert(1);
            }

            .hero {
                min-height: 100vh;
                display: flex;
                flex-direction: column;
                align-items: center;
                justify-content: center;
                text-align: center;
                padding: 0 1rem;
            }
            .hero h1 {
                font-size: 4rem;
                margin: 0 0 1rem;
            }
            .scroll-indicator {
                margin-top: 3rem;
                border: none;
                background: transparent;
                cursor: pointer;
            }

            .btn {
                padding: 1rem 2rem;
                font-weight: 600;
                font-size: 1.125rem;
                color: white;
                background-color: #2563eb;
                border: none;
                border-radius: 0.75rem;
                cursor: pointer;
                transition: transform 0.3s, background-color 0.3s;
            }
            .btn:hover {
                transform: scale(1.05);
                background-color: #1d4ed8;
            }
            .btn:disabled {
                opacity: 0.5;
                cursor: not-allowed;
            }

            .section {
                max-width: 64rem;
                margin: 0 auto;
                padding: 5rem 1rem;
            }

            .cards {
                display: grid;
                grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
                gap: 2rem;
            }
            .card {
                padding: 1.5rem;
                border-radius: 1rem;
                background: white;
            }
            body.dark-mode .card {
                background: #1f2937;
            }
            .card-icon {
                width: 2.5rem;
                height: 2.5rem;
            }

            .timeline {
                list-style: none;
                padding-left: 1.5rem;
                border-left: 3px solid #2563eb;
            }
            .timeline li {
                margin: 1.25rem 0;
            }

            .register-form {
                display: flex;
                flex-direction: column;
                gap: 1rem;
                max-width: 28rem;
            }
            .register-input {
                padding: 0.75rem 1rem;
                border: 1px solid #d1d5db;
                border-radius: 0.5rem;
                font-size: 1rem;
                background: inherit;
                color: inherit;
            }
            .register-status {
                min-height: 1.5rem;
                font-weight: 500;
            }

            .site-footer {
                padding: 3rem 1rem;
                text-align: center;
                font-size: 0.875rem;
                opacity: 0.7;
            }

            /* Fade in up animation */
            @keyframes landing-fade-in-up {
                from {
                    opacity: 0;
                    transform: translateY(20px);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .landing-fade-in-up {
                animation: landing-fade-in-up 0.6s ease-out forwards;
            }

            .landing-delay-200 {
                animation-delay: 0.2s;
                opacity: 0;
            }

            .landing-delay-400 {
                animation-delay: 0.4s;
                opacity: 0;
            }
            "#
        </style>
    }
}
