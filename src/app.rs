use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::core::RegistrationConfig;
use crate::core::config::CONFIG_META_NAME;
use crate::ui::pages::{LandingPage, NotFoundPage};
use crate::ui::provide_theme_context;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provided by the server for page routes, defaults elsewhere
    let config = use_context::<RegistrationConfig>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=CONFIG_META_NAME content=config.to_meta_content()/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Config embedded by the server, read back in the browser
fn load_client_config() -> RegistrationConfig {
    #[cfg(feature = "hydrate")]
    {
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| {
                d.query_selector(&format!("meta[name=\"{}\"]", CONFIG_META_NAME))
                    .ok()
                    .flatten()
            })
            .and_then(|meta| meta.get_attribute("content"));

        if let Some(content) = content {
            match RegistrationConfig::from_meta_content(&content) {
                Ok(config) => return config,
                Err(e) => leptos::logging::warn!("Using default config: {}", e),
            }
        }
    }

    RegistrationConfig::default()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let config = use_context::<RegistrationConfig>().unwrap_or_else(load_client_config);
    provide_context(config.clone());

    provide_theme_context(&config);

    view! {
        // sets the document title
        <Title text="DevSummit"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}
