use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon file name without the .svg extension
    name: &'static str,
    /// CSS classes for sizing
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icons shipped in `public/icons`
pub mod icons {
    pub const SUN: &str = "sun";
    pub const MOON: &str = "moon";
    pub const CALENDAR: &str = "calendar";
    pub const USERS: &str = "users";
    pub const TROPHY: &str = "trophy";
    pub const CHEVRON_DOWN: &str = "chevron-down";
}
