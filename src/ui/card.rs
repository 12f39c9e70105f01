//! Feature card with a hover lift

use leptos::prelude::*;

use crate::core::CardHover;
use crate::ui::icon::Icon;

#[component]
pub fn Card(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    let hover = RwSignal::new(CardHover::default());

    view! {
        <div
            class="card"
            style:transform=move || hover.get().transform()
            style:box-shadow=move || hover.get().box_shadow()
            on:mouseenter=move |_| hover.set(CardHover::from_pointer_inside(true))
            on:mouseleave=move |_| hover.set(CardHover::from_pointer_inside(false))
        >
            <Icon name=icon class="card-icon" />
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}
