use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Scroll-triggered fade-in wrapper. Latches the first time the element
/// enters the viewport, so the animation only plays once.
#[component]
pub fn Reveal(
    #[prop(optional)] class: &'static str,
    #[prop(optional)] delay: f64,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (shown, set_shown) = signal(false);

    Effect::new(move |_| {
        if visible.get() {
            set_shown(true);
        }
    });

    view! {
        <div
            node_ref=target
            class=move || {
                let state = if shown() {
                    "opacity-100 translate-y-0"
                } else {
                    "opacity-0 translate-y-6"
                };
                format!("transition-all duration-500 ease-out {state} {class}")
            }
            style:transition-delay=format!("{delay}s")
        >
            {children()}
        </div>
    }
}
