use leptos::prelude::*;

#[component]
pub fn Container(#[prop(optional)] class: &'static str, children: Children) -> impl IntoView {
    view! { <div class=format!("mx-auto w-full max-w-6xl px-6 {class}")>{children()}</div> }
}

#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="inline-flex items-center gap-1 rounded-full border border-white/10 bg-white/5 px-3 py-1 text-xs text-white/80 shadow-soft">
            {children()}
        </span>
    }
}

#[component]
pub fn SectionTitle(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="mb-10 text-center">
            <h2 class="text-3xl md:text-4xl font-bold tracking-tight">
                <span class="text-gradient">{title}</span>
            </h2>
            {subtitle
                .map(|s| {
                    view! { <p class="mt-3 text-white/70 max-w-2xl mx-auto">{s}</p> }
                })}
        </div>
    }
}
