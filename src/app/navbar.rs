use leptos::prelude::*;

use super::components::Container;

const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#projects", "Projects"),
    ("#skills", "Skills"),
    ("#about", "About"),
    ("#contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="sticky top-0 z-50 backdrop-blur supports-[backdrop-filter]:bg-slate-950/60 border-b border-white/5">
            <Container class="flex items-center justify-between h-16">
                <a href="#home" class="font-bold tracking-tight text-white">
                    "Ikhwanul Hidayat"
                </a>
                <ul class="hidden md:flex items-center gap-6 text-sm text-white/70">
                    {NAV_LINKS
                        .into_iter()
                        .map(|(href, label)| {
                            view! {
                                <li>
                                    <a class="hover:text-white transition" href=href>
                                        {label}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <a
                    href="#contact"
                    class="text-sm rounded-xl border border-white/10 bg-primary-600/20 hover:bg-primary-600/30 px-4 py-2 transition"
                >
                    "Hire me"
                </a>
            </Container>
        </nav>
    }
}
