use leptos::{html, prelude::*};

use super::components::{Badge, Container};
use super::reveal::Reveal;
use super::silhouette::{use_region_scroll_progress, SilhouetteShapes};
use crate::silhouette::Variant;

/// Travel of the hero's own background layer, separate from the backdrop
/// shapes.
const HERO_LAYER_TRAVEL: f64 = -120.0;

#[component]
pub fn Hero() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let progress = use_region_scroll_progress(section_ref);

    view! {
        <section id="home" node_ref=section_ref class="relative overflow-hidden isolate">
            <SilhouetteShapes variant=Variant::Gamer intensity=1.0 />
            // background parallax layer behind the intro copy
            <div
                class="pointer-events-none absolute inset-0 -z-10 opacity-40 bg-gradient-to-b from-primary-600/20 to-transparent"
                style:transform=move || {
                    format!("translateY({}px)", HERO_LAYER_TRAVEL * progress.get())
                }
            ></div>

            <Container class="py-24 md:py-40">
                <div class="grid md:grid-cols-2 gap-10 items-center">
                    <div>
                        <Badge>"laravel • react • live streaming"</Badge>
                        <p class="mt-5 text-white/70 max-w-xl">
                            "Hi, I'm " <span class="font-semibold">"Ikhwan"</span>
                            ". Welcome to my portfolio!
                            I'm a passionate developer who loves building clean, modern, and animated web experiences.
                            I also have a strong interest in "
                            <span class="font-semibold">"networking & infrastructure"</span>
                            ", combining my skills in both software and networks to deliver complete solutions.
                            Explore my projects and feel free to connect. Let's create something impactful together."
                        </p>
                    </div>
                    <Reveal class="flex justify-center">
                        <img
                            src="/me.jpg"
                            alt="Ikhwan"
                            class="w-64 h-64 md:w-80 md:h-80 object-cover rounded-full border-4 border-primary-600 shadow-soft"
                        />
                    </Reveal>
                </div>
            </Container>
        </section>
    }
}
