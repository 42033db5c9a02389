use leptos::prelude::*;

use super::components::{Container, SectionTitle};
use super::reveal::Reveal;
use super::silhouette::SilhouetteShapes;
use crate::silhouette::Variant;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="relative py-24 isolate">
            <SilhouetteShapes variant=Variant::Webdev intensity=0.4 />
            <Container>
                <SectionTitle title="About Me" subtitle="Who I am and what I can offer" />
                <div class="grid md:grid-cols-2 gap-8 items-start">
                    <div class="rounded-3xl border border-white/10 bg-white/[.03] p-6 shadow-soft">
                        <p class="text-white/80 leading-relaxed">
                            "My name is " <span class="font-semibold">"Ikhwan"</span>
                            ", a computer science graduate and full-stack developer based in Pekanbaru, Indonesia.
                            I specialize in building modern web applications with "
                            <span class="font-semibold">"React and Laravel"</span>
                            ", and I enjoy turning complex problems into elegant and user-friendly solutions."
                        </p>
                        <p class="mt-4 text-white/80 leading-relaxed">
                            "Beyond software, I'm also passionate about "
                            <span class="font-semibold">"networking & IT infrastructure"</span>
                            ". I believe that combining solid backend systems, intuitive user interfaces, and reliable networks
                            creates products that truly deliver value in professional environments."
                        </p>
                    </div>

                    <Reveal>
                        <div class="rounded-3xl border border-white/10 bg-gradient-to-br from-primary-600/10 to-emerald-500/10 p-1">
                            <div class="rounded-[20px] bg-slate-900/70 p-6">
                                <h3 class="text-lg font-semibold mb-4 text-gradient">
                                    "Why hire me?"
                                </h3>
                                <ul class="space-y-3 text-white/80">
                                    <li>
                                        "• Solid experience in "
                                        <span class="font-semibold">"React, Laravel, and MySQL"</span>
                                    </li>
                                    <li>
                                        "• Understanding of "
                                        <span class="font-semibold">"networking concepts"</span>
                                        " and system deployment"
                                    </li>
                                    <li>
                                        "• Strong focus on "
                                        <span class="font-semibold">"UX, performance, and scalability"</span>
                                    </li>
                                    <li>
                                        "• Able to work both independently and in a team environment"
                                    </li>
                                    <li>"• Eager to learn and adapt to new technologies quickly"</li>
                                </ul>
                            </div>
                        </div>
                    </Reveal>
                </div>
            </Container>
        </section>
    }
}
