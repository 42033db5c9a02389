use leptos::prelude::*;

use super::components::{Container, SectionTitle};

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="py-24">
            <Container>
                <SectionTitle title="Contact" subtitle="Let's connect through my socials" />
                <div class="grid md:grid-cols-2 gap-6">
                    <div class="rounded-3xl border border-white/10 bg-white/[.03] p-6 shadow-soft">
                        <p class="text-white/80">"Email"</p>
                        <a
                            class="text-white/90 underline"
                            href="mailto:ikhwanulhidayat22@gmail.com"
                        >
                            "ikhwanulhidayat22@gmail.com"
                        </a>
                    </div>

                    <div class="rounded-3xl border border-white/10 bg-white/[.03] p-6 shadow-soft">
                        <p class="text-white/80">"Social Media"</p>
                        <div class="mt-3 flex flex-col gap-4 text-lg">
                            <a
                                class="flex items-center gap-2 underline hover:text-primary-500 transition"
                                href="https://www.tiktok.com/@sibubudibagimana"
                                target="_blank"
                                rel="noreferrer"
                            >
                                <i class="fa-brands fa-tiktok text-2xl"></i>
                                "TikTok"
                            </a>

                            <a
                                class="flex items-center gap-2 underline hover:text-primary-500 transition"
                                href="https://www.instagram.com/bugudigi_"
                                target="_blank"
                                rel="noreferrer"
                            >
                                <i class="fa-brands fa-instagram text-2xl text-pink-500"></i>
                                "Instagram"
                            </a>
                        </div>
                    </div>
                </div>
            </Container>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-10 border-t border-white/5 text-center text-white/50">
            <Container>
                <p>"© " {env!("BUILD_YEAR")} " Ikhwanul Hidayat - All rights reserved."</p>
            </Container>
        </footer>
    }
}
