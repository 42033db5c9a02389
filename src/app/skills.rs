use leptos::prelude::*;

use super::components::{Container, SectionTitle};
use super::reveal::Reveal;
use super::silhouette::SilhouetteShapes;
use crate::silhouette::Variant;

const WEB_SKILLS: [&str; 7] = [
    "React",
    "TailwindCSS",
    "Framer Motion",
    "Laravel",
    "Inertia",
    "MySQL",
    "Vercel",
];

const CREATOR_SKILLS: [&str; 5] = [
    "Adobe Premiere Pro",
    "Adobe Photoshop",
    "CapCut",
    "OBS Studio",
    "TikTok Live",
];

const NETWORK_SKILLS: [&str; 5] = [
    "WiFi Installation",
    "Network Troubleshooting",
    "LAN/WAN Setup",
    "Router Configuration",
    "Iconnet Field Experience",
];

#[component]
fn SkillGroup(title: &'static str, skills: &'static [&'static str]) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-xl font-semibold mb-4 text-gradient">{title}</h3>
            <div class="flex gap-4 flex-wrap">
                {skills
                    .iter()
                    .enumerate()
                    .map(|(i, s)| {
                        view! {
                            <Reveal delay={i as f64 * 0.05}>
                                <div class="rounded-2xl border border-white/10 bg-white/[.04] px-4 py-2 shadow-soft">
                                    {*s}
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section
            id="skills"
            class="relative py-24 border-y border-white/5 bg-gradient-to-b from-white/[.02] to-transparent isolate"
        >
            <SilhouetteShapes variant=Variant::Network intensity=0.5 />
            <Container>
                <SectionTitle title="Skills" subtitle="Technologies and tools I work with" />

                <div class="space-y-12">
                    <SkillGroup title="Web Development" skills={&WEB_SKILLS[..]} />
                    <SkillGroup title="Content Creator" skills={&CREATOR_SKILLS[..]} />
                    <SkillGroup title="Networking" skills={&NETWORK_SKILLS[..]} />
                </div>
            </Container>
        </section>
    }
}
