use leptos::prelude::*;

use super::components::{Container, SectionTitle};
use super::reveal::Reveal;
use super::silhouette::SilhouetteShapes;
use crate::silhouette::Variant;

struct Project {
    title: &'static str,
    description: &'static str,
}

const WEB_PROJECTS: [Project; 2] = [
    Project {
        title: "Riau Berbagi",
        description: "A donation platform with Midtrans payment integration, analytics, and campaign management.",
    },
    Project {
        title: "Monitoring Contract Workflows at PTPN IV Regional III",
        description: "Web application for monitoring contract workflows and operational data at PTPN IV Regional III.",
    },
];

const CREATOR_PROJECTS: [Project; 2] = [
    Project {
        title: "Editing & Design",
        description: "Skilled in Adobe Premiere Pro, Photoshop, and CapCut for video editing and visual design.",
    },
    Project {
        title: "Live Streaming",
        description: "Experienced in OBS & TikTok Studio live streaming setups, audio routing, and on-air production (when time allows).",
    },
];

const NETWORK_PROJECTS: [Project; 1] = [Project {
    title: "Iconnet",
    description: "Hands-on experience in WiFi installation, troubleshooting, and network maintenance during my work with Iconnet.",
}];

#[component]
fn ProjectGroup(title: &'static str, projects: &'static [Project]) -> impl IntoView {
    view! {
        <div>
            <h3 class="text-2xl font-bold mb-6 text-gradient">{title}</h3>
            <div class="grid gap-6 md:grid-cols-2">
                {projects
                    .iter()
                    .enumerate()
                    .map(|(i, p)| {
                        view! {
                            <Reveal delay={i as f64 * 0.1}>
                                <div class="rounded-3xl border border-white/10 bg-white/[.03] p-6 shadow-soft">
                                    <h4 class="text-lg font-semibold">{p.title}</h4>
                                    <p class="mt-2 text-white/70 text-sm">{p.description}</p>
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
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="relative py-24 isolate">
            <SilhouetteShapes variant=Variant::Webdev intensity=0.6 />
            <Container>
                <SectionTitle
                    title="My Projects & Experiences"
                    subtitle="Here are the areas I focus on: web development, creative content, and networking."
                />

                <div class="space-y-16">
                    <ProjectGroup title="Web Development" projects={&WEB_PROJECTS[..]} />
                    <ProjectGroup title="Content Creator" projects={&CREATOR_PROJECTS[..]} />
                    <ProjectGroup title="Networking" projects={&NETWORK_PROJECTS[..]} />
                </div>
            </Container>
        </section>
    }
}
