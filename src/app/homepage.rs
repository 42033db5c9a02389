use leptos::prelude::*;
use leptos_meta::Title;

use super::about::About;
use super::contact::Contact;
use super::hero::Hero;
use super::projects::Projects;
use super::skills::Skills;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <Hero />
        <Projects />
        <Skills />
        <About />
        <Contact />
    }
}
