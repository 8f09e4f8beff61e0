//! Single-page landing site.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::automation_showcase::AutomationShowcase;
use crate::components::background::ParticleBackground;
use crate::components::case_studies::CaseStudies;
use crate::components::contact::Contact;
use crate::components::custom_cursor::CustomCursor;
use crate::components::footer::Footer;
use crate::components::hero::Hero;
use crate::components::navbar::Navbar;
use crate::components::services::Services;
use crate::util::pointer::provide_pointer;

#[component]
pub fn HomePage() -> impl IntoView {
    provide_pointer();

    view! {
        <main class="home">
            <CustomCursor />
            <ParticleBackground />
            <Navbar />
            <Hero />
            <About />
            <Services />
            <CaseStudies />
            <AutomationShowcase />
            <Contact />
            <Footer />
        </main>
    }
}
