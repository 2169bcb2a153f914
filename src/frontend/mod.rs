mod effects;
mod hooks;
mod sections;

use effects::ParallaxBackdrop;
use sections::{About, Contact, ExperienceTimeline, Footer, Header, Hero, Projects, Skills};
use web_sys::window;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <div class="page-shell">
                <ParallaxBackdrop />
                <Header />
                <main id="content">
                    <Hero />
                    <Skills />
                    <ExperienceTimeline />
                    <Projects />
                    <About />
                    <Contact />
                </main>
                <Footer />
            </div>
        </>
    }
}

pub fn run() {
    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
