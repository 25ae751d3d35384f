use log::info;
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod dice;
mod dom;
mod error;
mod hooks;
mod navigation;
mod scroll;
mod components {
    pub mod logo;
    pub mod reveal;
}
mod sections {
    pub mod download;
    pub mod features;
    pub mod footer;
    pub mod gameplay;
    pub mod hero;
    pub mod rules;
}

use navigation::Navigation;
use sections::{
    download::DownloadSection, features::FeaturesSection, footer::Footer,
    gameplay::GameplaySection, hero::HeroSection, rules::RulesSection,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Unknown route, redirecting to landing page");
            html! { <Redirect<Route> to={Route::Home} /> }
        }
    }
}

#[function_component(Landing)]
fn landing() -> Html {
    let config = use_memo(|_| config::site(), ());

    html! {
        <main class="landing">
            <Navigation config={(*config).clone()} />
            <HeroSection />
            <FeaturesSection />
            <GameplaySection />
            <RulesSection />
            <DownloadSection config={(*config).clone()} />
            <Footer config={(*config).clone()} />
        </main>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <Global css={css!(r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    background: #0a0a0a;
                    color: #fafafa;
                    font-family: "Inter", system-ui, -apple-system, sans-serif;
                    -webkit-font-smoothing: antialiased;
                    overflow-x: hidden;
                }
                ::selection {
                    background: rgba(249, 115, 22, 0.3);
                }
                .landing {
                    min-height: 100vh;
                }
                .section-inner {
                    position: relative;
                    z-index: 10;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .section-head {
                    text-align: center;
                    margin-bottom: 6rem;
                }
                .section-kicker {
                    display: inline-block;
                    color: #f97316;
                    font-size: 0.875rem;
                    font-weight: 500;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    margin-bottom: 1rem;
                }
                .section-head h2 {
                    font-size: clamp(2.25rem, 5vw, 3rem);
                    font-weight: 600;
                    letter-spacing: -0.025em;
                    margin: 0 0 1.5rem;
                }
                .section-head p {
                    font-size: 1.125rem;
                    color: #a3a3a3;
                    max-width: 42rem;
                    margin: 0 auto;
                }
            "#)} />
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting DO or DICE site");
    yew::Renderer::<App>::new().render();
}
