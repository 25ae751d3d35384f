use yew::prelude::*;

use crate::content::{DOWNLOAD_ID, RULES_ID};
use crate::dice::DiceScene;
use crate::dom;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    #[prop_or(true)]
    pub show_scene: bool,
}

fn jump_to(id: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| {
        if let Err(e) = dom::scroll_to_anchor(id) {
            log::warn!("Could not scroll to {}: {}", id, e);
        }
    })
}

#[function_component(HeroSection)]
pub fn hero_section(props: &HeroProps) -> Html {
    html! {
        <section class="hero">
            <style>
                {r#"
                    @keyframes slideUp {
                        from { transform: translateY(2rem); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @keyframes pulse {
                        50% { opacity: 0.4; }
                    }
                    @keyframes gradientShift {
                        0% { background-position: 0% 50%; }
                        50% { background-position: 100% 50%; }
                        100% { background-position: 0% 50%; }
                    }
                    .hero {
                        position: relative;
                        height: 100vh;
                        width: 100%;
                        overflow: hidden;
                        background: #ffffff;
                        color: #0a0a0a;
                    }
                    .hero-scene {
                        position: absolute;
                        inset: 0;
                        z-index: 0;
                    }
                    .hero-vignette {
                        pointer-events: none;
                        position: absolute;
                        inset: 0;
                        z-index: 10;
                        background: radial-gradient(circle at 60% 50%, transparent 20%, rgba(255, 255, 255, 0.8) 80%, #ffffff 100%);
                    }
                    .hero-inner {
                        position: relative;
                        z-index: 20;
                        display: flex;
                        height: 100%;
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        align-items: center;
                    }
                    .hero-copy {
                        display: flex;
                        flex-direction: column;
                        max-width: 42rem;
                        gap: 2rem;
                        padding-top: 2.5rem;
                    }
                    .hero-copy > * { animation: slideUp 0.7s ease both; }
                    .hero-copy > :nth-child(2) { animation-delay: 0.1s; }
                    .hero-copy > :nth-child(3) { animation-delay: 0.2s; }
                    .hero-copy > :nth-child(4) { animation-delay: 0.3s; }
                    .hero-badge {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.5rem;
                        border-radius: 9999px;
                        border: 1px solid #e5e5e5;
                        background: rgba(255, 255, 255, 0.5);
                        backdrop-filter: blur(24px);
                        padding: 0.25rem 0.75rem;
                        font-size: 0.75rem;
                        font-weight: 500;
                        color: #525252;
                        text-transform: uppercase;
                        letter-spacing: 0.05em;
                    }
                    .hero-badge .dot {
                        width: 0.375rem;
                        height: 0.375rem;
                        border-radius: 9999px;
                        background: #f97316;
                        animation: pulse 2s infinite;
                    }
                    .hero h1 {
                        font-size: clamp(3.75rem, 9vw, 6rem);
                        font-weight: 700;
                        letter-spacing: -0.05em;
                        line-height: 1;
                        margin: 0;
                    }
                    .hero h1 span {
                        color: transparent;
                        background: linear-gradient(to right, #0a0a0a, #525252, #0a0a0a);
                        background-size: 200% 200%;
                        -webkit-background-clip: text;
                        background-clip: text;
                        animation: gradientShift 6s ease infinite;
                    }
                    .hero-tagline { font-size: 1.25rem; color: #737373; max-width: 28rem; line-height: 1.6; }
                    .hero-actions { display: flex; flex-wrap: wrap; align-items: center; gap: 1rem; }
                    .hero-primary, .hero-secondary {
                        height: 3rem;
                        padding: 0 2rem;
                        border-radius: 9999px;
                        font-weight: 500;
                        cursor: pointer;
                        transition: all 0.2s;
                    }
                    .hero-primary { background: #171717; color: #ffffff; border: none; }
                    .hero-primary:hover { background: #262626; transform: scale(1.05); }
                    .hero-primary:active { transform: scale(0.95); }
                    .hero-secondary { background: transparent; color: #171717; border: 1px solid #e5e5e5; }
                    .hero-secondary:hover { background: #fafafa; border-color: #d4d4d4; }
                    .hero-stats { display: flex; gap: 2rem; padding-top: 1rem; }
                    .hero-stats strong { display: block; font-size: 1.5rem; color: #171717; }
                    .hero-stats small { font-size: 0.875rem; color: #a3a3a3; font-weight: 500; }
                    .hero-stats .divider { width: 1px; height: 3rem; background: #f5f5f5; }
                    @media (min-width: 1024px) {
                        .hero-scene { left: 20%; }
                    }
                    @media (max-width: 768px) {
                        .hero-tagline .wide-only { display: none; }
                    }
                "#}
            </style>
            {
                if props.show_scene {
                    html! {
                        <div class="hero-scene">
                            <DiceScene />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <div class="hero-vignette"></div>

            <div class="hero-inner">
                <div class="hero-copy">
                    <div>
                        <span class="hero-badge">
                            <span class="dot"></span>
                            {"Early Access v1.0"}
                        </span>
                    </div>

                    <div>
                        <h1>{"Do or"}<br/><span>{"Dice."}</span></h1>
                        <p class="hero-tagline">
                            {"A physics-based strategic survival game."}
                            <span class="wide-only">{" Define your fate with every roll in a world of pure chaos and chance."}</span>
                        </p>
                    </div>

                    <div class="hero-actions">
                        <button class="hero-primary" onclick={jump_to(DOWNLOAD_ID)}>{"Start Game ▶"}</button>
                        <button class="hero-secondary" onclick={jump_to(RULES_ID)}>{"Read Rules →"}</button>
                    </div>

                    <div class="hero-stats">
                        <div>
                            <strong>{"10k+"}</strong>
                            <small>{"Active Players"}</small>
                        </div>
                        <div class="divider"></div>
                        <div>
                            <strong>{"4.9"}</strong>
                            <small>{"User Rating"}</small>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
