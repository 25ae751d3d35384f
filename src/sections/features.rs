use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealFrom};
use crate::content::{FeatureCard, FEATURES, FEATURES_ID};
use crate::scroll::stagger_delay;

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    feature: FeatureCard,
    index: usize,
}

#[function_component(FeatureCardView)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let FeatureCardProps { feature, index } = props;

    html! {
        <Reveal
            class="feature-card"
            from={RevealFrom::Below(50.0)}
            duration={0.7}
            delay={stagger_delay(*index, 0.1)}
        >
            <div class="feature-card-inner">
                <div class="feature-card-head">
                    <div class="feature-icon">{feature.icon.glyph()}</div>
                    <span class="feature-index">{format!("0{}", index + 1)}</span>
                </div>
                <h3>{feature.title}</h3>
                <p>{feature.description}</p>
                <div class="feature-line" style={format!("background: {};", feature.gradient.css("to right"))}></div>
            </div>
        </Reveal>
    }
}

#[function_component(FeaturesSection)]
pub fn features_section() -> Html {
    html! {
        <section id={FEATURES_ID} class="features">
            <style>
                {r#"
                    .features {
                        position: relative;
                        padding: 8rem 1.5rem;
                        background: #000000;
                        overflow: hidden;
                    }
                    .features-glow {
                        position: absolute;
                        border-radius: 9999px;
                        pointer-events: none;
                    }
                    .features-glow.one { top: 20%; left: 10%; width: 500px; height: 500px; background: rgba(124, 45, 18, 0.1); filter: blur(120px); }
                    .features-glow.two { bottom: 20%; right: 10%; width: 400px; height: 400px; background: rgba(127, 29, 29, 0.1); filter: blur(100px); }
                    .features-inner { position: relative; z-index: 10; max-width: 80rem; margin: 0 auto; }
                    .features-head {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: flex-end;
                        gap: 2rem;
                        margin-bottom: 6rem;
                    }
                    .kicker {
                        display: block;
                        color: #f97316;
                        font-family: monospace;
                        font-size: 0.75rem;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        margin-bottom: 1rem;
                    }
                    .features h2 {
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 700;
                        color: #ffffff;
                        letter-spacing: -0.025em;
                        line-height: 0.9;
                        margin: 0;
                    }
                    .features h2 span {
                        color: transparent;
                        background: linear-gradient(to right, #fb923c, #dc2626);
                        -webkit-background-clip: text;
                        background-clip: text;
                    }
                    .features-lede { color: #737373; max-width: 24rem; font-size: 0.875rem; line-height: 1.6; }
                    .features-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 2rem;
                    }
                    .feature-card { height: 100%; }
                    .feature-card-inner {
                        position: relative;
                        height: 100%;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        background: #0a0a0a;
                        border: 1px solid rgba(38, 38, 38, 0.5);
                        overflow: hidden;
                        transition: border-color 0.5s;
                        box-sizing: border-box;
                    }
                    .feature-card-inner:hover { border-color: rgba(249, 115, 22, 0.3); }
                    .feature-card-head { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 2rem; }
                    .feature-icon {
                        padding: 0.75rem;
                        border-radius: 1rem;
                        background: rgba(23, 23, 23, 0.5);
                        border: 1px solid #262626;
                        font-size: 1.5rem;
                        transition: transform 0.5s;
                    }
                    .feature-card-inner:hover .feature-icon { transform: scale(1.1); }
                    .feature-index { color: #404040; font-family: monospace; font-size: 0.75rem; letter-spacing: 0.1em; transition: color 0.3s; }
                    .feature-card-inner:hover .feature-index { color: rgba(249, 115, 22, 0.5); }
                    .feature-card-inner h3 { font-size: 1.5rem; font-weight: 700; color: #f5f5f5; margin: 0 0 1rem; }
                    .feature-card-inner p { color: #737373; font-size: 0.875rem; line-height: 1.6; margin: 0; transition: color 0.3s; }
                    .feature-card-inner:hover p { color: #a3a3a3; }
                    .feature-line {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        height: 4px;
                        width: 0;
                        transition: width 0.7s ease-out;
                    }
                    .feature-card-inner:hover .feature-line { width: 100%; }
                "#}
            </style>
            <div class="features-glow one"></div>
            <div class="features-glow two"></div>

            <div class="features-inner">
                <Reveal class="features-head" from={RevealFrom::Below(20.0)} duration={0.8}>
                    <div>
                        <span class="kicker">{"Core Mechanics"}</span>
                        <h2>{"ENGINEERED FOR"}<br/><span>{"CHAOS."}</span></h2>
                    </div>
                    <p class="features-lede">
                        {"Minimal luck. Maximum psychology. The dice decide the action, but you decide the outcome."}
                    </p>
                </Reveal>

                <div class="features-grid">
                    {
                        FEATURES.iter().enumerate().map(|(index, feature)| html! {
                            <FeatureCardView key={feature.title} feature={*feature} {index} />
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
