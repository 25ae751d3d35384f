use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealFrom};
use crate::content::{GameplayStep, GAMEPLAY_ID, GAMEPLAY_STEPS, VP_METHODS};
use crate::hooks::use_scroll_state;
use crate::scroll::{map_range, stagger_delay};

/// Slice of section progress over which the timeline fills.
const TIMELINE_START: f64 = 0.1;
const TIMELINE_END: f64 = 0.6;

pub fn timeline_fill(section_progress: f64) -> f64 {
    map_range(section_progress, TIMELINE_START, TIMELINE_END)
}

#[derive(Properties, PartialEq)]
struct StepCardProps {
    step: GameplayStep,
    index: usize,
}

#[function_component(StepCard)]
fn step_card(props: &StepCardProps) -> Html {
    let StepCardProps { step, index } = props;
    let side = if index % 2 == 0 { "left" } else { "right" };

    html! {
        <div class={classes!("step-slot", side)}>
            <Reveal
                from={RevealFrom::alternating(*index, 100.0)}
                duration={0.8}
                delay={stagger_delay(*index, 0.2)}
            >
                <div class="step-card">
                    <span class="step-number">{step.step}</span>
                    <div class="step-body">
                        <h3>{step.title}</h3>
                        <span class="step-subtitle">{step.subtitle}</span>
                        <p>{step.description}</p>
                    </div>
                    <div class="step-corner"></div>
                </div>
            </Reveal>
        </div>
    }
}

#[function_component(GameplaySection)]
pub fn gameplay_section() -> Html {
    let node = use_node_ref();
    let scroll = use_scroll_state(node.clone());
    let fill = timeline_fill(scroll.scroll_progress) * 100.0;

    html! {
        <section id={GAMEPLAY_ID} class="gameplay" ref={node}>
            <style>
                {r#"
                    .gameplay {
                        position: relative;
                        padding: 8rem 1rem;
                        overflow: hidden;
                        background: #0a0a0a;
                        color: #fafafa;
                    }
                    .grid-pattern {
                        position: absolute;
                        inset: 0;
                        opacity: 0.02;
                        background-image: linear-gradient(#fafafa 1px, transparent 1px), linear-gradient(90deg, #fafafa 1px, transparent 1px);
                        background-size: 60px 60px;
                        pointer-events: none;
                    }
                    .timeline { position: relative; }
                    .timeline-track {
                        position: absolute;
                        left: 50%;
                        top: 0;
                        bottom: 0;
                        width: 1px;
                        background: rgba(255, 255, 255, 0.1);
                        transform: translateX(-50%);
                    }
                    .timeline-fill {
                        position: absolute;
                        top: 0;
                        left: 0;
                        width: 100%;
                        background: linear-gradient(to bottom, #f97316, rgba(249, 115, 22, 0.2));
                    }
                    .timeline-marker {
                        position: absolute;
                        left: 50%;
                        width: 0.75rem;
                        height: 0.75rem;
                        border-radius: 9999px;
                        background: #f97316;
                        box-shadow: 0 0 12px rgba(249, 115, 22, 0.6);
                        transform: translate(-50%, -50%);
                    }
                    .steps { display: flex; flex-direction: column; gap: 4rem; }
                    .step-slot { width: 50%; box-sizing: border-box; }
                    .step-slot.left { padding-right: 4rem; }
                    .step-slot.right { margin-left: auto; padding-left: 4rem; }
                    .step-card {
                        position: relative;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: linear-gradient(to bottom right, rgba(23, 23, 23, 0.5), transparent);
                        backdrop-filter: blur(4px);
                        transition: border-color 0.5s;
                    }
                    .step-card:hover { border-color: rgba(249, 115, 22, 0.3); }
                    .step-number {
                        position: absolute;
                        top: -1.5rem;
                        left: -0.5rem;
                        font-size: 6rem;
                        font-weight: 700;
                        color: transparent;
                        background: linear-gradient(to bottom, rgba(249, 115, 22, 0.4), transparent);
                        -webkit-background-clip: text;
                        background-clip: text;
                    }
                    .step-body { position: relative; z-index: 10; padding-top: 2rem; }
                    .step-body h3 { font-size: 2.25rem; font-weight: 700; margin: 0 0 0.25rem; }
                    .step-subtitle { font-size: 1.875rem; font-weight: 300; color: #f97316; }
                    .step-body p { color: #a3a3a3; margin-top: 1rem; line-height: 1.6; }
                    .step-corner {
                        position: absolute;
                        bottom: 1rem;
                        right: 1rem;
                        width: 3rem;
                        height: 3rem;
                        border-right: 2px solid rgba(249, 115, 22, 0.2);
                        border-bottom: 2px solid rgba(249, 115, 22, 0.2);
                        border-bottom-right-radius: 1rem;
                        opacity: 0;
                        transition: opacity 0.5s;
                    }
                    .step-card:hover .step-corner { opacity: 1; }
                    .vp-block { margin-top: 8rem; }
                    .vp-block h3 { font-size: 2.25rem; font-weight: 700; text-align: center; margin-bottom: 3rem; }
                    .vp-block h3 span { color: #f97316; }
                    .vp-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 1rem; }
                    .vp-card {
                        position: relative;
                        padding: 1.5rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        overflow: hidden;
                        transition: transform 0.3s;
                    }
                    .vp-card:hover { transform: scale(1.02) translateY(-5px); }
                    .vp-watermark {
                        position: absolute;
                        top: -1rem;
                        right: -1rem;
                        font-size: 4.5rem;
                        font-weight: 700;
                        color: rgba(250, 250, 250, 0.05);
                        transition: color 0.3s;
                    }
                    .vp-card:hover .vp-watermark { color: rgba(249, 115, 22, 0.1); }
                    .vp-points { font-size: 2.25rem; font-weight: 700; color: #f97316; }
                    .vp-card p { margin: 0.5rem 0 0; font-weight: 500; }
                    @media (max-width: 1024px) {
                        .timeline-track, .timeline-marker { display: none; }
                        .step-slot, .step-slot.left, .step-slot.right { width: 100%; padding: 0; margin: 0; }
                        .steps { gap: 2rem; }
                    }
                "#}
            </style>
            <div class="grid-pattern"></div>

            <div class="section-inner">
                <Reveal class="section-head" from={RevealFrom::Fade} duration={0.8}>
                    <span class="section-kicker">{"How to Play"}</span>
                    <h2>{"The Flow"}</h2>
                </Reveal>

                <div class="timeline">
                    <div class="timeline-track">
                        <div class="timeline-fill" style={format!("height: {:.2}%;", fill)}></div>
                    </div>
                    <div class="timeline-marker" style={format!("top: {:.2}%;", fill)}></div>

                    <div class="steps">
                        {
                            GAMEPLAY_STEPS.iter().enumerate().map(|(index, step)| html! {
                                <StepCard key={step.step} step={*step} {index} />
                            }).collect::<Html>()
                        }
                    </div>
                </div>

                <Reveal class="vp-block" from={RevealFrom::Below(50.0)} duration={0.8} margin="-100px">
                    <h3>{"Earning "}<span>{"Victory Points"}</span></h3>
                    <div class="vp-grid">
                        {
                            VP_METHODS.iter().enumerate().map(|(index, item)| html! {
                                <Reveal key={item.method} from={RevealFrom::Below(30.0)} duration={0.5} delay={stagger_delay(index, 0.1)}>
                                    <div class="vp-card" style={format!("background: {};", item.gradient.css("to bottom right"))}>
                                        <span class="vp-watermark">{"VP"}</span>
                                        <span class="vp-points">{item.points}</span>
                                        <p>{item.method}</p>
                                    </div>
                                </Reveal>
                            }).collect::<Html>()
                        }
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::section_progress;

    #[test]
    fn timeline_is_empty_before_and_full_after() {
        assert_eq!(timeline_fill(0.0), 0.0);
        assert_eq!(timeline_fill(TIMELINE_START), 0.0);
        assert_eq!(timeline_fill(TIMELINE_END), 1.0);
        assert_eq!(timeline_fill(1.0), 1.0);
    }

    #[test]
    fn timeline_follows_scroll_both_ways() {
        let viewport = 900.0;
        let height = 2400.0;
        let fills: Vec<f64> = (0..=70)
            .map(|i| timeline_fill(section_progress(viewport - i as f64 * 50.0, height, viewport)))
            .collect();
        assert!(fills.windows(2).all(|w| w[1] >= w[0]));
        assert_eq!(*fills.last().expect("non-empty"), 1.0);

        // Scrolling back up walks the same values in reverse.
        let back: Vec<f64> = (0..=70)
            .rev()
            .map(|i| timeline_fill(section_progress(viewport - i as f64 * 50.0, height, viewport)))
            .collect();
        assert!(back.windows(2).all(|w| w[1] <= w[0]));
        assert_eq!(back.last().copied(), Some(0.0));
    }
}
