use yew::prelude::*;

use crate::components::reveal::{Reveal, RevealFrom};
use crate::content::{
    DiceEffect, DICE_EFFECTS, FALLEN_EFFECTS, FALLEN_NOTE, RANKING_PRIORITY, RULES_ID, SETUP_VALUES,
    WIN_CONDITIONS,
};
use crate::scroll::stagger_delay;

#[derive(Properties, PartialEq)]
struct DiceEffectRowProps {
    dice: DiceEffect,
    index: usize,
}

#[function_component(DiceEffectRow)]
fn dice_effect_row(props: &DiceEffectRowProps) -> Html {
    let DiceEffectRowProps { dice, index } = props;
    let hovered = use_state(|| false);

    let onmouseenter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(true))
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(false))
    };
    let color = format!("color: {};", dice.color);

    html! {
        <Reveal from={RevealFrom::Left(50.0)} duration={0.6} delay={stagger_delay(*index, 0.1)}>
            <div
                class={classes!("effect-row", hovered.then_some("hovered"))}
                {onmouseenter}
                {onmouseleave}
            >
                <div class="effect-face"><span style={color.clone()}>{dice.face.to_string()}</span></div>
                <div class="effect-info">
                    <div class="effect-title">
                        <span class="effect-name" style={color.clone()}>{dice.name}</span>
                        <span class="effect-desc">{dice.description}</span>
                    </div>
                    <span class="effect-target">{dice.target}</span>
                </div>
                <span class="effect-value" style={color}>{dice.effect}</span>
            </div>
        </Reveal>
    }
}

fn heading(label: &'static str) -> Html {
    html! {
        <h3 class="rules-heading">
            <span class="rule-bar"></span>
            {label}
        </h3>
    }
}

#[function_component(RulesSection)]
pub fn rules_section() -> Html {
    html! {
        <section id={RULES_ID} class="rules">
            <style>
                {r#"
                    .rules {
                        position: relative;
                        padding: 8rem 1rem;
                        overflow: hidden;
                        background: linear-gradient(to bottom, #0a0a0a, #141414, #0a0a0a);
                        color: #fafafa;
                    }
                    .rules-columns {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(340px, 1fr));
                        gap: 4rem;
                    }
                    .rules-column { display: flex; flex-direction: column; gap: 3rem; }
                    .rules-heading { display: flex; align-items: center; gap: 0.75rem; font-size: 1.5rem; font-weight: 700; margin: 0 0 1.5rem; }
                    .rules-heading small { font-size: 0.875rem; font-weight: 400; color: #a3a3a3; }
                    .rule-bar { width: 2rem; height: 1px; background: #f97316; }
                    .rule-bar.muted { background: #a3a3a3; }
                    .rule-list { display: flex; flex-direction: column; gap: 1rem; }
                    .setup-row {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        background: rgba(23, 23, 23, 0.3);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                    }
                    .setup-value { font-size: 2.25rem; font-weight: 700; color: #f97316; width: 4rem; }
                    .setup-row p { margin: 0; }
                    .setup-row .desc { font-size: 0.875rem; color: #a3a3a3; }
                    .victory-card {
                        padding: 1.5rem;
                        border-radius: 1rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: linear-gradient(to bottom right, rgba(249, 115, 22, 0.05), transparent);
                    }
                    .victory-card ul { list-style: none; padding: 0; margin: 0 0 1.5rem; color: #a3a3a3; }
                    .victory-card li { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 0.5rem; }
                    .victory-card li::before { content: ""; width: 0.375rem; height: 0.375rem; border-radius: 9999px; background: #f97316; }
                    .ranking { padding-top: 1rem; border-top: 1px solid rgba(255, 255, 255, 0.1); }
                    .ranking .label { font-size: 0.875rem; color: #f97316; margin: 0 0 0.5rem; }
                    .ranking .order { font-size: 0.75rem; color: #a3a3a3; line-height: 1.6; margin: 0; }
                    .effect-list { display: flex; flex-direction: column; gap: 0.75rem; }
                    .effect-row {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        transition: all 0.3s;
                    }
                    .effect-row.hovered { border-color: rgba(249, 115, 22, 0.4); background: rgba(249, 115, 22, 0.05); }
                    .effect-face {
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        font-weight: 700;
                        background: #171717;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        transition: all 0.3s;
                    }
                    .effect-row.hovered .effect-face { border-color: rgba(249, 115, 22, 0.5); transform: scale(1.1); }
                    .effect-info { flex: 1; min-width: 0; }
                    .effect-title { display: flex; align-items: center; gap: 0.75rem; }
                    .effect-name { font-weight: 600; }
                    .effect-desc { font-size: 0.75rem; color: #a3a3a3; }
                    .effect-target { font-size: 0.875rem; color: #a3a3a3; }
                    .effect-value { font-size: 1.125rem; font-weight: 700; font-variant-numeric: tabular-nums; }
                    .shadow-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.75rem; }
                    .shadow-card {
                        padding: 1rem;
                        border-radius: 0.75rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: rgba(23, 23, 23, 0.3);
                        text-align: center;
                    }
                    .shadow-card strong { display: block; font-size: 1.5rem; margin-bottom: 0.25rem; }
                    .shadow-card span { font-size: 0.75rem; }
                    .shadow-note { font-size: 0.75rem; color: #a3a3a3; margin-top: 1rem; font-style: italic; }
                    @media (max-width: 640px) {
                        .effect-desc { display: none; }
                    }
                "#}
            </style>
            <div class="section-inner">
                <Reveal class="section-head" from={RevealFrom::Fade} duration={0.8}>
                    <span class="section-kicker">{"Master the Game"}</span>
                    <h2>{"The Rules"}</h2>
                </Reveal>

                <div class="rules-columns">
                    <div class="rules-column">
                        <Reveal from={RevealFrom::Below(30.0)}>
                            { heading("Setup") }
                            <div class="rule-list">
                                {
                                    SETUP_VALUES.iter().enumerate().map(|(i, item)| html! {
                                        <Reveal key={item.label} from={RevealFrom::Left(30.0)} delay={stagger_delay(i, 0.1)}>
                                            <div class="setup-row">
                                                <span class="setup-value">{item.value}</span>
                                                <div>
                                                    <p>{item.label}</p>
                                                    <p class="desc">{item.desc}</p>
                                                </div>
                                            </div>
                                        </Reveal>
                                    }).collect::<Html>()
                                }
                            </div>
                        </Reveal>

                        <Reveal from={RevealFrom::Below(30.0)}>
                            { heading("Victory") }
                            <div class="victory-card">
                                <p>{"Game ends when:"}</p>
                                <ul>
                                    { for WIN_CONDITIONS.iter().map(|condition| html! { <li>{*condition}</li> }) }
                                </ul>
                                <div class="ranking">
                                    <p class="label">{"Ranking Priority:"}</p>
                                    <p class="order">{RANKING_PRIORITY.join(" → ")}</p>
                                </div>
                            </div>
                        </Reveal>
                    </div>

                    <div class="rules-column">
                        <Reveal from={RevealFrom::Below(30.0)}>
                            { heading("Dice Effects") }
                            <div class="effect-list">
                                {
                                    DICE_EFFECTS.iter().enumerate().map(|(index, dice)| html! {
                                        <DiceEffectRow key={dice.face.to_string()} dice={*dice} {index} />
                                    }).collect::<Html>()
                                }
                            </div>
                        </Reveal>

                        <Reveal from={RevealFrom::Below(30.0)}>
                            <h3 class="rules-heading">
                                <span class="rule-bar muted"></span>
                                {"Shadow Effects"}
                                <small>{"(Fallen)"}</small>
                            </h3>
                            <div class="shadow-grid">
                                {
                                    FALLEN_EFFECTS.iter().enumerate().map(|(i, effect)| html! {
                                        <Reveal key={effect.roll} from={RevealFrom::Scale(0.9)} delay={stagger_delay(i, 0.1)}>
                                            <div class="shadow-card">
                                                <strong>{effect.roll}</strong>
                                                <span style={format!("color: {};", effect.color)}>{effect.effect}</span>
                                            </div>
                                        </Reveal>
                                    }).collect::<Html>()
                                }
                            </div>
                            <p class="shadow-note">{FALLEN_NOTE}</p>
                        </Reveal>
                    </div>
                </div>
            </div>
        </section>
    }
}
