use gloo_timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::logo::Logo;
use crate::components::reveal::{reveal_style, RevealFrom};
use crate::config::SiteConfig;
use crate::content::{install_script, install_steps, Icon, DOWNLOAD_ID, REQUIREMENTS};
use crate::dom;
use crate::hooks::use_in_view;

const COPIED_RESET_MS: u32 = 2_000;

/// At most one pending callback. Arming again drops, and so cancels, the
/// earlier timeout.
#[derive(Default)]
pub struct ResetTimer(Option<Timeout>);

impl ResetTimer {
    pub fn arm<F>(&mut self, millis: u32, callback: F)
    where
        F: FnOnce() + 'static,
    {
        self.0 = Some(Timeout::new(millis, callback));
    }
}

#[derive(Properties, PartialEq)]
pub struct DownloadProps {
    pub config: SiteConfig,
}

#[function_component(DownloadSection)]
pub fn download_section(props: &DownloadProps) -> Html {
    let config = &props.config;
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), "-100px");
    let copied = use_state(|| false);
    let reset_timer = use_mut_ref(ResetTimer::default);

    let steps = install_steps(&config.clone_url(), config.repo_dir_name());
    let script = install_script(&steps);

    let on_copy = {
        let copied = copied.clone();
        Callback::from(move |_: MouseEvent| {
            let copied = copied.clone();
            let reset_timer = reset_timer.clone();
            let script = script.clone();
            spawn_local(async move {
                match dom::copy_to_clipboard(&script).await {
                    Ok(()) => {
                        copied.set(true);
                        let reset = copied.clone();
                        reset_timer
                            .borrow_mut()
                            .arm(COPIED_RESET_MS, move || reset.set(false));
                    }
                    Err(e) => log::warn!("Copy to clipboard failed: {}", e),
                }
            });
        })
    };

    // One trigger for the whole block, children staggered behind it.
    let staged = |from: RevealFrom, duration: f64, delay: f64| reveal_style(from, in_view, duration, delay);

    html! {
        <section id={DOWNLOAD_ID} class="download">
            <style>
                {r#"
                    .download {
                        position: relative;
                        padding: 7rem 1rem;
                        overflow: hidden;
                        background: linear-gradient(to top, rgba(249, 115, 22, 0.08), #0a0a0a 60%);
                        color: #fafafa;
                    }
                    .download-inner {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        text-align: center;
                    }
                    .download-logo { margin-bottom: 3rem; opacity: 0.9; }
                    .download h2 { font-size: clamp(2.25rem, 5vw, 3rem); font-weight: 600; letter-spacing: -0.025em; margin: 0 0 1.5rem; }
                    .download-lede { font-size: 1.125rem; color: #a3a3a3; max-width: 36rem; margin: 0 auto 2.5rem; }
                    .download-button {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 1.5rem 2rem;
                        font-size: 1.125rem;
                        font-weight: 600;
                        border-radius: 9999px;
                        background: #f97316;
                        color: #0a0a0a;
                        text-decoration: none;
                    }
                    .download-button:hover { background: rgba(249, 115, 22, 0.9); }
                    .download-meta { font-size: 0.875rem; color: #a3a3a3; margin-top: 1.5rem; display: flex; gap: 0.75rem; justify-content: center; }
                    .download-meta .sep { color: #f97316; }
                    .download-meta .free { color: #4ade80; font-weight: 500; }
                    .requirements { display: flex; flex-wrap: wrap; justify-content: center; gap: 1.5rem; margin: 4rem 0; }
                    .requirement {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        padding: 0.75rem 1.5rem;
                        border-radius: 0.75rem;
                        background: rgba(23, 23, 23, 0.3);
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        transition: all 0.3s;
                        text-align: left;
                    }
                    .requirement:hover { border-color: rgba(249, 115, 22, 0.3); transform: scale(1.05) translateY(-2px); }
                    .requirement .label { font-size: 0.75rem; color: #a3a3a3; text-transform: uppercase; letter-spacing: 0.05em; margin: 0; }
                    .requirement .value { font-weight: 500; margin: 0; }
                    .source-card {
                        width: 100%;
                        max-width: 42rem;
                        padding: 2rem;
                        border-radius: 1.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        background: linear-gradient(to bottom right, rgba(23, 23, 23, 0.4), transparent);
                        backdrop-filter: blur(24px);
                        box-sizing: border-box;
                    }
                    .source-card h4 { font-size: 1.25rem; font-weight: 700; margin: 0 0 1rem; }
                    .source-card .hint { font-size: 0.875rem; color: #a3a3a3; margin-bottom: 1.5rem; }
                    .commands {
                        position: relative;
                        background: rgba(10, 10, 10, 0.6);
                        border-radius: 1rem;
                        padding: 1.25rem;
                        text-align: left;
                        font-family: monospace;
                        font-size: 0.875rem;
                        overflow-x: auto;
                        border: 1px solid rgba(255, 255, 255, 0.1);
                        color: #a3a3a3;
                    }
                    .commands p { margin: 0 0 0.5rem; }
                    .commands .program { color: #f97316; font-weight: 600; }
                    .copy-button {
                        position: absolute;
                        top: 0.75rem;
                        right: 0.75rem;
                        padding: 0.25rem 0.75rem;
                        border-radius: 0.5rem;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        background: transparent;
                        color: #a3a3a3;
                        font-size: 0.75rem;
                        cursor: pointer;
                    }
                    .copy-button.copied { color: #4ade80; border-color: rgba(74, 222, 128, 0.4); }
                    .repo-link { display: inline-flex; gap: 0.5rem; margin-top: 1.5rem; font-size: 0.875rem; color: #a3a3a3; text-decoration: none; transition: color 0.3s; }
                    .repo-link:hover { color: #f97316; }
                "#}
            </style>
            <div class="download-inner" ref={node}>
                <div class="download-logo" style={staged(RevealFrom::Scale(0.8), 0.8, 0.2)}>
                    <Logo src={config.logo_path.clone()} size={140} />
                </div>

                <span class="section-kicker" style={staged(RevealFrom::Below(20.0), 0.6, 0.3)}>{"Download"}</span>
                <h2 style={staged(RevealFrom::Below(30.0), 0.8, 0.4)}>{"Ready to roll?"}</h2>
                <p class="download-lede" style={staged(RevealFrom::Fade, 0.8, 0.5)}>
                    {"Download the latest build and start playing with your crew."}
                </p>

                <div style={staged(RevealFrom::Below(20.0), 0.6, 0.6)}>
                    <a
                        href={config.download_url.clone()}
                        download={config.download_file_name.clone()}
                        class="download-button"
                    >
                        {Icon::Download.glyph()}
                        {format!(" Download ({})", config.platform)}
                    </a>
                    <p class="download-meta">
                        <span>{config.version.clone()}</span>
                        <span class="sep">{"•"}</span>
                        <span class="free">{"Free to play"}</span>
                        <span class="sep">{"•"}</span>
                        <span>{config.download_size.clone()}</span>
                    </p>
                </div>

                <div class="requirements" style={staged(RevealFrom::Below(20.0), 0.6, 0.7)}>
                    {
                        REQUIREMENTS.iter().map(|req| html! {
                            <div key={req.label} class="requirement">
                                <span>{req.icon.glyph()}</span>
                                <div>
                                    <p class="label">{req.label}</p>
                                    <p class="value">{req.value}</p>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </div>

                <div class="source-card" style={staged(RevealFrom::Fade, 0.8, 0.8)}>
                    <h4>{Icon::Github.glyph()}{" Build from Source"}</h4>
                    <p class="hint">{"Clone and run with Python for development"}</p>
                    <div class="commands">
                        <button
                            class={classes!("copy-button", (*copied).then_some("copied"))}
                            onclick={on_copy}
                        >
                            { if *copied { "Copied" } else { "Copy" } }
                        </button>
                        {
                            steps.iter().map(|step| html! {
                                <p><span class="program">{step.program}</span>{format!(" {}", step.args)}</p>
                            }).collect::<Html>()
                        }
                    </div>
                    <a href={config.repo_url.clone()} target="_blank" rel="noopener noreferrer" class="repo-link">
                        {Icon::Github.glyph()}{" View on GitHub →"}
                    </a>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn rearming_pushes_the_reset_back() {
        let first = Rc::new(Cell::new(false));
        let second = Rc::new(Cell::new(false));
        let mut timer = ResetTimer::default();

        {
            let first = first.clone();
            timer.arm(100, move || first.set(true));
        }
        TimeoutFuture::new(50).await;
        {
            let second = second.clone();
            timer.arm(100, move || second.set(true));
        }

        TimeoutFuture::new(80).await;
        assert!(!first.get());
        assert!(!second.get());

        TimeoutFuture::new(100).await;
        assert!(!first.get());
        assert!(second.get());
    }
}
