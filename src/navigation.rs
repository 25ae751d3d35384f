use std::rc::Rc;

use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::logo::Logo;
use crate::config::SiteConfig;
use crate::content::{NavLink, NAV_LINKS, SECTION_IDS};
use crate::dom;
use crate::scroll::{is_scrolled_past, stagger_delay, ACTIVE_SECTION_OFFSET};

/// Header state. Only the navigation component owns one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub is_scrolled: bool,
    pub active_section: String,
    pub mobile_menu_open: bool,
}

pub enum NavAction {
    /// Fresh measurements: page offset plus each section's viewport top,
    /// in document order. `None` for sections not in the document.
    Scrolled {
        scroll_y: f64,
        section_tops: Vec<(&'static str, Option<f64>)>,
    },
    ToggleMenu,
    CloseMenu,
}

/// Scans bottom-to-top and returns the first section whose top edge has
/// reached the activation line.
pub fn resolve_active_section<'a>(section_tops: &[(&'a str, Option<f64>)]) -> Option<&'a str> {
    section_tops.iter().rev().find_map(|(id, top)| match top {
        Some(top) if *top <= ACTIVE_SECTION_OFFSET => Some(*id),
        _ => None,
    })
}

impl NavigationState {
    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::Scrolled { scroll_y, section_tops } => {
                self.is_scrolled = is_scrolled_past(scroll_y);
                // No match keeps whatever was active before.
                if let Some(id) = resolve_active_section(&section_tops) {
                    self.active_section = id.to_string();
                }
            }
            NavAction::ToggleMenu => self.mobile_menu_open = !self.mobile_menu_open,
            NavAction::CloseMenu => self.mobile_menu_open = false,
        }
    }

    pub fn is_active(&self, link: &NavLink) -> bool {
        self.active_section == link.anchor_id()
    }
}

impl Reducible for NavigationState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

fn measure_sections() -> Vec<(&'static str, Option<f64>)> {
    SECTION_IDS
        .iter()
        .map(|id| (*id, dom::section_top(id).ok().flatten()))
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub config: SiteConfig,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let state = use_reducer(NavigationState::default);

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let on_scroll: Rc<dyn Fn()> = Rc::new(move || {
                    let Ok(scroll_y) = dom::scroll_y() else {
                        return;
                    };
                    dispatcher.dispatch(NavAction::Scrolled {
                        scroll_y,
                        section_tops: measure_sections(),
                    });
                });
                // Measure once after the first paint, then on every scroll.
                on_scroll();
                let guards = dom::listen_window(&["scroll"], on_scroll)
                    .map_err(|e| log::warn!("Scroll tracking unavailable: {}", e))
                    .ok();
                move || drop(guards)
            },
            (),
        );
    }

    let scroll_to = {
        let dispatcher = state.dispatcher();
        move |href: &'static str| {
            let dispatcher = dispatcher.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                log::debug!("Navigating to {}", href);
                if let Err(err) = dom::scroll_to_anchor(href) {
                    log::warn!("Could not scroll to {}: {}", href, err);
                }
                dispatcher.dispatch(NavAction::CloseMenu);
            })
        }
    };

    let scroll_home = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| {
            if let Err(err) = dom::scroll_to_top() {
                log::warn!("Could not scroll to top: {}", err);
            }
            dispatcher.dispatch(NavAction::CloseMenu);
        })
    };

    let toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            dispatcher.dispatch(NavAction::ToggleMenu);
        })
    };

    let close_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(NavAction::CloseMenu))
    };

    let download_url = props.config.download_url.clone();
    let download_name = props.config.download_file_name.clone();

    html! {
        <>
            <style>
                {r#"
                    @keyframes headerIn {
                        from { transform: translateY(-100px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @keyframes menuItemIn {
                        from { transform: translateY(30px); opacity: 0; }
                        to { transform: translateY(0); opacity: 1; }
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; }
                        to { opacity: 1; }
                    }
                    .site-header {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        background: transparent;
                        transition: all 0.5s ease;
                        animation: headerIn 0.8s cubic-bezier(0.25, 0.46, 0.45, 0.94) both;
                    }
                    .site-header.scrolled {
                        background: rgba(10, 10, 10, 0.8);
                        backdrop-filter: blur(40px);
                        border-bottom: 1px solid rgba(249, 115, 22, 0.1);
                        box-shadow: 0 10px 30px rgba(249, 115, 22, 0.05);
                    }
                    .header-glow {
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        height: 1px;
                        background: linear-gradient(to right, transparent, rgba(249, 115, 22, 0.3), transparent);
                        animation: fadeIn 0.3s ease both;
                    }
                    .header-nav {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1rem;
                        height: 5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        background: none;
                        border: none;
                        cursor: pointer;
                        color: inherit;
                    }
                    .brand img { transition: transform 0.3s; }
                    .brand:hover img { transform: scale(1.1); }
                    .brand-name { font-weight: 700; font-size: 1.125rem; letter-spacing: -0.02em; }
                    .brand-name em { color: #f97316; font-weight: 300; }
                    .desktop-links { display: flex; align-items: center; gap: 0.25rem; }
                    .nav-item {
                        position: relative;
                        padding: 0.625rem 1.25rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        border-radius: 0.5rem;
                        border: 1px solid transparent;
                        background: none;
                        color: #a3a3a3;
                        cursor: pointer;
                        transition: all 0.3s;
                    }
                    .nav-item:hover { color: #fafafa; }
                    .nav-item.active {
                        color: #f97316;
                        background: rgba(249, 115, 22, 0.1);
                        border-color: rgba(249, 115, 22, 0.2);
                    }
                    .nav-divider { width: 1px; height: 1.5rem; background: rgba(255, 255, 255, 0.1); margin: 0 0.75rem; }
                    .get-game {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        padding: 0.5rem 1.25rem;
                        border-radius: 0.5rem;
                        background: #f97316;
                        color: #0a0a0a;
                        font-weight: 600;
                        text-decoration: none;
                        transition: box-shadow 0.3s;
                    }
                    .get-game:hover { box-shadow: 0 10px 20px rgba(249, 115, 22, 0.2); }
                    .menu-toggle {
                        display: none;
                        padding: 0.625rem;
                        background: none;
                        border: none;
                        color: inherit;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                    .mobile-menu {
                        position: fixed;
                        inset: 0;
                        z-index: 40;
                        background: rgba(10, 10, 10, 0.98);
                        backdrop-filter: blur(40px);
                        animation: fadeIn 0.3s ease both;
                    }
                    .mobile-menu nav {
                        position: relative;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        height: 100%;
                        gap: 2rem;
                        padding: 2rem;
                    }
                    .mobile-item {
                        font-size: 2.25rem;
                        font-weight: 700;
                        background: none;
                        border: none;
                        color: #fafafa;
                        cursor: pointer;
                        animation: menuItemIn 0.4s ease both;
                    }
                    .mobile-item:hover { color: #f97316; }
                    .mobile-download {
                        margin-top: 2rem;
                        padding: 1.75rem 2.5rem;
                        font-size: 1.25rem;
                        border-radius: 1rem;
                        background: #f97316;
                        color: #0a0a0a;
                        font-weight: 700;
                        text-decoration: none;
                        animation: menuItemIn 0.4s ease both;
                    }
                    @media (max-width: 768px) {
                        .desktop-links { display: none; }
                        .menu-toggle { display: block; }
                        .brand-name { display: none; }
                    }
                    @media (min-width: 769px) {
                        .mobile-menu { display: none; }
                    }
                "#}
            </style>
            <header class={classes!("site-header", state.is_scrolled.then_some("scrolled"))}>
                {
                    if state.is_scrolled {
                        html! { <div class="header-glow"></div> }
                    } else {
                        html! {}
                    }
                }
                <nav class="header-nav">
                    <button class="brand" onclick={scroll_home}>
                        <Logo src={props.config.logo_path.clone()} size={40} />
                        <span class="brand-name">{"DO "}<em>{"or"}</em>{" DICE"}</span>
                    </button>

                    <div class="desktop-links">
                        {
                            NAV_LINKS.iter().map(|link| {
                                html! {
                                    <button
                                        key={link.href}
                                        class={classes!("nav-item", state.is_active(link).then_some("active"))}
                                        onclick={scroll_to(link.href)}
                                    >
                                        {link.label}
                                    </button>
                                }
                            }).collect::<Html>()
                        }
                        <div class="nav-divider"></div>
                        <a href={download_url.clone()} download={download_name.clone()} class="get-game">
                            {"⬇ Get Game"}
                        </a>
                    </div>

                    <button class="menu-toggle" aria-label="Toggle menu" onclick={toggle_menu}>
                        { if state.mobile_menu_open { "✕" } else { "☰" } }
                    </button>
                </nav>
            </header>

            {
                if state.mobile_menu_open {
                    html! {
                        <div class="mobile-menu">
                            <nav>
                                {
                                    NAV_LINKS.iter().enumerate().map(|(index, link)| {
                                        html! {
                                            <button
                                                key={link.href}
                                                class="mobile-item"
                                                style={format!("animation-delay: {}s;", stagger_delay(index, 0.1))}
                                                onclick={scroll_to(link.href)}
                                            >
                                                {link.label}
                                            </button>
                                        }
                                    }).collect::<Html>()
                                }
                                <a
                                    href={download_url}
                                    download={download_name}
                                    class="mobile-download"
                                    style="animation-delay: 0.4s;"
                                    onclick={close_menu}
                                >
                                    {"⬇ Download Game"}
                                </a>
                            </nav>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scrolled(state: &mut NavigationState, scroll_y: f64, tops: &[(&'static str, Option<f64>)]) {
        state.apply(NavAction::Scrolled {
            scroll_y,
            section_tops: tops.to_vec(),
        });
    }

    #[test]
    fn initial_state_is_top_of_page() {
        let mut state = NavigationState::default();
        scrolled(
            &mut state,
            0.0,
            &[("features", Some(900.0)), ("gameplay", Some(1900.0)), ("rules", Some(2900.0)), ("download", Some(3900.0))],
        );
        assert!(!state.is_scrolled);
        assert_eq!(state.active_section, "");
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn last_qualifying_section_wins() {
        let tops = [("a", Some(-800.0)), ("b", Some(-100.0)), ("c", Some(150.0)), ("d", Some(151.0))];
        assert_eq!(resolve_active_section(&tops), Some("c"));
    }

    #[test]
    fn missing_sections_are_skipped() {
        let tops = [("a", Some(0.0)), ("b", None), ("c", Some(400.0))];
        assert_eq!(resolve_active_section(&tops), Some("a"));
        assert_eq!(resolve_active_section(&[("a", None)]), None);
    }

    #[test]
    fn no_match_keeps_previous_active() {
        let mut state = NavigationState::default();
        scrolled(&mut state, 1200.0, &[("features", Some(20.0)), ("gameplay", Some(900.0))]);
        assert_eq!(state.active_section, "features");

        scrolled(&mut state, 10.0, &[("features", Some(600.0)), ("gameplay", Some(1500.0))]);
        assert_eq!(state.active_section, "features");
        assert!(!state.is_scrolled);
    }

    #[test]
    fn scroll_threshold_follows_offset() {
        let mut state = NavigationState::default();
        scrolled(&mut state, 50.0, &[]);
        assert!(!state.is_scrolled);
        scrolled(&mut state, 51.0, &[]);
        assert!(state.is_scrolled);
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut state = NavigationState::default();
        state.apply(NavAction::ToggleMenu);
        assert!(state.mobile_menu_open);
        state.apply(NavAction::ToggleMenu);
        assert!(!state.mobile_menu_open);

        state.apply(NavAction::ToggleMenu);
        state.apply(NavAction::CloseMenu);
        assert!(!state.mobile_menu_open);
        state.apply(NavAction::CloseMenu);
        assert!(!state.mobile_menu_open);
    }

    #[test]
    fn reducer_reuses_unchanged_state() {
        let state = Rc::new(NavigationState::default());
        let next = state.clone().reduce(NavAction::CloseMenu);
        assert!(Rc::ptr_eq(&state, &next));

        let opened = state.clone().reduce(NavAction::ToggleMenu);
        assert!(!Rc::ptr_eq(&state, &opened));
        assert!(opened.mobile_menu_open);
    }

    #[test]
    fn active_link_matches_anchor() {
        let state = NavigationState {
            active_section: "rules".to_string(),
            ..Default::default()
        };
        let active: Vec<&str> = NAV_LINKS.iter().filter(|l| state.is_active(l)).map(|l| l.label).collect();
        assert_eq!(active, vec!["Rules"]);
    }
}
