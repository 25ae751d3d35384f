use chrono::Datelike;
use yew::prelude::*;

use crate::components::logo::Logo;
use crate::config::SiteConfig;
use crate::content::{FEATURES_ID, GAMEPLAY_ID, RULES_ID};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub config: SiteConfig,
}

pub fn copyright_line(year: i32, holder: &str) -> String {
    format!("© {} {}. Built with Python & Pygame.", year, holder)
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let config = &props.config;
    let year = chrono::Utc::now().year();

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        padding: 3rem 1rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.05);
                        background: #0a0a0a;
                        color: #a3a3a3;
                    }
                    .footer-inner {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: space-between;
                        gap: 2rem;
                    }
                    @media (min-width: 768px) {
                        .footer-inner { flex-direction: row; }
                    }
                    .footer-brand { display: flex; align-items: center; gap: 0.75rem; }
                    .footer-brand span { font-weight: 700; color: #fafafa; }
                    .footer-links { display: flex; gap: 2rem; font-size: 0.875rem; }
                    .footer-links a { color: #a3a3a3; text-decoration: none; transition: color 0.2s; }
                    .footer-links a:hover { color: #f97316; }
                    .footer-copy { font-size: 0.875rem; margin: 0; }
                "#}
            </style>
            <div class="footer-inner">
                <div class="footer-brand">
                    <Logo src={config.logo_path.clone()} size={40} />
                    <span>{"DO or DICE"}</span>
                </div>
                <div class="footer-links">
                    <a href={format!("#{}", FEATURES_ID)}>{"Features"}</a>
                    <a href={format!("#{}", GAMEPLAY_ID)}>{"Gameplay"}</a>
                    <a href={format!("#{}", RULES_ID)}>{"Rules"}</a>
                    <a href={config.repo_url.clone()} target="_blank" rel="noopener noreferrer">{"Source"}</a>
                </div>
                <p class="footer-copy">{copyright_line(year, &config.copyright_holder)}</p>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_names_year_and_holder() {
        assert_eq!(
            copyright_line(2026, "DO or DICE"),
            "© 2026 DO or DICE. Built with Python & Pygame."
        );
    }
}
