use log::Level;
use serde::Deserialize;

const SITE_JSON: &str = include_str!("../config/site.json");

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running `trunk serve`
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Values that change between releases of the game build rather than
/// between renders. Scene and animation constants live next to the code
/// that uses them.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub download_url: String,
    pub download_file_name: String,
    pub version: String,
    pub download_size: String,
    pub platform: String,
    pub repo_url: String,
    pub logo_path: String,
    pub copyright_holder: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            download_url: "/DoOrDice.zip".to_string(),
            download_file_name: "DoOrDice.zip".to_string(),
            version: "v0.1.0".to_string(),
            download_size: "~50MB".to_string(),
            platform: "Windows".to_string(),
            repo_url: "https://github.com/Paurakh977/DO-OR-DICE".to_string(),
            logo_path: "/images/logo.png".to_string(),
            copyright_holder: "DO or DICE".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Repository path as shown in the `cd` step of the install commands.
    pub fn repo_dir_name(&self) -> &str {
        self.repo_url
            .trim_end_matches('/')
            .trim_end_matches(".git")
            .rsplit('/')
            .next()
            .unwrap_or_default()
    }

    pub fn clone_url(&self) -> String {
        let url = self.repo_url.trim_end_matches('/');
        if url.ends_with(".git") {
            url.to_string()
        } else {
            format!("{}.git", url)
        }
    }
}

pub fn site() -> SiteConfig {
    match SiteConfig::from_json(SITE_JSON) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Bundled site config is invalid, using defaults: {}", e);
            SiteConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_config_matches_defaults() {
        let parsed = SiteConfig::from_json(SITE_JSON).expect("bundled json parses");
        assert_eq!(parsed, SiteConfig::default());
    }

    #[test]
    fn invalid_json_is_rejected() {
        assert!(SiteConfig::from_json("{\"download_url\": 3}").is_err());
    }

    #[test]
    fn repo_dir_name_strips_suffixes() {
        let mut config = SiteConfig::default();
        assert_eq!(config.repo_dir_name(), "DO-OR-DICE");

        config.repo_url = "https://example.com/org/game.git".to_string();
        assert_eq!(config.repo_dir_name(), "game");
        assert_eq!(config.clone_url(), "https://example.com/org/game.git");

        config.repo_url = "https://example.com/org/game/".to_string();
        assert_eq!(config.repo_dir_name(), "game");
        assert_eq!(config.clone_url(), "https://example.com/org/game.git");
    }
}
