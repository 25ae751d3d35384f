//! Copy and numbers shown on the page. Built once, never mutated.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

impl NavLink {
    pub fn anchor_id(&self) -> &'static str {
        self.href.trim_start_matches('#')
    }
}

/// Menu order is page order.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink { href: "#features", label: "Features" },
    NavLink { href: "#gameplay", label: "How to Play" },
    NavLink { href: "#rules", label: "Rules" },
    NavLink { href: "#download", label: "Download" },
];

pub const FEATURES_ID: &str = "features";
pub const GAMEPLAY_ID: &str = "gameplay";
pub const RULES_ID: &str = "rules";
pub const DOWNLOAD_ID: &str = "download";

/// Anchor ids in the order the sections are mounted.
pub const SECTION_IDS: [&str; 4] = [FEATURES_ID, GAMEPLAY_ID, RULES_ID, DOWNLOAD_ID];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Users,
    Dna,
    Trophy,
    Skull,
    Activity,
    Star,
    Monitor,
    Cpu,
    HardDrive,
    Github,
    Download,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Users => "👥",
            Icon::Dna => "🧬",
            Icon::Trophy => "🏆",
            Icon::Skull => "💀",
            Icon::Activity => "⚡",
            Icon::Star => "⭐",
            Icon::Monitor => "🖥️",
            Icon::Cpu => "🐍",
            Icon::HardDrive => "💾",
            Icon::Github => "🐙",
            Icon::Download => "⬇",
        }
    }
}

/// Two-stop gradient, `from` then `to`, as CSS colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
    pub from: &'static str,
    pub to: &'static str,
}

impl Gradient {
    pub fn css(&self, angle: &str) -> String {
        format!("linear-gradient({}, {}, {})", angle, self.from, self.to)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub gradient: Gradient,
}

pub const FEATURES: [FeatureCard; 6] = [
    FeatureCard {
        title: "5-Player Chaos",
        description: "Balanced ecosystem. Every decision creates ripples. 1 vs 4 or free-for-all?",
        icon: Icon::Users,
        gradient: Gradient { from: "#fb923c", to: "#dc2626" },
    },
    FeatureCard {
        title: "Tactical Dice",
        description: "Six unique faces. Attack, heal, steal, or risk it all for a Power Move.",
        icon: Icon::Dna,
        gradient: Gradient { from: "#fbbf24", to: "#ea580c" },
    },
    FeatureCard {
        title: "Victory Points",
        description: "Survival is currency. Eliminate foes or outlast them to stack VP.",
        icon: Icon::Trophy,
        gradient: Gradient { from: "#facc15", to: "#d97706" },
    },
    FeatureCard {
        title: "Fallen Ghosts",
        description: "Death awaits, but it is not the end. Haunt the living from the shadows.",
        icon: Icon::Skull,
        gradient: Gradient { from: "#ef4444", to: "#881337" },
    },
    FeatureCard {
        title: "Live Reaction",
        description: "No downtime. Defend yourself even when it's not your turn.",
        icon: Icon::Activity,
        gradient: Gradient { from: "#fdba74", to: "#ef4444" },
    },
    FeatureCard {
        title: "Kingmaker",
        description: "The Fallen decide the winner. Bargain for your life.",
        icon: Icon::Star,
        gradient: Gradient { from: "#fb7185", to: "#b91c1c" },
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameplayStep {
    pub step: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
}

pub const GAMEPLAY_STEPS: [GameplayStep; 4] = [
    GameplayStep {
        step: "01",
        title: "Roll",
        subtitle: "the Dice",
        description: "On your turn, roll a standard 6-sided dice. Each face triggers a unique effect that could change everything.",
    },
    GameplayStep {
        step: "02",
        title: "Apply",
        subtitle: "Effects",
        description: "Execute your dice result - attack enemies, heal yourself, or steal victory points from opponents.",
    },
    GameplayStep {
        step: "03",
        title: "Survive",
        subtitle: "Rounds",
        description: "Earn +1 VP for surviving each round. Stay alive to maximize your points and dominate the leaderboard.",
    },
    GameplayStep {
        step: "04",
        title: "Become",
        subtitle: "Fallen",
        description: "At 0 HP, become a Fallen Player. Death isn't the end - you still roll and influence the living.",
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VpMethod {
    pub method: &'static str,
    pub points: &'static str,
    pub gradient: Gradient,
}

pub const VP_METHODS: [VpMethod; 4] = [
    VpMethod {
        method: "Survive a round",
        points: "+1",
        gradient: Gradient { from: "rgba(34, 197, 94, 0.2)", to: "rgba(34, 197, 94, 0.05)" },
    },
    VpMethod {
        method: "Eliminate player",
        points: "+2",
        gradient: Gradient { from: "rgba(239, 68, 68, 0.2)", to: "rgba(239, 68, 68, 0.05)" },
    },
    VpMethod {
        method: "Pickpocket roll",
        points: "+1",
        gradient: Gradient { from: "rgba(234, 179, 8, 0.2)", to: "rgba(234, 179, 8, 0.05)" },
    },
    VpMethod {
        method: "Power Move",
        points: "+3",
        gradient: Gradient { from: "rgba(249, 115, 22, 0.2)", to: "rgba(249, 115, 22, 0.05)" },
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiceEffect {
    pub face: u8,
    pub name: &'static str,
    pub effect: &'static str,
    pub target: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

pub const DICE_EFFECTS: [DiceEffect; 6] = [
    DiceEffect { face: 1, name: "Backfire", effect: "-3 HP", target: "Self", color: "#f87171", description: "You hurt yourself" },
    DiceEffect { face: 2, name: "Jab", effect: "-2 HP", target: "Target", color: "#fb923c", description: "Quick strike" },
    DiceEffect { face: 3, name: "Pickpocket", effect: "+1 VP", target: "Steal", color: "#facc15", description: "Steal from any" },
    DiceEffect { face: 4, name: "Strike", effect: "-4 HP", target: "Target", color: "#f97316", description: "Powerful blow" },
    DiceEffect { face: 5, name: "Recover", effect: "+3 HP", target: "Self", color: "#4ade80", description: "Heal yourself" },
    DiceEffect { face: 6, name: "Power Move", effect: "Choice", target: "-6HP / +3VP", color: "#fcd34d", description: "Ultimate decision" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FallenEffect {
    pub roll: &'static str,
    pub effect: &'static str,
    pub color: &'static str,
}

pub const FALLEN_EFFECTS: [FallenEffect; 3] = [
    FallenEffect { roll: "1-2", effect: "Nothing", color: "#a3a3a3" },
    FallenEffect { roll: "3-4", effect: "+2 HP or +1 VP to any", color: "#4ade80" },
    FallenEffect { roll: "5-6", effect: "-2 HP or -1 VP to any", color: "#f87171" },
];

pub const FALLEN_NOTE: &str = "Cannot affect the same player two rounds in a row.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SetupValue {
    pub label: &'static str,
    pub value: &'static str,
    pub desc: &'static str,
}

pub const SETUP_VALUES: [SetupValue; 3] = [
    SetupValue { label: "Players", value: "5", desc: "Exactly" },
    SetupValue { label: "Starting HP", value: "20", desc: "Each" },
    SetupValue { label: "Starting VP", value: "0", desc: "Earn through play" },
];

pub const WIN_CONDITIONS: [&str; 2] = ["Only 1 player remains alive", "12 rounds completed"];

pub const RANKING_PRIORITY: [&str; 4] = ["VP", "HP at elimination", "Fewer fallen rounds", "Final roll"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Requirement {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: Icon,
}

pub const REQUIREMENTS: [Requirement; 3] = [
    Requirement { label: "Platform", value: "Windows 10+", icon: Icon::Monitor },
    Requirement { label: "Python", value: "3.13+ (bundled)", icon: Icon::Cpu },
    Requirement { label: "Storage", value: "~50 MB", icon: Icon::HardDrive },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstallStep {
    pub program: &'static str,
    pub args: String,
}

impl InstallStep {
    pub fn command_line(&self) -> String {
        format!("{} {}", self.program, self.args)
    }
}

/// Shell commands for building the game from source.
pub fn install_steps(clone_url: &str, repo_dir: &str) -> Vec<InstallStep> {
    vec![
        InstallStep { program: "git", args: format!("clone {}", clone_url) },
        InstallStep { program: "cd", args: repo_dir.to_string() },
        InstallStep { program: "uv", args: "sync".to_string() },
        InstallStep { program: "uv", args: "run main.py".to_string() },
    ]
}

/// The text placed on the clipboard: one command per line.
pub fn install_script(steps: &[InstallStep]) -> String {
    steps
        .iter()
        .map(InstallStep::command_line)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn nav_links_match_sections_in_order() {
        let anchors: Vec<&str> = NAV_LINKS.iter().map(NavLink::anchor_id).collect();
        assert_eq!(anchors, SECTION_IDS.to_vec());
    }

    #[test]
    fn anchors_are_unique() {
        let unique: HashSet<&str> = SECTION_IDS.iter().copied().collect();
        assert_eq!(unique.len(), SECTION_IDS.len());
        assert!(NAV_LINKS.iter().all(|link| link.href.starts_with('#')));
    }

    #[test]
    fn dice_effects_cover_every_face_once() {
        let faces: Vec<u8> = DICE_EFFECTS.iter().map(|d| d.face).collect();
        assert_eq!(faces, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn install_script_joins_commands() {
        let steps = install_steps("https://github.com/Paurakh977/DO-OR-DICE.git", "DO-OR-DICE");
        assert_eq!(steps.len(), 4);
        assert_eq!(
            install_script(&steps),
            "git clone https://github.com/Paurakh977/DO-OR-DICE.git\ncd DO-OR-DICE\nuv sync\nuv run main.py"
        );
    }

    #[test]
    fn gradient_renders_css() {
        let gradient = Gradient { from: "#000", to: "#fff" };
        assert_eq!(gradient.css("to right"), "linear-gradient(to right, #000, #fff)");
    }
}
