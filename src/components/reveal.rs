use yew::prelude::*;

use crate::hooks::use_in_view;

/// Where a revealed element starts before sliding into place.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RevealFrom {
    Below(f64),
    Left(f64),
    Right(f64),
    Scale(f64),
    Fade,
}

impl RevealFrom {
    /// Alternating sides for zig-zag lists.
    pub fn alternating(index: usize, offset: f64) -> Self {
        if index % 2 == 0 {
            RevealFrom::Left(offset)
        } else {
            RevealFrom::Right(offset)
        }
    }

    pub fn hidden_transform(&self) -> String {
        match self {
            RevealFrom::Below(px) => format!("translateY({}px)", px),
            RevealFrom::Left(px) => format!("translateX(-{}px)", px),
            RevealFrom::Right(px) => format!("translateX({}px)", px),
            RevealFrom::Scale(factor) => format!("scale({})", factor),
            RevealFrom::Fade => "none".to_string(),
        }
    }
}

pub fn reveal_style(from: RevealFrom, revealed: bool, duration_secs: f64, delay_secs: f64) -> String {
    let (opacity, transform) = if revealed {
        ("1".to_string(), "none".to_string())
    } else {
        ("0".to_string(), from.hidden_transform())
    };
    format!(
        "opacity: {}; transform: {}; transition: opacity {dur}s cubic-bezier(0.21, 0.47, 0.32, 0.98) {delay}s, transform {dur}s cubic-bezier(0.21, 0.47, 0.32, 0.98) {delay}s;",
        opacity,
        transform,
        dur = duration_secs,
        delay = delay_secs,
    )
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(RevealFrom::Below(30.0))]
    pub from: RevealFrom,
    #[prop_or(0.6)]
    pub duration: f64,
    #[prop_or(0.0)]
    pub delay: f64,
    #[prop_or("-50px")]
    pub margin: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Plays its entrance transition the first time it scrolls into view and
/// then stays put.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_in_view(node.clone(), props.margin);

    html! {
        <div
            ref={node}
            class={classes!("reveal", props.class.clone(), revealed.then_some("revealed"))}
            style={reveal_style(props.from, revealed, props.duration, props.delay)}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_transforms_point_the_right_way() {
        assert_eq!(RevealFrom::Below(50.0).hidden_transform(), "translateY(50px)");
        assert_eq!(RevealFrom::Left(100.0).hidden_transform(), "translateX(-100px)");
        assert_eq!(RevealFrom::Right(100.0).hidden_transform(), "translateX(100px)");
        assert_eq!(RevealFrom::Scale(0.9).hidden_transform(), "scale(0.9)");
    }

    #[test]
    fn alternating_starts_left() {
        assert_eq!(RevealFrom::alternating(0, 100.0), RevealFrom::Left(100.0));
        assert_eq!(RevealFrom::alternating(1, 100.0), RevealFrom::Right(100.0));
        assert_eq!(RevealFrom::alternating(2, 100.0), RevealFrom::Left(100.0));
    }

    #[test]
    fn revealed_style_rests_in_place() {
        let style = reveal_style(RevealFrom::Below(50.0), true, 0.7, 0.2);
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains("0.7s"));
        assert!(style.contains("0.2s"));

        let hidden = reveal_style(RevealFrom::Below(50.0), false, 0.7, 0.2);
        assert!(hidden.starts_with("opacity: 0; transform: translateY(50px);"));
    }
}
