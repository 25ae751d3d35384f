use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    pub src: String,
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Logo image that swaps to a drawn placeholder if the asset fails to load.
#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let failed = use_state(|| false);

    let onerror = {
        let failed = failed.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            log::warn!("Logo {} failed to load, showing placeholder", src);
            failed.set(true);
        })
    };

    let size = format!("width: {0}px; height: {0}px;", props.size);

    if *failed {
        html! {
            <span
                class={classes!("logo-placeholder", props.class.clone())}
                style={format!("{} font-size: {}px;", size, props.size / 2)}
                role="img"
                aria-label="DO or DICE"
            >
                {"⚄"}
            </span>
        }
    } else {
        html! {
            <img
                src={props.src.clone()}
                alt="DO or DICE"
                width={props.size.to_string()}
                height={props.size.to_string()}
                class={props.class.clone()}
                style={size}
                {onerror}
            />
        }
    }
}
