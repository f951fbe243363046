use yew::prelude::*;

const REPEATS: usize = 10;

#[derive(Properties, PartialEq)]
pub struct RibbonProps {
    #[prop_or_default]
    pub reverse: bool,
}

/// Endless marquee strip. The items are rendered twice so the loop has no gap.
#[function_component(Ribbon)]
pub fn ribbon(props: &RibbonProps) -> Html {
    let item = |key: String| {
        html! {
            <div class="ribbon-item" key={key}>
                <span class="ribbon-dot"></span>
                <span class="ribbon-text">{"VIOLINO "}<span class="accent">{"DO ZERO"}</span>{" 2026"}</span>
            </div>
        }
    };

    html! {
        <div class={if props.reverse { "ribbon-track marquee-reverse" } else { "ribbon-track marquee" }}>
            { for (0..REPEATS).map(|i| item(format!("a-{}", i))) }
            { for (0..REPEATS).map(|i| item(format!("b-{}", i))) }
        </div>
    }
}
