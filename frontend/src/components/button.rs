use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CtaButtonProps {
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(CtaButton)]
pub fn cta_button(props: &CtaButtonProps) -> Html {
    html! {
        <button class={classes!("cta-button", props.class.clone())} onclick={props.onclick.clone()}>
            <span class="cta-shine"></span>
            { for props.children.iter() }
        </button>
    }
}
