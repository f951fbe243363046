use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionTitleProps {
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub highlight: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    /// Fades the title in on first render.
    #[prop_or_default]
    pub animate: bool,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SectionTitle)]
pub fn section_title(props: &SectionTitleProps) -> Html {
    html! {
        <div class={classes!("section-title", props.animate.then(|| "reveal"))}>
            {
                match &props.subtitle {
                    Some(subtitle) => html! { <span class="section-subtitle">{subtitle.clone()}</span> },
                    None => html! {},
                }
            }
            <h2>
                { for props.children.iter() }
                {
                    match &props.highlight {
                        Some(highlight) => html! { <span class="text-gradient">{" "}{highlight.clone()}</span> },
                        None => html! {},
                    }
                }
            </h2>
            {
                match &props.description {
                    Some(description) => html! { <p class="section-description">{description.clone()}</p> },
                    None => html! {},
                }
            }
        </div>
    }
}
