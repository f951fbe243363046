use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FAQ_ENTRIES;

#[derive(Properties, PartialEq)]
pub struct FaqItemProps {
    pub question: AttrValue,
    pub answer: AttrValue,
}

#[function_component(FaqItem)]
pub fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle} aria-expanded={is_open.to_string()}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{"⌄"}</span>
            </button>
            {
                if *is_open {
                    html! {
                        <div class="faq-answer">
                            <p>{props.answer.clone()}</p>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section class="faq-section">
            <div class="faq-container">
                <div class="faq-heading">
                    <span class="faq-heading-icon">{"◈"}</span>
                    <h2>{"Perguntas Frequentes"}</h2>
                </div>
                {
                    for FAQ_ENTRIES.iter().map(|entry| html! {
                        <FaqItem
                            key={entry.question}
                            question={entry.question}
                            answer={entry.answer}
                        />
                    })
                }
            </div>
        </section>
    }
}
