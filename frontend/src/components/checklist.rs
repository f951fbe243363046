use yew::prelude::*;

use crate::content::CHECKLIST_QUESTIONS;

/// Which of the self-assessment statements the visitor ticked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Checklist {
    checked: Vec<bool>,
}

impl Checklist {
    pub fn new(len: usize) -> Self {
        Self {
            checked: vec![false; len],
        }
    }

    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    pub fn checked_count(&self) -> usize {
        self.checked.iter().filter(|c| **c).count()
    }

    /// Flips one item. Indices past the end are ignored.
    pub fn toggled(&self, index: usize) -> Self {
        let mut next = self.clone();
        if let Some(item) = next.checked.get_mut(index) {
            *item = !*item;
        }
        next
    }
}

#[function_component(Assessment)]
pub fn assessment() -> Html {
    let checklist = use_state(|| Checklist::new(CHECKLIST_QUESTIONS.len()));

    html! {
        <div class="checklist-grid" data-checked={checklist.checked_count().to_string()}>
            {
                for CHECKLIST_QUESTIONS.iter().enumerate().map(|(idx, question)| {
                    let checked = checklist.is_checked(idx);
                    let onclick = {
                        let checklist = checklist.clone();
                        Callback::from(move |_: MouseEvent| {
                            checklist.set(checklist.toggled(idx));
                        })
                    };
                    html! {
                        <div
                            key={idx}
                            class={classes!("checklist-item", "glass-panel", checked.then(|| "checked"))}
                            role="checkbox"
                            aria-checked={checked.to_string()}
                            {onclick}
                        >
                            <div class="checkbox">
                                { if checked { html! { <span class="check-mark">{"✔"}</span> } } else { html! { <span class="check-dot"></span> } } }
                            </div>
                            <p>{*question}</p>
                        </div>
                    }
                })
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_unchecked() {
        let checklist = Checklist::new(4);
        assert_eq!(checklist.checked_count(), 0);
        assert!(!checklist.is_checked(0));
    }

    #[test]
    fn toggling_flips_only_that_item() {
        let checklist = Checklist::new(4).toggled(2);
        assert!(checklist.is_checked(2));
        assert!(!checklist.is_checked(1));
        assert_eq!(checklist.checked_count(), 1);

        let checklist = checklist.toggled(2);
        assert_eq!(checklist, Checklist::new(4));
    }

    #[test]
    fn out_of_range_toggle_is_a_no_op() {
        let checklist = Checklist::new(2);
        assert_eq!(checklist.toggled(9), checklist);
        assert!(!checklist.is_checked(9));
    }
}
