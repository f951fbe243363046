use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use web_sys::{Element, PointerEvent};
use yew::prelude::*;

use crate::carousel::controller::{CarouselAction, CarouselState, NavigationEvent, NavigationSource};
use crate::carousel::gesture::{classify, DragTracker};

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub images: Vec<AttrValue>,
    pub autoplay_interval_ms: u32,
    pub swipe_threshold: f64,
    pub transition_ms: u32,
    /// Called once for every navigation, whatever triggered it.
    #[prop_or_default]
    pub on_navigate: Option<Callback<NavigationEvent>>,
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let Some(initial) = CarouselState::new(props.images.len()) else {
        return html! {};
    };

    // Remount on a different image count so the controller never sees a stale length.
    html! {
        <CarouselView
            key={props.images.len()}
            initial={initial}
            images={props.images.clone()}
            autoplay_interval_ms={props.autoplay_interval_ms}
            swipe_threshold={props.swipe_threshold}
            transition_ms={props.transition_ms}
            on_navigate={props.on_navigate.clone()}
        />
    }
}

fn alt_text(index: usize) -> String {
    format!("Depoimento {}", index + 1)
}

/// The incoming slide animates for the navigation that brought it in, even if
/// the direction changed since without a new event.
fn enter_class(outgoing: Option<NavigationEvent>) -> &'static str {
    outgoing.map_or("at-rest", |event| event.direction.enter_class())
}

// `translate` composes with the keyframed `transform`, so a drag shows even
// while the enter animation runs.
fn active_style(transition_ms: u32, drag_offset: f64) -> String {
    if drag_offset == 0.0 {
        format!("--slide-ms: {}ms;", transition_ms)
    } else {
        format!("--slide-ms: {}ms; translate: {}px 0;", transition_ms, drag_offset)
    }
}

/// A swiped-away slide leaves from where the finger dropped it.
fn outgoing_style(event: NavigationEvent, swipe_offset: f64, transition_ms: u32) -> String {
    let from = match event.source {
        NavigationSource::Swipe => swipe_offset,
        _ => 0.0,
    };
    format!("--slide-ms: {}ms; --drag-from: {}px;", transition_ms, from)
}

#[derive(Properties, PartialEq)]
struct CarouselViewProps {
    initial: CarouselState,
    images: Vec<AttrValue>,
    autoplay_interval_ms: u32,
    swipe_threshold: f64,
    transition_ms: u32,
    on_navigate: Option<Callback<NavigationEvent>>,
}

#[function_component(CarouselView)]
fn carousel_view(props: &CarouselViewProps) -> Html {
    let carousel = {
        let initial = props.initial.clone();
        use_reducer(move || initial)
    };
    // seq of the last navigation whose transition has finished
    let settled = use_state(|| 0u64);
    let drag = use_mut_ref(DragTracker::default);
    let drag_offset = use_state(|| 0.0_f64);
    // offset at which the last successful swipe was released
    let swipe_offset = use_state(|| 0.0_f64);

    // Autoplay. The Interval is dropped, and so cancelled, on unmount or when the period changes.
    // Ticks are skipped mid-drag so the slide under the pointer is not replaced.
    {
        let dispatcher = carousel.dispatcher();
        let drag = drag.clone();
        use_effect_with_deps(
            move |interval_ms| {
                let interval = Interval::new(*interval_ms, move || {
                    if !drag.borrow().is_dragging() {
                        dispatcher.dispatch(CarouselAction::Tick);
                    }
                });
                move || drop(interval)
            },
            props.autoplay_interval_ms,
        );
    }

    // Publish each navigation and retire the outgoing slide once it has animated out.
    {
        let settled = settled.clone();
        let on_navigate = props.on_navigate.clone();
        let event = carousel.last_event();
        let transition_ms = props.transition_ms;
        use_effect_with_deps(
            move |seq| {
                let seq = *seq;
                let timeout = event.map(|event| {
                    debug!(
                        "Carousel {:?} -> {} ({:?})",
                        event.source, event.index, event.direction
                    );
                    if let Some(on_navigate) = &on_navigate {
                        on_navigate.emit(event);
                    }
                    Timeout::new(transition_ms, move || settled.set(seq))
                });
                move || drop(timeout)
            },
            carousel.seq(),
        );
    }

    let paginate = |step: isize, source: NavigationSource| {
        let dispatcher = carousel.dispatcher();
        Callback::from(move |_: MouseEvent| {
            dispatcher.dispatch(CarouselAction::Paginate { step, source });
        })
    };

    let onpointerdown = {
        let drag = drag.clone();
        Callback::from(move |e: PointerEvent| {
            if let Some(target) = e.target_dyn_into::<Element>() {
                let _ = target.set_pointer_capture(e.pointer_id());
            }
            drag.borrow_mut().begin(e.client_x() as f64, e.time_stamp());
        })
    };

    let onpointermove = {
        let drag = drag.clone();
        let drag_offset = drag_offset.clone();
        Callback::from(move |e: PointerEvent| {
            let mut tracker = drag.borrow_mut();
            if !tracker.is_dragging() {
                return;
            }
            tracker.pointer_moved(e.client_x() as f64, e.time_stamp(), e.buttons() != 0);
            drag_offset.set(tracker.offset());
        })
    };

    let onpointerup = {
        let drag = drag.clone();
        let drag_offset = drag_offset.clone();
        let swipe_offset = swipe_offset.clone();
        let dispatcher = carousel.dispatcher();
        let threshold = props.swipe_threshold;
        Callback::from(move |e: PointerEvent| {
            let release = drag.borrow_mut().release(e.client_x() as f64, e.time_stamp());
            drag_offset.set(0.0);
            let Some(release) = release else {
                return;
            };
            if let Some(step) = classify(release, threshold).step() {
                swipe_offset.set(release.offset);
                dispatcher.dispatch(CarouselAction::Paginate {
                    step,
                    source: NavigationSource::Swipe,
                });
            }
        })
    };

    // Cancelled or lost capture: snap back without navigating.
    let snap_back = {
        let drag = drag.clone();
        let drag_offset = drag_offset.clone();
        Callback::from(move |_: PointerEvent| {
            drag.borrow_mut().cancel();
            drag_offset.set(0.0);
        })
    };

    let current = carousel.current();
    let seq = carousel.seq();
    let outgoing = carousel.last_event().filter(|_| seq != *settled);
    let dragging = *drag_offset != 0.0;

    let mut slides = Vec::with_capacity(2);
    if let Some(event) = outgoing {
        slides.push(html! {
            <div
                key={format!("out-{}", seq)}
                class={classes!("slide", "outgoing", event.direction.exit_class())}
                style={outgoing_style(event, *swipe_offset, props.transition_ms)}
                aria-hidden="true"
            >
                <div class="slide-frame glass-panel">
                    <img src={props.images[event.previous].clone()} alt={alt_text(event.previous)} draggable="false" />
                </div>
            </div>
        });
    }
    slides.push(html! {
        <div
            key={format!("in-{}", seq)}
            class={classes!("slide", "active", enter_class(outgoing), dragging.then(|| "dragging"))}
            style={active_style(props.transition_ms, *drag_offset)}
            {onpointerdown}
            {onpointermove}
            {onpointerup}
            onpointercancel={snap_back.clone()}
            onlostpointercapture={snap_back}
        >
            <div class="slide-frame glass-panel">
                <img src={props.images[current].clone()} alt={alt_text(current)} draggable="false" />
            </div>
        </div>
    });

    html! {
        <div class="carousel">
            <div class="carousel-stage">
                <div class="carousel-slides">
                    { for slides }
                </div>

                <button class="carousel-arrow prev" aria-label="Depoimento anterior" onclick={paginate(-1, NavigationSource::Arrow)}>
                    {"‹"}
                </button>
                <button class="carousel-arrow next" aria-label="Próximo depoimento" onclick={paginate(1, NavigationSource::Arrow)}>
                    {"›"}
                </button>
            </div>

            <div class="carousel-dots">
                {
                    for (0..carousel.len()).map(|i| {
                        let dispatcher = carousel.dispatcher();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            dispatcher.dispatch(CarouselAction::JumpTo { index: i });
                        });
                        html! {
                            <button
                                key={i}
                                class={classes!("dot", (i == current).then(|| "active"))}
                                aria-label={format!("Ir para o depoimento {}", i + 1)}
                                aria-current={(i == current).then(|| "true")}
                                {onclick}
                            />
                        }
                    })
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn enter_class_follows_the_event_not_later_direction_flips() {
        let mut state = CarouselState::new(6).unwrap();
        state.paginate(1, NavigationSource::Arrow);
        // selecting the current dot flips direction but emits nothing
        assert_eq!(state.jump_to(1), None);
        assert_eq!(state.direction().enter_class(), "enter-from-left");

        assert_eq!(enter_class(state.last_event()), "enter-from-right");
        assert_eq!(enter_class(None), "at-rest");
    }

    #[test]
    fn drag_uses_translate_so_enter_animation_cannot_freeze_it() {
        assert_eq!(active_style(400, 0.0), "--slide-ms: 400ms;");
        let style = active_style(400, -120.5);
        assert!(style.contains("translate: -120.5px 0;"));
        assert!(!style.contains("transform"));
    }

    #[test]
    fn swiped_slide_exits_from_release_offset() {
        let mut state = CarouselState::new(3).unwrap();
        let swiped = state.paginate(1, NavigationSource::Swipe);
        assert_eq!(
            outgoing_style(swiped, -340.0, 400),
            "--slide-ms: 400ms; --drag-from: -340px;"
        );

        let clicked = state.paginate(1, NavigationSource::Arrow);
        assert_eq!(
            outgoing_style(clicked, -340.0, 400),
            "--slide-ms: 400ms; --drag-from: 0px;"
        );
    }
}
