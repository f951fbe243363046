use web_sys::Element;
use yew::prelude::*;

const ROWS: usize = 47;
const COLS: usize = 20;
/// Diameter of the spotlight that reveals the highlighted grid, in px.
const MASK_SIZE: f64 = 400.0;

/// A click on one cell, broadcast to every cell of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RippleEvent {
    pub origin: (usize, usize),
    pub seq: u64,
}

impl RippleEvent {
    pub fn next(previous: Option<RippleEvent>, origin: (usize, usize)) -> Self {
        Self {
            origin,
            seq: previous.map_or(1, |e| e.seq + 1),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleAnimation {
    pub peak_opacity: f64,
    pub duration_s: f64,
}

impl RippleAnimation {
    /// Flash for `cell` caused by a click on `origin`: dimmer and slower with
    /// distance, `None` once it would be invisible.
    pub fn for_cell(origin: (usize, usize), cell: (usize, usize)) -> Option<Self> {
        let dr = origin.0 as f64 - cell.0 as f64;
        let dc = origin.1 as f64 - cell.1 as f64;
        let distance = (dr * dr + dc * dc).sqrt();
        let peak_opacity = 1.0 - distance * 0.1;
        if peak_opacity <= 0.0 {
            return None;
        }
        Some(Self {
            peak_opacity,
            duration_s: (distance * 0.15).max(0.2),
        })
    }
}

pub fn mask_style(x: f64, y: f64) -> String {
    let radius = MASK_SIZE / 2.0;
    let gradient = format!("radial-gradient({}px circle at center, white, transparent)", radius);
    let position = format!("{}px {}px", x - radius, y - radius);
    format!(
        "mask-image: {g}; -webkit-mask-image: {g}; \
         mask-position: {p}; -webkit-mask-position: {p}; \
         mask-size: {s}px; -webkit-mask-size: {s}px; \
         mask-repeat: no-repeat; -webkit-mask-repeat: no-repeat; pointer-events: none;",
        g = gradient,
        p = position,
        s = MASK_SIZE,
    )
}

#[derive(Properties, PartialEq)]
struct CellProps {
    row: usize,
    col: usize,
    ripple: Option<RippleEvent>,
    ripple_color: AttrValue,
    #[prop_or_default]
    class: Classes,
    on_click: Callback<(usize, usize)>,
}

#[function_component(Cell)]
fn cell(props: &CellProps) -> Html {
    let onclick = {
        let on_click = props.on_click.clone();
        let at = (props.row, props.col);
        Callback::from(move |_: MouseEvent| on_click.emit(at))
    };

    let animation = props
        .ripple
        .and_then(|event| RippleAnimation::for_cell(event.origin, (props.row, props.col)).map(|a| (event.seq, a)));

    let fill = match animation {
        Some((seq, animation)) => html! {
            <div
                key={seq}
                class="cell-fill rippling"
                style={format!(
                    "background-color: {}; --ripple-peak: {:.2}; animation-duration: {:.2}s;",
                    props.ripple_color, animation.peak_opacity, animation.duration_s
                )}
            ></div>
        },
        None => html! {
            <div key="idle" class="cell-fill" style={format!("background-color: {};", props.ripple_color)}></div>
        },
    };

    html! {
        <div class={classes!("cell", props.class.clone())} {onclick}>
            { fill }
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct PatternProps {
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    cell_class: Classes,
    ripple_color: AttrValue,
    ripple: Option<RippleEvent>,
    on_cell_click: Callback<(usize, usize)>,
}

#[function_component(Pattern)]
fn pattern(props: &PatternProps) -> Html {
    html! {
        <div class={classes!("cell-pattern", props.class.clone())}>
            {
                for (0..ROWS).map(|row| html! {
                    <div key={row} class="cell-column">
                        {
                            for (0..COLS).map(|col| html! {
                                <Cell
                                    key={col}
                                    row={row}
                                    col={col}
                                    ripple={props.ripple}
                                    ripple_color={props.ripple_color.clone()}
                                    class={props.cell_class.clone()}
                                    on_click={props.on_cell_click.clone()}
                                />
                            })
                        }
                    </div>
                })
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct BackgroundCellsProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Decorative grid behind the hero. A spotlight follows the mouse and clicks
/// send a ripple across the cells.
#[function_component(BackgroundCells)]
pub fn background_cells(props: &BackgroundCellsProps) -> Html {
    let container = use_node_ref();
    let spotlight = use_node_ref();
    let ripple = use_state(|| None::<RippleEvent>);

    // Writes the mask straight to the element so mouse moves don't re-render the grid.
    let onmousemove = {
        let container = container.clone();
        let spotlight = spotlight.clone();
        Callback::from(move |e: MouseEvent| {
            if let (Some(container), Some(spotlight)) =
                (container.cast::<Element>(), spotlight.cast::<Element>())
            {
                let rect = container.get_bounding_client_rect();
                let x = e.client_x() as f64 - rect.left();
                let y = e.client_y() as f64 - rect.top();
                let _ = spotlight.set_attribute("style", &mask_style(x, y));
            }
        })
    };

    let on_cell_click = {
        let ripple = ripple.clone();
        Callback::from(move |origin: (usize, usize)| {
            ripple.set(Some(RippleEvent::next(*ripple, origin)));
        })
    };

    html! {
        <div class={classes!("background-cells", props.class.clone())}>
            <div ref={container} class="cells-core" {onmousemove}>
                <div class="cells-clip">
                    <div class="cells-fade"></div>
                    <div ref={spotlight} class="cells-spotlight" style={mask_style(0.0, 0.0)}>
                        <Pattern
                            cell_class={classes!("cell-highlight")}
                            ripple_color="rgba(0, 255, 136, 0.4)"
                            ripple={*ripple}
                            on_cell_click={on_cell_click.clone()}
                        />
                    </div>
                    <Pattern
                        class={classes!("cells-dim")}
                        ripple_color="rgba(0, 209, 255, 0.2)"
                        ripple={*ripple}
                        on_cell_click={on_cell_click}
                    />
                </div>
            </div>
            {
                if props.children.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div class="cells-content">
                            { for props.children.iter() }
                        </div>
                    }
                }
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn clicked_cell_flashes_brightest_and_fastest() {
        let animation = RippleAnimation::for_cell((5, 5), (5, 5)).unwrap();
        assert_eq!(animation.peak_opacity, 1.0);
        assert_eq!(animation.duration_s, 0.2);
    }

    #[test]
    fn ripple_fades_with_distance() {
        let animation = RippleAnimation::for_cell((0, 0), (3, 4)).unwrap();
        assert!((animation.peak_opacity - 0.5).abs() < 1e-9);
        assert!((animation.duration_s - 0.75).abs() < 1e-9);
    }

    #[test]
    fn far_cells_do_not_flash() {
        assert_eq!(RippleAnimation::for_cell((0, 0), (6, 8)), None);
        assert_eq!(RippleAnimation::for_cell((0, 0), (40, 19)), None);
    }

    #[test]
    fn repeated_clicks_get_new_sequence_numbers() {
        let first = RippleEvent::next(None, (2, 3));
        let second = RippleEvent::next(Some(first), (2, 3));
        assert_eq!(first.seq, 1);
        assert_eq!(second.seq, 2);
        assert_ne!(first, second);
    }

    #[test]
    fn spotlight_is_centred_on_the_mouse() {
        let style = mask_style(250.0, 300.0);
        assert!(style.contains("mask-position: 50px 100px;"));
        assert!(style.contains("radial-gradient(200px circle at center"));
        assert!(style.contains("mask-size: 400px;"));
    }
}
