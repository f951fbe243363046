use std::rc::Rc;

use log::{info, warn};
use yew::prelude::*;
use yew_router::prelude::*;

mod actions;
mod config;
mod content;
mod carousel {
    pub mod controller;
    pub mod gesture;
}
mod components {
    pub mod background_cells;
    pub mod button;
    pub mod carousel;
    pub mod checklist;
    pub mod faq;
    pub mod ribbon;
    pub mod section_title;
}
mod pages {
    pub mod landing;
}

use actions::{CheckoutAction, ConversionTracker, MetaPixel};
use config::Config;
use pages::landing::Landing;

/// Shared by every section: runtime config and the checkout action built from it.
#[derive(Clone)]
pub struct AppContext {
    pub config: Rc<Config>,
    pub checkout: Rc<CheckoutAction>,
}

impl AppContext {
    pub fn new(config: Config, tracker: Option<Rc<dyn ConversionTracker>>) -> Self {
        let checkout = CheckoutAction::new(&config, tracker);
        Self {
            config: Rc::new(config),
            checkout: Rc::new(checkout),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(Config::default(), None)
    }
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.config, &other.config) && Rc::ptr_eq(&self.checkout, &other.checkout)
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[derive(Properties, PartialEq)]
struct AppProps {
    context: AppContext,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<AppContext> context={props.context.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<AppContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    let config = Config::load();
    let tracker = MetaPixel::detect().map(|pixel| Rc::new(pixel) as Rc<dyn ConversionTracker>);
    match &tracker {
        Some(tracker) => info!("Conversion tracker found: {}", tracker.name()),
        None => warn!("No conversion tracker on the page, checkout will not be tracked"),
    }

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps {
        context: AppContext::new(config, tracker),
    })
    .render();
}
