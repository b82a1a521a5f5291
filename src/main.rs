use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod error;
mod roi;
mod content;
mod motion {
    pub mod timers;
    pub mod typewriter;
    pub mod visibility;
    pub mod step_tracker;
    pub mod smooth_scroll;
}
mod components {
    pub mod badge;
    pub mod button;
    pub mod card;
    pub mod section;
    pub mod faq_item;
    pub mod roi_calculator;
}
mod pages {
    pub mod landing;
    pub mod pricing;
    pub mod process;
    pub mod testimonials;
    pub mod faq;
}

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(NotFound)]
fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Page not found"}</h1>
            <p>{"The page you were looking for doesn't exist."}</p>
            <Link<Route> to={Route::Home}>{"Back to the homepage"}</Link<Route>>
        </div>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::STUDIO_NAME);
    yew::Renderer::<App>::new().render();
}
