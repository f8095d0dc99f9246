use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod animation;
mod interaction;
mod particles;
mod content;
mod layout;

mod hooks {
    pub mod viewport;
}
mod components {
    pub mod icons;
    pub mod motion;
    pub mod reveal;
}
mod sections {
    pub mod nav;
    pub mod hero;
    pub mod services;
    pub mod features;
    pub mod stats;
    pub mod testimonials;
    pub mod cta;
    pub mod footer;
}
mod pages {
    pub mod home;
}

use pages::home::HomePage;


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
            info!("Rendering Home page");
            html! { <HomePage /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
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

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
