use log::{info, Level};
use yew::prelude::*;

mod carousel;
mod config;
mod messaging;
mod scroll;
mod validation;

mod components {
    pub mod back_to_top;
    pub mod contact_form;
    pub mod nav;
    pub mod newsletter;
    pub mod reveal;
    pub mod testimonials;
}
mod pages {
    pub mod landing;
}

use components::nav::Nav;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
