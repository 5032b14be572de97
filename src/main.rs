use log::{error, info, Level};
use web_sys::{window, Element};
use yew::prelude::*;

mod config;
mod consent;
mod error;
mod feed;
mod nav;
mod scroll;
mod storage;
mod contact {
    pub mod contact_form;
    pub mod form;
    pub mod rules;
}
mod pages {
    pub mod landing;
}

use config::MOUNT_ID;
use consent::CookieBanner;
use error::SetupError;
use nav::Nav;
use pages::landing::Landing;
use scroll::{use_scroll_state, ScrollToTop};

#[function_component]
fn App() -> Html {
    let scroll = use_scroll_state();

    html! {
        <>
            <Nav scrolled={scroll.header_scrolled} />
            <Landing />
            <ScrollToTop visible={scroll.to_top_visible} />
            <CookieBanner />
        </>
    }
}

fn mount_point() -> Result<Element, SetupError> {
    let document = window()
        .ok_or(SetupError::MissingWindow)?
        .document()
        .ok_or(SetupError::MissingDocument)?;
    document
        .get_element_by_id(MOUNT_ID)
        .ok_or(SetupError::MissingElement(MOUNT_ID))
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    match mount_point() {
        Ok(root) => {
            info!("Starting application");
            yew::Renderer::<App>::with_root(root).render();
        }
        Err(e) => error!("Cannot start application: {}", e),
    }
}
