use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info};

mod config;
mod content;
mod outbound;
mod sections;
mod shell {
    pub mod attach;
    pub mod look;
    pub mod state;
}
mod viewport {
    pub mod browser;
    pub mod host;
}
mod components {
    pub mod demo;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod icon;
    pub mod pricing;
    pub mod reveal;
}
mod pages {
    pub mod home;
}

use content::Content;
use pages::home::Home;


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
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting to Home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<Content>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<Content>> context={props.content.clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<Rc<Content>>>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let content = match Content::embedded() {
        Ok(content) => content,
        Err(err) => {
            error!("Content manifest rejected, rendering empty page: {}", err);
            Content::default()
        }
    };

    info!("Starting application");
    yew::Renderer::<App>::with_props(AppProps {
        content: Rc::new(content),
    })
    .render();
}
