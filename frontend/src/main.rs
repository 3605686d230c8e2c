use yew::prelude::*;
use yew_router::prelude::*;

mod api;
mod auth;
mod guard;
mod header;
mod models;
mod product_form;
mod products;
mod session;
mod storage;
mod toast;
mod utils;
mod validate;

use guard::Guard;
use session::SessionProvider;

/* -------------------- routing -------------------- */

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/products")]
    Products,
    #[at("/add-product")]
    AddProduct,
    #[at("/update-product/:id")]
    UpdateProduct { id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html!(<Redirect<Route> to={Route::Login} />),
        Route::Login => html!(<auth::LoginForm />),
        Route::Register => html!(<auth::RegisterForm />),
        Route::Products => html!(<Guard><products::Products /></Guard>),
        Route::AddProduct => html!(<Guard><product_form::ProductForm /></Guard>),
        Route::UpdateProduct { id } => {
            html!(<Guard><product_form::ProductForm product_id={id} /></Guard>)
        }
        Route::NotFound => html!(<h1>{"404 – Not Found"}</h1>),
    }
}

/* -------------------- entry point ---------------- */

#[function_component(App)]
fn app() -> Html {
    html! {
        <SessionProvider>
            <BrowserRouter>
                <header::Header />
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </SessionProvider>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("E-Commerce admin starting");
    yew::Renderer::<App>::new().render();
}
