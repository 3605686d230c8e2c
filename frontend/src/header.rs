use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::{use_session, AuthStatus};
use crate::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let session = use_session();
    let navigator = use_navigator().unwrap();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_| {
            session.logout();
            navigator.push(&Route::Login);
        })
    };

    let links = match session.status() {
        AuthStatus::Loading => Html::default(),
        AuthStatus::Anonymous => html! {
            <ul class="nav-list">
                <li class="nav-item"><Link<Route> to={Route::Login}>{"Login"}</Link<Route>></li>
                <li class="nav-item"><Link<Route> to={Route::Register}>{"Register"}</Link<Route>></li>
            </ul>
        },
        AuthStatus::Authenticated => html! {
            <ul class="nav-list">
                <li class="nav-item"><Link<Route> to={Route::Products}>{"All Products"}</Link<Route>></li>
                <li class="nav-item"><Link<Route> to={Route::AddProduct}>{"Add Product"}</Link<Route>></li>
                <li class="nav-item"><button class="nav-logout" onclick={on_logout}>{"Logout"}</button></li>
            </ul>
        },
    };

    html! {
        <header class="header">
            <div class="header-brand">{"E-Commerce"}</div>
            <nav class="nav">{ links }</nav>
        </header>
    }
}
