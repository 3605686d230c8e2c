use yew::prelude::*;
use yew_router::prelude::*;

use crate::session::{use_session, AuthStatus};
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    #[prop_or_default]
    pub children: Children,
}

/// Gate for authenticated routes: wait for the session to resolve, then
/// render the children or bounce to the login screen.
#[function_component(Guard)]
pub fn guard(props: &GuardProps) -> Html {
    match use_session().status() {
        AuthStatus::Loading => html!(<p>{"Loading…"}</p>),
        AuthStatus::Anonymous => html!(<Redirect<Route> to={Route::Login} />),
        AuthStatus::Authenticated => html! { for props.children.iter() },
    }
}
