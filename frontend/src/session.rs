use yew::prelude::*;

use crate::storage;

/* ---------------- auth state ---------------- */

#[derive(Clone, Debug, PartialEq)]
pub enum AuthStatus {
    /// Persisted token not read yet (first render only).
    Loading,
    Authenticated,
    Anonymous,
}

pub fn status_for_token(token: Option<&str>) -> AuthStatus {
    match token {
        Some(_) => AuthStatus::Authenticated,
        None => AuthStatus::Anonymous,
    }
}

/* ---------------- session handle ------------ */

/// Shared auth state plus the two mutators. Cloneable; lives in context.
#[derive(Clone, PartialEq)]
pub struct Session {
    status: UseStateHandle<AuthStatus>,
}

impl Session {
    pub fn status(&self) -> AuthStatus {
        (*self.status).clone()
    }

    /// Persist the token and mark the session authenticated.
    pub fn login(&self, token: &str) {
        storage::store_token(token);
        self.status.set(AuthStatus::Authenticated);
    }

    /// Drop the persisted token and mark the session anonymous.
    pub fn logout(&self) {
        storage::clear_token();
        self.status.set(AuthStatus::Anonymous);
    }
}

/* ---------------- hook ---------------------- */

#[hook]
pub fn use_session() -> Session {
    use_context::<Session>().expect("SessionProvider missing")
}

/* ---------------- provider ------------------ */

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let status = use_state(|| AuthStatus::Loading);

    {
        let status = status.clone();
        use_effect_with((), move |_| {
            status.set(status_for_token(storage::token().as_deref()));
            || ()
        });
    }

    let session = Session { status };

    html! {
        <ContextProvider<Session> context={session}>
            { for props.children.iter() }
        </ContextProvider<Session>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_presence_implies_authenticated() {
        assert_eq!(status_for_token(Some("abc")), AuthStatus::Authenticated);
    }

    #[test]
    fn missing_token_is_anonymous() {
        assert_eq!(status_for_token(None), AuthStatus::Anonymous);
    }
}
