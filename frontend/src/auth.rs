use gloo_net::http::Method;
use gloo_timers::future::TimeoutFuture;
use log::error;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlSelectElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::fetch_json;
use crate::models::{LoginBody, RegisterBody, TokenData};
use crate::session::use_session;
use crate::toast::{self, Toast, ToastHost};
use crate::utils::{bind_input, field_error, GENERIC_ERROR, REDIRECT_DELAY_MS};
use crate::validate::{validate_login, validate_register, FieldErrors};
use crate::Route;

/* -------------------------------------------------------------------------- */
/*                                   login                                    */
/* -------------------------------------------------------------------------- */

#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let navigator = use_navigator().unwrap();
    let session = use_session();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let errors = use_state(FieldErrors::new);
    let submitting = use_state(|| false);
    let notice = use_state(|| None::<Toast>);

    /* landing on the login screen drops any previous session */
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            session.logout();
            || ()
        });
    }

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let notice = notice.clone();
        let session = session.clone();
        let navigator = navigator.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();

            let found = validate_login(&email, &password);
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::new());

            let body = LoginBody {
                email: (*email).clone(),
                password: (*password).clone(),
            };

            submitting.set(true);
            spawn_local({
                let submitting = submitting.clone();
                let notice = notice.clone();
                let session = session.clone();
                let navigator = navigator.clone();

                async move {
                    match fetch_json::<_, TokenData>(Method::POST, "/login", Some(&body)).await {
                        Ok(resp) if resp.status_code == 200 => {
                            if let Some(TokenData { token }) = &resp.data {
                                session.login(token);
                                toast::show(&notice, Toast::success(resp.message_or("Logged in")));
                                submitting.set(false);

                                TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                                navigator.push(&Route::Products);
                            } else {
                                error!("login: 200 without a token payload");
                                toast::show(&notice, Toast::error(GENERIC_ERROR));
                                submitting.set(false);
                            }
                        }
                        Ok(resp) => {
                            toast::show(&notice, Toast::error(resp.message_or("Login failed!")));
                            submitting.set(false);
                        }
                        Err(e) => {
                            error!("login: {e:?}");
                            toast::show(&notice, Toast::error(GENERIC_ERROR));
                            submitting.set(false);
                        }
                    }
                }
            });
        })
    };

    html! {
        <div class="form-page">
            <form {onsubmit}>
                <h3>{"Login"}</h3>

                <div class="form-group">
                    <label>{"Email"}</label>
                    <input
                        type="email"
                        placeholder="Enter email"
                        value={(*email).clone()}
                        oninput={bind_input(&email)}
                    />
                    { field_error(&errors, "email") }
                </div>

                <div class="form-group">
                    <label>{"Password"}</label>
                    <input
                        type="password"
                        placeholder="Enter password"
                        value={(*password).clone()}
                        oninput={bind_input(&password)}
                    />
                    { field_error(&errors, "password") }
                </div>

                <button type="submit" disabled={*submitting}>
                    { if *submitting { "Logging In..." } else { "Login" } }
                </button>
            </form>

            <ToastHost toast={(*notice).clone()} />
        </div>
    }
}

/* -------------------------------------------------------------------------- */
/*                                  register                                  */
/* -------------------------------------------------------------------------- */

#[function_component(RegisterForm)]
pub fn register_form() -> Html {
    let navigator = use_navigator().unwrap();

    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let mobile = use_state(String::new);
    let gender = use_state(String::new);
    let errors = use_state(FieldErrors::new);
    let submitting = use_state(|| false);
    let notice = use_state(|| None::<Toast>);

    let on_change_gender = {
        let gender = gender.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            gender.set(select.value());
        })
    };

    let onsubmit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let password = password.clone();
        let mobile = mobile.clone();
        let gender = gender.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let notice = notice.clone();
        let navigator = navigator.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();

            let found = validate_register(
                &first_name,
                &last_name,
                &email,
                &password,
                &mobile,
                &gender,
            );
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::new());

            let body = RegisterBody {
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
                mobile: (*mobile).clone(),
                gender: (*gender).clone(),
            };

            submitting.set(true);
            spawn_local({
                let submitting = submitting.clone();
                let notice = notice.clone();
                let navigator = navigator.clone();

                async move {
                    match fetch_json::<_, serde_json::Value>(Method::POST, "/register", Some(&body))
                        .await
                    {
                        Ok(resp) if resp.status_code == 201 => {
                            toast::show(&notice, Toast::success(resp.message_or("Registered")));
                            submitting.set(false);

                            TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                            navigator.push(&Route::Login);
                        }
                        Ok(resp) => {
                            toast::show(
                                &notice,
                                Toast::error(resp.message_or("Registration failed!")),
                            );
                            submitting.set(false);
                        }
                        Err(e) => {
                            error!("register: {e:?}");
                            toast::show(&notice, Toast::error(GENERIC_ERROR));
                            submitting.set(false);
                        }
                    }
                }
            });
        })
    };

    html! {
        <div class="form-page">
            <form {onsubmit}>
                <h3>{"Register"}</h3>

                <div class="form-group">
                    <label>{"First Name"}</label>
                    <input
                        type="text"
                        placeholder="Enter first name"
                        value={(*first_name).clone()}
                        oninput={bind_input(&first_name)}
                    />
                    { field_error(&errors, "firstName") }
                </div>

                <div class="form-group">
                    <label>{"Last Name"}</label>
                    <input
                        type="text"
                        placeholder="Enter last name"
                        value={(*last_name).clone()}
                        oninput={bind_input(&last_name)}
                    />
                    { field_error(&errors, "lastName") }
                </div>

                <div class="form-group">
                    <label>{"Email"}</label>
                    <input
                        type="email"
                        placeholder="Enter email"
                        value={(*email).clone()}
                        oninput={bind_input(&email)}
                    />
                    { field_error(&errors, "email") }
                </div>

                <div class="form-group">
                    <label>{"Password"}</label>
                    <input
                        type="password"
                        placeholder="Enter password"
                        value={(*password).clone()}
                        oninput={bind_input(&password)}
                    />
                    { field_error(&errors, "password") }
                </div>

                <div class="form-group">
                    <label>{"Mobile"}</label>
                    <input
                        type="text"
                        placeholder="Enter mobile number"
                        value={(*mobile).clone()}
                        oninput={bind_input(&mobile)}
                    />
                    { field_error(&errors, "mobile") }
                </div>

                <div class="form-group">
                    <label>{"Gender"}</label>
                    <select onchange={on_change_gender}>
                        <option value="" selected={gender.is_empty()}>{"Select Gender"}</option>
                        <option value="Male" selected={*gender == "Male"}>{"Male"}</option>
                        <option value="Female" selected={*gender == "Female"}>{"Female"}</option>
                        <option value="Other" selected={*gender == "Other"}>{"Other"}</option>
                    </select>
                    { field_error(&errors, "gender") }
                </div>

                <button type="submit" disabled={*submitting}>
                    { if *submitting { "Submitting..." } else { "Submit" } }
                </button>
            </form>

            <ToastHost toast={(*notice).clone()} />
        </div>
    }
}
