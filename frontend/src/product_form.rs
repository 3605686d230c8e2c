use gloo_net::http::Method;
use gloo_timers::future::TimeoutFuture;
use log::error;
use web_sys::{File, FormData, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{fetch_json, image_url, send_form};
use crate::models::Product;
use crate::toast::{self, Toast, ToastHost};
use crate::utils::{bind_input, field_error, GENERIC_ERROR, REDIRECT_DELAY_MS};
use crate::validate::{validate_product, FieldErrors};
use crate::Route;

/// Form drafts keep the price as entered; the backend parses it.
pub fn format_price(price: f64) -> String {
    format!("{price}")
}

fn selected_file(input: &NodeRef) -> Option<File> {
    input.cast::<HtmlInputElement>()?.files()?.get(0)
}

#[derive(Properties, PartialEq)]
pub struct ProductFormProps {
    /// Present on the update route, absent on the add route.
    #[prop_or_default]
    pub product_id: Option<String>,
}

/* -------------------------------------------------------------------------- */
/*                          add / update product form                         */
/* -------------------------------------------------------------------------- */

#[function_component(ProductForm)]
pub fn product_form(props: &ProductFormProps) -> Html {
    let navigator = use_navigator().unwrap();

    let name = use_state(String::new);
    let price = use_state(String::new);
    let description = use_state(String::new);
    // server-side file name of the stored image (update mode preview)
    let current_file = use_state(|| None::<String>);

    let errors = use_state(FieldErrors::new);
    let submitting = use_state(|| false);
    let notice = use_state(|| None::<Toast>);
    let file_ref = use_node_ref();

    /* prefill on the update route, reset on the add route */
    {
        let name = name.clone();
        let price = price.clone();
        let description = description.clone();
        let current_file = current_file.clone();
        let notice = notice.clone();

        use_effect_with(props.product_id.clone(), move |product_id| {
            match product_id.clone() {
                Some(id) => spawn_local(async move {
                    match fetch_json::<(), Product>(
                        Method::GET,
                        &format!("/product/{id}"),
                        None::<&()>,
                    )
                    .await
                    {
                        Ok(resp) if resp.status_code == 200 => {
                            if let Some(product) = resp.data {
                                name.set(product.name);
                                price.set(format_price(product.price));
                                description.set(product.description);
                                current_file.set(Some(product.file));
                            }
                        }
                        Ok(resp) => {
                            error!("product {id}: statusCode {}", resp.status_code);
                            toast::show(&notice, Toast::error(GENERIC_ERROR));
                        }
                        Err(e) => {
                            error!("product {id}: {e:?}");
                            toast::show(&notice, Toast::error(GENERIC_ERROR));
                        }
                    }
                }),
                None => {
                    name.set(String::new());
                    price.set(String::new());
                    description.set(String::new());
                    current_file.set(None);
                }
            }
            || ()
        });
    }

    let onsubmit = {
        let name = name.clone();
        let price = price.clone();
        let description = description.clone();
        let current_file = current_file.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let notice = notice.clone();
        let file_ref = file_ref.clone();
        let navigator = navigator.clone();
        let product_id = props.product_id.clone();

        Callback::from(move |ev: SubmitEvent| {
            ev.prevent_default();

            let file = selected_file(&file_ref);
            let file_name = file.as_ref().map(|f| f.name());

            let found = validate_product(
                &name,
                &price,
                &description,
                file_name.as_deref(),
                product_id.is_some(),
            );
            if !found.is_empty() {
                errors.set(found);
                return;
            }
            errors.set(FieldErrors::new());

            let form = FormData::new().unwrap();
            let _ = form.append_with_str("name", &name);
            let _ = form.append_with_str("price", &price);
            let _ = form.append_with_str("description", &description);
            if let Some(f) = &file {
                let _ = form.append_with_blob("file", f);
            }

            submitting.set(true);
            spawn_local({
                let name = name.clone();
                let price = price.clone();
                let description = description.clone();
                let current_file = current_file.clone();
                let submitting = submitting.clone();
                let notice = notice.clone();
                let file_ref = file_ref.clone();
                let navigator = navigator.clone();
                let product_id = product_id.clone();

                async move {
                    let clear_form = || {
                        name.set(String::new());
                        price.set(String::new());
                        description.set(String::new());
                        current_file.set(None);
                        if let Some(input) = file_ref.cast::<HtmlInputElement>() {
                            input.set_value("");
                        }
                    };

                    match &product_id {
                        /* update: PUT, then back to the list */
                        Some(id) => {
                            let sent = send_form::<serde_json::Value>(
                                Method::PUT,
                                &format!("/product/{id}"),
                                form,
                            )
                            .await;

                            match sent {
                                Ok(resp) if resp.status_code == 200 => {
                                    toast::show(
                                        &notice,
                                        Toast::success("Product updated successfully!"),
                                    );
                                    clear_form();
                                    submitting.set(false);

                                    TimeoutFuture::new(REDIRECT_DELAY_MS).await;
                                    navigator.push(&Route::Products);
                                }
                                Ok(resp) => {
                                    toast::show(&notice, Toast::error(resp.message_or(GENERIC_ERROR)));
                                    submitting.set(false);
                                }
                                Err(e) => {
                                    error!("update {id}: {e:?}");
                                    toast::show(&notice, Toast::error(GENERIC_ERROR));
                                    submitting.set(false);
                                }
                            }
                        }
                        /* add: POST, stay on the form */
                        None => {
                            let sent = send_form::<serde_json::Value>(
                                Method::POST,
                                "/addProduct",
                                form,
                            )
                            .await;

                            match sent {
                                Ok(resp) if resp.status_code == 201 => {
                                    toast::show(
                                        &notice,
                                        Toast::success("Product added successfully!"),
                                    );
                                    clear_form();
                                    submitting.set(false);
                                }
                                Ok(resp) => {
                                    toast::show(&notice, Toast::error(resp.message_or(GENERIC_ERROR)));
                                    submitting.set(false);
                                }
                                Err(e) => {
                                    error!("addProduct: {e:?}");
                                    toast::show(&notice, Toast::error(GENERIC_ERROR));
                                    submitting.set(false);
                                }
                            }
                        }
                    }
                }
            });
        })
    };

    let is_update = props.product_id.is_some();
    let (title, idle_label, busy_label) = if is_update {
        ("Update Product", "Update Product", "Updating Product...")
    } else {
        ("Add Product", "Add Product", "Adding Product...")
    };

    html! {
        <div class="form-page">
            <form {onsubmit}>
                <h3>{ title }</h3>

                <div class="form-group">
                    <label>{"Name"}</label>
                    <input
                        type="text"
                        placeholder="Enter product name"
                        value={(*name).clone()}
                        oninput={bind_input(&name)}
                    />
                    { field_error(&errors, "name") }
                </div>

                <div class="form-group">
                    <label>{"Price"}</label>
                    <input
                        type="text"
                        placeholder="Enter product price"
                        value={(*price).clone()}
                        oninput={bind_input(&price)}
                    />
                    { field_error(&errors, "price") }
                </div>

                <div class="form-group">
                    <label>{"Description"}</label>
                    <input
                        type="text"
                        placeholder="Enter product description"
                        value={(*description).clone()}
                        oninput={bind_input(&description)}
                    />
                    { field_error(&errors, "description") }
                </div>

                <div class="form-group">
                    <label>{"Upload Image"}</label>
                    <input ref={file_ref.clone()} type="file" accept=".jpeg,.png" />
                    { field_error(&errors, "file") }
                    {
                        match &*current_file {
                            Some(file) => html! {
                                <img class="preview" src={image_url(file)} alt={(*name).clone()} />
                            },
                            None => Html::default(),
                        }
                    }
                </div>

                <button type="submit" disabled={*submitting}>
                    { if *submitting { busy_label } else { idle_label } }
                </button>
            </form>

            <ToastHost toast={(*notice).clone()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_prefill_drops_trailing_zeros() {
        assert_eq!(format_price(10.0), "10");
        assert_eq!(format_price(9.99), "9.99");
        assert_eq!(format_price(0.5), "0.5");
    }
}
