use gloo_net::http::Method;
use log::error;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api::{fetch_json, image_url};
use crate::models::Product;
use crate::toast::{self, Toast, ToastHost};
use crate::utils::GENERIC_ERROR;
use crate::Route;

/// Local-list mutation applied after a successful backend delete.
pub fn remove_by_id(list: &[Product], id: &str) -> Vec<Product> {
    list.iter().filter(|p| p.id != id).cloned().collect()
}

/* -------------------------------------------------------------------------- */
/*                              product list view                             */
/* -------------------------------------------------------------------------- */

#[function_component(Products)]
pub fn products() -> Html {
    let navigator = use_navigator().unwrap();

    let list = use_state(Vec::<Product>::new);
    let notice = use_state(|| None::<Toast>);

    /* one fetch on mount, nothing cached */
    {
        let list = list.clone();
        let notice = notice.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match fetch_json::<(), Vec<Product>>(Method::GET, "/products", None::<&()>).await {
                    Ok(resp) if resp.status_code == 200 => {
                        list.set(resp.data.unwrap_or_default());
                    }
                    Ok(resp) => {
                        error!("products: statusCode {}", resp.status_code);
                        toast::show(&notice, Toast::error(GENERIC_ERROR));
                    }
                    Err(e) => {
                        error!("products: {e:?}");
                        toast::show(&notice, Toast::error(GENERIC_ERROR));
                    }
                }
            });
            || ()
        });
    }

    let on_update = {
        let navigator = navigator.clone();
        Callback::from(move |id: String| {
            navigator.push(&Route::UpdateProduct { id });
        })
    };

    let on_delete = {
        let list = list.clone();
        let notice = notice.clone();

        Callback::from(move |id: String| {
            let list = list.clone();
            let notice = notice.clone();

            spawn_local(async move {
                match fetch_json::<(), serde_json::Value>(
                    Method::DELETE,
                    &format!("/product/{id}"),
                    None::<&()>,
                )
                .await
                {
                    Ok(resp) if resp.status_code == 200 => {
                        list.set(remove_by_id(&list, &id));
                        toast::show(&notice, Toast::success(resp.message_or("Product deleted")));
                    }
                    Ok(resp) => {
                        toast::show(&notice, Toast::error(resp.message_or(GENERIC_ERROR)));
                    }
                    Err(e) => {
                        error!("delete {id}: {e:?}");
                        toast::show(&notice, Toast::error(GENERIC_ERROR));
                    }
                }
            });
        })
    };

    html! {
        <div class="product-grid">
            { for (*list).iter().map(|product| {
                let update = {
                    let on_update = on_update.clone();
                    let id = product.id.clone();
                    Callback::from(move |_| on_update.emit(id.clone()))
                };
                let delete = {
                    let on_delete = on_delete.clone();
                    let id = product.id.clone();
                    Callback::from(move |_| on_delete.emit(id.clone()))
                };

                html! {
                    <div class="product-card" key={product.id.clone()}>
                        <img src={image_url(&product.file)} alt={product.name.clone()} />
                        <div class="product-body">
                            <h4>{ &product.name }</h4>
                            <p>{ &product.description }</p>
                            <p><b>{"Price:"}</b>{ format!(" ${}", product.price) }</p>
                        </div>
                        <div class="button-group">
                            <button class="btn-update" onclick={update}>{"Update"}</button>
                            <button class="btn-delete" onclick={delete}>{"Delete"}</button>
                        </div>
                    </div>
                }
            }) }

            <ToastHost toast={(*notice).clone()} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.into(),
            name: name.into(),
            price: 1.0,
            description: "desc".into(),
            file: "uploads/x.png".into(),
        }
    }

    #[test]
    fn remove_by_id_drops_only_the_matching_product() {
        let list = vec![product("a", "A"), product("b", "B"), product("c", "C")];
        let out = remove_by_id(&list, "b");
        let ids: Vec<_> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn remove_by_id_with_unknown_id_is_a_no_op() {
        let list = vec![product("a", "A")];
        assert_eq!(remove_by_id(&list, "zzz"), list);
    }
}
