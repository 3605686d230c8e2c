use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

/* transient on-screen notification */

#[derive(Clone, PartialEq, Debug)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Clone, PartialEq, Debug)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

impl Toast {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: ToastKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: ToastKind::Error, text: text.into() }
    }
}

const DISMISS_MS: u32 = 3_000;

/// Show a toast and auto-dismiss it.
pub fn show(handle: &UseStateHandle<Option<Toast>>, toast: Toast) {
    handle.set(Some(toast));

    let handle = handle.clone();
    spawn_local(async move {
        TimeoutFuture::new(DISMISS_MS).await;
        handle.set(None);
    });
}

#[derive(Properties, PartialEq)]
pub struct ToastHostProps {
    pub toast: Option<Toast>,
}

#[function_component(ToastHost)]
pub fn toast_host(props: &ToastHostProps) -> Html {
    match &props.toast {
        Some(toast) => {
            let class = match toast.kind {
                ToastKind::Success => "toast toast-success",
                ToastKind::Error => "toast toast-error",
            };
            html!(<div {class}>{ &toast.text }</div>)
        }
        None => Html::default(),
    }
}
