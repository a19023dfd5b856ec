use yew::prelude::*;
use crate::settings;

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn alert_class(&self) -> &'static str {
        match self {
            ToastKind::Success => "alert-success",
            ToastKind::Warning => "alert-warning",
            ToastKind::Error => "alert-error",
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub message: String,
    pub kind: ToastKind,
}

/// Non-blocking user notifications: validation messages and report failures.
#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<(String, ToastKind)>,
    pub remove_toast: Callback<usize>,
}

impl ToastContext {
    pub fn show_success(&self, message: String) {
        self.add_toast.emit((message, ToastKind::Success));
    }

    pub fn show_warning(&self, message: String) {
        self.add_toast.emit((message, ToastKind::Warning));
    }

    pub fn show_error(&self, message: String) {
        self.add_toast.emit((message, ToastKind::Error));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    // Shared vector so the dismiss timer sees toasts added after it was armed
    let toasts = use_mut_ref(Vec::<Toast>::new);
    let next_id = use_mut_ref(|| 0usize);
    let redraw = use_force_update();

    let remove_toast = {
        let toasts = toasts.clone();
        let redraw = redraw.clone();
        Callback::from(move |id: usize| {
            toasts.borrow_mut().retain(|t| t.id != id);
            redraw.force_update();
        })
    };

    let add_toast = {
        let toasts = toasts.clone();
        let remove_toast = remove_toast.clone();
        Callback::from(move |(message, kind): (String, ToastKind)| {
            let id = {
                let mut next_id = next_id.borrow_mut();
                *next_id += 1;
                *next_id
            };
            toasts.borrow_mut().push(Toast { id, message, kind });
            redraw.force_update();

            let remove_toast = remove_toast.clone();
            let duration = settings::get_settings().toast_duration_ms;
            gloo_timers::callback::Timeout::new(duration, move || remove_toast.emit(id)).forget();
        })
    };

    let context = ToastContext {
        add_toast,
        remove_toast: remove_toast.clone(),
    };
    let current = toasts.borrow().clone();

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for current.into_iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class={classes!("alert", toast.kind.alert_class(), "shadow-lg")}>
                            <span>{toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>{"✕"}</button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
