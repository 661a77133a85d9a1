//! Sign-in page: username + password form posting to the sign-in endpoint.

#[cfg(test)]
#[path = "sign_in_test.rs"]
mod sign_in_test;

use leptos::prelude::*;

use crate::form::state::{NoticeKind, SignInForm, SubmissionState};
use crate::form::values::{Field, validate};

fn submit_label(status: SubmissionState) -> &'static str {
    if status == SubmissionState::Submitting { "Signing in..." } else { "Sign in →" }
}

fn notice_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "signin-notice signin-notice--success",
        NoticeKind::Failure => "signin-notice signin-notice--failure",
    }
}

/// Store inline errors for invalid values. Returns `true` when submit should stop.
fn flag_invalid(form: &mut SignInForm) -> bool {
    if validate(&form.values).is_ok() {
        return false;
    }
    let _ = form.begin_submit();
    true
}

fn input_class(has_error: bool) -> &'static str {
    if has_error { "signin-input signin-input--invalid" } else { "signin-input" }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let form = RwSignal::new(SignInForm::default());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with(SignInForm::is_submit_disabled) {
            return;
        }
        if form.try_update(flag_invalid).unwrap_or(true) {
            return;
        }

        #[cfg(feature = "csr")]
        {
            let controller = crate::form::controller::FormController::new(
                form,
                crate::net::api::FetchTransport,
                crate::config::EndpointConfig::from_build_env(),
            );
            leptos::task::spawn_local(async move {
                let _ = controller.submit().await;
            });
        }
    };

    view! {
        <div class="signin-page">
            <div class="signin-card">
                <h2 class="signin-card__title">"Sign in to your account"</h2>
                <p class="signin-card__subtitle">"Enter your username and password"</p>
                <form class="signin-form" on:submit=on_submit novalidate=true>
                    <FieldInput form=form field=Field::Username label="Username" input_type="text" placeholder="jdoe"/>
                    <FieldInput
                        form=form
                        field=Field::Password
                        label="Password"
                        input_type="password"
                        placeholder="••••••••"
                    />
                    <button
                        class="signin-button"
                        type="submit"
                        disabled=move || form.with(SignInForm::is_submit_disabled)
                    >
                        {move || submit_label(form.with(|f| f.status))}
                    </button>
                </form>
                {move || {
                    form.with(|f| f.notice.clone())
                        .map(|notice| {
                            view! { <p class=notice_class(notice.kind)>{notice.message}</p> }
                        })
                }}
            </div>
        </div>
    }
}

/// Labelled input bound to one form field, with its inline error.
#[component]
fn FieldInput(
    form: RwSignal<SignInForm>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let error = move || form.with(|f| f.error(field));

    view! {
        <div class="signin-field">
            <label class="signin-field__label" for=field.name()>
                {label}
            </label>
            <input
                id=field.name()
                name=field.name()
                class=move || input_class(error().is_some())
                type=input_type
                placeholder=placeholder
                prop:value=move || form.with(|f| f.values.get(field).to_owned())
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
            <Show when=move || error().is_some()>
                <p class="signin-field__error">{move || error().unwrap_or_default()}</p>
            </Show>
        </div>
    }
}
