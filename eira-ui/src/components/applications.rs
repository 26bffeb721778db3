//! Applications Component
//!
//! Lists the user's relay application and hosts the create form.

use leptos::*;

use crate::api::{Application, HttpRelay, User};
use crate::state::{remove_application, submit_application, CookieSession, FormError, SessionOutcome};

/// What the Applications section shows above the create form
#[derive(Clone, Debug, PartialEq)]
pub enum ApplicationsView {
    /// No application yet and the form is hidden
    CreateButton,
    /// One row per registered application
    Rows(Vec<Application>),
    /// No application and the form is open
    Nothing,
}

pub fn applications_view(apps: &[Application], show_form: bool) -> ApplicationsView {
    if !apps.is_empty() {
        ApplicationsView::Rows(apps.to_vec())
    } else if show_form {
        ApplicationsView::Nothing
    } else {
        ApplicationsView::CreateButton
    }
}

/// Applications section of the dashboard
#[component]
pub fn Applications(
    user: RwSignal<Option<User>>,
    /// Called with the reloaded session after a delete
    #[prop(into)]
    on_outcome: Callback<SessionOutcome>,
    /// Called when a form action finds the session gone
    #[prop(into)]
    on_signed_out: Callback<()>,
) -> impl IntoView {
    let show_form = create_rw_signal(false);
    let error = create_rw_signal(None::<String>);

    let applications =
        move || user.with(|u| u.as_ref().map(|u| u.applications.clone()).unwrap_or_default());

    view! {
        <div class="details">
            <h3>"Applications"</h3>
            <hr class="hrW" />
            <span>
                "Currently the " <b>"TwitchIO Token Relay"</b>
                " service only allows one application per user."
            </span>

            {move || match applications_view(&applications(), show_form.get()) {
                ApplicationsView::CreateButton => view! {
                    <button
                        type="button"
                        class="simpleButton"
                        on:click=move |_| show_form.set(true)
                    >
                        "+ Create New"
                    </button>
                }
                .into_view(),
                ApplicationsView::Rows(apps) => apps
                    .into_iter()
                    .map(|app| view! {
                        <ApplicationRow
                            app=app
                            user=user
                            error=error
                            on_outcome=on_outcome
                            on_signed_out=on_signed_out
                        />
                    })
                    .collect_view(),
                ApplicationsView::Nothing => ().into_view(),
            }}

            {move || {
                if show_form.get() {
                    view! {
                        <ApplicationForm
                            user=user
                            show_form=show_form
                            error=error
                            on_signed_out=on_signed_out
                        />
                    }
                    .into_view()
                } else {
                    error.get()
                        .map(|msg| view! { <span class="warningRed">{msg}</span> })
                        .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn ApplicationRow(
    app: Application,
    user: RwSignal<Option<User>>,
    error: RwSignal<Option<String>>,
    on_outcome: Callback<SessionOutcome>,
    on_signed_out: Callback<()>,
) -> impl IntoView {
    let (deleting, set_deleting) = create_signal(false);

    let on_delete = move |_| {
        let Some(current) = user.get_untracked() else {
            return;
        };

        set_deleting.set(true);
        error.set(None);

        spawn_local(async move {
            match remove_application(&CookieSession, &HttpRelay, &current).await {
                Ok(outcome) => on_outcome.call(outcome),
                Err(FormError::SignedOut) => on_signed_out.call(()),
                Err(e) => error.set(Some(e.to_string())),
            }
            set_deleting.set(false);
        });
    };

    view! {
        <div>
            <div class="appDetails">
                <b class="lightPurple">{app.application_name}</b>
                <span>{app.client_id}</span>
                <span>{format!("{} auths", app.auths)}</span>
                <button
                    type="button"
                    class="simpleButton"
                    disabled=move || deleting.get()
                    on:click=on_delete
                >
                    {move || if deleting.get() { "Deleting..." } else { "Delete" }}
                </button>
            </div>
            <hr class="hrW" />
        </div>
    }
}

#[component]
fn ApplicationForm(
    user: RwSignal<Option<User>>,
    show_form: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    on_signed_out: Callback<()>,
) -> impl IntoView {
    let (name, set_name) = create_signal(String::new());
    let (client_id, set_client_id) = create_signal(String::new());
    let (saving, set_saving) = create_signal(false);

    let on_save = move |_| {
        let name = name.get_untracked();
        let client_id = client_id.get_untracked();

        set_saving.set(true);

        spawn_local(async move {
            match submit_application(&CookieSession, &HttpRelay, &name, &client_id).await {
                Ok(updated) => {
                    error.set(None);
                    show_form.set(false);
                    user.set(Some(updated));
                }
                Err(FormError::SignedOut) => on_signed_out.call(()),
                Err(e) => error.set(Some(e.to_string())),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="appForm">
            <span>
                "Please complete the form below to create a new application. The name and Client-ID \
                 should match the application you created on the "
                <a href="https://dev.twitch.tv/console" rel="external">"Twitch Developer Console."</a>
            </span>

            <span class="lightPurple"><b>"Name:"</b></span>
            <input
                type="text"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />

            <span class="lightPurple"><b>"Client-ID:"</b></span>
            <input
                type="text"
                prop:value=move || client_id.get()
                on:input=move |ev| set_client_id.set(event_target_value(&ev))
            />

            {move || error.get().map(|msg| view! { <span class="warningRed">{msg}</span> })}

            <button
                type="button"
                class="simpleButton"
                disabled=move || saving.get()
                on:click=on_save
            >
                {move || if saving.get() { "Saving..." } else { "Save" }}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::testing::{bob, bob_with_app};

    #[test]
    fn test_user_without_application_gets_create_button() {
        assert_eq!(
            applications_view(&bob().applications, false),
            ApplicationsView::CreateButton
        );
    }

    #[test]
    fn test_open_form_hides_create_button() {
        assert_eq!(applications_view(&bob().applications, true), ApplicationsView::Nothing);
    }

    #[test]
    fn test_registered_application_is_listed() {
        let user = bob_with_app();

        for show_form in [false, true] {
            assert_eq!(
                applications_view(&user.applications, show_form),
                ApplicationsView::Rows(user.applications.clone())
            );
        }
    }
}
