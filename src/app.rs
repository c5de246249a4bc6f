//! Root component: builds the provider and handlers once and shares them
//! through context.

use crate::{
    app_lib::config::AppConfig,
    components::Modal,
    features::auth::{
        firebase::FirebaseAuth,
        listener::watch_auth_state,
        state::{ActionsHandle, AuthContext},
        AuthActions,
    },
    routes::{AuthPage, MainPage},
};
use leptos::{prelude::*, task::spawn_local};
use std::rc::Rc;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    let locale = config.locale;
    let auth = AuthContext::new();

    let provider = Rc::new(FirebaseAuth::new(config));
    let actions = Rc::new(AuthActions::new(
        Rc::clone(&provider),
        auth,
        locale.messages(),
    ));
    let _subscription = watch_auth_state(provider.as_ref(), auth);

    spawn_local(async move {
        provider.initialize().await;
    });

    provide_context(auth);
    provide_context(locale);
    provide_context(ActionsHandle::new(actions));

    view! {
        <MainPage />
        <AuthPage />
        <Modal />
    }
}
