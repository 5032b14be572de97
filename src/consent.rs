use log::{error, info, warn};
use yew::prelude::*;

use crate::config::{CONSENT_ACCEPTED, CONSENT_KEY};
use crate::error::StorageError;
use crate::storage::{BrowserStorage, KeyValueStore};

/// Cookie consent flag on top of a key-value store.
pub struct Consent<'a, S: KeyValueStore> {
    store: &'a S,
}

impl<'a, S: KeyValueStore> Consent<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Read-only; a failed read counts as "not accepted".
    pub fn is_accepted(&self) -> bool {
        match self.store.get(CONSENT_KEY) {
            Ok(value) => value.as_deref() == Some(CONSENT_ACCEPTED),
            Err(e) => {
                warn!("Could not read consent flag: {}", e);
                false
            }
        }
    }

    pub fn accept(&self) -> Result<(), StorageError> {
        self.store.set(CONSENT_KEY, CONSENT_ACCEPTED)
    }
}

#[function_component(CookieBanner)]
pub fn cookie_banner() -> Html {
    let store = use_state(|| match BrowserStorage::acquire() {
        Ok(store) => Some(store),
        Err(e) => {
            error!("Cookie banner setup failed: {}", e);
            None
        }
    });
    let visible = {
        let store = store.clone();
        use_state(move || {
            (*store)
                .as_ref()
                .map(|s| !Consent::new(s).is_accepted())
                .unwrap_or(true)
        })
    };

    let on_accept = {
        let store = store.clone();
        let visible = visible.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(s) = (*store).as_ref() {
                match Consent::new(s).accept() {
                    Ok(()) => info!("Cookie consent accepted"),
                    Err(e) => error!("Cookie consent not persisted: {}", e),
                }
            }
            visible.set(false);
        })
    };

    if !*visible {
        return html! {};
    }

    html! {
        <div id="cookieBanner" class="cookie" role="dialog" aria-live="polite">
            <p class="cookie__text">
                {"We use cookies to improve your experience. By continuing you agree to our cookie policy."}
            </p>
            <button id="cookieAccept" class="btn btn--small" onclick={on_accept}>
                {"Accept"}
            </button>
        </div>
    }
}
