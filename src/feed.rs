use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AbortController, AbortSignal};
use yew::prelude::*;

use crate::config::{self, FEED_LIMIT};

const CARD_TAG: &str = "API • GET";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("could not parse feed: {0}")]
    Parse(String),
}

#[derive(Deserialize)]
struct Address {
    city: String,
}

#[derive(Deserialize)]
struct Company {
    name: String,
}

/// One record of the placeholder `/users` endpoint; unused fields are ignored.
#[derive(Deserialize)]
struct RemoteUser {
    email: String,
    website: String,
    address: Address,
    company: Company,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeedItem {
    pub organization: String,
    pub city: String,
    pub email: String,
    pub website: String,
}

impl From<RemoteUser> for FeedItem {
    fn from(user: RemoteUser) -> Self {
        Self {
            organization: user.company.name,
            city: user.address.city,
            email: user.email,
            website: user.website,
        }
    }
}

/// Decodes a response body into at most `FEED_LIMIT` cards, in response
/// order. Records past the limit are never inspected.
pub fn parse_feed(body: &str) -> Result<Vec<FeedItem>, FeedError> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|e| FeedError::Parse(e.to_string()))?;

    records
        .into_iter()
        .take(FEED_LIMIT)
        .map(|record| {
            serde_json::from_value::<RemoteUser>(record)
                .map(FeedItem::from)
                .map_err(|e| FeedError::Parse(e.to_string()))
        })
        .collect()
}

pub async fn fetch_destinations(
    url: &str,
    signal: Option<&AbortSignal>,
) -> Result<Vec<FeedItem>, FeedError> {
    let response = Request::get(url)
        .abort_signal(signal)
        .send()
        .await
        .map_err(|e| FeedError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FeedError::Status(response.status()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| FeedError::Network(e.to_string()))?;
    parse_feed(&body)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedStatus {
    Loading,
    Loaded,
    Failed,
}

impl FeedStatus {
    pub fn message(self) -> &'static str {
        match self {
            FeedStatus::Loading => "Loading data...",
            FeedStatus::Loaded => "Data loaded successfully.",
            FeedStatus::Failed => "Failed to load data from server.",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeedState {
    pub status: FeedStatus,
    pub items: Vec<FeedItem>,
}

impl FeedState {
    pub fn loading() -> Self {
        Self {
            status: FeedStatus::Loading,
            items: Vec::new(),
        }
    }

    /// Failures never keep partial results.
    pub fn from_result(result: Result<Vec<FeedItem>, FeedError>) -> Self {
        match result {
            Ok(items) => Self {
                status: FeedStatus::Loaded,
                items,
            },
            Err(_) => Self {
                status: FeedStatus::Failed,
                items: Vec::new(),
            },
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Hands out tickets for feed loads. Starting a load or cancelling makes
/// every earlier ticket stale, so only the newest load may publish results.
#[derive(Debug, Default)]
pub struct LoadTracker {
    generation: u64,
}

impl LoadTracker {
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    pub fn cancel(&mut self) {
        self.generation += 1;
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.generation
    }
}

type Shared<T> = Rc<RefCell<T>>;

fn load(
    feed: UseStateHandle<FeedState>,
    tracker: Shared<LoadTracker>,
    controller: Shared<Option<AbortController>>,
) {
    let ticket = tracker.borrow_mut().begin();
    if let Some(previous) = controller.borrow_mut().take() {
        previous.abort();
    }

    let abort = AbortController::new().ok();
    let signal = abort.as_ref().map(|c| c.signal());
    *controller.borrow_mut() = abort;

    feed.set(FeedState::loading());
    info!("Loading destinations from {}", config::get_feed_url());

    spawn_local(async move {
        let result = fetch_destinations(config::get_feed_url(), signal.as_ref()).await;

        if !tracker.borrow().is_current(ticket) {
            info!("Dropping stale destinations response");
            return;
        }
        controller.borrow_mut().take();

        match &result {
            Ok(items) => info!("Loaded {} destinations", items.len()),
            Err(e) => warn!("Destinations feed failed: {}", e),
        }
        feed.set(FeedState::from_result(result));
    });
}

fn render_card(item: &FeedItem) -> Html {
    html! {
        <article class="card">
            <div class="card__body">
                <h3 class="card__name">{&item.organization}</h3>
                <p class="card__meta">{format!("City: {}", item.city)}</p>
                <p class="card__meta">{format!("Email: {}", item.email)}</p>
                <p class="card__meta">{format!("Website: {}", item.website)}</p>
                <span class="tag">{CARD_TAG}</span>
            </div>
        </article>
    }
}

#[function_component(DestinationsGrid)]
pub fn destinations_grid() -> Html {
    let feed = use_state(FeedState::loading);
    let tracker = use_mut_ref(LoadTracker::default);
    let controller = use_mut_ref(|| None::<AbortController>);

    {
        let feed = feed.clone();
        use_effect_with_deps(
            move |_| {
                load(feed, tracker.clone(), controller.clone());
                move || {
                    tracker.borrow_mut().cancel();
                    if let Some(pending) = controller.borrow_mut().take() {
                        pending.abort();
                    }
                }
            },
            (),
        );
    }

    html! {
        <>
            <div id="destinationsGrid" class="grid">
                { for feed.items.iter().map(render_card) }
            </div>
            <p id="apiNote" class="note">{feed.status.message()}</p>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user(i: usize) -> serde_json::Value {
        json!({
            "id": i,
            "name": format!("User {i}"),
            "username": format!("user{i}"),
            "email": format!("user{i}@example.com"),
            "address": {
                "street": "Kulas Light",
                "city": format!("City {i}"),
                "geo": { "lat": "-37.3159", "lng": "81.1496" }
            },
            "phone": "1-770-736-8031 x56442",
            "website": format!("site{i}.org"),
            "company": { "name": format!("Company {i}"), "bs": "harness real-time e-markets" }
        })
    }

    fn payload(n: usize) -> String {
        json!((1..=n).map(user).collect::<Vec<_>>()).to_string()
    }

    #[test]
    fn keeps_first_six_in_order() {
        let items = parse_feed(&payload(10)).unwrap();
        assert_eq!(items.len(), 6);
        for (i, item) in items.iter().enumerate() {
            let n = i + 1;
            assert_eq!(item.organization, format!("Company {n}"));
            assert_eq!(item.city, format!("City {n}"));
            assert_eq!(item.email, format!("user{n}@example.com"));
            assert_eq!(item.website, format!("site{n}.org"));
        }
    }

    #[test]
    fn short_payload_renders_what_it_has() {
        assert_eq!(parse_feed(&payload(3)).unwrap().len(), 3);
        assert!(parse_feed("[]").unwrap().is_empty());
    }

    #[test]
    fn records_past_the_limit_are_not_validated() {
        let mut records: Vec<_> = (1..=6).map(user).collect();
        records.push(json!({ "broken": true }));
        let items = parse_feed(&json!(records).to_string()).unwrap();
        assert_eq!(items.len(), 6);
    }

    #[test]
    fn malformed_record_in_range_fails_whole_feed() {
        let records = vec![user(1), json!({ "email": "x@y.z" })];
        let err = parse_feed(&json!(records).to_string()).unwrap_err();
        assert!(matches!(err, FeedError::Parse(_)));
    }

    #[test]
    fn non_json_body_is_parse_error() {
        assert!(matches!(parse_feed("<html>"), Err(FeedError::Parse(_))));
        assert!(matches!(parse_feed("{}"), Err(FeedError::Parse(_))));
    }

    #[test]
    fn success_state_keeps_items() {
        let state = FeedState::from_result(parse_feed(&payload(8)));
        assert_eq!(state.status, FeedStatus::Loaded);
        assert_eq!(state.items.len(), 6);
    }

    #[test]
    fn every_failure_collapses_to_one_message() {
        for err in [
            FeedError::Network("offline".into()),
            FeedError::Status(500),
            FeedError::Parse("eof".into()),
        ] {
            let state = FeedState::from_result(Err(err));
            assert!(state.items.is_empty());
            assert_eq!(state.status.message(), "Failed to load data from server.");
        }
    }

    #[test]
    fn loading_state_is_empty() {
        let state = FeedState::loading();
        assert!(state.items.is_empty());
        assert_eq!(state.status.message(), "Loading data...");
    }

    #[test]
    fn newer_load_makes_older_ticket_stale() {
        let mut tracker = LoadTracker::default();
        let first = tracker.begin();
        assert!(tracker.is_current(first));
        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn cancel_invalidates_outstanding_ticket() {
        let mut tracker = LoadTracker::default();
        let ticket = tracker.begin();
        tracker.cancel();
        assert!(!tracker.is_current(ticket));
    }
}
