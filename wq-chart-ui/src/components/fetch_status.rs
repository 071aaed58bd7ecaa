//! Placeholder shown while the dataset request is in flight.

use dioxus::prelude::*;
use wq_socrata::endpoint::Endpoint;

#[derive(Props, Clone, PartialEq)]
pub struct FetchStatusProps {
    pub endpoint: Endpoint,
}

#[component]
pub fn FetchStatus(props: FetchStatusProps) -> Element {
    let host = props.endpoint.host().to_string();
    let limit = props.endpoint.limit;
    rsx! {
        div {
            style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
            "Fetching up to {limit} water quality records from {host}..."
        }
    }
}
