//! REST helpers for campsite data and comment posting.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error, since the page fetches its
//! data after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as display-ready strings (`Error 404: Not Found`) that the
//! page renders verbatim in its error view; nothing here panics.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Campsite, CampsiteId, Comment, CommentSubmission};

pub const CAMPSITES_ENDPOINT: &str = "/api/campsites";
pub const COMMENTS_ENDPOINT: &str = "/api/comments";

#[cfg(not(feature = "hydrate"))]
const SSR_UNAVAILABLE: &str = "not available during server rendering";

pub fn campsite_endpoint(id: CampsiteId) -> String {
    format!("{CAMPSITES_ENDPOINT}/{id}")
}

pub fn campsite_comments_endpoint(id: CampsiteId) -> String {
    format!("{CAMPSITES_ENDPOINT}/{id}/comments")
}

/// Message for a non-2xx response.
pub fn status_error_message(status: u16, status_text: &str) -> String {
    if status_text.is_empty() {
        format!("Error {status}")
    } else {
        format!("Error {status}: {status_text}")
    }
}

/// Message shown when a comment post fails.
pub fn post_failed_message(reason: &str) -> String {
    format!("Your comment could not be posted. Error: {reason}")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(status_error_message(resp.status(), &resp.status_text()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch every campsite for the directory listing.
pub async fn fetch_campsites() -> Result<Vec<Campsite>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(CAMPSITES_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

/// Fetch a single campsite.
pub async fn fetch_campsite(id: CampsiteId) -> Result<Campsite, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&campsite_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

/// Fetch the comments for a campsite in server order.
pub async fn fetch_comments(id: CampsiteId) -> Result<Vec<Comment>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&campsite_comments_endpoint(id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
        Err(SSR_UNAVAILABLE.to_owned())
    }
}

/// Post a validated comment; returns the stored comment with id and date.
pub async fn post_comment(submission: &CommentSubmission) -> Result<Comment, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(COMMENTS_ENDPOINT)
            .json(submission)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(status_error_message(resp.status(), &resp.status_text()));
        }
        resp.json::<Comment>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = submission;
        Err(SSR_UNAVAILABLE.to_owned())
    }
}
