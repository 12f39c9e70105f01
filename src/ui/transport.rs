//! `fetch`-backed transport for registration submissions

use crate::core::{AttemptOutcome, Transport};

/// Posts JSON with `window.fetch`
pub struct FetchTransport;

#[cfg(feature = "hydrate")]
impl Transport for FetchTransport {
    async fn post_json(&self, url: &str, body: &str) -> AttemptOutcome {
        use wasm_bindgen::JsCast;
        use wasm_bindgen_futures::JsFuture;
        use web_sys::{Request, RequestInit, Response};

        let result: Result<AttemptOutcome, String> = async {
            let window = web_sys::window().ok_or("No window")?;

            let opts = RequestInit::new();
            opts.set_method("POST");
            opts.set_body(&body.into());

            let req =
                Request::new_with_str_and_init(url, &opts).map_err(|e| format!("{:?}", e))?;
            req.headers()
                .set("Content-Type", "application/json")
                .map_err(|e| format!("{:?}", e))?;

            // fetch only rejects when no response arrived at all
            let resp_value = match JsFuture::from(window.fetch_with_request(&req)).await {
                Ok(value) => value,
                Err(e) => return Ok(AttemptOutcome::Unreachable(format!("{:?}", e))),
            };
            let resp: Response = resp_value.dyn_into().map_err(|e| format!("{:?}", e))?;

            let body = match resp.text() {
                Ok(promise) => JsFuture::from(promise)
                    .await
                    .ok()
                    .and_then(|v| v.as_string())
                    .unwrap_or_default(),
                Err(_) => String::new(),
            };

            Ok(AttemptOutcome::Responded {
                status: resp.status(),
                body,
            })
        }
        .await;

        result.unwrap_or_else(AttemptOutcome::Unreachable)
    }
}

#[cfg(not(feature = "hydrate"))]
impl Transport for FetchTransport {
    async fn post_json(&self, _url: &str, _body: &str) -> AttemptOutcome {
        AttemptOutcome::Unreachable("fetch is not available on the server".to_string())
    }
}
