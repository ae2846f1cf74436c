//! HTTP clients for the nearest-road lookup and the route service.
//!
//! Snapping is best-effort: any transport failure, non-success status, or
//! unparseable body degrades to "no snap" with a console warning, and the
//! raw click coordinate is used unchanged. Exactly one lookup is made per
//! placing click; there is no retry and no caching.

use wasm_bindgen::JsValue;
use waylight_shared::models::{
    LatLon, NearestRoadRequest, NearestRoadResponse, RouteRequest, RouteResponse,
};

/// A successful snap: where the point moved, how far, and the service's
/// explanatory message.
#[derive(Debug, Clone, PartialEq)]
pub struct SnappedRoad {
    pub at: LatLon,
    pub distance_meters: f64,
    pub message: String,
}

fn api_origin() -> String {
    // Same origin in production; the dev proxy rewrites in dev.
    let window = web_sys::window().unwrap();
    window.location().origin().unwrap()
}

fn warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

/// Interpret a lookup response body. Pure so it is testable off-wasm.
pub fn parse_nearest_road(body: &str) -> Result<Option<SnappedRoad>, serde_json::Error> {
    let NearestRoadResponse { coord, message } = serde_json::from_str(body)?;
    Ok(coord.and_then(|c| {
        LatLon::new(c.lat, c.lon).map(|at| SnappedRoad {
            at,
            distance_meters: c.distance_meters,
            message,
        })
    }))
}

/// Ask the nearest-road service whether a routable road lies near `at`.
///
/// `Some` carries the snapped coordinate the caller must substitute for
/// the raw one; `None` means "use the click as-is" and covers both the
/// no-road answer and every failure mode.
pub async fn nearest_road(at: LatLon) -> Option<SnappedRoad> {
    let body = NearestRoadRequest {
        lat: at.lat,
        lon: at.lon,
    };

    let resp = reqwest::Client::new()
        .post(format!("{}/nearestRoad", api_origin()))
        .json(&body)
        .send()
        .await;

    let resp = match resp {
        Ok(r) => r,
        Err(e) => {
            warn(&format!("nearest-road lookup failed: {e}"));
            return None;
        }
    };
    if !resp.status().is_success() {
        warn(&format!(
            "nearest-road lookup returned {}",
            resp.status().as_u16()
        ));
        return None;
    }

    let text = match resp.text().await {
        Ok(t) => t,
        Err(e) => {
            warn(&format!("nearest-road response unreadable: {e}"));
            return None;
        }
    };
    match parse_nearest_road(&text) {
        Ok(snap) => snap,
        Err(e) => {
            warn(&format!("nearest-road response malformed: {e}"));
            None
        }
    }
}

/// Fetch a computed route between the two committed points. Unlike the
/// lookup, failures here are surfaced to the caller (as a notice, not a
/// modal) because there is nothing sensible to fall back to.
pub async fn fetch_route(start: LatLon, end: LatLon) -> Result<RouteResponse, String> {
    let resp = reqwest::Client::new()
        .post(format!("{}/route", api_origin()))
        .json(&RouteRequest { start, end })
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !resp.status().is_success() {
        return Err(format!("route service returned {}", resp.status().as_u16()));
    }

    resp.json::<RouteResponse>().await.map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_snapped_coord() {
        let body = r#"{"coord":{"lat":51.5007,"lon":-0.1002,"distanceMeters":12.3},"message":"Moved to the nearest footpath"}"#;
        let snap = parse_nearest_road(body).unwrap().unwrap();
        assert_eq!(snap.at, LatLon::new(51.5007, -0.1002).unwrap());
        assert_eq!(snap.distance_meters, 12.3);
        assert_eq!(snap.message, "Moved to the nearest footpath");
    }

    #[test]
    fn test_parse_null_coord_means_no_snap() {
        let body = r#"{"coord":null,"message":"Point is already on a road"}"#;
        assert!(parse_nearest_road(body).unwrap().is_none());
    }

    #[test]
    fn test_parse_malformed_body_is_error() {
        assert!(parse_nearest_road("not json").is_err());
        assert!(parse_nearest_road(r#"{"coord":5}"#).is_err());
    }

    #[test]
    fn test_parse_empty_message_tolerated() {
        let body = r#"{"coord":{"lat":51.5,"lon":-0.1,"distanceMeters":3.0}}"#;
        let snap = parse_nearest_road(body).unwrap().unwrap();
        assert!(snap.message.is_empty());
    }

    #[test]
    fn test_request_body_wire_names() {
        let body = serde_json::to_value(NearestRoadRequest {
            lat: 51.5,
            lon: -0.1,
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"lat": 51.5, "lon": -0.1}));
    }
}
