use dioxus::prelude::*;
use waylight_shared::geo;
use waylight_shared::models::RouteMetadata;

/// "14 of 18 segments lit (78%)".
fn lit_summary(meta: &RouteMetadata) -> String {
    format!(
        "{} of {} segments lit ({:.0}%)",
        meta.lit_segments_count, meta.total_segments, meta.lit_percentage
    )
}

/// Start/end proximity line for a point of interest, when the service
/// reported one.
fn proximity_summary(start_m: Option<f64>, end_m: Option<f64>) -> Option<String> {
    match (start_m, end_m) {
        (Some(s), Some(e)) => Some(format!(
            "{} from start, {} from destination",
            geo::format_distance(s),
            geo::format_distance(e)
        )),
        (Some(s), None) => Some(format!("{} from start", geo::format_distance(s))),
        (None, Some(e)) => Some(format!("{} from destination", geo::format_distance(e))),
        (None, None) => None,
    }
}

#[component]
pub fn RouteSummary(metadata: RouteMetadata, message: String) -> Element {
    let distance = geo::format_distance(metadata.total_distance_meters);
    let safety = format!(
        "{} ({:.0}%)",
        metadata.safety_rating, metadata.safety_percentage
    );
    let lighting = lit_summary(&metadata);
    let police = proximity_summary(
        metadata.nearest_police_start_meters,
        metadata.nearest_police_end_meters,
    );
    let lights = proximity_summary(
        metadata.nearest_light_start_meters,
        metadata.nearest_light_end_meters,
    );

    rsx! {
        div { class: "panel",
            h3 { "Route" }
            if !message.is_empty() {
                p { class: "route-message", "{message}" }
            }
            div { class: "summary-row",
                span { class: "summary-label", "Distance" }
                span { class: "summary-value", "{distance}" }
            }
            div { class: "summary-row",
                span { class: "summary-label", "Safety" }
                span { class: "summary-value", "{safety}" }
            }
            div { class: "summary-row",
                span { class: "summary-label", "Lighting" }
                span { class: "summary-value", "{lighting}" }
            }
            if let Some(p) = police {
                div { class: "summary-row",
                    span { class: "summary-label", "Police" }
                    span { class: "summary-value", "{p}" }
                }
            }
            if let Some(l) = lights {
                div { class: "summary-row",
                    span { class: "summary-label", "Street lights" }
                    span { class: "summary-value", "{l}" }
                }
            }
        }
    }
}
