use dioxus::prelude::*;
use waylight_shared::geo;
use waylight_shared::models::LatLon;

#[component]
pub fn StatusPanel(
    status_text: String,
    start: Option<LatLon>,
    end: Option<LatLon>,
    on_reset: EventHandler<()>,
) -> Element {
    let crow_flies = start
        .zip(end)
        .map(|(s, e)| geo::format_distance(geo::haversine_meters(s, e)));

    rsx! {
        div { class: "panel",
            h3 { "Route points" }
            p { class: "status-line", "{status_text}" }

            if let Some(s) = start {
                div { class: "coord-row",
                    span { class: "coord-info start-coord", "Start: {s}" }
                }
            }
            if let Some(e) = end {
                div { class: "coord-row",
                    span { class: "coord-info end-coord", "Destination: {e}" }
                }
            }
            if let Some(d) = crow_flies {
                p { class: "crow-flies", "Straight line: {d}" }
            }

            div { style: "margin-top: 8px;",
                button {
                    onclick: move |_| on_reset.call(()),
                    "Reset markers"
                }
            }
        }
    }
}
