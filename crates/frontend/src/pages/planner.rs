use dioxus::prelude::*;
use waylight_shared::models::{LatLon, RouteResponse};

use crate::api;
use crate::components::map_view::MapView;
use crate::components::notice_stack::NoticeStack;
use crate::components::route_summary::RouteSummary;
use crate::components::status_panel::StatusPanel;
use crate::coords::{self, DEFAULT_VIEWPORT};
use crate::interaction::{MarkerBoard, MarkerRole, RoutePlanner};
use crate::notify::{notify, snap_notice, NoticeFeed};

fn marker_coord(planner: &RoutePlanner<MarkerBoard>, role: MarkerRole) -> Option<LatLon> {
    let id = match role {
        MarkerRole::Start => planner.state().start,
        MarkerRole::End => planner.state().end,
    }?;
    planner.map().coord_of(id)
}

#[component]
pub fn Planner() -> Element {
    let mut planner = use_signal(|| RoutePlanner::new(MarkerBoard::default()));
    let notices = use_signal(NoticeFeed::default);
    let mut route = use_signal(|| None::<RouteResponse>);

    // Fetch the route whenever both points are committed; clear it the
    // moment either of them goes away.
    let _route_loader = use_resource(move || {
        let pair = {
            let p = planner.read();
            marker_coord(&p, MarkerRole::Start).zip(marker_coord(&p, MarkerRole::End))
        };
        async move {
            match pair {
                Some((start, end)) => match api::fetch_route(start, end).await {
                    Ok(resp) => route.set(Some(resp)),
                    Err(e) => {
                        notify(notices, format!("Route lookup failed: {e}"));
                        route.set(None);
                    }
                },
                None => route.set(None),
            }
        }
    });

    // A map click suspends on the road lookup; the ticket makes sure a
    // late response for a superseded click is dropped, not applied.
    let on_map_click = move |at: LatLon| {
        let Some(ticket) = planner.write().begin_click() else {
            // Both markers set: the click is silently ignored.
            return;
        };
        spawn(async move {
            let effective = match api::nearest_road(at).await {
                Some(road) => {
                    notify(notices, snap_notice(road.distance_meters, &road.message));
                    road.at
                }
                None => at,
            };
            planner.write().finish_click(ticket, effective);
        });
    };

    let status_text = planner.read().status_text().to_string();
    let start = marker_coord(&planner.read(), MarkerRole::Start);
    let end = marker_coord(&planner.read(), MarkerRole::End);

    // Route geometry to overlay pixels; GeoJSON positions are [lon, lat].
    let route_points: Vec<(f64, f64)> = route
        .read()
        .as_ref()
        .map(|r| {
            r.geojson
                .geometry
                .coordinates
                .iter()
                .filter_map(|c| LatLon::new(c[1], c[0]))
                .map(|at| coords::lat_lon_to_view_px(at, DEFAULT_VIEWPORT))
                .collect()
        })
        .unwrap_or_default();

    let summary = route
        .read()
        .as_ref()
        .map(|r| (r.metadata.clone(), r.message.clone()));

    rsx! {
        div { class: "app",
            div { class: "header",
                h1 { "Waylight" }
                p { class: "tagline", "Plan a well-lit walking route" }
            }

            div { class: "sidebar",
                StatusPanel {
                    status_text: status_text,
                    start: start,
                    end: end,
                    on_reset: move |_| {
                        planner.write().reset();
                    },
                }

                if let Some((metadata, message)) = summary {
                    RouteSummary { metadata: metadata, message: message }
                }
            }

            MapView {
                planner: planner,
                route_points: route_points,
                on_map_click: on_map_click,
            }

            NoticeStack { feed: notices }
        }
    }
}
