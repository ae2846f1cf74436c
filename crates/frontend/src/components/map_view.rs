use dioxus::prelude::*;
use waylight_shared::models::LatLon;

use crate::coords::{self, MapViewport, DEFAULT_VIEWPORT, VIEW_HEIGHT_PX, VIEW_WIDTH_PX};
use crate::interaction::{MarkerBoard, MarkerRole, PlacedMarker, RoutePlanner};
use crate::state::Phase;

pub const MAP_SURFACE_ID: &str = "route-map-surface";

/// Graticule spacing in degrees.
const GRID_STEP_DEG: f64 = 0.02;

// ---------------------------------------------------------------------------
// SVG builders (pure, unit-tested)
// ---------------------------------------------------------------------------

/// Build the lat/lon graticule for the viewport.
fn build_graticule(svg: &mut String, vp: MapViewport) {
    let first_lon = (vp.west / GRID_STEP_DEG).ceil() as i64;
    let last_lon = (vp.east / GRID_STEP_DEG).floor() as i64;
    for i in first_lon..=last_lon {
        let lon = i as f64 * GRID_STEP_DEG;
        let (x, _) = coords::lat_lon_to_view_px(
            LatLon { lat: vp.north, lon },
            vp,
        );
        svg.push_str(&format!(
            r#"<line x1="{x}" y1="0" x2="{x}" y2="{VIEW_HEIGHT_PX}" stroke="rgba(255,255,255,0.12)" stroke-width="1"/>"#
        ));
    }

    let first_lat = (vp.south / GRID_STEP_DEG).ceil() as i64;
    let last_lat = (vp.north / GRID_STEP_DEG).floor() as i64;
    for i in first_lat..=last_lat {
        let lat = i as f64 * GRID_STEP_DEG;
        let (_, y) = coords::lat_lon_to_view_px(
            LatLon { lat, lon: vp.west },
            vp,
        );
        svg.push_str(&format!(
            r#"<line x1="0" y1="{y}" x2="{VIEW_WIDTH_PX}" y2="{y}" stroke="rgba(255,255,255,0.12)" stroke-width="1"/>"#
        ));
    }
}

/// Draw the computed route as a polyline in view pixels.
fn build_route_line(svg: &mut String, points: &[(f64, f64)]) {
    if points.len() < 2 {
        return;
    }
    let mut attr = String::with_capacity(points.len() * 16);
    for (i, (x, y)) in points.iter().enumerate() {
        if i > 0 {
            attr.push(' ');
        }
        attr.push_str(&format!("{x:.1},{y:.1}"));
    }
    svg.push_str(&format!(
        r##"<polyline points="{attr}" fill="none" stroke="#5ab882" stroke-width="4" stroke-linejoin="round" stroke-linecap="round" opacity="0.9"/>"##
    ));
}

fn build_overlay_svg(vp: MapViewport, route_points: &[(f64, f64)]) -> String {
    let mut svg = String::with_capacity(4096);
    build_graticule(&mut svg, vp);
    build_route_line(&mut svg, route_points);
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {VIEW_WIDTH_PX} {VIEW_HEIGHT_PX}" preserveAspectRatio="none" style="position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;">{svg}</svg>"#
    )
}

fn marker_style(marker: &PlacedMarker, vp: MapViewport) -> String {
    let (x, y) = coords::lat_lon_to_view_px(marker.at, vp);
    format!(
        "left: {:.3}%; top: {:.3}%;",
        x / VIEW_WIDTH_PX * 100.0,
        y / VIEW_HEIGHT_PX * 100.0
    )
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

#[component]
pub fn MapView(
    planner: Signal<RoutePlanner<MarkerBoard>>,
    route_points: Vec<(f64, f64)>,
    on_map_click: EventHandler<LatLon>,
) -> Element {
    let overlay = build_overlay_svg(DEFAULT_VIEWPORT, &route_points);

    // Further clicks are no-ops once both points are committed; the
    // cursor says so.
    let surface_class = match planner.read().phase() {
        Phase::BothSet => "map-surface complete",
        _ => "map-surface",
    };

    // Per-marker view data: (marker, class, tooltip, glyph, position).
    let pins: Vec<(PlacedMarker, &'static str, &'static str, &'static str, String)> =
        RoutePlanner::map(&planner.read())
        .markers()
        .iter()
        .map(|&marker| {
            let (class, tooltip, glyph) = match marker.role {
                MarkerRole::Start => ("map-marker start", "Start (click to remove)", "S"),
                MarkerRole::End => ("map-marker end", "Destination (click to remove)", "D"),
            };
            let style = marker_style(&marker, DEFAULT_VIEWPORT);
            (marker, class, tooltip, glyph, style)
        })
        .collect();

    rsx! {
        div {
            id: MAP_SURFACE_ID,
            class: "{surface_class}",

            onclick: move |evt: Event<MouseData>| {
                let client = evt.client_coordinates();
                // Clicks that don't resolve to a finite coordinate are dropped.
                if let Some(at) =
                    coords::click_to_lat_lon(client.x, client.y, MAP_SURFACE_ID, DEFAULT_VIEWPORT)
                {
                    on_map_click.call(at);
                }
            },

            div {
                dangerous_inner_html: "{overlay}",
                style: "position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;",
            }

            for (marker, class, tooltip, glyph, style) in pins {
                div {
                    class: "{class}",
                    style: "{style}",
                    title: "{tooltip}",
                    // Removing a marker must never also place one at the
                    // same spot, so the click is stopped here.
                    onclick: move |evt: Event<MouseData>| {
                        evt.stop_propagation();
                        match marker.role {
                            MarkerRole::Start => planner.write().remove_start(),
                            MarkerRole::End => planner.write().remove_end(),
                        }
                    },
                    span { class: "map-marker-label", "{glyph}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graticule_covers_viewport() {
        let mut svg = String::new();
        build_graticule(&mut svg, DEFAULT_VIEWPORT);
        // Roughly 13 meridians and 7 parallels; the exact count at the
        // window edges depends on floating-point rounding.
        let lines = svg.matches("<line").count();
        assert!((18..=22).contains(&lines), "got {lines} lines");
    }

    #[test]
    fn test_route_line_needs_two_points() {
        let mut svg = String::new();
        build_route_line(&mut svg, &[]);
        assert!(svg.is_empty());
        build_route_line(&mut svg, &[(10.0, 10.0)]);
        assert!(svg.is_empty());
    }

    #[test]
    fn test_route_line_lists_points_in_order() {
        let mut svg = String::new();
        build_route_line(&mut svg, &[(10.0, 20.0), (30.5, 40.25), (50.0, 60.0)]);
        assert!(svg.contains(r#"points="10.0,20.0 30.5,40.2 50.0,60.0""#));
        assert_eq!(svg.matches("<polyline").count(), 1);
    }

    #[test]
    fn test_overlay_is_a_full_surface_svg() {
        let overlay = build_overlay_svg(DEFAULT_VIEWPORT, &[(0.0, 0.0), (10.0, 10.0)]);
        assert!(overlay.starts_with("<svg"));
        assert!(overlay.contains("pointer-events:none"));
        assert!(overlay.contains("<polyline"));
    }

    #[test]
    fn test_marker_style_percentages() {
        let marker = PlacedMarker {
            id: 1,
            role: MarkerRole::Start,
            // Viewport center lands at 50%/50%.
            at: LatLon::new(51.5, -0.1).unwrap(),
        };
        let style = marker_style(&marker, DEFAULT_VIEWPORT);
        assert_eq!(style, "left: 50.000%; top: 50.000%;");
    }
}
