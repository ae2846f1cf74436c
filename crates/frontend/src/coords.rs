use waylight_shared::models::LatLon;

/// Geographic window shown by the map surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub north: f64,
    pub south: f64,
    pub west: f64,
    pub east: f64,
}

/// Central London, matching the widget's default framing.
pub const DEFAULT_VIEWPORT: MapViewport = MapViewport {
    north: 51.56,
    south: 51.44,
    west: -0.22,
    east: 0.02,
};

// Native overlay dimensions. The surface renders at `width:100%` with a
// fixed aspect ratio, so both axes share one scale factor.
pub const VIEW_WIDTH_PX: f64 = 1024.0;
pub const VIEW_HEIGHT_PX: f64 = 768.0;

/// Convert container-relative pixels to native view pixels. Pure, so it
/// is unit-testable without a DOM; returns `None` for a degenerate
/// container.
pub fn container_to_view_px(
    container_x: f64,
    container_y: f64,
    container_w: f64,
) -> Option<(f64, f64)> {
    if !(container_w > 0.0) || !container_x.is_finite() || !container_y.is_finite() {
        return None;
    }
    let scale = VIEW_WIDTH_PX / container_w;
    let x = (container_x * scale).clamp(0.0, VIEW_WIDTH_PX);
    let y = (container_y * scale).clamp(0.0, VIEW_HEIGHT_PX);
    Some((x, y))
}

/// Linear (equirectangular within the viewport) pixel-to-coordinate
/// conversion.
pub fn view_px_to_lat_lon(x: f64, y: f64, vp: MapViewport) -> Option<LatLon> {
    let lon = vp.west + (x / VIEW_WIDTH_PX) * (vp.east - vp.west);
    let lat = vp.north - (y / VIEW_HEIGHT_PX) * (vp.north - vp.south);
    LatLon::new(lat, lon)
}

/// Inverse of [`view_px_to_lat_lon`]. Coordinates outside the viewport
/// land outside the `0..VIEW_*` range; the SVG layer clips them.
pub fn lat_lon_to_view_px(at: LatLon, vp: MapViewport) -> (f64, f64) {
    let x = (at.lon - vp.west) / (vp.east - vp.west) * VIEW_WIDTH_PX;
    let y = (vp.north - at.lat) / (vp.north - vp.south) * VIEW_HEIGHT_PX;
    (x, y)
}

/// Resolve a client-coordinate click on the given container element to a
/// geographic coordinate.
pub fn click_to_lat_lon(
    client_x: f64,
    client_y: f64,
    container_id: &str,
    vp: MapViewport,
) -> Option<LatLon> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(container_id)?;
    let rect = element.get_bounding_client_rect();

    let (x, y) = container_to_view_px(client_x - rect.left(), client_y - rect.top(), rect.width())?;
    view_px_to_lat_lon(x, y, vp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_corners_map_to_viewport_corners() {
        let vp = DEFAULT_VIEWPORT;
        let nw = view_px_to_lat_lon(0.0, 0.0, vp).unwrap();
        assert!((nw.lat - vp.north).abs() < 1e-9);
        assert!((nw.lon - vp.west).abs() < 1e-9);

        let se = view_px_to_lat_lon(VIEW_WIDTH_PX, VIEW_HEIGHT_PX, vp).unwrap();
        assert!((se.lat - vp.south).abs() < 1e-9);
        assert!((se.lon - vp.east).abs() < 1e-9);
    }

    #[test]
    fn test_view_center_maps_to_viewport_center() {
        let vp = DEFAULT_VIEWPORT;
        let c = view_px_to_lat_lon(VIEW_WIDTH_PX / 2.0, VIEW_HEIGHT_PX / 2.0, vp).unwrap();
        assert!((c.lat - (vp.north + vp.south) / 2.0).abs() < 1e-9);
        assert!((c.lon - (vp.west + vp.east) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_lat_lon_round_trip() {
        let vp = DEFAULT_VIEWPORT;
        let at = LatLon::new(51.5, -0.1).unwrap();
        let (x, y) = lat_lon_to_view_px(at, vp);
        let back = view_px_to_lat_lon(x, y, vp).unwrap();
        assert!((back.lat - at.lat).abs() < 1e-9);
        assert!((back.lon - at.lon).abs() < 1e-9);
    }

    #[test]
    fn test_container_scaling() {
        // A 512px-wide container is half the native width, so container
        // pixels double.
        let (x, y) = container_to_view_px(256.0, 192.0, 512.0).unwrap();
        assert!((x - 512.0).abs() < 1e-9);
        assert!((y - 384.0).abs() < 1e-9);
    }

    #[test]
    fn test_container_click_clamps_to_surface() {
        let (x, y) = container_to_view_px(-50.0, 10_000.0, 1024.0).unwrap();
        assert_eq!(x, 0.0);
        assert_eq!(y, VIEW_HEIGHT_PX);
    }

    #[test]
    fn test_degenerate_container_rejected() {
        assert!(container_to_view_px(10.0, 10.0, 0.0).is_none());
        assert!(container_to_view_px(10.0, 10.0, -100.0).is_none());
        assert!(container_to_view_px(f64::NAN, 10.0, 1024.0).is_none());
    }

    #[test]
    fn test_outside_viewport_lands_outside_view_range() {
        let vp = DEFAULT_VIEWPORT;
        let far = LatLon::new(52.0, 1.0).unwrap();
        let (x, y) = lat_lon_to_view_px(far, vp);
        assert!(x > VIEW_WIDTH_PX);
        assert!(y < 0.0);
    }
}
