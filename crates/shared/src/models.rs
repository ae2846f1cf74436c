use serde::{Deserialize, Serialize};

/// A geographic coordinate in degrees.
///
/// Construction via [`LatLon::new`] guarantees both components are finite.
/// No bounds clamping happens here; the map layer owns that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        if lat.is_finite() && lon.is_finite() {
            Some(LatLon { lat, lon })
        } else {
            None
        }
    }
}

impl std::fmt::Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}

/// Body of `POST /nearestRoad`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NearestRoadRequest {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearestRoadCoord {
    pub lat: f64,
    pub lon: f64,
    pub distance_meters: f64,
}

/// Lookup response: `coord` is null when no routable road lies within the
/// service's tolerance of the queried point.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NearestRoadResponse {
    pub coord: Option<NearestRoadCoord>,
    #[serde(default)]
    pub message: String,
}

/// Body of `POST /route`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RouteRequest {
    pub start: LatLon,
    pub end: LatLon,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteResponse {
    pub geojson: RouteGeoJson,
    pub metadata: RouteMetadata,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteGeoJson {
    pub geometry: RouteGeometry,
    #[serde(default)]
    pub properties: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// GeoJSON order: `[lon, lat]` per position.
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMetadata {
    pub total_distance_meters: f64,
    pub average_safety_score: f64,
    pub safety_percentage: f64,
    pub lit_segments_count: u32,
    pub total_segments: u32,
    pub lit_percentage: f64,
    pub nearest_police_start_meters: Option<f64>,
    pub nearest_police_end_meters: Option<f64>,
    pub nearest_light_start_meters: Option<f64>,
    pub nearest_light_end_meters: Option<f64>,
    pub safety_rating: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lon_accepts_finite() {
        let c = LatLon::new(51.5, -0.1).unwrap();
        assert_eq!(c.lat, 51.5);
        assert_eq!(c.lon, -0.1);
    }

    #[test]
    fn test_lat_lon_rejects_non_finite() {
        assert!(LatLon::new(f64::NAN, 0.0).is_none());
        assert!(LatLon::new(0.0, f64::INFINITY).is_none());
        assert!(LatLon::new(f64::NEG_INFINITY, f64::NAN).is_none());
    }

    #[test]
    fn test_lat_lon_display() {
        let c = LatLon::new(51.5007, -0.1002).unwrap();
        assert_eq!(c.to_string(), "51.5007, -0.1002");
    }

    #[test]
    fn test_nearest_road_request_wire_names() {
        let body = serde_json::to_value(NearestRoadRequest {
            lat: 51.5,
            lon: -0.1,
        })
        .unwrap();
        assert_eq!(body["lat"], 51.5);
        assert_eq!(body["lon"], -0.1);
    }

    #[test]
    fn test_nearest_road_response_with_coord() {
        let json = r#"{"coord":{"lat":51.5007,"lon":-0.1002,"distanceMeters":12.3},"message":"Moved to Baker Street"}"#;
        let resp: NearestRoadResponse = serde_json::from_str(json).unwrap();
        let coord = resp.coord.unwrap();
        assert_eq!(coord.lat, 51.5007);
        assert_eq!(coord.lon, -0.1002);
        assert_eq!(coord.distance_meters, 12.3);
        assert_eq!(resp.message, "Moved to Baker Street");
    }

    #[test]
    fn test_nearest_road_response_null_coord() {
        let json = r#"{"coord":null,"message":"Already on a road"}"#;
        let resp: NearestRoadResponse = serde_json::from_str(json).unwrap();
        assert!(resp.coord.is_none());
    }

    #[test]
    fn test_nearest_road_response_missing_message() {
        let json = r#"{"coord":null}"#;
        let resp: NearestRoadResponse = serde_json::from_str(json).unwrap();
        assert!(resp.coord.is_none());
        assert!(resp.message.is_empty());
    }

    #[test]
    fn test_route_request_wire_shape() {
        let body = serde_json::to_value(RouteRequest {
            start: LatLon::new(51.5, -0.1).unwrap(),
            end: LatLon::new(51.52, -0.12).unwrap(),
        })
        .unwrap();
        assert_eq!(body["start"]["lat"], 51.5);
        assert_eq!(body["start"]["lon"], -0.1);
        assert_eq!(body["end"]["lat"], 51.52);
    }

    #[test]
    fn test_route_response_deserializes() {
        let json = r#"{
            "geojson": {
                "geometry": {
                    "type": "LineString",
                    "coordinates": [[-0.1, 51.5], [-0.11, 51.51], [-0.12, 51.52]]
                },
                "properties": {"routeType": "quiet"}
            },
            "metadata": {
                "totalDistanceMeters": 2340.5,
                "averageSafetyScore": 0.82,
                "safetyPercentage": 82.0,
                "litSegmentsCount": 14,
                "totalSegments": 18,
                "litPercentage": 77.8,
                "nearestPoliceStartMeters": 420.0,
                "nearestPoliceEndMeters": 610.0,
                "nearestLightStartMeters": 8.5,
                "nearestLightEndMeters": 12.0,
                "safetyRating": "good"
            },
            "message": "Route found"
        }"#;
        let resp: RouteResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.geojson.geometry.kind, "LineString");
        assert_eq!(resp.geojson.geometry.coordinates.len(), 3);
        // GeoJSON positions are [lon, lat]
        assert_eq!(resp.geojson.geometry.coordinates[0], [-0.1, 51.5]);
        assert_eq!(resp.metadata.lit_segments_count, 14);
        assert_eq!(resp.metadata.safety_rating, "good");
        assert_eq!(resp.metadata.nearest_police_start_meters, Some(420.0));
        assert_eq!(resp.message, "Route found");
    }

    #[test]
    fn test_route_response_null_proximity_fields() {
        let json = r#"{
            "geojson": {"geometry": {"type": "LineString", "coordinates": []}},
            "metadata": {
                "totalDistanceMeters": 0.0,
                "averageSafetyScore": 0.0,
                "safetyPercentage": 0.0,
                "litSegmentsCount": 0,
                "totalSegments": 0,
                "litPercentage": 0.0,
                "nearestPoliceStartMeters": null,
                "nearestPoliceEndMeters": null,
                "nearestLightStartMeters": null,
                "nearestLightEndMeters": null,
                "safetyRating": "unknown"
            }
        }"#;
        let resp: RouteResponse = serde_json::from_str(json).unwrap();
        assert!(resp.metadata.nearest_police_start_meters.is_none());
        assert!(resp.metadata.nearest_light_end_meters.is_none());
        assert!(resp.message.is_empty());
    }
}
