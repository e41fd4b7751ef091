use serde::Serialize;
use tracing::{debug, warn};

use crate::models::{Feature, Quake};
use crate::style::{marker_color, marker_radius};
use crate::utils::{escape_html, format_event_time};

pub const OVERLAY_NAME: &str = "Earthquakes";

#[derive(Serialize, Debug, Clone)]
pub struct QuakeMarker {
    pub lat: f64,
    pub lon: f64,
    pub radius: f64,
    pub color: &'static str,
    pub popup_html: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct Overlay {
    pub name: &'static str,
    pub markers: Vec<QuakeMarker>,
    #[serde(skip)]
    pub skipped: usize,
}

// One pass over the raw features: each record either becomes a styled
// marker or is quarantined with its reason. A malformed feature never
// aborts the render.
pub fn build_overlay(features: &[Feature]) -> Overlay {
    let mut markers = Vec::with_capacity(features.len());
    let mut skipped = 0usize;

    for (index, feature) in features.iter().enumerate() {
        match Quake::try_from(feature) {
            Ok(quake) => markers.push(bind_marker(&quake)),
            Err(reason) => {
                skipped += 1;
                warn!("skipping feature {}: {}", index, reason);
            }
        }
    }

    debug!("bound {} markers, {} skipped", markers.len(), skipped);
    Overlay {
        name: OVERLAY_NAME,
        markers,
        skipped,
    }
}

fn bind_marker(quake: &Quake) -> QuakeMarker {
    QuakeMarker {
        lat: quake.lat,
        lon: quake.lon,
        radius: marker_radius(quake.mag),
        color: marker_color(quake.mag),
        popup_html: popup_html(quake),
    }
}

// Popup order mirrors the page layout: place, event time, magnitude.
fn popup_html(quake: &Quake) -> String {
    format!(
        "<h3>{}</h3><hr><p>{}</p><p>Magnitude: {}</p>",
        escape_html(&quake.place),
        format_event_time(&quake.time),
        quake.mag,
    )
}
