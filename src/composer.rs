use serde::Serialize;

use crate::config::Config;
use crate::legend::{build_legend, Legend};
use crate::overlay::Overlay;

#[derive(Serialize, Debug, Clone)]
pub struct BaseLayer {
    pub name: String,
    pub tile_url: String,
    pub attribution: String,
    pub max_zoom: u32,
}

#[derive(Serialize, Debug)]
pub struct LayerControl {
    pub collapsed: bool,
}

// Everything the host page needs, in one serializable value. The first
// base layer and the overlay are the initially active layers; the page
// itself holds no other state of ours.
#[derive(Serialize, Debug)]
pub struct MapDocument {
    pub title: String,
    pub center: [f64; 2],
    pub zoom: f64,
    pub base_layers: Vec<BaseLayer>,
    pub overlay: Overlay,
    pub layer_control: LayerControl,
    pub legend: Legend,
}

// One-shot construction: resolve each configured base layer against the
// shared tile template and assemble the document. Tile availability is the
// tiling client's concern, not checked here.
pub fn build_map(config: &Config, overlay: Overlay) -> MapDocument {
    let base_layers = config
        .tiles
        .base_layers
        .iter()
        .map(|layer| BaseLayer {
            name: layer.name.clone(),
            tile_url: resolve_tile_url(
                &config.tiles.url_template,
                &layer.style,
                &config.tiles.access_token,
            ),
            attribution: config.tiles.attribution.clone(),
            max_zoom: config.tiles.max_zoom,
        })
        .collect();

    MapDocument {
        title: config.page_title.clone(),
        center: config.map.center,
        zoom: config.map.zoom,
        base_layers,
        overlay,
        layer_control: LayerControl { collapsed: false },
        legend: build_legend(),
    }
}

// Substitutes the style identifier and credential; {z}/{x}/{y} stay behind
// for the tiling client.
fn resolve_tile_url(template: &str, style_id: &str, token: &str) -> String {
    template.replace("{id}", style_id).replace("{token}", token)
}
