use serde::Serialize;

use crate::style::{marker_color, BAND_UPPER_BOUNDS};

#[derive(Serialize, Debug, Clone)]
pub struct LegendEntry {
    pub label: String,
    pub color: &'static str,
}

#[derive(Serialize, Debug, Clone)]
pub struct Legend {
    pub position: &'static str,
    pub entries: Vec<LegendEntry>,
}

// Static key for the magnitude bands. Swatches come from the same color
// function as the markers, sampled at each band's midpoint so legend and
// markers cannot disagree on boundary values.
pub fn build_legend() -> Legend {
    let mut entries = Vec::with_capacity(BAND_UPPER_BOUNDS.len() + 1);
    let mut lower = 0.0_f64;

    for upper in BAND_UPPER_BOUNDS {
        entries.push(LegendEntry {
            label: format!("{}–{}", lower, upper),
            color: marker_color((lower + upper) / 2.0),
        });
        lower = upper;
    }
    entries.push(LegendEntry {
        label: format!("{}+", lower),
        color: marker_color(lower + 0.5),
    });

    Legend {
        position: "bottomleft",
        entries,
    }
}
