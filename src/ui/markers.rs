use eframe::egui::Color32;

use crate::color::generate_palette;
use crate::data::catalog::IonLines;
use crate::data::filter::lines_in_range;
use crate::data::model::WavelengthRange;

// ---------------------------------------------------------------------------
// Marker handles
// ---------------------------------------------------------------------------

/// Handle to one marker owned by a [`MarkerSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerId(usize);

/// One vertical line for an (ion group, rest wavelength) pair.
#[derive(Debug, Clone)]
pub struct Marker {
    /// Index of the owning group in the catalog.
    pub group: usize,
    pub rest: f64,
    /// Current x position; `None` while shifted outside the spectrum.
    pub position: Option<f64>,
    pub visible: bool,
}

impl Marker {
    /// Drawn only when toggled on and inside the spectrum.
    pub fn is_drawn(&self) -> bool {
        self.visible && self.position.is_some()
    }
}

/// Handles of all markers that belong to one ion group.
#[derive(Debug, Clone)]
pub struct MarkerGroup {
    pub label: &'static str,
    pub color: Color32,
    pub ids: Vec<MarkerId>,
}

// ---------------------------------------------------------------------------
// MarkerSet – renderer-owned line objects
// ---------------------------------------------------------------------------

/// All ion-line markers for the current spectrum.
///
/// Built once per loaded spectrum. Only rest wavelengths inside the
/// spectrum's range get a marker; all start hidden at their rest position.
#[derive(Debug, Clone)]
pub struct MarkerSet {
    markers: Vec<Marker>,
    groups: Vec<MarkerGroup>,
}

impl MarkerSet {
    pub fn build(catalog: &[IonLines], range: WavelengthRange) -> Self {
        let palette = generate_palette(catalog.len());
        let mut markers = Vec::new();
        let mut groups = Vec::with_capacity(catalog.len());

        for (group, (ion, color)) in catalog.iter().zip(palette).enumerate() {
            let mut ids = Vec::new();
            for rest in lines_in_range(ion.rest, range) {
                ids.push(MarkerId(markers.len()));
                markers.push(Marker {
                    group,
                    rest,
                    position: Some(rest),
                    visible: false,
                });
            }
            groups.push(MarkerGroup {
                label: ion.label,
                color,
                ids,
            });
        }

        Self { markers, groups }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = MarkerId> {
        (0..self.markers.len()).map(MarkerId)
    }

    pub fn groups(&self) -> &[MarkerGroup] {
        &self.groups
    }

    pub fn group(&self, label: &str) -> Option<&MarkerGroup> {
        self.groups.iter().find(|g| g.label == label)
    }

    pub fn get(&self, id: MarkerId) -> Option<&Marker> {
        self.markers.get(id.0)
    }

    pub fn set_position(&mut self, id: MarkerId, position: Option<f64>) {
        if let Some(marker) = self.markers.get_mut(id.0) {
            marker.position = position;
        }
    }

    pub fn set_visible(&mut self, id: MarkerId, visible: bool) {
        if let Some(marker) = self.markers.get_mut(id.0) {
            marker.visible = visible;
        }
    }

    /// Markers to draw this frame, with their group colour and x position.
    pub fn drawn(&self) -> impl Iterator<Item = (Color32, f64)> + '_ {
        self.markers
            .iter()
            .filter(|m| m.is_drawn())
            .filter_map(|m| Some((self.groups[m.group].color, m.position?)))
    }
}
