//! Interaction controller: slider and checkbox events → marker updates.
//!
//! Widgets never touch markers directly. They push [`ControlEvent`]s and the
//! controller drains them in arrival order on the UI thread; each handler runs
//! to completion before the next event is looked at.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::data::catalog::IonLines;
use crate::data::doppler::{observed, shift_factor, DomainError};
use crate::data::filter::shifted_position;
use crate::data::model::WavelengthRange;
use crate::ui::markers::{MarkerId, MarkerSet};

/// Slider bounds for the redshift z.
pub const REDSHIFT_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Slider bounds for the expansion velocity, km/s.
pub const V_EXP_RANGE: RangeInclusive<f64> = 0.0..=30000.0;

const BASE_TITLE: &str = "Supernova Spectrum with Ionization Lines";

/// User input routed to the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    /// Redshift slider moved.
    SetRedshift(f64),
    /// Expansion velocity slider moved (km/s).
    SetExpansionVelocity(f64),
    /// Checkbox for an ion group clicked.
    ToggleGroup(String),
}

/// Where the controller is in handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Recomputing,
    TogglingVisibility,
}

/// Slider values and per-group visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct InteractionState {
    pub redshift: f64,
    pub expansion_velocity: f64,
    pub visibility: BTreeMap<&'static str, bool>,
}

impl InteractionState {
    /// Zero shift, every group unchecked.
    pub fn new(catalog: &[IonLines]) -> Self {
        Self {
            redshift: 0.0,
            expansion_velocity: 0.0,
            visibility: catalog.iter().map(|ion| (ion.label, false)).collect(),
        }
    }

    pub fn is_visible(&self, label: &str) -> bool {
        self.visibility.get(label).copied().unwrap_or(false)
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

pub struct Controller {
    state: InteractionState,
    phase: Phase,
    title: String,
    /// Spectrum bounds the shifted markers are tested against.
    range: WavelengthRange,
    /// (handle, rest wavelength) for every ion marker.
    handles: Vec<(MarkerId, f64)>,
    /// Marker handles per group label.
    groups: BTreeMap<&'static str, Vec<MarkerId>>,
}

impl Controller {
    pub fn new(catalog: &[IonLines], markers: &MarkerSet, range: WavelengthRange) -> Self {
        let mut controller = Self {
            state: InteractionState::new(catalog),
            phase: Phase::Idle,
            title: BASE_TITLE.to_string(),
            range,
            handles: Vec::new(),
            groups: BTreeMap::new(),
        };
        controller.bind(markers, range);
        controller
    }

    /// Take handles from a freshly built marker set.
    ///
    /// Used after a new spectrum is loaded. The caller should follow with
    /// [`Controller::reapply`] so the new markers pick up the current state.
    pub fn bind(&mut self, markers: &MarkerSet, range: WavelengthRange) {
        self.range = range;
        self.handles = markers
            .ids()
            .filter_map(|id| markers.get(id).map(|m| (id, m.rest)))
            .collect();
        self.groups = markers
            .groups()
            .iter()
            .map(|g| (g.label, g.ids.clone()))
            .collect();
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Handle one event to completion.
    ///
    /// A rejected shift leaves both the state and the markers unchanged.
    pub fn handle(
        &mut self,
        event: ControlEvent,
        markers: &mut MarkerSet,
    ) -> Result<(), DomainError> {
        let result = match event {
            ControlEvent::SetRedshift(z) => {
                self.recompute(z, self.state.expansion_velocity, markers)
            }
            ControlEvent::SetExpansionVelocity(v) => {
                self.recompute(self.state.redshift, v, markers)
            }
            ControlEvent::ToggleGroup(label) => {
                self.toggle(&label, markers);
                Ok(())
            }
        };
        self.transition(Phase::Idle);
        result
    }

    /// Handle a batch of events in order, logging rejected ones.
    pub fn dispatch(&mut self, events: Vec<ControlEvent>, markers: &mut MarkerSet) {
        for event in events {
            if let Err(e) = self.handle(event, markers) {
                log::warn!("Ignoring slider value: {e}");
            }
        }
    }

    /// Push the current shift and visibility onto every bound marker.
    pub fn reapply(&self, markers: &mut MarkerSet) -> Result<(), DomainError> {
        let (z, v) = (self.state.redshift, self.state.expansion_velocity);
        self.position_markers(z, v, markers)?;
        for (label, ids) in &self.groups {
            let visible = self.state.is_visible(label);
            for &id in ids {
                markers.set_visible(id, visible);
            }
        }
        Ok(())
    }

    fn recompute(&mut self, z: f64, v: f64, markers: &mut MarkerSet) -> Result<(), DomainError> {
        self.transition(Phase::Recomputing);
        self.position_markers(z, v, markers)?;
        self.state.redshift = z;
        self.state.expansion_velocity = v;
        self.title = format!("{BASE_TITLE} (Redshift: {z:.2}, v_exp: {v:.0} km/s)");
        Ok(())
    }

    /// All-or-nothing: markers move only if every line shifts cleanly.
    fn position_markers(&self, z: f64, v: f64, markers: &mut MarkerSet) -> Result<(), DomainError> {
        shift_factor(z, v)?;
        let shifted = self
            .handles
            .iter()
            .map(|&(id, rest)| observed(rest, z, v).map(|w| (id, w)))
            .collect::<Result<Vec<_>, _>>()?;
        for (id, w) in shifted {
            markers.set_position(id, shifted_position(w, self.range));
        }
        Ok(())
    }

    fn toggle(&mut self, label: &str, markers: &mut MarkerSet) {
        self.transition(Phase::TogglingVisibility);
        let flag = self.state.visibility.get_mut(label);
        let (Some(flag), Some(ids)) = (flag, self.groups.get(label)) else {
            log::warn!("Unknown ion group '{label}'");
            return;
        };
        *flag = !*flag;
        for &id in ids {
            markers.set_visible(id, *flag);
        }
    }

    fn transition(&mut self, next: Phase) {
        log::trace!("controller {:?} -> {:?}", self.phase, next);
        self.phase = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::catalog::ION_CATALOG;

    const RANGE: WavelengthRange = WavelengthRange {
        min: 4000.0,
        max: 9000.0,
    };

    fn setup() -> (Controller, MarkerSet) {
        let markers = MarkerSet::build(ION_CATALOG, RANGE);
        let controller = Controller::new(ION_CATALOG, &markers, RANGE);
        (controller, markers)
    }

    fn h_beta(markers: &MarkerSet) -> MarkerId {
        let h = markers.group("H").unwrap();
        *h.ids
            .iter()
            .find(|&&id| markers.get(id).unwrap().rest == 4861.0)
            .unwrap()
    }

    fn snapshot(markers: &MarkerSet) -> Vec<(Option<f64>, bool)> {
        markers
            .ids()
            .map(|id| {
                let m = markers.get(id).unwrap();
                (m.position, m.visible)
            })
            .collect()
    }

    #[test]
    fn test_initial_state() {
        let (controller, _) = setup();
        let state = controller.state();
        assert_eq!(state.redshift, 0.0);
        assert_eq!(state.expansion_velocity, 0.0);
        assert_eq!(state.visibility.len(), ION_CATALOG.len());
        assert!(state.visibility.values().all(|&v| !v));
        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.title(), BASE_TITLE);
    }

    #[test]
    fn test_h_beta_visible_only_when_checked() {
        let (mut controller, mut markers) = setup();
        let id = h_beta(&markers);

        assert_eq!(markers.get(id).unwrap().position, Some(4861.0));
        assert!(!markers.get(id).unwrap().is_drawn());

        controller
            .handle(ControlEvent::ToggleGroup("H".into()), &mut markers)
            .unwrap();
        assert!(markers.get(id).unwrap().is_drawn());
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_h_beta_suppressed_out_of_range() {
        let (mut controller, mut markers) = setup();
        let id = h_beta(&markers);

        controller
            .handle(ControlEvent::ToggleGroup("H".into()), &mut markers)
            .unwrap();
        controller
            .handle(ControlEvent::SetRedshift(1.0), &mut markers)
            .unwrap();

        let m = markers.get(id).unwrap();
        assert!(m.visible);
        assert_eq!(m.position, None);
        assert!(!m.is_drawn());

        // Coming back into range restores the marker.
        controller
            .handle(ControlEvent::SetRedshift(0.5), &mut markers)
            .unwrap();
        let m = markers.get(id).unwrap();
        assert_eq!(m.position, Some(4861.0 * 1.5));
        assert!(m.is_drawn());
    }

    #[test]
    fn test_toggle_twice_restores_visibility() {
        let (mut controller, mut markers) = setup();
        let before = snapshot(&markers);

        for _ in 0..2 {
            controller
                .handle(ControlEvent::ToggleGroup("Fe II".into()), &mut markers)
                .unwrap();
        }
        assert_eq!(snapshot(&markers), before);
        assert!(!controller.state().is_visible("Fe II"));
    }

    #[test]
    fn test_toggle_applies_to_whole_group_only() {
        let (mut controller, mut markers) = setup();
        controller
            .handle(ControlEvent::ToggleGroup("Si II".into()), &mut markers)
            .unwrap();

        for group in markers.groups() {
            for &id in &group.ids {
                assert_eq!(markers.get(id).unwrap().visible, group.label == "Si II");
            }
        }
    }

    #[test]
    fn test_unknown_label_is_ignored() {
        let (mut controller, mut markers) = setup();
        let before = snapshot(&markers);
        controller
            .handle(ControlEvent::ToggleGroup("Kr I".into()), &mut markers)
            .unwrap();
        assert_eq!(snapshot(&markers), before);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_events_commute() {
        let events = [
            ControlEvent::SetRedshift(0.1),
            ControlEvent::ToggleGroup("Ca II".into()),
            ControlEvent::SetExpansionVelocity(11000.0),
            ControlEvent::ToggleGroup("H".into()),
        ];

        let (mut forward, mut forward_markers) = setup();
        forward.dispatch(events.to_vec(), &mut forward_markers);

        let (mut reverse, mut reverse_markers) = setup();
        reverse.dispatch(events.iter().rev().cloned().collect(), &mut reverse_markers);

        assert_eq!(snapshot(&forward_markers), snapshot(&reverse_markers));
        assert_eq!(forward.state(), reverse.state());
    }

    #[test]
    fn test_title_tracks_sliders() {
        let (mut controller, mut markers) = setup();
        controller
            .handle(ControlEvent::SetRedshift(0.25), &mut markers)
            .unwrap();
        controller
            .handle(ControlEvent::SetExpansionVelocity(12345.6), &mut markers)
            .unwrap();
        assert_eq!(
            controller.title(),
            "Supernova Spectrum with Ionization Lines (Redshift: 0.25, v_exp: 12346 km/s)"
        );
    }

    #[test]
    fn test_rejected_velocity_leaves_state() {
        let (mut controller, mut markers) = setup();
        controller
            .handle(ControlEvent::SetRedshift(0.2), &mut markers)
            .unwrap();
        let before = snapshot(&markers);

        let err = controller
            .handle(ControlEvent::SetExpansionVelocity(3.0e5), &mut markers)
            .unwrap_err();
        assert!(matches!(err, DomainError::Superluminal(_)));
        assert_eq!(controller.state().expansion_velocity, 0.0);
        assert_eq!(snapshot(&markers), before);
        assert_eq!(controller.phase(), Phase::Idle);
    }

    #[test]
    fn test_rebind_reapplies_state() {
        let (mut controller, mut markers) = setup();
        controller
            .handle(ControlEvent::ToggleGroup("H".into()), &mut markers)
            .unwrap();
        controller
            .handle(ControlEvent::SetRedshift(0.1), &mut markers)
            .unwrap();

        let range = WavelengthRange::new(3000.0, 12000.0);
        let mut fresh = MarkerSet::build(ION_CATALOG, range);
        controller.bind(&fresh, range);
        controller.reapply(&mut fresh).unwrap();

        let h = fresh.group("H").unwrap();
        // 3970 .. 10941 are inside the wider range.
        assert_eq!(h.ids.len(), 7);
        let drawn: Vec<f64> = h
            .ids
            .iter()
            .filter_map(|&id| {
                let m = fresh.get(id).unwrap();
                m.is_drawn().then(|| m.position.unwrap())
            })
            .collect();
        // 10941 * 1.1 leaves the range.
        assert_eq!(drawn.len(), 6);
        assert!(fresh.groups().iter().filter(|g| g.label != "H").all(|g| g
            .ids
            .iter()
            .all(|&id| !fresh.get(id).unwrap().visible)));
    }
}
