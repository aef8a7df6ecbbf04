//! Headless model of the hosting UI shell.
//!
//! This module encapsulates the collaborators the theme controller operates
//! on: marker-bearing surfaces, toggle controls addressable by id, and the
//! content-ready signal. The shell carries no visual styling of its own; the
//! host maps marker state to actual visuals (see the `theme` module for the
//! egui mapping).

use std::collections::BTreeSet;

/// Marker placed on surfaces while the dark theme is active.
pub const DARK_THEME_MARKER: &str = "dark-theme";

/// Well-known id of the theme toggle control.
pub const THEME_TOGGLE_ID: &str = "themeToggle";

/// Identifier of one activation binding attached to a control instance.
pub type BindingId = u64;

/// A visual container that can carry named markers.
#[derive(Debug, Clone, Default)]
pub struct Surface {
    markers: BTreeSet<String>,
}

impl Surface {
    pub fn has_marker(&self, name: &str) -> bool {
        self.markers.contains(name)
    }

    pub fn set_marker(&mut self, name: &str, on: bool) {
        if on {
            self.markers.insert(name.to_string());
        } else {
            self.markers.remove(name);
        }
    }

    /// Flips the marker and returns the new state.
    pub fn toggle_marker(&mut self, name: &str) -> bool {
        let on = !self.has_marker(name);
        self.set_marker(name, on);
        on
    }
}

/// An interactive control the user activates to switch themes.
///
/// Bindings belong to the control *instance*: replacing the control through
/// [`Shell::refresh_control`] installs a fresh instance with the same id and
/// glyph but nothing attached.
#[derive(Debug, Clone)]
pub struct ToggleControl {
    id: String,
    glyph: String,
    bindings: Vec<BindingId>,
}

impl ToggleControl {
    fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            glyph: crate::preference::ThemePreference::default()
                .toggle_glyph()
                .to_string(),
            bindings: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Glyph currently displayed on the control.
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn set_glyph(&mut self, glyph: &str) {
        self.glyph = glyph.to_string();
    }

    /// Number of activation bindings attached to this instance.
    pub fn binding_count(&self) -> usize {
        self.bindings.len()
    }
}

/// The outcome of activating a control.
///
/// The shell does not store handler closures; it reports which bindings fire
/// and the host dispatches each of them to the controller, mirroring how
/// panel interactions are returned to the application loop rather than
/// executed in place.
#[derive(Debug)]
pub struct ActivationEvent {
    fired: Vec<BindingId>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl ActivationEvent {
    /// Bindings that fire for this activation, in attach order.
    pub fn fired(&self) -> &[BindingId] {
        &self.fired
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// The hosting shell: root surface, optional content surface, controls, and
/// the content-ready signal.
///
/// The root surface always exists; the content surface is attached only once
/// the host has constructed its content tree. Controls may appear at any
/// time, including after readiness.
#[derive(Debug, Default)]
pub struct Shell {
    root: Surface,
    content: Option<Surface>,
    controls: Vec<ToggleControl>,
    content_ready: bool,
    next_binding: BindingId,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &Surface {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Surface {
        &mut self.root
    }

    pub fn content(&self) -> Option<&Surface> {
        self.content.as_ref()
    }

    pub fn content_mut(&mut self) -> Option<&mut Surface> {
        self.content.as_mut()
    }

    /// Attaches the content surface if it does not exist yet.
    pub fn attach_content(&mut self) {
        if self.content.is_none() {
            self.content = Some(Surface::default());
        }
    }

    pub fn content_ready(&self) -> bool {
        self.content_ready
    }

    /// Signals that the content tree is fully constructed. Readiness implies
    /// the content surface exists.
    pub fn mark_content_ready(&mut self) {
        self.attach_content();
        self.content_ready = true;
    }

    /// Adds a control with the given id, replacing any previous one.
    pub fn insert_control(&mut self, id: &str) {
        self.controls.retain(|control| control.id != id);
        self.controls.push(ToggleControl::new(id));
    }

    pub fn control(&self, id: &str) -> Option<&ToggleControl> {
        self.controls.iter().find(|control| control.id == id)
    }

    pub fn control_mut(&mut self, id: &str) -> Option<&mut ToggleControl> {
        self.controls.iter_mut().find(|control| control.id == id)
    }

    /// Replaces the control with a fresh, binding-free instance keeping its
    /// id and glyph. Returns false when no such control exists.
    pub fn refresh_control(&mut self, id: &str) -> bool {
        match self.control_mut(id) {
            Some(control) => {
                control.bindings.clear();
                true
            }
            None => false,
        }
    }

    /// Attaches an activation binding to the control and returns its id.
    pub fn bind_control(&mut self, id: &str) -> Option<BindingId> {
        self.next_binding += 1;
        let binding = self.next_binding;
        let control = self.control_mut(id)?;
        control.bindings.push(binding);
        Some(binding)
    }

    /// Activates the control, producing the event the host dispatches.
    /// Returns `None` when the control does not exist.
    pub fn activate(&mut self, id: &str) -> Option<ActivationEvent> {
        let control = self.control(id)?;
        Some(ActivationEvent {
            fired: control.bindings.clone(),
            default_prevented: false,
            propagation_stopped: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_toggle_flips_state() {
        let mut surface = Surface::default();
        assert!(!surface.has_marker(DARK_THEME_MARKER));
        assert!(surface.toggle_marker(DARK_THEME_MARKER));
        assert!(surface.has_marker(DARK_THEME_MARKER));
        assert!(!surface.toggle_marker(DARK_THEME_MARKER));
        assert!(!surface.has_marker(DARK_THEME_MARKER));
    }

    #[test]
    fn readiness_attaches_content_surface() {
        let mut shell = Shell::new();
        assert!(shell.content().is_none());
        shell.mark_content_ready();
        assert!(shell.content_ready());
        assert!(shell.content().is_some());
    }

    #[test]
    fn refresh_discards_bindings_but_keeps_glyph() {
        let mut shell = Shell::new();
        shell.insert_control(THEME_TOGGLE_ID);
        shell.bind_control(THEME_TOGGLE_ID).unwrap();
        shell
            .control_mut(THEME_TOGGLE_ID)
            .unwrap()
            .set_glyph("☀️");

        assert!(shell.refresh_control(THEME_TOGGLE_ID));
        let control = shell.control(THEME_TOGGLE_ID).unwrap();
        assert_eq!(control.binding_count(), 0);
        assert_eq!(control.glyph(), "☀️");
    }

    #[test]
    fn activation_fires_bindings_in_attach_order() {
        let mut shell = Shell::new();
        shell.insert_control(THEME_TOGGLE_ID);
        let first = shell.bind_control(THEME_TOGGLE_ID).unwrap();
        let second = shell.bind_control(THEME_TOGGLE_ID).unwrap();

        let event = shell.activate(THEME_TOGGLE_ID).unwrap();
        assert_eq!(event.fired(), [first, second]);
        assert!(!event.default_prevented());
        assert!(!event.propagation_stopped());
    }

    #[test]
    fn activating_a_missing_control_is_a_no_op() {
        let mut shell = Shell::new();
        assert!(shell.activate(THEME_TOGGLE_ID).is_none());
        assert!(shell.bind_control(THEME_TOGGLE_ID).is_none());
        assert!(!shell.refresh_control(THEME_TOGGLE_ID));
    }
}
