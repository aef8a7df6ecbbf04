//! Theme controller: early application, deferred toggle binding, and the
//! activation handler.
//!
//! The controller keeps the displayed theme, the toggle-control glyph, and
//! the persisted preference mutually consistent. Deferred work (waiting for
//! content readiness, the single lookup retry) is resolved by [`poll`],
//! which the host calls whenever its event loop turns — once per frame in
//! the GUI, the same way background completions are checked there.
//!
//! [`poll`]: ThemeController::poll

use std::time::{Duration, Instant};

use crate::preference::ThemePreference;
use crate::shell::{ActivationEvent, BindingId, Shell, DARK_THEME_MARKER, THEME_TOGGLE_ID};
use crate::storage;

/// Delay before the single control-lookup retry.
pub const CONTROL_LOOKUP_RETRY_DELAY: Duration = Duration::from_millis(100);

/// Progress of the toggle-binding workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BindPhase {
    /// `initialize` has not run yet.
    Idle,
    /// Waiting for the shell's content-ready signal.
    AwaitingContent,
    /// First lookup missed; one retry fires at the deadline.
    RetryScheduled(Instant),
    /// The control is bound.
    Bound,
    /// Both lookups missed; binding was given up silently.
    Abandoned,
}

/// Owns the current preference and the binding to the toggle control.
///
/// One instance per hosting shell. There is no module-level state; hosts
/// construct the controller explicitly and keep it alongside the shell.
#[derive(Debug)]
pub struct ThemeController {
    preference: ThemePreference,
    control_id: String,
    binding: Option<BindingId>,
    phase: BindPhase,
}

impl Default for ThemeController {
    fn default() -> Self {
        Self::new()
    }
}

impl ThemeController {
    /// Creates a controller managing the well-known toggle control.
    pub fn new() -> Self {
        Self {
            preference: ThemePreference::default(),
            control_id: THEME_TOGGLE_ID.to_string(),
            binding: None,
            phase: BindPhase::Idle,
        }
    }

    /// The preference currently in effect.
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Applies the stored preference as early as the host can run code,
    /// before the content tree is guaranteed to exist.
    ///
    /// Reads the preference (absent storage or absent key mean `Light`) and,
    /// when it is `Dark`, marks the root surface immediately. The content
    /// surface is marked only if it is already attached; a missing content
    /// surface is skipped, not an error.
    pub fn apply_early(&mut self, shell: &mut Shell, storage: Option<&dyn eframe::Storage>) {
        let preference = storage::load_preference(storage);
        self.preference = preference;
        if preference.is_dark() {
            shell.root_mut().set_marker(DARK_THEME_MARKER, true);
            if let Some(content) = shell.content_mut() {
                content.set_marker(DARK_THEME_MARKER, true);
            }
        }
    }

    /// Starts (or restarts) the toggle-binding workflow.
    ///
    /// Safe to invoke any number of times: the previous binding is discarded
    /// and the control instance replaced before a fresh binding is attached,
    /// so repeated initialization never stacks activation handlers. When the
    /// content tree is not ready yet, binding is parked until [`poll`] sees
    /// the ready signal.
    ///
    /// [`poll`]: ThemeController::poll
    pub fn initialize(
        &mut self,
        shell: &mut Shell,
        storage: Option<&dyn eframe::Storage>,
        now: Instant,
    ) {
        self.binding = None;
        if !shell.content_ready() {
            self.phase = BindPhase::AwaitingContent;
            return;
        }
        self.try_bind(shell, storage, now, true);
    }

    /// Drives the deferred parts of the binding workflow.
    ///
    /// Call whenever the host loop turns. Completes the parked bind once
    /// content becomes ready and performs the single scheduled retry once
    /// its deadline passes. A no-op in every other phase.
    pub fn poll(
        &mut self,
        shell: &mut Shell,
        storage: Option<&dyn eframe::Storage>,
        now: Instant,
    ) {
        match self.phase {
            BindPhase::AwaitingContent if shell.content_ready() => {
                self.try_bind(shell, storage, now, true);
            }
            BindPhase::RetryScheduled(deadline) if now >= deadline => {
                self.try_bind(shell, storage, now, false);
            }
            _ => {}
        }
    }

    fn try_bind(
        &mut self,
        shell: &mut Shell,
        storage: Option<&dyn eframe::Storage>,
        now: Instant,
        allow_retry: bool,
    ) {
        // Fresh instance first: any handler bound earlier goes with the old
        // instance, keeping rebinding free of duplicate activations.
        if !shell.refresh_control(&self.control_id) {
            self.phase = if allow_retry {
                BindPhase::RetryScheduled(now + CONTROL_LOOKUP_RETRY_DELAY)
            } else {
                BindPhase::Abandoned
            };
            return;
        }

        self.sync_from_storage(shell, storage);
        self.binding = shell.bind_control(&self.control_id);
        self.phase = BindPhase::Bound;
    }

    /// Reads the preference and brings markers and glyph in line with it.
    fn sync_from_storage(&mut self, shell: &mut Shell, storage: Option<&dyn eframe::Storage>) {
        let preference = storage::load_preference(storage);
        self.preference = preference;

        let dark = preference.is_dark();
        shell.root_mut().set_marker(DARK_THEME_MARKER, dark);
        if let Some(content) = shell.content_mut() {
            content.set_marker(DARK_THEME_MARKER, dark);
        }
        if let Some(control) = shell.control_mut(&self.control_id) {
            control.set_glyph(preference.toggle_glyph());
        }
    }

    /// The activation handler: one invocation per fired binding.
    ///
    /// Toggles the root marker, mirrors the result onto the content surface,
    /// derives the new preference from the resulting marker state, updates
    /// the glyph, and writes the preference to the store. The event is
    /// marked default-prevented and propagation-stopped so the activation
    /// does not leak into the host's other handlers.
    pub fn handle_activation(
        &mut self,
        shell: &mut Shell,
        storage: Option<&mut (dyn eframe::Storage + 'static)>,
        event: &mut ActivationEvent,
    ) {
        let dark = shell.root_mut().toggle_marker(DARK_THEME_MARKER);
        if let Some(content) = shell.content_mut() {
            content.set_marker(DARK_THEME_MARKER, dark);
        }

        let preference = ThemePreference::from_dark_marker(dark);
        self.preference = preference;
        if let Some(control) = shell.control_mut(&self.control_id) {
            control.set_glyph(preference.toggle_glyph());
        }
        if let Some(storage) = storage {
            storage::save_preference(storage, preference);
        }

        event.prevent_default();
        event.stop_propagation();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MockStorage {
        data: HashMap<String, String>,
    }

    impl MockStorage {
        fn with_theme(value: &str) -> Self {
            let mut data = HashMap::new();
            data.insert(storage::THEME_KEY.to_string(), value.to_string());
            Self { data }
        }
    }

    impl eframe::Storage for MockStorage {
        fn get_string(&self, key: &str) -> Option<String> {
            self.data.get(key).cloned()
        }

        fn set_string(&mut self, key: &str, value: String) {
            self.data.insert(key.to_string(), value);
        }

        fn flush(&mut self) {}
    }

    fn ready_shell_with_control() -> Shell {
        let mut shell = Shell::new();
        shell.insert_control(THEME_TOGGLE_ID);
        shell.mark_content_ready();
        shell
    }

    #[test]
    fn early_application_marks_root_only_when_content_missing() {
        let storage = MockStorage::with_theme("dark");
        let mut shell = Shell::new();
        let mut controller = ThemeController::new();

        controller.apply_early(&mut shell, Some(&storage));

        assert!(shell.root().has_marker(DARK_THEME_MARKER));
        assert!(shell.content().is_none());
        assert_eq!(controller.preference(), ThemePreference::Dark);
    }

    #[test]
    fn binding_waits_for_content_readiness() {
        let mut shell = Shell::new();
        shell.insert_control(THEME_TOGGLE_ID);
        let mut controller = ThemeController::new();
        let t0 = Instant::now();

        controller.initialize(&mut shell, None, t0);
        assert!(!controller.is_bound());

        controller.poll(&mut shell, None, t0);
        assert!(!controller.is_bound());

        shell.mark_content_ready();
        controller.poll(&mut shell, None, t0);
        assert!(controller.is_bound());
    }

    #[test]
    fn missed_lookup_retries_once_then_gives_up() {
        let mut shell = Shell::new();
        shell.mark_content_ready();
        let mut controller = ThemeController::new();
        let t0 = Instant::now();

        controller.initialize(&mut shell, None, t0);
        assert!(!controller.is_bound());

        // Retry fires after the fixed delay, still finds nothing, and the
        // workflow ends without an error.
        controller.poll(&mut shell, None, t0 + CONTROL_LOOKUP_RETRY_DELAY);
        assert!(!controller.is_bound());
        controller.poll(&mut shell, None, t0 + 10 * CONTROL_LOOKUP_RETRY_DELAY);
        assert!(!controller.is_bound());
    }

    #[test]
    fn retry_picks_up_a_late_control() {
        let mut shell = Shell::new();
        shell.mark_content_ready();
        let mut controller = ThemeController::new();
        let t0 = Instant::now();

        controller.initialize(&mut shell, None, t0);
        shell.insert_control(THEME_TOGGLE_ID);

        controller.poll(&mut shell, None, t0 + Duration::from_millis(50));
        assert!(!controller.is_bound());
        controller.poll(&mut shell, None, t0 + CONTROL_LOOKUP_RETRY_DELAY);
        assert!(controller.is_bound());
    }

    #[test]
    fn reinitialization_keeps_a_single_binding() {
        let mut shell = ready_shell_with_control();
        let mut controller = ThemeController::new();
        let t0 = Instant::now();

        controller.initialize(&mut shell, None, t0);
        controller.initialize(&mut shell, None, t0);

        let control = shell.control(THEME_TOGGLE_ID).unwrap();
        assert_eq!(control.binding_count(), 1);
    }

    #[test]
    fn binding_syncs_glyph_and_markers_from_storage() {
        let storage = MockStorage::with_theme("dark");
        let mut shell = ready_shell_with_control();
        let mut controller = ThemeController::new();

        controller.initialize(&mut shell, Some(&storage), Instant::now());

        assert!(shell.root().has_marker(DARK_THEME_MARKER));
        assert!(shell.content().unwrap().has_marker(DARK_THEME_MARKER));
        assert_eq!(shell.control(THEME_TOGGLE_ID).unwrap().glyph(), "☀️");
    }

    #[test]
    fn activation_toggles_markers_glyph_and_preference() {
        let mut shell = ready_shell_with_control();
        let mut controller = ThemeController::new();
        controller.initialize(&mut shell, None, Instant::now());

        let mut event = shell.activate(THEME_TOGGLE_ID).unwrap();
        assert_eq!(event.fired().len(), 1);
        controller.handle_activation(&mut shell, None, &mut event);

        assert!(shell.root().has_marker(DARK_THEME_MARKER));
        assert_eq!(controller.preference(), ThemePreference::Dark);
        assert_eq!(shell.control(THEME_TOGGLE_ID).unwrap().glyph(), "☀️");
        assert!(event.default_prevented());
        assert!(event.propagation_stopped());
    }
}
