use crate::element::generate_id;
use crate::event::{Event, Key};

/// Contract for an element that participates in form data collection and
/// the reset lifecycle. This is the host-side stand-in for native form
/// association: controls register with a [`Form`], provide one serialized
/// value, and restore their declared state on reset.
pub trait FormControl {
    /// Element ID of the control's root element.
    fn control_id(&self) -> &str;

    /// Name under which the control submits its value.
    fn name(&self) -> &str;

    /// Serialized value. For a radio group this is the unique checked
    /// item's value, or `""` when zero or several items are checked.
    fn form_value(&self) -> String;

    /// Restore the control to its declared initial state.
    fn form_reset(&mut self);

    /// Whether the element ID belongs to this control (its root or any
    /// descendant that can hold focus).
    fn owns_element(&self, element_id: &str) -> bool;
}

/// Collected name/value pairs, in control registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// First value submitted under the given name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The form-collector collaborator: keeps the registration list and drives
/// collection, reset and Enter-to-submit over the registered controls.
/// It never owns the controls; the caller lends them per call.
#[derive(Debug, Clone, Default)]
pub struct Form {
    pub id: String,
    controls: Vec<String>,
}

impl Form {
    pub fn new() -> Self {
        Self {
            id: generate_id("form"),
            controls: Vec::new(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Register a control. Each control contributes exactly one name/value
    /// pair to collected data.
    pub fn register(&mut self, control: &dyn FormControl) {
        let id = control.control_id();
        if !self.controls.iter().any(|c| c == id) {
            self.controls.push(id.to_string());
        }
    }

    pub fn controls(&self) -> &[String] {
        &self.controls
    }

    fn is_registered(&self, control_id: &str) -> bool {
        self.controls.iter().any(|c| c == control_id)
    }

    /// Build form data from the registered controls, in registration order.
    /// Controls not lent by the caller are skipped.
    pub fn collect<'a>(&self, controls: impl IntoIterator<Item = &'a dyn FormControl>) -> FormData {
        let available: Vec<&dyn FormControl> = controls.into_iter().collect();
        let mut data = FormData::new();
        for id in &self.controls {
            if let Some(control) = available.iter().find(|c| c.control_id() == id) {
                data.push(control.name(), control.form_value());
            }
        }
        data
    }

    /// Reset every registered control to its declared state.
    pub fn reset<'a>(
        &self,
        controls: impl IntoIterator<Item = &'a mut dyn FormControl>,
    ) -> Event {
        for control in controls {
            if self.is_registered(control.control_id()) {
                control.form_reset();
            }
        }
        log::debug!("[form] {} reset", self.id);
        Event::Reset {
            target: self.id.clone(),
        }
    }

    /// Translate Enter presses on a registered control (or any element it
    /// owns, such as a focused radio item) into a `Submit` for this form.
    /// Everything else passes through.
    pub fn process_events(&self, events: &[Event], controls: &[&dyn FormControl]) -> Vec<Event> {
        let mut output = Vec::new();

        for event in events {
            if let Event::Key {
                target: Some(target),
                key: Key::Enter,
                ..
            } = event
            {
                let owned = controls
                    .iter()
                    .any(|c| self.is_registered(c.control_id()) && c.owns_element(target));
                if owned {
                    log::debug!("[form] {} submit via Enter on {}", self.id, target);
                    output.push(Event::Submit {
                        target: self.id.clone(),
                    });
                    continue;
                }
            }
            output.push(event.clone());
        }

        output
    }
}
