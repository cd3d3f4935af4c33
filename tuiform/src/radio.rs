use std::collections::HashMap;

use crate::element::{generate_id, Element};
use crate::event::{Event, Key};
use crate::focus::FocusState;
use crate::form::FormControl;
use crate::text::{display_width, truncate_to_width};
use crate::types::{Color, Edges, Size, Style};

/// A single selectable option inside a [`RadioGroup`].
///
/// Fields are public like `Element`'s: declarative input may freely mark
/// several items checked (see [`Selection::Ambiguous`]). Coordinated,
/// mutually exclusive updates go through the group's operations.
#[derive(Debug, Clone)]
pub struct RadioItem {
    /// Element ID used for this item in views, focus and hit testing.
    pub id: String,
    pub value: String,
    pub label: String,
    /// Group name, inherited. The group overwrites this on every re-sync;
    /// children never write it back.
    pub name: String,
    pub checked: bool,
    pub disabled: bool,
}

impl RadioItem {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            id: generate_id("radio"),
            label: value.clone(),
            value,
            name: String::new(),
            checked: false,
            disabled: false,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// Derived selection state of a group. `Ambiguous` (two or more items
/// checked at once) is a real state, not an error: it can only come from
/// declarative input and persists until a click or value-set collapses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    None,
    One(usize),
    Ambiguous,
}

/// A set of mutually exclusive [`RadioItem`]s with a single derived value.
///
/// The group never caches which item is checked; [`RadioGroup::selection`]
/// re-derives it from the live item list on every call, so `value()` stays
/// consistent immediately after any mutation.
#[derive(Debug, Clone)]
pub struct RadioGroup {
    /// Element ID of the group container.
    pub id: String,
    /// Items in declaration order. Direct pushes are allowed; call
    /// [`RadioGroup::sync_items`] afterwards to re-propagate shared
    /// attributes (prefer [`RadioGroup::push_item`], which does both).
    pub items: Vec<RadioItem>,
    name: String,
    disabled: bool,
    /// Checked flags as declared at insertion, restored by form reset.
    declared_checked: Vec<bool>,
}

impl RadioGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: generate_id("radio-group"),
            items: Vec::new(),
            name: name.into(),
            disabled: false,
            declared_checked: Vec::new(),
        }
    }

    // Builders

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn item(mut self, item: RadioItem) -> Self {
        self.push_item(item);
        self
    }

    /// Declarative start value. Call after the items are added.
    /// The matching item becomes the declared checked state for form reset.
    pub fn value(mut self, value: impl AsRef<str>) -> Self {
        self.set_value(value.as_ref());
        self.declared_checked = self.items.iter().map(|it| it.checked).collect();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        if disabled != self.disabled {
            self.set_disabled(disabled);
        }
        self
    }

    // Accessors

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Derive the selection state from the live item list.
    pub fn selection(&self) -> Selection {
        let mut found = None;
        for (i, item) in self.items.iter().enumerate() {
            if item.checked {
                if found.is_some() {
                    return Selection::Ambiguous;
                }
                found = Some(i);
            }
        }
        match found {
            Some(i) => Selection::One(i),
            None => Selection::None,
        }
    }

    /// The unique checked item's value, or `""` when zero or several items
    /// are checked.
    pub fn current_value(&self) -> &str {
        match self.selection() {
            Selection::One(i) => &self.items[i].value,
            _ => "",
        }
    }

    /// Index of the first item that can take focus or clicks.
    pub fn first_enabled(&self) -> Option<usize> {
        self.items.iter().position(|item| !item.disabled)
    }

    /// Element ID that group-level focus delegates to.
    pub fn focus_target(&self) -> Option<&str> {
        self.first_enabled().map(|i| self.items[i].id.as_str())
    }

    // Operations

    /// Add an item at runtime. Shared attributes (name, and disabled while
    /// the group is disabled) are pushed into it, and its checked flag is
    /// recorded as declared state for form reset.
    pub fn push_item(&mut self, item: RadioItem) {
        self.declared_checked.push(item.checked);
        self.items.push(item);
        self.sync_items();
    }

    /// Re-propagate shared attributes into every current child.
    /// One-directional: children never set name or disabled on the group.
    pub fn sync_items(&mut self) {
        for item in &mut self.items {
            item.name.clone_from(&self.name);
            if self.disabled {
                item.disabled = true;
            }
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.sync_items();
    }

    /// Set the group's disabled flag and update every child to match.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        for item in &mut self.items {
            item.disabled = disabled;
        }
    }

    /// Mark the item whose value matches checked and uncheck all others.
    /// A value with no matching item leaves the state untouched.
    /// Returns true if the derived value changed.
    pub fn set_value(&mut self, value: &str) -> bool {
        if !self.items.iter().any(|item| item.value == value) {
            return false;
        }
        let before = self.current_value().to_string();
        for item in &mut self.items {
            item.checked = item.value == value;
        }
        self.current_value() != before
    }

    /// Select the item at `index`, unchecking its siblings. No-op on
    /// disabled items. Returns true if the derived value changed (clicking
    /// the already selected item does not count as a change).
    pub fn click_item(&mut self, index: usize) -> bool {
        match self.items.get(index) {
            Some(item) if !item.disabled => {}
            _ => return false,
        }
        let before = self.current_value().to_string();
        for (i, item) in self.items.iter_mut().enumerate() {
            item.checked = i == index;
        }
        self.current_value() != before
    }

    /// Group-level click: only when no child at all is checked, delegate to
    /// the first enabled item. With any existing selection (including an
    /// ambiguous one) this is a no-op.
    pub fn click(&mut self) -> bool {
        if self.selection() != Selection::None {
            return false;
        }
        match self.first_enabled() {
            Some(index) => self.click_item(index),
            None => false,
        }
    }

    /// Group-level focus: delegate to the first enabled item.
    /// Silent no-op when every item is disabled.
    pub fn focus(&self, focus: &mut FocusState) -> bool {
        match self.focus_target() {
            Some(id) => focus.focus(id),
            None => false,
        }
    }

    /// Restore the checked flags declared at insertion time.
    /// The restored state may itself be none- or multiple-checked.
    pub fn reset(&mut self) {
        for (item, declared) in self.items.iter_mut().zip(self.declared_checked.iter()) {
            item.checked = *declared;
        }
    }

    /// Whether the element ID is the group container or one of its items.
    pub fn owns_element(&self, element_id: &str) -> bool {
        self.id == element_id || self.items.iter().any(|item| item.id == element_id)
    }

    fn item_index(&self, element_id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == element_id)
    }

    // View

    /// Build the element description for this group.
    pub fn view(&self, focus: &FocusState) -> Element {
        Element::col()
            .id(self.id.clone())
            .padding(Edges::symmetric(0, 1))
            .children(self.items.iter().map(|item| item_view(item, focus)))
    }
}

/// Labels wider than this are truncated with an ellipsis.
const MAX_LABEL_WIDTH: usize = 40;

fn item_view(item: &RadioItem, focus: &FocusState) -> Element {
    let marker = if item.checked { "(•)" } else { "( )" };
    let label = truncate_to_width(&item.label, MAX_LABEL_WIDTH);
    // marker is 3 cells wide plus 1 cell gap before the label
    let width = (display_width(&label) + 4) as u16;
    let checked_style = Style::new()
        .foreground(Color::oklch(0.85, 0.12, 250.0))
        .bold();

    Element::row()
        .id(item.id.clone())
        .width(Size::Fixed(width))
        .height(Size::Fixed(1))
        .gap(1)
        .focusable(true)
        .clickable(!item.disabled)
        .disabled(item.disabled)
        .focused(focus.focused() == Some(item.id.as_str()))
        .style(if item.checked {
            checked_style
        } else {
            Style::new()
        })
        .style_focused(Style::new().underline())
        .style_disabled(Style::new().dim())
        .child(Element::text(marker))
        .child(Element::text(label))
}

impl FormControl for RadioGroup {
    fn control_id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn form_value(&self) -> String {
        self.current_value().to_string()
    }

    fn form_reset(&mut self) {
        self.reset();
    }

    fn owns_element(&self, element_id: &str) -> bool {
        RadioGroup::owns_element(self, element_id)
    }
}

/// Tracks radio groups by ID and turns input events into selections.
///
/// Mutating operations queue one `Change` per settled selection change;
/// [`RadioState::process_events`] drains the queue ahead of the incoming
/// stream so downstream handlers see changes in order.
#[derive(Debug, Default)]
pub struct RadioState {
    groups: HashMap<String, RadioGroup>,
    order: Vec<String>,
    pending: Vec<Event>,
}

impl RadioState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a group. A unique declaratively checked item counts as a
    /// settled selection and queues the initial `Change`.
    pub fn insert(&mut self, group: RadioGroup) {
        if let Selection::One(_) = group.selection() {
            self.pending.push(Event::Change {
                target: group.id.clone(),
                value: group.current_value().to_string(),
            });
        }
        if !self.order.contains(&group.id) {
            self.order.push(group.id.clone());
        }
        self.groups.insert(group.id.clone(), group);
    }

    pub fn get(&self, id: &str) -> Option<&RadioGroup> {
        self.groups.get(id)
    }

    /// Direct mutable access. Changes made through this handle bypass the
    /// `Change` queue; prefer the tracked operations below.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut RadioGroup> {
        self.groups.get_mut(id)
    }

    /// Programmatic value set, tracked.
    pub fn set_value(&mut self, id: &str, value: &str) {
        let Some(group) = self.groups.get_mut(id) else {
            return;
        };
        if group.set_value(value) {
            let event = Event::Change {
                target: id.to_string(),
                value: group.current_value().to_string(),
            };
            self.pending.push(event);
        }
    }

    /// Group-level click delegation, tracked.
    pub fn click(&mut self, id: &str) {
        let Some(group) = self.groups.get_mut(id) else {
            return;
        };
        if group.click() {
            let event = Event::Change {
                target: id.to_string(),
                value: group.current_value().to_string(),
            };
            self.pending.push(event);
        }
    }

    /// Click one item of a group, tracked.
    pub fn click_item(&mut self, id: &str, index: usize) {
        let Some(group) = self.groups.get_mut(id) else {
            return;
        };
        if group.click_item(index) {
            let event = Event::Change {
                target: id.to_string(),
                value: group.current_value().to_string(),
            };
            self.pending.push(event);
        }
    }

    /// Group-level focus delegation.
    pub fn focus(&self, id: &str, focus: &mut FocusState) -> bool {
        self.groups
            .get(id)
            .map(|group| group.focus(focus))
            .unwrap_or(false)
    }

    /// Registered groups as form controls, in registration order.
    pub fn controls(&self) -> impl Iterator<Item = &dyn FormControl> {
        self.order
            .iter()
            .filter_map(|id| self.groups.get(id))
            .map(|group| group as &dyn FormControl)
    }

    pub fn controls_mut(&mut self) -> impl Iterator<Item = &mut dyn FormControl> {
        self.groups
            .values_mut()
            .map(|group| group as &mut dyn FormControl)
    }

    /// Drain queued events without processing an input stream.
    pub fn take_pending(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.pending)
    }

    /// Process high-level events and translate item activation into
    /// selections. Clicks pass through with the resulting `Change` appended;
    /// a Space key press on an item is consumed.
    pub fn process_events(&mut self, events: &[Event]) -> Vec<Event> {
        let mut output = std::mem::take(&mut self.pending);

        for event in events {
            match event {
                Event::Click {
                    target: Some(target),
                    ..
                } => {
                    output.push(event.clone());
                    if let Some(change) = self.activate(target) {
                        output.push(change);
                    }
                }

                Event::Key {
                    target: Some(target),
                    key: Key::Char(' '),
                    modifiers,
                } if modifiers.none() => {
                    if let Some(change) = self.activate(target) {
                        output.push(change);
                        continue;
                    }
                    // Space over a checked or foreign element passes through
                    output.push(event.clone());
                }

                _ => output.push(event.clone()),
            }
        }

        output
    }

    /// Select the item whose element ID matches, if any.
    fn activate(&mut self, element_id: &str) -> Option<Event> {
        let group_id = self
            .groups
            .values()
            .find(|group| group.item_index(element_id).is_some())
            .map(|group| group.id.clone())?;

        let group = self.groups.get_mut(&group_id)?;
        let index = group.item_index(element_id)?;
        if group.click_item(index) {
            log::debug!(
                "[radio] {} selected item {} (value {:?})",
                group_id,
                index,
                group.current_value()
            );
            Some(Event::Change {
                target: group_id,
                value: group.current_value().to_string(),
            })
        } else {
            None
        }
    }
}
