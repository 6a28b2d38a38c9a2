//! Floating-label text field
//!
//! The field draws its hint inline while empty and unfocused. Gaining focus
//! with no text plays the full expansion: the accent highlight grows from the
//! centre of the underline, the underline bends down as if pulled by the
//! label, then snaps back with a wobble while the label rises to float above
//! the text. Losing focus hides the highlight toward the right edge and, if
//! the field is still empty, drops the label back inline with a bounce.
//!
//! Text input is refused while the expansion runs and restored, together
//! with the input type, the moment it settles.

pub mod controller;
pub mod decoration;
pub mod machine;
pub mod state;

use hintline_core::events::{event_types, Event, EventData};
use hintline_core::{GestureError, Result};
use hintline_paint::{PaintContext, Point};
use hintline_theme::{ContentPadding, Density, FieldTheme};

use crate::focus::FocusCoordinator;
use crate::gesture::LongClickHandler;
use crate::keyboard::{NoKeyboard, SoftKeyboard};
use crate::widget::{Widget, WidgetId};

pub use controller::{FocusAnimationController, HostEffects};
pub use decoration::{DecorationRenderer, FieldGeometry};
pub use machine::{FieldEvent, HostEffect};
pub use state::{DecorationValues, FieldState, Property};

/// Size of the editable text when the host doesn't supply a geometry, in dp
const DEFAULT_TEXT_SIZE_DP: f32 = 16.0;

/// Kind of text the field accepts
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputType {
    /// No input accepted
    None,
    #[default]
    Text,
    Number,
    Email,
    Password,
}

/// Builder for [`TextField`]
pub struct TextFieldBuilder {
    hint: String,
    text: String,
    input_type: InputType,
    theme: FieldTheme,
    density: Density,
    geometry: Option<FieldGeometry>,
    keyboard: Box<dyn SoftKeyboard>,
    long_click: Option<Box<dyn LongClickHandler>>,
    coordinator: Option<FocusCoordinator>,
}

impl TextFieldBuilder {
    fn new() -> Self {
        Self {
            hint: String::new(),
            text: String::new(),
            input_type: InputType::default(),
            theme: FieldTheme::default(),
            density: Density::BASELINE,
            geometry: None,
            keyboard: Box::new(NoKeyboard),
            long_click: None,
            coordinator: None,
        }
    }

    /// Set the hint label
    pub fn hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = hint.into();
        self
    }

    /// Set the initial text
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn input_type(mut self, input_type: InputType) -> Self {
        self.input_type = input_type;
        self
    }

    pub fn theme(mut self, theme: FieldTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Set the measured text layout. Without it the field has zero width and
    /// paints nothing until [`TextField::set_geometry`] is called.
    pub fn geometry(mut self, geometry: FieldGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn keyboard(mut self, keyboard: impl SoftKeyboard + 'static) -> Self {
        self.keyboard = Box::new(keyboard);
        self
    }

    pub fn on_long_click(mut self, handler: impl LongClickHandler + 'static) -> Self {
        self.long_click = Some(Box::new(handler));
        self
    }

    /// Share focus coordination with sibling fields
    pub fn coordinator(mut self, coordinator: FocusCoordinator) -> Self {
        self.coordinator = Some(coordinator);
        self
    }

    pub fn build(self) -> TextField {
        let text_empty = self.text.is_empty();
        let controller = FocusAnimationController::new(&self.theme, self.density, text_empty);
        let dimensions = *controller.dimensions();
        let renderer = DecorationRenderer::new(&self.theme, dimensions);

        let geometry = self.geometry.unwrap_or_else(|| {
            let padding = dimensions.content_padding();
            let text_size = self.density.dp(DEFAULT_TEXT_SIZE_DP);
            FieldGeometry::new(0.0, padding.top + text_size, text_size, padding.right)
        });

        TextField {
            id: WidgetId::next(),
            text: self.text,
            hint: self.hint,
            focused: false,
            input_type: self.input_type,
            locked_input_type: None,
            cursor_visible: true,
            geometry,
            controller,
            renderer,
            keyboard: self.keyboard,
            long_click: self.long_click,
            coordinator: self.coordinator,
        }
    }
}

/// Text field with an animated floating label
pub struct TextField {
    id: WidgetId,
    text: String,
    hint: String,
    focused: bool,
    input_type: InputType,
    /// Input type to restore once the running expansion settles
    locked_input_type: Option<InputType>,
    cursor_visible: bool,
    geometry: FieldGeometry,
    controller: FocusAnimationController,
    renderer: DecorationRenderer,
    keyboard: Box<dyn SoftKeyboard>,
    long_click: Option<Box<dyn LongClickHandler>>,
    coordinator: Option<FocusCoordinator>,
}

impl TextField {
    pub fn builder() -> TextFieldBuilder {
        TextFieldBuilder::new()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn hint(&self) -> &str {
        &self.hint
    }

    pub fn set_hint(&mut self, hint: impl Into<String>) {
        self.hint = hint.into();
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether text input is currently accepted
    pub fn is_editable(&self) -> bool {
        self.locked_input_type.is_none()
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    pub fn is_cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn state(&self) -> FieldState {
        self.controller.state()
    }

    pub fn decoration(&self) -> &DecorationValues {
        self.controller.values()
    }

    pub fn controller(&self) -> &FocusAnimationController {
        &self.controller
    }

    pub fn is_animating(&self) -> bool {
        self.controller.is_animating()
    }

    pub fn geometry(&self) -> &FieldGeometry {
        &self.geometry
    }

    /// Update the measured text layout; required before the decoration paints
    /// unless the builder was given one
    pub fn set_geometry(&mut self, geometry: FieldGeometry) {
        self.geometry = geometry;
    }

    /// Padding the host must reserve around the editable text
    pub fn content_padding(&self) -> ContentPadding {
        self.controller.dimensions().content_padding()
    }

    /// Whether the field would accept focus right now
    pub fn can_focus(&self) -> bool {
        !self
            .coordinator
            .as_ref()
            .is_some_and(|c| c.is_blocked(self.id))
    }

    /// Try to take focus. Refused while a sibling field is mid-expansion.
    pub fn request_focus(&mut self) -> bool {
        if self.focused {
            return true;
        }
        if !self.can_focus() {
            tracing::debug!(field = ?self.id, "focus refused while a sibling expands");
            return false;
        }

        self.focused = true;
        let effects = self.controller.on_focus_changed(true, self.text.is_empty());
        self.apply(effects);
        true
    }

    pub fn clear_focus(&mut self) {
        if !self.focused {
            return;
        }

        self.focused = false;
        self.keyboard.hide(self.id);
        let effects = self.controller.on_focus_changed(false, self.text.is_empty());
        self.apply(effects);
    }

    /// Replace the text programmatically. Allowed while input is locked.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        let effects = self.controller.on_text_changed(self.text.is_empty());
        self.apply(effects);
    }

    /// Insert typed text at the end; refused while input is locked
    pub fn insert_text(&mut self, input: &str) -> bool {
        if !self.is_editable() || self.input_type == InputType::None {
            tracing::trace!(field = ?self.id, "input rejected");
            return false;
        }

        self.text.push_str(input);
        let effects = self.controller.on_text_changed(self.text.is_empty());
        self.apply(effects);
        true
    }

    /// Advance animations using wall-clock time; returns true while animating
    pub fn tick(&mut self) -> bool {
        let effects = self.controller.tick(self.text.is_empty());
        self.apply(effects);
        self.controller.is_animating()
    }

    /// Advance animations by a fixed delta; returns true while animating
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        let effects = self.controller.advance(dt_ms, self.text.is_empty());
        self.apply(effects);
        self.controller.is_animating()
    }

    /// Run the host long-click. A view detached mid-gesture counts as
    /// consumed; other failures propagate.
    pub fn perform_long_click(&mut self, position: Option<Point>) -> Result<bool> {
        let Some(handler) = self.long_click.as_mut() else {
            return Ok(false);
        };

        match handler.perform_long_click(position) {
            Err(GestureError::DetachedView) => {
                tracing::warn!(field = ?self.id, "long click on a detached view");
                Ok(true)
            }
            result => result,
        }
    }

    /// Drop animations and focus, e.g. when the field is unmounted
    pub fn detach(&mut self) {
        self.focused = false;
        let effects = self.controller.reset(self.text.is_empty());
        self.apply(effects);
        if let Some(coordinator) = &self.coordinator {
            coordinator.release(self.id);
        }
    }

    fn apply(&mut self, effects: HostEffects) {
        for effect in effects {
            match effect {
                HostEffect::SetEditable(false) => {
                    if self.locked_input_type.is_none() {
                        self.locked_input_type = Some(self.input_type);
                        self.input_type = InputType::None;
                    }
                }
                HostEffect::SetEditable(true) => {
                    if let Some(input_type) = self.locked_input_type.take() {
                        self.input_type = input_type;
                    }
                }
                HostEffect::SetCursorVisible(visible) => self.cursor_visible = visible,
                HostEffect::ShowKeyboard => {
                    if self.focused {
                        self.keyboard.show(self.id);
                    }
                }
                HostEffect::ClaimFocusAnimation => {
                    if let Some(coordinator) = &self.coordinator {
                        coordinator.claim(self.id);
                    }
                }
                HostEffect::ReleaseFocusAnimation => {
                    if let Some(coordinator) = &self.coordinator {
                        coordinator.release(self.id);
                    }
                }
            }
        }
    }
}

impl Widget for TextField {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn paint(&self, ctx: &mut PaintContext) {
        self.renderer.paint(
            ctx,
            self.controller.state(),
            self.controller.values(),
            &self.geometry,
            &self.hint,
        );
    }

    fn handle_event(&mut self, event: &Event) -> bool {
        match event.event_type {
            event_types::FOCUS => self.request_focus(),
            event_types::BLUR => {
                self.clear_focus();
                true
            }
            event_types::TEXT_INPUT => match &event.data {
                EventData::TextInput { text } => self.insert_text(text),
                _ => false,
            },
            event_types::LONG_PRESS => {
                let position = event.position().map(|(x, y)| Point::new(x, y));
                match self.perform_long_click(position) {
                    Ok(consumed) => consumed,
                    Err(err) => {
                        tracing::error!(field = ?self.id, %err, "long click failed");
                        false
                    }
                }
            }
            event_types::UNMOUNT => {
                self.detach();
                false
            }
            _ => false,
        }
    }

    fn update(&mut self, dt_ms: f32) -> bool {
        self.advance(dt_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingKeyboard {
        calls: Rc<RefCell<Vec<&'static str>>>,
    }

    impl SoftKeyboard for RecordingKeyboard {
        fn show(&mut self, _: WidgetId) {
            self.calls.borrow_mut().push("show");
        }

        fn hide(&mut self, _: WidgetId) {
            self.calls.borrow_mut().push("hide");
        }
    }

    #[test]
    fn test_input_locked_during_expansion() {
        let mut field = TextField::builder()
            .hint("Email")
            .input_type(InputType::Email)
            .build();

        assert!(field.request_focus());
        assert!(!field.is_editable());
        assert_eq!(field.input_type(), InputType::None);
        assert!(!field.is_cursor_visible());
        assert!(!field.insert_text("a"));

        field.advance(2000.0);
        assert_eq!(field.state(), FieldState::Expanded);
        assert!(field.is_editable());
        assert_eq!(field.input_type(), InputType::Email);
        assert!(field.is_cursor_visible());
        assert!(field.insert_text("a"));
        assert_eq!(field.text(), "a");
    }

    #[test]
    fn test_keyboard_shown_after_expansion_and_hidden_on_blur() {
        let keyboard = RecordingKeyboard::default();
        let mut field = TextField::builder().keyboard(keyboard.clone()).build();

        field.request_focus();
        assert!(keyboard.calls.borrow().is_empty());
        field.advance(2000.0);
        assert_eq!(*keyboard.calls.borrow(), vec!["show"]);

        field.clear_focus();
        assert_eq!(*keyboard.calls.borrow(), vec!["show", "hide"]);
    }

    #[test]
    fn test_detached_long_click_is_consumed() {
        let mut field = TextField::builder()
            .on_long_click(|_: Option<Point>| -> Result<bool> { Err(GestureError::DetachedView) })
            .build();
        assert_eq!(field.perform_long_click(None), Ok(true));

        let mut field = TextField::builder()
            .on_long_click(|_: Option<Point>| -> Result<bool> {
                Err(GestureError::Host("no window".into()))
            })
            .build();
        assert_eq!(
            field.perform_long_click(Some(Point::new(1.0, 2.0))),
            Err(GestureError::Host("no window".into()))
        );

        let mut field = TextField::builder().build();
        assert_eq!(field.perform_long_click(None), Ok(false));
    }

    #[test]
    fn test_events_route_to_operations() {
        let mut field = TextField::builder().text("hi").build();
        let id = field.id().as_u64();

        assert!(field.handle_event(&Event::new(event_types::FOCUS, id)));
        assert!(field.is_focused());

        let input = Event::new(event_types::TEXT_INPUT, id).with_data(EventData::TextInput {
            text: "!".into(),
        });
        assert!(field.handle_event(&input));
        assert_eq!(field.text(), "hi!");

        field.advance(500.0);
        assert_eq!(field.state(), FieldState::Expanded);
        field.handle_event(&Event::new(event_types::BLUR, id));
        assert!(!field.is_focused());
        assert_eq!(field.state(), FieldState::HideHighlight);
    }

    #[test]
    fn test_unmount_resets_to_rest() {
        let coordinator = FocusCoordinator::new();
        let mut field = TextField::builder().coordinator(coordinator.clone()).build();
        field.request_focus();
        field.advance(100.0);
        assert_eq!(coordinator.animating(), Some(field.id()));

        field.handle_event(&Event::new(event_types::UNMOUNT, field.id().as_u64()));
        assert_eq!(field.state(), FieldState::Normal);
        assert!(!field.is_animating());
        assert!(field.is_editable());
        assert_eq!(coordinator.animating(), None);
    }
}
