//! Hover and tap micro-interactions.

/// Transient adjustment applied on top of an element's rest state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gesture {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub shadow: Option<&'static str>,
}

impl Gesture {
    pub const fn scale(scale: f64) -> Self {
        Gesture { x: 0.0, y: 0.0, scale, shadow: None }
    }

    pub const fn shift(x: f64, y: f64) -> Self {
        Gesture { x, y, scale: 1.0, shadow: None }
    }

    pub const fn with_scale(self, scale: f64) -> Self {
        Gesture { scale, ..self }
    }

    pub const fn with_shadow(self, shadow: &'static str) -> Self {
        Gesture { shadow: Some(shadow), ..self }
    }

    pub fn to_css(&self) -> String {
        let mut css = format!(
            "transform: translate({}px, {}px) scale({});",
            self.x, self.y, self.scale
        );
        if let Some(shadow) = self.shadow {
            css.push_str(&format!(" box-shadow: {};", shadow));
        }
        css
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum InteractionState {
    #[default]
    Rest,
    Hovered,
    Pressed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    Enter,
    Leave,
    Down,
    Up,
}

impl InteractionState {
    pub fn next(self, event: PointerAction) -> Self {
        match (self, event) {
            (_, PointerAction::Leave) => InteractionState::Rest,
            (_, PointerAction::Down) => InteractionState::Pressed,
            (InteractionState::Pressed, PointerAction::Up) => InteractionState::Hovered,
            (state, PointerAction::Up) => state,
            (InteractionState::Rest, PointerAction::Enter) => InteractionState::Hovered,
            (state, PointerAction::Enter) => state,
        }
    }
}

/// Which gestures an element reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Interaction {
    pub hover: Option<Gesture>,
    pub press: Option<Gesture>,
}

const TRANSITION: &str = "transition: transform 200ms ease-out, box-shadow 200ms ease-out;";

impl Interaction {
    pub const fn hover(gesture: Gesture) -> Self {
        Interaction { hover: Some(gesture), press: None }
    }

    pub const fn with_press(self, gesture: Gesture) -> Self {
        Interaction { press: Some(gesture), ..self }
    }

    /// Gesture in effect for `state`. Pressing without a press gesture keeps the hover one.
    pub fn gesture(&self, state: InteractionState) -> Option<Gesture> {
        match state {
            InteractionState::Rest => None,
            InteractionState::Hovered => self.hover,
            InteractionState::Pressed => self.press.or(self.hover),
        }
    }

    /// Inline style for `state`. At rest only the transition is set, leaving
    /// the element's stylesheet in charge.
    pub fn style(&self, state: InteractionState) -> String {
        match self.gesture(state) {
            Some(gesture) => format!("{} {}", gesture.to_css(), TRANSITION),
            None => TRANSITION.to_string(),
        }
    }
}

pub const PRIMARY_SHADOW: &str = "0 20px 40px rgba(59, 130, 246, 0.3)";
pub const LIGHT_SHADOW: &str = "0 20px 40px rgba(255, 255, 255, 0.1)";

/// Brand logo, outline buttons.
pub const GROW: Interaction = Interaction::hover(Gesture::scale(1.05));
pub const BUTTON: Interaction = GROW.with_press(Gesture::scale(0.95));
pub const PRIMARY_BUTTON: Interaction =
    Interaction::hover(Gesture::scale(1.05).with_shadow(PRIMARY_SHADOW)).with_press(Gesture::scale(0.95));
pub const LIGHT_BUTTON: Interaction =
    Interaction::hover(Gesture::scale(1.05).with_shadow(LIGHT_SHADOW)).with_press(Gesture::scale(0.95));
pub const CARD: Interaction = Interaction::hover(Gesture::shift(0.0, -10.0).with_scale(1.02));
pub const NUDGE: Interaction = Interaction::hover(Gesture::shift(5.0, 0.0));
pub const ICON: Interaction = Interaction::hover(Gesture::scale(1.1));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leave_always_returns_to_rest() {
        for state in [InteractionState::Rest, InteractionState::Hovered, InteractionState::Pressed] {
            assert_eq!(state.next(PointerAction::Leave), InteractionState::Rest);
        }
    }

    #[test]
    fn press_and_release_while_hovering() {
        let state = InteractionState::Rest
            .next(PointerAction::Enter)
            .next(PointerAction::Down);
        assert_eq!(state, InteractionState::Pressed);
        assert_eq!(state.next(PointerAction::Up), InteractionState::Hovered);
    }

    #[test]
    fn repeated_hover_cycles_do_not_accumulate() {
        let rest_style = BUTTON.style(InteractionState::Rest);
        let mut state = InteractionState::Rest;
        for _ in 0..10 {
            state = state.next(PointerAction::Enter);
            assert_eq!(BUTTON.style(state), BUTTON.style(InteractionState::Hovered));
            state = state.next(PointerAction::Down).next(PointerAction::Up);
            state = state.next(PointerAction::Leave);
            assert_eq!(state, InteractionState::Rest);
            assert_eq!(BUTTON.style(state), rest_style);
        }
    }

    #[test]
    fn rest_style_sets_no_gesture() {
        let style = PRIMARY_BUTTON.style(InteractionState::Rest);
        assert!(!style.contains("scale("));
        assert!(!style.contains("box-shadow:"));
    }

    #[test]
    fn hover_and_press_gestures() {
        let hovered = PRIMARY_BUTTON.style(InteractionState::Hovered);
        assert!(hovered.contains("scale(1.05)"));
        assert!(hovered.contains(PRIMARY_SHADOW));
        assert!(PRIMARY_BUTTON.style(InteractionState::Pressed).contains("scale(0.95)"));
        // cards have no press gesture and stay lifted while held
        assert_eq!(CARD.gesture(InteractionState::Pressed), CARD.hover);
        assert!(CARD.style(InteractionState::Hovered).contains("translate(0px, -10px) scale(1.02)"));
    }

    #[test]
    fn no_interaction_is_inert() {
        let inert = Interaction::default();
        assert_eq!(inert.gesture(InteractionState::Hovered), None);
        assert_eq!(inert.gesture(InteractionState::Pressed), None);
    }
}
