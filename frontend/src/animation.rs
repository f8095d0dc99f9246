//! Entrance animation model.
//!
//! A section starts hidden and is revealed once. Everything in here is plain
//! data; components turn it into inline styles and let CSS transitions do the
//! interpolation.

/// One-shot visibility latch for a section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    NotYetVisible,
    Visible,
}

impl Visibility {
    /// Feed one observation into the latch. Once visible, stays visible.
    pub fn observe(self, intersecting: bool) -> Self {
        match self {
            Visibility::Visible => Visibility::Visible,
            Visibility::NotYetVisible if intersecting => Visibility::Visible,
            Visibility::NotYetVisible => Visibility::NotYetVisible,
        }
    }

    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }
}

/// Animatable properties of a container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl VisualState {
    pub const REST: VisualState = VisualState { opacity: 1.0, x: 0.0, y: 0.0, scale: 1.0 };

    pub const fn hidden() -> Self {
        VisualState { opacity: 0.0, ..Self::REST }
    }

    pub const fn offset(self, x: f64, y: f64) -> Self {
        VisualState { x, y, ..self }
    }

    pub const fn scaled(self, scale: f64) -> Self {
        VisualState { scale, ..self }
    }

    pub fn transform(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.x, self.y, self.scale)
    }

    pub fn to_css(&self) -> String {
        format!("opacity: {}; transform: {};", self.opacity, self.transform())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    EaseOut,
    EaseInOut,
}

impl Easing {
    pub fn css(self) -> &'static str {
        match self {
            Easing::EaseOut => "ease-out",
            Easing::EaseInOut => "ease-in-out",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const fn new(duration_ms: u32, easing: Easing) -> Self {
        Transition { duration_ms, delay_ms: 0, easing }
    }

    pub fn css(&self, extra_delay_ms: u32) -> String {
        let delay = self.delay_ms + extra_delay_ms;
        let easing = self.easing.css();
        format!(
            "transition: opacity {d}ms {e} {delay}ms, transform {d}ms {e} {delay}ms;",
            d = self.duration_ms,
            e = easing,
            delay = delay,
        )
    }
}

/// Where an element starts, where it ends up, and how it gets there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationDescriptor {
    pub initial: VisualState,
    pub target: VisualState,
    pub transition: Transition,
}

impl AnimationDescriptor {
    pub const fn new(initial: VisualState, transition: Transition) -> Self {
        AnimationDescriptor { initial, target: VisualState::REST, transition }
    }

    pub const fn with_delay(self, delay_ms: u32) -> Self {
        AnimationDescriptor {
            transition: Transition { delay_ms, ..self.transition },
            ..self
        }
    }

    pub fn state_for(&self, visibility: Visibility) -> VisualState {
        match visibility {
            Visibility::NotYetVisible => self.initial,
            Visibility::Visible => self.target,
        }
    }

    /// Inline style for the element, `extra_delay_ms` on top of the descriptor's own delay.
    pub fn style(&self, visibility: Visibility, extra_delay_ms: u32) -> String {
        format!(
            "{} {}",
            self.state_for(visibility).to_css(),
            self.transition.css(extra_delay_ms)
        )
    }
}

pub const FADE_IN_UP: AnimationDescriptor = AnimationDescriptor::new(
    VisualState::hidden().offset(0.0, 60.0),
    Transition::new(800, Easing::EaseOut),
);

pub const FADE_IN_LEFT: AnimationDescriptor = AnimationDescriptor::new(
    VisualState::hidden().offset(-60.0, 0.0),
    Transition::new(800, Easing::EaseOut),
);

pub const STAGGER_CONTAINER: AnimationDescriptor =
    AnimationDescriptor::new(VisualState::hidden(), Transition::new(300, Easing::EaseOut));

pub const SLIDE_DOWN: AnimationDescriptor = AnimationDescriptor::new(
    VisualState::REST.offset(0.0, -100.0),
    Transition::new(800, Easing::EaseInOut),
);

pub const HERO_HEADLINE: AnimationDescriptor = AnimationDescriptor::new(
    VisualState::hidden().offset(0.0, 100.0),
    Transition::new(1000, Easing::EaseOut),
)
.with_delay(200);

pub const HERO_SUBTITLE: AnimationDescriptor = AnimationDescriptor::new(
    VisualState::hidden().offset(0.0, 50.0),
    Transition::new(800, Easing::EaseOut),
)
.with_delay(500);

pub const HERO_ACTIONS: AnimationDescriptor = AnimationDescriptor::new(
    VisualState::hidden().offset(0.0, 30.0),
    Transition::new(800, Easing::EaseOut),
)
.with_delay(800);

pub const FEATURE_BULLET: AnimationDescriptor = AnimationDescriptor::new(
    VisualState::hidden().offset(-30.0, 0.0),
    Transition::new(300, Easing::EaseOut),
);

pub const SCALE_IN: AnimationDescriptor = AnimationDescriptor::new(
    VisualState::hidden().scaled(0.8),
    Transition::new(800, Easing::EaseOut),
);

/// Fixed offset between the start times of sibling elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Stagger {
    pub step_ms: u32,
}

impl Stagger {
    pub const NONE: Stagger = Stagger { step_ms: 0 };
    pub const CHILDREN: Stagger = Stagger { step_ms: 200 };

    pub fn delay_for(&self, index: usize) -> u32 {
        self.step_ms.saturating_mul(index as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_never_reverts() {
        let mut latch = Visibility::NotYetVisible;
        latch = latch.observe(false);
        assert_eq!(latch, Visibility::NotYetVisible);
        latch = latch.observe(true);
        assert_eq!(latch, Visibility::Visible);
        for intersecting in [false, true, false, false] {
            latch = latch.observe(intersecting);
            assert!(latch.is_visible());
        }
    }

    #[test]
    fn descriptor_picks_state_from_latch() {
        assert_eq!(FADE_IN_UP.state_for(Visibility::NotYetVisible).opacity, 0.0);
        assert_eq!(FADE_IN_UP.state_for(Visibility::NotYetVisible).y, 60.0);
        assert_eq!(FADE_IN_UP.state_for(Visibility::Visible), VisualState::REST);
        assert_eq!(FADE_IN_LEFT.initial.x, -60.0);
        assert_eq!(SCALE_IN.initial.scale, 0.8);
    }

    #[test]
    fn slide_down_keeps_nav_opaque() {
        assert_eq!(SLIDE_DOWN.initial.opacity, 1.0);
        assert_eq!(SLIDE_DOWN.initial.y, -100.0);
        assert!(SLIDE_DOWN.style(Visibility::Visible, 0).contains("800ms ease-in-out 0ms"));
    }

    #[test]
    fn style_renders_state_and_transition() {
        let hidden = FADE_IN_UP.style(Visibility::NotYetVisible, 0);
        assert!(hidden.starts_with("opacity: 0; transform: translate(0px, 60px) scale(1);"));
        assert!(hidden.contains("opacity 800ms ease-out 0ms"));

        let shown = HERO_SUBTITLE.style(Visibility::Visible, 100);
        assert!(shown.starts_with("opacity: 1; transform: translate(0px, 0px) scale(1);"));
        assert!(shown.contains("transform 800ms ease-out 600ms"));
    }

    #[test]
    fn hero_elements_enter_in_sequence() {
        assert!(HERO_HEADLINE.transition.delay_ms < HERO_SUBTITLE.transition.delay_ms);
        assert!(HERO_SUBTITLE.transition.delay_ms < HERO_ACTIONS.transition.delay_ms);
        assert_eq!(HERO_HEADLINE.transition.duration_ms, 1000);
    }

    #[test]
    fn stagger_offsets_children() {
        let delays: Vec<u32> = (0..4).map(|i| Stagger::CHILDREN.delay_for(i)).collect();
        assert_eq!(delays, vec![0, 200, 400, 600]);
        assert_eq!(Stagger::NONE.delay_for(3), 0);
    }
}
