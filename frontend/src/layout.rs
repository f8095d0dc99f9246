//! Section order and per-section reveal state for the landing page.

use std::rc::Rc;

use log::debug;
use yew::Reducible;

use crate::animation::{
    AnimationDescriptor, Visibility, FADE_IN_LEFT, FADE_IN_UP, HERO_HEADLINE, SLIDE_DOWN,
    STAGGER_CONTAINER,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Nav,
    Hero,
    Services,
    Features,
    Stats,
    Testimonials,
    CallToAction,
    Footer,
}

/// What flips a section's latch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trigger {
    /// Shortly after the page mounts.
    Mount,
    /// First time the section scrolls into view.
    Viewport,
    /// Not animated, visible from the start.
    Always,
}

pub const PAGE_SECTIONS: [SectionKind; 8] = [
    SectionKind::Nav,
    SectionKind::Hero,
    SectionKind::Services,
    SectionKind::Features,
    SectionKind::Stats,
    SectionKind::Testimonials,
    SectionKind::CallToAction,
    SectionKind::Footer,
];

impl SectionKind {
    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Nav => "nav",
            SectionKind::Hero => "hero",
            SectionKind::Services => "services",
            SectionKind::Features => "features",
            SectionKind::Stats => "stats",
            SectionKind::Testimonials => "testimonials",
            SectionKind::CallToAction => "call-to-action",
            SectionKind::Footer => "footer",
        }
    }

    /// In-page anchor target, if the nav links to this section.
    pub fn anchor(self) -> Option<&'static str> {
        match self {
            SectionKind::Services => Some("services"),
            SectionKind::Features => Some("about"),
            SectionKind::Footer => Some("contact"),
            _ => None,
        }
    }

    /// Entrance of the section's leading element.
    pub fn entrance(self) -> Option<AnimationDescriptor> {
        match self {
            SectionKind::Nav => Some(SLIDE_DOWN),
            SectionKind::Hero => Some(HERO_HEADLINE),
            SectionKind::Services => Some(FADE_IN_UP),
            SectionKind::Features => Some(FADE_IN_LEFT),
            SectionKind::Stats => Some(STAGGER_CONTAINER),
            SectionKind::Testimonials => Some(FADE_IN_UP),
            SectionKind::CallToAction => Some(FADE_IN_UP),
            SectionKind::Footer => None,
        }
    }

    pub fn trigger(self) -> Trigger {
        match (self, self.entrance()) {
            (_, None) => Trigger::Always,
            (SectionKind::Nav | SectionKind::Hero, Some(_)) => Trigger::Mount,
            (_, Some(_)) => Trigger::Viewport,
        }
    }
}

/// Visibility latch of every section on the page, in page order.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionStates {
    states: Vec<(SectionKind, Visibility)>,
}

impl Default for SectionStates {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionStates {
    pub fn new() -> Self {
        let states = PAGE_SECTIONS
            .iter()
            .map(|&kind| {
                let visibility = match kind.trigger() {
                    Trigger::Always => Visibility::Visible,
                    Trigger::Mount | Trigger::Viewport => Visibility::NotYetVisible,
                };
                (kind, visibility)
            })
            .collect();
        SectionStates { states }
    }

    pub fn visibility(&self, kind: SectionKind) -> Visibility {
        self.states
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, v)| *v)
            .unwrap_or_default()
    }

    /// Feed an intersection report for `kind`. Returns true if the latch flipped.
    pub fn observe(&mut self, kind: SectionKind, intersecting: bool) -> bool {
        match self.states.iter_mut().find(|(k, _)| *k == kind) {
            Some((_, visibility)) => {
                let before = *visibility;
                *visibility = before.observe(intersecting);
                before != *visibility
            }
            None => false,
        }
    }

    pub fn reveal(&mut self, kind: SectionKind) -> bool {
        self.observe(kind, true)
    }

    pub fn visible(&self) -> impl Iterator<Item = SectionKind> + '_ {
        self.states
            .iter()
            .filter(|(_, v)| v.is_visible())
            .map(|(k, _)| *k)
    }
}

impl Reducible for SectionStates {
    type Action = SectionKind;

    fn reduce(self: Rc<Self>, kind: SectionKind) -> Rc<Self> {
        if self.visibility(kind).is_visible() {
            return self;
        }
        let mut next = (*self).clone();
        if next.reveal(kind) {
            debug!("Revealed {} section", kind.name());
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted() -> SectionStates {
        let mut states = SectionStates::new();
        for kind in PAGE_SECTIONS {
            if kind.trigger() == Trigger::Mount {
                states.reveal(kind);
            }
        }
        states
    }

    #[test]
    fn sections_render_in_fixed_order() {
        let names: Vec<&str> = PAGE_SECTIONS.iter().map(|k| k.name()).collect();
        assert_eq!(
            names,
            ["nav", "hero", "services", "features", "stats", "testimonials", "call-to-action", "footer"]
        );
    }

    #[test]
    fn only_unanimated_sections_start_visible() {
        let states = SectionStates::new();
        let visible: Vec<SectionKind> = states.visible().collect();
        assert_eq!(visible, vec![SectionKind::Footer]);
    }

    #[test]
    fn hidden_sections_render_initial_opacity() {
        let states = SectionStates::new();
        for kind in PAGE_SECTIONS {
            if let Some(entrance) = kind.entrance() {
                let state = entrance.state_for(states.visibility(kind));
                assert_eq!(state.opacity, entrance.initial.opacity, "{}", kind.name());
            }
        }
    }

    #[test]
    fn page_load_at_top_reveals_only_mounted_sections() {
        let states = mounted();
        let animated: Vec<SectionKind> = states
            .visible()
            .filter(|kind| kind.entrance().is_some())
            .collect();
        assert_eq!(animated, vec![SectionKind::Nav, SectionKind::Hero]);
    }

    #[test]
    fn services_stay_visible_after_scrolling_back_up() {
        let mut states = mounted();
        assert!(!states.observe(SectionKind::Services, false));
        assert_eq!(states.visibility(SectionKind::Services), Visibility::NotYetVisible);

        assert!(states.observe(SectionKind::Services, true));
        let entrance = SectionKind::Services.entrance().unwrap();
        assert_eq!(
            entrance.state_for(states.visibility(SectionKind::Services)).opacity,
            entrance.target.opacity
        );

        assert!(!states.observe(SectionKind::Services, false));
        assert_eq!(states.visibility(SectionKind::Services), Visibility::Visible);
        assert_eq!(states.visibility(SectionKind::Features), Visibility::NotYetVisible);
    }

    #[test]
    fn reducer_reveal_is_idempotent() {
        let states = Rc::new(SectionStates::new());
        let once = states.reduce(SectionKind::Stats);
        let twice = Rc::clone(&once).reduce(SectionKind::Stats);
        assert!(Rc::ptr_eq(&once, &twice));
        assert!(twice.visibility(SectionKind::Stats).is_visible());
    }

    #[test]
    fn anchors_cover_nav_links() {
        let anchors: Vec<&str> = PAGE_SECTIONS.iter().filter_map(|k| k.anchor()).collect();
        assert_eq!(anchors, ["services", "about", "contact"]);
    }
}
