use scrollspy::AnimationToken;

/// An element whose clicks the animated fallback intercepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// Nav item at this index (document order).
    NavItem(usize),
    /// The "scroll down" arrow in the header; targets the first section.
    HeaderArrow,
    /// The brand/logo link; scrolls back to the top.
    Brand,
    /// The header call-to-action button; targets the configured section.
    CallToAction,
}

/// What the adapter should do with a click after the controller has seen it.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Let the browser follow the link.
    PassThrough,
    /// Prevent the default action; nothing else to schedule.
    Handled,
    /// Prevent the default action and drive frames with this token.
    Animate(AnimationToken),
}

impl ClickOutcome {
    pub fn prevents_default(self) -> bool {
        !matches!(self, Self::PassThrough)
    }

    pub fn token(self) -> Option<AnimationToken> {
        match self {
            Self::Animate(token) => Some(token),
            _ => None,
        }
    }
}
