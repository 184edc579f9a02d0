/// A section's bounding rectangle relative to the viewport (CSS pixels, y axis only).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

impl SectionRect {
    pub fn new(top: f64, bottom: f64) -> Self {
        Self { top, bottom }
    }

    /// Whether a horizontal line at `line` (viewport y) crosses this section.
    ///
    /// The top edge is inclusive, the bottom edge exclusive, so two stacked sections never both
    /// contain the same line.
    pub fn contains_line(&self, line: f64) -> bool {
        self.top <= line && self.bottom > line
    }
}

/// A snapshot of the page geometry taken at the start of one tracker evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageMetrics {
    /// Current vertical scroll offset of the document.
    pub scroll_offset: f64,
    pub viewport_height: f64,
    /// Total scrollable height of the document.
    pub document_height: f64,
    /// Height of the page header. `None` when the header element is missing.
    pub header_height: Option<f64>,
    /// Height of the fixed navigation bar (0 when missing).
    pub nav_height: f64,
    /// Height of the footer. `None` when the footer element is missing.
    pub footer_height: Option<f64>,
}

impl PageMetrics {
    /// The bottom edge of the viewport in document coordinates.
    pub fn viewport_bottom(&self) -> f64 {
        self.viewport_height + self.scroll_offset
    }
}

/// The outcome of one section tracker evaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Evaluation {
    /// `Some(true)` when the nav bar should carry the "at top" state, `Some(false)` when it
    /// should not, `None` when there is no header to measure against.
    pub at_top: Option<bool>,
    /// Index (document order) of the active section.
    pub active_section: Option<usize>,
}

/// How link-triggered scrolling is performed. Selected once at initialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollStrategy {
    /// The environment honours `scroll-behavior: smooth`; links navigate natively.
    Native,
    /// No native support; clicks are intercepted and animated frame by frame.
    Animated,
}

impl ScrollStrategy {
    pub fn detect(supports_smooth_scroll: bool) -> Self {
        if supports_smooth_scroll {
            Self::Native
        } else {
            Self::Animated
        }
    }

    pub fn is_animated(self) -> bool {
        matches!(self, Self::Animated)
    }
}

/// How the URL fragment is written once an animated scroll completes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FragmentMode {
    /// Push a single new history entry (`history.pushState`).
    #[default]
    Push,
    /// Replace the current history entry (`history.replaceState`).
    Replace,
}
