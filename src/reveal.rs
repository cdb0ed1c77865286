pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Delay before on-load content flips visible: one frame, so the hidden
/// style is computed before the transition target is applied.
pub const ENTER_DELAY_MS: u32 = 16;

pub const SCROLLED_OFFSET_PX: f64 = 50.0;

pub fn is_scrolled(scroll_y: f64) -> bool {
    scroll_y > SCROLLED_OFFSET_PX
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    state: RevealState,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Visible
    }

    /// Feeds one intersection observation. Returns `true` only on the call
    /// that flips the latch; later observations, including leaving the
    /// viewport, leave it visible.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.is_visible() {
            return false;
        }

        if is_intersecting && ratio >= REVEAL_THRESHOLD {
            self.state = RevealState::Visible;
            return true;
        }

        false
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub base_secs: f64,
    pub step_secs: f64,
}

impl Stagger {
    pub const fn new(base_secs: f64, step_secs: f64) -> Self {
        Self { base_secs, step_secs }
    }

    pub fn delay(&self, index: usize) -> f64 {
        self.base_secs + index as f64 * self.step_secs
    }

    pub fn style(&self, index: usize) -> String {
        transition_delay(self.delay(index))
    }
}

pub const SECTION_STAGGER: Stagger = Stagger::new(0.3, 0.2);
pub const DENSE_SECTION_STAGGER: Stagger = Stagger::new(0.3, 0.1);
pub const NAV_STAGGER: Stagger = Stagger::new(0.0, 0.1);
pub const INTEREST_STAGGER: Stagger = Stagger::new(0.5, 0.1);
pub const STAT_STAGGER: Stagger = Stagger::new(0.7, 0.1);
pub const TIMELINE_DOT_STAGGER: Stagger = Stagger::new(0.5, 0.2);
pub const CERTIFICATION_STAGGER: Stagger = Stagger::new(0.9, 0.1);
pub const TECHNOLOGY_STAGGER: Stagger = Stagger::new(0.5, 0.1);

pub fn achievement_delay(entry: usize, item: usize) -> f64 {
    Stagger::new(0.7 + entry as f64 * 0.2, 0.1).delay(item)
}

pub fn skill_bar_delay(category: usize, skill: usize) -> f64 {
    Stagger::new(category as f64 * 0.2, 0.1).delay(skill)
}

pub fn transition_delay(delay_secs: f64) -> String {
    format!("transition-delay: {delay_secs:.2}s;")
}

pub fn reveal_class(visible: bool) -> &'static str {
    if visible {
        "reveal is-visible"
    } else {
        "reveal"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_flips_once_and_never_reverts() {
        let mut latch = RevealLatch::new();
        assert!(!latch.is_visible());

        assert!(latch.observe(true, 0.25));
        assert!(latch.is_visible());

        assert!(!latch.observe(false, 0.0));
        assert!(latch.is_visible());

        assert!(!latch.observe(true, 1.0));
        assert!(latch.is_visible());
    }

    #[test]
    fn latch_waits_for_threshold() {
        let mut latch = RevealLatch::new();

        assert!(!latch.observe(true, 0.05));
        assert!(!latch.is_visible());

        assert!(latch.observe(true, REVEAL_THRESHOLD));
    }

    #[test]
    fn on_load_flip_waits_for_a_frame() {
        assert!(ENTER_DELAY_MS >= 16);
        assert_eq!(reveal_class(false), "reveal");
        assert_eq!(reveal_class(true), "reveal is-visible");
    }

    #[test]
    fn header_counts_as_scrolled_only_past_offset() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(1200.0));
    }

    #[test]
    fn stagger_produces_cascade() {
        let delays: Vec<f64> = (0..3).map(|index| SECTION_STAGGER.delay(index)).collect();
        assert!(delays.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(SECTION_STAGGER.style(1), "transition-delay: 0.50s;");
    }

    #[test]
    fn nested_delays_match_section_timing() {
        assert_eq!(transition_delay(achievement_delay(1, 2)), "transition-delay: 1.10s;");
        assert_eq!(transition_delay(skill_bar_delay(2, 3)), "transition-delay: 0.70s;");
    }
}
