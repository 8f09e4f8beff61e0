use super::*;
use crate::state::visibility::VisibilityPhase;

// =============================================================================
// PAGE FADE
// =============================================================================

#[test]
fn page_fade_uses_low_threshold_and_bottom_margin() {
    assert!((RevealOptions::PAGE.threshold - 0.1).abs() < f64::EPSILON);
    assert_eq!(RevealOptions::PAGE.root_margin, "0px 0px -50px 0px");
}

#[test]
fn fade_in_class_adds_visible_once_revealed() {
    assert_eq!(fade_in_class("section about", false), "section about fade-in");
    assert_eq!(fade_in_class("section about", true), "section about fade-in visible");
}

// =============================================================================
// OWNER CLEANUP
// =============================================================================

#[test]
fn cleanup_tears_down_pending_tracker() {
    let owner = Owner::new();
    owner.with(|| {
        let tracker = RwSignal::new(VisibilityTracker::new(RevealOptions::SECTION.threshold));
        let section = owner.child();
        section.with(|| track_reveal(NodeRef::new(), RevealOptions::SECTION, tracker));
        assert_eq!(tracker.get_untracked().phase(), VisibilityPhase::Pending);

        section.cleanup();
        assert_eq!(tracker.get_untracked().phase(), VisibilityPhase::TornDown);

        // A sample delivered after unmount changes nothing.
        let revealed = tracker.try_update(|t| t.observe(true, 1.0));
        assert_eq!(revealed, Some(false));
        assert!(!tracker.get_untracked().is_visible());
    });
}

#[test]
fn cleanup_keeps_reveal_that_already_happened() {
    let owner = Owner::new();
    owner.with(|| {
        let tracker = RwSignal::new(VisibilityTracker::new(RevealOptions::ABOUT.threshold));
        let section = owner.child();
        section.with(|| track_reveal(NodeRef::new(), RevealOptions::ABOUT, tracker));
        tracker.update(|t| {
            t.observe(true, 0.5);
        });

        section.cleanup();
        let after = tracker.get_untracked();
        assert_eq!(after.phase(), VisibilityPhase::TornDown);
        assert!(after.is_visible());
    });
}

#[test]
fn reveal_signal_starts_hidden() {
    let owner = Owner::new();
    owner.with(|| {
        let visible = use_page_fade(NodeRef::new());
        assert!(!visible.get_untracked());
    });
}
