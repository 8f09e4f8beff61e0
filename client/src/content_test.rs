use super::*;
use crate::state::stepper::WORKFLOW_STEP_COUNT;

#[test]
fn workflow_table_matches_stepper_ring() {
    assert_eq!(WORKFLOW_STEPS.len(), WORKFLOW_STEP_COUNT);
    let titles: Vec<_> = WORKFLOW_STEPS.iter().map(|s| s.title).collect();
    assert_eq!(titles, vec!["Trigger", "Process", "Action", "Result"]);
}

#[test]
fn nav_links_point_at_section_anchors() {
    for link in NAV_LINKS {
        assert!(link.href.starts_with('#'), "{} is not an anchor", link.href);
    }
    let anchors: Vec<_> = NAV_LINKS.iter().map(|l| l.href).collect();
    assert!(anchors.contains(&"#automation"));
    assert!(anchors.contains(&"#contact"));
}

#[test]
fn footer_links_only_reference_known_anchors() {
    let known: Vec<_> = NAV_LINKS.iter().map(|l| l.href).collect();
    for group in FOOTER_LINK_GROUPS {
        for link in group.links {
            assert!(link.href == "#" || known.contains(&link.href), "{} unknown", link.href);
        }
    }
}

#[test]
fn accents_use_modifier_class_prefix() {
    let accents = SERVICES
        .iter()
        .map(|s| s.accent)
        .chain(CASE_STUDIES.iter().map(|c| c.accent))
        .chain(WORKFLOW_STEPS.iter().map(|w| w.accent));
    for accent in accents {
        assert!(accent.starts_with("accent--"), "{accent}");
    }
}

#[test]
fn contact_channels_have_link_targets() {
    assert_eq!(CONTACT_CHANNELS[0].href, "mailto:alexa.spina@udspecialize.com");
    assert!(CONTACT_CHANNELS[1].href.starts_with("tel:"));
}
