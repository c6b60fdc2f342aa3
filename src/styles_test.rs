use super::*;
use crate::consts::{LIGHT_MODE_CLASS, RIPPLE_ANIMATION_MS, RIPPLE_CLASS};

#[test]
fn light_mode_rules_target_body_class() {
    let selector = format!("body.{LIGHT_MODE_CLASS}");
    for rule in [" {", " .card", " .navbar", " .btn-primary", " .upload-box", " .table th"] {
        assert!(STYLESHEET.contains(&format!("{selector}{rule}")), "missing {selector}{rule}");
    }
}

#[test]
fn ripple_class_and_keyframes_are_defined() {
    assert!(STYLESHEET.contains(&format!(".{RIPPLE_CLASS} {{")));
    assert!(STYLESHEET.contains("@keyframes ripple-effect"));
}

#[test]
fn ripple_animation_matches_declared_duration() {
    let seconds = f64::from(RIPPLE_ANIMATION_MS) / 1000.0;
    assert!(STYLESHEET.contains(&format!("animation: ripple-effect {seconds}s linear")));
}

#[test]
fn braces_are_balanced() {
    let open = STYLESHEET.matches('{').count();
    let close = STYLESHEET.matches('}').count();
    assert_eq!(open, close);
}
