use super::*;

#[test]
fn size_is_larger_dimension() {
    assert_eq!(Ripple::at(120, 40, 0, 0).size, 120.0);
    assert_eq!(Ripple::at(40, 120, 0, 0).size, 120.0);
    assert_eq!(Ripple::at(50, 50, 0, 0).size, 50.0);
}

#[test]
fn ripple_is_centered_on_click() {
    let r = Ripple::at(100, 40, 30, 20);
    assert_eq!(r.left, -20.0);
    assert_eq!(r.top, -30.0);
    assert_eq!(r.left + r.size / 2.0, 30.0);
    assert_eq!(r.top + r.size / 2.0, 20.0);
}

#[test]
fn odd_sizes_keep_half_pixels() {
    let r = Ripple::at(75, 31, 10, 10);
    assert_eq!(r.left, -27.5);
    assert_eq!(r.css(), ("75px".to_owned(), "-27.5px".to_owned(), "-27.5px".to_owned()));
}

#[test]
fn css_prints_whole_numbers_without_fraction() {
    let r = Ripple::at(80, 30, 40, 15);
    assert_eq!(r.css(), ("80px".to_owned(), "0px".to_owned(), "-25px".to_owned()));
}

#[test]
fn zero_sized_button_gives_point_ripple() {
    let r = Ripple::at(0, 0, 5, 6);
    assert_eq!(r, Ripple { size: 0.0, left: 5.0, top: 6.0 });
}
