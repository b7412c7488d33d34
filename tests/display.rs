//! LED bar rendering against fake pins.

mod common;

use common::led_bar;
use gmeter_firmware::drivers::calibration::Stage;
use gmeter_firmware::state::DisplayMode;

#[test]
fn zero_magnitude_leaves_the_bar_dark() {
    let (mut bar, leds) = led_bar();
    bar.set_magnitude(0).unwrap();
    assert!(leds.bar_is_dark());
}

#[test]
fn full_scale_positive_lights_the_right_side_and_outer() {
    let (mut bar, leds) = led_bar();
    bar.set_magnitude(25).unwrap();
    assert_eq!(leds.right_duties(), [255, 255, 255]);
    assert!(leds.right_outer.is_set());
    assert_eq!(leds.left_duties(), [0, 0, 0]);
    assert!(!leds.left_outer.is_set());
}

#[test]
fn partial_step_dims_the_frontier_led() {
    let (mut bar, leds) = led_bar();
    // 10 = one full step of 8 plus 2 into the next
    bar.set_magnitude(-10).unwrap();
    assert_eq!(leds.left_duties(), [255, 64, 0]);
    assert_eq!(leds.right_duties(), [0, 0, 0]);
    assert!(!leds.left_outer.is_set());
}

#[test]
fn outer_led_waits_for_full_scale() {
    let (mut bar, leds) = led_bar();
    bar.set_magnitude(24).unwrap();
    assert_eq!(leds.right_duties(), [255, 255, 255]);
    assert!(!leds.right_outer.is_set());
}

#[test]
fn saturated_values_clamp_to_the_outer_led() {
    let (mut bar, leds) = led_bar();
    bar.set_magnitude(60).unwrap();
    assert_eq!(leds.right_duties(), [255, 255, 255]);
    assert!(leds.right_outer.is_set());

    bar.set_magnitude(-31).unwrap();
    assert_eq!(leds.left_duties(), [255, 255, 255]);
    assert!(leds.left_outer.is_set());
    assert!(!leds.right_outer.is_set());
}

#[test]
fn magnitude_updates_never_touch_the_center_led() {
    let (mut bar, leds) = led_bar();
    bar.ready().unwrap();
    assert!(leds.center.is_set());

    bar.set_magnitude(17).unwrap();
    bar.set_magnitude(-3).unwrap();
    bar.set_magnitude(0).unwrap();
    assert!(leds.center.is_set());
}

#[test]
fn side_switch_clears_the_previous_side() {
    let (mut bar, leds) = led_bar();
    bar.set_magnitude(25).unwrap();
    bar.set_magnitude(-25).unwrap();
    assert_eq!(leds.right_duties(), [0, 0, 0]);
    assert!(!leds.right_outer.is_set());
    assert_eq!(leds.left_duties(), [255, 255, 255]);
    assert!(leds.left_outer.is_set());
}

#[test]
fn ready_state_is_center_only() {
    let (mut bar, leds) = led_bar();
    bar.all_on(true).unwrap();
    bar.ready().unwrap();
    assert!(leds.bar_is_dark());
    assert!(leds.center.is_set());
}

#[test]
fn all_on_respects_the_center_flag() {
    let (mut bar, leds) = led_bar();
    bar.all_on(false).unwrap();
    assert_eq!(leds.left_duties(), [255, 255, 255]);
    assert_eq!(leds.right_duties(), [255, 255, 255]);
    assert!(leds.left_outer.is_set());
    assert!(leds.right_outer.is_set());
    assert!(!leds.center.is_set());

    bar.all_on(true).unwrap();
    assert!(leds.center.is_set());
    bar.all_off(true).unwrap();
    assert!(leds.bar_is_dark());
    assert!(!leds.center.is_set());
}

#[test]
fn mode_blink_leaves_the_center_lit() {
    let (mut bar, leds) = led_bar();
    bar.mode_blink(DisplayMode::LeftRight).unwrap();
    assert!(leds.center.is_set());
    assert!(leds.bar_is_dark());

    bar.mode_blink(DisplayMode::FrontRear).unwrap();
    assert!(leds.center.is_set());
    assert!(leds.bar_is_dark());
}

#[test]
fn error_flash_ends_fully_dark() {
    let (mut bar, leds) = led_bar();
    bar.error_flash().unwrap();
    assert!(leds.bar_is_dark());
    assert!(!leds.center.is_set());
}

#[test]
fn stage_prompts_are_distinct_patterns() {
    let (mut bar, leds) = led_bar();

    bar.show_stage(Stage::Left).unwrap();
    assert_eq!(leds.left_duties(), [255, 255, 255]);
    assert!(leds.left_outer.is_set());
    assert!(!leds.center.is_set());

    bar.show_stage(Stage::Right).unwrap();
    assert_eq!(leds.right_duties(), [255, 255, 255]);
    assert!(leds.right_outer.is_set());
    assert_eq!(leds.left_duties(), [0, 0, 0]);

    bar.show_stage(Stage::Front).unwrap();
    assert!(leds.center.is_set());
    assert_eq!(leds.left_duties(), [255, 0, 0]);
    assert_eq!(leds.right_duties(), [255, 0, 0]);

    bar.show_stage(Stage::Rear).unwrap();
    assert!(leds.center.is_set());
    assert!(leds.left_outer.is_set());
    assert!(leds.right_outer.is_set());
    assert_eq!(leds.left_duties(), [0, 0, 0]);
}

#[test]
fn startup_show_ends_fully_dark() {
    let (mut bar, leds) = led_bar();
    bar.startup_show().unwrap();
    assert!(leds.bar_is_dark());
    assert!(!leds.center.is_set());
}
