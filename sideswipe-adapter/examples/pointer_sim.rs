// Example: drive a carousel from simulated pointer input and a 60fps clock.
use std::sync::atomic::Ordering;

use sideswipe::CarouselOptions;
use sideswipe_adapter::{Controller, Easing, SharedParentScroll};

fn main() {
    let parent = SharedParentScroll::new();
    let parent_flag = parent.flag();

    let opts = CarouselOptions::new(8, 360.0)
        .with_item_width(300.0)
        .with_content_offset(30.0)
        .with_use_velocity_for_index(true)
        .with_on_index_change(Some(|i: usize| println!("on_index_change({i})")))
        .with_on_end_reached(Some(|| println!("on_end_reached")));
    let mut c = Controller::new(opts, parent).with_animation(240, Easing::EaseInOutCubic);

    // A quick flick to the left: 180px in 96ms.
    let mut now_ms = 0u64;
    c.on_pointer_down(300.0, 200.0, now_ms);
    for step in 1..=6 {
        now_ms += 16;
        let x = 300.0 - 30.0 * step as f64;
        if let Some(offset) = c.on_pointer_move(x, 201.0, now_ms) {
            println!(
                "t={now_ms:>3} offset={offset:>8.2} progress={:.3} parent_enabled={}",
                c.carousel().progress(),
                parent_flag.load(Ordering::Acquire)
            );
        }
    }
    let settled = c.on_pointer_up(120.0, 201.0, now_ms);
    println!("released: settled={settled:?}");

    while c.is_animating() {
        now_ms += 16;
        if let Some(offset) = c.tick(now_ms) {
            println!(
                "t={now_ms:>3} offset={offset:>8.2} progress={:.3}",
                c.carousel().progress()
            );
        }
    }

    c.set_index(7, now_ms);
    while c.is_animating() {
        now_ms += 16;
        c.tick(now_ms);
    }
    println!(
        "imposed: current_index={} offset={:.2} parent_enabled={}",
        c.carousel().current_index(),
        c.carousel().scroll_position(),
        parent_flag.load(Ordering::Acquire)
    );
}
