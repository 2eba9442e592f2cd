use sideswipe::{
    Carousel, CarouselOptions, GestureState, NoParentScroll, ScrollSurface, ScrollToIndex,
};

/// Prints every call the carousel makes instead of scrolling a real list.
struct PrintSurface;

impl ScrollSurface for PrintSurface {
    fn scroll_to_offset(&mut self, offset: f64, animated: bool) {
        println!("  scroll_to_offset offset={offset:.2} animated={animated}");
    }

    fn scroll_to_index(&mut self, request: ScrollToIndex) {
        println!(
            "  scroll_to_index index={} view_offset={:.2} target={:.2}",
            request.index,
            request.view_offset,
            request.target_offset()
        );
    }
}

fn main() {
    let opts = CarouselOptions::new(5, 300.0)
        .with_content_offset(12.0)
        .with_on_index_change(Some(|i: usize| println!("  on_index_change({i})")));
    let mut c = Carousel::new(opts, PrintSurface, NoParentScroll);

    println!("swipe left by 150px");
    let start = GestureState::new(-4.0, 0.0, 0.0);
    if c.on_capture_test(&start) {
        c.on_grant(&start);
        for dx in [-30.0, -90.0, -150.0] {
            c.on_move(&GestureState::new(dx, 0.0, -0.8));
            println!("  progress={:.3}", c.progress());
        }
        c.on_release(&GestureState::new(-150.0, 0.0, -0.8));
    }
    println!("current_index={}", c.current_index());

    println!("impose index 4");
    c.set_index_prop(Some(4));
    println!("current_index={}", c.current_index());

    c.for_each_item(|item| {
        println!(
            "item {} at {:.0}..{:.0} relative={:+.2}",
            item.index,
            item.layout.offset,
            item.layout.end(),
            item.relative_progress()
        );
    });
}
