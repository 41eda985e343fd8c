//! Ribbon swatches example
//!
//! Console demonstration of the carousel widget: ten colored swatches of
//! increasing width, a simulated click, and a simulated drag gesture that
//! snaps the strip onto the item under the viewport center.
//!
//! Run with: cargo run -p ribbon --example swatches

use std::any::Any;
use std::sync::Arc;

use parking_lot::Mutex;
use ribbon::widget::widgets::{Carousel, CarouselDataSource};
use ribbon::widget::{ItemView, Widget};
use ribbon::{Color, Point, Rect, Signal, Size};

/// A colored rectangle item.
struct Swatch {
    color: Color,
    size: Size,
}

impl ItemView for Swatch {
    fn natural_size(&self) -> Size {
        self.size
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Data source serving ten swatches; swatch `i` is `10 * (i + 1)` wide.
struct SwatchSource {
    palette: Vec<Color>,
}

impl SwatchSource {
    fn new() -> Self {
        Self {
            palette: vec![
                Color::BLUE,
                Color::RED,
                Color::from_rgb8(255, 165, 0), // orange
                Color::YELLOW,
                Color::from_rgb8(139, 69, 19), // brown
                Color::BLACK,
                Color::GREEN,
                Color::from_rgb8(128, 0, 128), // purple
                Color::GRAY,
                Color::CYAN,
            ],
        }
    }
}

impl CarouselDataSource for SwatchSource {
    fn len(&self) -> usize {
        self.palette.len()
    }

    fn view_at(&self, index: usize) -> Arc<dyn ItemView> {
        Arc::new(Swatch {
            color: self.palette[index],
            size: Size::new(10.0 * (index + 1) as f32, 20.0),
        })
    }
}

fn print_frames(carousel: &Carousel) {
    let strip = carousel.strip();
    for index in 0..strip.len() {
        let frame = strip.frame_of(index);
        let swatch = strip
            .item_at(index)
            .as_any()
            .downcast_ref::<Swatch>()
            .expect("strip holds swatches");
        println!(
            "  item {index}: x={:.0} w={:.0} color=({:.2}, {:.2}, {:.2})",
            frame.origin.x,
            frame.width(),
            swatch.color.r,
            swatch.color.g,
            swatch.color.b,
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let source: Arc<dyn CarouselDataSource> = Arc::new(SwatchSource::new());

    let carousel = Arc::new(Mutex::new(
        Carousel::new().with_data_source(Arc::downgrade(&source)),
    ));

    // The host applies requested offsets after the widget call returns;
    // signals fire while the widget is borrowed, so the request is parked
    // in a mailbox rather than applied from inside the slot.
    let pending_scroll: Arc<Mutex<Option<Point>>> = Arc::new(Mutex::new(None));

    {
        let carousel = carousel.lock();

        carousel.item_selected.connect(|&index| {
            println!("selected item {index}");
        });

        let pending = pending_scroll.clone();
        carousel.scroll_requested.connect(move |&offset| {
            println!("scroll requested to x={:.0}", offset.x);
            *pending.lock() = Some(offset);
        });

        carousel.scrolled.connect(|&x| {
            println!("viewport scrolled to x={:.0}", x);
        });
    }

    // Host-owned gesture-end notification, bound for the carousel's
    // lifetime by the RAII guard.
    let gesture_ended = Signal::<()>::new();
    let _gesture_binding = Carousel::bind_gesture_ended(&carousel, &gesture_ended);

    // Size the viewport and load the swatches.
    {
        let mut carousel = carousel.lock();
        carousel.set_geometry(Rect::new(0.0, 0.0, 300.0, 40.0));
        carousel.reload();

        println!("loaded {} swatches:", carousel.len());
        print_frames(&carousel);
    }

    let apply_pending = |label: &str| {
        if let Some(offset) = pending_scroll.lock().take() {
            let mut carousel = carousel.lock();
            let clamped = offset.x.clamp(0.0, carousel.max_scroll_x());
            println!("{label}: applying x={:.0} (requested {:.0})", clamped, offset.x);
            carousel.set_scroll_x(clamped);
        }
    };

    // Simulate a click on the fourth swatch (x 90..130 in content
    // coordinates, padding 10).
    println!("\nclicking at (100, 10):");
    carousel.lock().handle_click(Point::new(100.0, 10.0));
    apply_pending("host");

    // Simulate the end of a drag: the carousel snaps onto whatever sits
    // under the viewport midpoint at the current offset.
    println!("\ndrag gesture ends:");
    gesture_ended.emit(());
    apply_pending("host");

    let carousel = carousel.lock();
    println!(
        "\nfinal state: selection={:?} scroll_x={:.0}",
        carousel.selected_index(),
        carousel.scroll_x()
    );
}
