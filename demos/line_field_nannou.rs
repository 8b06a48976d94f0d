use line_field_rs::prelude::*;
use nannou::color;
use nannou::lyon::lyon_tessellation::LineJoin;
use nannou::lyon::tessellation::LineCap;
use nannou::prelude::*;

const ROWS: usize = 24;
const COLS: usize = 24;
const CELL: f64 = 24.0;
const JITTER: f64 = 6.0;

/// The Model holds the current seed and the composition it produced.
/// A mouse click replaces both wholesale.
struct Model {
    seed: u64,
    composition: Composition,
}

fn regenerate(seed: u64) -> Composition {
    LineFieldBuilder::new()
        .rows(ROWS)
        .cols(COLS)
        .cell_size(CELL)
        .jitter(JITTER)
        .orientation(Orientation::Alternating)
        .seed(seed)
        .build()
        .generate()
        .expect("Field parameters are valid")
}

fn model(app: &App) -> Model {
    app.new_window()
        .size(700, 700)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .build()
        .unwrap();
    let seed = 0;
    Model {
        seed,
        composition: regenerate(seed),
    }
}

/// One gesture, one artwork: every click reseeds and regenerates.
fn mouse_pressed(_app: &App, model: &mut Model, _button: MouseButton) {
    model.seed = rand::random();
    model.composition = regenerate(model.seed);
    println!("Regenerated with seed {}", model.seed);
}

fn view(app: &App, model: &Model, frame: Frame) {
    // Composition coordinates start at 0,0; nannou's origin is the window
    // center, so shift by half the field.
    let half_w = (COLS as f64 * CELL / 2.0) as f32;
    let half_h = (ROWS as f64 * CELL / 2.0) as f32;
    let draw = app.draw().x_y(-half_w, -half_h);
    frame.clear(WHITE);

    for tline in model.composition.to_multi_line_string().iter() {
        draw.polyline()
            .stroke_weight(2.0)
            .caps(LineCap::Round)
            .join(LineJoin::Round)
            .polyline_from_linestring(tline)
            .color(color::BLACK);
    }

    draw.to_frame(app, &frame).unwrap();
}

fn main() {
    nannou::app(model).run();
}
