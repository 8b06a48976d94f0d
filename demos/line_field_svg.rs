use geo_types::{coord, Rect};
use line_field_rs::prelude::*;
use std::path::Path;

/// Generates a jittered line field and writes it out as a plotter-ready SVG.
fn main() {
    let rows = 24;
    let cols = 24;
    let cell = 10.0;

    // Define our viewbox/canvas (in mm)
    let viewbox = Rect::new(
        coord! {x: 0f64, y: 0f64},
        coord! {x: cols as f64 * cell, y: rows as f64 * cell},
    );

    // Fit it, center it, leave a margin for the clips that hold the paper.
    let arrangement = Arrangement::FitCenterMargin(10.0, viewbox, false);

    let composition = LineFieldBuilder::new()
        .rows(rows)
        .cols(cols)
        .cell_size(cell)
        .jitter(3.0)
        .orientation(Orientation::Alternating)
        // Static seed so the example SVG doesn't churn on every run.
        .seed(12345)
        .build()
        .generate()
        .expect("Field parameters are valid");

    let svg = arrangement
        .create_svg_document()
        .unwrap()
        .add(
            composition
                .to_path(&arrangement)
                .set("fill", "none")
                .set("stroke", "black")
                .set("stroke-width", 1)
                .set("stroke-linejoin", "round")
                .set("stroke-linecap", "round"),
        );

    // Write it out to /images/$THIS_EXAMPLE_FILE.svg
    let fname = Path::new(file!()).file_stem().unwrap().to_str().unwrap();
    svg::save(format!("images/{}.svg", fname), &svg).unwrap();
}
