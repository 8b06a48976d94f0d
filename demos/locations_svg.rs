use geo_types::{coord, Rect};
use line_field_rs::prelude::*;
use std::path::Path;

/// LeWitt's "Locations of Lines": dashed rows and columns, each with its own
/// random phase. Writes the artwork out as SVG.
fn main() {
    let extent = 200.0;

    // Define our viewbox/canvas (in mm)
    let viewbox = Rect::new(coord! {x: 0f64, y: 0f64}, coord! {x: extent, y: extent});
    let arrangement = Arrangement::FitCenterMargin(15.0, viewbox, false);

    let composition = LocationsOfLinesBuilder::new()
        .extent(extent)
        .line_length(50.0)
        .line_gap(10.0)
        .row_spacing(4.0)
        .column_spacing(4.0)
        // Static seed so the example SVG doesn't churn on every run.
        .seed(8675309)
        .build()
        .generate()
        .expect("Field parameters are valid");

    println!("Generated {} dashes", composition.len());

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
