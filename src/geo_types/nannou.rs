use geo_types::LineString;
use nannou::draw::primitive::{Path, PathStroke};
use nannou::draw::Drawing;
use nannou::geom::Point2;

pub trait NannouDrawer<'a> {
    fn polyline_from_linestring(self, line: &LineString<f64>) -> Drawing<'a, Path>;
}

impl<'a> NannouDrawer<'a> for Drawing<'a, PathStroke> {
    fn polyline_from_linestring(self, line: &LineString<f64>) -> Drawing<'a, Path> {
        self.points(
            line.coords()
                .map(|p| Point2::new(p.x as f32, p.y as f32))
                .collect::<Vec<Point2>>(),
        )
    }
}
