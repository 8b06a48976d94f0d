use geo::bounding_rect::BoundingRect;
use geo_types::{Coord, LineString, MultiLineString, Rect};
use nalgebra::{Affine2, Matrix3, Point2 as NPoint2};
use svg::node::element::path::Data;
use svg::node::element::Path;
use svg::Document;

use crate::composition::Composition;

/// Raised when geometry has no extent to arrange.
#[derive(Debug)]
pub enum SvgCreationError {
    UndefinedViewBox,
}

impl std::error::Error for SvgCreationError {}

impl std::fmt::Display for SvgCreationError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            SvgCreationError::UndefinedViewBox => {
                write!(f, "Empty/Invalid/Dimensionless geometry")
            }
        }
    }
}

/// An arrangement is a plan for transformation of an SVG.
///
/// The bool on Center/FitCenter flips the y axis: SVG puts 0,0 top left,
/// whereas plotter coordinates usually put it bottom left.
pub enum Arrangement {
    Center(Rect<f64>, bool),
    FitCenter(Rect<f64>, bool),
    FitCenterMargin(f64, Rect<f64>, bool),
    Transform(Rect<f64>, Affine2<f64>),
}

impl Arrangement {
    /// Identity arrangement over the given window.
    pub fn unit(window: &Rect<f64>) -> Arrangement {
        Arrangement::Transform(
            *window,
            Affine2::from_matrix_unchecked(Matrix3::<f64>::identity()),
        )
    }

    fn viewbox(&self) -> &Rect<f64> {
        match self {
            Arrangement::Center(viewbox, _)
            | Arrangement::FitCenter(viewbox, _)
            | Arrangement::Transform(viewbox, _)
            | Arrangement::FitCenterMargin(_, viewbox, _) => viewbox,
        }
    }

    /// Empty SVG document scaffold sized to the arrangement's viewbox (mm).
    pub fn create_svg_document(&self) -> Result<Document, SvgCreationError> {
        let viewbox = self.viewbox();
        Ok(Document::new()
            .set(
                "viewBox",
                (
                    viewbox.min().x,
                    viewbox.min().y,
                    viewbox.max().x,
                    viewbox.max().y,
                ),
            )
            .set("width", format!("{}mm", viewbox.width()))
            .set("height", format!("{}mm", viewbox.height())))
    }

    fn flip_matrix(bounds: &Rect<f64>) -> Affine2<f64> {
        Affine2::from_matrix_unchecked(Matrix3::<f64>::new(
            1.0,
            0.0,
            0.0,
            0.0,
            -1.0,
            bounds.height(),
            0.0,
            0.0,
            1.0,
        ))
    }

    fn fit(gbox: &Rect<f64>, bounds: &Rect<f64>, margin: f64, invert: bool) -> Affine2<f64> {
        let scale = f64::min(
            (bounds.width() - 2.0 * margin) / gbox.width(),
            (bounds.height() - 2.0 * margin) / gbox.height(),
        );
        let bcenter = bounds.min() + (bounds.max() - bounds.min()) / 2.0;
        let gcenter = gbox.center() * scale;
        let delta = bcenter - gcenter;
        let tx = Affine2::from_matrix_unchecked(Matrix3::new(
            scale, 0.0, delta.x, 0.0, scale, delta.y, 0.0, 0.0, 1.0,
        ));
        if invert {
            Self::flip_matrix(bounds) * tx
        } else {
            tx
        }
    }

    /// The affine that maps the given geometry bounds into this arrangement.
    pub fn transformation(&self, gbox: &Rect<f64>) -> Affine2<f64> {
        match self {
            Arrangement::Transform(_viewbox, affine) => *affine,
            Arrangement::Center(bounds, invert) => {
                let bcenter = bounds.min() + (bounds.max() - bounds.min()) / 2.0;
                let gcenter = gbox.min() + (gbox.max() - gbox.min()) / 2.0;
                let delta = bcenter - gcenter;
                let tx = Affine2::from_matrix_unchecked(Matrix3::new(
                    1.0, 0.0, delta.x, 0.0, 1.0, delta.y, 0.0, 0.0, 1.0,
                ));
                if *invert {
                    Self::flip_matrix(bounds) * tx
                } else {
                    tx
                }
            }
            Arrangement::FitCenter(bounds, invert) => Self::fit(gbox, bounds, 0.0, *invert),
            Arrangement::FitCenterMargin(margin, bounds, invert) => {
                Self::fit(gbox, bounds, *margin, *invert)
            }
        }
    }
}

pub trait ToSvg {
    /// Given an [Arrangement] as a transformation strategy, transform the
    /// geometry to fit the bounds.
    fn arrange(&self, arrangement: &Arrangement) -> Result<Self, SvgCreationError>
    where
        Self: Sized;

    /// Convert the geometry into an SVG PathData item.
    fn to_path_data(&self) -> Data;

    /// Convert the geometry into an SVG Path, using the arrangement to
    /// Center/Fit/Transform it. Falls back to an empty path on degenerate
    /// geometry.
    fn to_path(&self, arrangement: &Arrangement) -> Path
    where
        Self: Sized,
    {
        match self.arrange(arrangement) {
            Ok(arranged) => Path::new().set("d", arranged.to_path_data()),
            Err(_) => Path::new().set("d", ""),
        }
    }
}

impl ToSvg for MultiLineString<f64> {
    fn arrange(&self, arrangement: &Arrangement) -> Result<Self, SvgCreationError> {
        let gbox = match self.bounding_rect() {
            Some(gbox) => gbox,
            None => return Err(SvgCreationError::UndefinedViewBox),
        };
        let transformation = arrangement.transformation(&gbox);
        let linestrings: Vec<LineString<f64>> = self
            .iter()
            .map(|linestring| {
                linestring
                    .coords()
                    .map(|coord| {
                        let pt = transformation * NPoint2::new(coord.x, coord.y);
                        Coord::from((pt.x, pt.y))
                    })
                    .collect()
            })
            .collect();
        Ok(MultiLineString::new(linestrings))
    }

    fn to_path_data(&self) -> Data {
        let mut svg_data = Data::new();
        for tline in self {
            for point in tline.points().take(1) {
                svg_data = svg_data.move_to((point.x(), point.y()));
            }
            for point in tline.points().skip(1) {
                svg_data = svg_data.line_to((point.x(), point.y()));
            }
        }
        svg_data
    }
}

impl ToSvg for Composition {
    fn arrange(&self, arrangement: &Arrangement) -> Result<Self, SvgCreationError> {
        let mls = self.to_multi_line_string().arrange(arrangement)?;
        Ok(Composition::new(
            mls.iter()
                .map(|linestring| geo_types::Line::new(linestring.0[0], linestring.0[1]))
                .collect(),
        ))
    }

    fn to_path_data(&self) -> Data {
        self.to_multi_line_string().to_path_data()
    }
}
