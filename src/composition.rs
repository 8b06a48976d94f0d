use geo::bounding_rect::BoundingRect;
use geo_types::{Line, LineString, MultiLineString, Rect};
use serde::{Deserialize, Serialize};

/// One generated artwork: an ordered list of line segments.
///
/// The order is render order only; nothing downstream depends on it beyond
/// drawing the segments in sequence. A Composition is created fresh by each
/// generator call and fully replaces whatever was on screen before.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Composition(pub Vec<Line<f64>>);

impl Composition {
    pub fn new(segments: Vec<Line<f64>>) -> Self {
        Self(segments)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Line<f64>> {
        self.0.iter()
    }

    /// Bounding rectangle over every endpoint, or None when empty.
    pub fn bounds(&self) -> Option<Rect<f64>> {
        self.to_multi_line_string().bounding_rect()
    }

    /// Convert to a [`MultiLineString`], one two-point LineString per segment.
    /// This is the interchange shape for the SVG and nannou paths.
    pub fn to_multi_line_string(&self) -> MultiLineString<f64> {
        MultiLineString::new(
            self.0
                .iter()
                .map(|line| LineString::new(vec![line.start, line.end]))
                .collect(),
        )
    }
}

impl From<Composition> for MultiLineString<f64> {
    fn from(composition: Composition) -> Self {
        composition.to_multi_line_string()
    }
}

impl IntoIterator for Composition {
    type Item = Line<f64>;
    type IntoIter = std::vec::IntoIter<Line<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Composition {
    type Item = &'a Line<f64>;
    type IntoIter = std::slice::Iter<'a, Line<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo_types::coord;

    #[test]
    fn test_bounds() {
        let composition = Composition::new(vec![
            Line::new(coord! {x: 0.0, y: 0.0}, coord! {x: 10.0, y: 0.0}),
            Line::new(coord! {x: 3.0, y: -5.0}, coord! {x: 7.0, y: 12.0}),
        ]);
        let bounds = composition.bounds().expect("Non-empty bounds");
        assert_eq!(bounds.min(), coord! {x: 0.0, y: -5.0});
        assert_eq!(bounds.max(), coord! {x: 10.0, y: 12.0});
    }

    #[test]
    fn test_empty_bounds() {
        assert!(Composition::default().bounds().is_none());
        assert!(Composition::default().is_empty());
    }

    #[test]
    fn test_to_multi_line_string() {
        let composition = Composition::new(vec![Line::new(
            coord! {x: 1.0, y: 2.0},
            coord! {x: 3.0, y: 4.0},
        )]);
        let mls = composition.to_multi_line_string();
        assert_eq!(mls.0.len(), 1);
        assert_eq!(
            mls.0[0],
            LineString::new(vec![coord! {x: 1.0, y: 2.0}, coord! {x: 3.0, y: 4.0}])
        );
    }
}
