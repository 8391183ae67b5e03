use geo_types::MultiPolygon;
use shapefile::dbase::FieldValue;
use shapefile::Shape;

/// Convert a shapefile shape into a planar multipolygon.
///
/// Returns `None` for non-areal shapes (points, lines, null shapes).
pub fn shape_to_multipolygon(shape: Shape) -> Option<MultiPolygon<f64>> {
    match shape {
        Shape::Polygon(polygon) => Some(polygon.into()),
        Shape::PolygonM(polygon) => Some(polygon.into()),
        Shape::PolygonZ(polygon) => Some(polygon.into()),
        _ => None,
    }
}

/// Render a dBASE attribute as a lookup key.
///
/// Character values are trimmed. Numeric values holding a whole number are
/// written without a fractional part, so a `PRUID` stored as `24.0` keys as
/// `"24"`. Null values and non-scalar types yield `None`.
pub fn field_to_string(value: &FieldValue) -> Option<String> {
    match value {
        FieldValue::Character(Some(s)) => Some(s.trim().to_string()),
        FieldValue::Numeric(Some(n)) => Some(number_to_key(*n)),
        FieldValue::Float(Some(n)) => Some(number_to_key(f64::from(*n))),
        FieldValue::Double(n) => Some(number_to_key(*n)),
        FieldValue::Integer(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number_to_key(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Contains, Point};
    use shapefile::{Polygon, PolygonRing};

    fn square(min: f64, max: f64) -> Polygon {
        Polygon::new(PolygonRing::Outer(vec![
            shapefile::Point::new(min, min),
            shapefile::Point::new(min, max),
            shapefile::Point::new(max, max),
            shapefile::Point::new(max, min),
            shapefile::Point::new(min, min),
        ]))
    }

    #[test]
    fn test_polygon_shape_converts() {
        let geometry = shape_to_multipolygon(Shape::Polygon(square(0.0, 10.0))).unwrap();
        assert!(geometry.contains(&Point::new(5.0, 5.0)));
        assert!(!geometry.contains(&Point::new(15.0, 5.0)));
    }

    #[test]
    fn test_null_shape_has_no_geometry() {
        assert!(shape_to_multipolygon(Shape::NullShape).is_none());
        assert!(shape_to_multipolygon(Shape::Point(shapefile::Point::new(1.0, 2.0))).is_none());
    }

    #[test]
    fn test_character_field_trimmed() {
        let value = FieldValue::Character(Some("08  ".to_string()));
        assert_eq!(field_to_string(&value), Some("08".to_string()));
    }

    #[test]
    fn test_numeric_field_integral() {
        assert_eq!(
            field_to_string(&FieldValue::Numeric(Some(24.0))),
            Some("24".to_string())
        );
        assert_eq!(
            field_to_string(&FieldValue::Numeric(Some(2.5))),
            Some("2.5".to_string())
        );
        assert_eq!(
            field_to_string(&FieldValue::Integer(59)),
            Some("59".to_string())
        );
    }

    #[test]
    fn test_null_field() {
        assert_eq!(field_to_string(&FieldValue::Character(None)), None);
        assert_eq!(field_to_string(&FieldValue::Numeric(None)), None);
        assert_eq!(field_to_string(&FieldValue::Logical(Some(true))), None);
    }
}
