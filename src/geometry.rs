//! Whole-geometry reprojection between SVY21 and WGS84
//!
//! Walks a `geo::Geometry` and reprojects every coordinate. Axis convention:
//! `x` = easting/longitude, `y` = northing/latitude.

use geo::{Coord, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};

use crate::{ProjectionError, Svy21};

impl Svy21 {
    /// Reprojects an SVY21 geometry to WGS84 lat/lon degrees
    pub fn geometry_to_lat_lon(&self, geom: &Geometry) -> Result<Geometry, ProjectionError> {
        map_geometry(geom, &|x, y| {
            let (lat, lon) = self.to_lat_lon(y, x);
            (lon, lat)
        })
    }

    /// Reprojects a WGS84 lat/lon geometry to the SVY21 grid
    pub fn geometry_to_svy21(&self, geom: &Geometry) -> Result<Geometry, ProjectionError> {
        map_geometry(geom, &|x, y| {
            let (northing, easting) = self.to_svy21(y, x);
            (easting, northing)
        })
    }
}

fn map_line<F>(ls: &LineString, f: &F) -> LineString
where
    F: Fn(f64, f64) -> (f64, f64),
{
    LineString::new(
        ls.coords()
            .map(|c| {
                let (x, y) = f(c.x, c.y);
                Coord { x, y }
            })
            .collect(),
    )
}

fn map_polygon<F>(poly: &Polygon, f: &F) -> Polygon
where
    F: Fn(f64, f64) -> (f64, f64),
{
    Polygon::new(
        map_line(poly.exterior(), f),
        poly.interiors().iter().map(|ring| map_line(ring, f)).collect(),
    )
}

fn map_geometry<F>(geom: &Geometry, f: &F) -> Result<Geometry, ProjectionError>
where
    F: Fn(f64, f64) -> (f64, f64),
{
    match geom {
        Geometry::Point(p) => {
            let (x, y) = f(p.x(), p.y());
            Ok(Geometry::Point(Point::new(x, y)))
        }
        Geometry::LineString(ls) => Ok(Geometry::LineString(map_line(ls, f))),
        Geometry::Polygon(poly) => Ok(Geometry::Polygon(map_polygon(poly, f))),
        Geometry::MultiPoint(mp) => Ok(Geometry::MultiPoint(MultiPoint::new(
            mp.iter()
                .map(|p| {
                    let (x, y) = f(p.x(), p.y());
                    Point::new(x, y)
                })
                .collect(),
        ))),
        Geometry::MultiLineString(mls) => Ok(Geometry::MultiLineString(MultiLineString::new(
            mls.iter().map(|ls| map_line(ls, f)).collect(),
        ))),
        Geometry::MultiPolygon(mp) => Ok(Geometry::MultiPolygon(MultiPolygon::new(
            mp.iter().map(|poly| map_polygon(poly, f)).collect(),
        ))),
        other => {
            let kind = match other {
                Geometry::Line(_) => "Line",
                Geometry::Rect(_) => "Rect",
                Geometry::Triangle(_) => "Triangle",
                Geometry::GeometryCollection(_) => "GeometryCollection",
                _ => "unknown",
            };
            tracing::warn!("unsupported geometry type for reprojection: {kind}");
            Err(ProjectionError::UnsupportedGeometry(kind))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_to_lat_lon() {
        let proj = Svy21::new();
        let geom = Geometry::Point(Point::new(28001.642, 38744.572));

        let out = proj.geometry_to_lat_lon(&geom).unwrap();
        let Geometry::Point(p) = out else {
            panic!("expected a point back");
        };
        assert!((p.y() - 1.366666).abs() < 1e-10, "lat={}", p.y());
        assert!((p.x() - 103.833333).abs() < 1e-10, "lon={}", p.x());
    }

    #[test]
    fn test_polygon_roundtrip() {
        let proj = Svy21::new();
        let ring = LineString::new(vec![
            Coord { x: 103.83, y: 1.36 },
            Coord { x: 103.85, y: 1.36 },
            Coord { x: 103.85, y: 1.38 },
            Coord { x: 103.83, y: 1.38 },
            Coord { x: 103.83, y: 1.36 },
        ]);
        let geom = Geometry::Polygon(Polygon::new(ring.clone(), vec![]));

        let grid = proj.geometry_to_svy21(&geom).unwrap();
        let back = proj.geometry_to_lat_lon(&grid).unwrap();

        let Geometry::Polygon(poly) = back else {
            panic!("expected a polygon back");
        };
        for (orig, got) in ring.coords().zip(poly.exterior().coords()) {
            assert!((orig.x - got.x).abs() < 1e-9, "lon={}", got.x);
            assert!((orig.y - got.y).abs() < 1e-9, "lat={}", got.y);
        }
    }

    #[test]
    fn test_unsupported_geometry() {
        let proj = Svy21::new();
        let geom = Geometry::Rect(geo::Rect::new(
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 1.0, y: 1.0 },
        ));
        assert!(matches!(
            proj.geometry_to_svy21(&geom),
            Err(ProjectionError::UnsupportedGeometry("Rect"))
        ));
    }
}
