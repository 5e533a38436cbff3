//! Hull state machine, polygon/polyhedron validation and edge bookkeeping.

use std::collections::HashSet;

use super::*;
use crate::error::GeomError;
use crate::geom3::Vector3;
use crate::rational::Rational;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn v(x: i64, y: i64, z: i64) -> Vertex3 {
    Vertex3::new(x, y, z)
}

fn q(n: i64, d: i64) -> Rational {
    Rational::new(n, d).unwrap()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn tetra() -> Vec<Vertex3> {
    vec![v(0, 0, 0), v(1, 0, 0), v(0, 1, 0), v(0, 0, 1)]
}

fn cube() -> Vec<Vertex3> {
    let mut pts = Vec::new();
    for x in 0..2 {
        for y in 0..2 {
            for z in 0..2 {
                pts.push(v(x, y, z));
            }
        }
    }
    pts
}

fn solid(hull: &ConvexHull) -> &Polyhedron {
    match hull {
        ConvexHull::Polyhedron(p) => p,
        other => panic!("expected a polyhedron, got {other:?}"),
    }
}

fn vertex_set(hull: &ConvexHull) -> HashSet<Vertex3> {
    hull.vertices().into_iter().collect()
}

fn random_points(rng: &mut StdRng, n: usize, r: i64) -> Vec<Vertex3> {
    (0..n)
        .map(|_| v(rng.gen_range(-r..=r), rng.gen_range(-r..=r), rng.gen_range(-r..=r)))
        .collect()
}

#[test]
fn dual_set_shares_slot_with_reverse() {
    let mut set = DualIndexedSet::new(|e: &(i32, i32)| (e.1, e.0));
    assert!(set.is_empty());
    assert_eq!(set.ensure_added((1, 2)), (0, true));
    assert_eq!(set.ensure_added((2, 3)), (1, true));
    assert_eq!(set.ensure_added((1, 2)), (0, false));
    assert_eq!(set.ensure_added((3, 2)), (!1, false));
    assert_eq!(set.len(), 2);
    assert_eq!(set.index_of(&(2, 1)), Some(!0));
    assert_eq!(set.index_of(&(7, 8)), None);
    assert!(set.contains(&(3, 2)) && !set.contains(&(1, 3)));
    assert_eq!(set.get(!1), Some((3, 2)));
    assert_eq!(set.get(1), Some((2, 3)));
    assert_eq!(set.get(5), None);
    assert_eq!(set.iter().copied().collect::<Vec<_>>(), vec![(1, 2), (2, 3)]);
}

#[test]
fn early_states() {
    let h = ConvexHull::default();
    assert_eq!(h.dimension(), None);
    assert_eq!(h.point_status(&v(0, 0, 0)), PointStatus::Outside);
    let h = h.add(&v(1, 2, 3)).unwrap();
    assert_eq!(h, ConvexHull::SinglePoint(v(1, 2, 3)));
    assert_eq!(h.add(&v(1, 2, 3)).unwrap(), h);
    assert_eq!(h.point_status(&v(1, 2, 3)), PointStatus::OnCorner);
    let h = h.add(&v(0, 0, 0)).unwrap();
    assert_eq!(h, ConvexHull::LineSegment(v(1, 2, 3), v(0, 0, 0)));
    assert_eq!(h.dimension(), Some(1));
}

#[test]
fn collinear_points_stay_a_segment() {
    let h = ConvexHull::from_points(&[v(0, 0, 0), v(1, 1, 1), v(3, 3, 3)]).unwrap();
    assert_eq!(h, ConvexHull::LineSegment(v(0, 0, 0), v(3, 3, 3)));
    let h = h.add(&v(-1, -1, -1)).unwrap();
    assert_eq!(h, ConvexHull::LineSegment(v(-1, -1, -1), v(3, 3, 3)));
    assert_eq!(h.add(&v(2, 2, 2)).unwrap(), h);
    assert_eq!(h.point_status(&v(1, 1, 1)), PointStatus::OnEdge);
    assert_eq!(h.point_status(&v(4, 4, 4)), PointStatus::Outside);
    assert_eq!(h.point_status(&v(1, 1, 0)), PointStatus::Outside);
}

#[test]
fn square_grows_by_splicing() {
    let h = ConvexHull::from_points(&[v(0, 0, 0), v(1, 0, 0), v(1, 1, 0), v(0, 1, 0)]).unwrap();
    let ConvexHull::Polygon(p) = &h else {
        panic!("expected a polygon, got {h:?}");
    };
    assert_eq!(p.len(), 4);
    assert_eq!(p.point_status(&v(0, 1, 0)), PointStatus::OnCorner);
    assert_eq!(
        p.point_status(&Vertex3::new(q(1, 2), 0, 0)),
        PointStatus::OnEdge
    );
    assert_eq!(
        p.point_status(&Vertex3::new(q(1, 2), q(1, 3), 0)),
        PointStatus::OnFace
    );
    assert_eq!(p.point_status(&v(2, 0, 0)), PointStatus::Outside);
    assert_eq!(
        p.point_status(&Vertex3::new(q(1, 2), q(1, 2), 1)),
        PointStatus::Outside
    );

    let inner = h.add(&Vertex3::new(q(1, 2), q(1, 2), 0)).unwrap();
    assert_eq!(inner, h);

    let grown = h.add(&v(2, 0, 0)).unwrap();
    let expected: HashSet<_> = [v(0, 0, 0), v(2, 0, 0), v(1, 1, 0), v(0, 1, 0)].into();
    assert_eq!(vertex_set(&grown), expected);
    assert_eq!(grown.point_status(&v(1, 0, 0)), PointStatus::OnEdge);
}

#[test]
fn tetrahedron_is_closed_manifold() {
    init_tracing();
    let h = ConvexHull::from_points(&tetra()).unwrap();
    let p = solid(&h);
    assert_eq!(p.faces().len(), 4);
    assert_eq!(p.edge_count(), 6);
    assert!(p.faces().iter().all(|f| f.len() == 3));

    let mut owner = std::collections::HashMap::new();
    for (fi, f) in p.faces().iter().enumerate() {
        for e in f.edges() {
            let key = (e.start().clone(), e.end().clone());
            assert!(owner.insert(key, fi).is_none(), "directed edge used twice");
        }
    }
    assert_eq!(owner.len(), 12);
    for ((a, b), fi) in &owner {
        let back = owner[&(b.clone(), a.clone())];
        assert_ne!(back, *fi);
    }
}

#[test]
fn tetrahedron_point_status() {
    let h = ConvexHull::from_points(&tetra()).unwrap();
    assert_eq!(h.dimension(), Some(3));
    assert_eq!(h.point_status(&v(0, 0, 1)), PointStatus::OnCorner);
    assert_eq!(h.point_status(&Vertex3::new(q(1, 2), 0, 0)), PointStatus::OnEdge);
    assert_eq!(
        h.point_status(&Vertex3::new(q(1, 4), q(1, 4), 0)),
        PointStatus::OnFace
    );
    assert_eq!(
        h.point_status(&Vertex3::new(q(1, 3), q(1, 3), q(1, 3))),
        PointStatus::OnFace
    );
    assert_eq!(
        h.point_status(&Vertex3::new(q(1, 8), q(1, 8), q(1, 8))),
        PointStatus::Inside
    );
    assert_eq!(h.point_status(&v(1, 1, 1)), PointStatus::Outside);
    assert_eq!(h.point_status(&v(-1, 0, 0)), PointStatus::Outside);
}

#[test]
fn interior_point_is_a_no_op() {
    let h = ConvexHull::from_points(&tetra()).unwrap();
    let centroid = Vertex3::new(q(1, 4), q(1, 4), q(1, 4));
    assert_eq!(h.point_status(&centroid), PointStatus::Inside);
    let h2 = h.add(&centroid).unwrap();
    assert_eq!(h2, h);
    for p in tetra() {
        assert_eq!(h2.point_status(&p), h.point_status(&p));
    }
}

#[test]
fn cube_faces_merge_into_squares() {
    init_tracing();
    let h = ConvexHull::from_points(&cube()).unwrap();
    let p = solid(&h);
    assert_eq!(p.faces().len(), 6);
    assert!(p.faces().iter().all(|f| f.len() == 4));
    assert_eq!(p.edge_count(), 12);
    assert_eq!(p.vertices().len(), 8);
    let mid = Vertex3::new(q(1, 2), q(1, 2), q(1, 2));
    assert_eq!(h.point_status(&mid), PointStatus::Inside);
    assert_eq!(
        h.point_status(&Vertex3::new(q(1, 2), q(1, 2), 1)),
        PointStatus::OnFace
    );
}

#[test]
fn point_collinear_with_an_edge_drops_the_old_corner() {
    let h = ConvexHull::from_points(&tetra()).unwrap();
    let h = h.add(&v(2, 0, 0)).unwrap();
    let expected: HashSet<_> = [v(0, 0, 0), v(2, 0, 0), v(0, 1, 0), v(0, 0, 1)].into();
    assert_eq!(vertex_set(&h), expected);
    assert_eq!(h.point_status(&v(1, 0, 0)), PointStatus::OnEdge);
    assert_eq!(solid(&h).faces().len(), 4);
}

#[test]
fn polygon_validation() {
    assert!(matches!(
        Polygon::new(vec![v(0, 0, 0), v(1, 0, 0)]),
        Err(GeomError::InvalidGeometry { .. })
    ));
    assert!(matches!(
        Polygon::new(vec![v(0, 0, 0), v(1, 0, 0), v(2, 0, 0)]),
        Err(GeomError::InvalidGeometry { .. })
    ));
    // Self-intersecting ring.
    assert!(matches!(
        Polygon::new(vec![v(0, 0, 0), v(1, 0, 0), v(0, 1, 0), v(1, 1, 0)]),
        Err(GeomError::InvalidGeometry { .. })
    ));
    assert!(matches!(
        Polygon::new(vec![v(0, 0, 0), v(1, 0, 0), v(1, 1, 0), v(0, 1, 1)]),
        Err(GeomError::InvalidGeometry { .. })
    ));
    // Middle vertex on an edge.
    assert!(matches!(
        Polygon::new(vec![v(0, 0, 0), v(1, 0, 0), v(2, 0, 0), v(0, 1, 0)]),
        Err(GeomError::InvalidGeometry { .. })
    ));
}

#[test]
fn polygon_flip_and_edges() {
    let p = Polygon::new(vec![v(0, 0, 0), v(1, 0, 0), v(0, 1, 0)]).unwrap();
    assert_eq!(p.normal(), &Vector3::new(0, 0, 1));
    let f = p.flip().unwrap();
    assert_eq!(f.normal(), &Vector3::new(0, 0, -1));
    assert_eq!(p.flip_to_include(&v(0, 0, -1)).unwrap(), p);
    assert_eq!(p.flip_to_include(&v(0, 0, 1)).unwrap(), f);
    assert_eq!(p.flip_to_include(&v(5, 5, 0)), Err(GeomError::Coplanar));

    let edges: Vec<_> = p.edges().collect();
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[2].start(), &v(0, 1, 0));
    assert_eq!(edges[2].end(), &v(0, 0, 0));
    assert_eq!(edges[2].beyond(), &v(1, 0, 0));
    for e in &edges {
        assert!(e.plane().includes(e.beyond()));
        assert!(e.plane().contains(e.start()) && e.plane().contains(e.end()));
        assert!(e.line().contains(e.end()));
    }
}

#[test]
fn polyhedron_validation() {
    let h = ConvexHull::from_points(&tetra()).unwrap();
    let faces: Vec<Polygon> = solid(&h).faces().iter().map(|f| (**f).clone()).collect();
    assert_eq!(&Polyhedron::new(faces.clone()).unwrap(), solid(&h));

    let open = Polyhedron::new(faces[..3].to_vec());
    assert!(matches!(open, Err(GeomError::InvalidGeometry { .. })));

    let tri = Polygon::new(vec![v(0, 0, 0), v(1, 0, 0), v(0, 1, 0)]).unwrap();
    let pillow = Polyhedron::new(vec![tri.clone(), tri.flip().unwrap()]);
    assert!(matches!(pillow, Err(GeomError::InvalidGeometry { .. })));

    let twice = Polyhedron::new(vec![tri.clone(), tri]);
    assert!(matches!(twice, Err(GeomError::InvalidGeometry { .. })));
}

#[test]
fn added_points_never_fall_outside() {
    init_tracing();
    for seed in 0..6u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let pts = random_points(&mut rng, 24, 3);
        let mut hull = ConvexHull::Empty;
        for (i, p) in pts.iter().enumerate() {
            hull = hull.add(p).unwrap();
            for seen in &pts[..=i] {
                assert_ne!(
                    hull.point_status(seen),
                    PointStatus::Outside,
                    "seed {seed}, after {i} points"
                );
            }
        }
    }
}

#[test]
fn insertion_order_does_not_matter() {
    let mut rng = StdRng::seed_from_u64(7);
    let pts = random_points(&mut rng, 20, 4);
    let base = ConvexHull::from_points(&pts).unwrap();
    let statuses: Vec<_> = pts.iter().map(|p| base.point_status(p)).collect();
    for _ in 0..4 {
        let mut shuffled = pts.clone();
        shuffled.shuffle(&mut rng);
        let other = ConvexHull::from_points(&shuffled).unwrap();
        assert_eq!(vertex_set(&other), vertex_set(&base));
        let again: Vec<_> = pts.iter().map(|p| other.point_status(p)).collect();
        assert_eq!(again, statuses);
    }
}
