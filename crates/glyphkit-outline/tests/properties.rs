//! Property tests for contour extraction

use glyphkit_outline::{extract, reconstruct, vertex, PathCommand, Vertex};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Vertex> {
    (-1000.0f32..1000.0, -1000.0f32..1000.0).prop_map(|(x, y)| vertex(x, y))
}

#[derive(Debug, Clone)]
enum Segment {
    Line(Vertex),
    Quad(Vertex, Vertex),
}

fn segment() -> impl Strategy<Value = Segment> {
    prop_oneof![
        point().prop_map(Segment::Line),
        (point(), point()).prop_map(|(c, p)| Segment::Quad(c, p)),
    ]
}

fn contour() -> impl Strategy<Value = (Vertex, Vec<Segment>)> {
    (point(), prop::collection::vec(segment(), 0..12))
}

fn to_commands(contours: &[(Vertex, Vec<Segment>)]) -> Vec<PathCommand> {
    let mut commands = Vec::new();
    for (start, segments) in contours {
        commands.push(PathCommand::MoveTo(*start));
        for seg in segments {
            commands.push(match seg {
                Segment::Line(p) => PathCommand::LineTo(*p),
                Segment::Quad(c, p) => PathCommand::QuadTo(*c, *p),
            });
        }
        commands.push(PathCommand::Close);
    }
    commands
}

proptest! {
    #[test]
    fn prop_contours_have_odd_length(contours in prop::collection::vec(contour(), 0..6)) {
        let set = extract(&to_commands(&contours)).unwrap();
        prop_assert_eq!(set.contours().len(), contours.len());
        for c in set.contours() {
            prop_assert_eq!(c.len() % 2, 1);
        }
    }

    #[test]
    fn prop_lines_get_midpoints_and_duplicated_corners(
        start in point(),
        ends in prop::collection::vec(point(), 1..10),
    ) {
        let mut commands = vec![PathCommand::MoveTo(start)];
        commands.extend(ends.iter().map(|p| PathCommand::LineTo(*p)));
        commands.push(PathCommand::Close);

        let set = extract(&commands).unwrap();
        let contour = &set.contours()[0];
        let v = set.vertices();

        let mut anchor = start;
        for (k, end) in ends.iter().enumerate() {
            let mid_index = contour[1 + 2 * k];
            let end_index = contour[2 + 2 * k];
            let mid = v[mid_index];
            prop_assert!((mid.x - (anchor.x + end.x) / 2.0).abs() <= 1e-3);
            prop_assert!((mid.y - (anchor.y + end.y) / 2.0).abs() <= 1e-3);
            prop_assert_eq!(v[end_index], *end);
            prop_assert_ne!(mid_index, end_index);
            anchor = *end;
        }
    }

    #[test]
    fn prop_reconstruct_is_pure(contours in prop::collection::vec(contour(), 0..6)) {
        let set = extract(&to_commands(&contours)).unwrap();
        let a = reconstruct(set.vertices(), set.contours()).unwrap();
        let b = reconstruct(set.vertices(), set.contours()).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_every_segment_survives(contours in prop::collection::vec(contour(), 0..6)) {
        let set = extract(&to_commands(&contours)).unwrap();
        let path = reconstruct(set.vertices(), set.contours()).unwrap();
        let expected: usize = contours.iter().map(|(_, s)| s.len()).sum();
        let non_empty = contours.iter().filter(|(_, s)| !s.is_empty()).count();
        prop_assert_eq!(path.segment_count(), expected);
        prop_assert_eq!(path.len(), non_empty);
    }
}
