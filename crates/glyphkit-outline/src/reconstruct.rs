//! # Path Reconstruction
//!
//! Rebuilds a closed drawable outline from an indexed vertex buffer. The
//! result contains quadratic segments only: straight edges were already
//! rewritten as degenerate quadratics during extraction.

use glyphkit_core::{OutlineError, Rect, Result, Vertex};
use lyon::path::{Path, PathEvent};
use tracing::trace;

use crate::extract::Contour;

/// One quadratic segment, drawn from the previous anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadSegment {
    pub ctrl: Vertex,
    pub to: Vertex,
}

/// A closed loop: a move-to anchor followed by quadratic segments, with an
/// implicit close back to the start.
#[derive(Debug, Clone, PartialEq)]
pub struct SubPath {
    start: Vertex,
    segments: Vec<QuadSegment>,
}

impl SubPath {
    pub fn start(&self) -> Vertex {
        self.start
    }

    pub fn segments(&self) -> &[QuadSegment] {
        &self.segments
    }

    /// Anchor of the final segment.
    pub fn last_anchor(&self) -> Vertex {
        self.segments.last().map_or(self.start, |s| s.to)
    }
}

/// Ordered closed sub-paths made exclusively of quadratic segments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuadraticPath {
    sub_paths: Vec<SubPath>,
}

impl QuadraticPath {
    pub fn sub_paths(&self) -> &[SubPath] {
        &self.sub_paths
    }

    pub fn len(&self) -> usize {
        self.sub_paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sub_paths.is_empty()
    }

    pub fn segment_count(&self) -> usize {
        self.sub_paths.iter().map(|sp| sp.segments.len()).sum()
    }

    /// Path events in drawing order, each sub-path closed.
    pub fn events(&self) -> impl Iterator<Item = PathEvent> + '_ {
        self.sub_paths.iter().flat_map(|sp| {
            let mut from = sp.start;
            let quads = sp.segments.iter().map(move |s| {
                let event = PathEvent::Quadratic {
                    from,
                    ctrl: s.ctrl,
                    to: s.to,
                };
                from = s.to;
                event
            });
            std::iter::once(PathEvent::Begin { at: sp.start })
                .chain(quads)
                .chain(std::iter::once(PathEvent::End {
                    last: sp.last_anchor(),
                    first: sp.start,
                    close: true,
                }))
        })
    }

    /// Axis-aligned bounds of the curves. An empty path has a zero-sized box.
    pub fn bounds(&self) -> Rect {
        if self.is_empty() {
            return Rect::default();
        }
        Rect::from_box(lyon::algorithms::aabb::bounding_box(self.events()))
    }

    /// Convert to a `lyon` path for tessellation or other `lyon` algorithms.
    pub fn to_lyon_path(&self) -> Path {
        let mut builder = Path::builder();
        for sp in &self.sub_paths {
            builder.begin(sp.start);
            for s in &sp.segments {
                builder.quadratic_bezier_to(s.ctrl, s.to);
            }
            builder.end(true);
        }
        builder.build()
    }
}

/// Rebuild a [`QuadraticPath`] from a vertex buffer and its contours.
///
/// Each contour is read as a leading anchor followed by `(control, anchor)`
/// index pairs. A trailing unpaired index is dropped, and contours that
/// describe no complete segment are skipped.
pub fn reconstruct(vertices: &[Vertex], contours: &[Contour]) -> Result<QuadraticPath> {
    let fetch = |index: usize| {
        vertices
            .get(index)
            .copied()
            .ok_or(OutlineError::IndexOutOfRange {
                index,
                len: vertices.len(),
            })
    };

    let mut sub_paths = Vec::with_capacity(contours.len());
    for (n, contour) in contours.iter().enumerate() {
        if contour.len() < 3 {
            trace!("Skipping contour {} with {} indices", n, contour.len());
            continue;
        }

        let start = fetch(contour[0])?;
        let segments = contour[1..]
            .chunks_exact(2)
            .map(|pair| -> Result<QuadSegment> {
                Ok(QuadSegment {
                    ctrl: fetch(pair[0])?,
                    to: fetch(pair[1])?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        sub_paths.push(SubPath { start, segments });
    }

    Ok(QuadraticPath { sub_paths })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glyphkit_core::vertex;

    fn square_buffers() -> (Vec<Vertex>, Vec<Contour>) {
        let vertices = vec![
            vertex(0.0, 0.0),
            vertex(5.0, 0.0),
            vertex(10.0, 0.0),
            vertex(10.0, 5.0),
            vertex(10.0, 10.0),
        ];
        (vertices, vec![Contour::new(vec![0, 1, 2, 3, 4])])
    }

    #[test]
    fn test_reconstruct_pairs_controls_and_anchors() {
        let (vertices, contours) = square_buffers();
        let path = reconstruct(&vertices, &contours).unwrap();

        assert_eq!(path.len(), 1);
        let sp = &path.sub_paths()[0];
        assert_eq!(sp.start(), vertex(0.0, 0.0));
        assert_eq!(
            sp.segments(),
            &[
                QuadSegment {
                    ctrl: vertex(5.0, 0.0),
                    to: vertex(10.0, 0.0)
                },
                QuadSegment {
                    ctrl: vertex(10.0, 5.0),
                    to: vertex(10.0, 10.0)
                },
            ]
        );
        assert_eq!(sp.last_anchor(), vertex(10.0, 10.0));
    }

    #[test]
    fn test_trailing_unpaired_index_is_dropped() {
        let (vertices, _) = square_buffers();
        let path = reconstruct(&vertices, &[Contour::new(vec![0, 1, 2, 3])]).unwrap();
        assert_eq!(path.segment_count(), 1);
    }

    #[test]
    fn test_degenerate_contours_are_skipped() {
        let (vertices, _) = square_buffers();
        let contours = vec![
            Contour::new(vec![]),
            Contour::new(vec![0]),
            Contour::new(vec![0, 1]),
        ];
        let path = reconstruct(&vertices, &contours).unwrap();
        assert!(path.is_empty());
        assert_eq!(path.bounds(), Rect::default());
    }

    #[test]
    fn test_out_of_range_index_is_an_error() {
        let (vertices, _) = square_buffers();
        let err = reconstruct(&vertices, &[Contour::new(vec![0, 1, 9])]).unwrap_err();
        assert_eq!(err, OutlineError::IndexOutOfRange { index: 9, len: 5 });
    }

    #[test]
    fn test_events_close_every_sub_path() {
        let (vertices, contours) = square_buffers();
        let path = reconstruct(&vertices, &contours).unwrap();
        let events: Vec<_> = path.events().collect();

        assert_eq!(events.len(), 4);
        assert_eq!(events[0], PathEvent::Begin { at: vertex(0.0, 0.0) });
        assert_eq!(
            events[2],
            PathEvent::Quadratic {
                from: vertex(10.0, 0.0),
                ctrl: vertex(10.0, 5.0),
                to: vertex(10.0, 10.0)
            }
        );
        assert_eq!(
            events[3],
            PathEvent::End {
                last: vertex(10.0, 10.0),
                first: vertex(0.0, 0.0),
                close: true
            }
        );
    }

    #[test]
    fn test_bounds_of_degenerate_quads() {
        let (vertices, contours) = square_buffers();
        let path = reconstruct(&vertices, &contours).unwrap();
        let bounds = path.bounds();
        assert!((bounds.x).abs() < 1e-4);
        assert!((bounds.y).abs() < 1e-4);
        assert!((bounds.width - 10.0).abs() < 1e-4);
        assert!((bounds.height - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_lyon_path_has_only_quadratics() {
        let (vertices, contours) = square_buffers();
        let path = reconstruct(&vertices, &contours).unwrap().to_lyon_path();
        for event in path.iter() {
            assert!(!matches!(
                event,
                PathEvent::Line { .. } | PathEvent::Cubic { .. }
            ));
        }
    }
}
