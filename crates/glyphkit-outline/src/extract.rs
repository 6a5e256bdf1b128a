//! # Contour Extraction
//!
//! Walks a raw glyph command stream once and produces an indexed vertex
//! buffer plus one index array per closed contour. Every segment is stored
//! as a `(control, anchor)` pair after the contour's leading anchor:
//!
//! - straight edges get a synthetic control point at their exact midpoint,
//!   which makes them degenerate quadratics, and their end point is stored
//!   as its own vertex so corners stay sharp under later deformation
//! - quadratic curves are kept as they are
//! - cubic curves are approximated by quadratics or dropped, depending on
//!   [`CubicPolicy`]
//!
//! Vertex indices are global across all contours of one outline.

use glyphkit_core::{
    vertex, CubicPolicy, OutlineConfig, OutlineError, PathCommand, Result, Vertex,
};
use lyon::geom::CubicBezierSegment;
use std::ops::Deref;
use tracing::{debug, warn};

/// Index array describing one closed contour.
///
/// Holds a leading anchor index followed by `(control, anchor)` pairs, so a
/// contour produced by extraction always has odd length.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contour(Box<[usize]>);

impl Contour {
    pub fn new(indices: Vec<usize>) -> Self {
        Self(indices.into_boxed_slice())
    }

    /// Number of quadratic segments this contour describes.
    pub fn segment_count(&self) -> usize {
        self.0.len().saturating_sub(1) / 2
    }
}

impl Deref for Contour {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl From<Vec<usize>> for Contour {
    fn from(indices: Vec<usize>) -> Self {
        Self::new(indices)
    }
}

/// Vertex buffer shared by all contours of a word, plus the contours.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContourSet {
    vertices: Vec<Vertex>,
    contours: Vec<Contour>,
}

impl ContourSet {
    pub fn new(vertices: Vec<Vertex>, contours: Vec<Contour>) -> Self {
        Self { vertices, contours }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() && self.contours.is_empty()
    }
}

/// Knobs for a single extraction run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractOptions {
    pub cubic_policy: CubicPolicy,
    /// Maximum deviation when approximating a cubic with quadratics
    pub cubic_tolerance: f32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self::from(&OutlineConfig::default())
    }
}

impl From<&OutlineConfig> for ExtractOptions {
    fn from(config: &OutlineConfig) -> Self {
        Self {
            cubic_policy: config.cubic_policy,
            cubic_tolerance: config.cubic_tolerance,
        }
    }
}

/// Counters collected while extracting one command stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExtractStats {
    pub commands: usize,
    pub contours: usize,
    /// Straight edges rewritten as degenerate quadratics
    pub lines: usize,
    pub quads: usize,
    pub cubics_approximated: usize,
    pub cubics_dropped: usize,
}

/// Single-pass builder turning path commands into a [`ContourSet`].
#[derive(Debug)]
pub struct ContourExtractor {
    options: ExtractOptions,
    vertices: Vec<Vertex>,
    contours: Vec<Contour>,
    current: Option<Vec<usize>>,
    last_anchor: Vertex,
    stats: ExtractStats,
}

impl ContourExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            vertices: Vec::new(),
            contours: Vec::new(),
            current: None,
            last_anchor: vertex(0.0, 0.0),
            stats: ExtractStats::default(),
        }
    }

    /// Consume one command. `index` is its position in the stream and is
    /// only used for error reporting.
    pub fn feed(&mut self, index: usize, command: PathCommand) -> Result<()> {
        self.stats.commands += 1;
        match command {
            PathCommand::MoveTo(p) => {
                self.finish_contour();
                self.vertices.push(p);
                self.current = Some(vec![self.vertices.len() - 1]);
                self.last_anchor = p;
            }
            PathCommand::LineTo(p) => {
                let a = self.last_anchor;
                let mid = vertex((a.x + p.x) / 2.0, (a.y + p.y) / 2.0);
                self.push_segment(index, &command, mid, p)?;
                self.stats.lines += 1;
            }
            PathCommand::QuadTo(ctrl, p) => {
                self.push_segment(index, &command, ctrl, p)?;
                self.stats.quads += 1;
            }
            PathCommand::CubicTo(ctrl1, ctrl2, p) => {
                self.push_cubic(index, &command, ctrl1, ctrl2, p)?;
            }
            PathCommand::Close => {
                if !self.finish_contour() {
                    debug!("Ignoring Close at command {} with no open contour", index);
                }
            }
        }
        Ok(())
    }

    /// Finalize any open contour and return the buffers.
    pub fn finish(mut self) -> (ContourSet, ExtractStats) {
        if self.current.is_some() {
            debug!("Closing unterminated contour at end of outline");
            self.finish_contour();
        }
        (ContourSet::new(self.vertices, self.contours), self.stats)
    }

    fn finish_contour(&mut self) -> bool {
        match self.current.take() {
            Some(indices) => {
                self.contours.push(Contour::new(indices));
                self.stats.contours += 1;
                true
            }
            None => false,
        }
    }

    fn push_segment(
        &mut self,
        index: usize,
        command: &PathCommand,
        ctrl: Vertex,
        to: Vertex,
    ) -> Result<()> {
        let Some(contour) = self.current.as_mut() else {
            return Err(OutlineError::Malformed {
                index,
                command: command.name(),
            });
        };
        for p in [ctrl, to] {
            contour.push(self.vertices.len());
            self.vertices.push(p);
        }
        self.last_anchor = to;
        Ok(())
    }

    fn push_cubic(
        &mut self,
        index: usize,
        command: &PathCommand,
        ctrl1: Vertex,
        ctrl2: Vertex,
        to: Vertex,
    ) -> Result<()> {
        if self.current.is_none() {
            return Err(OutlineError::Malformed {
                index,
                command: command.name(),
            });
        }
        match self.options.cubic_policy {
            CubicPolicy::Drop => {
                warn!("Dropping cubic segment at command {}", index);
                self.stats.cubics_dropped += 1;
            }
            CubicPolicy::Approximate => {
                let cubic = CubicBezierSegment {
                    from: self.last_anchor,
                    ctrl1,
                    ctrl2,
                    to,
                };
                let mut quads = Vec::new();
                cubic.for_each_quadratic_bezier(self.options.cubic_tolerance, &mut |q| {
                    quads.push((q.ctrl, q.to));
                });
                for (ctrl, anchor) in quads {
                    self.push_segment(index, command, ctrl, anchor)?;
                }
                self.last_anchor = to;
                self.stats.cubics_approximated += 1;
            }
        }
        Ok(())
    }
}

/// Extract contours using the default options.
pub fn extract(commands: &[PathCommand]) -> Result<ContourSet> {
    extract_with(commands, &ExtractOptions::default()).map(|(set, _)| set)
}

/// Extract contours and report what happened along the way.
pub fn extract_with(
    commands: &[PathCommand],
    options: &ExtractOptions,
) -> Result<(ContourSet, ExtractStats)> {
    let mut extractor = ContourExtractor::new(*options);
    for (index, command) in commands.iter().enumerate() {
        extractor.feed(index, *command)?;
    }
    let (set, stats) = extractor.finish();
    debug!(
        "Extracted {} vertices in {} contours ({} lines, {} quads, {} cubics approximated, {} dropped)",
        set.vertices().len(),
        stats.contours,
        stats.lines,
        stats.quads,
        stats.cubics_approximated,
        stats.cubics_dropped
    );
    Ok((set, stats))
}
