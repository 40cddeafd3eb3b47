//! Grouping of consecutive segments that share a command category.

use gcodesvg_core::{Segment, SegmentKind};
use std::slice::ChunkBy;

/// A maximal block of consecutive segments with the same kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Run<'a> {
    pub kind: SegmentKind,
    pub segments: &'a [Segment],
}

impl<'a> Run<'a> {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

fn same_kind(a: &Segment, b: &Segment) -> bool {
    a.kind() == b.kind()
}

/// Iterator over the runs of a segment slice, in order.
pub struct Runs<'a> {
    chunks: ChunkBy<'a, Segment, fn(&Segment, &Segment) -> bool>,
}

impl<'a> Runs<'a> {
    pub fn new(segments: &'a [Segment]) -> Self {
        Self {
            chunks: segments.chunk_by(same_kind as fn(&Segment, &Segment) -> bool),
        }
    }
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        // chunk_by never yields an empty slice
        self.chunks.next().map(|segments| Run {
            kind: segments[0].kind(),
            segments,
        })
    }
}

/// Split segments into runs.
///
/// Concatenating the runs gives back the input unchanged. Runs are never
/// empty and neighbouring runs always differ in kind; blocks of the same
/// kind separated by another kind stay separate.
pub fn split_runs(segments: &[Segment]) -> Vec<Run<'_>> {
    Runs::new(segments).collect()
}
