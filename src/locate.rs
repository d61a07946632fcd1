use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use itertools::{FoldWhile, Itertools};
use tracing::{debug, instrument, trace};

use crate::error::Error;
use crate::tree::Node;

// bytes of the target matched so far -> index of the latest leaf a run covering that many bytes began on
type Partials = BTreeMap<usize, usize>;

#[derive(Debug)]
enum Tracker {
    Idle,
    Tracking(Partials),
    // leaf indices, inclusive; a single leaf means that leaf contains the whole target
    Matched(RangeInclusive<usize>),
}

impl Tracker {
    fn is_final(&self) -> bool {
        matches!(self, Tracker::Matched(span) if span.start() == span.end())
    }

    fn advance(self, index: usize, text: &str, target: &str) -> Self {
        if self.is_final() {
            return self;
        }

        // a leaf holding the whole target beats any run across leaves, finished or not
        if text.contains(target) {
            return Tracker::Matched(index..=index);
        }

        match self {
            Tracker::Matched(span) => Tracker::Matched(span),
            Tracker::Idle => Self::start(index, text, target, Partials::new()),
            // empty leaves sit inside a run without moving it along
            Tracker::Tracking(partials) if text.is_empty() => Tracker::Tracking(partials),
            Tracker::Tracking(partials) => {
                let mut continued = Partials::new();
                let mut completed: Option<usize> = None;

                for (&matched, &start) in &partials {
                    for offset in boundary_offsets(target, matched) {
                        let rest = &target[offset..];
                        if text.starts_with(rest) {
                            // several runs may end here; the one starting latest spans the fewest leaves
                            completed = completed.max(Some(start));
                        } else if rest.starts_with(text) {
                            keep(&mut continued, offset + text.len(), start);
                        }
                    }
                }

                match completed {
                    Some(start) => Tracker::Matched(start..=index),
                    // runs that did not survive this leaf are dropped, and the leaf may begin a fresh one
                    None => Self::start(index, text, target, continued),
                }
            }
        }
    }

    /// Begin a run on every non-empty suffix of `text` that is a proper prefix of `target`.
    ///
    /// Anything else in the leaf, such as the tail of the target without its head, cannot begin a run.
    fn start(index: usize, text: &str, target: &str, mut partials: Partials) -> Self {
        for (offset, _) in text.char_indices() {
            let suffix = &text[offset..];
            if suffix.len() < target.len() && target.starts_with(suffix) {
                keep(&mut partials, suffix.len(), index);
            }
        }

        if partials.is_empty() {
            Tracker::Idle
        } else {
            Tracker::Tracking(partials)
        }
    }
}

fn keep(partials: &mut Partials, matched: usize, start: usize) {
    let latest = partials.entry(matched).or_insert(start);
    *latest = (*latest).max(start);
}

/// Where matching may resume in `target` after a leaf boundary, given `matched` bytes so far.
///
/// Text continues directly across the boundary, or the boundary stands in for one whitespace character,
/// as long as that character is not the last of the target.
fn boundary_offsets(target: &str, matched: usize) -> impl Iterator<Item = usize> {
    let skipped = target[matched..].chars().next()
        .filter(|c| c.is_whitespace())
        .map(|c| matched + c.len_utf8())
        .filter(|offset| *offset < target.len());

    std::iter::once(matched).chain(skipped)
}

/// Find the leaves of `root` whose text, read in document order, holds `target`.
///
/// If a single leaf contains `target`, the first such leaf is the whole answer.
/// Otherwise the result is the shortest run of consecutive leaves that spells out `target`, ending at the
/// earliest leaf where any such run completes. The run begins on a suffix of its first leaf and ends on a
/// prefix of its last; every leaf in between contributes all of its text. A boundary between two leaves
/// may stand in for a single whitespace character of `target`, so `"is very"` followed by `"funny"` holds
/// `"very funny"`.
///
/// Returns an empty [`Vec`] if there is no such run, and [`Error::EmptyTarget`] if `target` is empty.
#[instrument(level = "trace", skip(root))]
pub fn locate<'a>(root: &'a Node, target: &str) -> Result<Vec<&'a Node>, Error> {
    if target.is_empty() {
        return Err(Error::EmptyTarget);
    }

    let leaves = root.leaves().collect_vec();
    let tracker = leaves.iter()
        .enumerate()
        .fold_while(Tracker::Idle, |tracker, (index, leaf)| {
            let next = tracker.advance(index, leaf.text(), target);
            trace!(index, text = leaf.text(), state = ?next, "advanced");

            if next.is_final() {
                FoldWhile::Done(next)
            } else {
                FoldWhile::Continue(next)
            }
        })
        .into_inner();

    match tracker {
        Tracker::Matched(span) => {
            debug!(first = span.start(), last = span.end(), "located target");
            Ok(leaves[span].to_vec())
        }
        _ => {
            debug!(leaves = leaves.len(), "target not found");
            Ok(Vec::new())
        }
    }
}
