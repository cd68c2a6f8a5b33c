//! Resolution of overlapping markups
//!
//! The sweep keeps pending markups ordered by `(start, priority)` and
//! compares the first one with the one after it. When the next markup
//! starts inside the first, the one with lower priority loses the shared
//! region:
//! - if the next markup wins, the first is split around it. The part
//!   before is final and the part after (if any) goes back into the
//!   pending list at its sorted position.
//! - if the first markup wins, the next one is cut back to start where the
//!   first ends and goes back into the pending list, and the first is
//!   compared again.
//!
//! When the next markup does not start inside the first, the first is
//! final. Nothing pending starts before the next markup, so every emitted
//! span stays final and the result tiles the line.

use std::collections::VecDeque;

use super::markup::Markup;
use super::run::Run;

/// Resolve markups for one line into ordered, non-overlapping spans.
///
/// The markups must include a baseline covering the whole line. At each
/// offset the markup with the highest priority among those covering it
/// wins. Markups with equal `(start, priority)` keep their input order and
/// the later one wins. Empty markups cover nothing and are dropped.
pub fn reflow(markups: impl IntoIterator<Item = Markup>) -> Vec<Markup> {
    let mut sorted: Vec<Markup> = markups.into_iter().filter(|m| !m.run.is_empty()).collect();
    sorted.sort_by_key(Markup::sort_key);

    let mut pending = VecDeque::from(sorted);
    let mut spans = Vec::with_capacity(pending.len());

    while let Some(current) = pending.pop_front() {
        let Some(next) = pending.front().copied() else {
            spans.push(current);
            break;
        };

        if !current.run.is_overlapped_by(&next.run) {
            spans.push(current);
            continue;
        }

        if next.priority >= current.priority {
            let left = Run::between(current.run.index, next.run.index);
            if !left.is_empty() {
                spans.push(current.with_run(left));
            }
            let right = Run::between(next.run.end(), current.run.end());
            if !right.is_empty() {
                insert_sorted(&mut pending, current.with_run(right));
            }
        } else {
            pending.pop_front();
            let rest = Run::between(current.run.end(), next.run.end());
            if !rest.is_empty() {
                insert_sorted(&mut pending, next.with_run(rest));
            }
            pending.push_front(current);
        }
    }

    spans
}

/// Insert after any markups with an equal key
fn insert_sorted(pending: &mut VecDeque<Markup>, markup: Markup) {
    let at = pending.partition_point(|m| m.sort_key() <= markup.sort_key());
    pending.insert(at, markup);
}
