//! Approximate matching of a compiled motif against a sequence.
//!
//! Matching runs in two passes. The first is a dynamic program over
//! (text offset, automaton state) that finds, for every start position, the
//! fewest edits of any alignment beginning there. Consuming a byte on a
//! matching transition is free; consuming it on a non-matching transition is
//! a substitution; consuming it while staying put is an insertion; taking a
//! transition without consuming is a deletion.
//!
//! The second pass reports matches. A search from offset `p` settles on the
//! earliest start at or after `p` whose cost equals the cheapest cost of any
//! start from `p` onwards, and the next search resumes one past that start, so
//! reported matches may overlap. The alignment at the chosen start is the
//! first one, in preference order, that fits within that cost: automaton
//! branches in order, and at each motif symbol an exact match, then a
//! substitution, an insertion, and finally a deletion.

use std::collections::HashMap;

use crate::core::types::{EditPositions, Span};
use crate::motif::nfa::{State, StateId};
use crate::motif::CompiledPattern;

const UNREACHED: usize = usize::MAX;

/// A match as found by the engine, before coordinate normalization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMatch {
    pub span: Span,
    pub matched: String,
    /// Absolute sequence positions of each edit
    pub positions: EditPositions,
}

/// Lazy iterator over the matches of a pattern in one sequence
pub struct FuzzyMatches<'p, 't> {
    pattern: &'p CompiledPattern,
    text: &'t [u8],
    /// Fewest edits of any alignment at each start, `UNREACHED` past the budget
    costs: Vec<usize>,
    /// Minimum of `costs` from each start to the end of the sequence
    cheapest_from: Vec<usize>,
    next_start: usize,
}

impl Iterator for FuzzyMatches<'_, '_> {
    type Item = RawMatch;

    fn next(&mut self) -> Option<RawMatch> {
        loop {
            let target = *self.cheapest_from.get(self.next_start)?;
            if target == UNREACHED {
                self.next_start = self.costs.len();
                return None;
            }
            let start = (self.next_start..self.costs.len()).find(|&s| self.costs[s] == target)?;
            self.next_start = start + 1;

            let Some(alignment) = Aligner::new(self.pattern, self.text, start, target).run() else {
                continue;
            };
            // Empty alignments still claim their start but are never reported
            if alignment.end > start {
                return Some(self.raw_match(start, alignment));
            }
        }
    }
}

impl FuzzyMatches<'_, '_> {
    fn raw_match(&self, start: usize, alignment: Alignment) -> RawMatch {
        let span = Span::new(start, alignment.end);
        let mut positions = EditPositions::default();
        for edit in alignment.edits {
            match edit {
                Edit::Substitution(pos) => positions.substitutions.push(pos),
                Edit::Insertion(pos) => positions.insertions.push(pos),
                // Deleted symbols are laid out one after another from the gap
                Edit::Deletion(pos) => positions.deletions.push(pos + positions.deletions.len()),
            }
        }
        RawMatch {
            span,
            matched: String::from_utf8_lossy(&self.text[span.start..span.end]).into_owned(),
            positions,
        }
    }
}

/// Find all approximate matches of `pattern` in `sequence`.
///
/// The cost of every start position is computed up front; alignments are
/// recovered lazily as the iterator advances. The iterator makes a single
/// forward pass and cannot be restarted. An empty sequence produces no
/// matches.
#[must_use]
pub fn find_matches<'p, 't>(
    pattern: &'p CompiledPattern,
    sequence: &'t str,
) -> FuzzyMatches<'p, 't> {
    let text = sequence.as_bytes();
    let costs: Vec<usize> = (0..=text.len())
        .map(|start| cheapest_alignment(pattern, text, start))
        .collect();

    let mut cheapest_from = vec![UNREACHED; costs.len() + 1];
    for start in (0..costs.len()).rev() {
        cheapest_from[start] = costs[start].min(cheapest_from[start + 1]);
    }

    FuzzyMatches {
        pattern,
        text,
        costs,
        cheapest_from,
        next_start: 0,
    }
}

/// Fewest edits of any alignment starting at `start`, or `UNREACHED`.
///
/// The empty alignment counts, since it can still claim a start.
fn cheapest_alignment(pattern: &CompiledPattern, text: &[u8], start: usize) -> usize {
    let nfa = pattern.nfa();
    let states = nfa.states();
    let budget = pattern.max_edits();
    let Some(accept) = accepting_state(states) else {
        return UNREACHED;
    };

    let mut column = vec![UNREACHED; states.len()];
    column[nfa.start()] = 0;
    close(states, &mut column, budget, start, text.len());
    let mut best = column[accept];

    for (pos, &byte) in text.iter().enumerate().skip(start) {
        if best == 0 {
            break;
        }
        let mut next_column = vec![UNREACHED; states.len()];
        for (id, state) in states.iter().enumerate() {
            let cost = column[id];
            if cost > budget {
                continue;
            }
            // A match never opens with an inserted base
            let may_insert = pos > start;
            match state {
                State::Byte { class, next } => {
                    lower(
                        &mut next_column,
                        *next,
                        cost + usize::from(!class.contains(byte)),
                    );
                    if may_insert {
                        lower(&mut next_column, id, cost + 1);
                    }
                }
                State::Assert { .. } if may_insert => {
                    lower(&mut next_column, id, cost + 1);
                }
                _ => {}
            }
        }

        close(states, &mut next_column, budget, pos + 1, text.len());
        column = next_column;
        if column.iter().all(|&cost| cost > budget) {
            break;
        }
        best = best.min(column[accept]);
    }

    if best <= budget {
        best
    } else {
        UNREACHED
    }
}

fn accepting_state(states: &[State]) -> Option<StateId> {
    states.iter().position(|s| matches!(s, State::Match))
}

/// Lower the cost of `state` if `cost` improves it; returns true on change.
fn lower(column: &mut [usize], state: StateId, cost: usize) -> bool {
    if cost < column[state] {
        column[state] = cost;
        true
    } else {
        false
    }
}

/// Propagate free and deletion transitions within a column.
///
/// Costs are small integers bounded by the budget, so a bucket queue visits
/// states in cost order.
fn close(states: &[State], column: &mut [usize], budget: usize, pos: usize, len: usize) {
    let mut buckets: Vec<Vec<StateId>> = vec![Vec::new(); budget + 1];
    for (id, &cost) in column.iter().enumerate() {
        if cost <= budget {
            buckets[cost].push(id);
        }
    }

    for cost in 0..=budget {
        while let Some(id) = buckets[cost].pop() {
            if column[id] != cost {
                continue;
            }
            match &states[id] {
                State::Split(targets) => {
                    for &target in targets {
                        if lower(column, target, cost) {
                            buckets[cost].push(target);
                        }
                    }
                }
                State::Assert { anchor, next } => {
                    if anchor.holds(pos, len) && lower(column, *next, cost) {
                        buckets[cost].push(*next);
                    }
                }
                State::Byte { next, .. } => {
                    if cost < budget && lower(column, *next, cost + 1) {
                        buckets[cost + 1].push(*next);
                    }
                }
                State::Match => {}
            }
        }
    }
}

/// One edit along an alignment, at the text offset where it was taken
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edit {
    Substitution(usize),
    Insertion(usize),
    Deletion(usize),
}

/// The end offset and edits of one alignment
#[derive(Debug)]
struct Alignment {
    end: usize,
    edits: Vec<Edit>,
}

/// One (state, offset) cell on the search path
#[derive(Debug, Clone, Copy)]
struct Cell {
    state: StateId,
    pos: usize,
    spent: usize,
}

#[derive(Debug)]
struct Frame {
    cell: Cell,
    /// Index of the next branch to try out of this cell
    branch: usize,
    /// Length of the edit trail on arrival
    trail: usize,
}

enum Branch {
    Take(Cell, Option<Edit>),
    Skip,
    Exhausted,
}

/// Depth-first search for the first alignment, in preference order, whose
/// cost fits the limit.
///
/// The search keeps an explicit stack so long sequences cannot exhaust the
/// call stack.
struct Aligner<'a> {
    states: &'a [State],
    start_state: StateId,
    text: &'a [u8],
    start: usize,
    limit: usize,
    /// Largest remaining budget already explored from a (state, offset) pair
    explored: HashMap<(StateId, usize), usize>,
    edits: Vec<Edit>,
}

impl<'a> Aligner<'a> {
    fn new(pattern: &'a CompiledPattern, text: &'a [u8], start: usize, limit: usize) -> Self {
        let nfa = pattern.nfa();
        Self {
            states: nfa.states(),
            start_state: nfa.start(),
            text,
            start,
            limit,
            explored: HashMap::new(),
            edits: Vec::new(),
        }
    }

    fn run(mut self) -> Option<Alignment> {
        let origin = Cell {
            state: self.start_state,
            pos: self.start,
            spent: 0,
        };
        self.enter(origin);
        if matches!(self.states[origin.state], State::Match) {
            return Some(Alignment {
                end: origin.pos,
                edits: self.edits,
            });
        }

        let mut stack = vec![Frame {
            cell: origin,
            branch: 0,
            trail: 0,
        }];
        while let Some(frame) = stack.last_mut() {
            let cell = frame.cell;
            let index = frame.branch;
            frame.branch += 1;
            let trail = frame.trail;
            self.edits.truncate(trail);

            match self.branch(cell, index) {
                Branch::Exhausted => {
                    stack.pop();
                }
                Branch::Skip => {}
                Branch::Take(next, edit) => {
                    if !self.enter(next) {
                        continue;
                    }
                    if let Some(edit) = edit {
                        self.edits.push(edit);
                    }
                    if matches!(self.states[next.state], State::Match) {
                        return Some(Alignment {
                            end: next.pos,
                            edits: self.edits,
                        });
                    }
                    stack.push(Frame {
                        cell: next,
                        branch: 0,
                        trail: self.edits.len(),
                    });
                }
            }
        }
        None
    }

    /// Record a visit; false if the cell was already explored with at least
    /// as much budget left.
    fn enter(&mut self, cell: Cell) -> bool {
        let remaining = self.limit - cell.spent;
        match self.explored.get(&(cell.state, cell.pos)) {
            Some(&seen) if seen >= remaining => false,
            _ => {
                self.explored.insert((cell.state, cell.pos), remaining);
                true
            }
        }
    }

    /// The `index`-th way out of `cell`, in preference order.
    fn branch(&self, cell: Cell, index: usize) -> Branch {
        let Cell { state, pos, spent } = cell;
        let byte = self.text.get(pos).copied();
        let can_edit = spent < self.limit;
        let can_insert = can_edit && byte.is_some() && pos > self.start;
        let free = |to: StateId, pos: usize| Branch::Take(Cell { state: to, pos, spent }, None);
        let edit = |to: StateId, pos: usize, op: Edit| {
            Branch::Take(
                Cell {
                    state: to,
                    pos,
                    spent: spent + 1,
                },
                Some(op),
            )
        };

        match &self.states[state] {
            State::Match => Branch::Exhausted,
            State::Split(targets) => targets
                .get(index)
                .map_or(Branch::Exhausted, |&target| free(target, pos)),
            State::Assert { anchor, next } => match index {
                0 if anchor.holds(pos, self.text.len()) => free(*next, pos),
                1 if can_insert => edit(state, pos + 1, Edit::Insertion(pos)),
                0 | 1 => Branch::Skip,
                _ => Branch::Exhausted,
            },
            State::Byte { class, next } => {
                let exact = byte.is_some_and(|b| class.contains(b));
                match index {
                    0 if exact => free(*next, pos + 1),
                    1 if can_edit && byte.is_some() && !exact => {
                        edit(*next, pos + 1, Edit::Substitution(pos))
                    }
                    2 if can_insert => edit(state, pos + 1, Edit::Insertion(pos)),
                    3 if can_edit => edit(*next, pos, Edit::Deletion(pos)),
                    0..=3 => Branch::Skip,
                    _ => Branch::Exhausted,
                }
            }
        }
    }
}
