use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use puzzled_core::Position;

use crate::autofill::{ProgressReport, TruncationReason};
use crate::{Cell, CrosswordGrid, DictEntry, Direction, Entry, EntryId, Symmetry, WordIndex};

pub type CancelFlag = Arc<AtomicBool>;

pub(crate) struct SearchCtx<'a> {
    pub max_variations: usize,
    pub node_budget: Option<u64>,
    pub deadline: Option<Instant>,
    pub cancel: Option<CancelFlag>,
    pub progress: Option<&'a mut dyn FnMut(ProgressReport)>,
    pub variables_total: usize,

    nodes: u64,
    stop: bool,
    truncated: Option<TruncationReason>,
    seen: HashSet<String>,
    results: Vec<CrosswordGrid>,
}

impl<'a> SearchCtx<'a> {
    pub fn new(
        max_variations: usize,
        node_budget: Option<u64>,
        deadline: Option<Instant>,
        cancel: Option<CancelFlag>,
        progress: Option<&'a mut dyn FnMut(ProgressReport)>,
        variables_total: usize,
    ) -> Self {
        Self {
            max_variations,
            node_budget,
            deadline,
            cancel,
            progress,
            variables_total,
            nodes: 0,
            stop: false,
            truncated: None,
            seen: HashSet::new(),
            results: Vec::new(),
        }
    }

    pub fn into_results(self) -> (Vec<CrosswordGrid>, Option<TruncationReason>) {
        (self.results, self.truncated)
    }

    fn report_progress(&mut self, assigned: usize) {
        if let Some(sink) = self.progress.as_deref_mut() {
            sink(ProgressReport {
                variables_assigned: assigned,
                variables_total: self.variables_total,
                solutions_so_far: self.results.len(),
            });
        }
    }

    /// Checks node budget, deadline and cancellation; returns `true` (and
    /// flips `stop`) the first time any of them trips.
    fn check_bounds(&mut self) -> bool {
        if let Some(budget) = self.node_budget {
            if self.nodes >= budget {
                self.stop = true;
                self.truncated = Some(TruncationReason::NodeBudget);
                return true;
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.stop = true;
                self.truncated = Some(TruncationReason::Deadline);
                return true;
            }
        }
        if let Some(flag) = &self.cancel {
            if flag.load(Ordering::Relaxed) {
                self.stop = true;
                self.truncated = Some(TruncationReason::Cancelled);
                return true;
            }
        }
        false
    }
}

/// Runs the backtracking search to completion (or to one of its bounds).
///
/// `candidates` must already be the final, pruned per-variable domains in
/// ranked order; this function only ever reads from them.
#[allow(clippy::too_many_arguments)]
pub(crate) fn search(
    variables: &[EntryId],
    candidates: &HashMap<EntryId, Vec<&DictEntry>>,
    entries_by_id: &HashMap<EntryId, &Entry>,
    assignment: &mut HashMap<EntryId, String>,
    letter_map: &mut HashMap<Position, char>,
    base_grid: &CrosswordGrid,
    ctx: &mut SearchCtx,
) {
    if ctx.stop {
        return;
    }

    ctx.nodes += 1;
    if ctx.nodes % 50 == 0 {
        ctx.report_progress(assignment.len());
        if ctx.check_bounds() {
            return;
        }
    }

    let Some(v) = select_mrv(variables, candidates, assignment, letter_map, entries_by_id) else {
        commit_solution(assignment, base_grid, entries_by_id, ctx);
        return;
    };

    let entry_v = entries_by_id[&v];
    let positions: Vec<Position> = entry_v.positions().collect();

    for candidate in &candidates[&v] {
        if ctx.stop {
            return;
        }

        let Some(inserted) = try_assign(&positions, candidate, letter_map) else {
            continue;
        };

        assignment.insert(v, candidate.word.clone());
        search(variables, candidates, entries_by_id, assignment, letter_map, base_grid, ctx);
        assignment.remove(&v);

        for pos in inserted {
            letter_map.remove(&pos);
        }
    }
}

fn select_mrv(
    variables: &[EntryId],
    candidates: &HashMap<EntryId, Vec<&DictEntry>>,
    assignment: &HashMap<EntryId, String>,
    letter_map: &HashMap<Position, char>,
    entries_by_id: &HashMap<EntryId, &Entry>,
) -> Option<EntryId> {
    variables
        .iter()
        .copied()
        .filter(|id| !assignment.contains_key(id))
        .min_by_key(|&id| {
            let entry = entries_by_id[&id];
            let positions: Vec<Position> = entry.positions().collect();
            let remaining = candidates[&id]
                .iter()
                .filter(|cand| compatible(&cand.word, &positions, letter_map))
                .count();

            (remaining, entry.number, direction_rank(entry.direction))
        })
}

fn compatible(word: &str, positions: &[Position], letter_map: &HashMap<Position, char>) -> bool {
    word.chars()
        .zip(positions)
        .all(|(ch, pos)| letter_map.get(pos).is_none_or(|&fixed| fixed == ch))
}

/// If `candidate` is compatible with `letter_map`, writes its letters in and
/// returns the positions that were newly inserted (so the caller can undo
/// exactly those on backtrack). Positions already present with a matching
/// letter are left alone.
fn try_assign(positions: &[Position], candidate: &DictEntry, letter_map: &mut HashMap<Position, char>) -> Option<Vec<Position>> {
    if !compatible(&candidate.word, positions, letter_map) {
        return None;
    }

    let mut inserted = Vec::new();
    for (ch, &pos) in candidate.word.chars().zip(positions) {
        if letter_map.insert(pos, ch).is_none() {
            inserted.push(pos);
        }
    }
    Some(inserted)
}

fn commit_solution(
    assignment: &HashMap<EntryId, String>,
    base_grid: &CrosswordGrid,
    entries_by_id: &HashMap<EntryId, &Entry>,
    ctx: &mut SearchCtx,
) {
    let mut pairs: Vec<(EntryId, &String)> = assignment.iter().map(|(&id, word)| (id, word)).collect();
    pairs.sort_by_key(|(id, _)| (direction_rank(id.direction), id.start.row, id.start.col));

    let fingerprint = pairs
        .iter()
        .map(|(id, word)| format!("{}{},{}:{}", id.direction, id.start.row, id.start.col, word))
        .collect::<Vec<_>>()
        .join("|");

    if !ctx.seen.insert(fingerprint) {
        return;
    }

    let mut grid = base_grid.clone();
    for (id, word) in &pairs {
        let entry = entries_by_id[id];
        for (pos, ch) in entry.positions().zip(word.chars()) {
            grid.set_cell(pos.row, pos.col, Cell::Letter(ch), Symmetry::None)
                .expect("entry positions are within the grid they were derived from");
        }
    }

    ctx.results.push(grid);

    if ctx.results.len() % 10 == 0 {
        ctx.report_progress(ctx.variables_total);
    }

    if ctx.results.len() >= ctx.max_variations {
        ctx.stop = true;
        ctx.truncated = Some(TruncationReason::MaxVariations);
    }
}

fn direction_rank(direction: Direction) -> u8 {
    match direction {
        Direction::Across => 0,
        Direction::Down => 1,
    }
}

/// One pass of arc-consistency pruning: drops a candidate from a variable's
/// domain if some crossing variable has no candidate agreeing on the shared
/// letter. Not maintained during search, just run once up front.
pub(crate) fn prune_one_pass(
    candidates: &mut HashMap<EntryId, Vec<&DictEntry>>,
    entries_by_id: &HashMap<EntryId, &Entry>,
    index: &WordIndex,
) {
    let mut pruned: HashMap<EntryId, Vec<&DictEntry>> = HashMap::with_capacity(candidates.len());

    for (&v, cands) in candidates.iter() {
        let entry_v = entries_by_id[&v];
        let positions: Vec<Position> = entry_v.positions().collect();

        let kept = cands
            .iter()
            .copied()
            .filter(|cand| {
                cand.word
                    .chars()
                    .zip(&positions)
                    .all(|(ch, &pos)| crossing_allows(v, ch, pos, entry_v.direction, entries_by_id, index, candidates))
            })
            .collect();

        pruned.insert(v, kept);
    }

    *candidates = pruned;
}

#[allow(clippy::too_many_arguments)]
fn crossing_allows(
    v: EntryId,
    ch: char,
    pos: Position,
    direction: Direction,
    entries_by_id: &HashMap<EntryId, &Entry>,
    index: &WordIndex,
    candidates: &HashMap<EntryId, Vec<&DictEntry>>,
) -> bool {
    let (across, down) = index.entries_at(pos);
    let crossing = match direction {
        Direction::Across => down,
        Direction::Down => across,
    };

    match crossing {
        None => true,
        Some(u) if u == v => true,
        Some(u) => match candidates.get(&u) {
            None => true,
            Some(u_cands) => {
                let u_entry = entries_by_id[&u];
                let idx = position_index_in_entry(u_entry, pos);
                u_cands.iter().any(|cand| cand.word.chars().nth(idx) == Some(ch))
            }
        },
    }
}

fn position_index_in_entry(entry: &Entry, pos: Position) -> usize {
    match entry.direction {
        Direction::Across => pos.col - entry.start.col,
        Direction::Down => pos.row - entry.start.row,
    }
}
