pub(crate) mod fish;
pub(crate) mod hidden_singles;
pub(crate) mod intersections;
pub(crate) mod rectangles;
pub(crate) mod subsets;
pub(crate) mod wings;

use crate::bitset::CandidateSet;
use crate::board::Puzzle;

/// The deduction techniques the solver works through when no forced single
/// exists.
///
/// The list is tried in the fixed order of [`Technique::ORDER`]
/// (cheapest/most certain first) and is never reordered, so solving traces
/// are deterministic and reproducible for a given input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
#[allow(missing_docs)]
pub enum Technique {
    HiddenSingle,
    NakedPair,
    HiddenPair,
    LockedCandidate,
    PointingTuple,
    NakedTriple,
    HiddenTriple,
    XWing,
    Swordfish,
    YWing,
    XyzWing,
    XyChain,
    NakedQuadruple,
    HiddenQuadruple,
    Jellyfish,
    UniqueRectangle,
    HiddenRectangle,
    AvoidableRectangle,
}

impl Technique {
    /// All techniques in the order the solver tries them.
    pub const ORDER: &'static [Technique] = &[
        Technique::HiddenSingle,
        Technique::NakedPair,
        Technique::HiddenPair,
        Technique::LockedCandidate,
        Technique::PointingTuple,
        Technique::NakedTriple,
        Technique::HiddenTriple,
        Technique::XWing,
        Technique::Swordfish,
        Technique::YWing,
        Technique::XyzWing,
        Technique::XyChain,
        Technique::NakedQuadruple,
        Technique::HiddenQuadruple,
        Technique::Jellyfish,
        Technique::UniqueRectangle,
        Technique::HiddenRectangle,
        Technique::AvoidableRectangle,
    ];

    /// The label used in action log descriptions.
    pub fn name(self) -> &'static str {
        use self::Technique::*;
        match self {
            HiddenSingle => "Hidden single",
            NakedPair => "Naked pair",
            HiddenPair => "Hidden pair",
            LockedCandidate => "Locked candidate",
            PointingTuple => "Pointing tuple",
            NakedTriple => "Naked triple",
            HiddenTriple => "Hidden triple",
            XWing => "X-wing",
            Swordfish => "Swordfish",
            YWing => "Y-wing",
            XyzWing => "XYZ-wing",
            XyChain => "XY-chain",
            NakedQuadruple => "Naked quadruple",
            HiddenQuadruple => "Hidden quadruple",
            Jellyfish => "Jellyfish",
            UniqueRectangle => "Unique rectangle",
            HiddenRectangle => "Hidden rectangle",
            AvoidableRectangle => "Avoidable rectangle",
        }
    }

    /// Scans `puzzle` for the first applicable instance of this technique.
    ///
    /// Returns a description of the deduction iff the puzzle state actually
    /// changed (an assignment or at least one eliminated candidate), which
    /// is the termination contract the engine loop depends on.
    pub(crate) fn apply(self, puzzle: &mut Puzzle) -> Option<String> {
        use self::Technique::*;
        match self {
            HiddenSingle => hidden_singles::find(puzzle),
            NakedPair => subsets::naked(puzzle, 2, self.name()),
            HiddenPair => subsets::hidden(puzzle, 2, self.name()),
            LockedCandidate => intersections::locked_candidate(puzzle),
            PointingTuple => intersections::pointing_tuple(puzzle),
            NakedTriple => subsets::naked(puzzle, 3, self.name()),
            HiddenTriple => subsets::hidden(puzzle, 3, self.name()),
            XWing => fish::find(puzzle, 2, self.name()),
            Swordfish => fish::find(puzzle, 3, self.name()),
            YWing => wings::y_wing(puzzle),
            XyzWing => wings::xyz_wing(puzzle),
            XyChain => wings::xy_chain(puzzle),
            NakedQuadruple => subsets::naked(puzzle, 4, self.name()),
            HiddenQuadruple => subsets::hidden(puzzle, 4, self.name()),
            Jellyfish => fish::find(puzzle, 4, self.name()),
            UniqueRectangle => rectangles::unique(puzzle),
            HiddenRectangle => rectangles::hidden(puzzle),
            AvoidableRectangle => rectangles::avoidable(puzzle),
        }
    }
}

/// Formats a flat cell index as `R<row>C<col>`, 1-based.
pub(crate) fn cell_name(index: usize) -> String {
    format!("R{}C{}", index / 9 + 1, index % 9 + 1)
}

pub(crate) fn cell_list(cells: &[usize]) -> String {
    let names: Vec<String> = cells.iter().map(|&cell| cell_name(cell)).collect();
    names.join(", ")
}

pub(crate) fn digit_list(digits: CandidateSet) -> String {
    let digits: Vec<String> = digits.iter().map(|d| d.to_string()).collect();
    digits.join("/")
}

/// Calls `visit` with every size-`k` combination of `items` in lexicographic
/// order over item indices. Stops early when `visit` returns `true`.
pub(crate) fn combinations<T: Copy>(
    items: &[T],
    k: usize,
    visit: &mut impl FnMut(&[T]) -> bool,
) -> bool {
    let mut scratch = Vec::with_capacity(k);
    walk_combinations(items, k, 0, &mut scratch, visit)
}

fn walk_combinations<T: Copy>(
    items: &[T],
    k: usize,
    start: usize,
    scratch: &mut Vec<T>,
    visit: &mut impl FnMut(&[T]) -> bool,
) -> bool {
    if scratch.len() == k {
        return visit(scratch);
    }
    for i in start..items.len() {
        // not enough items left to complete the combination
        if items.len() - i < k - scratch.len() {
            break;
        }
        scratch.push(items[i]);
        if walk_combinations(items, k, i + 1, scratch, visit) {
            return true;
        }
        scratch.pop();
    }
    false
}

/// The cells visible to every cell in `cells`, excluding `cells` themselves.
pub(crate) fn common_peers(puzzle: &Puzzle, cells: &[usize]) -> Vec<usize> {
    let (&first, rest) = match cells.split_first() {
        Some(split) => split,
        None => return Vec::new(),
    };
    puzzle
        .cell(first)
        .peers()
        .iter()
        .map(|&peer| peer as usize)
        .filter(|&peer| {
            !cells.contains(&peer) && rest.iter().all(|&cell| puzzle.cell(cell).sees(peer))
        })
        .collect()
}
