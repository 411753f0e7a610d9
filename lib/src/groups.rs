use crate::data::{GroupCatalog, GroupedItem, GROUP_SIZE};
use crate::results::GameError;
use rand::seq::SliceRandom;

/// The number of incorrect submissions allowed before the puzzle is lost.
pub const DEFAULT_MISTAKE_BUDGET: u32 = 4;

/// Stable identifier for a catalog item: its index into the catalog. Item
/// ids survive shuffles and solved-group removals.
pub type ItemId = usize;

/// A correctly identified group, in the form the caller displays it.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolvedGroup {
    pub group: String,
    pub difficulty: u8,
    pub members: Vec<String>,
}

/// The outcome of submitting a four-item selection.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SelectionOutcome {
    /// All four items share the given group; the group moved to the solved
    /// list.
    Correct(String),
    /// The items span more than one group. One mistake was consumed.
    Incorrect,
    /// The shared group was already solved. No mistake was consumed.
    AlreadySolved,
}

/// Whether the puzzle is still being played, or how it ended.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GroupSessionStatus {
    InProgress,
    Won,
    Lost,
}

/// Plays one matching puzzle over a fixed catalog of grouped items.
///
/// The caller renders the unsolved grid and the solved groups, routes tile
/// clicks to [`toggle_select`](GroupSession::toggle_select), and submits a
/// selection once four items are picked. The session ends once every group
/// is solved or the mistake budget runs out; after that every operation is a
/// no-op.
pub struct GroupSession<'a> {
    catalog: &'a GroupCatalog,
    /// Unsolved item ids, in display order.
    unsolved: Vec<ItemId>,
    /// Selected item ids, in selection order. Never more than `GROUP_SIZE`.
    selection: Vec<ItemId>,
    /// Solved groups, in ascending difficulty order.
    solved: Vec<SolvedGroup>,
    mistakes_remaining: u32,
}

impl<'a> GroupSession<'a> {
    /// Starts a new session with the full catalog unsolved, in a freshly
    /// shuffled display order, and the default mistake budget.
    pub fn new(catalog: &'a GroupCatalog) -> GroupSession<'a> {
        let mut unsolved: Vec<ItemId> = (0..catalog.len()).collect();
        unsolved.shuffle(&mut rand::thread_rng());
        GroupSession {
            catalog,
            unsolved,
            selection: Vec::new(),
            solved: Vec::new(),
            mistakes_remaining: DEFAULT_MISTAKE_BUDGET,
        }
    }

    pub fn catalog(&self) -> &'a GroupCatalog {
        self.catalog
    }

    /// Unsolved item ids in display order.
    pub fn unsolved_ids(&self) -> &[ItemId] {
        &self.unsolved
    }

    /// The ids currently selected, in selection order.
    pub fn selection(&self) -> &[ItemId] {
        &self.selection
    }

    /// The groups solved so far, in ascending difficulty order.
    pub fn solved_groups(&self) -> &[SolvedGroup] {
        &self.solved
    }

    pub fn mistakes_remaining(&self) -> u32 {
        self.mistakes_remaining
    }

    pub fn status(&self) -> GroupSessionStatus {
        if self.solved.len() == self.catalog.num_groups() {
            GroupSessionStatus::Won
        } else if self.mistakes_remaining == 0 {
            GroupSessionStatus::Lost
        } else {
            GroupSessionStatus::InProgress
        }
    }

    /// Selects the given item if it is on the unsolved grid and fewer than
    /// four items are selected, or deselects it if it is already selected.
    /// Returns whether the selection changed; a full selection, an id not on
    /// the grid, and an ended session are all silent no-ops.
    pub fn toggle_select(&mut self, item: ItemId) -> bool {
        if self.is_over() {
            return false;
        }
        if let Some(position) = self.selection.iter().position(|id| *id == item) {
            self.selection.remove(position);
            return true;
        }
        if self.selection.len() >= GROUP_SIZE || !self.unsolved.contains(&item) {
            return false;
        }
        self.selection.push(item);
        true
    }

    /// Clears the current selection without submitting it.
    pub fn deselect_all(&mut self) {
        if !self.is_over() {
            self.selection.clear();
        }
    }

    /// Checks whether the four selected items share one group.
    ///
    /// The selection is cleared regardless of the outcome. A correct group
    /// moves its items off the unsolved grid and into the solved list, which
    /// stays sorted by ascending difficulty; an incorrect one consumes a
    /// mistake; re-submitting a group that was somehow already solved
    /// consumes nothing.
    pub fn submit_selection(&mut self) -> Result<SelectionOutcome, GameError> {
        if self.is_over() || self.selection.len() != GROUP_SIZE {
            return Err(GameError::InvalidSelectionSize);
        }
        let selected = std::mem::take(&mut self.selection);
        let items: Vec<&GroupedItem> = selected
            .iter()
            .filter_map(|id| self.catalog.get(*id))
            .collect();
        if items.len() != GROUP_SIZE {
            return Err(GameError::InvalidSelectionSize);
        }

        let group = items[0].group();
        if items.iter().any(|item| item.group() != group) {
            self.mistakes_remaining -= 1;
            return Ok(SelectionOutcome::Incorrect);
        }
        if self.solved.iter().any(|solved| solved.group == group) {
            return Ok(SelectionOutcome::AlreadySolved);
        }

        let entry = SolvedGroup {
            group: group.to_string(),
            difficulty: items[0].difficulty(),
            members: items.iter().map(|item| item.label().to_string()).collect(),
        };
        self.unsolved.retain(|id| !selected.contains(id));
        let position = self
            .solved
            .iter()
            .position(|solved| solved.difficulty > entry.difficulty)
            .unwrap_or(self.solved.len());
        self.solved.insert(position, entry);
        Ok(SelectionOutcome::Correct(group.to_string()))
    }

    /// Reorders the unsolved grid uniformly at random. Solved groups and the
    /// current selection are untouched.
    pub fn shuffle(&mut self) {
        if !self.is_over() {
            self.unsolved.shuffle(&mut rand::thread_rng());
        }
    }

    /// Resets the session to a fresh puzzle: everything unsolved, reshuffled,
    /// full mistake budget.
    pub fn restart(&mut self) {
        *self = GroupSession::new(self.catalog);
    }

    fn is_over(&self) -> bool {
        self.status() != GroupSessionStatus::InProgress
    }
}
