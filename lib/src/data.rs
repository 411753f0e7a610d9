use crate::results::GameError;
use std::collections::HashMap;
use std::collections::HashSet;
use std::io;
use std::io::BufRead;

/// The number of items that make up one group in the matching game.
pub const GROUP_SIZE: usize = 4;

/// One round of the date-guessing game: a photo reference plus the month
/// abbreviation and year to be guessed.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Challenge {
    photo: String,
    month: String,
    year: String,
    attempt_budget: Option<u32>,
}

impl Challenge {
    /// Constructs a challenge for the given photo and date. The month
    /// abbreviation is stored in upper case.
    pub fn new(photo: &str, month: &str, year: &str) -> Challenge {
        Challenge {
            photo: photo.to_string(),
            month: month.to_ascii_uppercase(),
            year: year.to_string(),
            attempt_budget: None,
        }
    }

    /// Overrides the attempt budget for this challenge only. Challenges
    /// without an override use their list's default budget.
    pub fn with_attempt_budget(mut self, budget: u32) -> Challenge {
        self.attempt_budget = Some(budget);
        self
    }

    /// An identifier for the photo shown alongside this round.
    pub fn photo(&self) -> &str {
        &self.photo
    }

    /// The target month abbreviation, e.g. `MAY`.
    pub fn month(&self) -> &str {
        &self.month
    }

    /// The target year, e.g. `2015`.
    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn attempt_budget(&self) -> Option<u32> {
        self.attempt_budget
    }
}

/// The ordered list of challenges that makes up one date-guessing game.
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChallengeList {
    challenges: Vec<Challenge>,
    default_attempt_budget: u32,
}

/// The attempt budget used by challenges without a per-round override.
pub const DEFAULT_ATTEMPT_BUDGET: u32 = 3;

impl ChallengeList {
    /// Constructs a new `ChallengeList` using the challenges from the given
    /// vector, with the default attempt budget.
    pub fn from_vec(challenges: Vec<Challenge>) -> ChallengeList {
        ChallengeList {
            challenges,
            default_attempt_budget: DEFAULT_ATTEMPT_BUDGET,
        }
    }

    /// Constructs a new `ChallengeList` by reading challenges from the given
    /// reader.
    ///
    /// The reader should provide one challenge per line as
    /// `photo month year [budget]`, whitespace separated. Blank lines and
    /// lines starting with `#` are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<ChallengeList> {
        let mut challenges = Vec::new();
        for maybe_line in reader.lines() {
            let line = maybe_line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split_whitespace();
            let (photo, month, year) = match (fields.next(), fields.next(), fields.next()) {
                (Some(photo), Some(month), Some(year)) => (photo, month, year),
                _ => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("expected 'photo month year [budget]', got: {}", line),
                    ))
                }
            };
            let mut challenge = Challenge::new(photo, month, year);
            if let Some(budget) = fields.next() {
                let budget = budget.parse::<u32>().map_err(|_| {
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("invalid attempt budget: {}", budget),
                    )
                })?;
                challenge = challenge.with_attempt_budget(budget);
            }
            challenges.push(challenge);
        }
        Ok(ChallengeList::from_vec(challenges))
    }

    /// Replaces the budget used by challenges without a per-round override.
    pub fn with_default_attempt_budget(mut self, budget: u32) -> ChallengeList {
        self.default_attempt_budget = budget;
        self
    }

    /// Retrieves the challenge at the given round index.
    pub fn get(&self, index: usize) -> Option<&Challenge> {
        self.challenges.get(index)
    }

    /// Returns the number of rounds.
    pub fn len(&self) -> usize {
        self.challenges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.challenges.is_empty()
    }

    pub fn default_attempt_budget(&self) -> u32 {
        self.default_attempt_budget
    }
}

/// One item in the matching game: a label, the group it belongs to, and the
/// group's difficulty rank (1 is easiest).
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupedItem {
    label: String,
    group: String,
    difficulty: u8,
}

impl GroupedItem {
    pub fn new(label: &str, group: &str, difficulty: u8) -> GroupedItem {
        GroupedItem {
            label: label.to_string(),
            group: group.to_string(),
            difficulty,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }
}

/// The fixed catalog of items for one matching puzzle.
///
/// A valid catalog has unique item labels, every group made of exactly
/// [`GROUP_SIZE`] members, and one difficulty rank per group. Deserializing
/// runs the same validation as [`GroupCatalog::new`].
#[derive(Debug, PartialEq, Eq, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<GroupedItem>", into = "Vec<GroupedItem>")
)]
pub struct GroupCatalog {
    items: Vec<GroupedItem>,
}

impl TryFrom<Vec<GroupedItem>> for GroupCatalog {
    type Error = GameError;

    fn try_from(items: Vec<GroupedItem>) -> Result<GroupCatalog, GameError> {
        GroupCatalog::new(items)
    }
}

impl From<GroupCatalog> for Vec<GroupedItem> {
    fn from(catalog: GroupCatalog) -> Vec<GroupedItem> {
        catalog.items
    }
}

impl GroupCatalog {
    /// Constructs a catalog from the given items, validating the catalog
    /// invariants.
    pub fn new(items: Vec<GroupedItem>) -> Result<GroupCatalog, GameError> {
        if items.is_empty() {
            return Err(GameError::InvalidCatalog);
        }
        let mut labels: HashSet<&str> = HashSet::new();
        let mut members_per_group: HashMap<&str, usize> = HashMap::new();
        let mut difficulty_per_group: HashMap<&str, u8> = HashMap::new();
        for item in &items {
            if !labels.insert(item.label()) {
                return Err(GameError::InvalidCatalog);
            }
            *members_per_group.entry(item.group()).or_insert(0) += 1;
            let difficulty = difficulty_per_group
                .entry(item.group())
                .or_insert(item.difficulty());
            if *difficulty != item.difficulty() {
                return Err(GameError::InvalidCatalog);
            }
        }
        if members_per_group.values().any(|count| *count != GROUP_SIZE) {
            return Err(GameError::InvalidCatalog);
        }
        Ok(GroupCatalog { items })
    }

    /// Constructs a catalog by reading items from the given reader.
    ///
    /// The reader should provide one item per line as
    /// `label<TAB>group<TAB>difficulty`. Blank lines and lines starting with
    /// `#` are skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> io::Result<GroupCatalog> {
        let mut items = Vec::new();
        for maybe_line in reader.lines() {
            let line = maybe_line?;
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let mut fields = line.split('\t');
            let (label, group, difficulty) = match (fields.next(), fields.next(), fields.next()) {
                (Some(label), Some(group), Some(difficulty)) => {
                    (label.trim(), group.trim(), difficulty.trim())
                }
                _ => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("expected 'label<TAB>group<TAB>difficulty', got: {}", line),
                    ))
                }
            };
            let difficulty = difficulty.parse::<u8>().map_err(|_| {
                io::Error::new(
                    io::ErrorKind::InvalidData,
                    format!("invalid difficulty rank: {}", difficulty),
                )
            })?;
            items.push(GroupedItem::new(label, group, difficulty));
        }
        GroupCatalog::new(items).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }

    /// Retrieves the full list of items, in catalog order.
    pub fn items(&self) -> &[GroupedItem] {
        &self.items
    }

    /// Retrieves the item with the given id. Item ids are indices into the
    /// catalog and are stable for its whole lifetime.
    pub fn get(&self, id: usize) -> Option<&GroupedItem> {
        self.items.get(id)
    }

    /// Returns the number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of distinct groups.
    pub fn num_groups(&self) -> usize {
        self.items.len() / GROUP_SIZE
    }
}
