use std::collections::HashSet;
use std::fmt;
use std::ops::RangeInclusive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EmojiProperty {
    Emoji,
    EmojiPresentation,
    EmojiModifier,
    EmojiModifierBase,
    EmojiComponent,
    ExtendedPictographic,
}

impl EmojiProperty {
    pub const ALL: [EmojiProperty; 6] = [
        EmojiProperty::Emoji,
        EmojiProperty::EmojiPresentation,
        EmojiProperty::EmojiModifier,
        EmojiProperty::EmojiModifierBase,
        EmojiProperty::EmojiComponent,
        EmojiProperty::ExtendedPictographic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Emoji => "Emoji",
            Self::EmojiPresentation => "Emoji_Presentation",
            Self::EmojiModifier => "Emoji_Modifier",
            Self::EmojiModifierBase => "Emoji_Modifier_Base",
            Self::EmojiComponent => "Emoji_Component",
            Self::ExtendedPictographic => "Extended_Pictographic",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Self::Emoji => 1 << 0,
            Self::EmojiPresentation => 1 << 1,
            Self::EmojiModifier => 1 << 2,
            Self::EmojiModifierBase => 1 << 3,
            Self::EmojiComponent => 1 << 4,
            Self::ExtendedPictographic => 1 << 5,
        }
    }
}

impl fmt::Display for EmojiProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PropertySet(u8);

impl PropertySet {
    pub const EMPTY: PropertySet = PropertySet(0);

    pub fn new(properties: &[EmojiProperty]) -> Self {
        let mut set = Self::EMPTY;
        for &property in properties {
            set.0 |= property.bit();
        }
        set
    }

    pub fn contains(self, property: EmojiProperty) -> bool {
        self.0 & property.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    // Yields properties in declaration order, which is the canonical
    // presentation order of the property table.
    pub fn iter(self) -> impl Iterator<Item = EmojiProperty> {
        EmojiProperty::ALL
            .into_iter()
            .filter(move |property| self.contains(*property))
    }
}

impl FromIterator<EmojiProperty> for PropertySet {
    fn from_iter<I: IntoIterator<Item = EmojiProperty>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for property in iter {
            set.0 |= property.bit();
        }
        set
    }
}

impl fmt::Debug for PropertySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PropertyRange {
    first: u32,
    last: u32,
    properties: PropertySet,
}

#[derive(Debug, Clone, Default)]
pub struct PropertyTable {
    // Sorted by `first`; ranges never overlap (loader contract).
    ranges: Vec<PropertyRange>,
}

impl PropertyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assign(&mut self, range: RangeInclusive<char>, properties: PropertySet) {
        let first = *range.start() as u32;
        let last = *range.end() as u32;
        let at = self.ranges.partition_point(|existing| existing.first < first);
        self.ranges.insert(
            at,
            PropertyRange {
                first,
                last,
                properties,
            },
        );
    }

    pub fn assign_char(&mut self, ch: char, properties: PropertySet) {
        self.assign(ch..=ch, properties);
    }

    pub fn lookup(&self, ch: char) -> PropertySet {
        let cp = ch as u32;
        let at = self.ranges.partition_point(|range| range.first <= cp);
        if at == 0 {
            return PropertySet::EMPTY;
        }
        let range = self.ranges[at - 1];
        if cp <= range.last {
            range.properties
        } else {
            PropertySet::EMPTY
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SequencePolicy {
    Recommended,
    Valid,
}

#[derive(Debug, Clone, Default)]
pub struct SequenceTable {
    flag_pairs: HashSet<[char; 2]>,
    tag_valid: HashSet<String>,
    tag_recommended: HashSet<String>,
    zwj_valid: HashSet<String>,
    zwj_recommended: HashSet<String>,
}

impl SequenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_flag_pair(&mut self, first: char, second: char) {
        self.flag_pairs.insert([first, second]);
    }

    // A recommended sequence is always registered as valid too.
    pub fn add_tag_sequence(&mut self, sequence: impl Into<String>, recommended: bool) {
        let sequence = sequence.into();
        if recommended {
            self.tag_recommended.insert(sequence.clone());
        }
        self.tag_valid.insert(sequence);
    }

    pub fn add_zwj_sequence(&mut self, sequence: impl Into<String>, recommended: bool) {
        let sequence = sequence.into();
        if recommended {
            self.zwj_recommended.insert(sequence.clone());
        }
        self.zwj_valid.insert(sequence);
    }

    pub(crate) fn flag_pair(&self, first: char, second: char) -> bool {
        self.flag_pairs.contains(&[first, second])
    }

    pub(crate) fn tag_sequence(&self, sequence: &str, policy: SequencePolicy) -> bool {
        match policy {
            SequencePolicy::Recommended => self.tag_recommended.contains(sequence),
            SequencePolicy::Valid => self.tag_valid.contains(sequence),
        }
    }

    pub(crate) fn zwj_sequence(&self, sequence: &str, policy: SequencePolicy) -> bool {
        match policy {
            SequencePolicy::Recommended => self.zwj_recommended.contains(sequence),
            SequencePolicy::Valid => self.zwj_valid.contains(sequence),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiEntry {
    sequence: String,
    name: String,
}

impl EmojiEntry {
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subgroup {
    name: String,
    entries: Vec<EmojiEntry>,
}

impl Subgroup {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[EmojiEntry] {
        &self.entries
    }

    pub fn contains_sequence(&self, sequence: &str) -> bool {
        self.entries.iter().any(|entry| entry.sequence == sequence)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    subgroups: Vec<Subgroup>,
}

impl Group {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subgroups(&self) -> &[Subgroup] {
        &self.subgroups
    }

    pub fn subgroup(&self, name: &str) -> Option<&Subgroup> {
        self.subgroups.iter().find(|subgroup| subgroup.name == name)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTree {
    groups: Vec<Group>,
}

impl CategoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    // Appends in insertion order; groups and subgroups are created on first
    // mention and never reordered.
    pub fn add(
        &mut self,
        group: impl Into<String>,
        subgroup: impl Into<String>,
        sequence: impl Into<String>,
        name: impl Into<String>,
    ) {
        let group_name = group.into();
        let subgroup_name = subgroup.into();
        let group_at = match self.groups.iter().position(|group| group.name == group_name) {
            Some(at) => at,
            None => {
                self.groups.push(Group {
                    name: group_name,
                    subgroups: Vec::new(),
                });
                self.groups.len() - 1
            }
        };
        let group = &mut self.groups[group_at];
        let subgroup_at = match group
            .subgroups
            .iter()
            .position(|subgroup| subgroup.name == subgroup_name)
        {
            Some(at) => at,
            None => {
                group.subgroups.push(Subgroup {
                    name: subgroup_name,
                    entries: Vec::new(),
                });
                group.subgroups.len() - 1
            }
        };
        group.subgroups[subgroup_at].entries.push(EmojiEntry {
            sequence: sequence.into(),
            name: name.into(),
        });
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
