use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

mod database;
mod scanner;

pub use database::{
    CategoryTree, EmojiEntry, EmojiProperty, Group, PropertySet, PropertyTable, SequenceTable,
    Subgroup,
};
pub use scanner::{EmojiMatch, Matcher, MatcherKind, Matches};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    GroupNotFound(String),
    SubgroupNotFound { group: String, subgroup: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GroupNotFound(group) => write!(f, "group not found: {group}"),
            Self::SubgroupNotFound { group, subgroup } => {
                write!(f, "subgroup not found: {group} / {subgroup}")
            }
        }
    }
}

impl StdError for Error {}

#[derive(Debug)]
pub(crate) struct Tables {
    pub(crate) properties: PropertyTable,
    pub(crate) sequences: SequenceTable,
    pub(crate) categories: CategoryTree,
    pub(crate) version: String,
}

// The loaded emoji database plus the five matchers compiled from it. Built
// once from loader-supplied tables and immutable afterwards, so shared
// references can be used from any number of threads.
#[derive(Debug, Clone)]
pub struct EmojiData {
    tables: Arc<Tables>,
    matchers: [Matcher; 5],
}

impl EmojiData {
    pub fn new(
        properties: PropertyTable,
        sequences: SequenceTable,
        categories: CategoryTree,
    ) -> Self {
        Self::with_version(properties, sequences, categories, "unversioned")
    }

    pub fn with_version(
        properties: PropertyTable,
        sequences: SequenceTable,
        categories: CategoryTree,
        version: impl Into<String>,
    ) -> Self {
        let tables = Arc::new(Tables {
            properties,
            sequences,
            categories,
            version: version.into(),
        });
        let matchers = MatcherKind::ALL.map(|kind| Matcher::compile(&tables, kind));
        Self { tables, matchers }
    }

    pub fn version(&self) -> &str {
        &self.tables.version
    }

    pub fn matcher(&self, kind: MatcherKind) -> &Matcher {
        let at = match kind {
            MatcherKind::Any => 0,
            MatcherKind::Text => 1,
            MatcherKind::Basic => 2,
            MatcherKind::Regex => 3,
            MatcherKind::RegexValid => 4,
        };
        &self.matchers[at]
    }

    pub fn any(&self) -> &Matcher {
        self.matcher(MatcherKind::Any)
    }

    pub fn text(&self) -> &Matcher {
        self.matcher(MatcherKind::Text)
    }

    pub fn basic(&self) -> &Matcher {
        self.matcher(MatcherKind::Basic)
    }

    pub fn regex(&self) -> &Matcher {
        self.matcher(MatcherKind::Regex)
    }

    pub fn regex_valid(&self) -> &Matcher {
        self.matcher(MatcherKind::RegexValid)
    }

    // Classifies the first codepoint of `text`; anything past it is ignored.
    // None when the codepoint carries no emoji property at all.
    pub fn properties(&self, text: &str) -> Option<PropertySet> {
        let head = text.chars().next()?;
        let properties = self.tables.properties.lookup(head);
        if properties.is_empty() {
            None
        } else {
            Some(properties)
        }
    }

    pub fn categories(&self) -> &CategoryTree {
        &self.tables.categories
    }

    pub fn group(&self, name: &str) -> Result<&Group> {
        self.tables
            .categories
            .group(name)
            .ok_or_else(|| Error::GroupNotFound(name.to_string()))
    }

    pub fn subgroup(&self, group: &str, subgroup: &str) -> Result<&Subgroup> {
        self.group(group)?
            .subgroup(subgroup)
            .ok_or_else(|| Error::SubgroupNotFound {
                group: group.to_string(),
                subgroup: subgroup.to_string(),
            })
    }
}
