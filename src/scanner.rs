use std::sync::Arc;

use crate::database::{EmojiProperty, SequencePolicy};
use crate::Tables;

const EMOJI_VARIATION_SELECTOR: char = '\u{FE0F}';
const TEXT_VARIATION_SELECTOR: char = '\u{FE0E}';
const ZERO_WIDTH_JOINER: char = '\u{200D}';
const COMBINING_ENCLOSING_KEYCAP: char = '\u{20E3}';
const BLACK_FLAG: char = '\u{1F3F4}';
const CANCEL_TAG: char = '\u{E007F}';

fn is_regional_indicator(ch: char) -> bool {
    ('\u{1F1E6}'..='\u{1F1FF}').contains(&ch)
}

fn is_tag(ch: char) -> bool {
    ('\u{E0000}'..='\u{E007F}').contains(&ch)
}

fn is_tag_body(ch: char) -> bool {
    ('\u{E0020}'..='\u{E007A}').contains(&ch)
}

fn is_keycap_base(ch: char) -> bool {
    matches!(ch, '0'..='9' | '#' | '*')
}

fn is_variation_selector(ch: char) -> bool {
    ch == EMOJI_VARIATION_SELECTOR || ch == TEXT_VARIATION_SELECTOR
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatcherKind {
    Any,
    Text,
    Basic,
    Regex,
    RegexValid,
}

impl MatcherKind {
    pub const ALL: [MatcherKind; 5] = [
        MatcherKind::Any,
        MatcherKind::Text,
        MatcherKind::Basic,
        MatcherKind::Regex,
        MatcherKind::RegexValid,
    ];
}

// How a lone emoji codepoint (with its optional variation selector) is
// recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SingletonRule {
    // Text presentation: default-text emoji alone or with U+FE0E; emoji
    // presentation codepoints only with U+FE0E. U+FE0F kills the match.
    TextStyle,
    // Bare codepoint with an optional trailing U+FE0F; a trailing U+FE0E is
    // left unconsumed.
    Bare,
    // Emoji presentation: emoji presentation codepoints alone or with U+FE0F;
    // default-text emoji only with U+FE0F. U+FE0E kills the match.
    EmojiStyle,
}

// What a matcher variant recognizes at a scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchRule {
    // Any emoji-related codepoint, one at a time, ignoring sequence
    // structure. Variation selectors and tag codepoints never match.
    Component,
    Singleton(SingletonRule),
    // The full sequence grammar over emoji-presentation singletons.
    Sequences,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MatcherConfig {
    rule: MatchRule,
    policy: SequencePolicy,
}

impl MatcherConfig {
    fn for_kind(kind: MatcherKind) -> Self {
        match kind {
            MatcherKind::Any => Self {
                rule: MatchRule::Component,
                policy: SequencePolicy::Recommended,
            },
            MatcherKind::Text => Self {
                rule: MatchRule::Singleton(SingletonRule::TextStyle),
                policy: SequencePolicy::Recommended,
            },
            MatcherKind::Basic => Self {
                rule: MatchRule::Singleton(SingletonRule::Bare),
                policy: SequencePolicy::Recommended,
            },
            MatcherKind::Regex => Self {
                rule: MatchRule::Sequences,
                policy: SequencePolicy::Recommended,
            },
            MatcherKind::RegexValid => Self {
                rule: MatchRule::Sequences,
                policy: SequencePolicy::Valid,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct Matcher {
    tables: Arc<Tables>,
    kind: MatcherKind,
    config: MatcherConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmojiMatch<'t> {
    start: usize,
    end: usize,
    text: &'t str,
}

impl<'t> EmojiMatch<'t> {
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn as_str(&self) -> &'t str {
        self.text
    }
}

impl Matcher {
    pub(crate) fn compile(tables: &Arc<Tables>, kind: MatcherKind) -> Self {
        Self {
            tables: Arc::clone(tables),
            kind,
            config: MatcherConfig::for_kind(kind),
        }
    }

    pub fn kind(&self) -> MatcherKind {
        self.kind
    }

    pub fn match_at_start<'t>(&self, text: &'t str) -> Option<EmojiMatch<'t>> {
        let len = self.match_len(text)?;
        Some(EmojiMatch {
            start: 0,
            end: len,
            text: &text[..len],
        })
    }

    pub fn is_match_at_start(&self, text: &str) -> bool {
        self.match_len(text).is_some()
    }

    pub fn find<'t>(&self, text: &'t str) -> Option<EmojiMatch<'t>> {
        self.find_from(text, 0)
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.find(text).is_some()
    }

    pub fn find_iter<'m, 't>(&'m self, text: &'t str) -> Matches<'m, 't> {
        Matches {
            matcher: self,
            text,
            pos: 0,
        }
    }

    fn find_from<'t>(&self, text: &'t str, from: usize) -> Option<EmojiMatch<'t>> {
        let mut pos = from;
        while pos < text.len() {
            let rest = &text[pos..];
            if let Some(len) = self.match_len(rest) {
                return Some(EmojiMatch {
                    start: pos,
                    end: pos + len,
                    text: &rest[..len],
                });
            }
            match rest.chars().next() {
                Some(ch) => pos += ch.len_utf8(),
                None => break,
            }
        }
        None
    }

    // Byte length of the match starting exactly at the beginning of `rest`,
    // or None when this variant's grammar does not match there.
    fn match_len(&self, rest: &str) -> Option<usize> {
        match self.config.rule {
            MatchRule::Component => self.component_len(rest),
            MatchRule::Singleton(rule) => self.singleton_len(rest, rule),
            MatchRule::Sequences => self.sequence_len(rest),
        }
    }

    fn component_len(&self, rest: &str) -> Option<usize> {
        let head = rest.chars().next()?;
        if is_variation_selector(head) || is_tag(head) {
            return None;
        }
        let properties = self.tables.properties.lookup(head);
        if properties.contains(EmojiProperty::Emoji)
            || properties.contains(EmojiProperty::EmojiComponent)
            || is_regional_indicator(head)
        {
            Some(head.len_utf8())
        } else {
            None
        }
    }

    // Longest production first; each failed production falls through to the
    // next shorter one at the same position.
    fn sequence_len(&self, rest: &str) -> Option<usize> {
        self.zwj_sequence_len(rest)
            .or_else(|| self.tag_sequence_len(rest))
            .or_else(|| self.flag_sequence_len(rest))
            .or_else(|| self.keycap_sequence_len(rest))
            .or_else(|| self.modifier_sequence_len(rest))
            .or_else(|| self.singleton_len(rest, SingletonRule::EmojiStyle))
    }

    fn zwj_sequence_len(&self, rest: &str) -> Option<usize> {
        let first = self.element_len(rest)?;
        // Byte ends of every well-formed element prefix: element, element
        // ZWJ element, and so on.
        let mut ends = vec![first];
        let mut pos = first;
        loop {
            let Some(after_joiner) = rest[pos..].strip_prefix(ZERO_WIDTH_JOINER) else {
                break;
            };
            match self.element_len(after_joiner) {
                Some(element) => {
                    pos += ZERO_WIDTH_JOINER.len_utf8() + element;
                    ends.push(pos);
                }
                None => break,
            }
        }
        // Longest listed prefix wins; a single element is never a ZWJ
        // sequence, so the shorter productions get their turn instead.
        for &end in ends.iter().skip(1).rev() {
            if self.tables.sequences.zwj_sequence(&rest[..end], self.config.policy) {
                return Some(end);
            }
        }
        None
    }

    // One joinable element: a modifier sequence, or a singleton in emoji
    // presentation.
    fn element_len(&self, rest: &str) -> Option<usize> {
        self.modifier_sequence_len(rest)
            .or_else(|| self.singleton_len(rest, SingletonRule::EmojiStyle))
    }

    fn tag_sequence_len(&self, rest: &str) -> Option<usize> {
        let mut chars = rest.chars();
        if chars.next()? != BLACK_FLAG {
            return None;
        }
        let mut len = BLACK_FLAG.len_utf8();
        let mut body = 0usize;
        for ch in chars {
            if is_tag_body(ch) {
                len += ch.len_utf8();
                body += 1;
            } else if ch == CANCEL_TAG && body > 0 {
                len += ch.len_utf8();
                if self.tables.sequences.tag_sequence(&rest[..len], self.config.policy) {
                    return Some(len);
                }
                return None;
            } else {
                return None;
            }
        }
        None
    }

    fn flag_sequence_len(&self, rest: &str) -> Option<usize> {
        let mut chars = rest.chars();
        let first = chars.next()?;
        let second = chars.next()?;
        if is_regional_indicator(first)
            && is_regional_indicator(second)
            && self.tables.sequences.flag_pair(first, second)
        {
            Some(first.len_utf8() + second.len_utf8())
        } else {
            None
        }
    }

    fn keycap_sequence_len(&self, rest: &str) -> Option<usize> {
        let mut chars = rest.chars();
        let base = chars.next()?;
        if !is_keycap_base(base) {
            return None;
        }
        if chars.next()? != EMOJI_VARIATION_SELECTOR {
            return None;
        }
        if chars.next()? != COMBINING_ENCLOSING_KEYCAP {
            return None;
        }
        Some(
            base.len_utf8()
                + EMOJI_VARIATION_SELECTOR.len_utf8()
                + COMBINING_ENCLOSING_KEYCAP.len_utf8(),
        )
    }

    fn modifier_sequence_len(&self, rest: &str) -> Option<usize> {
        let mut chars = rest.chars();
        let base = chars.next()?;
        let modifier = chars.next()?;
        if self
            .tables
            .properties
            .lookup(base)
            .contains(EmojiProperty::EmojiModifierBase)
            && self
                .tables
                .properties
                .lookup(modifier)
                .contains(EmojiProperty::EmojiModifier)
        {
            Some(base.len_utf8() + modifier.len_utf8())
        } else {
            None
        }
    }

    fn singleton_len(&self, rest: &str, rule: SingletonRule) -> Option<usize> {
        let mut chars = rest.chars();
        let head = chars.next()?;
        let next = chars.next();
        let properties = self.tables.properties.lookup(head);

        // Components never stand alone; they only appear inside sequences.
        if !properties.contains(EmojiProperty::Emoji)
            || properties.contains(EmojiProperty::EmojiComponent)
        {
            return None;
        }
        let emoji_presentation = properties.contains(EmojiProperty::EmojiPresentation);
        let head_len = head.len_utf8();

        match rule {
            SingletonRule::EmojiStyle => {
                if next == Some(EMOJI_VARIATION_SELECTOR) {
                    Some(head_len + EMOJI_VARIATION_SELECTOR.len_utf8())
                } else if !emoji_presentation || next == Some(TEXT_VARIATION_SELECTOR) {
                    None
                } else {
                    Some(head_len)
                }
            }
            SingletonRule::TextStyle => {
                if next == Some(TEXT_VARIATION_SELECTOR) {
                    Some(head_len + TEXT_VARIATION_SELECTOR.len_utf8())
                } else if emoji_presentation || next == Some(EMOJI_VARIATION_SELECTOR) {
                    None
                } else {
                    Some(head_len)
                }
            }
            SingletonRule::Bare => {
                if next == Some(EMOJI_VARIATION_SELECTOR) {
                    Some(head_len + EMOJI_VARIATION_SELECTOR.len_utf8())
                } else {
                    Some(head_len)
                }
            }
        }
    }
}

// Lazy left-to-right scan; matches never overlap and resume at the end of
// the previous match.
#[derive(Debug, Clone)]
pub struct Matches<'m, 't> {
    matcher: &'m Matcher,
    text: &'t str,
    pos: usize,
}

impl<'t> Iterator for Matches<'_, 't> {
    type Item = EmojiMatch<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let found = self.matcher.find_from(self.text, self.pos)?;
        self.pos = found.end();
        Some(found)
    }
}
