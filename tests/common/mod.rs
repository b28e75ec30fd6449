use emoji_scanner::{
    CategoryTree, EmojiData, EmojiProperty, PropertySet, PropertyTable, SequenceTable,
};

// A hand-built database slice covering every grammar production: singleton
// emoji of both default presentations, modifier bases and skin tones,
// regional indicators, keycap bases, tag codepoints and two tag sequences,
// and three ZWJ sequences (two recommended, one merely valid).
pub fn emoji_fixture() -> EmojiData {
    let presentation = PropertySet::new(&[
        EmojiProperty::Emoji,
        EmojiProperty::EmojiPresentation,
        EmojiProperty::ExtendedPictographic,
    ]);
    let text_default = PropertySet::new(&[EmojiProperty::Emoji, EmojiProperty::ExtendedPictographic]);
    let modifier_base = PropertySet::new(&[
        EmojiProperty::Emoji,
        EmojiProperty::EmojiPresentation,
        EmojiProperty::EmojiModifierBase,
        EmojiProperty::ExtendedPictographic,
    ]);

    let mut properties = PropertyTable::new();
    for ch in ['😴', '🌵', '🤠', '🤢', '😎', '🏴'] {
        properties.assign_char(ch, presentation);
    }
    for ch in ['♠', '▶', '♀', '☠'] {
        properties.assign_char(ch, text_default);
    }
    for ch in ['🛌', '🤾'] {
        properties.assign_char(ch, modifier_base);
    }
    properties.assign(
        '\u{1F3FB}'..='\u{1F3FF}',
        PropertySet::new(&[
            EmojiProperty::Emoji,
            EmojiProperty::EmojiPresentation,
            EmojiProperty::EmojiModifier,
            EmojiProperty::EmojiComponent,
        ]),
    );
    let component_emoji = PropertySet::new(&[EmojiProperty::Emoji, EmojiProperty::EmojiComponent]);
    properties.assign('\u{1F1E6}'..='\u{1F1FF}', component_emoji);
    properties.assign('0'..='9', component_emoji);
    properties.assign_char('#', component_emoji);
    properties.assign_char('*', component_emoji);
    let component = PropertySet::new(&[EmojiProperty::EmojiComponent]);
    properties.assign_char('\u{200D}', component);
    properties.assign_char('\u{20E3}', component);
    properties.assign_char('\u{FE0F}', component);
    properties.assign('\u{E0020}'..='\u{E007F}', component);

    let mut sequences = SequenceTable::new();
    // PT and DE are listed pairs; PP deliberately is not.
    sequences.add_flag_pair('\u{1F1F5}', '\u{1F1F9}');
    sequences.add_flag_pair('\u{1F1E9}', '\u{1F1EA}');
    sequences.add_tag_sequence(
        "🏴\u{E0067}\u{E0062}\u{E0073}\u{E0063}\u{E0074}\u{E007F}",
        true,
    );
    sequences.add_tag_sequence(
        "🏴\u{E0067}\u{E0062}\u{E0061}\u{E0067}\u{E0062}\u{E007F}",
        false,
    );
    sequences.add_zwj_sequence("🤾\u{1F3FD}\u{200D}♀\u{FE0F}", true);
    sequences.add_zwj_sequence("🏴\u{200D}☠\u{FE0F}", true);
    sequences.add_zwj_sequence("🤠\u{200D}🤢", false);

    let mut categories = CategoryTree::new();
    categories.add(
        "Smileys & People",
        "face-positive",
        "😎",
        "smiling face with sunglasses",
    );
    categories.add("Smileys & People", "face-neutral", "😴", "sleeping face");
    categories.add("Animals & Nature", "plant-other", "🌵", "cactus");
    categories.add("Flags", "country-flag", "🇵🇹", "flag: Portugal");

    EmojiData::with_version(properties, sequences, categories, "16.0")
}
