/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Opcode enums: the value category stored in a property's type bits.
//!
//! Properties that share a value grammar share an enum (all four border
//! styles use [`BorderStyle`], every inset uses [`Inset`], and so on).

use bitflags::bitflags;

use super::Opcode;

opcode_enum! {
    pub enum AlignContent {
        Inherit = 0,
        Stretch = 1,
        FlexStart = 2,
        FlexEnd = 3,
        Center = 4,
        SpaceBetween = 5,
        SpaceAround = 6,
        SpaceEvenly = 7,
    }
}

opcode_enum! {
    pub enum AlignItems {
        Inherit = 0,
        Stretch = 1,
        FlexStart = 2,
        FlexEnd = 3,
        Center = 4,
        Baseline = 5,
    }
}

opcode_enum! {
    pub enum AlignSelf {
        Inherit = 0,
        Stretch = 1,
        FlexStart = 2,
        FlexEnd = 3,
        Center = 4,
        Baseline = 5,
        Auto = 6,
    }
}

opcode_enum! {
    pub enum BackgroundAttachment {
        Inherit = 0,
        Fixed = 1,
        Scroll = 2,
    }
}

opcode_enum! {
    pub enum BackgroundRepeat {
        Inherit = 0,
        RepeatX = 1,
        RepeatY = 2,
        Repeat = 3,
        NoRepeat = 4,
    }
}

opcode_enum! {
    /// Colors that may name the element's own color: background, borders and
    /// column rule.
    pub enum BorderColor {
        Inherit = 0,
        Color = 1,
        CurrentColor = 2,
    }
}

opcode_enum! {
    pub enum BorderCollapse {
        Inherit = 0,
        Separate = 1,
        Collapse = 2,
    }
}

opcode_enum! {
    /// Line styles of borders, outlines and column rules.
    pub enum BorderStyle {
        Inherit = 0,
        None = 1,
        Hidden = 2,
        Dotted = 3,
        Dashed = 4,
        Solid = 5,
        Double = 6,
        Groove = 7,
        Ridge = 8,
        Inset = 9,
        Outset = 10,
    }
}

opcode_enum! {
    /// Line widths of borders, outlines and column rules.
    pub enum BorderWidth {
        Inherit = 0,
        Thin = 1,
        Medium = 2,
        Thick = 3,
        Width = 4,
    }
}

opcode_enum! {
    /// `top`, `right`, `bottom` and `left`.
    pub enum Inset {
        Inherit = 0,
        Set = 1,
        Auto = 2,
    }
}

opcode_enum! {
    pub enum BoxSizing {
        Inherit = 0,
        ContentBox = 1,
        BorderBox = 2,
    }
}

opcode_enum! {
    /// `break-before` and `break-after`.
    pub enum BreakBetween {
        Inherit = 0,
        Auto = 1,
        Avoid = 2,
        Always = 3,
        Left = 4,
        Right = 5,
        Page = 6,
        Column = 7,
        AvoidPage = 8,
        AvoidColumn = 9,
    }
}

opcode_enum! {
    /// Shares its discriminants with [`BreakBetween`].
    pub enum BreakInside {
        Inherit = 0,
        Auto = 1,
        Avoid = 2,
        AvoidPage = 8,
        AvoidColumn = 9,
    }
}

opcode_enum! {
    pub enum CaptionSide {
        Inherit = 0,
        Top = 1,
        Bottom = 2,
    }
}

opcode_enum! {
    pub enum Clear {
        Inherit = 0,
        None = 1,
        Left = 2,
        Right = 3,
        Both = 4,
    }
}

opcode_enum! {
    pub enum Clip {
        Inherit = 0,
        Auto = 1,
        Rect = 2,
    }
}

opcode_enum! {
    /// The `color` property itself.
    pub enum ColorOpcode {
        Inherit = 0,
        Color = 1,
    }
}

opcode_enum! {
    pub enum ColumnCount {
        Inherit = 0,
        Auto = 1,
        Set = 2,
    }
}

opcode_enum! {
    pub enum ColumnFill {
        Inherit = 0,
        Balance = 1,
        Auto = 2,
    }
}

opcode_enum! {
    pub enum ColumnSpan {
        Inherit = 0,
        None = 1,
        All = 2,
    }
}

opcode_enum! {
    pub enum ColumnWidth {
        Inherit = 0,
        Auto = 1,
        Set = 2,
    }
}

opcode_enum! {
    pub enum Content {
        Inherit = 0,
        None = 1,
        Normal = 2,
        Set = 3,
    }
}

opcode_enum! {
    /// `counter-increment` and `counter-reset`.
    pub enum Counters {
        Inherit = 0,
        Named = 1,
        None = 2,
    }
}

opcode_enum! {
    pub enum Cursor {
        Inherit = 0,
        Auto = 1,
        Crosshair = 2,
        Default = 3,
        Pointer = 4,
        Move = 5,
        EResize = 6,
        NeResize = 7,
        NwResize = 8,
        NResize = 9,
        SeResize = 10,
        SwResize = 11,
        SResize = 12,
        WResize = 13,
        Text = 14,
        Wait = 15,
        Help = 16,
        Progress = 17,
    }
}

opcode_enum! {
    pub enum Direction {
        Inherit = 0,
        Ltr = 1,
        Rtl = 2,
    }
}

opcode_enum! {
    pub enum Display {
        Inherit = 0,
        Inline = 1,
        Block = 2,
        ListItem = 3,
        RunIn = 4,
        InlineBlock = 5,
        Table = 6,
        InlineTable = 7,
        TableRowGroup = 8,
        TableHeaderGroup = 9,
        TableFooterGroup = 10,
        TableRow = 11,
        TableColumnGroup = 12,
        TableColumn = 13,
        TableCell = 14,
        TableCaption = 15,
        None = 16,
        Flex = 17,
        InlineFlex = 18,
        Grid = 19,
        InlineGrid = 20,
    }
}

opcode_enum! {
    pub enum EmptyCells {
        Inherit = 0,
        Show = 1,
        Hide = 2,
    }
}

opcode_enum! {
    /// Properties whose only non-inherit category is an explicit value:
    /// flex factors, opacity, order, orphans, widows, padding, text-indent,
    /// background-position and border-spacing.
    pub enum Explicit {
        Inherit = 0,
        Set = 1,
    }
}

opcode_enum! {
    pub enum FlexBasis {
        Inherit = 0,
        Set = 1,
        Auto = 2,
        Content = 3,
    }
}

opcode_enum! {
    pub enum FlexDirection {
        Inherit = 0,
        Row = 1,
        RowReverse = 2,
        Column = 3,
        ColumnReverse = 4,
    }
}

opcode_enum! {
    pub enum FlexWrap {
        Inherit = 0,
        Nowrap = 1,
        Wrap = 2,
        WrapReverse = 3,
    }
}

opcode_enum! {
    pub enum Float {
        Inherit = 0,
        Left = 1,
        Right = 2,
        None = 3,
    }
}

opcode_enum! {
    /// The generic family used when none of the named families is
    /// available.
    pub enum FontFamily {
        Inherit = 0,
        Serif = 1,
        SansSerif = 2,
        Cursive = 3,
        Fantasy = 4,
        Monospace = 5,
    }
}

opcode_enum! {
    pub enum FontSize {
        Inherit = 0,
        XxSmall = 1,
        XSmall = 2,
        Small = 3,
        Medium = 4,
        Large = 5,
        XLarge = 6,
        XxLarge = 7,
        Larger = 8,
        Smaller = 9,
        Dimension = 10,
    }
}

opcode_enum! {
    pub enum FontStyle {
        Inherit = 0,
        Normal = 1,
        Italic = 2,
        Oblique = 3,
    }
}

opcode_enum! {
    pub enum FontVariant {
        Inherit = 0,
        Normal = 1,
        SmallCaps = 2,
    }
}

opcode_enum! {
    pub enum FontWeight {
        Inherit = 0,
        Normal = 1,
        Bold = 2,
        Bolder = 3,
        Lighter = 4,
        W100 = 5,
        W200 = 6,
        W300 = 7,
        W400 = 8,
        W500 = 9,
        W600 = 10,
        W700 = 11,
        W800 = 12,
        W900 = 13,
    }
}

opcode_enum! {
    /// `background-image` and `list-style-image`.
    pub enum Image {
        Inherit = 0,
        Image = 1,
        None = 2,
    }
}

opcode_enum! {
    pub enum JustifyContent {
        Inherit = 0,
        FlexStart = 1,
        FlexEnd = 2,
        Center = 3,
        SpaceBetween = 4,
        SpaceAround = 5,
        SpaceEvenly = 6,
    }
}

opcode_enum! {
    pub enum LineHeight {
        Inherit = 0,
        Number = 1,
        Dimension = 2,
        Normal = 3,
    }
}

opcode_enum! {
    pub enum ListStylePosition {
        Inherit = 0,
        Inside = 1,
        Outside = 2,
    }
}

opcode_enum! {
    pub enum ListStyleType {
        Inherit = 0,
        Disc = 1,
        Circle = 2,
        Square = 3,
        Decimal = 4,
        DecimalLeadingZero = 5,
        LowerRoman = 6,
        UpperRoman = 7,
        LowerGreek = 8,
        LowerLatin = 9,
        UpperLatin = 10,
        Armenian = 11,
        Georgian = 12,
        LowerAlpha = 13,
        UpperAlpha = 14,
        None = 15,
        Binary = 16,
        Octal = 17,
        LowerHexadecimal = 18,
        UpperHexadecimal = 19,
        ArabicIndic = 20,
        LowerArmenian = 21,
        UpperArmenian = 22,
        Bengali = 23,
        Cambodian = 24,
        Khmer = 25,
        CjkDecimal = 26,
        Devanagari = 27,
        Gujarati = 28,
        Gurmukhi = 29,
        Hebrew = 30,
        Kannada = 31,
        Lao = 32,
        Malayalam = 33,
        Mongolian = 34,
        Myanmar = 35,
        Oriya = 36,
        Persian = 37,
        Tamil = 38,
        Telugu = 39,
        Thai = 40,
        Tibetan = 41,
        CjkEarthlyBranch = 42,
        CjkHeavenlyStem = 43,
        Hiragana = 44,
        HiraganaIroha = 45,
        Katakana = 46,
        KatakanaIroha = 47,
        JapaneseInformal = 48,
        JapaneseFormal = 49,
        KoreanHangulFormal = 50,
        KoreanHanjaInformal = 51,
        KoreanHanjaFormal = 52,
    }
}

opcode_enum! {
    pub enum Margin {
        Inherit = 0,
        Set = 1,
        Auto = 2,
    }
}

opcode_enum! {
    /// `max-width` and `max-height`.
    pub enum MaxSize {
        Inherit = 0,
        Set = 1,
        None = 2,
    }
}

opcode_enum! {
    /// `min-width` and `min-height`.
    pub enum MinSize {
        Inherit = 0,
        Set = 1,
        Auto = 2,
    }
}

opcode_enum! {
    pub enum OutlineColor {
        Inherit = 0,
        CurrentColor = 1,
        Invert = 2,
        Color = 3,
    }
}

opcode_enum! {
    pub enum Overflow {
        Inherit = 0,
        Visible = 1,
        Hidden = 2,
        Scroll = 3,
        Auto = 4,
    }
}

opcode_enum! {
    /// `page-break-before` and `page-break-after`.
    pub enum PageBreak {
        Inherit = 0,
        Auto = 1,
        Avoid = 2,
        Always = 3,
        Left = 4,
        Right = 5,
    }
}

opcode_enum! {
    pub enum PageBreakInside {
        Inherit = 0,
        Auto = 1,
        Avoid = 2,
    }
}

opcode_enum! {
    pub enum Position {
        Inherit = 0,
        Static = 1,
        Relative = 2,
        Absolute = 3,
        Fixed = 4,
    }
}

opcode_enum! {
    pub enum Quotes {
        Inherit = 0,
        String = 1,
        None = 2,
    }
}

opcode_enum! {
    /// `width` and `height`.
    pub enum Size {
        Inherit = 0,
        Set = 1,
        Auto = 2,
    }
}

opcode_enum! {
    /// `letter-spacing`, `word-spacing` and `column-gap`.
    pub enum Spacing {
        Inherit = 0,
        Set = 1,
        Normal = 2,
    }
}

opcode_enum! {
    pub enum TableLayout {
        Inherit = 0,
        Auto = 1,
        Fixed = 2,
    }
}

opcode_enum! {
    pub enum TextAlign {
        Inherit = 0,
        Left = 1,
        Right = 2,
        Center = 3,
        Justify = 4,
        /// Start of the line, depending on direction.
        Default = 5,
        /// Legacy HTML alignment that also aligns nested blocks.
        ServoLeft = 6,
        ServoCenter = 7,
        ServoRight = 8,
    }
}

opcode_enum! {
    pub enum TextTransform {
        Inherit = 0,
        Capitalize = 1,
        Uppercase = 2,
        Lowercase = 3,
        None = 4,
    }
}

opcode_enum! {
    pub enum UnicodeBidi {
        Inherit = 0,
        Normal = 1,
        Embed = 2,
        BidiOverride = 3,
    }
}

opcode_enum! {
    pub enum VerticalAlign {
        Inherit = 0,
        Baseline = 1,
        Sub = 2,
        Super = 3,
        Top = 4,
        TextTop = 5,
        Middle = 6,
        Bottom = 7,
        TextBottom = 8,
        Set = 9,
    }
}

opcode_enum! {
    pub enum Visibility {
        Inherit = 0,
        Visible = 1,
        Hidden = 2,
        Collapse = 3,
    }
}

opcode_enum! {
    pub enum WhiteSpace {
        Inherit = 0,
        Normal = 1,
        Pre = 2,
        Nowrap = 3,
        PreWrap = 4,
        PreLine = 5,
    }
}

opcode_enum! {
    pub enum WritingMode {
        Inherit = 0,
        HorizontalTb = 1,
        VerticalRl = 2,
        VerticalLr = 3,
    }
}

opcode_enum! {
    pub enum ZIndex {
        Inherit = 0,
        Set = 1,
        Auto = 2,
    }
}

bitflags! {
    /// `text-decoration` is a set of lines rather than a single keyword. The
    /// empty set means inherit.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "servo", derive(::serde::Deserialize, ::serde::Serialize))]
    pub struct TextDecoration: u8 {
        const UNDERLINE = 1 << 0;
        const OVERLINE = 1 << 1;
        const LINE_THROUGH = 1 << 2;
        const BLINK = 1 << 3;
        const NONE = 1 << 4;
    }
}

impl Opcode for TextDecoration {
    const INHERIT: Self = TextDecoration::empty();

    #[inline]
    fn from_bits(bits: u32) -> Self {
        TextDecoration::from_bits_truncate(bits as u8)
    }

    #[inline]
    fn to_bits(self) -> u32 {
        self.bits() as u32
    }
}

impl FontSize {
    /// Scale factor against the client default size for the absolute size
    /// keywords.
    pub fn keyword_factor(self) -> Option<f32> {
        Some(match self {
            FontSize::XxSmall => 0.5625,
            FontSize::XSmall => 0.625,
            FontSize::Small => 0.8125,
            FontSize::Medium => 1.0,
            FontSize::Large => 1.125,
            FontSize::XLarge => 1.5,
            FontSize::XxLarge => 2.0,
            _ => return None,
        })
    }
}

impl BorderStyle {
    /// Whether a line with this style takes no space.
    #[inline]
    pub fn is_none_or_hidden(self) -> bool {
        matches!(self, BorderStyle::None | BorderStyle::Hidden)
    }
}

impl Position {
    #[inline]
    pub fn is_absolutely_positioned(self) -> bool {
        matches!(self, Position::Absolute | Position::Fixed)
    }
}
