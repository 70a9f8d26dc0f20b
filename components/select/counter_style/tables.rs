/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The predefined counter styles.
//!
//! <https://drafts.csswg.org/css-counter-styles/#predefined-counters>

use super::{CounterStyle, System};

const BASE: CounterStyle = CounterStyle {
    name: "",
    system: System::Numeric,
    fallback: None,
    symbols: &[],
    weights: &[],
    range: (i32::MIN, i32::MAX),
    pad: (0, ""),
    negative: ("-", ""),
    prefix: "",
    suffix: ".",
};

const CJK_SUFFIX: &str = "\u{3001}";

macro_rules! numeric_styles {
    ($($style:ident($name:literal) = [$($symbol:literal),+] $(, suffix: $suffix:expr)?;)+) => {
        $(
            pub static $style: CounterStyle = CounterStyle {
                name: $name,
                fallback: Some(&DECIMAL),
                symbols: &[$($symbol),+],
                $( suffix: $suffix, )?
                ..BASE
            };
        )+
    };
}

const DECIMAL_SYMBOLS: &[&str] = &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

numeric_styles! {
    BINARY("binary") = ["0", "1"];
    OCTAL("octal") = ["0", "1", "2", "3", "4", "5", "6", "7"];
    LOWER_HEXADECIMAL("lower-hexadecimal") = [
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "a", "b", "c", "d", "e", "f"
    ];
    UPPER_HEXADECIMAL("upper-hexadecimal") = [
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "A", "B", "C", "D", "E", "F"
    ];
    ARABIC_INDIC("arabic-indic") = ["٠", "١", "٢", "٣", "٤", "٥", "٦", "٧", "٨", "٩"];
    BENGALI("bengali") = ["০", "১", "২", "৩", "৪", "৫", "৬", "৭", "৮", "৯"];
    CAMBODIAN("cambodian") = ["០", "១", "២", "៣", "៤", "៥", "៦", "៧", "៨", "៩"];
    CJK_DECIMAL("cjk-decimal") = ["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"],
        suffix: CJK_SUFFIX;
    DEVANAGARI("devanagari") = ["०", "१", "२", "३", "४", "५", "६", "७", "८", "९"];
    GUJARATI("gujarati") = ["૦", "૧", "૨", "૩", "૪", "૫", "૬", "૭", "૮", "૯"];
    GURMUKHI("gurmukhi") = ["੦", "੧", "੨", "੩", "੪", "੫", "੬", "੭", "੮", "੯"];
    KANNADA("kannada") = ["೦", "೧", "೨", "೩", "೪", "೫", "೬", "೭", "೮", "೯"];
    LAO("lao") = ["໐", "໑", "໒", "໓", "໔", "໕", "໖", "໗", "໘", "໙"];
    MALAYALAM("malayalam") = ["൦", "൧", "൨", "൩", "൪", "൫", "൬", "൭", "൮", "൯"];
    MONGOLIAN("mongolian") = ["᠐", "᠑", "᠒", "᠓", "᠔", "᠕", "᠖", "᠗", "᠘", "᠙"];
    MYANMAR("myanmar") = ["၀", "၁", "၂", "၃", "၄", "၅", "၆", "၇", "၈", "၉"];
    ORIYA("oriya") = ["୦", "୧", "୨", "୩", "୪", "୫", "୬", "୭", "୮", "୯"];
    PERSIAN("persian") = ["۰", "۱", "۲", "۳", "۴", "۵", "۶", "۷", "۸", "۹"];
    TAMIL("tamil") = ["௦", "௧", "௨", "௩", "௪", "௫", "௬", "௭", "௮", "௯"];
    TELUGU("telugu") = ["౦", "౧", "౨", "౩", "౪", "౫", "౬", "౭", "౮", "౯"];
    THAI("thai") = ["๐", "๑", "๒", "๓", "๔", "๕", "๖", "๗", "๘", "๙"];
    TIBETAN("tibetan") = ["༠", "༡", "༢", "༣", "༤", "༥", "༦", "༧", "༨", "༩"];
}

pub static DECIMAL: CounterStyle = CounterStyle {
    name: "decimal",
    symbols: DECIMAL_SYMBOLS,
    ..BASE
};

pub static DECIMAL_LEADING_ZERO: CounterStyle = CounterStyle {
    name: "decimal-leading-zero",
    symbols: DECIMAL_SYMBOLS,
    pad: (2, "0"),
    ..BASE
};

pub static DISC: CounterStyle = CounterStyle {
    name: "disc",
    system: System::Cyclic,
    symbols: &["\u{2022}"],
    suffix: " ",
    ..BASE
};

pub static CIRCLE: CounterStyle = CounterStyle {
    name: "circle",
    system: System::Cyclic,
    symbols: &["\u{25cb}"],
    suffix: " ",
    ..BASE
};

pub static SQUARE: CounterStyle = CounterStyle {
    name: "square",
    system: System::Cyclic,
    symbols: &["\u{25aa}"],
    suffix: " ",
    ..BASE
};

const ALPHABETIC: CounterStyle = CounterStyle {
    system: System::Alphabetic,
    ..BASE
};

pub static LOWER_ALPHA: CounterStyle = CounterStyle {
    name: "lower-alpha",
    fallback: Some(&DECIMAL),
    symbols: &[
        "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
        "s", "t", "u", "v", "w", "x", "y", "z",
    ],
    ..ALPHABETIC
};

pub static UPPER_ALPHA: CounterStyle = CounterStyle {
    name: "upper-alpha",
    fallback: Some(&DECIMAL),
    symbols: &[
        "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P", "Q", "R",
        "S", "T", "U", "V", "W", "X", "Y", "Z",
    ],
    ..ALPHABETIC
};

pub static LOWER_GREEK: CounterStyle = CounterStyle {
    name: "lower-greek",
    fallback: Some(&DECIMAL),
    symbols: &[
        "α", "β", "γ", "δ", "ε", "ζ", "η", "θ", "ι", "κ", "λ", "μ", "ν", "ξ", "ο", "π", "ρ", "σ",
        "τ", "υ", "φ", "χ", "ψ", "ω",
    ],
    ..ALPHABETIC
};

pub static CJK_EARTHLY_BRANCH: CounterStyle = CounterStyle {
    name: "cjk-earthly-branch",
    fallback: Some(&DECIMAL),
    symbols: &["子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥"],
    suffix: CJK_SUFFIX,
    ..ALPHABETIC
};

pub static CJK_HEAVENLY_STEM: CounterStyle = CounterStyle {
    name: "cjk-heavenly-stem",
    fallback: Some(&DECIMAL),
    symbols: &["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"],
    suffix: CJK_SUFFIX,
    ..ALPHABETIC
};

pub static HIRAGANA: CounterStyle = CounterStyle {
    name: "hiragana",
    fallback: Some(&DECIMAL),
    symbols: &[
        "あ", "い", "う", "え", "お", "か", "き", "く", "け", "こ", "さ", "し", "す", "せ", "そ",
        "た", "ち", "つ", "て", "と", "な", "に", "ぬ", "ね", "の", "は", "ひ", "ふ", "へ", "ほ",
        "ま", "み", "む", "め", "も", "や", "ゆ", "よ", "ら", "り", "る", "れ", "ろ", "わ", "ゐ",
        "ゑ", "を", "ん",
    ],
    suffix: CJK_SUFFIX,
    ..ALPHABETIC
};

pub static HIRAGANA_IROHA: CounterStyle = CounterStyle {
    name: "hiragana-iroha",
    fallback: Some(&DECIMAL),
    symbols: &[
        "い", "ろ", "は", "に", "ほ", "へ", "と", "ち", "り", "ぬ", "る", "を", "わ", "か", "よ",
        "た", "れ", "そ", "つ", "ね", "な", "ら", "む", "う", "ゐ", "の", "お", "く", "や", "ま",
        "け", "ふ", "こ", "え", "て", "あ", "さ", "き", "ゆ", "め", "み", "し", "ゑ", "ひ", "も",
        "せ", "す",
    ],
    suffix: CJK_SUFFIX,
    ..ALPHABETIC
};

pub static KATAKANA: CounterStyle = CounterStyle {
    name: "katakana",
    fallback: Some(&DECIMAL),
    symbols: &[
        "ア", "イ", "ウ", "エ", "オ", "カ", "キ", "ク", "ケ", "コ", "サ", "シ", "ス", "セ", "ソ",
        "タ", "チ", "ツ", "テ", "ト", "ナ", "ニ", "ヌ", "ネ", "ノ", "ハ", "ヒ", "フ", "ヘ", "ホ",
        "マ", "ミ", "ム", "メ", "モ", "ヤ", "ユ", "ヨ", "ラ", "リ", "ル", "レ", "ロ", "ワ", "ヰ",
        "ヱ", "ヲ", "ン",
    ],
    suffix: CJK_SUFFIX,
    ..ALPHABETIC
};

pub static KATAKANA_IROHA: CounterStyle = CounterStyle {
    name: "katakana-iroha",
    fallback: Some(&DECIMAL),
    symbols: &[
        "イ", "ロ", "ハ", "ニ", "ホ", "ヘ", "ト", "チ", "リ", "ヌ", "ル", "ヲ", "ワ", "カ", "ヨ",
        "タ", "レ", "ソ", "ツ", "ネ", "ナ", "ラ", "ム", "ウ", "ヰ", "ノ", "オ", "ク", "ヤ", "マ",
        "ケ", "フ", "コ", "エ", "テ", "ア", "サ", "キ", "ユ", "メ", "ミ", "シ", "ヱ", "ヒ", "モ",
        "セ", "ス",
    ],
    suffix: CJK_SUFFIX,
    ..ALPHABETIC
};

const ROMAN: CounterStyle = CounterStyle {
    system: System::Roman,
    weights: &[1000, 500, 100, 50, 10, 5, 1],
    range: (1, 3999),
    ..BASE
};

pub static UPPER_ROMAN: CounterStyle = CounterStyle {
    name: "upper-roman",
    fallback: Some(&DECIMAL),
    symbols: &["M", "D", "C", "L", "X", "V", "I"],
    ..ROMAN
};

pub static LOWER_ROMAN: CounterStyle = CounterStyle {
    name: "lower-roman",
    fallback: Some(&DECIMAL),
    symbols: &["m", "d", "c", "l", "x", "v", "i"],
    ..ROMAN
};

const ADDITIVE: CounterStyle = CounterStyle {
    system: System::Additive,
    ..BASE
};

const ARMENIAN: CounterStyle = CounterStyle {
    weights: &[
        9000, 8000, 7000, 6000, 5000, 4000, 3000, 2000, 1000, 900, 800, 700, 600, 500, 400, 300,
        200, 100, 90, 80, 70, 60, 50, 40, 30, 20, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1,
    ],
    range: (1, 9999),
    ..ADDITIVE
};

pub static UPPER_ARMENIAN: CounterStyle = CounterStyle {
    name: "upper-armenian",
    fallback: Some(&DECIMAL),
    symbols: &[
        "Ք", "Փ", "Ւ", "Ց", "Ր", "Տ", "Վ", "Ս", "Ռ", "Ջ", "Պ", "Չ", "Ո", "Շ", "Ն", "Յ", "Մ", "Ճ",
        "Ղ", "Ձ", "Հ", "Կ", "Ծ", "Խ", "Լ", "Ի", "Ժ", "Թ", "Ը", "Է", "Զ", "Ե", "Դ", "Գ", "Բ", "Ա",
    ],
    ..ARMENIAN
};

pub static LOWER_ARMENIAN: CounterStyle = CounterStyle {
    name: "lower-armenian",
    fallback: Some(&DECIMAL),
    symbols: &[
        "ք", "փ", "ւ", "ց", "ր", "տ", "վ", "ս", "ռ", "ջ", "պ", "չ", "ո", "շ", "ն", "յ", "մ", "ճ",
        "ղ", "ձ", "հ", "կ", "ծ", "խ", "լ", "ի", "ժ", "թ", "ը", "է", "զ", "ե", "դ", "գ", "բ", "ա",
    ],
    ..ARMENIAN
};

pub static GEORGIAN: CounterStyle = CounterStyle {
    name: "georgian",
    fallback: Some(&DECIMAL),
    symbols: &[
        "ჵ", "ჰ", "ჯ", "ჴ", "ხ", "ჭ", "წ", "ძ", "ც", "ჩ", "შ", "ყ", "ღ", "ქ", "ფ", "ჳ", "ტ", "ს",
        "რ", "ჟ", "პ", "ო", "ჲ", "ნ", "მ", "ლ", "კ", "ი", "თ", "ჱ", "ზ", "ვ", "ე", "დ", "გ", "ბ",
        "ა",
    ],
    weights: &[
        10000, 9000, 8000, 7000, 6000, 5000, 4000, 3000, 2000, 1000, 900, 800, 700, 600, 500, 400,
        300, 200, 100, 90, 80, 70, 60, 50, 40, 30, 20, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1,
    ],
    range: (1, 19999),
    ..ADDITIVE
};

/// Thousands carry a geresh; 15 and 16 avoid spelling a divine name.
pub static HEBREW: CounterStyle = CounterStyle {
    name: "hebrew",
    fallback: Some(&DECIMAL),
    symbols: &[
        "\u{5d9}\u{5f3}",
        "\u{5d8}\u{5f3}",
        "\u{5d7}\u{5f3}",
        "\u{5d6}\u{5f3}",
        "\u{5d5}\u{5f3}",
        "\u{5d4}\u{5f3}",
        "\u{5d3}\u{5f3}",
        "\u{5d2}\u{5f3}",
        "\u{5d1}\u{5f3}",
        "\u{5d0}\u{5f3}",
        "\u{5ea}",
        "\u{5e9}",
        "\u{5e8}",
        "\u{5e7}",
        "\u{5e6}",
        "\u{5e4}",
        "\u{5e2}",
        "\u{5e1}",
        "\u{5e0}",
        "\u{5de}",
        "\u{5dc}",
        "\u{5db}",
        "\u{5d9}\u{5d8}",
        "\u{5d9}\u{5d7}",
        "\u{5d9}\u{5d6}",
        "\u{5d8}\u{5d6}",
        "\u{5d8}\u{5d5}",
        "\u{5d9}",
        "\u{5d8}",
        "\u{5d7}",
        "\u{5d6}",
        "\u{5d5}",
        "\u{5d4}",
        "\u{5d3}",
        "\u{5d2}",
        "\u{5d1}",
        "\u{5d0}",
    ],
    weights: &[
        10000, 9000, 8000, 7000, 6000, 5000, 4000, 3000, 2000, 1000, 400, 300, 200, 100, 90, 80,
        70, 60, 50, 40, 30, 20, 19, 18, 17, 16, 15, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1,
    ],
    range: (1, 10999),
    ..ADDITIVE
};

/// Weights of the CJK and Korean spelled out systems. The trailing zero
/// weight names the symbol for zero.
const CJK_WEIGHTS: &[i32] = &[
    9000, 8000, 7000, 6000, 5000, 4000, 3000, 2000, 1000, 900, 800, 700, 600, 500, 400, 300, 200,
    100, 90, 80, 70, 60, 50, 40, 30, 20, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1, 0,
];

const JAPANESE: CounterStyle = CounterStyle {
    system: System::Additive,
    weights: CJK_WEIGHTS,
    range: (-9999, 9999),
    negative: ("マイナス", ""),
    suffix: CJK_SUFFIX,
    ..BASE
};

const KOREAN: CounterStyle = CounterStyle {
    negative: ("마이너스 ", ""),
    suffix: ", ",
    ..JAPANESE
};

pub static JAPANESE_INFORMAL: CounterStyle = CounterStyle {
    name: "japanese-informal",
    fallback: Some(&CJK_DECIMAL),
    symbols: &[
        "九千", "八千", "七千", "六千", "五千", "四千", "三千", "二千", "千", "九百", "八百",
        "七百", "六百", "五百", "四百", "三百", "二百", "百", "九十", "八十", "七十", "六十",
        "五十", "四十", "三十", "二十", "十", "九", "八", "七", "六", "五", "四", "三", "二",
        "一", "〇",
    ],
    ..JAPANESE
};

pub static JAPANESE_FORMAL: CounterStyle = CounterStyle {
    name: "japanese-formal",
    fallback: Some(&CJK_DECIMAL),
    symbols: &[
        "九阡", "八阡", "七阡", "六阡", "伍阡", "四阡", "参阡", "弐阡", "壱阡", "九百", "八百",
        "七百", "六百", "伍百", "四百", "参百", "弐百", "壱百", "九拾", "八拾", "七拾", "六拾",
        "伍拾", "四拾", "参拾", "弐拾", "壱拾", "九", "八", "七", "六", "伍", "四", "参", "弐",
        "壱", "零",
    ],
    ..JAPANESE
};

pub static KOREAN_HANGUL_FORMAL: CounterStyle = CounterStyle {
    name: "korean-hangul-formal",
    fallback: Some(&CJK_DECIMAL),
    symbols: &[
        "구천", "팔천", "칠천", "육천", "오천", "사천", "삼천", "이천", "일천", "구백", "팔백",
        "칠백", "육백", "오백", "사백", "삼백", "이백", "일백", "구십", "팔십", "칠십", "육십",
        "오십", "사십", "삼십", "이십", "일십", "구", "팔", "칠", "육", "오", "사", "삼", "이",
        "일", "영",
    ],
    ..KOREAN
};

pub static KOREAN_HANJA_INFORMAL: CounterStyle = CounterStyle {
    name: "korean-hanja-informal",
    fallback: Some(&CJK_DECIMAL),
    symbols: &[
        "九千", "八千", "七千", "六千", "五千", "四千", "三千", "二千", "千", "九百", "八百",
        "七百", "六百", "五百", "四百", "三百", "二百", "百", "九十", "八十", "七十", "六十",
        "五十", "四十", "三十", "二十", "十", "九", "八", "七", "六", "五", "四", "三", "二",
        "一", "零",
    ],
    ..KOREAN
};

pub static KOREAN_HANJA_FORMAL: CounterStyle = CounterStyle {
    name: "korean-hanja-formal",
    fallback: Some(&CJK_DECIMAL),
    symbols: &[
        "九仟", "八仟", "七仟", "六仟", "五仟", "四仟", "參仟", "貳仟", "壹仟", "九百", "八百",
        "七百", "六百", "五百", "四百", "參百", "貳百", "壹百", "九拾", "八拾", "七拾", "六拾",
        "五拾", "四拾", "參拾", "貳拾", "壹拾", "九", "八", "七", "六", "五", "四", "參", "貳",
        "壹", "零",
    ],
    ..KOREAN
};

/// Every predefined style, for lookups by name.
pub static ALL_COUNTER_STYLES: &[&CounterStyle] = &[
    &DECIMAL,
    &DECIMAL_LEADING_ZERO,
    &BINARY,
    &OCTAL,
    &LOWER_HEXADECIMAL,
    &UPPER_HEXADECIMAL,
    &ARABIC_INDIC,
    &BENGALI,
    &CAMBODIAN,
    &CJK_DECIMAL,
    &DEVANAGARI,
    &GUJARATI,
    &GURMUKHI,
    &KANNADA,
    &LAO,
    &MALAYALAM,
    &MONGOLIAN,
    &MYANMAR,
    &ORIYA,
    &PERSIAN,
    &TAMIL,
    &TELUGU,
    &THAI,
    &TIBETAN,
    &DISC,
    &CIRCLE,
    &SQUARE,
    &LOWER_ALPHA,
    &UPPER_ALPHA,
    &LOWER_GREEK,
    &CJK_EARTHLY_BRANCH,
    &CJK_HEAVENLY_STEM,
    &HIRAGANA,
    &HIRAGANA_IROHA,
    &KATAKANA,
    &KATAKANA_IROHA,
    &UPPER_ROMAN,
    &LOWER_ROMAN,
    &UPPER_ARMENIAN,
    &LOWER_ARMENIAN,
    &GEORGIAN,
    &HEBREW,
    &JAPANESE_INFORMAL,
    &JAPANESE_FORMAL,
    &KOREAN_HANGUL_FORMAL,
    &KOREAN_HANJA_INFORMAL,
    &KOREAN_HANJA_FORMAL,
];
