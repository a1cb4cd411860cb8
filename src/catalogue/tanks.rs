/// 標準水族箱尺寸標籤 -> (長, 深, 高)，單位為英吋。
pub const TANKS: &[(&str, [&str; 3])] = &[
    ("2.5g", ["12", "6", "8"]),
    ("5g", ["16", "8", "10"]),
    ("10g", ["20", "10", "12"]),
    ("15g", ["24", "8", "16"]),
    ("20g", ["24", "12", "16"]),
    ("20gl", ["30", "12", "12"]),
    ("29g", ["30", "12", "18"]),
    ("30g", ["36", "12", "16"]),
    ("40gb", ["36", "18", "16"]),
    ("55g", ["48", "13", "21"]),
    ("75g", ["48", "18", "21"]),
    ("90g", ["48", "18", "24"]),
    ("125g", ["72", "18", "21"]),
];
