/// 過濾器名稱與其額定容量 (加侖)。
pub const FILTERS: &[(&str, &str)] = &[
    ("User Defined", "200"),
    ("Aquaclear 20", "20"),
    ("Aquaclear 30", "30"),
    ("Aquaclear 50", "50"),
    ("Aquaclear 70", "70"),
    ("Aquaclear 110", "110"),
    ("Eheim Classic 2211", "40"),
    ("Eheim Classic 2213", "66"),
    ("Eheim Classic 2215", "92"),
    ("Eheim Classic 2217", "159"),
    ("Fluval 107", "30"),
    ("Fluval 207", "45"),
    ("Fluval 307", "70"),
    ("Fluval 407", "100"),
    ("Fluval FX4", "250"),
    ("Fluval FX6", "400"),
    ("Marineland Penguin 100", "20"),
    ("Marineland Penguin 150", "30"),
    ("Marineland Penguin 200", "50"),
    ("Marineland Penguin 350", "75"),
    ("Tetra Whisper 10i", "10"),
    ("Tetra Whisper 20i", "20"),
    ("Tetra Whisper 40i", "40"),
    ("Tetra Whisper 60", "60"),
    ("Sponge Filter Small", "10"),
    ("Sponge Filter Large", "40"),
];
