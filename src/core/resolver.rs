//! Fuzzy Resolver: 把使用者輸入的自由文字對應到固定的標準名稱。
//!
//! 分數不受字詞順序、標點、空白與大小寫影響：
//! - 先把字串切成小寫的英數字詞
//! - 主分數取直接比對、排序字詞比對 (token sort) 與字詞集合比對
//!   (token set) 的最大值，後兩者乘上 0.95
//! - 兩字串長度差 1.5 倍以上時，再加入部分比對 (partial)：短字串對長字串
//!   中最相近的同長度片段，乘上 0.9 (長度差 8 倍以上時 0.6)
//! - 主分數相同時以 token sort 分數決勝，兩者都相同時先出現的候選者勝出
//!
//! 比對永遠不會「失敗」：只要候選清單不是空的就一定回傳分數最高者，
//! 是否接受由呼叫端決定。

use std::collections::BTreeSet;

const TOKEN_SCALE: f64 = 0.95;
const PARTIAL_MIN_LENGTH_RATIO: f64 = 1.5;
const PARTIAL_SCALE: f64 = 0.9;
const LONG_PARTIAL_LENGTH_RATIO: f64 = 8.0;
const LONG_PARTIAL_SCALE: f64 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Score {
    /// 0-100
    pub primary: u32,
    /// 0-100，只在主分數相同時使用
    pub secondary: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub candidate: &'a str,
    pub score: Score,
}

fn tokens(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b) * 100.0
}

/// 短字串與長字串中每個同長度片段比對，取最高分。
fn partial_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return 0.0;
    }

    long.windows(short.len())
        .map(|window| {
            let distance = strsim::generic_levenshtein(&short, &window.to_vec());
            (1.0 - distance as f64 / short.len() as f64) * 100.0
        })
        .fold(0.0, f64::max)
}

fn sorted_joined(tokens: &[String]) -> String {
    let mut sorted = tokens.to_vec();
    sorted.sort();
    sorted.join(" ")
}

fn token_sort_ratio(query: &[String], candidate: &[String]) -> f64 {
    ratio(&sorted_joined(query), &sorted_joined(candidate))
}

fn token_set_ratio(query: &[String], candidate: &[String]) -> f64 {
    let q: BTreeSet<&str> = query.iter().map(String::as_str).collect();
    let c: BTreeSet<&str> = candidate.iter().map(String::as_str).collect();

    let common: Vec<&str> = q.intersection(&c).copied().collect();
    let only_query: Vec<&str> = q.difference(&c).copied().collect();
    let only_candidate: Vec<&str> = c.difference(&q).copied().collect();

    let base = common.join(" ");
    let with_query = [common.as_slice(), only_query.as_slice()].concat().join(" ");
    let with_candidate = [common.as_slice(), only_candidate.as_slice()]
        .concat()
        .join(" ");

    ratio(&base, &with_query)
        .max(ratio(&base, &with_candidate))
        .max(ratio(&with_query, &with_candidate))
}

/// 計算 `query` 與單一候選者的相似度。
pub fn similarity(query: &str, candidate: &str) -> Score {
    let q = tokens(query);
    let c = tokens(candidate);
    if q.is_empty() || c.is_empty() {
        return Score::default();
    }

    let query_text = q.join(" ");
    let candidate_text = c.join(" ");
    let sort = token_sort_ratio(&q, &c);
    let mut primary = ratio(&query_text, &candidate_text)
        .max(sort * TOKEN_SCALE)
        .max(token_set_ratio(&q, &c) * TOKEN_SCALE);

    let (shorter, longer) = {
        let (a, b) = (query_text.chars().count(), candidate_text.chars().count());
        (a.min(b) as f64, a.max(b) as f64)
    };
    let length_ratio = longer / shorter;
    if length_ratio >= PARTIAL_MIN_LENGTH_RATIO {
        let scale = if length_ratio < LONG_PARTIAL_LENGTH_RATIO {
            PARTIAL_SCALE
        } else {
            LONG_PARTIAL_SCALE
        };
        let partial = partial_ratio(&query_text, &candidate_text) * scale;
        let partial_sort =
            partial_ratio(&sorted_joined(&q), &sorted_joined(&c)) * TOKEN_SCALE * scale;
        primary = primary.max(partial).max(partial_sort);
    }

    Score {
        primary: primary.round() as u32,
        secondary: sort.round() as u32,
    }
}

/// 回傳分數最高的候選者；只有候選清單為空時回傳 `None`。
pub fn best_match<'a, I>(query: &str, candidates: I) -> Option<Match<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<Match<'a>> = None;
    for candidate in candidates {
        let score = similarity(query, candidate);
        // 嚴格大於：同分時保留先出現者
        if best.map_or(true, |b| score > b.score) {
            best = Some(Match { candidate, score });
        }
    }
    best
}

pub fn resolve<'a, I>(query: &str, candidates: I) -> Option<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    best_match(query, candidates).map(|m| m.candidate)
}
