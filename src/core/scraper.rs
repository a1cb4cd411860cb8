//! 從 AqAdvisor 回傳的 HTML 中取出結果。
//!
//! 遠端頁面是沒有結構保證的 HTML，這裡只依賴兩件事：
//! 1. 某一行含有 "Your aquarium filtration ... ." 句子
//! 2. 恰好一個名為 `AlreadySelected` 的隱藏欄位
//!
//! 遠端改版就會讓擷取失效，這是整合方式本身的限制。

use crate::domain::ports::ResponseParser;
use regex::Regex;
use std::sync::OnceLock;

const SESSION_FIELD: &str = "AlreadySelected";

fn verdict_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"Your aquarium filtration.*\.").expect("valid verdict regex"))
}

// 引號內的 `>` 不算標籤結尾
fn input_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?is)<input\b(?:"[^"]*"|'[^']*'|[^'">])*>"#).expect("valid input regex")
    })
}

fn attribute_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`]+))"#)
            .expect("valid attribute regex")
    })
}

/// 以正規表達式解析 AqAdvisor 頁面。
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlResponseParser;

impl HtmlResponseParser {
    pub fn new() -> Self {
        Self
    }
}

fn attributes(tag: &str) -> Vec<(String, String)> {
    attribute_regex()
        .captures_iter(tag)
        .map(|caps| {
            let name = caps[1].to_ascii_lowercase();
            let value = caps
                .get(2)
                .or_else(|| caps.get(3))
                .or_else(|| caps.get(4))
                .map(|m| m.as_str())
                .unwrap_or_default();
            (name, value.to_string())
        })
        .collect()
}

fn decode_entities(value: &str) -> String {
    value
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

impl ResponseParser for HtmlResponseParser {
    fn extract_verdict(&self, body: &str) -> Option<String> {
        // 逐行掃描，最後一個符合的句子為準
        body.lines()
            .filter_map(|line| verdict_regex().find(line))
            .last()
            .map(|m| m.as_str().to_string())
    }

    fn extract_session_token(&self, body: &str) -> Option<String> {
        let mut token = None;
        for tag in input_tag_regex().find_iter(body) {
            let attrs = attributes(tag.as_str());
            let get = |key: &str| {
                attrs
                    .iter()
                    .find(|(name, _)| name == key)
                    .map(|(_, value)| value.as_str())
            };

            let hidden = get("type").is_some_and(|t| t.eq_ignore_ascii_case("hidden"));
            if hidden && get("name") == Some(SESSION_FIELD) {
                token = Some(decode_entities(get("value").unwrap_or_default()));
            }
        }
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
<form action="AqAdvisor.php" method="get">
<input type="text" name="AquTankLength" value="20">
<INPUT TYPE=hidden NAME=FilterQuantity VALUE=2>
<input name="AlreadySelected" type="hidden" value="Cardinal Tetra (Paracheirodon axelrodi):5;">
</form>
Your aquarium stocking level is <b>42%</b>.<br>
Your aquarium filtration capacity for above selected species is <b>194%</b>.<A HREF=AqHelp.php#FiltrationCapacity target=_blank><img border=0 alt="Help on Filtration capacity" src=Images/Question11.png></A><BR>Recommended water change schedule: <b>28% per week</b>.
</body></html>"#;

    #[test]
    fn test_extract_verdict_is_greedy_to_last_period() {
        let verdict = HtmlResponseParser.extract_verdict(PAGE).unwrap();
        assert!(verdict.starts_with(
            "Your aquarium filtration capacity for above selected species is <b>194%</b>."
        ));
        assert!(verdict.ends_with("<b>28% per week</b>."));
    }

    #[test]
    fn test_extract_verdict_absent() {
        let page = "<html><p>Your aquarium stocking level is 10%.</p></html>";
        assert_eq!(HtmlResponseParser.extract_verdict(page), None);
    }

    #[test]
    fn test_extract_session_token() {
        assert_eq!(
            HtmlResponseParser.extract_session_token(PAGE).as_deref(),
            Some("Cardinal Tetra (Paracheirodon axelrodi):5;")
        );
    }

    #[test]
    fn test_session_token_with_angle_bracket_in_value() {
        let page = r#"<input type="hidden" name="AlreadySelected" value="a>b"><input type='hidden' name='Other' value='x>y'>"#;
        assert_eq!(
            HtmlResponseParser.extract_session_token(page).as_deref(),
            Some("a>b")
        );
    }

    #[test]
    fn test_session_token_requires_hidden_input() {
        let page = r#"<input type="text" name="AlreadySelected" value="visible">"#;
        assert_eq!(HtmlResponseParser.extract_session_token(page), None);
    }

    #[test]
    fn test_session_token_unquoted_and_escaped() {
        let page = "<input type=HIDDEN name=AlreadySelected value=a&amp;b>";
        assert_eq!(
            HtmlResponseParser.extract_session_token(page).as_deref(),
            Some("a&b")
        );
        let empty = r#"<input type='hidden' name='AlreadySelected' value=''>"#;
        assert_eq!(HtmlResponseParser.extract_session_token(empty).as_deref(), Some(""));
    }
}
