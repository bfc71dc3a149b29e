//! Free-text menu parsing for bulk import.
//!
//! A menu file is a loosely formatted list: `#` headings, several dishes
//! per line separated by `、`, `，` or `,`, and parenthetical notes such as
//! `麻婆豆腐（微辣）`.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::MIN_MENU_NAME_CHARS;

static FULLWIDTH_NOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"（[^）]*）").unwrap());
static ASCII_NOTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").unwrap());
static CHINESE_NUMERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[一二三四五六七八九十]+$").unwrap());

const SEPARATORS: [char; 3] = ['、', '，', ','];

/// Extract distinct dish names from menu text, sorted.
#[must_use]
pub fn parse_menu(content: &str) -> Vec<String> {
    let names: BTreeSet<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split(SEPARATORS.as_slice()))
        .map(str::trim)
        // half-open annotations are continuation noise, not dishes
        .filter(|fragment| !fragment.contains('（') || fragment.contains('）'))
        .filter_map(clean_fragment)
        .collect();

    names
        .into_iter()
        .filter(|name| name.chars().count() >= MIN_MENU_NAME_CHARS)
        .filter(|name| !CHINESE_NUMERAL.is_match(name))
        .collect()
}

fn clean_fragment(fragment: &str) -> Option<String> {
    let without_notes = FULLWIDTH_NOTE.replace_all(fragment, "");
    let without_notes = ASCII_NOTE.replace_all(&without_notes, "");
    let name = without_notes.trim();
    (!name.is_empty()).then(|| name.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_menu() {
        let menu = "\
# 家常菜单
## 川菜
宫保鸡丁、鱼香肉丝，麻婆豆腐（微辣）
回锅肉, 水煮鱼 (大份)

一二三
汤
宫保鸡丁
（未完成
";
        let mut expected = vec!["回锅肉", "宫保鸡丁", "水煮鱼", "鱼香肉丝", "麻婆豆腐"];
        expected.sort_unstable();
        assert_eq!(parse_menu(menu), expected);
    }

    #[test]
    fn test_ascii_names() {
        assert_eq!(parse_menu("Pizza (large), Pasta\nPasta"), vec!["Pasta", "Pizza"]);
    }

    #[test]
    fn test_headings_only() {
        assert!(parse_menu("# Menu\n### Soups\n#### Cold\n\n").is_empty());
    }

    #[test]
    fn test_annotation_only_fragment_dropped() {
        assert_eq!(parse_menu("（季节限定）、糖醋排骨"), vec!["糖醋排骨"]);
    }
}
