//! # 选择解析器
//!
//! 将用户输入（如 `1,3-5`）解析为升序、去重、限定在 `[1, max]` 内的序号列表。
//!
//! ## 规则
//! - 以逗号分隔，去除空白
//! - 含 `-` 的片段视为闭区间 `start-end`，逆序区间（如 `5-1`）展开为空
//! - 无法解析的片段静默丢弃
//!
//! ## 依赖关系
//! - 被 `commands/` 中的 save / load / delete 使用
//! - 无外部模块依赖

use std::collections::BTreeSet;

/// 解析选择字符串
///
/// 空结果表示用户取消操作，不视为错误。
pub fn parse_selection(input: &str, max: usize) -> Vec<usize> {
    let mut selected = BTreeSet::new();

    for token in input.split(',') {
        let token: String = token.chars().filter(|c| !c.is_whitespace()).collect();
        if token.is_empty() {
            continue;
        }

        if token.contains('-') {
            if let Some((start, end)) = parse_range(&token) {
                // 先裁剪到有效区间，避免超大区间展开
                selected.extend(start.max(1)..=end.min(max as i64));
            }
        } else if let Ok(v) = token.parse::<i64>() {
            selected.insert(v);
        }
    }

    selected
        .into_iter()
        .filter(|&i| i >= 1 && i <= max as i64)
        .map(|i| i as usize)
        .collect()
}

/// 解析 `start-end` 片段；任一端无法解析时返回 None
fn parse_range(token: &str) -> Option<(i64, i64)> {
    let (start, end) = token.split_once('-')?;
    Some((parse_bound(start)?, parse_bound(end)?))
}

/// 解析区间端点；超出 i64 的纯数字饱和为 `i64::MAX`
fn parse_bound(s: &str) -> Option<i64> {
    match s.parse::<i64>() {
        Ok(v) => Some(v),
        Err(_) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => Some(i64::MAX),
        Err(_) => None,
    }
}
