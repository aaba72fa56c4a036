//! 拖拽排序
//!
//! 拖拽结束时把源元素移动到目标元素的位置，其余元素相对顺序不变。
//! 取消的拖拽（没有落点）、源与目标相同、任一方找不到时都不改变顺序。

use rand::seq::SliceRandom;
use rand::Rng;

/// 拖拽结束事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragEnd<K> {
    /// 被拖动元素的 key
    pub active: K,
    /// 落点元素的 key，在有效目标外松开时为 None
    pub over: Option<K>,
}

impl<K> DragEnd<K> {
    pub fn new(active: K, over: K) -> Self {
        Self {
            active,
            over: Some(over),
        }
    }

    pub fn cancelled(active: K) -> Self {
        Self { active, over: None }
    }
}

/// 按下标移动单个元素（先移除再插入）
///
/// 返回顺序是否改变
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) -> bool {
    if from == to || from >= items.len() || to >= items.len() {
        return false;
    }
    let item = items.remove(from);
    items.insert(to, item);
    true
}

/// 按 key 把 `source` 移动到 `target` 所在位置
pub fn move_by_key<T, K, F>(items: &mut Vec<T>, key_of: F, source: &K, target: &K) -> bool
where
    K: PartialEq + ?Sized,
    F: Fn(&T) -> &K,
{
    if source == target {
        return false;
    }
    let Some(from) = items.iter().position(|item| key_of(item) == source) else {
        return false;
    };
    let Some(to) = items.iter().position(|item| key_of(item) == target) else {
        return false;
    };
    move_item(items, from, to)
}

/// 应用一次拖拽结束事件
pub fn apply_drag_end<T, F>(items: &mut Vec<T>, key_of: F, event: &DragEnd<String>) -> bool
where
    F: Fn(&T) -> &str,
{
    match &event.over {
        Some(over) => move_by_key(items, key_of, event.active.as_str(), over.as_str()),
        None => false,
    }
}

/// 返回打乱顺序后的副本，原序列不变
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    copy.shuffle(rng);
    copy
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn abcd() -> Vec<String> {
        ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect()
    }

    fn key(s: &String) -> &str {
        s.as_str()
    }

    #[test]
    fn test_move_up_one_position() {
        let mut items = abcd();
        assert!(move_by_key(&mut items, key, "C", "B"));
        assert_eq!(items, vec!["A", "C", "B", "D"]);
    }

    #[test]
    fn test_move_down_to_end() {
        let mut items = abcd();
        assert!(move_by_key(&mut items, key, "A", "D"));
        assert_eq!(items, vec!["B", "C", "D", "A"]);
    }

    #[test]
    fn test_same_source_and_target_is_noop() {
        let mut items = abcd();
        assert!(!move_by_key(&mut items, key, "B", "B"));
        assert_eq!(items, abcd());
    }

    #[test]
    fn test_missing_key_is_noop() {
        let mut items = abcd();
        assert!(!move_by_key(&mut items, key, "C", "Z"));
        assert!(!move_by_key(&mut items, key, "Z", "C"));
        assert_eq!(items, abcd());
    }

    #[test]
    fn test_cancelled_drag_keeps_order() {
        let mut items = abcd();
        let event = DragEnd::cancelled("C".to_string());
        assert!(!apply_drag_end(&mut items, key, &event));
        assert_eq!(items, abcd());

        let event = DragEnd::new("D".to_string(), "A".to_string());
        assert!(apply_drag_end(&mut items, key, &event));
        assert_eq!(items, vec!["D", "A", "B", "C"]);
    }

    #[test]
    fn test_move_item_out_of_range() {
        let mut items = abcd();
        assert!(!move_item(&mut items, 0, 4));
        assert_eq!(items, abcd());
    }

    #[test]
    fn test_shuffled_keeps_multiset() {
        let items = abcd();
        let mut rng = StdRng::seed_from_u64(7);
        let mut out = shuffled(&items, &mut rng);
        assert_eq!(items, abcd());
        out.sort();
        assert_eq!(out, abcd());
    }
}
