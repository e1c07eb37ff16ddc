use std::cmp::Ordering;

/// 在非递减序列上二分查找 `target`
///
/// 维护闭区间 `[left, right]`，每次检查中点并按三路比较收缩区间。
/// 存在重复值时返回最先探到的那个下标，不保证是第一个或最后一个。
/// 序列无序时结果无意义。
pub fn binary_search(data: &[i32], target: i32) -> Option<usize> {
    let mut left = 0;
    let mut right = data.len().checked_sub(1)?;

    while left <= right {
        let mid = left + (right - left) / 2;

        match data[mid].cmp(&target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => {
                // mid 为 0 时左侧已无元素
                right = mid.checked_sub(1)?;
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_search_demo_data() {
        let data = [5, 6, 7, 11, 12, 13];
        assert_eq!(binary_search(&data, 6), Some(1));
        assert_eq!(binary_search(&data, 5), Some(0));
        assert_eq!(binary_search(&data, 13), Some(5));
        assert_eq!(binary_search(&data, 11), Some(3));
    }

    #[test]
    fn test_binary_search_absent() {
        let data = [5, 6, 7, 11, 12, 13];
        assert_eq!(binary_search(&data, 99), None);
        assert_eq!(binary_search(&data, 1), None);
        assert_eq!(binary_search(&data, 10), None);
    }

    #[test]
    fn test_binary_search_empty_and_single() {
        assert_eq!(binary_search(&[], 3), None);
        assert_eq!(binary_search(&[3], 3), Some(0));
        assert_eq!(binary_search(&[3], 2), None);
        assert_eq!(binary_search(&[3], 4), None);
    }

    #[test]
    fn test_binary_search_duplicates_returns_matching_index() {
        let data = [1, 2, 2, 2, 2, 3];
        let index = binary_search(&data, 2).unwrap();
        assert_eq!(data[index], 2);
        // 第一次探测的中点就命中
        assert_eq!(index, 2);
    }

    #[test]
    fn test_binary_search_every_element() {
        let data: Vec<i32> = (0..50).map(|v| v * 3).collect();
        for (i, &v) in data.iter().enumerate() {
            assert_eq!(binary_search(&data, v), Some(i));
            assert_eq!(binary_search(&data, v + 1), None);
        }
    }
}
