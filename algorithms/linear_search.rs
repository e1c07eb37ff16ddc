/// 顺序查找，返回第一个等于 `target` 的下标
pub fn linear_search(data: &[i32], target: i32) -> Option<usize> {
    data.iter().position(|&value| value == target)
}
