/// 归并排序（整个序列）
pub fn merge_sort(data: &mut [i32]) {
    if let Some(right) = data.len().checked_sub(1) {
        merge_sort_range(data, 0, right);
    }
}

/// 对闭区间 `[left, right]` 原地归并排序，稳定
///
/// 中点取 `left + (right - left) / 2`，两半分别递归后合并。
pub fn merge_sort_range(data: &mut [i32], left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;

    merge_sort_range(data, left, mid);
    merge_sort_range(data, mid + 1, right);

    merge(data, left, mid, right);
}

/// 合并两个已排序的相邻区间 `[left, mid]` 与 `[mid + 1, right]`
///
/// 相等时取左侧元素，保证稳定性。
fn merge(data: &mut [i32], left: usize, mid: usize, right: usize) {
    let left_run = data[left..=mid].to_vec();
    let right_run = data[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_run.len() && j < right_run.len() {
        if left_run[i] <= right_run[j] {
            data[k] = left_run[i];
            i += 1;
        } else {
            data[k] = right_run[j];
            j += 1;
        }
        k += 1;
    }

    // 剩余部分直接拷贝
    let rest = if i < left_run.len() {
        &left_run[i..]
    } else {
        &right_run[j..]
    };
    data[k..k + rest.len()].copy_from_slice(rest);
}
