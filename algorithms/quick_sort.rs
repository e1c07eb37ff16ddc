/// 快速排序（整个序列）
pub fn quick_sort(data: &mut [i32]) {
    if let Some(high) = data.len().checked_sub(1) {
        quick_sort_range(data, 0, high);
    }
}

/// 对闭区间 `[low, high]` 原地快速排序
///
/// 以区间最后一个元素为基准做 Lomuto 划分，小于基准的元素移到前面，
/// 基准落到最终位置后分别递归左右两段。`low >= high` 时不做任何事；
/// 越界的区间会在切片索引时 panic。
pub fn quick_sort_range(data: &mut [i32], low: usize, high: usize) {
    if low >= high {
        return;
    }
    sort_slice(&mut data[low..=high]);
}

/// 只对较短的一段递归，较长的一段在循环里继续处理，递归深度为 O(log n)
fn sort_slice(mut data: &mut [i32]) {
    while data.len() > 1 {
        let pivot = partition(data);
        let (left, right) = std::mem::take(&mut data).split_at_mut(pivot);
        let right = &mut right[1..];

        if left.len() <= right.len() {
            sort_slice(left);
            data = right;
        } else {
            sort_slice(right);
            data = left;
        }
    }
}

/// Lomuto 划分，返回基准的最终下标
fn partition(data: &mut [i32]) -> usize {
    let pivot_index = data.len() - 1;
    let pivot = data[pivot_index];
    let mut store = 0;

    for j in 0..pivot_index {
        if data[j] < pivot {
            data.swap(store, j);
            store += 1;
        }
    }
    data.swap(store, pivot_index);
    store
}
