/// 堆排序：先自底向上建大顶堆，再不断把堆顶换到末尾并缩小堆
pub fn heap_sort(data: &mut [i32]) {
    let len = data.len();

    for i in (0..len / 2).rev() {
        heapify(data, len, i);
    }

    for end in (1..len).rev() {
        data.swap(0, end);
        heapify(data, end, 0);
    }
}

/// 以 `root` 为根在前 `heap_size` 个元素上做下沉，恢复大顶堆性质
///
/// 子节点为 `2i + 1` 与 `2i + 2`（仅在堆范围内时参与比较）。
pub fn heapify(data: &mut [i32], heap_size: usize, root: usize) {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    if left < heap_size && data[left] > data[largest] {
        largest = left;
    }
    if right < heap_size && data[right] > data[largest] {
        largest = right;
    }

    if largest != root {
        data.swap(root, largest);
        heapify(data, heap_size, largest);
    }
}
