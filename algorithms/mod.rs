// 排序与查找算法模块
//
// 每个算法一个子模块：
// - quick_sort: Lomuto 划分的快速排序（不稳定）
// - merge_sort: 自顶向下归并排序（稳定）
// - heap_sort: 大顶堆排序（不稳定）
// - binary_search: 有序序列上的二分查找
// - linear_search: 任意序列上的顺序查找

pub mod binary_search;
pub mod heap_sort;
pub mod linear_search;
pub mod merge_sort;
pub mod quick_sort;

use derive_more::Display;

pub use binary_search::binary_search;
pub use heap_sort::{heap_sort, heapify};
pub use linear_search::linear_search;
pub use merge_sort::{merge_sort, merge_sort_range};
pub use quick_sort::{quick_sort, quick_sort_range};

/// 菜单中可选的排序算法
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    #[display(fmt = "Quick Sort")]
    Quick,
    #[display(fmt = "Merge Sort")]
    Merge,
    #[display(fmt = "Heap Sort")]
    Heap,
}

impl SortAlgorithm {
    /// 对整个序列原地排序
    pub fn sort(self, data: &mut [i32]) {
        match self {
            SortAlgorithm::Quick => quick_sort(data),
            SortAlgorithm::Merge => merge_sort(data),
            SortAlgorithm::Heap => heap_sort(data),
        }
    }
}

/// 菜单中可选的查找算法
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithm {
    #[display(fmt = "Binary Search")]
    Binary,
    #[display(fmt = "Linear Search")]
    Linear,
}

impl SearchAlgorithm {
    /// 查找目标值，返回下标；`None` 表示不存在
    ///
    /// 二分查找要求调用方保证序列已按非递减顺序排列，这里不做检查。
    pub fn search(self, data: &[i32], target: i32) -> Option<usize> {
        match self {
            SearchAlgorithm::Binary => binary_search(data, target),
            SearchAlgorithm::Linear => linear_search(data, target),
        }
    }

    pub fn requires_sorted(self) -> bool {
        matches!(self, SearchAlgorithm::Binary)
    }
}
