use std::fmt;

/// 演示启动时使用的初始数据
pub const DEFAULT_DATA: [i32; 6] = [12, 11, 13, 5, 6, 7];

/// 会话独占的可变整数序列
///
/// 排序命令原地修改它，查找命令只读访问。序列只在进程重启（或重新构造会话）时复位。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    values: Vec<i32>,
}

impl Sequence {
    pub fn new(values: Vec<i32>) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_vec(&self) -> Vec<i32> {
        self.values.clone()
    }

    /// 是否按非递减顺序排列（二分查找的前置条件）
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|pair| pair[0] <= pair[1])
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new(DEFAULT_DATA.to_vec())
    }
}

impl From<Vec<i32>> for Sequence {
    fn from(values: Vec<i32>) -> Self {
        Self::new(values)
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.values.iter();
        if let Some(first) = iter.next() {
            write!(f, "{}", first)?;
            for value in iter {
                write!(f, " {}", value)?;
            }
        }
        Ok(())
    }
}
