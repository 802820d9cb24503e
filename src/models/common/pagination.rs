use serde::{Deserialize, Serialize};

// 分页信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationInfo {
    pub page: i64,
    pub page_size: i64,
    pub total: i64,
    pub total_pages: i64,
}

// 分页后的一页视图
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageView<T> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

/// 对内存中的记录集合做 1 起始的分页切片
///
/// `total_pages = ceil(len / page_size)`，空集合为 0 但页码仍从 1 开始。
/// 越界页码返回空的 items，不会 panic；页码收敛由调用方负责。
pub fn paginate<T: Clone>(records: &[T], page: i64, page_size: i64) -> PageView<T> {
    let total = records.len() as i64;
    let size = page_size.max(1);
    let total_pages = (total + size - 1) / size;

    let start = ((page.max(1) - 1) * size) as usize;
    let end = (start + size as usize).min(records.len());
    let items = if start >= records.len() {
        Vec::new()
    } else {
        records[start..end].to_vec()
    };

    PageView {
        items,
        pagination: PaginationInfo {
            page,
            page_size: size,
            total,
            total_pages,
        },
    }
}
