pub mod assignments;
pub mod attendance;
pub mod auth;
pub mod courses;
pub mod files;

pub use assignments::AssignmentService;
pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use courses::CourseService;
pub use files::FileService;

use std::sync::atomic::{AtomicU64, Ordering};

/// 加载代际守卫
///
/// 页面每次发起加载领取一个令牌；结果回来时校验令牌是否仍是最新，
/// 被更新一轮加载赶超的结果直接丢弃，不去改写已经没人看的状态。
/// 不做请求中断，只做交付侧拦截。
#[derive(Debug, Default)]
pub struct LoadGuard(AtomicU64);

impl LoadGuard {
    pub fn begin(&self) -> u64 {
        self.0.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0.load(Ordering::SeqCst) == token
    }
}

/// 加载结果：Stale 表示等待期间又发起了新的加载，本次结果作废
#[derive(Debug)]
pub enum Loaded<T> {
    Fresh(T),
    Stale,
}

impl<T> Loaded<T> {
    pub fn into_fresh(self) -> Option<T> {
        match self {
            Loaded::Fresh(value) => Some(value),
            Loaded::Stale => None,
        }
    }
}
