//! LocalStorage 封装模块
//!
//! 在 `gloo_storage` 之上收敛出一个纯字符串接口，
//! 调用方不接触底层的序列化细节与错误类型。

use gloo_storage::{LocalStorage as Backend, Storage};

/// 本地存储操作封装
///
/// 提供静态方法访问浏览器 LocalStorage API。
pub struct LocalStorage;

impl LocalStorage {
    /// 获取存储的字符串值
    ///
    /// # 返回
    /// - `Some(String)` 如果键存在且有值
    /// - `None` 如果键不存在或发生错误
    pub fn get(key: &str) -> Option<String> {
        Backend::get(key).ok()
    }

    /// 设置存储值
    ///
    /// # 返回
    /// - `true` 如果操作成功
    /// - `false` 如果操作失败
    pub fn set(key: &str, value: &str) -> bool {
        Backend::set(key, value).is_ok()
    }

    /// 清空整个 LocalStorage
    ///
    /// 登出流程使用，保证不残留任何会话痕迹
    pub fn clear_all() {
        Backend::clear();
    }
}
