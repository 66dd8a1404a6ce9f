//! 角色数据可见范围策略
//!
//! 学生/作业/考勤/成绩等按学生维度的数据都经过这一个策略收窄，
//! 不在各个接口里重复角色分支：
//! - 管理员、教师：不限制
//! - 学生：只能看到自己的学生档案
//! - 家长：只能看到已关联的子女
//!
//! 单条记录用 `permits` 判定，列表查询用 `filter_ids` 生成存储层过滤集合。

use std::sync::Arc;

use crate::errors::Result;
use crate::models::users::entities::{User, UserRole};
use crate::storage::Storage;

/// 请求者对学生维度数据的可见范围
#[derive(Debug, Clone, PartialEq)]
pub enum StudentScope {
    /// 不限制（教职工）
    All,
    /// 只能访问自己的学生档案
    Own(i64),
    /// 只能访问关联的子女档案
    Children(Vec<i64>),
    /// 无任何可见学生（如学生账号没有档案）
    Denied,
}

impl StudentScope {
    /// 是否允许访问指定学生的记录
    pub fn permits(&self, student_id: i64) -> bool {
        match self {
            StudentScope::All => true,
            StudentScope::Own(id) => *id == student_id,
            StudentScope::Children(ids) => ids.contains(&student_id),
            StudentScope::Denied => false,
        }
    }

    /// 列表查询的过滤集合：None 表示不限制，Some(ids) 表示只含这些学生
    pub fn filter_ids(&self) -> Option<Vec<i64>> {
        match self {
            StudentScope::All => None,
            StudentScope::Own(id) => Some(vec![*id]),
            StudentScope::Children(ids) => Some(ids.clone()),
            StudentScope::Denied => Some(Vec::new()),
        }
    }

    /// 是否完全无权访问
    pub fn is_denied(&self) -> bool {
        matches!(self, StudentScope::Denied)
            || matches!(self, StudentScope::Children(ids) if ids.is_empty())
    }
}

/// 解析请求者的学生可见范围
pub async fn resolve_student_scope(
    user: &User,
    storage: &Arc<dyn Storage>,
) -> Result<StudentScope> {
    match user.role {
        UserRole::Admin | UserRole::Teacher => Ok(StudentScope::All),
        UserRole::Student => {
            let student = storage.get_student_by_user_id(user.id).await?;
            Ok(match student {
                Some(s) => StudentScope::Own(s.id),
                None => StudentScope::Denied,
            })
        }
        UserRole::Parent => {
            let parent = storage.get_parent_by_user_id(user.id).await?;
            Ok(match parent {
                Some(p) => StudentScope::Children(storage.list_child_ids_of_parent(p.id).await?),
                None => StudentScope::Denied,
            })
        }
    }
}

/// 学生可见范围对应的班级集合：None 表示不限制
pub async fn resolve_class_scope(
    scope: &StudentScope,
    storage: &Arc<dyn Storage>,
) -> Result<Option<Vec<i64>>> {
    match scope.filter_ids() {
        None => Ok(None),
        Some(ids) => Ok(Some(storage.list_class_room_ids_of_students(&ids).await?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_permits_everything() {
        let scope = StudentScope::All;
        assert!(scope.permits(1));
        assert!(scope.permits(9999));
        assert_eq!(scope.filter_ids(), None);
        assert!(!scope.is_denied());
    }

    #[test]
    fn test_own_permits_only_self() {
        let scope = StudentScope::Own(7);
        assert!(scope.permits(7));
        assert!(!scope.permits(8));
        assert_eq!(scope.filter_ids(), Some(vec![7]));
    }

    #[test]
    fn test_children_permits_linked_only() {
        let scope = StudentScope::Children(vec![3, 5]);
        assert!(scope.permits(3));
        assert!(scope.permits(5));
        assert!(!scope.permits(4));
        assert_eq!(scope.filter_ids(), Some(vec![3, 5]));
        assert!(!scope.is_denied());
    }

    #[test]
    fn test_childless_parent_is_denied() {
        let scope = StudentScope::Children(Vec::new());
        assert!(!scope.permits(1));
        assert_eq!(scope.filter_ids(), Some(Vec::new()));
        assert!(scope.is_denied());
    }

    #[test]
    fn test_denied_scope() {
        let scope = StudentScope::Denied;
        assert!(!scope.permits(1));
        assert_eq!(scope.filter_ids(), Some(Vec::new()));
        assert!(scope.is_denied());
    }
}
