pub mod records;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::people::requests::{CreateTeacherRequest, UpdateTeacherRequest};
use crate::storage::Storage;

pub struct TeacherService {
    storage: Option<Arc<dyn Storage>>,
}

impl TeacherService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 教师列表对所有登录用户开放（课表选择器需要）
    pub async fn list_teachers(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        records::list_teachers(self, request).await
    }

    pub async fn get_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
    ) -> ActixResult<HttpResponse> {
        records::get_teacher(self, request, teacher_id).await
    }

    pub async fn create_teacher(
        &self,
        request: &HttpRequest,
        data: CreateTeacherRequest,
    ) -> ActixResult<HttpResponse> {
        records::create_teacher(self, request, data).await
    }

    pub async fn update_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
        data: UpdateTeacherRequest,
    ) -> ActixResult<HttpResponse> {
        records::update_teacher(self, request, teacher_id, data).await
    }

    pub async fn delete_teacher(
        &self,
        request: &HttpRequest,
        teacher_id: i64,
    ) -> ActixResult<HttpResponse> {
        records::delete_teacher(self, request, teacher_id).await
    }
}
