pub mod children;
pub mod records;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::people::requests::{CreateParentRequest, UpdateParentRequest};
use crate::storage::Storage;

pub struct ParentService {
    storage: Option<Arc<dyn Storage>>,
}

impl ParentService {
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

    pub async fn list_parents(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        records::list_parents(self, request).await
    }

    pub async fn get_parent(
        &self,
        request: &HttpRequest,
        parent_id: i64,
    ) -> ActixResult<HttpResponse> {
        records::get_parent(self, request, parent_id).await
    }

    pub async fn create_parent(
        &self,
        request: &HttpRequest,
        data: CreateParentRequest,
    ) -> ActixResult<HttpResponse> {
        records::create_parent(self, request, data).await
    }

    pub async fn update_parent(
        &self,
        request: &HttpRequest,
        parent_id: i64,
        data: UpdateParentRequest,
    ) -> ActixResult<HttpResponse> {
        records::update_parent(self, request, parent_id, data).await
    }

    pub async fn delete_parent(
        &self,
        request: &HttpRequest,
        parent_id: i64,
    ) -> ActixResult<HttpResponse> {
        records::delete_parent(self, request, parent_id).await
    }

    // 子女列表：管理员或家长本人
    pub async fn list_children(
        &self,
        request: &HttpRequest,
        parent_id: i64,
    ) -> ActixResult<HttpResponse> {
        children::list_children(self, request, parent_id).await
    }

    // 管理员维护家长-学生关联
    pub async fn link_child(
        &self,
        request: &HttpRequest,
        parent_id: i64,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        children::link_child(self, request, parent_id, student_id).await
    }

    pub async fn unlink_child(
        &self,
        request: &HttpRequest,
        parent_id: i64,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        children::unlink_child(self, request, parent_id, student_id).await
    }
}
