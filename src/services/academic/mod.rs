pub mod classes;
pub mod grade_levels;
pub mod semesters;
pub mod years;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::academic::requests::{
    ClassRoomListQuery, CreateAcademicYearRequest, CreateClassRoomRequest, CreateGradeLevelRequest,
    CreateSemesterRequest, UpdateAcademicYearRequest, UpdateClassRoomRequest,
    UpdateSemesterRequest,
};
use crate::storage::Storage;

pub struct AcademicService {
    storage: Option<Arc<dyn Storage>>,
}

impl AcademicService {
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

    // 学年
    pub async fn list_years(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        years::list_years(self, req).await
    }

    pub async fn get_active_year(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        years::get_active_year(self, req).await
    }

    pub async fn create_year(
        &self,
        req: &HttpRequest,
        data: CreateAcademicYearRequest,
    ) -> ActixResult<HttpResponse> {
        years::create_year(self, req, data).await
    }

    pub async fn update_year(
        &self,
        req: &HttpRequest,
        year_id: i64,
        data: UpdateAcademicYearRequest,
    ) -> ActixResult<HttpResponse> {
        years::update_year(self, req, year_id, data).await
    }

    pub async fn delete_year(&self, req: &HttpRequest, year_id: i64) -> ActixResult<HttpResponse> {
        years::delete_year(self, req, year_id).await
    }

    // 学期
    pub async fn list_semesters(
        &self,
        req: &HttpRequest,
        academic_year_id: Option<i64>,
    ) -> ActixResult<HttpResponse> {
        semesters::list_semesters(self, req, academic_year_id).await
    }

    pub async fn get_active_semester(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        semesters::get_active_semester(self, req).await
    }

    pub async fn create_semester(
        &self,
        req: &HttpRequest,
        data: CreateSemesterRequest,
    ) -> ActixResult<HttpResponse> {
        semesters::create_semester(self, req, data).await
    }

    pub async fn update_semester(
        &self,
        req: &HttpRequest,
        semester_id: i64,
        data: UpdateSemesterRequest,
    ) -> ActixResult<HttpResponse> {
        semesters::update_semester(self, req, semester_id, data).await
    }

    pub async fn delete_semester(
        &self,
        req: &HttpRequest,
        semester_id: i64,
    ) -> ActixResult<HttpResponse> {
        semesters::delete_semester(self, req, semester_id).await
    }

    // 年级
    pub async fn list_grade_levels(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        grade_levels::list_grade_levels(self, req).await
    }

    pub async fn create_grade_level(
        &self,
        req: &HttpRequest,
        data: CreateGradeLevelRequest,
    ) -> ActixResult<HttpResponse> {
        grade_levels::create_grade_level(self, req, data).await
    }

    pub async fn delete_grade_level(
        &self,
        req: &HttpRequest,
        grade_level_id: i64,
    ) -> ActixResult<HttpResponse> {
        grade_levels::delete_grade_level(self, req, grade_level_id).await
    }

    // 班级
    pub async fn list_classes(
        &self,
        req: &HttpRequest,
        query: ClassRoomListQuery,
    ) -> ActixResult<HttpResponse> {
        classes::list_classes(self, req, query).await
    }

    pub async fn get_class(&self, req: &HttpRequest, class_id: i64) -> ActixResult<HttpResponse> {
        classes::get_class(self, req, class_id).await
    }

    pub async fn create_class(
        &self,
        req: &HttpRequest,
        data: CreateClassRoomRequest,
    ) -> ActixResult<HttpResponse> {
        classes::create_class(self, req, data).await
    }

    pub async fn update_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
        data: UpdateClassRoomRequest,
    ) -> ActixResult<HttpResponse> {
        classes::update_class(self, req, class_id, data).await
    }

    pub async fn delete_class(
        &self,
        req: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        classes::delete_class(self, req, class_id).await
    }
}
