pub mod conflicts;
pub mod entries;
pub mod locations;
pub mod slots;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::timetable::requests::{
    CreateSpecialLocationRequest, CreateTimeSlotRequest, CreateTimetableEntryRequest,
    RoomConflictQuery, TeacherConflictQuery, TimetableListQuery, UpdateTimetableEntryRequest,
};
use crate::storage::Storage;

pub struct TimetableService {
    storage: Option<Arc<dyn Storage>>,
}

impl TimetableService {
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

    // 节次
    pub async fn list_slots(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        slots::list_slots(self, req).await
    }

    pub async fn create_slot(
        &self,
        req: &HttpRequest,
        data: CreateTimeSlotRequest,
    ) -> ActixResult<HttpResponse> {
        slots::create_slot(self, req, data).await
    }

    pub async fn delete_slot(&self, req: &HttpRequest, slot_id: i64) -> ActixResult<HttpResponse> {
        slots::delete_slot(self, req, slot_id).await
    }

    // 功能教室
    pub async fn list_locations(&self, req: &HttpRequest) -> ActixResult<HttpResponse> {
        locations::list_locations(self, req).await
    }

    pub async fn create_location(
        &self,
        req: &HttpRequest,
        data: CreateSpecialLocationRequest,
    ) -> ActixResult<HttpResponse> {
        locations::create_location(self, req, data).await
    }

    pub async fn delete_location(
        &self,
        req: &HttpRequest,
        location_id: i64,
    ) -> ActixResult<HttpResponse> {
        locations::delete_location(self, req, location_id).await
    }

    // 课表条目
    pub async fn list_entries(
        &self,
        req: &HttpRequest,
        query: TimetableListQuery,
    ) -> ActixResult<HttpResponse> {
        entries::list_entries(self, req, query).await
    }

    pub async fn create_entry(
        &self,
        req: &HttpRequest,
        query: TimetableListQuery,
        data: CreateTimetableEntryRequest,
    ) -> ActixResult<HttpResponse> {
        entries::create_entry(self, req, query, data).await
    }

    pub async fn update_entry(
        &self,
        req: &HttpRequest,
        entry_id: i64,
        data: UpdateTimetableEntryRequest,
    ) -> ActixResult<HttpResponse> {
        entries::update_entry(self, req, entry_id, data).await
    }

    pub async fn delete_entry(
        &self,
        req: &HttpRequest,
        entry_id: i64,
    ) -> ActixResult<HttpResponse> {
        entries::delete_entry(self, req, entry_id).await
    }

    // 冲突检测
    pub async fn check_room_conflicts(
        &self,
        req: &HttpRequest,
        query: RoomConflictQuery,
    ) -> ActixResult<HttpResponse> {
        conflicts::check_room_conflicts(self, req, query).await
    }

    pub async fn check_teacher_conflicts(
        &self,
        req: &HttpRequest,
        query: TeacherConflictQuery,
    ) -> ActixResult<HttpResponse> {
        conflicts::check_teacher_conflicts(self, req, query).await
    }
}
