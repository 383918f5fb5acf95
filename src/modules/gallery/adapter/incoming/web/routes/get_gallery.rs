use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use super::{parent_not_found_response, parse_parent};
use crate::gallery::application::ports::incoming::use_cases::GetGalleryError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/galleries/{parent_type}/{id}",
    tag = "galleries",
    params(
        ("parent_type" = String, Path, description = "project, event or product"),
        ("id" = Uuid, Path, description = "Parent id")
    ),
    responses(
        (status = 200, description = "Gallery rows ascending by order_index"),
        (status = 404, description = "Parent not found")
    )
)]
#[get("/api/galleries/{parent_type}/{id}")]
pub async fn get_gallery_handler(
    path: web::Path<(String, Uuid)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (raw_type, id) = path.into_inner();
    let parent = match parse_parent(&raw_type, id) {
        Ok(p) => p,
        Err(resp) => return resp,
    };

    match data.gallery.get.execute(parent).await {
        Ok(items) => ApiResponse::success(items),
        Err(GetGalleryError::ParentNotFound) => parent_not_found_response(),
        Err(GetGalleryError::QueryError(msg)) => {
            error!("Failed to load gallery of {}: {}", parent, msg);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::gallery::application::domain::entities::ParentType;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::gallery_db::InMemoryGalleryDb;
    use crate::tests::support::object_store::FakeObjectStore;

    #[actix_web::test]
    async fn test_get_returns_rows_in_order() {
        let db = InMemoryGalleryDb::new();
        let parent = db.seed_parent(ParentType::Event);
        db.seed_rows(&parent, &[("/api/cloud/files/b", 2), ("/api/cloud/files/a", 1)]);

        let app_state = TestAppStateBuilder::default()
            .with_gallery_backend(db, FakeObjectStore::new())
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_gallery_handler)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/galleries/event/{}", parent.id()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let items = body["data"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["image_url"], "/api/cloud/files/a");
        assert_eq!(items[1]["order_index"], 2);
        assert_eq!(items[0]["parent"]["parent_id"], parent.id().to_string());
    }

    #[actix_web::test]
    async fn test_get_wrong_type_is_404() {
        let db = InMemoryGalleryDb::new();
        let parent = db.seed_parent(ParentType::Event);

        let app_state = TestAppStateBuilder::default()
            .with_gallery_backend(db, FakeObjectStore::new())
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(get_gallery_handler)).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/galleries/product/{}", parent.id()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
