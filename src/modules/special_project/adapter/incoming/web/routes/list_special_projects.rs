use actix_web::{get, web, Responder};

use super::special_project_error_response;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    get,
    path = "/api/special-projects",
    tag = "special-projects",
    responses(
        (status = 200, description = "All special projects by sort_order", body = [crate::special_project::application::domain::entities::SpecialProject])
    )
)]
#[get("/api/special-projects")]
pub async fn list_special_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.special_project.list.execute().await {
        Ok(projects) => ApiResponse::success(projects),
        Err(err) => special_project_error_response(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::special_project::application::ports::outgoing::SpecialProjectRepositoryError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::object_store::FakeObjectStore;
    use crate::tests::support::special_projects::InMemorySpecialProjects;

    #[actix_web::test]
    async fn test_list_orders_by_sort_order() {
        let repo = InMemorySpecialProjects::new();
        repo.seed("/api/cloud/files/b", 5);
        repo.seed("/api/cloud/files/a", 1);

        let app_state = TestAppStateBuilder::default()
            .with_special_project_backend(repo, FakeObjectStore::new())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(list_special_projects_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/special-projects").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["sort_order"], 1);
        assert_eq!(body["data"][1]["image_url"], "/api/cloud/files/b");
    }

    #[actix_web::test]
    async fn test_list_database_failure_is_500() {
        let repo = InMemorySpecialProjects::new();
        repo.fail_with(SpecialProjectRepositoryError::DatabaseError("down".into()));

        let app_state = TestAppStateBuilder::default()
            .with_special_project_backend(repo, FakeObjectStore::new())
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(list_special_projects_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/special-projects").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
