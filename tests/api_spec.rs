mod common;

use axum::http::StatusCode;
use axum_test::TestServer;
use common::*;
use stargazer::api::{create_router, AppResponse, ImageResponse, ShareResponse};
use stargazer::browse::{CatalogView, EMPTY_STATE_TITLE};
use stargazer::config::Config;
use stargazer::detail::{fallback, DetailClient};
use stargazer::models::*;

fn setup() -> TestServer {
    let client = DetailClient::from_config(&Config::unconfigured()).expect("Failed to create client");
    let app = create_router(client);
    TestServer::new(app).expect("Failed to create test server")
}

fn setup_with(service: std::sync::Arc<FakeService>) -> TestServer {
    TestServer::new(create_router(client_with(service))).expect("Failed to create test server")
}

mod health {
    use super::*;

    #[tokio::test]
    async fn reports_unconfigured_service() {
        let server = setup();

        let response = server.get("/api/v1/health").await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["generativeService"], "unconfigured");
    }
}

mod app {
    use super::*;
    use stargazer::share::APP_SHARE_TEXT;
    use stargazer::view::{INSTALL_HINT_TEXT, INSTALL_HINT_TITLE};

    #[tokio::test]
    async fn returns_share_text_and_install_hint() {
        let server = setup();

        let response = server.get("/api/v1/app").await;

        response.assert_status_ok();
        let app: AppResponse = response.json();
        assert_eq!(app.name, "StarGazer");
        assert_eq!(app.share_text, APP_SHARE_TEXT);
        assert_eq!(app.install_hint.title, INSTALL_HINT_TITLE);
        assert_eq!(app.install_hint.text, INSTALL_HINT_TEXT);

        let body: serde_json::Value = server.get("/api/v1/app").await.json();
        assert!(body.get("shareText").is_some());
        assert!(body.get("installHint").is_some());
    }
}

mod catalog {
    use super::*;

    #[tokio::test]
    async fn returns_full_calendar_without_query() {
        let server = setup();

        let response = server.get("/api/v1/catalog").await;

        response.assert_status_ok();
        let view: CatalogView = response.json();
        assert_eq!(view.months.len(), 12);
        assert!(view.featured.is_some());
        assert!(view.empty_state.is_none());
        assert_eq!(view.search_term, "");
    }

    #[tokio::test]
    async fn filters_by_search_term() {
        let server = setup();

        let response = server
            .get("/api/v1/catalog")
            .add_query_param("q", "시리우스")
            .await;

        response.assert_status_ok();
        let view: CatalogView = response.json();
        assert_eq!(view.months.len(), 1);
        assert_eq!(view.months[0].month, 2);
        assert_eq!(view.months[0].objects[0].id, "canis_major");
    }

    #[tokio::test]
    async fn returns_empty_state_when_nothing_matches() {
        let server = setup();

        let response = server
            .get("/api/v1/catalog")
            .add_query_param("q", "블랙홀")
            .await;

        response.assert_status_ok();
        let view: CatalogView = response.json();
        assert!(view.months.is_empty());
        assert_eq!(view.empty_state.map(|e| e.title), Some(EMPTY_STATE_TITLE.to_string()));
    }

    #[tokio::test]
    async fn returns_month_by_number() {
        let server = setup();

        let response = server.get("/api/v1/months/7").await;

        response.assert_status_ok();
        let month: MonthEntry = response.json();
        assert_eq!(month.label, "7월");
        assert_eq!(month.season, Season::Summer);
        assert_eq!(month.objects[0].id, "scorpius");
    }

    #[tokio::test]
    async fn returns_not_found_for_unknown_month() {
        let server = setup();

        let response = server.get("/api/v1/months/13").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}

mod objects {
    use super::*;

    #[tokio::test]
    async fn returns_entry_by_id() {
        let server = setup();

        let response = server.get("/api/v1/objects/pleiades").await;

        response.assert_status_ok();
        let entry: CatalogEntry = response.json();
        assert_eq!(entry.name, "플레이아데스");
        assert_eq!(entry.category, ObjectCategory::Cluster);
    }

    #[tokio::test]
    async fn catalog_json_uses_camel_case_field_names() {
        let server = setup();

        let entry: serde_json::Value = server.get("/api/v1/objects/orion").await.json();
        assert!(entry.get("imagePlaceholder").is_some());
        assert!(entry.get("image_placeholder").is_none());

        let view: serde_json::Value = server
            .get("/api/v1/catalog")
            .add_query_param("q", "블랙홀")
            .await
            .json();
        assert!(view.get("searchTerm").is_some());
        assert!(view.get("emptyState").is_some());
    }

    #[tokio::test]
    async fn returns_not_found_for_unknown_id() {
        let server = setup();

        server
            .get("/api/v1/objects/betelgeuse")
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .get("/api/v1/objects/betelgeuse/details")
            .await
            .assert_status(StatusCode::NOT_FOUND);
        server
            .get("/api/v1/objects/betelgeuse/image")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn serves_placeholder_details_when_unconfigured() {
        let server = setup();

        let response = server.get("/api/v1/objects/orion/details").await;

        response.assert_status_ok();
        let detail: DetailResponse = response.json();
        assert_eq!(detail, fallback::unconfigured());
        assert_eq!(detail.difficulty, Difficulty::Medium);
    }

    #[tokio::test]
    async fn serves_null_image_when_unconfigured() {
        let server = setup();

        let response = server.get("/api/v1/objects/orion/image").await;

        response.assert_status_ok();
        let body: ImageResponse = response.json();
        assert!(body.image.is_none());
    }

    #[tokio::test]
    async fn serves_generated_details_and_image() {
        let service = FakeService::healthy();
        let server = setup_with(service.clone());

        let detail: DetailResponse = server.get("/api/v1/objects/hercules/details").await.json();
        assert_eq!(detail.story, "헤라클레스자리의 이야기");

        let image: ImageResponse = server.get("/api/v1/objects/hercules/image").await.json();
        assert_eq!(image.image.as_deref(), Some("data:image/png;base64,UE5HREFUQQ=="));
        assert_eq!(service.calls(), 2);
    }

    #[tokio::test]
    async fn detail_json_uses_schema_field_names() {
        let server = setup();

        let body: serde_json::Value = server.get("/api/v1/objects/orion/details").await.json();

        assert!(body.get("bestViewingTime").is_some());
        assert!(body.get("findingTip").is_some());
        assert!(body.get("interestingFacts").is_some());
        assert_eq!(body["difficulty"], "Medium");
    }
}

mod share {
    use super::*;

    #[tokio::test]
    async fn composes_share_text_from_details() {
        let server = setup();
        let detail = DetailResponse {
            story: "페르세우스는 메두사를 물리친 영웅입니다.".to_string(),
            best_viewing_time: "11월".to_string(),
            finding_tip: "카시오페이아 옆".to_string(),
            difficulty: Difficulty::Medium,
            interesting_facts: vec!["알골은 식쌍성".to_string()],
        };

        let response = server
            .post("/api/v1/objects/perseus/share")
            .json(&detail)
            .await;

        response.assert_status_ok();
        let share: ShareResponse = response.json();
        assert_eq!(share.title, "페르세우스자리");
        assert_eq!(
            share.text,
            "[StarGazer] 페르세우스자리 관측 정보\n\n페르세우스는 메두사를 물리친 영웅입니다....\n\n지금 앱에서 확인해보세요!"
        );
    }
}
