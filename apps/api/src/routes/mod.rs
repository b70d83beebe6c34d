pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::feedback::handlers as feedback;
use crate::skills::handlers as skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Skills API
        .route("/api/v1/skills/extract", post(skills::handle_extract_skills))
        .route("/api/v1/documents/parse", post(skills::handle_parse_document))
        // Analysis API
        .route("/api/v1/analysis/gap", post(analysis::handle_gap_analysis))
        .route("/api/v1/analysis/job-fit", post(analysis::handle_job_fit))
        .route(
            "/api/v1/analysis/resume-feedback",
            post(feedback::handle_resume_feedback),
        )
        // Roles API
        .route("/api/v1/roles/recommend", post(analysis::handle_recommend_roles))
        .route("/api/v1/roles", get(analysis::handle_list_roles))
        .route("/api/v1/roles/:id", get(analysis::handle_get_role))
        // Catalogs
        .route(
            "/api/v1/resources/skills",
            get(analysis::handle_resource_skills),
        )
        .route("/api/v1/market/domains", get(analysis::handle_market_domains))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::analysis::{AnalysisSettings, ResourceCatalog, RoleCatalog};
    use crate::config::Config;
    use crate::market::MarketCorpus;
    use crate::skills::{SkillExtractor, SkillTaxonomy};

    const ROLES_JSON: &str = r#"{"roles": [
        {"id": "frontend-intern", "title": "Frontend Developer Intern", "company_types": ["Startups"],
         "requiredSkills": ["HTML", "CSS", "JavaScript"], "preferredSkills": ["React"], "minReadiness": 20},
        {"id": "ml-intern", "title": "Machine Learning Intern",
         "requiredSkills": ["Python", "TensorFlow"], "preferredSkills": ["Docker"], "minReadiness": 90}
    ]}"#;

    const RESOURCES_JSON: &str = r#"{
        "react": {"skill": "React", "resources": [{"title": "React Docs", "url": "https://react.dev/", "duration": "8 hours"}]},
        "ts": {"skill": "TypeScript", "resources": [{"title": "TS Handbook", "url": "https://www.typescriptlang.org/docs/"}]}
    }"#;

    const RESUME: &str = "Software engineering student.\n\
        • Developed a React dashboard used by 300 students\n\
        • Led a team of 4 to build a Python scheduling service\n\
        • Improved page load time by 35% with caching\n";

    fn test_state() -> AppState {
        let taxonomy = Arc::new(SkillTaxonomy::default());
        let analysis = AnalysisSettings::default();
        AppState {
            config: Config {
                port: 0,
                rust_log: "info".to_string(),
                roles_catalog_path: PathBuf::new(),
                resources_catalog_path: PathBuf::new(),
                analysis: analysis.clone(),
            },
            extractor: Arc::new(SkillExtractor::new(taxonomy.clone())),
            resources: Arc::new(ResourceCatalog::from_json(RESOURCES_JSON).unwrap()),
            roles: Arc::new(RoleCatalog::from_json(ROLES_JSON).unwrap()),
            market: Arc::new(MarketCorpus::builtin(&taxonomy, &analysis.default_domain)),
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Value) {
        send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    async fn post_file(file_name: &str, content_type: &str, contents: &str) -> (StatusCode, Value) {
        let body = format!(
            "--BOUNDARY\r\n\
             Content-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\n\
             Content-Type: {content_type}\r\n\r\n\
             {contents}\r\n\
             --BOUNDARY--\r\n"
        );
        send(
            Request::builder()
                .method("POST")
                .uri("/api/v1/documents/parse")
                .header("content-type", "multipart/form-data; boundary=BOUNDARY")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "skillbridge-api");
    }

    #[tokio::test]
    async fn test_extract_skills() {
        let (status, body) = post_json(
            "/api/v1/skills/extract",
            json!({"text": "Built dashboards in React and TypeScript backed by PostgreSQL"}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"]["frameworks"][0], "React");
        assert!(body["total_skills"].as_u64().unwrap() >= 3);
        for key in ["languages", "frameworks", "databases", "tools", "concepts"] {
            assert!(body["skills"][key].is_array(), "missing category {key}");
        }
    }

    #[tokio::test]
    async fn test_extract_rejects_short_text() {
        let (status, body) = post_json("/api/v1/skills/extract", json!({"text": "  Rust  "})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_gap_against_builtin_corpus() {
        let (status, body) = post_json(
            "/api/v1/analysis/gap",
            json!({
                "user_skills": {"languages": ["JavaScript", "HTML", "CSS"], "frameworks": ["React"]},
                "domain": "Frontend Developer"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let score = body["readiness_score"].as_u64().unwrap();
        assert!(score > 0 && score < 100);
        assert_eq!(body["user_skill_count"], 4);
        assert_eq!(body["missing_skills"][0]["skill"], "Ts");
        assert_eq!(body["missing_skills"][0]["priority"], "Critical");
        assert_eq!(body["generated_roadmap"][0]["order"], 1);
        assert_eq!(body["generated_roadmap"][0]["resources"][0]["title"], "TS Handbook");
    }

    #[tokio::test]
    async fn test_gap_against_supplied_postings() {
        let (status, body) = post_json(
            "/api/v1/analysis/gap",
            json!({
                "user_skills": {"languages": ["Python"]},
                "job_descriptions": [
                    "Python developer with SQL skills",
                    "Python and Docker engineer",
                    "   "
                ]
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        // python 2 of total weight 4
        assert_eq!(body["readiness_score"], 50);
        assert_eq!(body["total_market_skills"], 3);
    }

    #[tokio::test]
    async fn test_job_fit_with_ats() {
        let (status, body) = post_json(
            "/api/v1/analysis/job-fit",
            json!({
                "user_skills": {"languages": ["Python"], "frameworks": ["React"]},
                "job_description": "Looking for an intern who knows Python, React and Docker to build internal tools.",
                "resume_text": RESUME,
                "domain": "Full Stack Developer"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["matched_skills"]
            .as_array()
            .unwrap()
            .contains(&json!("Python")));
        assert!(body["missing_skills"]
            .as_array()
            .unwrap()
            .contains(&json!("Docker")));
        assert!(body["ats_score"]["overall_score"].is_u64());
        assert_eq!(body["domain"], "Full Stack Developer");
    }

    #[tokio::test]
    async fn test_job_fit_rejects_short_description() {
        let (status, _) = post_json(
            "/api/v1/analysis/job-fit",
            json!({"user_skills": {}, "job_description": "Python dev"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_resume_feedback() {
        let (status, body) = post_json(
            "/api/v1/analysis/resume-feedback",
            json!({"resume_text": RESUME}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["sections"]["bullet_points"]["total_bullets"], 3);
        assert!(body["overall_score"].as_u64().unwrap() <= 100);
        assert!(body["quality_level"].is_string());

        let (status, _) = post_json(
            "/api/v1/analysis/resume-feedback",
            json!({"resume_text": "too short"}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_recommend_roles() {
        let (status, body) = post_json(
            "/api/v1/roles/recommend",
            json!({
                "user_skills": {"languages": ["HTML", "CSS", "JavaScript"]},
                "readiness_score": 40
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        // ml-intern needs 90 readiness and is out of reach
        assert_eq!(body["count"], 1);
        assert_eq!(body["recommendations"][0]["id"], "frontend-intern");
        assert_eq!(body["recommendations"][0]["fit_score"], 70);
        assert_eq!(body["recommendations"][0]["status"], "Ready");
        assert_eq!(body["recommendations"][0]["skill_coverage"], "3/3");
    }

    #[tokio::test]
    async fn test_recommend_roles_rejects_out_of_range_readiness() {
        let (status, body) = post_json(
            "/api/v1/roles/recommend",
            json!({"user_skills": {"languages": ["Python"]}, "readiness_score": 101}),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");

        let (status, body) = post_json(
            "/api/v1/roles/recommend",
            json!({"user_skills": {"languages": ["Python"]}, "readiness_score": 100}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 2);
    }

    #[tokio::test]
    async fn test_role_lookup() {
        let (status, body) = get_json("/api/v1/roles").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["count"], 2);

        let (status, body) = get_json("/api/v1/roles/ml-intern").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["minReadiness"], 90);

        let (status, body) = get_json("/api/v1/roles/astronaut").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_catalog_listings() {
        let (status, body) = get_json("/api/v1/resources/skills").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"], json!(["React", "TypeScript"]));

        let (status, body) = get_json("/api/v1/market/domains").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["domains"].as_array().unwrap().len(), 5);
        assert_eq!(body["default_domain"], "Frontend Developer");
    }

    #[tokio::test]
    async fn test_parse_plain_text_document() {
        let contents = "Jane Doe. Computer science student with Python, Django and PostgreSQL experience. \
                        Deployed services with Docker.";
        let (status, body) = post_file("cv.txt", "text/plain", contents).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["file_name"], "cv.txt");
        assert!(body["skills"]["languages"]
            .as_array()
            .unwrap()
            .contains(&json!("Python")));
        assert!(body["total_skills"].as_u64().unwrap() >= 4);
    }

    #[tokio::test]
    async fn test_parse_rejects_bad_uploads() {
        let (status, _) = post_file("cv.docx", "application/msword", "whatever").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = post_file("cv.txt", "text/plain", "Python").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"]["message"],
            "Could not extract sufficient text from document"
        );
    }
}
