//! Key endpoint integration tests
//!
//! Every key outcome is a `200 OK` carrying a `status` field.

#[cfg(test)]
mod tests {
    use crate::common::{check_uri, generate_uri, memory_state};
    use actix_web::test;
    use chrono::{Duration, Utc};
    use keygate::core::keys::KeyRecord;
    use keygate::server::HttpServer;
    use keygate::storage::KeyStore;
    use serde_json::Value;

    /// GET `uri` and return the status code with the JSON body
    macro_rules! get_json {
        ($app:expr, $uri:expr) => {{
            let resp =
                test::call_service($app, test::TestRequest::get().uri($uri).to_request()).await;
            let status = resp.status().as_u16();
            let body: Value = test::read_body_json(resp).await;
            (status, body)
        }};
    }

    // ==================== /generate ====================

    #[actix_web::test]
    async fn test_generate_one_day() {
        let (state, _) = memory_state();
        let app = test::init_service(HttpServer::create_app(state)).await;

        let (status, body) = get_json!(&app, &generate_uri("1d"));
        assert_eq!(status, 200);
        assert_eq!(body["status"], "success");
        assert_eq!(body["expired"], "24.00 hours");

        let key = body["result"].as_str().unwrap();
        assert_eq!(key.len(), 32);
        assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[actix_web::test]
    async fn test_generate_week_and_month() {
        let (state, _) = memory_state();
        let app = test::init_service(HttpServer::create_app(state)).await;

        let (_, body) = get_json!(&app, &generate_uri("1w"));
        assert_eq!(body["expired"], "168.00 hours");

        let (_, body) = get_json!(&app, &generate_uri("1m"));
        assert_eq!(body["expired"], "720.00 hours");
    }

    #[actix_web::test]
    async fn test_generate_without_parameter() {
        let (state, store) = memory_state();
        let app = test::init_service(HttpServer::create_app(state)).await;

        for uri in ["/generate", "/generate?expired="] {
            let (status, body) = get_json!(&app, uri);
            assert_eq!(status, 200);
            assert_eq!(body["status"], "error");
            assert_eq!(body["message"], "Please provide expiration parameter");
        }
        assert!(store.is_empty());
    }

    #[actix_web::test]
    async fn test_generate_malformed_token() {
        let (state, store) = memory_state();
        let app = test::init_service(HttpServer::create_app(state)).await;

        for token in ["abc", "5x", "1.5d", "-2w"] {
            let (status, body) = get_json!(&app, &generate_uri(token));
            assert_eq!(status, 200);
            assert_eq!(body["status"], "error");
            assert_eq!(body["message"], "Invalid expiration format");
        }
        assert!(store.is_empty());
    }

    // ==================== /check ====================

    #[actix_web::test]
    async fn test_check_live_key_is_stable() {
        let (state, _) = memory_state();
        let app = test::init_service(HttpServer::create_app(state)).await;

        let (_, body) = get_json!(&app, &generate_uri("2d"));
        let key = body["result"].as_str().unwrap().to_string();

        let (_, first) = get_json!(&app, &check_uri(&key));
        let (_, second) = get_json!(&app, &check_uri(&key));

        assert_eq!(first["status"], "success");
        assert_eq!(second["status"], "success");
        assert_eq!(first["key"], key.as_str());

        let hours = |v: &Value| -> f64 {
            v["expired"]
                .as_str()
                .unwrap()
                .trim_end_matches(" hours")
                .parse()
                .unwrap()
        };
        assert!(hours(&second) <= hours(&first));
        assert!(hours(&second) > 47.0);
    }

    #[actix_web::test]
    async fn test_check_unknown_key() {
        let (state, _) = memory_state();
        let app = test::init_service(HttpServer::create_app(state)).await;

        let (status, body) = get_json!(&app, &check_uri("doesnotexist"));
        assert_eq!(status, 200);
        assert_eq!(body["status"], "invalid key");
        assert_eq!(body["key"], "doesnotexist");
    }

    #[actix_web::test]
    async fn test_check_without_key() {
        let (state, _) = memory_state();
        let app = test::init_service(HttpServer::create_app(state)).await;

        let (status, body) = get_json!(&app, "/check");
        assert_eq!(status, 200);
        assert_eq!(body["status"], "error");
        assert_eq!(body["message"], "Please provide key parameter");
    }

    #[actix_web::test]
    async fn test_zero_day_key_expires_then_becomes_invalid() {
        let (state, store) = memory_state();
        let app = test::init_service(HttpServer::create_app(state)).await;

        let (_, body) = get_json!(&app, &generate_uri("0d"));
        assert_eq!(body["status"], "success");
        assert_eq!(body["expired"], "0.00 hours");
        let key = body["result"].as_str().unwrap().to_string();

        let (_, body) = get_json!(&app, &check_uri(&key));
        assert_eq!(body["status"], "key expired");
        assert_eq!(body["key"], key.as_str());
        assert!(store.is_empty());

        let (_, body) = get_json!(&app, &check_uri(&key));
        assert_eq!(body["status"], "invalid key");
    }

    #[actix_web::test]
    async fn test_key_past_deadline_is_reported_expired() {
        let (state, store) = memory_state();
        let app = test::init_service(HttpServer::create_app(state)).await;

        store
            .set(&KeyRecord::new("old", Utc::now() - Duration::hours(1)), 0)
            .await
            .unwrap();

        let (_, body) = get_json!(&app, &check_uri("old"));
        assert_eq!(body["status"], "key expired");
        let (_, body) = get_json!(&app, &check_uri("old"));
        assert_eq!(body["status"], "invalid key");
    }

    // ==================== /data ====================

    #[actix_web::test]
    async fn test_data_never_lists_expired_keys() {
        let (state, store) = memory_state();
        let app = test::init_service(HttpServer::create_app(state)).await;

        store
            .set(&KeyRecord::new("old", Utc::now() - Duration::minutes(5)), 0)
            .await
            .unwrap();
        let (_, body) = get_json!(&app, &generate_uri("1d"));
        let live = body["result"].as_str().unwrap().to_string();
        let (_, body) = get_json!(&app, &generate_uri("0d"));
        let instant = body["result"].as_str().unwrap().to_string();

        let (status, body) = get_json!(&app, "/data");
        assert_eq!(status, 200);
        assert_eq!(body["Count"], 1);

        let keys = body["keys"].as_object().unwrap();
        assert!(keys.contains_key(&live));
        assert!(!keys.contains_key("old"));
        assert!(!keys.contains_key(&instant));

        // YYYY-MM-DD HH:MM:SS
        let timestamp = keys[&live].as_str().unwrap();
        assert_eq!(timestamp.len(), 19);
        assert!(chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").is_ok());
    }

    #[actix_web::test]
    async fn test_data_on_empty_store() {
        let (state, _) = memory_state();
        let app = test::init_service(HttpServer::create_app(state)).await;

        let (_, body) = get_json!(&app, "/data");
        assert_eq!(body["Count"], 0);
        assert!(body["keys"].as_object().unwrap().is_empty());
    }

    // ==================== /health ====================

    #[actix_web::test]
    async fn test_health_reports_store() {
        let (state, _) = memory_state();
        let app = test::init_service(HttpServer::create_app(state)).await;

        let (status, body) = get_json!(&app, "/health");
        assert_eq!(status, 200);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["store"], "memory");
    }
}
