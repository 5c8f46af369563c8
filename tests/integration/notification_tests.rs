//! Notification delivery integration tests
//!
//! Webhook delivery happens off the request path: responses never wait for
//! it and never reflect its failures.

#[cfg(test)]
mod tests {
    use crate::common::{check_uri, generate_uri, state_with_sink};
    use actix_web::test;
    use keygate::config::WebhookConfig;
    use keygate::notifications::WebhookSink;
    use keygate::server::HttpServer;
    use serde_json::Value;
    use std::sync::Arc;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn sink_for(server: &MockServer) -> Arc<WebhookSink> {
        Arc::new(WebhookSink::new(&WebhookConfig::new(format!("{}/hook", server.uri()))).unwrap())
    }

    /// Wait for the webhook to receive `count` requests
    async fn received(server: &MockServer, count: usize) -> Vec<Value> {
        for _ in 0..50 {
            let requests = server.received_requests().await.unwrap_or_default();
            if requests.len() >= count {
                return requests
                    .iter()
                    .map(|r| serde_json::from_slice(&r.body).unwrap())
                    .collect();
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        panic!("webhook did not receive {} requests", count);
    }

    #[actix_web::test]
    async fn test_generate_and_expiry_are_posted() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hook"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        let app = test::init_service(HttpServer::create_app(state_with_sink(sink_for(&server))))
            .await;

        let req = test::TestRequest::get().uri(&generate_uri("0d")).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let key = body["result"].as_str().unwrap().to_string();

        let req = test::TestRequest::get().uri(&check_uri(&key)).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "key expired");

        let payloads = received(&server, 2).await;
        let titles: Vec<&str> = payloads
            .iter()
            .map(|p| p["embeds"][0]["title"].as_str().unwrap())
            .collect();
        assert!(titles.contains(&"✅ Key Generated"));
        assert!(titles.contains(&"❌ Key Expired"));
        for payload in &payloads {
            assert_eq!(
                payload["embeds"][0]["fields"][0]["value"],
                format!("```{}```", key)
            );
        }
    }

    #[actix_web::test]
    async fn test_failing_webhook_does_not_affect_response() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let app = test::init_service(HttpServer::create_app(state_with_sink(sink_for(&server))))
            .await;

        let req = test::TestRequest::get().uri(&generate_uri("1d")).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "success");

        received(&server, 1).await;
    }

    #[actix_web::test]
    async fn test_unreachable_webhook_does_not_affect_response() {
        let sink = Arc::new(
            WebhookSink::new(&WebhookConfig {
                url: "http://127.0.0.1:1/hook".to_string(),
                timeout: 1,
            })
            .unwrap(),
        );
        let app = test::init_service(HttpServer::create_app(state_with_sink(sink))).await;

        let req = test::TestRequest::get().uri(&generate_uri("1w")).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "success");
        assert_eq!(body["expired"], "168.00 hours");
    }
}
