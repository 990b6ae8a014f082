#[cfg(test)]
mod tests {
    use http::{Method, StatusCode};

    use crate::tests::common::{build_reqwest_client, scrape, samples, spawn_app};

    #[tokio::test]
    async fn greeting_is_served_for_every_method() {
        let (handle, addr, _metrics) = spawn_app().await;
        let client = build_reqwest_client();
        let url = format!("http://{}/", addr);

        for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            let response = client
                .request(method.clone(), &url)
                .header("x-anything", "ignored")
                .send()
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", method);
            assert_eq!(response.text().await.unwrap(), "Hello from example application.");
        }

        handle.abort();
    }

    #[tokio::test]
    async fn err_route_is_an_empty_404() {
        let (handle, addr, _metrics) = spawn_app().await;
        let client = build_reqwest_client();
        let url = format!("http://{}/err", addr);

        for method in [Method::GET, Method::POST, Method::OPTIONS] {
            let response = client.request(method.clone(), &url).send().await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", method);
            assert!(response.text().await.unwrap().is_empty());
        }

        handle.abort();
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_without_counting() {
        let (handle, addr, _metrics) = spawn_app().await;
        let client = build_reqwest_client();

        for path in ["/nope", "/err/", "/metrics/", "/hello/world"] {
            let response = client
                .get(format!("http://{}{}", addr, path))
                .send()
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", path);
            assert_eq!(response.text().await.unwrap(), "404 page not found\n");
        }

        let exposition = scrape(&client, addr).await;
        assert!(samples(&exposition, "http_requests_total").is_empty());

        handle.abort();
    }
}
