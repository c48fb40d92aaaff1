// Data endpoints: bearer authorization, request shapes, error mapping.

#[cfg(test)]
mod test {

    use crate::data::DataClient;
    use crate::error::ClientError;
    use crate::report::{render_news_headlines, render_symbology};
    use crate::tests::common::*;

    const SYMBOLOGY_PATH: &str = "/discovery/symbology/v1/lookup";
    const NEWS_PATH: &str = "/data/news/v1/headlines";
    const ESG_PATH: &str = "/data/environmental-social-governance/v2/views/scores-full";

    fn data_client(server: &MockServer) -> DataClient {
        DataClient::new(build_reqwest_client(), endpoints(server))
    }

    #[tokio::test]
    async fn empty_token_is_rejected_before_transport() {
        let server = MockServer::start_async().await;
        let mut mocks = Vec::new();
        for (method, path) in [(POST, SYMBOLOGY_PATH), (GET, NEWS_PATH), (GET, ESG_PATH)] {
            let mock = server
                .mock_async(|when, then| {
                    when.method(method).path(path);
                    then.status(200).json_body(json!({"data": []}));
                })
                .await;
            mocks.push(mock);
        }
        let client = data_client(&server);

        let symbology = client.symbology("", "LSEG.L").await.unwrap_err();
        let news = client.news_headlines("", "LSEG.L", 10).await.unwrap_err();
        let esg = client.esg_scores("", "LSEG.L").await.unwrap_err();

        for err in [symbology, news, esg] {
            assert!(matches!(err, ClientError::MissingAccessToken), "{:?}", err);
        }
        for mock in &mocks {
            assert_eq!(mock.calls_async().await, 0);
        }
    }

    #[tokio::test]
    async fn symbology_lookup_with_bearer_token() {
        let server = MockServer::start_async().await;
        let lookup = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path(SYMBOLOGY_PATH)
                    .header("authorization", "Bearer A1")
                    .json_body(json!({
                        "from": [{"identifierTypes": ["RIC"], "values": ["LSEG.L"]}],
                        "to": [{"identifierTypes": ["ISIN", "LEI", "ExchangeTicker"]}],
                        "reference": ["name", "status", "classification"],
                        "type": "auto"
                    }));
                then.status(200).json_body(json!({
                    "data": [{
                        "input": [{"value": "LSEG.L", "identifierType": "RIC"}],
                        "output": [{"value": "GB00B0SWJX34", "identifierType": "ISIN", "name": "LSEG ORD", "status": "Active"}]
                    }]
                }));
            })
            .await;

        let response = data_client(&server).symbology("A1", "LSEG.L").await.expect("symbology");

        lookup.assert_async().await;
        assert_eq!(response.data[0].output[0].value, "GB00B0SWJX34");
        assert!(render_symbology(&response).contains("GB00B0SWJX34"));
    }

    #[tokio::test]
    async fn news_headlines_query_and_limit() {
        let server = MockServer::start_async().await;
        let headlines = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(NEWS_PATH)
                    .query_param("query", "LSEG.L")
                    .query_param("limit", "5")
                    .header("authorization", "Bearer A1");
                then.status(200).json_body(json!({
                    "data": [{
                        "storyId": "urn:1",
                        "newsItem": {"itemMeta": {"title": [{"$": "Headline"}], "versionCreated": {"$": "2024-01-01T00:00:00Z"}}}
                    }]
                }));
            })
            .await;

        let response = data_client(&server)
            .news_headlines("A1", "LSEG.L", 5)
            .await
            .expect("news");

        headlines.assert_async().await;
        assert_eq!(response.data.len(), 1);
        assert!(render_news_headlines(&response).contains("| Headline |"));
    }

    #[tokio::test]
    async fn esg_scores_for_universe() {
        let server = MockServer::start_async().await;
        let esg = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path(ESG_PATH)
                    .query_param("universe", "LSEG.L")
                    .header("authorization", "Bearer A1");
                then.status(200).json_body(json!({
                    "headers": [{"name": "instrument", "title": "Instrument"}, {"name": "ESGScore", "title": "ESG Score"}],
                    "data": [["LSEG.L", 77.5]]
                }));
            })
            .await;

        let response = data_client(&server).esg_scores("A1", "LSEG.L").await.expect("esg");

        esg.assert_async().await;
        assert_eq!(response.headers[1].label(), "ESG Score");
        assert_eq!(response.data[0][1], json!(77.5));
    }

    #[tokio::test]
    async fn non_success_status_is_api_error() {
        let server = MockServer::start_async().await;
        let _denied = server
            .mock_async(|when, then| {
                when.method(GET).path(NEWS_PATH);
                then.status(403).body("insufficient scope");
            })
            .await;

        let err = data_client(&server)
            .news_headlines("A1", "LSEG.L", 10)
            .await
            .unwrap_err();

        match err {
            ClientError::Api { endpoint, status, body } => {
                assert_eq!(endpoint, "news headlines");
                assert_eq!(status, 403);
                assert_eq!(body, "insufficient scope");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }
}
