// Authorization endpoint scenarios: password grant, refresh grant, rejected
// and malformed answers. State must only change on full success.

#[cfg(test)]
mod test {

    use std::time::Duration;

    use crate::auth::{Credentials, Lifecycle, TokenManager, TokenState};
    use crate::config::endpoints::EndpointsConfig;
    use crate::error::{AuthError, ClientError};
    use crate::tests::common::*;

    #[tokio::test]
    async fn password_grant_populates_state_and_arms_refresh() {
        let server = MockServer::start_async().await;
        let auth = mock_password_grant(&server, 200, token_body("A1", "R1", "600")).await;
        let manager = token_manager(&server);
        assert_eq!(manager.lifecycle(), Lifecycle::Init);
        assert_eq!(manager.scheduled_refresh_delay(), None);

        let state = manager.authenticate(None).await.expect("password grant");

        auth.assert_async().await;
        assert_eq!(state, TokenState::new("A1", "R1", 600));
        assert_eq!(manager.token_state().await, TokenState::new("A1", "R1", 600));
        assert_eq!(manager.access_token().await, "A1");
        assert_eq!(manager.lifecycle(), Lifecycle::Authenticated);
        assert_eq!(manager.scheduled_refresh_delay(), Some(Duration::from_millis(540_000)));
    }

    #[tokio::test]
    async fn empty_refresh_token_means_password_grant() {
        let server = MockServer::start_async().await;
        let auth = mock_password_grant(&server, 200, token_body("A1", "R1", "600")).await;
        let manager = token_manager(&server);

        manager.authenticate(Some("")).await.expect("password grant");

        assert_eq!(auth.calls_async().await, 1);
    }

    #[tokio::test]
    async fn rejected_password_grant_leaves_state_empty() {
        let server = MockServer::start_async().await;
        let auth = server
            .mock_async(|when, then| {
                when.method(POST).path(AUTH_PATH);
                then.status(400).body("invalid_grant");
            })
            .await;
        let manager = token_manager(&server);

        let err = manager.authenticate(None).await.unwrap_err();

        auth.assert_async().await;
        assert_eq!(
            err.as_auth(),
            Some(&AuthError { status: 400, body: "invalid_grant".to_string() })
        );
        assert_eq!(manager.token_state().await, TokenState::default());
        assert_eq!(manager.lifecycle(), Lifecycle::Failed);
        assert!(manager.lifecycle().is_terminal());
        assert_eq!(manager.scheduled_refresh_delay(), None);
    }

    #[tokio::test]
    async fn failed_first_login_is_final() {
        let server = MockServer::start_async().await;
        let auth = server
            .mock_async(|when, then| {
                when.method(POST).path(AUTH_PATH);
                then.status(400).body("invalid_grant");
            })
            .await;
        let manager = token_manager(&server);
        manager.authenticate(None).await.unwrap_err();

        let err = manager.authenticate(None).await.unwrap_err();

        assert!(matches!(err, ClientError::Closed(Lifecycle::Failed)), "{:?}", err);
        assert_eq!(auth.calls_async().await, 1);
        assert_eq!(manager.token_state().await, TokenState::default());
        assert_eq!(manager.scheduled_refresh_delay(), None);
    }

    #[tokio::test]
    async fn refresh_grant_replaces_state() {
        let server = MockServer::start_async().await;
        let _password = mock_password_grant(&server, 200, token_body("A1", "R1", "600")).await;
        let refresh = server
            .mock_async(|when, then| {
                when.method(POST).path(AUTH_PATH).body(refresh_grant_body("R1"));
                then.status(200).json_body(json!({
                    "access_token": "A2",
                    "refresh_token": "R2",
                    "expires_in": 1000
                }));
            })
            .await;
        let manager = token_manager(&server);

        manager.authenticate(None).await.expect("password grant");
        let state = manager.authenticate(Some("R1")).await.expect("refresh grant");

        refresh.assert_async().await;
        assert_eq!(state, TokenState::new("A2", "R2", 1000));
        assert_eq!(manager.access_token().await, "A2");
        assert_eq!(manager.scheduled_refresh_delay(), Some(Duration::from_secs(900)));
    }

    #[tokio::test]
    async fn failed_refresh_keeps_previous_state() {
        let server = MockServer::start_async().await;
        let _password = mock_password_grant(&server, 200, token_body("A1", "R1", "600")).await;
        let _refresh = server
            .mock_async(|when, then| {
                when.method(POST).path(AUTH_PATH).body(refresh_grant_body("R1"));
                then.status(401).body("invalid_token");
            })
            .await;
        let manager = token_manager(&server);
        manager.authenticate(None).await.expect("password grant");

        let err = manager.authenticate(Some("R1")).await.unwrap_err();

        assert_eq!(err.as_auth().map(|e| e.status), Some(401));
        assert_eq!(manager.token_state().await, TokenState::new("A1", "R1", 600));
        assert_eq!(manager.lifecycle(), Lifecycle::Authenticated);
        assert_eq!(manager.scheduled_refresh_delay(), Some(Duration::from_millis(540_000)));
    }

    #[tokio::test]
    async fn response_without_tokens_is_malformed() {
        let server = MockServer::start_async().await;
        let _auth = mock_password_grant(&server, 200, json!({
            "access_token": "",
            "refresh_token": "",
            "expires_in": "600"
        }))
        .await;
        let manager = token_manager(&server);

        let err = manager.authenticate(None).await.unwrap_err();

        assert!(matches!(err, ClientError::Malformed(_)), "{:?}", err);
        assert_eq!(manager.token_state().await, TokenState::default());
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_transport_error() {
        let manager = TokenManager::new(
            build_reqwest_client(),
            &EndpointsConfig::new("http://127.0.0.1:1"),
            Credentials::new("u", "pw", "cid"),
        );

        let err = manager.authenticate(None).await.unwrap_err();

        assert!(matches!(err, ClientError::Transport(_)), "{:?}", err);
        assert_eq!(manager.lifecycle(), Lifecycle::Failed);
    }

    #[tokio::test]
    async fn rescheduling_replaces_the_timer() {
        let server = MockServer::start_async().await;
        let manager = token_manager(&server);

        assert_eq!(manager.schedule_refresh(1000), Duration::from_secs(900));
        assert_eq!(manager.schedule_refresh(1000), Duration::from_secs(900));
        assert_eq!(manager.scheduled_refresh_delay(), Some(Duration::from_secs(900)));

        assert_eq!(manager.schedule_refresh(600), Duration::from_millis(540_000));
        assert_eq!(manager.scheduled_refresh_delay(), Some(Duration::from_millis(540_000)));

        manager.cancel_refresh();
        assert_eq!(manager.scheduled_refresh_delay(), None);
    }

    #[tokio::test]
    async fn refresh_ratio_is_configurable() {
        let server = MockServer::start_async().await;
        let manager = token_manager(&server).with_refresh_ratio(50);

        assert_eq!(manager.schedule_refresh(600), Duration::from_secs(300));
        manager.cancel_refresh();
    }

    #[tokio::test]
    async fn refresh_ratio_applies_to_every_clone() {
        let server = MockServer::start_async().await;
        let manager = token_manager(&server);
        let shared = manager.clone().with_refresh_ratio(50);

        assert_eq!(manager.schedule_refresh(600), Duration::from_secs(300));
        assert_eq!(shared.scheduled_refresh_delay(), Some(Duration::from_secs(300)));
        manager.cancel_refresh();
    }
}
