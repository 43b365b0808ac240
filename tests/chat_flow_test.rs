//! Integration tests for the send and load flows against a mocked backend

mod test_utils;

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serde_json::json;

    use parley::api::ApiError;
    use parley::controller::APOLOGY_MESSAGE;
    use parley::schema::Role;

    use crate::test_utils::{reopen_store, test_app};

    fn roles_and_contents(store: &parley::store::SharedStore) -> Vec<(Role, String)> {
        store
            .read()
            .unwrap()
            .messages()
            .iter()
            .map(|m| (m.role, m.content.clone()))
            .collect()
    }

    #[tokio::test]
    async fn it_sends_a_first_message() {
        let mut server = mockito::Server::new_async().await;
        let chat = server
            .mock("POST", "/openai/chat")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(json!({"message": "Hello", "conversation_id": null})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "Hi!", "conversation_id": "c1"}"#)
            .create_async()
            .await;
        let history = server
            .mock("GET", "/openai/history")
            .with_status(200)
            .with_body(r#"[{"id": "c1", "title": "Hello"}]"#)
            .create_async()
            .await;

        let app = test_app(&server.url());
        app.controller.send_message("Hello").await.unwrap();

        chat.assert_async().await;
        history.assert_async().await;
        assert_eq!(
            roles_and_contents(&app.store),
            vec![
                (Role::Human, "Hello".to_string()),
                (Role::Ai, "Hi!".to_string())
            ]
        );
        assert_eq!(
            app.store.read().unwrap().selected_conversation_id(),
            Some("c1")
        );
    }

    #[tokio::test]
    async fn it_continues_the_conversation_with_its_id() {
        let mut server = mockito::Server::new_async().await;
        let _first = server
            .mock("POST", "/openai/chat")
            .match_body(Matcher::Json(json!({"message": "Hello", "conversation_id": null})))
            .with_status(200)
            .with_body(r#"{"message": "Hi!", "conversation_id": "c1"}"#)
            .create_async()
            .await;
        let second = server
            .mock("POST", "/openai/chat")
            .match_body(Matcher::Json(json!({"message": "How are you?", "conversation_id": "c1"})))
            .with_status(200)
            .with_body(r#"{"message": "Great", "conversation_id": "c1"}"#)
            .create_async()
            .await;
        let history = server
            .mock("GET", "/openai/history")
            .with_status(200)
            .with_body("[]")
            .expect(1)
            .create_async()
            .await;

        let app = test_app(&server.url());
        app.controller.send_message("Hello").await.unwrap();
        app.controller.send_message("How are you?").await.unwrap();

        second.assert_async().await;
        // Only the first reply starts a conversation
        history.assert_async().await;
        assert_eq!(app.store.read().unwrap().messages().len(), 4);
    }

    #[tokio::test]
    async fn it_routes_turbo_messages_to_web_search() {
        let mut server = mockito::Server::new_async().await;
        let search = server
            .mock("POST", "/openai/web-search")
            .with_status(200)
            .with_body(r#"{"message": "Found it", "conversation_id": "c5"}"#)
            .create_async()
            .await;
        let _history = server
            .mock("GET", "/openai/history")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        let app = test_app(&server.url());
        assert!(app.store.write().unwrap().toggle_turbo());
        app.controller.send_message("Latest news").await.unwrap();

        search.assert_async().await;
    }

    #[tokio::test]
    async fn it_keeps_the_human_message_and_apologizes_on_failure() {
        let mut server = mockito::Server::new_async().await;
        let _chat = server
            .mock("POST", "/openai/chat")
            .with_status(503)
            .with_body("upstream unavailable")
            .create_async()
            .await;

        let app = test_app(&server.url());
        let err = app.controller.send_message("Hello").await.unwrap_err();

        assert!(
            matches!(err, ApiError::Http { status: 503, ref body } if body == "upstream unavailable")
        );
        assert_eq!(
            roles_and_contents(&app.store),
            vec![
                (Role::Human, "Hello".to_string()),
                (Role::Ai, APOLOGY_MESSAGE.to_string())
            ]
        );
    }

    #[tokio::test]
    async fn it_apologizes_for_malformed_replies() {
        let mut server = mockito::Server::new_async().await;
        let _chat = server
            .mock("POST", "/openai/chat")
            .with_status(200)
            .with_body(r#"{"text": "wrong shape"}"#)
            .create_async()
            .await;

        let app = test_app(&server.url());
        let err = app.controller.send_message("Hello").await.unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        let messages = roles_and_contents(&app.store);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[1], (Role::Ai, APOLOGY_MESSAGE.to_string()));
    }

    #[tokio::test]
    async fn it_replaces_messages_when_loading_a_conversation() {
        let mut server = mockito::Server::new_async().await;
        let _chat = server
            .mock("POST", "/openai/chat")
            .with_status(200)
            .with_body(r#"{"message": "Hi!", "conversation_id": "c1"}"#)
            .create_async()
            .await;
        let _history = server
            .mock("GET", "/openai/history")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;
        let _data = server
            .mock("GET", "/openai/data/c2")
            .with_status(200)
            .with_body(
                json!([
                    {"conversationId": "c2", "timestamp": "2025-01-02T03:04:05Z", "content": "Plan a trip", "type": "USER"},
                    {"conversationId": "c2", "timestamp": "2025-01-02T03:04:09Z", "content": "Where to?", "type": "ASSISTANT"},
                    {"conversationId": "c2", "timestamp": "2025-01-02T03:05:00Z", "content": "Lisbon", "type": "USER"}
                ])
                .to_string(),
            )
            .create_async()
            .await;

        let app = test_app(&server.url());
        app.controller.send_message("Hello").await.unwrap();
        app.controller.load_conversation("c2").await.unwrap();

        assert_eq!(
            roles_and_contents(&app.store),
            vec![
                (Role::Human, "Plan a trip".to_string()),
                (Role::Ai, "Where to?".to_string()),
                (Role::Human, "Lisbon".to_string()),
            ]
        );
        assert_eq!(
            app.store.read().unwrap().selected_conversation_id(),
            Some("c2")
        );
    }

    #[tokio::test]
    async fn it_persists_state_across_restarts() {
        let mut server = mockito::Server::new_async().await;
        let _chat = server
            .mock("POST", "/openai/chat")
            .with_status(200)
            .with_body(r#"{"message": "Hi!", "conversation_id": "c1"}"#)
            .create_async()
            .await;
        let _history = server
            .mock("GET", "/openai/history")
            .with_status(200)
            .with_body(r#"[{"id": "c1", "title": "Hello"}]"#)
            .create_async()
            .await;

        let app = test_app(&server.url());
        app.controller.send_message("Hello").await.unwrap();
        app.store.write().unwrap().set_input_value("unsent draft");

        let restored = reopen_store(&app.config);
        let restored = restored.read().unwrap();
        let original = app.store.read().unwrap();

        assert_eq!(restored.messages(), original.messages());
        for (a, b) in restored.messages().iter().zip(original.messages()) {
            assert_eq!(a.timestamp, b.timestamp);
        }
        assert_eq!(restored.selected_conversation_id(), Some("c1"));
        assert_eq!(restored.selected_model_key(), original.selected_model_key());
        // History and drafts are never persisted
        assert!(restored.history().is_empty());
        assert_eq!(restored.input_value(), "");
    }
}
