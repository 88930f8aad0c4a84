
#[cfg(test)]
mod test {
    use crate::commons::{DefaultData, ResendGatewayMock, TestContext};
    use appointment_notifier::error::{FAILED_TO_SEND_EMAIL, INTERNAL_SERVER_ERROR, MISSING_REQUIRED_FIELDS};
    use appointment_notifier::notifier_resources::{NotifierResources, DEFAULT_HTTP_TIMEOUT_IN_MILLIS, DEFAULT_RESEND_BASE_URL};
    use serde_json::{json, Value};
    use serial_test::serial;
    use std::env;
    use test_context::test_context;

    #[test_context(TestContext)]
    #[tokio::test]
    async fn should_return_provider_id_on_success(ctx: &mut TestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        ResendGatewayMock::success(ctx, "email_123").await;

        let message_id = ctx.service().notify(&DefaultData::payload()).await?;

        assert_eq!("email_123", message_id);
        assert_eq!(1, ctx.received_requests_len().await);

        Ok(())
    }

    #[test_context(TestContext)]
    #[tokio::test]
    async fn should_send_defaults_for_missing_optional_fields(ctx: &mut TestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        ResendGatewayMock::success(ctx, "email_123").await;

        ctx.service().notify(&DefaultData::payload()).await?;

        let requests = ctx.mock_server.received_requests().await.unwrap_or_default();
        let sent = serde_json::from_slice::<Value>(&requests[0].body)?;
        let html = sent["html"].as_str().unwrap_or_default();
        for expected in ["Dr. Lee", "2024-06-01", "10:00", "General Consultation", "30 min", "$0"] {
            assert!(html.contains(expected), "{expected} not found in sent html");
        }
        assert_eq!(json!(["a@b.com"]), sent["to"]);

        Ok(())
    }

    #[test_context(TestContext)]
    #[tokio::test]
    async fn should_not_dispatch_when_required_field_is_missing(ctx: &mut TestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        ResendGatewayMock::success(ctx, "email_123").await;

        for key in ["userEmail", "doctorName", "appointmentDate", "appointmentTime"] {
            let error = ctx.service().notify(&DefaultData::payload_without(key)).await.unwrap_err();

            assert_eq!(400, error.status_code);
            assert_eq!(Some(MISSING_REQUIRED_FIELDS.to_string()), error.message);
        }

        assert_eq!(0, ctx.received_requests_len().await);

        Ok(())
    }

    #[test_context(TestContext)]
    #[tokio::test]
    async fn should_hide_provider_error_behind_generic_message(ctx: &mut TestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        ResendGatewayMock::failure(ctx, 403, json!({ "statusCode": 403, "name": "invalid_api_key", "message": "API key is invalid" })).await;

        let error = ctx.service().notify(&DefaultData::payload()).await.unwrap_err();

        assert_eq!(500, error.status_code);
        assert_eq!(Some(FAILED_TO_SEND_EMAIL.to_string()), error.message);
        assert!(error.cause.contains("API key is invalid"));
        assert_eq!(1, ctx.received_requests_len().await);

        Ok(())
    }

    #[test_context(TestContext)]
    #[tokio::test]
    async fn should_reject_non_object_payload_as_internal_error(ctx: &mut TestContext) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let error = ctx.service().notify(&json!(["a@b.com"])).await.unwrap_err();

        assert_eq!(500, error.status_code);
        assert_eq!(Some(INTERNAL_SERVER_ERROR.to_string()), error.message);
        assert_eq!(0, ctx.received_requests_len().await);

        Ok(())
    }

    #[test]
    #[serial]
    fn should_fail_fast_without_api_key() {
        env::remove_var("RESEND_API_KEY");

        let error = NotifierResources::from_env().err().unwrap();

        assert_eq!("RESEND_API_KEY environment variable is required", error.cause);
    }

    #[test]
    #[serial]
    fn should_load_resources_from_env() {
        env::set_var("RESEND_API_KEY", "re_live_key");
        env::set_var("RESEND_BASE_URL", "http://localhost:4010/");
        env::set_var("EMAIL_FROM", "Clinic <clinic@example.com>");
        env::set_var("HTTP_TIMEOUT_IN_MILLIS", "1500");

        let resources = NotifierResources::from_env().unwrap();

        assert_eq!("re_live_key", resources.resend_api_key);
        assert_eq!("http://localhost:4010", resources.resend_base_url());
        assert_eq!("Clinic <clinic@example.com>", resources.sender());
        assert_eq!(1500, resources.http_timeout_in_millis());

        env::remove_var("RESEND_BASE_URL");
        env::remove_var("EMAIL_FROM");
        env::remove_var("HTTP_TIMEOUT_IN_MILLIS");

        let resources = NotifierResources::from_env().unwrap();

        assert_eq!(DEFAULT_RESEND_BASE_URL, resources.resend_base_url());
        assert_eq!(DEFAULT_HTTP_TIMEOUT_IN_MILLIS, resources.http_timeout_in_millis());

        env::remove_var("RESEND_API_KEY");
    }

    #[test]
    #[serial]
    fn should_fail_on_unparseable_timeout() {
        env::set_var("RESEND_API_KEY", "re_live_key");
        env::set_var("HTTP_TIMEOUT_IN_MILLIS", "soon");

        let error = NotifierResources::from_env().err().unwrap();

        assert_eq!("Failed to parse HTTP_TIMEOUT_IN_MILLIS=soon", error.cause);

        env::remove_var("HTTP_TIMEOUT_IN_MILLIS");
        env::remove_var("RESEND_API_KEY");
    }
}
