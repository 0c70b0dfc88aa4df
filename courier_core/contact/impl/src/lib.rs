use courier_core_contact_contracts::{ContactFeatureService, ContactSubmitError};
use courier_extern_contracts::discord::DiscordApiService;
use courier_models::contact::{Submission, SubmissionFields};
use courier_shared_contracts::captcha::{CaptchaCheckError, CaptchaService};

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<Captcha, DiscordApi> {
    captcha: Captcha,
    discord_api: DiscordApi,
}

impl<Captcha, DiscordApi> ContactFeatureServiceImpl<Captcha, DiscordApi> {
    pub fn new(captcha: Captcha, discord_api: DiscordApi) -> Self {
        Self {
            captcha,
            discord_api,
        }
    }
}

impl<Captcha, DiscordApi> ContactFeatureService for ContactFeatureServiceImpl<Captcha, DiscordApi>
where
    Captcha: CaptchaService,
    DiscordApi: DiscordApiService,
{
    async fn submit(&self, fields: SubmissionFields) -> Result<(), ContactSubmitError> {
        let submission = Submission::try_from(fields).map_err(ContactSubmitError::InvalidFields)?;

        self.captcha
            .check(&submission.captcha)
            .await
            .map_err(|err| match err {
                CaptchaCheckError::Rejected(verdict) => {
                    ContactSubmitError::CaptchaRejected(verdict)
                }
                CaptchaCheckError::Other(err) => ContactSubmitError::CaptchaVerification(err),
            })?;

        let content = format_notification(&submission);
        self.discord_api
            .execute_webhook(&content)
            .await
            .map_err(ContactSubmitError::Delivery)
    }
}

fn format_notification(submission: &Submission) -> String {
    [
        "**New message from the contact form!**".into(),
        format!("**Name**: {}", sanitize(&submission.name)),
        format!("**Email**: {}", sanitize(&submission.email)),
        "**Message**:".into(),
        sanitize(&submission.message),
    ]
    .join("\n")
}

/// Strips `<`, `>`, `{`, `}`, `[`, `]`, `$` and `;` and trims surrounding
/// whitespace.
fn sanitize(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '{' | '}' | '[' | ']' | '$' | ';'))
        .collect::<String>()
        .trim()
        .to_owned()
}

#[cfg(test)]
mod tests {
    use courier_extern_contracts::discord::MockDiscordApiService;
    use courier_models::contact::{CaptchaVerdict, SubmissionErrors, SubmissionField};
    use courier_shared_contracts::captcha::MockCaptchaService;
    use courier_utils::assert_matches;

    use super::*;

    const NOTIFICATION: &str = "**New message from the contact form!**\n\
                                **Name**: Max Mustermann\n\
                                **Email**: max.mustermann@example.de\n\
                                **Message**:\n\
                                Hello World!";

    #[tokio::test]
    async fn ok() {
        // Arrange
        let captcha = MockCaptchaService::new().with_check("captcha response".into(), Ok(()));

        let discord_api =
            MockDiscordApiService::new().with_execute_webhook(NOTIFICATION.into(), Ok(()));

        let sut = ContactFeatureServiceImpl::new(captcha, discord_api);

        // Act
        let result = sut.submit(fields()).await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn sanitizes_notification() {
        // Arrange
        let captcha = MockCaptchaService::new().with_check("captcha response".into(), Ok(()));

        let discord_api = MockDiscordApiService::new().with_execute_webhook(
            "**New message from the contact form!**\n\
             **Name**: Max Mustermann\n\
             **Email**: max.mustermann@example.de\n\
             **Message**:\n\
             scripthi/script"
                .into(),
            Ok(()),
        );

        let sut = ContactFeatureServiceImpl::new(captcha, discord_api);

        // Act
        let result = sut
            .submit(SubmissionFields {
                name: Some("Max {Mustermann}".into()),
                message: Some("<script>$hi;</script>".into()),
                ..fields()
            })
            .await;

        // Assert
        result.unwrap();
    }

    #[tokio::test]
    async fn invalid_fields() {
        // Arrange
        let captcha = MockCaptchaService::new();
        let discord_api = MockDiscordApiService::new();

        let sut = ContactFeatureServiceImpl::new(captcha, discord_api);

        // Act
        let result = sut
            .submit(SubmissionFields {
                name: Some("J".into()),
                captcha: None,
                ..fields()
            })
            .await;

        // Assert
        let expected = [
            (
                SubmissionField::Name,
                "must be between 2 and 80 characters long",
            ),
            (SubmissionField::Captcha, "is required"),
        ]
        .into_iter()
        .collect::<SubmissionErrors>();
        assert_matches!(result, Err(ContactSubmitError::InvalidFields(errors)) if *errors == expected);
    }

    #[tokio::test]
    async fn captcha_rejected() {
        // Arrange
        let verdict = CaptchaVerdict {
            success: true,
            score: Some(0.3),
        };

        let captcha = MockCaptchaService::new().with_check(
            "captcha response".into(),
            Err(CaptchaCheckError::Rejected(verdict)),
        );
        let discord_api = MockDiscordApiService::new();

        let sut = ContactFeatureServiceImpl::new(captcha, discord_api);

        // Act
        let result = sut.submit(fields()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::CaptchaRejected(v)) if *v == verdict);
    }

    #[tokio::test]
    async fn captcha_verification_error() {
        // Arrange
        let captcha = MockCaptchaService::new().with_check(
            "captcha response".into(),
            Err(CaptchaCheckError::Other(anyhow::anyhow!(
                "recaptcha api unreachable"
            ))),
        );
        let discord_api = MockDiscordApiService::new();

        let sut = ContactFeatureServiceImpl::new(captcha, discord_api);

        // Act
        let result = sut.submit(fields()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::CaptchaVerification(_)));
    }

    #[tokio::test]
    async fn delivery_error() {
        // Arrange
        let captcha = MockCaptchaService::new().with_check("captcha response".into(), Ok(()));

        let discord_api = MockDiscordApiService::new().with_execute_webhook(
            NOTIFICATION.into(),
            Err(anyhow::anyhow!("webhook request failed")),
        );

        let sut = ContactFeatureServiceImpl::new(captcha, discord_api);

        // Act
        let result = sut.submit(fields()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Delivery(_)));
    }

    fn fields() -> SubmissionFields {
        SubmissionFields {
            name: Some("Max Mustermann".into()),
            email: Some("max.mustermann@example.de".into()),
            message: Some("Hello World!".into()),
            captcha: Some("captcha response".into()),
        }
    }
}
