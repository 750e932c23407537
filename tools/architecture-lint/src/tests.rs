//! Unit tests for the architecture lint.

use rstest::{fixture, rstest};

use super::*;

#[derive(Clone, Copy)]
struct LintSingle;

impl LintSingle {
    fn lint(self, file: &str, contents: &str) -> Result<(), ArchitectureLintError> {
        lint_sources(&[LintSource {
            file: Utf8PathBuf::from(file),
            contents: contents.to_owned(),
        }])
    }
}

#[fixture]
fn lint_single() -> LintSingle {
    LintSingle
}

#[rstest]
#[case::inbound_uses_domain(
    "inbound/lambda/handler.rs",
    "use crate::domain::ports::PreSignupCommand; fn handle<C: PreSignupCommand>() {}",
    true
)]
#[case::inbound_uses_lambda_runtime(
    "inbound/lambda/mod.rs",
    "use lambda_runtime::LambdaEvent; fn handle(_e: LambdaEvent<()>) {}",
    true
)]
#[case::inbound_uses_outbound(
    "inbound/lambda/handler.rs",
    "use crate::outbound::cognito::CognitoUserDirectory; fn handle() { let _ = CognitoUserDirectory::new; }",
    false
)]
#[case::inbound_uses_outbound_via_crate_name(
    "inbound/lambda/handler.rs",
    "use presignup::outbound::cognito; fn handle() {}",
    false
)]
#[case::inbound_uses_sdk(
    "inbound/lambda/handler.rs",
    "fn handle() { let _ = aws_sdk_cognitoidentityprovider::Client::new; }",
    false
)]
#[case::domain_uses_lambda_runtime(
    "domain/signup_event.rs",
    "use lambda_runtime::LambdaEvent; struct Event(LambdaEvent<()>);",
    false
)]
#[case::domain_uses_sdk_types(
    "domain/ports/user_directory.rs",
    "use aws_sdk_cognitoidentityprovider::types::UserType; struct User(UserType);",
    false
)]
#[case::domain_uses_inbound_via_super(
    "domain/pre_signup_service.rs",
    "use super::super::inbound::lambda; fn thing() {}",
    false
)]
#[case::domain_uses_serde_json(
    "domain/signup_event.rs",
    "use serde_json::Value; struct Event(Value);",
    true
)]
#[case::outbound_uses_sdk(
    "outbound/cognito/directory.rs",
    "use aws_sdk_cognitoidentityprovider::Client; struct Adapter(Client);",
    true
)]
#[case::outbound_uses_inbound(
    "outbound/cognito/directory.rs",
    "use crate::inbound::lambda::InvocationError; fn thing() {}",
    false
)]
#[case::outbound_uses_lambda_runtime(
    "outbound/cognito/directory.rs",
    "fn thing() { let _ = lambda_runtime::Error::from; }",
    false
)]
fn detects_boundary_violations(
    lint_single: LintSingle,
    #[case] file: &str,
    #[case] contents: &str,
    #[case] ok: bool,
) {
    let result = lint_single.lint(file, contents);
    assert_eq!(result.is_ok(), ok, "result: {result:?}");
}

#[rstest]
fn files_outside_layer_modules_are_reported(lint_single: LintSingle) {
    let result = lint_single.lint("settings.rs", "pub struct Settings;");
    assert!(
        matches!(result, Err(ArchitectureLintError::Parse { .. })),
        "result: {result:?}"
    );
}

#[rstest]
fn unparsable_sources_are_reported(lint_single: LintSingle) {
    let result = lint_single.lint("domain/broken.rs", "fn (");
    assert!(
        matches!(result, Err(ArchitectureLintError::Parse { .. })),
        "result: {result:?}"
    );
}

#[test]
fn classify_resolves_crate_relative_paths() {
    let segments = |path: &str| path.split("::").map(str::to_owned).collect::<Vec<_>>();
    assert_eq!(
        classify(&segments("crate::outbound::cognito")),
        Target::Layer(Layer::Outbound)
    );
    assert_eq!(
        classify(&segments("super::super::domain::SignupEvent")),
        Target::Layer(Layer::Domain)
    );
    assert_eq!(classify(&segments("tracing::info")), Target::Crate("tracing"));
    assert_eq!(classify(&segments("self::mapping")), Target::Other);
}
