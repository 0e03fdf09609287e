//! End-to-end tests for the sso-cli binary.

use assert_cmd::Command;
use predicates::prelude::*;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LOGIN_PAGE: &str = r#"<html><body><form>
    <input type="hidden" name="execution" value="TOKEN123">
</form></body></html>"#;

const TICKET_URL: &str = "https://bykc.buaa.edu.cn/sscv/cas/login?ticket=ABC";

/// Command with a hermetic environment: no `.env`, no ambient SSO_* vars.
fn sso_cli() -> Command {
    let mut cmd = Command::cargo_bin("sso-cli").unwrap();
    cmd.env("DOTENV_DISABLED", "1");
    for var in [
        "SSO_USERNAME",
        "SSO_PASSWORD",
        "SSO_USER_AGENT",
        "SSO_LOGIN_PAGE_URL",
        "SSO_LOGIN_URL",
        "SSO_SERVICE_URL",
        "SSO_CONFIG_PATH",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn test_help_describes_the_login_flow() {
    sso_cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("ticket URL"));
}

#[test]
fn test_missing_credentials_exits_with_general_error() {
    sso_cli()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Username is required"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_successful_login_prints_the_ticket_url() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LOGIN_PAGE))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_string_contains("execution=TOKEN123"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", TICKET_URL))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        sso_cli()
            .args(["--username", "alice", "--password", "hunter2"])
            .args(["--login-page-url", &format!("{}/login", uri)])
            .args(["--login-url", &format!("{}/login", uri)])
            .assert()
            .success()
            .stdout(format!("{}\n", TICKET_URL));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_credentials_exit_with_auth_code() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LOGIN_PAGE))
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_string("用户名或密码错误"))
        .mount(&server)
        .await;

    let uri = server.uri();
    tokio::task::spawn_blocking(move || {
        sso_cli()
            .args(["--username", "alice", "--password", "wrong"])
            .args(["--login-page-url", &format!("{}/login", uri)])
            .args(["--login-url", &format!("{}/login", uri)])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("wrong username or password"));
    })
    .await
    .unwrap();
}
