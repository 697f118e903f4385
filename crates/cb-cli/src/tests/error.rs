use crate::error::CliError;

use cb_client::ClientError;
use cb_core::DashboardKind;

use googletest::prelude::*;

#[test]
fn given_not_signed_in_when_checked_then_login_needed() {
    assert_that!(CliError::NotSignedIn.needs_login(), eq(true));
}

#[test]
fn given_failed_refresh_when_checked_then_login_needed() {
    let error = CliError::from(ClientError::refresh_failed("refresh token revoked"));

    assert_that!(error.needs_login(), eq(true));
}

#[test]
fn given_server_error_when_checked_then_login_not_needed() {
    let error = CliError::from(ClientError::server(502, "Bad Gateway"));

    assert_that!(error.needs_login(), eq(false));
}

#[test]
fn given_wrong_dashboard_when_shown_then_both_kinds_named() {
    let error = CliError::WrongDashboard {
        command: "tenant",
        expected: DashboardKind::Admin,
        actual: DashboardKind::Tenant,
    };

    let message = error.user_message();

    assert_that!(message, contains_substring("needs the admin dashboard"));
    assert_that!(message, contains_substring("current: tenant"));
}
