use crate::console_navigator::ConsoleNavigator;

use cb_client::{Navigator, Route};

use googletest::prelude::*;

#[test]
fn given_no_navigation_when_queried_then_no_route() {
    let navigator = ConsoleNavigator::default();

    assert_that!(navigator.last_route(), none());
}

#[test]
fn given_several_navigations_when_queried_then_last_one_wins() {
    // Given
    let navigator = ConsoleNavigator::default();

    // When
    navigator.navigate(&Route::Dashboard);
    navigator.navigate(&Route::Login);

    // Then
    assert_that!(navigator.last_route(), some(eq(&Route::Login)));
}
