//! Step definitions for the forecast page
//!
//! Covers the one-way collection binding from `FetchDataModel` to
//! `FetchDataVm` and cancellable asynchronous initialization.

use crate::common::world::BindlineWorld;
use bindline::models::WeatherForecast;
use bindline::mvvm::{CancellationToken, MvvmError};
use chrono::NaiveDate;
use cucumber::gherkin::Step;
use cucumber::{given, then, when};

#[given("the forecast service returns:")]
async fn given_service_returns(world: &mut BindlineWorld, step: &Step) {
    let table = step.table.as_ref().expect("a forecast table");
    let forecasts = table
        .rows
        .iter()
        .skip(1)
        .map(|row| {
            let date = NaiveDate::parse_from_str(&row[0], "%Y-%m-%d").expect("date");
            let temperature_c = row[1].parse::<i32>().expect("temperature");
            WeatherForecast::new(date, temperature_c, row[2].as_str())
        })
        .collect();
    world.service.set_forecasts(forecasts);
}

#[given(regex = r#"^the forecast service fails with "([^"]+)"$"#)]
async fn given_service_fails(world: &mut BindlineWorld, message: String) {
    world.service.fail_with(&message);
}

#[given("the forecast page has been created")]
async fn given_fetch_data_page_created(world: &mut BindlineWorld) {
    world.create_fetch_data_page();
}

#[when("I create the forecast page")]
async fn when_create_fetch_data_page(world: &mut BindlineWorld) {
    world.create_fetch_data_page();
}

#[given("a fresh cancellation token")]
async fn given_fresh_token(world: &mut BindlineWorld) {
    world.token = Some(CancellationToken::new());
}

#[given("a cancellation token that is already cancelled")]
async fn given_cancelled_token(world: &mut BindlineWorld) {
    let token = CancellationToken::new();
    token.cancel();
    world.token = Some(token);
}

#[given("the token is cancelled while forecasts are being fetched")]
async fn given_cancel_during_fetch(world: &mut BindlineWorld) {
    let token = world.token.get_or_insert_with(CancellationToken::new).clone();
    world.service.cancel_during_fetch(token);
}

#[when("I initialize the forecast page")]
async fn when_initialize_fetch_data(world: &mut BindlineWorld) {
    let token = world.token.clone();
    let initializer = std::sync::Arc::clone(world.fetch_data().initializer());
    let result = initializer.initialize_async(token.as_ref()).await;
    world.record(result);
}

#[when("I initialize the forecast page without a token")]
async fn when_initialize_without_token(world: &mut BindlineWorld) {
    let initializer = std::sync::Arc::clone(world.fetch_data().initializer());
    let result = initializer.initialize_async(None).await;
    world.record(result);
}

#[then(regex = r"^the forecast page should show (\d+) rows?$")]
async fn then_row_count(world: &mut BindlineWorld, expected: usize) {
    assert_eq!(world.fetch_data().view_model().rows().len(), expected);
}

#[then(regex = r"^the forecast model should hold (\d+) forecasts?$")]
async fn then_model_count(world: &mut BindlineWorld, expected: usize) {
    assert_eq!(world.root().fetch_data_model().forecasts().len(), expected);
}

#[then("the forecast page should show:")]
async fn then_rows(world: &mut BindlineWorld, step: &Step) {
    let table = step.table.as_ref().expect("an expected row table");
    let rows = world.fetch_data().view_model().rows();
    let expected: Vec<&Vec<String>> = table.rows.iter().skip(1).collect();

    assert_eq!(rows.len(), expected.len());
    for (row, expected) in rows.iter().zip(expected) {
        assert_eq!(row.date, expected[0]);
        assert_eq!(row.temperature_c.to_string(), expected[1]);
        assert_eq!(row.temperature_f.to_string(), expected[2]);
        assert_eq!(row.summary, expected[3]);
    }
}

#[then(regex = r"^the forecast service should have been called (\d+) times?$")]
async fn then_service_calls(world: &mut BindlineWorld, expected: usize) {
    assert_eq!(world.service.calls(), expected);
}

#[then(regex = r#"^the last error should be a fetch failure containing "([^"]+)"$"#)]
async fn then_fetch_failure(world: &mut BindlineWorld, message: String) {
    match world.last_error.as_ref() {
        Some(error @ MvvmError::Fetch(_)) => assert!(error.to_string().contains(&message)),
        other => panic!("expected a fetch failure, got {other:?}"),
    }
}

#[then(regex = r#"^the last error should be an invalid argument named "(\w+)"$"#)]
async fn then_invalid_argument(world: &mut BindlineWorld, expected: String) {
    match world.last_error.as_ref() {
        Some(MvvmError::InvalidArgument { name, .. }) => assert_eq!(*name, expected),
        other => panic!("expected an invalid argument, got {other:?}"),
    }
}
