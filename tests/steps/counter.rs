//! Step definitions for the counter page
//!
//! Covers the two-way binding between `CounterModel.Counter` and
//! `CounterVm.CurrentCounter`, the increment command and data source lifecycle.

use crate::common::world::BindlineWorld;
use bindline::mvvm::{DataSourceState, MvvmError, ReentryPolicy};
use cucumber::{given, then, when};
use tracing::debug;

#[given(regex = r"^the counter seed is (-?\d+)$")]
async fn given_counter_seed(world: &mut BindlineWorld, seed: i32) {
    world.config.counter_seed = seed;
}

#[given("the session tolerates repeated start and create")]
async fn given_tolerant_session(world: &mut BindlineWorld) {
    world.config.reentry_policy = ReentryPolicy::Tolerant;
}

#[given("the counter page is seeded while it is created")]
async fn given_initialize_on_create(world: &mut BindlineWorld) {
    world.config.initialize_on_create = true;
}

#[given("the counter page has been created")]
async fn given_counter_page_created(world: &mut BindlineWorld) {
    world.create_counter_page();
}

#[when("I create the counter page")]
async fn when_create_counter_page(world: &mut BindlineWorld) {
    world.create_counter_page();
}

#[given("the counter page has been created and initialized")]
async fn given_counter_page_initialized(world: &mut BindlineWorld) {
    world.create_counter_page();
    world
        .counter()
        .initializer()
        .initialize()
        .expect("counter initializer");
    world.clear_notifications();
}

#[when("I initialize the counter page")]
async fn when_initialize_counter(world: &mut BindlineWorld) {
    let result = world.counter().initializer().initialize();
    world.record(result);
}

#[when(regex = r"^I execute the increment command (\d+) times?$")]
async fn when_execute_increment(world: &mut BindlineWorld, times: usize) {
    let command = world
        .counter()
        .view_model()
        .increment_count_command()
        .expect("increment command should be bound");
    for _ in 0..times {
        let result = command.execute(&());
        world.record(result);
    }
}

#[when(regex = r"^the view model counter is set to (-?\d+)$")]
async fn when_view_model_set(world: &mut BindlineWorld, value: i32) {
    let result = world.counter().view_model().set_current_counter(value);
    debug!("set_current_counter({value}) -> {result:?}");
    world.record(result);
}

#[when(regex = r"^the model counter is set to (-?\d+)$")]
async fn when_model_set(world: &mut BindlineWorld, value: i32) {
    let result = world.root().counter_model().set_counter(value);
    world.record(result);
}

#[when("I start the counter data source again")]
async fn when_start_again(world: &mut BindlineWorld) {
    let result = world.counter().data_source().start();
    world.record(result);
}

#[when("I dispose the counter data source")]
async fn when_dispose(world: &mut BindlineWorld) {
    world.counter().data_source().dispose();
}

#[then(regex = r"^the model counter should be (-?\d+)$")]
async fn then_model_counter(world: &mut BindlineWorld, expected: i32) {
    assert_eq!(world.root().counter_model().counter(), expected);
}

#[then(regex = r"^the view model counter should be (-?\d+)$")]
async fn then_view_model_counter(world: &mut BindlineWorld, expected: i32) {
    assert_eq!(world.counter().view_model().current_counter(), expected);
}

#[then(regex = r#"^the view model should have raised "(\w+)" (\d+) times?$"#)]
async fn then_vm_raised(world: &mut BindlineWorld, property: String, times: usize) {
    let count = world
        .vm_notifications
        .lock()
        .iter()
        .filter(|name| **name == property)
        .count();
    assert_eq!(count, times, "notifications: {:?}", world.vm_notifications.lock());
}

#[then(regex = r#"^the model should have raised "(\w+)" (\d+) times?$"#)]
async fn then_model_raised(world: &mut BindlineWorld, property: String, times: usize) {
    let count = world
        .model_notifications
        .lock()
        .iter()
        .filter(|name| **name == property)
        .count();
    assert_eq!(count, times, "notifications: {:?}", world.model_notifications.lock());
}

#[then("the increment command should be executable")]
async fn then_command_executable(world: &mut BindlineWorld) {
    let command = world
        .counter()
        .view_model()
        .increment_count_command()
        .expect("increment command should be bound");
    assert!(command.can_execute(&()));
    assert_eq!(command.name(), "IncrementCount");
}

#[then(regex = r"^the counter data source should be (created|started|disposed)$")]
async fn then_data_source_state(world: &mut BindlineWorld, state: String) {
    let expected = match state.as_str() {
        "created" => DataSourceState::Created,
        "started" => DataSourceState::Started,
        _ => DataSourceState::Disposed,
    };
    assert_eq!(world.counter().data_source().state(), expected);
}

#[then("the counter factory should report it was created")]
async fn then_factory_created(world: &mut BindlineWorld) {
    use bindline::mvvm::Factory;
    let factory = world.counter_factory.as_ref().expect("counter factory");
    assert!(factory.is_created());
}

#[then(regex = r"^the last error should be (AlreadyStarted|AlreadyCreated|Disposed)$")]
async fn then_lifecycle_error(world: &mut BindlineWorld, kind: String) {
    let error = world.last_error.as_ref().expect("an error should have been recorded");
    let matched = match kind.as_str() {
        "AlreadyStarted" => matches!(error, MvvmError::AlreadyStarted(_)),
        "AlreadyCreated" => matches!(error, MvvmError::AlreadyCreated(_)),
        _ => matches!(error, MvvmError::Disposed(_)),
    };
    assert!(matched, "unexpected error: {error:?}");
}

#[then("no error should have been recorded")]
async fn then_no_error(world: &mut BindlineWorld) {
    assert!(world.last_error.is_none(), "unexpected error: {:?}", world.last_error);
}
