//! Step definitions for key resolution

use crate::common::world::BindlineWorld;
use bindline::mvvm::MvvmError;
use cucumber::{then, when};

#[when(regex = r#"^I resolve the data source "([^"]+)"$"#)]
async fn when_resolve_data_source(world: &mut BindlineWorld, token: String) {
    let result = world.root().data_sources().resolve_token(&token);
    if let Some(data_source) = world.record(result) {
        tracing::debug!("Resolved {}", data_source.name());
        world.resolved_name = Some(data_source.name());
    }
}

#[then(regex = r#"^the resolved data source should be named "(\w+)"$"#)]
async fn then_resolved_name(world: &mut BindlineWorld, expected: String) {
    assert_eq!(world.resolved_name, Some(expected.as_str()));
}

#[then(regex = r#"^the last error should be a missing key "([^"]+)"$"#)]
async fn then_missing_key(world: &mut BindlineWorld, expected: String) {
    match world.last_error.as_ref() {
        Some(MvvmError::KeyNotFound(key)) => assert_eq!(key, &expected),
        other => panic!("expected a missing key, got {other:?}"),
    }
}
